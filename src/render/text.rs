//! Plain text extraction from rendered markup.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"))
}

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"))
}

fn space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Extract readable text from markup.
///
/// Drops comments and tags, decodes entities, and collapses whitespace.
pub fn extract_text(html: &str) -> String {
    let text = comment_re().replace_all(html, "");
    let text = tag_re().replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    space_re().replace_all(&text, " ").trim().to_string()
}

/// Text content of every `<div class="{class}">` whose content is plain text,
/// decoded, in document order.
///
/// Elements whose content contains markup are skipped, so escaped text comes
/// back exactly while anything that turned into structure does not.
pub fn extract_by_class(html: &str, class: &str) -> Vec<String> {
    let pattern = format!(r#"<div class="{}">([^<]*)</div>"#, regex::escape(class));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            log::warn!("Cannot match class '{}': {}", class, e);
            return Vec::new();
        }
    };

    re.captures_iter(html)
        .map(|caps| html_escape::decode_html_entities(&caps[1]).into_owned())
        .collect()
}
