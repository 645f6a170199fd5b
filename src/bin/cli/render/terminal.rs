use flashq_lib::render::{CardUnit, GridView};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

const WIDTH: usize = 80;

/// Render the visible cards of a grid to terminal text
pub fn render_grid(grid: &GridView, use_color: bool) -> String {
    if grid.is_empty_state() {
        return paint(grid.empty_message(), Color::DIM, use_color);
    }

    let cards: Vec<String> = grid
        .visible_units()
        .map(|unit| render_unit(unit, use_color).join("\n"))
        .collect();

    if cards.is_empty() {
        return paint("(no cards in this category)", Color::DIM, use_color);
    }

    cards.join("\n\n")
}

/// Lines for one card: header, question, answer
pub fn render_unit(unit: &CardUnit, use_color: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        paint(&format!("[{}]", unit.label), Color::CYAN, use_color),
        paint(&format!("#{}", unit.id), Color::GRAY, use_color),
    )];

    lines.push(paint("  Q:", Color::BOLD, use_color));
    lines.extend(wrap_lines(&unit.question, "    ", WIDTH));
    lines.push(paint("  A:", Color::BOLD, use_color));
    lines.extend(wrap_lines(&unit.answer, "    ", WIDTH));
    lines
}

pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Word-wrap `text` to `max_width` columns, prefixing every line
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= effective_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(format!("{}{}", prefix, current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(format!("{}{}", prefix, current_line));
        }
    }

    if lines.is_empty() {
        lines.push(prefix.to_string());
    }

    lines
}
