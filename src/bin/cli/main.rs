mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use flashq_lib::filter::CategoryFilter;
use flashq_lib::flashcards::{Category, Collection, UnknownCategory};
use flashq_lib::view::{LoginForm, Page, SignupForm, Tab};

#[derive(Parser)]
#[command(name = "flashq", about = "Flash-Q flashcards CLI and TUI", version)]
struct Cli {
    /// Use a specific data directory (default: from config, then the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PageArg {
    Index,
    Login,
    Signup,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Index => Page::Index,
            PageArg::Login => Page::Login,
            PageArg::Signup => Page::Signup,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum TabArg {
    Mine,
    Public,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Mine => Tab::MyCards,
            TabArg::Public => Tab::PublicCards,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List cards
    List {
        /// Show the public sample cards instead of your own
        #[arg(long)]
        public: bool,
        /// Only cards in this category ("all" for every card)
        #[arg(long, default_value = "all", value_parser = category_tag)]
        category: String,
    },

    /// Create a new card
    Create {
        /// One of: science, math, programming, history, language
        #[arg(long)]
        category: Category,
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },

    /// Show or toggle the light/dark theme
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Export a page as a standalone HTML document
    Export {
        #[arg(long, value_enum, default_value = "index")]
        page: PageArg,
        /// Tab to show as active
        #[arg(long, value_enum, default_value = "mine")]
        tab: TabArg,
        /// Category filter to apply
        #[arg(long, value_parser = category_tag)]
        category: Option<String>,
        /// Output file (default: stdout)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Submit the login form
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Submit the signup form
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

/// Accept "all" or one of the known categories
fn category_tag(tag: &str) -> Result<String, UnknownCategory> {
    CategoryFilter::parse_known(tag).map(|filter| filter.as_str().to_string())
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(data_dir)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List { public, category }) => {
            let app = app::App::new(data_dir)?;
            let collection = if public {
                Collection::PublicCards
            } else {
                Collection::MyCards
            };
            commands::list::run(&app, collection, &category, &cli.format, use_color)?;
        }
        Some(Command::Create { category, question, answer }) => {
            let app = app::App::new(data_dir)?;
            commands::create::run(&app, category, &question, &answer, &cli.format, use_color)?;
        }
        Some(Command::Theme(subcmd)) => {
            let app = app::App::new(data_dir)?;
            let toggle = matches!(subcmd, ThemeCommand::Toggle);
            commands::theme::run(&app, toggle, &cli.format)?;
        }
        Some(Command::Export { page, tab, category, out }) => {
            let app = app::App::new(data_dir)?;
            commands::export::run(
                &app,
                page.into(),
                tab.into(),
                category.as_deref(),
                out.as_deref(),
            )?;
        }
        Some(Command::Login { email, password }) => {
            let app = app::App::new(data_dir)?;
            commands::auth::run_login(&app, LoginForm { email, password })?;
        }
        Some(Command::Signup {
            first_name,
            last_name,
            username,
            email,
            password,
            confirm_password,
        }) => {
            let app = app::App::new(data_dir)?;
            let form = SignupForm {
                first_name,
                last_name,
                username,
                email,
                password,
                confirm_password,
            };
            commands::auth::run_signup(&app, form)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(data_dir)?;
        }
    }

    Ok(())
}
