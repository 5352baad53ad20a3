//! CLI interface for Kinship.
//!
//! Each subcommand is non-interactive: arguments in, text or JSON out.
//! The CLI stands in for the app's pages. List commands drive a
//! [`ListController`] the way a scrolling page would, loading more until the
//! requested number of pages is shown.
//!
//! Every run starts from the seeded mock store, so mutations last for one
//! invocation only.

mod conflicts;
mod dialogues;
mod format;
mod library;
mod surveys;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::Config;
use crate::i18n::Translator;
use crate::list::{Ack, ListController, Notice, Phase};
use crate::model::{ConflictStatus, Entry, ListQuery, ResourceKind, ScoreCategory, Topic};
use crate::service::ListSource;
use crate::session::Session;

pub use conflicts::ConflictsCommand;
pub use dialogues::DialoguesCommand;
pub use surveys::SurveysCommand;

/// Kinship: family engagement from the command line.
#[derive(Debug, Parser)]
#[command(name = "kinship", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Act as this user. Overrides `KINSHIP_USER` and the configured user.
    #[arg(long = "as", global = true)]
    pub user: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level. `RUST_LOG` still takes precedence.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: working through a conflict
  1. kinship library --topic conflict-resolution
  2. kinship --as maya conflicts new "Dog walking" --description "Who walks him after school?"
     → prints the new conflict
  3. kinship conflicts show 5
  4. kinship conflicts progress 5 --progress 100 --note "Rota on the fridge"

Surveys:
  kinship surveys list
  kinship surveys show 1
  kinship surveys take 1 --answer 1=2 --answer 2=3
  kinship surveys score 4 4 2 1"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the content library.
    Library {
        /// Match titles, summaries, and authors.
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        #[arg(long, value_enum)]
        topic: Option<TopicArg>,

        /// How many pages to show.
        #[arg(long, default_value_t = 1, value_parser = page_count())]
        pages: usize,
    },

    /// Show one resource with related reading.
    Resource {
        id: u64,
    },

    /// Log family conflicts and track progress toward resolution.
    Conflicts {
        #[command(subcommand)]
        command: ConflictsCommand,
    },

    /// Take the family conflict survey and review past results.
    Surveys {
        #[command(subcommand)]
        command: SurveysCommand,
    },

    /// Guided family dialogues: scripts and the sessions held.
    Dialogues {
        #[command(subcommand)]
        command: DialoguesCommand,
    },
}

/// CLI-facing resource kind, mapped to the domain `ResourceKind`.
#[derive(Debug, Clone, ValueEnum)]
pub enum KindArg {
    Article,
    Video,
    Guide,
    Worksheet,
    Podcast,
}

impl KindArg {
    fn to_domain(&self) -> ResourceKind {
        match self {
            Self::Article => ResourceKind::Article,
            Self::Video => ResourceKind::Video,
            Self::Guide => ResourceKind::Guide,
            Self::Worksheet => ResourceKind::Worksheet,
            Self::Podcast => ResourceKind::Podcast,
        }
    }
}

/// CLI-facing topic, mapped to the domain `Topic`.
#[derive(Debug, Clone, ValueEnum)]
pub enum TopicArg {
    Communication,
    ConflictResolution,
    EmotionalWellbeing,
    Academics,
    ScreenTime,
    Boundaries,
}

impl TopicArg {
    fn to_domain(&self) -> Topic {
        match self {
            Self::Communication => Topic::Communication,
            Self::ConflictResolution => Topic::ConflictResolution,
            Self::EmotionalWellbeing => Topic::EmotionalWellbeing,
            Self::Academics => Topic::Academics,
            Self::ScreenTime => Topic::ScreenTime,
            Self::Boundaries => Topic::Boundaries,
        }
    }
}

/// CLI-facing conflict status, mapped to the domain `ConflictStatus`.
#[derive(Debug, Clone, ValueEnum)]
pub enum StatusArg {
    New,
    InProgress,
    Resolved,
}

impl StatusArg {
    fn to_domain(&self) -> ConflictStatus {
        match self {
            Self::New => ConflictStatus::New,
            Self::InProgress => ConflictStatus::InProgress,
            Self::Resolved => ConflictStatus::Resolved,
        }
    }
}

/// CLI-facing score category, mapped to the domain `ScoreCategory`.
#[derive(Debug, Clone, ValueEnum)]
pub enum CategoryArg {
    Low,
    Medium,
    High,
}

impl CategoryArg {
    fn to_domain(&self) -> ScoreCategory {
        match self {
            Self::Low => ScoreCategory::Low,
            Self::Medium => ScoreCategory::Medium,
            Self::High => ScoreCategory::High,
        }
    }
}

/// Parser for `--pages`: at least one page.
fn page_count() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::new().range(1..)
}

/// What every command needs besides its own arguments.
struct Context<'a> {
    config: &'a Config,
    session: &'a dyn Session,
    json: bool,
    translator: Translator,
}

impl Context<'_> {
    /// Print `value` as JSON, or the text `human` renders from it.
    fn print<V: Serialize>(
        &self,
        value: &V,
        human: impl FnOnce(&Translator, &V) -> String,
    ) -> Result<(), String> {
        if self.json {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("failed to serialize output: {e}"))?;
            println!("{json}");
        } else {
            println!("{}", human(&self.translator, value));
        }
        Ok(())
    }

    /// Print the loaded pages of a list followed by a paging footer.
    fn print_list<T: Entry + Serialize>(
        &self,
        list: &ListController<T>,
        line: impl Fn(&Translator, &T) -> String,
    ) -> Result<(), String> {
        let listing = Listing {
            items: list.items(),
            current_page: list.current_page(),
            total_pages: list.total_pages(),
            has_more: list.has_more(),
        };
        self.print(&listing, |t, l| {
            let mut lines: Vec<String> = l.items.iter().map(|item| line(t, item)).collect();
            lines.push(format::list_footer(
                t,
                l.items.len(),
                l.current_page,
                l.total_pages,
                l.has_more,
            ));
            lines.join("\n")
        })
    }
}

/// JSON shape of a paged list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Listing<'a, T> {
    items: &'a [T],
    current_page: usize,
    total_pages: usize,
    has_more: bool,
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, config: &Config, session: &dyn Session) -> Result<(), String> {
    let ctx = Context {
        config,
        session,
        json: cli.json,
        translator: Translator::english(),
    };

    match cli.command {
        Command::Library {
            search,
            kind,
            topic,
            pages,
        } => library::cmd_library(
            &ctx,
            search.unwrap_or_default(),
            kind.as_ref().map(KindArg::to_domain),
            topic.as_ref().map(TopicArg::to_domain),
            pages,
        ),
        Command::Resource { id } => library::cmd_resource(&ctx, id),
        Command::Conflicts { command } => conflicts::run(&ctx, command),
        Command::Surveys { command } => surveys::run(&ctx, command),
        Command::Dialogues { command } => dialogues::run(&ctx, command),
    }
}

/// A JSON-printing context for exercising commands directly.
#[cfg(test)]
fn test_context<'a>(config: &'a Config, session: &'a dyn Session) -> Context<'a> {
    Context {
        config,
        session,
        json: true,
        translator: Translator::english(),
    }
}

/// Load a list through a controller, first applying `change` to its query,
/// then loading more until `pages` pages are shown or none remain.
fn load_pages<T: Entry>(
    source: &impl ListSource<T>,
    items_per_page: usize,
    pages: usize,
    change: impl FnOnce(&mut ListQuery<T::Filters>),
) -> Result<ListController<T>, String> {
    let mut list = ListController::new(items_per_page);
    list.apply_filter(source, change);
    while list.current_page() < pages && list.has_more() {
        list.load_more(source, Ack::none());
    }
    if list.phase() == Phase::Error {
        return Err(Translator::english().translate(Notice::LoadFailed.label_key()));
    }
    Ok(list)
}
