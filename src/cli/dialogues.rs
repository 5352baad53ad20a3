//! Dialogue commands: list, scripts, show, record.

use clap::Subcommand;

use crate::model::{DialogueSession, Filter, SessionDraft};
use crate::service::DialogueService;

use super::{Context, TopicArg, format, load_pages, page_count};

#[derive(Debug, Subcommand)]
pub enum DialoguesCommand {
    /// List dialogue sessions held so far.
    List {
        /// Match titles, participants, and reflections.
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        topic: Option<TopicArg>,

        /// How many pages to show.
        #[arg(long, default_value_t = 1, value_parser = page_count())]
        pages: usize,
    },

    /// List the scripts a session can follow.
    Scripts,

    /// Show a dialogue script step by step.
    Show { id: u64 },

    /// Record a session held from a script.
    Record {
        /// Script the session followed.
        script: u64,

        /// A participant. Repeatable.
        #[arg(long = "with", required = true)]
        participants: Vec<String>,

        /// How long it took. Defaults to the script's length.
        #[arg(long)]
        minutes: Option<u32>,

        /// What the family took away.
        #[arg(long, default_value = "")]
        reflection: String,
    },
}

pub(super) fn run(ctx: &Context<'_>, command: DialoguesCommand) -> Result<(), String> {
    match command {
        DialoguesCommand::List {
            search,
            topic,
            pages,
        } => cmd_list(ctx, search.unwrap_or_default(), topic.as_ref(), pages),
        DialoguesCommand::Scripts => cmd_scripts(ctx),
        DialoguesCommand::Show { id } => cmd_show(ctx, id),
        DialoguesCommand::Record {
            script,
            participants,
            minutes,
            reflection,
        } => cmd_record(
            ctx,
            SessionDraft {
                script_id: script,
                participants,
                minutes,
                reflection,
            },
        ),
    }
}

fn cmd_list(
    ctx: &Context<'_>,
    search: String,
    topic: Option<&TopicArg>,
    pages: usize,
) -> Result<(), String> {
    let service = DialogueService::seeded();
    let topic = topic.map(TopicArg::to_domain);
    let list = load_pages::<DialogueSession>(&service, ctx.config.items_per_page, pages, |q| {
        q.search = search;
        q.filters.topic = Filter::from(topic);
    })?;
    ctx.print_list(&list, format::session_line)
}

fn cmd_scripts(ctx: &Context<'_>) -> Result<(), String> {
    let service = DialogueService::seeded();
    let scripts = service.scripts();
    ctx.print(&scripts, |t, list| {
        list.iter()
            .map(|s| format::script_line(t, s))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn cmd_show(ctx: &Context<'_>, id: u64) -> Result<(), String> {
    let mut service = DialogueService::seeded();
    let script = service
        .script(id)
        .ok_or_else(|| format!("no dialogue script with id {id}"))?;
    ctx.print(&script, format::script_detail)
}

fn cmd_record(ctx: &Context<'_>, draft: SessionDraft) -> Result<(), String> {
    let script_id = draft.script_id;
    let mut service = DialogueService::seeded();
    let session = service
        .record(draft)
        .ok_or_else(|| format!("session for script {script_id} was not recorded"))?;
    ctx.print(&session, format::session_line)
}
