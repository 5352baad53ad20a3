//! Conflict log commands: list, show, new, progress.

use clap::Subcommand;

use crate::model::{ConflictDraft, ConflictLogEntry, Filter, ProgressUpdate};
use crate::service::ConflictLogService;

use super::{Context, StatusArg, format, load_pages, page_count};

#[derive(Debug, Subcommand)]
pub enum ConflictsCommand {
    /// List logged conflicts.
    List {
        /// Match titles and descriptions.
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// How many pages to show.
        #[arg(long, default_value_t = 1, value_parser = page_count())]
        pages: usize,
    },

    /// Show a conflict with its progress and suggested solutions.
    Show { id: u64 },

    /// Log a new conflict. Requires a signed-in user.
    New {
        /// A short name for the conflict.
        title: String,

        /// What happened.
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Record progress toward resolving a conflict.
    ///
    /// 100 marks the conflict resolved.
    Progress {
        id: u64,

        /// Percent resolved, 0 to 100.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: u8,

        /// What changed.
        #[arg(long)]
        note: String,
    },
}

pub(super) fn run(ctx: &Context<'_>, command: ConflictsCommand) -> Result<(), String> {
    match command {
        ConflictsCommand::List {
            search,
            status,
            pages,
        } => cmd_list(ctx, search.unwrap_or_default(), status.as_ref(), pages),
        ConflictsCommand::Show { id } => cmd_show(ctx, id),
        ConflictsCommand::New { title, description } => cmd_new(ctx, title, description),
        ConflictsCommand::Progress { id, progress, note } => {
            cmd_progress(ctx, id, progress, note)
        }
    }
}

fn cmd_list(
    ctx: &Context<'_>,
    search: String,
    status: Option<&StatusArg>,
    pages: usize,
) -> Result<(), String> {
    let service = ConflictLogService::seeded();
    let status = status.map(StatusArg::to_domain);
    let list = load_pages::<ConflictLogEntry>(&service, ctx.config.items_per_page, pages, |q| {
        q.search = search;
        q.filters.status = Filter::from(status);
    })?;
    ctx.print_list(&list, format::conflict_line)
}

fn cmd_show(ctx: &Context<'_>, id: u64) -> Result<(), String> {
    let mut service = ConflictLogService::seeded();
    let detail = service
        .detail(id)
        .ok_or_else(|| format!("no conflict with id {id}"))?;
    ctx.print(&detail, format::conflict_detail)
}

fn cmd_new(ctx: &Context<'_>, title: String, description: String) -> Result<(), String> {
    // Surface the sign-in hint instead of the generic failure below.
    ctx.session.current_user().map_err(|e| e.to_string())?;

    let mut service = ConflictLogService::seeded();
    let entry = service
        .create(ConflictDraft { title, description }, ctx.session)
        .ok_or("failed to log conflict")?;
    ctx.print(&entry, format::conflict_line)
}

fn cmd_progress(ctx: &Context<'_>, id: u64, progress: u8, note: String) -> Result<(), String> {
    let mut service = ConflictLogService::seeded();
    let update = ProgressUpdate {
        progress: Some(progress),
        description: Some(note),
    };
    if !service.update_progress(id, update) {
        return Err(format!("failed to record progress on conflict {id}"));
    }
    let detail = service
        .detail(id)
        .ok_or_else(|| format!("no conflict with id {id}"))?;
    ctx.print(&detail, format::conflict_detail)
}
