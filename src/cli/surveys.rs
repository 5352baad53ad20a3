//! Survey commands: list, history, show, take, score.

use clap::Subcommand;

use crate::model::{Answer, Filter, SurveyHistoryItem};
use crate::scoring::score_answers;
use crate::service::SurveyService;

use super::{CategoryArg, Context, format, load_pages, page_count};

#[derive(Debug, Subcommand)]
pub enum SurveysCommand {
    /// List the surveys that can be taken.
    List,

    /// List completed surveys.
    History {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// How many pages to show.
        #[arg(long, default_value_t = 1, value_parser = page_count())]
        pages: usize,
    },

    /// Show a survey's questions and answer options.
    Show { id: u64 },

    /// Take a survey and record the result.
    ///
    /// Questions left out count as unanswered.
    Take {
        id: u64,

        /// An answer as `QUESTION=VALUE`, e.g. `--answer 2=3`. Repeatable.
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<Answer>,
    },

    /// Score answer values without recording anything.
    Score {
        /// Selected option values, 0 to 4.
        #[arg(value_parser = clap::value_parser!(u8).range(0..=4))]
        values: Vec<u8>,
    },
}

pub(super) fn run(ctx: &Context<'_>, command: SurveysCommand) -> Result<(), String> {
    match command {
        SurveysCommand::List => cmd_list(ctx),
        SurveysCommand::History { category, pages } => cmd_history(ctx, category.as_ref(), pages),
        SurveysCommand::Show { id } => cmd_show(ctx, id),
        SurveysCommand::Take { id, answers } => cmd_take(ctx, id, &answers),
        SurveysCommand::Score { values } => cmd_score(ctx, &values),
    }
}

fn cmd_list(ctx: &Context<'_>) -> Result<(), String> {
    let service = SurveyService::seeded(ctx.config.score_bands);
    let surveys = service.surveys();
    ctx.print(&surveys, |_, list| {
        list.iter()
            .map(format::survey_line)
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn cmd_history(
    ctx: &Context<'_>,
    category: Option<&CategoryArg>,
    pages: usize,
) -> Result<(), String> {
    let service = SurveyService::seeded(ctx.config.score_bands);
    let category = category.map(CategoryArg::to_domain);
    let list = load_pages::<SurveyHistoryItem>(&service, ctx.config.items_per_page, pages, |q| {
        q.filters.category = Filter::from(category);
    })?;
    ctx.print_list(&list, format::history_line)
}

fn cmd_show(ctx: &Context<'_>, id: u64) -> Result<(), String> {
    let mut service = SurveyService::seeded(ctx.config.score_bands);
    let survey = service
        .survey(id)
        .ok_or_else(|| format!("no survey with id {id}"))?;
    ctx.print(&survey, |_, s| format::survey_detail(s))
}

fn cmd_take(ctx: &Context<'_>, id: u64, answers: &[Answer]) -> Result<(), String> {
    let mut service = SurveyService::seeded(ctx.config.score_bands);
    let item = service
        .submit(id, answers)
        .ok_or_else(|| format!("survey {id} was not recorded"))?;
    ctx.print(&item, format::history_line)
}

fn cmd_score(ctx: &Context<'_>, values: &[u8]) -> Result<(), String> {
    let score = score_answers(values, &ctx.config.score_bands);
    ctx.print(&score, format::score_line)
}

/// Parse `QUESTION=VALUE` into an answer.
fn parse_answer(s: &str) -> Result<Answer, String> {
    let (question, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{s}'"))?;
    let question_id = question
        .trim()
        .parse()
        .map_err(|_| format!("invalid question id '{question}'"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid answer value '{value}'"))?;
    Ok(Answer { question_id, value })
}
