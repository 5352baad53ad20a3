//! Output formatting for CLI display.

use crate::i18n::Translator;
use crate::model::{
    ConflictLogDetail, ConflictLogEntry, DialogueScript, DialogueSession, Resource, ResourceDetail,
    Survey, SurveyHistoryItem,
};
use crate::scoring::SurveyScore;

pub(super) fn resource_line(t: &Translator, r: &Resource) -> String {
    format!(
        "#{:<3} {}  [{}, {}]  {} min",
        r.id,
        r.title,
        t.translate(r.kind.label_key()),
        t.translate(r.topic.label_key()),
        r.minutes
    )
}

pub(super) fn resource_detail(t: &Translator, d: &ResourceDetail) -> String {
    let r = &d.resource;
    let mut lines = vec![
        format!("#{} {}", r.id, r.title),
        format!(
            "{} · {} · {} · {} min",
            t.translate(r.kind.label_key()),
            t.translate(r.topic.label_key()),
            r.author,
            r.minutes
        ),
        format!("Published {}", r.published_on),
        String::new(),
        r.summary.clone(),
    ];
    if !d.related.is_empty() {
        lines.push(String::new());
        lines.push("Related:".to_string());
        lines.extend(d.related.iter().map(|r| format!("  {}", resource_line(t, r))));
    }
    lines.join("\n")
}

pub(super) fn conflict_line(t: &Translator, e: &ConflictLogEntry) -> String {
    format!(
        "#{:<3} {}  [{}, {}%]  by {} on {}",
        e.id,
        e.title,
        t.translate(e.status.label_key()),
        e.progress,
        e.created_by,
        e.created_on
    )
}

pub(super) fn conflict_detail(t: &Translator, d: &ConflictLogDetail) -> String {
    let e = &d.entry;
    let mut lines = vec![conflict_line(t, e)];
    if !e.description.is_empty() {
        lines.push(String::new());
        lines.push(e.description.clone());
    }
    if !e.updates.is_empty() {
        lines.push(String::new());
        lines.push("Progress:".to_string());
        lines.extend(
            e.updates
                .iter()
                .map(|u| format!("  {} {:>3}%  {}", u.recorded_on, u.progress, u.description)),
        );
    }
    if !d.solutions.is_empty() {
        lines.push(String::new());
        lines.push("Try:".to_string());
        lines.extend(
            d.solutions
                .iter()
                .map(|s| format!("  {}: {}", s.title, s.description)),
        );
    }
    lines.join("\n")
}

pub(super) fn history_line(t: &Translator, h: &SurveyHistoryItem) -> String {
    format!(
        "#{:<3} {}  {}  {}/100 ({})  {} answered",
        h.id,
        h.title,
        h.completed_on,
        h.score,
        t.translate(h.category.label_key()),
        h.answered
    )
}

pub(super) fn survey_line(s: &Survey) -> String {
    format!("#{:<3} {}  {} question(s)", s.id, s.title, s.questions.len())
}

pub(super) fn survey_detail(s: &Survey) -> String {
    let mut lines = vec![format!("#{} {}", s.id, s.title), s.description.clone()];
    for q in &s.questions {
        lines.push(String::new());
        lines.push(format!("{}. {}", q.id, q.text));
        let options: Vec<String> = q
            .options
            .iter()
            .map(|o| format!("{}={}", o.value, o.label))
            .collect();
        lines.push(format!("   {}", options.join("  ")));
    }
    lines.join("\n")
}

pub(super) fn score_line(t: &Translator, score: &SurveyScore) -> String {
    format!(
        "{}/100 ({}) from {} answer(s)",
        score.scaled,
        t.translate(score.category.label_key()),
        score.answered
    )
}

pub(super) fn session_line(t: &Translator, s: &DialogueSession) -> String {
    format!(
        "#{:<3} {}  [{}]  {} with {}  {} min",
        s.id,
        s.title,
        t.translate(s.topic.label_key()),
        s.held_on,
        s.participants.join(", "),
        s.minutes
    )
}

pub(super) fn script_line(t: &Translator, s: &DialogueScript) -> String {
    format!(
        "#{:<3} {}  [{}]  {} step(s), {} min",
        s.id,
        s.title,
        t.translate(s.topic.label_key()),
        s.steps.len(),
        s.minutes()
    )
}

pub(super) fn script_detail(t: &Translator, s: &DialogueScript) -> String {
    let mut lines = vec![
        format!("#{} {}", s.id, s.title),
        format!("{} · {} min", t.translate(s.topic.label_key()), s.minutes()),
    ];
    for (n, step) in s.steps.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {} ({} min)", n + 1, step.title, step.minutes));
        lines.push(format!("   {}", step.prompt));
    }
    lines.join("\n")
}

/// The line under a list: what is shown and whether more exists.
pub(super) fn list_footer(
    t: &Translator,
    shown: usize,
    current_page: usize,
    total_pages: usize,
    has_more: bool,
) -> String {
    if shown == 0 {
        return t.translate("list.empty");
    }
    let state = if has_more {
        t.translate("list.more")
    } else {
        t.translate("list.end")
    };
    format!("Page {current_page} of {total_pages} · {shown} shown · {state}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::{ConflictStatus, ScoreCategory};
    use crate::scoring::{ScoreBands, score_answers};

    fn entry() -> ConflictLogEntry {
        ConflictLogEntry {
            id: 7,
            title: "Dog walking".to_string(),
            description: String::new(),
            status: ConflictStatus::InProgress,
            progress: 40,
            created_by: "maya".to_string(),
            created_on: date(2024, 5, 2),
            updates: Vec::new(),
        }
    }

    #[test]
    fn format_conflict_line() {
        let t = Translator::english();
        assert_eq!(
            conflict_line(&t, &entry()),
            "#7   Dog walking  [In progress, 40%]  by maya on 2024-05-02"
        );
    }

    #[test]
    fn conflict_detail_without_extras_is_one_line() {
        let t = Translator::english();
        let detail = ConflictLogDetail {
            entry: entry(),
            solutions: Vec::new(),
        };
        assert_eq!(conflict_detail(&t, &detail), conflict_line(&t, &entry()));
    }

    #[test]
    fn format_score() {
        let t = Translator::english();
        let score = score_answers(&[4, 4, 4, 4], &ScoreBands::default());
        assert_eq!(score.category, ScoreCategory::High);
        assert_eq!(score_line(&t, &score), "100/100 (High conflict) from 4 answer(s)");
    }

    #[test]
    fn format_script_line() {
        let t = Translator::english();
        let script = crate::backend::seed::dialogue_scripts().remove(0);
        assert_eq!(
            script_line(&t, &script),
            "#1   Weekly Check-in  [Communication]  3 step(s), 25 min"
        );
    }

    #[test]
    fn footer_states() {
        let t = Translator::english();
        assert_eq!(list_footer(&t, 0, 1, 0, false), "Nothing to show");
        assert_eq!(
            list_footer(&t, 10, 1, 3, true),
            "Page 1 of 3 · 10 shown · More available"
        );
        assert_eq!(
            list_footer(&t, 25, 3, 3, false),
            "Page 3 of 3 · 25 shown · End of list"
        );
    }
}
