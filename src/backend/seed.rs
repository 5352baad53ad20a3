//! Seeded mock data for every feature.
//!
//! Stands in for the platform backend until a remote [`super::Backend`]
//! exists. Every call returns a fresh copy.

use jiff::{Span, civil::date};

use crate::model::{
    AnswerOption, ConflictLogEntry, ConflictStatus, DialogueScript, DialogueSession, DialogueStep,
    ProgressNote, Question, Resource, ResourceKind, ScoreCategory, Solution, Survey,
    SurveyHistoryItem, Topic,
};

/// The content library, 25 entries.
pub fn resources() -> Vec<Resource> {
    use ResourceKind::{Article, Guide, Podcast, Video, Worksheet};
    use Topic::{
        Academics, Boundaries, Communication, ConflictResolution, EmotionalWellbeing, ScreenTime,
    };

    let rows: [(&str, &str, ResourceKind, Topic, &str, u32); 25] = [
        (
            "Listening Without Fixing",
            "Active listening habits for parents of teens.",
            Article,
            Communication,
            "A. Lindqvist",
            8,
        ),
        (
            "The Family Meeting Playbook",
            "Run a weekly family meeting everyone looks forward to.",
            Guide,
            Communication,
            "J. Moreno",
            15,
        ),
        (
            "Cooling Down Before Talking",
            "A short video on the pause-breathe-return technique.",
            Video,
            ConflictResolution,
            "K. Osei",
            4,
        ),
        (
            "Homework Without Tears",
            "Structuring after-school study time at home.",
            Article,
            Academics,
            "P. Nair",
            10,
        ),
        (
            "Screen Time Agreements",
            "Drafting a family media plan together.",
            Worksheet,
            ScreenTime,
            "R. Okafor",
            20,
        ),
        (
            "Naming Big Feelings",
            "Helping younger children put emotions into words.",
            Video,
            EmotionalWellbeing,
            "S. Haddad",
            7,
        ),
        (
            "Saying No Kindly",
            "Setting limits that keep the relationship intact.",
            Article,
            Boundaries,
            "M. Feld",
            9,
        ),
        (
            "Repair After an Argument",
            "Steps to reconnect once a family conflict has cooled.",
            Guide,
            ConflictResolution,
            "K. Osei",
            12,
        ),
        (
            "Talking With Teachers",
            "Preparing for a productive parent-teacher conference.",
            Podcast,
            Academics,
            "L. Brandt",
            25,
        ),
        (
            "Sleep, Phones, and Teens",
            "What the research says about devices at night.",
            Podcast,
            ScreenTime,
            "R. Okafor",
            32,
        ),
        (
            "Family Feelings Check-in",
            "A printable mood chart for the fridge.",
            Worksheet,
            EmotionalWellbeing,
            "S. Haddad",
            5,
        ),
        (
            "Sibling Squabbles",
            "When to step in and when to let children work it out.",
            Article,
            ConflictResolution,
            "T. Grant",
            11,
        ),
        (
            "Curfews That Stick",
            "Negotiating curfews with older children.",
            Guide,
            Boundaries,
            "M. Feld",
            14,
        ),
        (
            "Reading Together at Any Age",
            "Keeping shared reading alive past the picture-book years.",
            Video,
            Academics,
            "P. Nair",
            9,
        ),
        (
            "I-Statements in Practice",
            "Rewriting blame into requests, with worked examples.",
            Worksheet,
            Communication,
            "J. Moreno",
            18,
        ),
        (
            "Gaming Without Battles",
            "Finding middle ground on video games.",
            Video,
            ScreenTime,
            "D. Ferreira",
            6,
        ),
        (
            "Anxiety Before Exams",
            "Supporting a worried student through exam season.",
            Article,
            EmotionalWellbeing,
            "A. Lindqvist",
            10,
        ),
        (
            "Privacy and Trust",
            "How much privacy should a teenager have?",
            Podcast,
            Boundaries,
            "T. Grant",
            41,
        ),
        (
            "Mediating Between Co-Parents",
            "Keeping children out of adult disagreements.",
            Guide,
            ConflictResolution,
            "L. Brandt",
            22,
        ),
        (
            "Dinner Table Questions",
            "Conversation starters that go beyond 'fine'.",
            Worksheet,
            Communication,
            "D. Ferreira",
            3,
        ),
        (
            "Study Spaces at Home",
            "Setting up a calm place to learn.",
            Article,
            Academics,
            "P. Nair",
            7,
        ),
        (
            "Family Tech-Free Weekends",
            "One family's experiment with unplugging.",
            Video,
            ScreenTime,
            "R. Okafor",
            11,
        ),
        (
            "Grief in the Family",
            "Talking with children about loss.",
            Podcast,
            EmotionalWellbeing,
            "S. Haddad",
            37,
        ),
        (
            "Chores and Fairness",
            "Dividing household work without resentment.",
            Article,
            Boundaries,
            "M. Feld",
            8,
        ),
        (
            "After the Shouting",
            "A guided family dialogue for the morning after.",
            Guide,
            ConflictResolution,
            "K. Osei",
            16,
        ),
    ];

    // One release every nine days, starting in January 2024.
    rows.into_iter()
        .zip(1u64..)
        .zip((0i64..).step_by(9))
        .map(
            |(((title, summary, kind, topic, author, minutes), id), days)| Resource {
                id,
                title: title.into(),
                summary: summary.into(),
                kind,
                topic,
                author: author.into(),
                published_on: date(2024, 1, 1) + Span::new().days(days),
                minutes,
            },
        )
        .collect()
}

/// Conflicts already in the family log.
pub fn conflict_logs() -> Vec<ConflictLogEntry> {
    vec![
        ConflictLogEntry {
            id: 1,
            title: "Phone at the dinner table".into(),
            description: "Arguments every evening about phones during meals.".into(),
            status: ConflictStatus::InProgress,
            progress: 40,
            created_by: "parent".into(),
            created_on: date(2024, 3, 2),
            updates: vec![ProgressNote {
                progress: 40,
                description: "Agreed on a basket for phones during dinner.".into(),
                recorded_on: date(2024, 3, 9),
            }],
        },
        ConflictLogEntry {
            id: 2,
            title: "Homework before games".into(),
            description: "Disagreement about whether homework comes before screen time.".into(),
            status: ConflictStatus::New,
            progress: 0,
            created_by: "student".into(),
            created_on: date(2024, 3, 15),
            updates: vec![],
        },
        ConflictLogEntry {
            id: 3,
            title: "Sharing the bathroom in the morning".into(),
            description: "Siblings fighting over bathroom time before school.".into(),
            status: ConflictStatus::Resolved,
            progress: 100,
            created_by: "parent".into(),
            created_on: date(2024, 2, 1),
            updates: vec![
                ProgressNote {
                    progress: 50,
                    description: "Tried a schedule taped to the door.".into(),
                    recorded_on: date(2024, 2, 8),
                },
                ProgressNote {
                    progress: 100,
                    description: "Schedule has held for two weeks.".into(),
                    recorded_on: date(2024, 2, 22),
                },
            ],
        },
        ConflictLogEntry {
            id: 4,
            title: "Weekend curfew".into(),
            description: "Teen wants a later curfew on Saturdays.".into(),
            status: ConflictStatus::InProgress,
            progress: 70,
            created_by: "student".into(),
            created_on: date(2024, 4, 5),
            updates: vec![ProgressNote {
                progress: 70,
                description: "Trial of 11pm with a check-in text.".into(),
                recorded_on: date(2024, 4, 12),
            }],
        },
    ]
}

/// The solution library conflict details draw suggestions from.
///
/// The last two entries carry no keywords and serve as general advice.
pub fn solutions() -> Vec<Solution> {
    let rows: [(&str, &str, &[&str]); 6] = [
        (
            "Phone basket",
            "Everyone drops devices in a shared basket for an agreed window.",
            &["phone", "screen", "games", "device"],
        ),
        (
            "Written schedule",
            "Agree on a visible schedule for shared resources and revisit it weekly.",
            &["bathroom", "schedule", "sharing", "chores"],
        ),
        (
            "Trial period",
            "Try the requested change for two weeks with a check-in at the end.",
            &["curfew", "later", "weekend"],
        ),
        (
            "Work-then-play",
            "Finish agreed tasks first, then free time without reminders.",
            &["homework", "chores", "games"],
        ),
        (
            "Pause and return",
            "Either person can call a ten-minute pause; the talk resumes afterwards.",
            &[],
        ),
        (
            "Family meeting item",
            "Put the issue on the next family meeting agenda instead of arguing now.",
            &[],
        ),
    ];
    rows.into_iter()
        .map(|(title, description, keywords)| Solution {
            title: title.into(),
            description: description.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        })
        .collect()
}

/// The survey definitions.
pub fn surveys() -> Vec<Survey> {
    let frequency = |labels: [&str; 5]| -> Vec<AnswerOption> {
        labels
            .into_iter()
            .zip(0u8..)
            .map(|(label, value)| AnswerOption {
                label: label.into(),
                value,
            })
            .collect()
    };
    let often = ["Never", "Rarely", "Sometimes", "Often", "Always"];

    let question = |id: u64, text: &str| Question {
        id,
        text: text.into(),
        options: frequency(often),
    };

    vec![
        Survey {
            id: 1,
            title: "Family Conflict Survey".into(),
            description: "How often do disagreements at home turn into conflict?".into(),
            questions: vec![
                question(1, "We argue about the same things again and again."),
                question(2, "Disagreements end with someone leaving the room upset."),
                question(3, "Family members raise their voices during disagreements."),
                question(4, "It is hard to talk about problems calmly at home."),
            ],
        },
        Survey {
            id: 2,
            title: "Screen Time Check".into(),
            description: "How much do devices cause friction in your family?".into(),
            questions: vec![
                question(1, "Devices come up in arguments."),
                question(2, "Someone uses a device when they were asked not to."),
                question(3, "Screen time rules change without discussion."),
            ],
        },
    ]
}

/// Previously completed surveys.
pub fn survey_history() -> Vec<SurveyHistoryItem> {
    let rows: [(u64, &str, u8, ScoreCategory, usize, i8); 6] = [
        (1, "Family Conflict Survey", 75, ScoreCategory::High, 4, 1),
        (2, "Screen Time Check", 58, ScoreCategory::Medium, 3, 2),
        (1, "Family Conflict Survey", 56, ScoreCategory::Medium, 4, 3),
        (2, "Screen Time Check", 33, ScoreCategory::Low, 3, 4),
        (1, "Family Conflict Survey", 38, ScoreCategory::Medium, 4, 5),
        (1, "Family Conflict Survey", 19, ScoreCategory::Low, 4, 6),
    ];
    rows.into_iter()
        .zip(1u64..)
        .map(
            |((survey_id, title, score, category, answered, month), id)| SurveyHistoryItem {
                id,
                survey_id,
                title: title.into(),
                completed_on: date(2024, month, 10),
                score,
                category,
                answered,
            },
        )
        .collect()
}

/// Guided dialogue scripts.
pub fn dialogue_scripts() -> Vec<DialogueScript> {
    let step = |title: &str, prompt: &str, minutes: u32| DialogueStep {
        title: title.into(),
        prompt: prompt.into(),
        minutes,
    };
    vec![
        DialogueScript {
            id: 1,
            title: "Weekly Check-in".into(),
            topic: Topic::Communication,
            steps: vec![
                step(
                    "Highs and lows",
                    "Each person shares one high and one low from the week.",
                    10,
                ),
                step("Appreciations", "Thank someone for something specific.", 5),
                step(
                    "Looking ahead",
                    "What is one thing coming up that worries or excites you?",
                    10,
                ),
            ],
        },
        DialogueScript {
            id: 2,
            title: "After the Shouting".into(),
            topic: Topic::ConflictResolution,
            steps: vec![
                step("Settle", "Take three slow breaths together before starting.", 2),
                step("Each side", "Each person describes what happened using I-statements.", 15),
                step("Needs", "Name what each person needed in that moment.", 10),
                step("Next time", "Agree on one thing to try next time.", 8),
            ],
        },
        DialogueScript {
            id: 3,
            title: "Screens and Us".into(),
            topic: Topic::ScreenTime,
            steps: vec![
                step("Inventory", "List the devices in the house and who uses them when.", 10),
                step("Friction points", "When do devices cause arguments?", 10),
                step("Agreement", "Draft one rule everyone can live with.", 10),
            ],
        },
    ]
}

/// Dialogue sessions the family has held.
pub fn dialogue_sessions() -> Vec<DialogueSession> {
    vec![
        DialogueSession {
            id: 1,
            script_id: 1,
            title: "Weekly Check-in".into(),
            topic: Topic::Communication,
            participants: vec!["Mom".into(), "Maya".into(), "Leo".into()],
            held_on: date(2024, 4, 7),
            minutes: 25,
            reflection: "Leo is nervous about the swim meet.".into(),
        },
        DialogueSession {
            id: 2,
            script_id: 2,
            title: "After the Shouting".into(),
            topic: Topic::ConflictResolution,
            participants: vec!["Dad".into(), "Maya".into()],
            held_on: date(2024, 4, 11),
            minutes: 35,
            reflection: "Agreed to use a pause word when things heat up.".into(),
        },
        DialogueSession {
            id: 3,
            script_id: 3,
            title: "Screens and Us".into(),
            topic: Topic::ScreenTime,
            participants: vec!["Mom".into(), "Dad".into(), "Maya".into(), "Leo".into()],
            held_on: date(2024, 4, 20),
            minutes: 30,
            reflection: "No phones after 9pm on school nights.".into(),
        },
    ]
}
