//! Survey scoring: from selected answer values to a scaled score and category.
//!
//! Answers are valued 0 through [`MAX_OPTION_VALUE`]. The average value is
//! scaled to 0–100 and mapped onto [`ScoreBands`], which are validated to be
//! monotonic and to cover every score exactly once.

use serde::{Deserialize, Serialize};

use crate::model::{MAX_OPTION_VALUE, ScoreCategory};

/// Upper bounds (inclusive) of the low and medium bands; high takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScoreBands {
    pub low_max: u8,
    pub medium_max: u8,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            low_max: 33,
            medium_max: 66,
        }
    }
}

impl ScoreBands {
    pub fn new(low_max: u8, medium_max: u8) -> Result<Self, &'static str> {
        let bands = Self {
            low_max,
            medium_max,
        };
        bands.validate()?;
        Ok(bands)
    }

    /// Checks that every band is non-empty, so 0 is always low and 100 always high.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.low_max >= self.medium_max {
            return Err("low-max must be below medium-max");
        }
        if self.medium_max >= 100 {
            return Err("medium-max must be below 100");
        }
        Ok(())
    }

    pub fn category(&self, score: u8) -> ScoreCategory {
        if score <= self.low_max {
            ScoreCategory::Low
        } else if score <= self.medium_max {
            ScoreCategory::Medium
        } else {
            ScoreCategory::High
        }
    }
}

/// The outcome of scoring one survey submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyScore {
    pub scaled: u8,
    pub category: ScoreCategory,
    pub answered: usize,
}

/// Scales an average answer value to 0–100.
///
/// Zero when nothing was answered.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_score(average: f64, answered: usize) -> u8 {
    if answered == 0 || !average.is_finite() {
        return 0;
    }
    let scaled = (average / f64::from(MAX_OPTION_VALUE) * 100.0).round();
    scaled.clamp(0.0, 100.0) as u8
}

/// Scores a set of selected answer values.
#[allow(clippy::cast_precision_loss)]
pub fn score_answers(values: &[u8], bands: &ScoreBands) -> SurveyScore {
    let answered = values.len();
    let average = if answered == 0 {
        0.0
    } else {
        let total: u32 = values.iter().copied().map(u32::from).sum();
        f64::from(total) / answered as f64
    };
    let scaled = scaled_score(average, answered);
    SurveyScore {
        scaled,
        category: bands.category(scaled),
        answered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_max_answers_score_one_hundred() {
        let score = score_answers(&[4, 4, 4, 4], &ScoreBands::default());
        assert_eq!(score.scaled, 100);
        assert_eq!(score.category, ScoreCategory::High);
        assert_eq!(score.answered, 4);
    }

    #[test]
    fn no_answers_score_zero() {
        assert_eq!(scaled_score(0.0, 0), 0);
        assert_eq!(scaled_score(3.5, 0), 0);

        let score = score_answers(&[], &ScoreBands::default());
        assert_eq!(score.scaled, 0);
        assert_eq!(score.category, ScoreCategory::Low);
    }

    #[test]
    fn rounds_to_nearest() {
        // 1.5 / 4 = 37.5%
        assert_eq!(scaled_score(1.5, 2), 38);
        // 2.25 / 4 = 56.25%
        assert_eq!(score_answers(&[2, 2, 2, 3], &ScoreBands::default()).scaled, 56);
    }

    #[test]
    fn scaled_score_is_monotonic() {
        let mut previous = 0;
        for step in 0..=400u32 {
            let average = f64::from(step) / 100.0;
            let score = scaled_score(average, 1);
            assert!(score >= previous, "score fell at average {average}");
            previous = score;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn categories_are_monotonic_and_total() {
        let bands = ScoreBands::default();
        let mut previous = ScoreCategory::Low;
        for score in 0..=100 {
            let category = bands.category(score);
            assert!(category >= previous, "category fell at {score}");
            previous = category;
        }
        assert_eq!(bands.category(0), ScoreCategory::Low);
        assert_eq!(bands.category(100), ScoreCategory::High);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let bands = ScoreBands::new(40, 70).unwrap();
        assert_eq!(bands.category(40), ScoreCategory::Low);
        assert_eq!(bands.category(41), ScoreCategory::Medium);
        assert_eq!(bands.category(70), ScoreCategory::Medium);
        assert_eq!(bands.category(71), ScoreCategory::High);
    }

    #[test]
    fn rejects_overlapping_or_open_bands() {
        assert_eq!(
            ScoreBands::new(50, 50).unwrap_err(),
            "low-max must be below medium-max"
        );
        assert_eq!(
            ScoreBands::new(60, 40).unwrap_err(),
            "low-max must be below medium-max"
        );
        assert_eq!(
            ScoreBands::new(40, 100).unwrap_err(),
            "medium-max must be below 100"
        );
    }
}
