//! Listing quality assessment shown on the preview step

use super::form_data::FormData;

/// Titles shorter than this are flagged as unclear
const MIN_CLEAR_TITLE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityCheck {
    pub label: &'static str,
    pub passed: bool,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityRating {
    Good,
    Fair,
    NeedsImprovement,
}

impl QualityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Good,
            50.. => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub checks: Vec<QualityCheck>,
}

impl QualityReport {
    pub fn assess(form: &FormData) -> Self {
        let checks = vec![
            QualityCheck {
                label: "Clear title",
                passed: form.title.chars().count() >= MIN_CLEAR_TITLE,
                suggestion: "Add more details to your title for better visibility",
            },
            QualityCheck {
                label: "Includes pricing",
                passed: !form.pricing.trim().is_empty(),
                suggestion: "Add pricing information to attract serious customers",
            },
            QualityCheck {
                label: "Service details",
                passed: !form.whats_included.trim().is_empty(),
                suggestion: "Describe what's included in your service",
            },
            QualityCheck {
                label: "Has photos",
                passed: !form.photos.is_empty(),
                suggestion: "Add photos to increase visibility by 3x",
            },
            QualityCheck {
                label: "Good scanability",
                passed: form.whats_included.contains('•') || form.whats_included.contains('-'),
                suggestion: "Use bullet points to make your listing easier to read",
            },
        ];
        Self { checks }
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Percentage of passed checks, rounded
    pub fn score(&self) -> u8 {
        if self.checks.is_empty() {
            return 0;
        }
        let ratio = self.passed() as f64 / self.checks.len() as f64;
        (ratio * 100.0).round() as u8
    }

    pub fn rating(&self) -> QualityRating {
        QualityRating::from_score(self.score())
    }
}
