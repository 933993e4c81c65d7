//! Service categories and listing intent

use serde::{Deserialize, Serialize};

/// Fixed set of service categories a listing can be posted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Automotive,
    Beauty,
    CellPhone,
    Creative,
    Cycle,
    Event,
    Household,
    Labor,
    Legal,
    Travel,
    Tutoring,
    Writing,
}

impl ServiceCategory {
    /// All categories in display order
    pub const ALL: [ServiceCategory; 12] = [
        Self::Automotive,
        Self::Beauty,
        Self::CellPhone,
        Self::Creative,
        Self::Cycle,
        Self::Event,
        Self::Household,
        Self::Labor,
        Self::Legal,
        Self::Travel,
        Self::Tutoring,
        Self::Writing,
    ];

    /// Stable identifier used in generated text and logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::Automotive => "automotive",
            Self::Beauty => "beauty",
            Self::CellPhone => "cell-phone",
            Self::Creative => "creative",
            Self::Cycle => "cycle",
            Self::Event => "event",
            Self::Household => "household",
            Self::Labor => "labor",
            Self::Legal => "legal",
            Self::Travel => "travel",
            Self::Tutoring => "tutoring",
            Self::Writing => "writing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Automotive => "Automotive",
            Self::Beauty => "Beauty",
            Self::CellPhone => "Cell Phone / Mobile",
            Self::Creative => "Creative",
            Self::Cycle => "Cycle",
            Self::Event => "Event / Class",
            Self::Household => "Household",
            Self::Labor => "Labor",
            Self::Legal => "Legal",
            Self::Travel => "Travel / Vacation",
            Self::Tutoring => "Tutoring",
            Self::Writing => "Writing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Automotive => "Oil change, tire rotation, brake service",
            Self::Beauty => "Haircuts, styling, and makeup",
            Self::CellPhone => "Fix, repairs, cleaning",
            Self::Creative => "Graphic design, photography, video",
            Self::Cycle => "Maintenance, bicycle fit, training",
            Self::Event => "Meetups, workshops, performances",
            Self::Household => "Deep cleaning, regular maintenance, move-in/out",
            Self::Labor => "Moving, assembly, handyman services",
            Self::Legal => "Lawyer services, paralegal",
            Self::Travel => "Tour guides, travel planning",
            Self::Tutoring => "Music, languages, sports, test prep",
            Self::Writing => "Transcription, editing, and copywriting",
        }
    }
}

/// Whether the poster offers a service or is looking to hire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIntent {
    Offering,
    Seeking,
}

impl ServiceIntent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Offering => "I'm offering a service",
            Self::Seeking => "I'm looking to hire someone",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Offering => Self::Seeking,
            Self::Seeking => Self::Offering,
        }
    }
}
