//! Listing assistant: title suggestions and description drafts

mod canned;
mod traits;

pub use canned::{default_draft, suggestions_for, CannedAssistant};
#[cfg(test)]
pub use traits::MockListingAssistant;
pub use traits::{ListingAssistant, TitleSuggestion};
