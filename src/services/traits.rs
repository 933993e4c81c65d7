//! Trait abstraction for the listing assistant to enable mocking in tests

use crate::state::{GeneratedContent, ServiceCategory};
use async_trait::async_trait;

/// A suggested listing title and why it works
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSuggestion {
    pub title: String,
    pub rationale: String,
}

/// Source of assisted content for a listing. Calls always succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingAssistant: Send + Sync {
    /// Ordered title suggestions for a category
    async fn suggest_titles(&self, category: Option<ServiceCategory>) -> Vec<TitleSuggestion>;

    /// A full description draft for a category
    async fn generate_draft(&self, category: Option<ServiceCategory>) -> GeneratedContent;
}
