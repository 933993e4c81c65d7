//! Canned assistant: fixed suggestion tables served after a delay

use super::traits::{ListingAssistant, TitleSuggestion};
use crate::state::{GeneratedContent, ServiceCategory};
use async_trait::async_trait;
use std::time::Duration;

type Table = [(&'static str, &'static str); 4];

const HOUSEHOLD: Table = [
    (
        "Professional House Cleaning in Montreal – Weekly or One-Time",
        "Highlights flexibility and location, which are top search criteria for cleaning services.",
    ),
    (
        "Deep Clean & Sanitization Services – Eco-Friendly Products",
        "Appeals to health-conscious customers seeking thorough cleaning with safe products.",
    ),
    (
        "Move-In/Move-Out Cleaning Specialist – Same Day Available",
        "Targets a specific high-demand niche with urgency appeal for time-sensitive needs.",
    ),
    (
        "Regular Home Maintenance & Cleaning – Flexible Scheduling",
        "Emphasizes convenience and recurring service potential for long-term clients.",
    ),
];

const AUTOMOTIVE: Table = [
    (
        "Mobile Auto Detailing – We Come to You in Montreal",
        "Convenience is a key differentiator; mobile service attracts busy professionals.",
    ),
    (
        "Full Service Oil Change & Tire Rotation – Same Day",
        "Bundles common services together with urgency to capture maintenance seekers.",
    ),
    (
        "Brake Inspection & Repair – Certified Mechanic",
        "Trust signals (certification) are crucial for safety-related automotive services.",
    ),
    (
        "Complete Car Care Package – Interior & Exterior",
        "Comprehensive offering appeals to customers wanting one-stop solutions.",
    ),
];

const BEAUTY: Table = [
    (
        "Professional Hair Styling – Salon Quality at Home",
        "Combines convenience with quality promise, appealing to time-conscious clients.",
    ),
    (
        "Makeup Artist for Events – Weddings & Special Occasions",
        "Targets high-value bookings with specific event mentions for better discoverability.",
    ),
    (
        "Men's Grooming & Haircuts – Mobile Service Available",
        "Addresses an underserved market segment with convenience factor.",
    ),
    (
        "Nail Art & Manicure Services – Trendy Designs",
        "Appeals to style-conscious customers looking for creative and current designs.",
    ),
];

const CREATIVE: Table = [
    (
        "Professional Photography – Events, Portraits & Products",
        "Covers multiple service types to maximize search visibility across categories.",
    ),
    (
        "Graphic Design Services – Logos, Branding & Marketing",
        "Lists specific deliverables that businesses commonly search for.",
    ),
    (
        "Video Production & Editing – Social Media & Business",
        "Addresses both personal and commercial needs, widening your audience.",
    ),
    (
        "Custom Illustration & Digital Art – Any Style",
        "Flexibility appeal attracts diverse clients with varying artistic preferences.",
    ),
];

const TUTORING: Table = [
    (
        "Math & Science Tutoring – High School to University Level",
        "Specifies subjects and levels to match specific student search queries.",
    ),
    (
        "Language Lessons – French, English, Spanish",
        "Lists popular languages to appear in more searches; multilingual appeal.",
    ),
    (
        "Music Lessons – Piano, Guitar & Voice",
        "Covers the most in-demand instruments for maximum visibility.",
    ),
    (
        "Test Prep Specialist – SAT, GMAT, LSAT",
        "High-stakes tests command premium rates; specificity builds credibility.",
    ),
];

const DEFAULT: Table = [
    (
        "Professional Service in Montreal – Quality Guaranteed",
        "Includes location and trust signal to establish credibility and local relevance.",
    ),
    (
        "Experienced Provider – Flexible Scheduling Available",
        "Highlights experience and convenience, two top factors in hiring decisions.",
    ),
    (
        "Custom Solutions for Your Needs – Free Consultation",
        "Lowers barrier to contact with free consultation offer.",
    ),
    (
        "Reliable & Trusted Service – 5-Star Reviews",
        "Social proof (reviews mention) builds immediate trust with potential clients.",
    ),
];

/// Suggestions for a category, falling back to the generic list
pub fn suggestions_for(category: Option<ServiceCategory>) -> Vec<TitleSuggestion> {
    let table = match category {
        Some(ServiceCategory::Household) => &HOUSEHOLD,
        Some(ServiceCategory::Automotive) => &AUTOMOTIVE,
        Some(ServiceCategory::Beauty) => &BEAUTY,
        Some(ServiceCategory::Creative) => &CREATIVE,
        Some(ServiceCategory::Tutoring) => &TUTORING,
        _ => &DEFAULT,
    };
    table
        .iter()
        .map(|(title, rationale)| TitleSuggestion {
            title: (*title).to_string(),
            rationale: (*rationale).to_string(),
        })
        .collect()
}

const DRAFT_PRICING: &str = "Starting at $75 for basic service. \
     Custom quotes available for larger projects. No hidden fees.";
const DRAFT_AVAILABILITY: &str = "Available Monday-Saturday, 8am-6pm. \
     Same-day appointments available. Weekend slots upon request.";
const DRAFT_EXPERIENCE: &str = "5+ years of professional experience. \
     Fully licensed and insured. Over 100 satisfied customers in the Montreal area.";

/// The description draft written for a category
pub fn default_draft(category: Option<ServiceCategory>) -> GeneratedContent {
    let kind = category.map(|c| c.id()).unwrap_or("service");
    GeneratedContent {
        whats_included: format!(
            "Our professional {kind} includes:\n\
             • Initial consultation and assessment\n\
             • High-quality materials and equipment\n\
             • Thorough completion of all tasks\n\
             • Clean-up and final inspection\n\
             • Satisfaction guarantee"
        ),
        pricing: DRAFT_PRICING.to_string(),
        availability: DRAFT_AVAILABILITY.to_string(),
        experience: DRAFT_EXPERIENCE.to_string(),
    }
}

/// Assistant that answers from fixed tables after simulated latency
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    suggestion_delay: Duration,
    draft_delay: Duration,
}

impl CannedAssistant {
    pub fn new(suggestion_delay: Duration, draft_delay: Duration) -> Self {
        Self {
            suggestion_delay,
            draft_delay,
        }
    }
}

#[async_trait]
impl ListingAssistant for CannedAssistant {
    async fn suggest_titles(&self, category: Option<ServiceCategory>) -> Vec<TitleSuggestion> {
        tokio::time::sleep(self.suggestion_delay).await;
        suggestions_for(category)
    }

    async fn generate_draft(&self, category: Option<ServiceCategory>) -> GeneratedContent {
        tokio::time::sleep(self.draft_delay).await;
        default_draft(category)
    }
}
