//! Vehicle condition self-assessment.
//!
//! Customers grade the interior and exterior through a fixed questionnaire. Each section
//! resolves to the worst severity among its answers, and the engine turns the sections
//! covered by the chosen service type into a single recommendation with a price taken
//! from the catalog's price table.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod options;
pub(crate) mod resolver;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{AssessmentCatalog, CatalogError, PriceTable, SectionPrice};
pub use domain::{
    service_label, AnswerOption, AnswerSet, Question, Section, ServiceType, Severity,
};
pub use engine::{
    format_price, Recommendation, RecommendationEngine, RecommendationView, SuggestedService,
    NO_RECOMMENDATION_PLACEHOLDER,
};
pub use options::{find_service_option, service_options, ServiceOption};
pub use resolver::{classify_section, resolve_severity, SectionClassification};
pub use router::{assessment_router, AnswerPayload, RecommendationRequest, SectionAnswers};
