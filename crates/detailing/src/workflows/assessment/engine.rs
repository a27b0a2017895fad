use serde::{Deserialize, Serialize};

use super::catalog::AssessmentCatalog;
use super::domain::{service_label, AnswerSet, Section, ServiceType, Severity};
use super::resolver::{classify_section, SectionClassification};

/// Shown in place of a recommendation until at least one relevant question is answered.
pub const NO_RECOMMENDATION_PLACEHOLDER: &str =
    "— Answer all questions to see our recommendation —";

/// Stateless engine turning questionnaire answers into a service recommendation.
///
/// Holds only the immutable catalog, so one instance can serve any number of concurrent
/// sessions and be re-run on every answer change.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    catalog: AssessmentCatalog,
}

impl RecommendationEngine {
    pub fn new(catalog: AssessmentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    pub fn classify(&self, answers: &AnswerSet, section: Section) -> SectionClassification {
        classify_section(answers, self.catalog.questions(section), section)
    }

    pub fn recommend(&self, answers: &AnswerSet, service_type: ServiceType) -> Recommendation {
        let prices = self.catalog.prices();
        let sections: Vec<SectionClassification> = service_type
            .sections()
            .iter()
            .map(|section| self.classify(answers, *section))
            .collect();

        // The displayed severity is the worst classified section; `None` sorts below any grade.
        let severity = sections
            .iter()
            .map(|classification| classification.severity)
            .max()
            .flatten();

        let price = sections
            .iter()
            .filter_map(|classification| {
                classification
                    .severity
                    .map(|severity| prices.price(severity, classification.section))
            })
            .fold(None, |total: Option<u32>, amount| {
                Some(total.unwrap_or(0).saturating_add(amount))
            });

        Recommendation {
            severity,
            service_type,
            price,
            sections,
        }
    }
}

/// Derived classification and price for the current answers; never stored by the engine.
///
/// `price` is present exactly when `severity` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub severity: Option<Severity>,
    pub service_type: ServiceType,
    pub price: Option<u32>,
    pub sections: Vec<SectionClassification>,
}

impl Recommendation {
    pub fn is_available(&self) -> bool {
        self.severity.is_some()
    }

    pub fn section(&self, section: Section) -> Option<&SectionClassification> {
        self.sections
            .iter()
            .find(|classification| classification.section == section)
    }

    pub fn headline(&self) -> Option<&'static str> {
        self.severity.map(Severity::label)
    }

    pub fn label(&self) -> Option<String> {
        self.severity
            .map(|severity| service_label(severity, self.service_type))
    }

    pub fn description(&self) -> &'static [&'static str] {
        self.severity.map(Severity::description).unwrap_or(&[])
    }

    pub fn price_display(&self) -> Option<String> {
        self.price.map(format_price)
    }

    pub fn suggested_service(&self) -> Option<SuggestedService> {
        let severity = self.severity?;
        let price = self.price?;
        Some(SuggestedService::new(severity, self.service_type, price))
    }

    pub fn view(&self) -> RecommendationView {
        RecommendationView {
            available: self.is_available(),
            service_type: self.service_type,
            service_type_label: self.service_type.label(),
            severity: self.severity,
            headline: self.headline(),
            label: self.label(),
            price: self.price,
            price_display: self.price_display(),
            description: self.description(),
            sections: self.sections.clone(),
            suggested_service: self.suggested_service(),
            message: (!self.is_available()).then_some(NO_RECOMMENDATION_PLACEHOLDER),
        }
    }
}

pub fn format_price(amount: u32) -> String {
    format!("₱{amount}")
}

/// Pre-filled service handed to booking creation when the customer accepts a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedService {
    pub service_type: ServiceType,
    pub severity: Severity,
    pub price: u32,
    pub label: String,
}

impl SuggestedService {
    pub fn new(severity: Severity, service_type: ServiceType, price: u32) -> Self {
        Self {
            service_type,
            severity,
            price,
            label: service_label(severity, service_type),
        }
    }

    pub fn expected_label(&self) -> String {
        service_label(self.severity, self.service_type)
    }
}

/// Display-ready rendering of a [`Recommendation`].
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub available: bool,
    pub service_type: ServiceType,
    pub service_type_label: &'static str,
    pub severity: Option<Severity>,
    pub headline: Option<&'static str>,
    pub label: Option<String>,
    pub price: Option<u32>,
    pub price_display: Option<String>,
    pub description: &'static [&'static str],
    pub sections: Vec<SectionClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_service: Option<SuggestedService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
