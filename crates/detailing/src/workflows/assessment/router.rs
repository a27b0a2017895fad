use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{AssessmentCatalog, PriceTable};
use super::domain::{AnswerSet, Section, ServiceType};
use super::engine::{RecommendationEngine, RecommendationView};
use super::options::{service_options, ServiceOption};

/// Router builder exposing the questionnaire and recommendation endpoints.
pub fn assessment_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .route(
            "/api/v1/assessment/recommendation",
            post(recommendation_handler),
        )
        .route("/api/v1/services/options", get(options_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub interior: SectionAnswers,
    #[serde(default)]
    pub exterior: SectionAnswers,
}

impl AnswerPayload {
    pub fn to_answer_set(&self) -> AnswerSet {
        let mut answers = AnswerSet::new();
        self.interior.apply(&mut answers, Section::Interior);
        self.exterior.apply(&mut answers, Section::Exterior);
        answers
    }
}

/// Selections for one section, keyed by question index.
///
/// Accepts either a positional list where `null` marks an unanswered question
/// (`[0, null, 2]`) or an object keyed by question index (`{"0": 0, "2": 2}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "SectionAnswersInput")]
pub struct SectionAnswers(BTreeMap<usize, usize>);

impl SectionAnswers {
    fn apply(&self, answers: &mut AnswerSet, section: Section) {
        for (question, option) in &self.0 {
            answers.select(section, *question, *option);
        }
    }
}

impl From<Vec<Option<usize>>> for SectionAnswers {
    fn from(positional: Vec<Option<usize>>) -> Self {
        Self(
            positional
                .into_iter()
                .enumerate()
                .filter_map(|(question, option)| option.map(|option| (question, option)))
                .collect(),
        )
    }
}

// Object keys arrive as strings inside an untagged enum, so indices are parsed by hand.
#[derive(Deserialize)]
#[serde(untagged)]
enum SectionAnswersInput {
    Positional(Vec<Option<usize>>),
    Keyed(BTreeMap<String, Option<usize>>),
}

impl TryFrom<SectionAnswersInput> for SectionAnswers {
    type Error = String;

    fn try_from(input: SectionAnswersInput) -> Result<Self, Self::Error> {
        match input {
            SectionAnswersInput::Positional(positional) => Ok(positional.into()),
            SectionAnswersInput::Keyed(keyed) => {
                let mut selections = BTreeMap::new();
                for (key, option) in keyed {
                    let question = key
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| format!("question index '{key}' is not a number"))?;
                    if let Some(option) = option {
                        selections.insert(question, option);
                    }
                }
                Ok(Self(selections))
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub answers: AnswerPayload,
}

#[derive(Debug, Serialize)]
pub struct ServiceOptionsResponse {
    pub options: Vec<ServiceOption>,
    pub prices: PriceTable,
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<AssessmentCatalog> {
    Json(engine.catalog().clone())
}

pub(crate) async fn recommendation_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationView> {
    let answers = request.answers.to_answer_set();
    let recommendation = engine.recommend(&answers, request.service_type);

    debug!(
        service_type = ?recommendation.service_type,
        severity = ?recommendation.severity,
        price = ?recommendation.price,
        "computed self-assessment recommendation"
    );

    Json(recommendation.view())
}

pub(crate) async fn options_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<ServiceOptionsResponse> {
    let prices = *engine.catalog().prices();
    Json(ServiceOptionsResponse {
        options: service_options(&prices),
        prices,
    })
}
