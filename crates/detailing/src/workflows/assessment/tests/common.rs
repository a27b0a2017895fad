use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::catalog::{AssessmentCatalog, PriceTable};
use crate::workflows::assessment::domain::{
    AnswerOption, AnswerSet, Question, Section, Severity,
};
use crate::workflows::assessment::engine::RecommendationEngine;
use crate::workflows::assessment::router::assessment_router;

pub(super) const LIGHT: usize = 0;
pub(super) const MODERATE: usize = 1;
pub(super) const SEVERE: usize = 2;

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(AssessmentCatalog::standard())
}

pub(super) fn prices() -> PriceTable {
    PriceTable::standard()
}

pub(super) fn question_count(section: Section) -> usize {
    AssessmentCatalog::standard().questions(section).len()
}

/// Answers every question of a section with the same option.
pub(super) fn uniform(answers: AnswerSet, section: Section, option: usize) -> AnswerSet {
    (0..question_count(section)).fold(answers, |answers, question| {
        answers.with(section, question, option)
    })
}

/// All light except a single question answered with `option`.
pub(super) fn light_except(section: Section, question: usize, option: usize) -> AnswerSet {
    uniform(AnswerSet::new(), section, LIGHT).with(section, question, option)
}

/// A catalog whose questions break the one-option-per-severity pattern.
pub(super) fn irregular_catalog() -> AssessmentCatalog {
    let interior = vec![Question {
        text: "Cargo area".to_string(),
        options: vec![
            option("Empty", Severity::Light),
            option("Sand", Severity::Moderate),
            option("Wet sand", Severity::Moderate),
        ],
    }];
    let exterior = vec![Question {
        text: "Roof".to_string(),
        options: vec![
            option("Hail damage", Severity::Severe),
            option("Dented", Severity::Severe),
        ],
    }];

    AssessmentCatalog::new(interior, exterior, PriceTable::standard()).expect("catalog builds")
}

fn option(label: &str, severity: Severity) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        severity,
    }
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
