use super::common::*;
use crate::workflows::assessment::catalog::AssessmentCatalog;
use crate::workflows::assessment::domain::{AnswerSet, Section, Severity};
use crate::workflows::assessment::resolver::{classify_section, resolve_severity};

fn resolve(answers: &AnswerSet, section: Section) -> Option<Severity> {
    let catalog = AssessmentCatalog::standard();
    resolve_severity(answers, catalog.questions(section), section)
}

#[test]
fn unanswered_section_has_no_classification() {
    let answers = uniform(AnswerSet::new(), Section::Exterior, SEVERE);

    assert_eq!(resolve(&answers, Section::Interior), None);
}

#[test]
fn single_severe_answer_dominates_section() {
    for question in 0..question_count(Section::Interior) {
        let answers = light_except(Section::Interior, question, SEVERE);
        assert_eq!(
            resolve(&answers, Section::Interior),
            Some(Severity::Severe),
            "severe answer on question {question} should win"
        );
    }

    let answers = uniform(AnswerSet::new(), Section::Exterior, MODERATE)
        .with(Section::Exterior, 4, SEVERE);
    assert_eq!(resolve(&answers, Section::Exterior), Some(Severity::Severe));
}

#[test]
fn moderate_wins_over_light_without_severe() {
    let answers = light_except(Section::Exterior, 2, MODERATE);

    assert_eq!(resolve(&answers, Section::Exterior), Some(Severity::Moderate));
}

#[test]
fn all_light_resolves_light() {
    let answers = uniform(AnswerSet::new(), Section::Interior, LIGHT);

    assert_eq!(resolve(&answers, Section::Interior), Some(Severity::Light));
}

#[test]
fn partial_answers_use_only_the_answered_subset() {
    let answers = AnswerSet::new().with(Section::Interior, 3, LIGHT);

    assert_eq!(resolve(&answers, Section::Interior), Some(Severity::Light));
}

#[test]
fn sections_never_share_answers() {
    let answers = AnswerSet::new()
        .with(Section::Interior, 0, SEVERE)
        .with(Section::Exterior, 0, LIGHT);

    assert_eq!(resolve(&answers, Section::Interior), Some(Severity::Severe));
    assert_eq!(resolve(&answers, Section::Exterior), Some(Severity::Light));
}

#[test]
fn out_of_range_selections_are_inert() {
    let answers = AnswerSet::new()
        .with(Section::Interior, 0, 7)
        .with(Section::Interior, 42, SEVERE);

    assert_eq!(resolve(&answers, Section::Interior), None);

    let answers = answers.with(Section::Interior, 1, MODERATE);
    assert_eq!(resolve(&answers, Section::Interior), Some(Severity::Moderate));
}

#[test]
fn irregular_option_grading_still_resolves() {
    let catalog = irregular_catalog();
    let answers = AnswerSet::new()
        .with(Section::Interior, 0, 2)
        .with(Section::Exterior, 0, 1);

    assert_eq!(
        resolve_severity(&answers, catalog.questions(Section::Interior), Section::Interior),
        Some(Severity::Moderate)
    );
    assert_eq!(
        resolve_severity(&answers, catalog.questions(Section::Exterior), Section::Exterior),
        Some(Severity::Severe)
    );
}

#[test]
fn classification_counts_answered_questions() {
    let catalog = AssessmentCatalog::standard();
    let answers = AnswerSet::new()
        .with(Section::Exterior, 0, MODERATE)
        .with(Section::Exterior, 3, LIGHT)
        .with(Section::Exterior, 9, SEVERE);

    let classification =
        classify_section(&answers, catalog.questions(Section::Exterior), Section::Exterior);

    assert_eq!(classification.severity, Some(Severity::Moderate));
    assert_eq!(classification.answered, 2);
    assert_eq!(classification.total, 5);
    assert!(!classification.is_complete());
}
