use serde::Serialize;

use super::domain::{AnswerSet, Question, Section, Severity};

/// Resolves a section to the worst severity among its answered questions.
///
/// Severities are tried worst-first and the first one carried by any selected option wins,
/// so a single severe answer outweighs any number of light ones. Unanswered questions, and
/// selections pointing past the catalog, never influence the result. A section with no
/// usable answers has no classification.
pub fn resolve_severity(
    answers: &AnswerSet,
    questions: &[Question],
    section: Section,
) -> Option<Severity> {
    Severity::worst_first().into_iter().find(|severity| {
        questions.iter().enumerate().any(|(index, question)| {
            selected_severity(answers, question, section, index) == Some(*severity)
        })
    })
}

fn selected_severity(
    answers: &AnswerSet,
    question: &Question,
    section: Section,
    index: usize,
) -> Option<Severity> {
    let option = answers.selected(section, index)?;
    question.options.get(option).map(|option| option.severity)
}

/// Per-section outcome reported alongside a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionClassification {
    pub section: Section,
    pub severity: Option<Severity>,
    pub answered: usize,
    pub total: usize,
}

impl SectionClassification {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

pub fn classify_section(
    answers: &AnswerSet,
    questions: &[Question],
    section: Section,
) -> SectionClassification {
    let answered = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            selected_severity(answers, question, section, *index).is_some()
        })
        .count();

    SectionClassification {
        section,
        severity: resolve_severity(answers, questions, section),
        answered,
        total: questions.len(),
    }
}
