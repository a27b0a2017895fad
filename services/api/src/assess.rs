use crate::infra::{parse_answers, parse_service_type, AnswerList};
use clap::Args;
use detailing::config::AppConfig;
use detailing::error::AppError;
use detailing::workflows::assessment::{
    service_options, AnswerPayload, AssessmentCatalog, Recommendation, RecommendationEngine,
    Section, ServiceType, Severity, NO_RECOMMENDATION_PLACEHOLDER,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Service type: interior, exterior, or both
    #[arg(long, value_parser = parse_service_type, default_value = "both")]
    pub(crate) service_type: ServiceType,
    /// Interior option numbers in question order, e.g. `0,1,,2` (blank = unanswered)
    #[arg(long, value_parser = parse_answers)]
    pub(crate) interior: Option<AnswerList>,
    /// Exterior option numbers in question order
    #[arg(long, value_parser = parse_answers)]
    pub(crate) exterior: Option<AnswerList>,
    /// JSON catalog overriding APP_CATALOG_PATH and the built-in questions
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// JSON catalog overriding APP_CATALOG_PATH and the built-in questions
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        service_type,
        interior,
        exterior,
        catalog,
        json,
    } = args;

    let engine = RecommendationEngine::new(load_catalog(catalog)?);
    let payload = AnswerPayload {
        interior: interior.unwrap_or_default().0.into(),
        exterior: exterior.unwrap_or_default().0.into(),
    };
    let recommendation = engine.recommend(&payload.to_answer_set(), service_type);

    if json {
        let rendered = serde_json::to_string_pretty(&recommendation.view())
            .map_err(|err| AppError::Usage(format!("failed to render recommendation: {err}")))?;
        println!("{rendered}");
    } else {
        render_recommendation(&recommendation);
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&catalog)
            .map_err(|err| AppError::Usage(format!("failed to render catalog: {err}")))?;
        println!("{rendered}");
        return Ok(());
    }

    for section in Section::ordered() {
        println!("{}", section.label());
        for (index, question) in catalog.questions(section).iter().enumerate() {
            println!("  {}. {}", index + 1, question.text);
            for (option_index, option) in question.options.iter().enumerate() {
                println!(
                    "     [{}] {} ({:?})",
                    option_index, option.label, option.severity
                );
            }
        }
        println!();
    }

    println!("Services");
    for option in service_options(catalog.prices()) {
        println!("- {}: {}", option.label, option.price_display);
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<AssessmentCatalog, AppError> {
    let mut assessment = AppConfig::load()?.assessment;
    if let Some(path) = path {
        assessment.catalog_path = Some(path);
    }
    Ok(assessment.load_catalog()?)
}

fn render_recommendation(recommendation: &Recommendation) {
    println!("Self-assessment ({})", recommendation.service_type.label());
    for classification in &recommendation.sections {
        let grade = classification
            .severity
            .map(Severity::label)
            .unwrap_or("not assessed");
        println!(
            "- {}: {} ({}/{} answered)",
            classification.section.label(),
            grade,
            classification.answered,
            classification.total
        );
    }

    match (recommendation.label(), recommendation.price_display()) {
        (Some(label), Some(price)) => {
            println!("\nRecommended service: {label}");
            println!("Price: {price}");
            for bullet in recommendation.description() {
                println!("  • {bullet}");
            }
        }
        _ => println!("\n{NO_RECOMMENDATION_PLACEHOLDER}"),
    }
}
