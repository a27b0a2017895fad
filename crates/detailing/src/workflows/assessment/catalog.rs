use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{Question, Section, ServiceType, Severity};

/// Questionnaire and price list the recommendation engine reads from.
///
/// Built once at startup and shared read-only; wording, severity tags, and prices are data,
/// so swapping them never touches the resolver or engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentCatalog {
    interior: Vec<Question>,
    exterior: Vec<Question>,
    prices: PriceTable,
}

impl AssessmentCatalog {
    pub fn new(
        interior: Vec<Question>,
        exterior: Vec<Question>,
        prices: PriceTable,
    ) -> Result<Self, CatalogError> {
        validate_section(Section::Interior, &interior)?;
        validate_section(Section::Exterior, &exterior)?;
        Ok(Self {
            interior,
            exterior,
            prices,
        })
    }

    pub fn standard() -> Self {
        Self {
            interior: standard_interior_questions(),
            exterior: standard_exterior_questions(),
            prices: PriceTable::standard(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.interior, document.exterior, document.prices)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn questions(&self, section: Section) -> &[Question] {
        match section {
            Section::Interior => &self.interior,
            Section::Exterior => &self.exterior,
        }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn question_count(&self) -> usize {
        self.interior.len() + self.exterior.len()
    }
}

impl Default for AssessmentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    interior: Vec<Question>,
    exterior: Vec<Question>,
    #[serde(default = "PriceTable::standard")]
    prices: PriceTable,
}

fn validate_section(section: Section, questions: &[Question]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::EmptySection(section));
    }
    if let Some(index) = questions.iter().position(|q| q.options.is_empty()) {
        return Err(CatalogError::QuestionWithoutOptions { section, index });
    }
    Ok(())
}

/// Amounts (in pesos) charged per section at a given severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPrice {
    pub interior: u32,
    pub exterior: u32,
}

impl SectionPrice {
    pub const fn for_section(self, section: Section) -> u32 {
        match section {
            Section::Interior => self.interior,
            Section::Exterior => self.exterior,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceTable {
    pub light: SectionPrice,
    pub moderate: SectionPrice,
    pub severe: SectionPrice,
}

impl PriceTable {
    pub const fn standard() -> Self {
        Self {
            light: SectionPrice {
                interior: 400,
                exterior: 400,
            },
            moderate: SectionPrice {
                interior: 800,
                exterior: 900,
            },
            severe: SectionPrice {
                interior: 2000,
                exterior: 1500,
            },
        }
    }

    pub const fn row(&self, severity: Severity) -> SectionPrice {
        match severity {
            Severity::Light => self.light,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
        }
    }

    pub const fn price(&self, severity: Severity, section: Section) -> u32 {
        self.row(severity).for_section(section)
    }

    /// Price of a service when every covered section shares the same severity.
    pub fn list_price(&self, severity: Severity, service_type: ServiceType) -> u32 {
        service_type
            .sections()
            .iter()
            .fold(0u32, |total, section| {
                total.saturating_add(self.price(severity, *section))
            })
    }

    /// Every price the engine can quote when `severity` is the displayed grade.
    ///
    /// A full service may pair the worst section with any milder or unanswered one, so it has
    /// several valid sums; single-section services have exactly one.
    pub fn attainable_prices(&self, severity: Severity, service_type: ServiceType) -> Vec<u32> {
        let grades: Vec<Option<Severity>> = std::iter::once(None)
            .chain(
                Severity::worst_first()
                    .into_iter()
                    .filter(|grade| *grade <= severity)
                    .map(Some),
            )
            .collect();

        let mut quotes: Vec<(Option<Severity>, u32)> = vec![(None, 0)];
        for section in service_type.sections() {
            quotes = quotes
                .iter()
                .flat_map(|(worst, total)| {
                    grades.iter().map(move |grade| {
                        let price = grade.map_or(0, |grade| self.price(grade, *section));
                        ((*worst).max(*grade), total.saturating_add(price))
                    })
                })
                .collect();
        }

        let mut prices: Vec<u32> = quotes
            .into_iter()
            .filter(|(worst, _)| *worst == Some(severity))
            .map(|(_, total)| total)
            .collect();
        prices.sort_unstable();
        prices.dedup();
        prices
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{} section has no questions", .0.label())]
    EmptySection(Section),
    #[error("{} question {index} has no answer options", .section.label())]
    QuestionWithoutOptions { section: Section, index: usize },
}

fn standard_interior_questions() -> Vec<Question> {
    use Severity::{Light, Moderate, Severe};

    vec![
        Question::new(
            "Overall interior cleanliness",
            [
                ("Tidy, just minor dust/crumbs", Light),
                ("Noticeable dirt, stains, or trash", Moderate),
                ("Heavy mud, flood debris, or mold", Severe),
            ],
        ),
        Question::new(
            "Interior odor",
            [
                ("No foul or lingering odors", Light),
                ("Mild odor or musty smell", Moderate),
                ("Strong foul/musty odor or damp smell", Severe),
            ],
        ),
        Question::new(
            "Seats and upholstery",
            [
                ("Clean, no visible stains", Light),
                ("Visible dirt, food/drink stains, or pet hair", Moderate),
                ("Mold, mildew, or water stains", Severe),
            ],
        ),
        Question::new(
            "Floor, carpets, and mats",
            [
                ("Just a few crumbs, no heavy dirt", Light),
                ("Visible dirt, mud, or sticky residue", Moderate),
                ("Flooded, soaked, or moldy", Severe),
            ],
        ),
        Question::new(
            "Dashboard, vents, and panels",
            [
                ("Mostly clean, no sticky buildup", Light),
                ("Dusty vents, fingerprints, smudges", Moderate),
                ("Sticky, moldy, or water-damaged", Severe),
            ],
        ),
        Question::new(
            "Electrical issues (after water exposure)",
            [
                ("No issues", Light),
                ("Occasional issues (e.g. sticky buttons)", Moderate),
                ("Malfunctioning electronics/corroded metal", Severe),
            ],
        ),
    ]
}

fn standard_exterior_questions() -> Vec<Question> {
    use Severity::{Light, Moderate, Severe};

    vec![
        Question::new(
            "Body paint condition",
            [
                ("Clean, glossy, no scratches", Light),
                ("Some water spots or minor scratches", Moderate),
                ("Dull paint, many scratches or oxidation", Severe),
            ],
        ),
        Question::new(
            "Presence of tar, tree sap, or bird droppings",
            [
                ("None", Light),
                ("A few spots", Moderate),
                ("Widespread/tough to remove", Severe),
            ],
        ),
        Question::new(
            "Wheel and tire condition",
            [
                ("Wheels clean, tires look fresh", Light),
                ("Noticeable brake dust, road grime", Moderate),
                ("Heavy dirt/tar build-up, hard-to-clean", Severe),
            ],
        ),
        Question::new(
            "Exterior glass (windshield/windows)",
            [
                ("Clean, streak-free", Light),
                ("Water spots, bug splatters, or light haze", Moderate),
                ("Hard water stains, sap, heavy residue", Severe),
            ],
        ),
        Question::new(
            "Undercarriage & fenders",
            [
                ("Clean or lightly soiled", Light),
                ("Some mud or road salt/dirt", Moderate),
                ("Heavy mud, sand, or caked dirt", Severe),
            ],
        ),
    ]
}
