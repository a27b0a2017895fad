use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Condition grade attached to every answer option.
///
/// Variants are declared best-to-worst so the derived ordering reads
/// `Severe > Moderate > Light`; the worse of two grades is simply their `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Light,
    Moderate,
    Severe,
}

impl Severity {
    /// Precedence order used when resolving a section.
    pub const fn worst_first() -> [Self; 3] {
        [Self::Severe, Self::Moderate, Self::Light]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "🚗 Light Condition",
            Self::Moderate => "🚙 Moderate Condition",
            Self::Severe => "🌊 Severe / Flooded Condition",
        }
    }

    pub const fn description(self) -> &'static [&'static str] {
        match self {
            Self::Light => &[
                "Minor dust on dashboard and surfaces",
                "A few crumbs or small trash items",
                "Clean upholstery with no visible stains",
                "No foul or lingering odors",
                "Vents and panels mostly clean",
            ],
            Self::Moderate => &[
                "Visible dirt on seats, carpets, or floor mats",
                "Stains from food or drinks",
                "Presence of pet hair or lint buildup",
                "Mild odor or musty smell",
                "Dust in vents, around buttons, and tight areas",
            ],
            Self::Severe => &[
                "Heavy mud, water stains, or debris inside the car",
                "Mold or mildew present on upholstery or panels",
                "Strong foul odor or damp smell",
                "Electrical issues or corrosion from water exposure",
                "Sticky or damaged surfaces",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Interior,
    Exterior,
}

impl Section {
    pub const fn ordered() -> [Self; 2] {
        [Self::Interior, Self::Exterior]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Exterior => "Exterior",
        }
    }
}

/// Which parts of the vehicle the customer wants serviced.
///
/// Deserialization goes through [`ServiceType::parse`], so HTTP payloads and the CLI accept
/// the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ServiceType {
    #[serde(rename = "interior")]
    InteriorOnly,
    #[serde(rename = "exterior")]
    ExteriorOnly,
    #[default]
    #[serde(rename = "both")]
    Both,
}

impl ServiceType {
    pub const fn ordered() -> [Self; 3] {
        [Self::InteriorOnly, Self::ExteriorOnly, Self::Both]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InteriorOnly => "Interior Only",
            Self::ExteriorOnly => "Exterior Only",
            Self::Both => "Full Service",
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            Self::InteriorOnly => &[Section::Interior],
            Self::ExteriorOnly => &[Section::Exterior],
            Self::Both => &[Section::Interior, Section::Exterior],
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "interior" | "interior-only" | "interior_only" => Some(Self::InteriorOnly),
            "exterior" | "exterior-only" | "exterior_only" => Some(Self::ExteriorOnly),
            "both" | "full" | "full-service" => Some(Self::Both),
            _ => None,
        }
    }
}

impl TryFrom<String> for ServiceType {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| {
            format!("unknown service type '{raw}' (expected interior, exterior, or both)")
        })
    }
}

/// Label a booking carries for a severity/service combination, e.g.
/// `"🚙 Moderate Condition (Full Service)"`.
pub fn service_label(severity: Severity, service_type: ServiceType) -> String {
    format!("{} ({})", severity.label(), service_type.label())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: &str, options: [(&str, Severity); 3]) -> Self {
        Self {
            text: text.to_string(),
            options: options
                .into_iter()
                .map(|(label, severity)| AnswerOption {
                    label: label.to_string(),
                    severity,
                })
                .collect(),
        }
    }
}

/// Selected option index per question index, kept separately for each section.
///
/// Any subset of questions may be unanswered; selecting again replaces the earlier choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    interior: BTreeMap<usize, usize>,
    #[serde(default)]
    exterior: BTreeMap<usize, usize>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, section: Section, question: usize, option: usize) -> &mut Self {
        self.section_mut(section).insert(question, option);
        self
    }

    pub fn with(mut self, section: Section, question: usize, option: usize) -> Self {
        self.select(section, question, option);
        self
    }

    pub fn clear(&mut self, section: Section, question: usize) -> Option<usize> {
        self.section_mut(section).remove(&question)
    }

    pub fn selected(&self, section: Section, question: usize) -> Option<usize> {
        self.section(section).get(&question).copied()
    }

    pub fn answered(&self, section: Section) -> usize {
        self.section(section).len()
    }

    pub fn is_empty(&self) -> bool {
        self.interior.is_empty() && self.exterior.is_empty()
    }

    /// Builds a section from a positional list where `None` marks an unanswered question.
    pub fn extend_positional(&mut self, section: Section, selections: &[Option<usize>]) {
        for (question, option) in selections.iter().enumerate() {
            if let Some(option) = option {
                self.select(section, question, *option);
            }
        }
    }

    fn section(&self, section: Section) -> &BTreeMap<usize, usize> {
        match section {
            Section::Interior => &self.interior,
            Section::Exterior => &self.exterior,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut BTreeMap<usize, usize> {
        match section {
            Section::Interior => &mut self.interior,
            Section::Exterior => &mut self.exterior,
        }
    }
}
