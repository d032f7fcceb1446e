//! Core record types shared by the store, the encoders and the CLI.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KbError;

/// Functional area a submitted problem belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BusinessArea {
    Marketing,
    Sales,
    Logistics,
    Hr,
    Finance,
    It,
    #[default]
    General,
}

impl BusinessArea {
    pub const ALL: [BusinessArea; 7] = [
        BusinessArea::Marketing,
        BusinessArea::Sales,
        BusinessArea::Logistics,
        BusinessArea::Hr,
        BusinessArea::Finance,
        BusinessArea::It,
        BusinessArea::General,
    ];

    /// Serialized value, as written to storage and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessArea::Marketing => "marketing",
            BusinessArea::Sales => "sales",
            BusinessArea::Logistics => "logistics",
            BusinessArea::Hr => "hr",
            BusinessArea::Finance => "finance",
            BusinessArea::It => "it",
            BusinessArea::General => "general",
        }
    }

    /// Human-facing label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessArea::Marketing => "Marketing",
            BusinessArea::Sales => "Sales",
            BusinessArea::Logistics => "Logistics",
            BusinessArea::Hr => "Human Resources",
            BusinessArea::Finance => "Finance",
            BusinessArea::It => "IT",
            BusinessArea::General => "General",
        }
    }
}

impl fmt::Display for BusinessArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessArea {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BusinessArea::ALL
            .into_iter()
            .find(|area| area.as_str() == wanted)
            .ok_or_else(|| KbError::UnknownBusinessArea(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemAnalysis {
    pub identified_problem: String,
    pub impact: String,
}

/// One time horizon of an analysis (short-term or long-term).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub title: String,
    pub summary: String,
    pub steps: Vec<SolutionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

impl Solution {
    /// Absent premium flags count as `false`.
    pub fn premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub problem_analysis: ProblemAnalysis,
    pub short_term_solution: Solution,
    pub long_term_solution: Solution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Result attached to a record, tagged once at intake.
///
/// Always written with a `kind` tag. Reading also accepts untagged results
/// as older databases hold them; those are tagged by `answer` membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordResult {
    Grounded(GroundedAnswer),
    Analysis(AnalysisResult),
}

impl<'de> Deserialize<'de> for RecordResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = serde_json::Value::deserialize(deserializer)?;
        crate::intake::tag_stored_result(document).map_err(serde::de::Error::custom)
    }
}

impl RecordResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            RecordResult::Grounded(_) => ResultKind::Grounded,
            RecordResult::Analysis(_) => ResultKind::Analysis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Grounded,
    Analysis,
}

impl ResultKind {
    /// Discriminator value used by the CSV `resultType` column.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResultKind::Grounded => "GroundedAnswer",
            ResultKind::Analysis => "AnalysisResult",
        }
    }
}

impl FromStr for ResultKind {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grounded" | "groundedanswer" => Ok(ResultKind::Grounded),
            "analysis" | "analysisresult" => Ok(ResultKind::Analysis),
            _ => Err(KbError::UnknownResultKind(s.to_string())),
        }
    }
}

/// A persisted analysis, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRecord {
    pub id: String,
    pub timestamp: String,
    pub company_type: String,
    pub niche: String,
    pub problem_description: String,
    pub business_area: BusinessArea,
    pub result: RecordResult,
}

/// Everything the producer supplies; the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub company_type: String,
    pub niche: String,
    pub problem_description: String,
    pub business_area: BusinessArea,
    pub result: RecordResult,
}

impl RecordDraft {
    pub fn into_record(self, id: String, timestamp: String) -> SolutionRecord {
        SolutionRecord {
            id,
            timestamp,
            company_type: self.company_type,
            niche: self.niche,
            problem_description: self.problem_description,
            business_area: self.business_area,
            result: self.result,
        }
    }
}

/// Sample problem offered as a starting point.
#[derive(Debug, Clone, Copy)]
pub struct ExampleProblem {
    pub title: &'static str,
    pub description: &'static str,
    pub area: BusinessArea,
}

pub static EXAMPLE_PROBLEMS: [ExampleProblem; 4] = [
    ExampleProblem {
        title: "Falling Sales",
        description: "Our sales dropped 20% last quarter and we are not sure why. The sales team reports fewer qualified leads and a lower close rate.",
        area: BusinessArea::Sales,
    },
    ExampleProblem {
        title: "Low Social Engagement",
        description: "We post content on social media regularly, but engagement (likes, comments, shares) is very low and we are not attracting new followers.",
        area: BusinessArea::Marketing,
    },
    ExampleProblem {
        title: "High Staff Turnover",
        description: "The development department has high employee turnover. In the last 6 months 30% of the team resigned, which is hurting project deadlines.",
        area: BusinessArea::Hr,
    },
    ExampleProblem {
        title: "Shipping Delays",
        description: "Customers constantly complain about late deliveries. The logistics process looks inefficient and we are losing customers because of it.",
        area: BusinessArea::Logistics,
    },
];
