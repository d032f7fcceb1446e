//! Boundary between the AI producer and the knowledge base.
//!
//! The producer emits either an analysis or a grounded answer without a tag.
//! The variant is decided here, once, by checking for an `answer` field; a
//! document carrying both shapes is treated as a grounded answer.

use serde_json::{Map, Value};

use crate::domain::{
    AnalysisResult, BusinessArea, GroundedAnswer, RecordDraft, RecordResult, ResultKind,
};
use crate::error::{KbError, KbResult};

pub fn tag_result(document: Value) -> KbResult<RecordResult> {
    let mut map = into_object(document)?;
    // Drop a tag the producer may already carry; membership decides.
    map.remove("kind");
    decode(map, None)
}

/// Tag a result read back from storage. An explicit `kind` wins; untagged
/// results fall back to the same `answer` membership rule as fresh ones.
pub fn tag_stored_result(document: Value) -> KbResult<RecordResult> {
    let mut map = into_object(document)?;
    let kind = match map.remove("kind") {
        None => None,
        Some(Value::String(kind)) => Some(kind.parse::<ResultKind>()?),
        Some(other) => return Err(KbError::UnknownResultKind(other.to_string())),
    };
    decode(map, kind)
}

fn into_object(document: Value) -> KbResult<Map<String, Value>> {
    match document {
        Value::Object(map) => Ok(map),
        _ => Err(KbError::InvalidResult("expected a JSON object".to_string())),
    }
}

fn decode(map: Map<String, Value>, kind: Option<ResultKind>) -> KbResult<RecordResult> {
    let kind = kind.unwrap_or(if map.contains_key("answer") {
        ResultKind::Grounded
    } else {
        ResultKind::Analysis
    });

    match kind {
        ResultKind::Grounded => {
            let grounded: GroundedAnswer = serde_json::from_value(Value::Object(map))
                .map_err(|e| KbError::InvalidResult(format!("grounded answer: {e}")))?;
            tracing::trace!(sources = grounded.sources.len(), "tagged result as grounded answer");
            Ok(RecordResult::Grounded(grounded))
        }
        ResultKind::Analysis => {
            let analysis: AnalysisResult = serde_json::from_value(Value::Object(map))
                .map_err(|e| KbError::InvalidResult(format!("analysis: {e}")))?;
            tracing::trace!("tagged result as analysis");
            Ok(RecordResult::Analysis(analysis))
        }
    }
}

pub fn parse_result(raw: &str) -> KbResult<RecordResult> {
    let document: Value = serde_json::from_str(raw)?;
    tag_result(document)
}

pub fn build_draft(
    company_type: &str,
    niche: &str,
    problem_description: &str,
    business_area: BusinessArea,
    result: RecordResult,
) -> RecordDraft {
    RecordDraft {
        company_type: company_type.trim().to_string(),
        niche: niche.trim().to_string(),
        problem_description: problem_description.trim().to_string(),
        business_area,
        result,
    }
}
