//! Response extraction and defensive parsing.
//!
//! Model output is adversarial to parse: it may wrap the JSON in commentary,
//! use code fences, or emit malformed structures. This module never panics
//! on any input; every failure path yields an outcome the loop can turn into
//! an auditable row.

use serde_json::Value;

use crate::fallacy::ReportedLabel;

/// Failure reason recorded when no JSON object is present in a reply.
pub const NO_JSON_FOUND: &str = "no JSON object found in response";

/// Fields pulled from a well-formed reply. Missing sub-fields yield `None`
/// rather than a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub is_valid_reasoning: Option<bool>,
    pub confidence_score: Option<f64>,
    pub fallacy_type: Option<ReportedLabel>,
    pub reasoning_chain: Vec<String>,
    pub final_explanation: Option<String>,
}

/// Outcome of interpreting one raw model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    /// The extracted span parsed as JSON; fields were pulled defensively.
    Parsed(ParsedReply),
    /// No brace-delimited span exists in the reply.
    NoJsonFound,
    /// A span was found but is not valid JSON; the error text is kept.
    ParseError(String),
}

/// Extract the first top-level brace-delimited span: greedy between the
/// first `{` and the last `}`.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Interpret a raw model reply.
pub fn parse_reply(raw: &str) -> ReplyOutcome {
    let span = match extract_json_span(raw) {
        Some(span) => span,
        None => return ReplyOutcome::NoJsonFound,
    };

    let value: Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(e) => return ReplyOutcome::ParseError(e.to_string()),
    };

    let evaluation = value.get("evaluation");
    let analysis = value.get("analysis");

    let is_valid_reasoning = evaluation
        .and_then(|eval| eval.get("is_valid_reasoning"))
        .and_then(Value::as_bool);

    let confidence_score = evaluation
        .and_then(|eval| eval.get("confidence_score"))
        .and_then(Value::as_f64);

    let fallacy_type = evaluation
        .and_then(|eval| eval.get("fallacy_type"))
        .and_then(Value::as_str)
        .map(ReportedLabel::parse);

    let reasoning_chain = analysis
        .and_then(|a| a.get("reasoning_chain"))
        .and_then(Value::as_array)
        .map(|steps| {
            steps
                .iter()
                .map(|step| match step.as_str() {
                    Some(s) => s.to_string(),
                    // Non-string steps are kept in their JSON form rather
                    // than dropped, so the trace stays complete.
                    None => step.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let final_explanation = analysis
        .and_then(|a| a.get("final_explanation"))
        .and_then(Value::as_str)
        .map(str::to_string);

    ReplyOutcome::Parsed(ParsedReply {
        is_valid_reasoning,
        confidence_score,
        fallacy_type,
        reasoning_chain,
        final_explanation,
    })
}

/// Serialize an ordered list of reasoning steps for flat-table storage.
pub fn reasoning_chain_string(steps: &[String]) -> String {
    // A Vec<String> always serializes.
    serde_json::to_string(steps).unwrap_or_else(|_| "[]".to_string())
}

/// Reverse of [`reasoning_chain_string`]; malformed input yields an empty
/// list rather than an error.
pub fn reasoning_chain_steps(serialized: &str) -> Vec<String> {
    serde_json::from_str(serialized).unwrap_or_default()
}
