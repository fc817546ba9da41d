//! The closed fallacy-label enumeration.
//!
//! The prompt instructs the model to pick from this list verbatim. Reported
//! labels are validated on the way in; values outside the enumeration are
//! preserved as a distinct [`ReportedLabel::Unrecognized`] outcome instead
//! of passing through silently.

use std::fmt;

/// A fallacy label from the fixed enumeration the prompt offers the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallacyLabel {
    NoFallacy,
    AffirmingTheConsequent,
    DenyingTheAntecedent,
    QuantifierScopeFallacy,
    ModalFallacy,
    CompositionFallacy,
    DivisionFallacy,
    ConjunctionFallacy,
    GamblersFallacy,
    BaseRateFallacy,
    Paradox,
    Uncategorized,
}

impl FallacyLabel {
    /// Every label, in the order the prompt lists them.
    pub const ALL: [FallacyLabel; 12] = [
        FallacyLabel::NoFallacy,
        FallacyLabel::AffirmingTheConsequent,
        FallacyLabel::DenyingTheAntecedent,
        FallacyLabel::QuantifierScopeFallacy,
        FallacyLabel::ModalFallacy,
        FallacyLabel::CompositionFallacy,
        FallacyLabel::DivisionFallacy,
        FallacyLabel::ConjunctionFallacy,
        FallacyLabel::GamblersFallacy,
        FallacyLabel::BaseRateFallacy,
        FallacyLabel::Paradox,
        FallacyLabel::Uncategorized,
    ];

    /// Wire form of the label as the prompt spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallacyLabel::NoFallacy => "NO_FALLACY",
            FallacyLabel::AffirmingTheConsequent => "AFFIRMING_THE_CONSEQUENT",
            FallacyLabel::DenyingTheAntecedent => "DENYING_THE_ANTECEDENT",
            FallacyLabel::QuantifierScopeFallacy => "QUANTIFIER_SCOPE_FALLACY",
            FallacyLabel::ModalFallacy => "MODAL_FALLACY",
            FallacyLabel::CompositionFallacy => "COMPOSITION_FALLACY",
            FallacyLabel::DivisionFallacy => "DIVISION_FALLACY",
            FallacyLabel::ConjunctionFallacy => "CONJUNCTION_FALLACY",
            FallacyLabel::GamblersFallacy => "GAMBLER_S_FALLACY",
            FallacyLabel::BaseRateFallacy => "BASE_RATE_FALLACY",
            FallacyLabel::Paradox => "PARADOX",
            FallacyLabel::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// Parse an exact wire-form label, rejecting anything outside the set.
    pub fn parse(raw: &str) -> Option<FallacyLabel> {
        FallacyLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == raw)
    }
}

impl fmt::Display for FallacyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fallacy label as reported by the model, validated against the
/// enumeration. The prompt constrains the choice but nothing enforces it on
/// the wire, so out-of-set values get their own outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedLabel {
    /// A label from the closed enumeration.
    Known(FallacyLabel),
    /// A value the model invented; the raw text is preserved for auditing.
    Unrecognized(String),
}

impl ReportedLabel {
    /// Validate a raw reported label. Surrounding whitespace is tolerated;
    /// anything else must match the enumeration exactly.
    pub fn parse(raw: &str) -> ReportedLabel {
        let trimmed = raw.trim();
        match FallacyLabel::parse(trimmed) {
            Some(label) => ReportedLabel::Known(label),
            None => ReportedLabel::Unrecognized(trimmed.to_string()),
        }
    }

    /// String form used in the flat result table.
    pub fn as_string(&self) -> String {
        match self {
            ReportedLabel::Known(label) => label.as_str().to_string(),
            ReportedLabel::Unrecognized(raw) => format!("UNRECOGNIZED({})", raw),
        }
    }
}

impl fmt::Display for ReportedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
