//! The fixed probe battery.
//!
//! Each probe carries its ground truth in the same declarative record as its
//! prompt text, so the runner and the analyzer can never drift apart.
//! Paradox probes have no binary correctness: they set `expected_valid` to
//! `None` and are excluded from scoring by construction, while still being
//! sent through the full pipeline.

use std::collections::HashMap;

use crate::fallacy::FallacyLabel;

/// One fixed natural-language reasoning test case.
#[derive(Debug, Clone, Copy)]
pub struct ProbeDef {
    /// Integer grouping id (module 1 = formal logic, 2 = concepts,
    /// 3 = paradoxes, 4 = cognitive traps).
    pub module: u32,
    /// Label identifying the reasoning pattern under test.
    pub kind: &'static str,
    /// Natural-language prompt body.
    pub text: &'static str,
    /// Expected validity judgment; `None` for paradox probes.
    pub expected_valid: Option<bool>,
    /// Expected fallacy label for genuinely fallacious probes.
    pub expected_fallacy: Option<FallacyLabel>,
}

/// The full probe battery, fixed at compile time.
pub const PROBES: &[ProbeDef] = &[
    // Module 1: basic formal logic, with controls
    ProbeDef {
        module: 1,
        kind: "Modus Ponens (Control)",
        text: "Premise 1: If P, then Q.\nPremise 2: P.\nQuestion: Does the conclusion \"Q\" necessarily follow?",
        expected_valid: Some(true),
        expected_fallacy: None,
    },
    ProbeDef {
        module: 1,
        kind: "Affirming the Consequent (Fallacy)",
        text: "Premise 1: If an employee works hard, he will be promoted.\nPremise 2: Wang was promoted.\nQuestion: Does the conclusion \"Wang works hard\" necessarily follow?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::AffirmingTheConsequent),
    },
    ProbeDef {
        module: 1,
        kind: "Modus Tollens (Control)",
        text: "Premise 1: If it rains, the ground gets wet.\nPremise 2: The ground is not wet.\nQuestion: Does the conclusion \"it did not rain\" necessarily follow?",
        expected_valid: Some(true),
        expected_fallacy: None,
    },
    ProbeDef {
        module: 1,
        kind: "Denying the Antecedent (Fallacy)",
        text: "Premise 1: If you have the key, you can open this door.\nPremise 2: You do not have the key.\nQuestion: Does the conclusion \"you cannot open this door\" necessarily follow?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::DenyingTheAntecedent),
    },
    // Module 2: conceptual understanding
    ProbeDef {
        module: 2,
        kind: "Quantifier Scope (Fallacy)",
        text: "Premise: Every boy loves some girl.\nQuestion: From this premise, does it necessarily follow that \"there exists one girl whom all boys love\"?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::QuantifierScopeFallacy),
    },
    ProbeDef {
        module: 2,
        kind: "Modal Fallacy (De Re/De Dicto)",
        text: "Premise 1: A criminal is necessarily someone who has broken the law.\nPremise 2: Zhang is a criminal.\nQuestion: Can we necessarily conclude that \"Zhang necessarily broke the law\" (that is, he was destined to break the law)?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::ModalFallacy),
    },
    ProbeDef {
        module: 2,
        kind: "Composition Fallacy",
        text: "Premise: Every player on the team is top-class.\nQuestion: Does the conclusion \"the team must be top-class\" necessarily follow?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::CompositionFallacy),
    },
    // Module 3: stress tests with paradoxes; no binary correctness
    ProbeDef {
        module: 3,
        kind: "Liar Paradox",
        text: "Consider sentence A: \"This sentence A is false.\"\nQuestion: Analyze the truth status of sentence A and explain the logical dilemma it contains.",
        expected_valid: None,
        expected_fallacy: None,
    },
    ProbeDef {
        module: 3,
        kind: "Curry's Paradox",
        text: "Consider sentence C: \"If this sentence C is true, then unicorns exist.\"\nQuestion: Analyze what follows if we accept sentence C, and explain its paradoxical nature.",
        expected_valid: None,
        expected_fallacy: None,
    },
    // Module 4: cognitive traps
    ProbeDef {
        module: 4,
        kind: "Linda Problem (Conjunction Fallacy)",
        text: "Linda is 31, single, outspoken, and very bright. She majored in philosophy and is deeply concerned with issues of social justice.\nQuestion: Which is more probable:\nA) Linda is a bank teller.\nB) Linda is a bank teller and is active in the feminist movement.",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::ConjunctionFallacy),
    },
    ProbeDef {
        module: 4,
        kind: "Gambler's Fallacy",
        text: "Premise: A fair coin has been flipped 9 times in a row, landing heads every time.\nQuestion: On the 10th flip, is heads more likely, or tails?",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::GamblersFallacy),
    },
    ProbeDef {
        module: 4,
        kind: "Base Rate Fallacy",
        text: "Background: In a city, taxis are run by two companies: 85% are green and 15% are blue. One night a taxi was involved in a hit-and-run. A witness identified the taxi as blue. The court tested the witness's ability to identify colors at night and found them accurate 80% of the time.\nQuestion: What is the probability that the taxi involved was actually blue? (A) About 80% (B) Well below 80%. Choose and explain.",
        expected_valid: Some(false),
        expected_fallacy: Some(FallacyLabel::BaseRateFallacy),
    },
];

/// Map from probe type to expected validity, derived from the battery.
/// Probes without a defined ground truth (paradoxes) are absent.
pub fn ground_truth() -> HashMap<&'static str, bool> {
    PROBES
        .iter()
        .filter_map(|probe| probe.expected_valid.map(|valid| (probe.kind, valid)))
        .collect()
}

/// Map from probe type to expected fallacy label, derived from the battery.
pub fn expected_fallacies() -> HashMap<&'static str, FallacyLabel> {
    PROBES
        .iter()
        .filter_map(|probe| probe.expected_fallacy.map(|label| (probe.kind, label)))
        .collect()
}
