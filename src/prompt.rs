//! Unified prompt construction.
//!
//! One instruction template for every probe: it fixes the required output
//! shape (nested `evaluation`/`analysis` JSON), lists the closed fallacy
//! enumeration verbatim so the model constrains its choice, and demands
//! nothing but the JSON object. One prompt, one response; there is no
//! self-correction loop.

use crate::fallacy::FallacyLabel;

/// Fixed instruction head of the unified prompt.
const PROMPT_HEADER: &str = r#"You are a rigorous logician and cognitive scientist. Analyze the text in the 'logic analysis task' below.
Your answer MUST be a single well-formed JSON string, directly parseable as JSON. Do not add any extra text, explanation, or code-block fences before or after the JSON.

Required JSON output format:
{
  "evaluation": {
    "is_valid_reasoning": "Boolean (true/false). For logic problems, whether the conclusion necessarily follows from the premises. For cognitive-bias problems (such as the Linda problem), whether the common intuitive answer is logically/probabilistically sound (false means it is not, i.e. a fallacy is present). For paradoxes, this value may be null.",
    "confidence_score": "Float between 0.0 and 1.0, your confidence in the 'is_valid_reasoning' judgment.",
    "fallacy_type": "String. If the reasoning is invalid or a cognitive bias is present, pick the most fitting fallacy type from the predefined list below. If valid, use 'NO_FALLACY'."
  },
  "analysis": {
    "reasoning_chain": "A list of strings laying out your thinking step by step. For example: ['Step 1: identify the premises...', 'Step 2: analyze the structure...']. This is the most important part.",
    "final_explanation": "String, a clear and complete explanation of your final judgment."
  }
}"#;

/// Build the single instruction string sent for one probe.
pub fn build_prompt(problem_text: &str) -> String {
    let labels: Vec<&str> = FallacyLabel::ALL.iter().map(|label| label.as_str()).collect();
    format!(
        "{header}\n\nFallacy type list: [{labels}]\n\n--- Logic analysis task ---\n{problem}\n",
        header = PROMPT_HEADER,
        labels = labels.join(", "),
        problem = problem_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_task_text() {
        let prompt = build_prompt("Premise 1: If P, then Q.");
        assert!(prompt.contains("Premise 1: If P, then Q."));
        assert!(prompt.contains("--- Logic analysis task ---"));
    }

    #[test]
    fn test_prompt_fixes_the_output_shape() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("\"evaluation\""));
        assert!(prompt.contains("\"analysis\""));
        assert!(prompt.contains("is_valid_reasoning"));
        assert!(prompt.contains("confidence_score"));
        assert!(prompt.contains("fallacy_type"));
        assert!(prompt.contains("reasoning_chain"));
        assert!(prompt.contains("final_explanation"));
    }

    #[test]
    fn test_prompt_lists_every_fallacy_label_verbatim() {
        let prompt = build_prompt("x");
        for label in FallacyLabel::ALL {
            assert!(prompt.contains(label.as_str()), "missing {}", label);
        }
    }
}
