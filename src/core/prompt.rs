// AgentDeck - core/prompt.rs
//
// Renders a form into the prompt text handed to the dispatcher.
// Each prompt opens with a sentence that contains the agent's dispatch
// keyword, followed by one labelled line per non-empty field.

use crate::core::model::AgentForm;

/// Build the prompt text for a form.
///
/// Field values are trimmed; blank fields are omitted entirely.
pub fn build_prompt(form: &AgentForm) -> String {
    let opening = match form {
        AgentForm::Narrative(_) => "Write a brand narrative using the details below.",
        AgentForm::Compliance(_) => "Run a compliance review of the content below.",
        AgentForm::Segmentation(_) => "Segment the audience for the product below.",
        AgentForm::Competitor(_) => "Prepare a competitor analysis for the company below.",
    };

    let mut prompt = String::from(opening);
    for (name, value) in form.fields() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        prompt.push('\n');
        prompt.push_str(&capitalise(name));
        prompt.push_str(": ");
        prompt.push_str(value);
    }
    prompt
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
