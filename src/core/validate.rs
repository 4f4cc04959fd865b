// AgentDeck - core/validate.rs
//
// Required-field and length checks run before a form is dispatched.
// Reports the first failing field only; the panel shows one message.

use crate::core::model::AgentForm;
use crate::util::constants::MAX_FIELD_CHARS;
use crate::util::error::ValidationError;

/// Fields that must be non-blank for each agent.
fn required_fields(form: &AgentForm) -> &'static [&'static str] {
    match form {
        AgentForm::Narrative(_) => &["brand", "audience"],
        AgentForm::Compliance(_) => &["content"],
        AgentForm::Segmentation(_) => &["product"],
        AgentForm::Competitor(_) => &["company", "competitors"],
    }
}

/// Validate a form before dispatch.
///
/// Fields are checked in display order; for each field the length limit is
/// checked before the required check so an over-long paste is reported as
/// such rather than silently accepted.
pub fn validate(form: &AgentForm) -> Result<(), ValidationError> {
    let agent = form.kind().label();
    let required = required_fields(form);

    for (field, value) in form.fields() {
        let length = value.chars().count();
        if length > MAX_FIELD_CHARS {
            return Err(ValidationError::TooLong {
                agent,
                field,
                length,
                max_length: MAX_FIELD_CHARS,
            });
        }
        if required.contains(&field) && value.trim().is_empty() {
            return Err(ValidationError::MissingField { agent, field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{
        AgentKind, CompetitorForm, ComplianceForm, NarrativeForm, SegmentationForm,
    };

    #[test]
    fn test_empty_forms_fail_on_first_required_field() {
        let expected = [
            (AgentKind::Narrative, "brand"),
            (AgentKind::Compliance, "content"),
            (AgentKind::Segmentation, "product"),
            (AgentKind::Competitor, "company"),
        ];
        for (kind, field) in expected {
            match validate(&AgentForm::empty(kind)) {
                Err(ValidationError::MissingField { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{kind:?}: expected MissingField({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let form = AgentForm::Narrative(NarrativeForm {
            brand: "Acme".to_string(),
            audience: " \n\t ".to_string(),
            ..Default::default()
        });
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingField {
                agent: "Narrative Agent",
                field: "audience",
            })
        );
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let form = AgentForm::Segmentation(SegmentationForm {
            product: "Trail running shoes".to_string(),
            ..Default::default()
        });
        assert!(validate(&form).is_ok());

        let form = AgentForm::Compliance(ComplianceForm {
            content: "Try it free for 30 days.".to_string(),
            regulation: String::new(),
        });
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_competitor_requires_competitor_list() {
        let form = AgentForm::Competitor(CompetitorForm {
            company: "Acme".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            validate(&form),
            Err(ValidationError::MissingField {
                field: "competitors",
                ..
            })
        ));
    }

    #[test]
    fn test_too_long_field_rejected() {
        let form = AgentForm::Compliance(ComplianceForm {
            content: "x".repeat(MAX_FIELD_CHARS + 1),
            regulation: String::new(),
        });
        assert!(matches!(
            validate(&form),
            Err(ValidationError::TooLong { field: "content", length, .. }) if length == MAX_FIELD_CHARS + 1
        ));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        let form = AgentForm::Compliance(ComplianceForm {
            content: "\u{e9}".repeat(MAX_FIELD_CHARS),
            regulation: String::new(),
        });
        assert!(validate(&form).is_ok());
    }
}
