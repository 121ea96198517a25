use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Submission
// ────────────────────────────────────────────────────────────────────────────

/// Subject options offered by the contact form, serialized by their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Job Opportunity")]
    JobOpportunity,
    #[serde(rename = "Collaboration Proposal")]
    CollaborationProposal,
    #[serde(rename = "Technical Discussion")]
    TechnicalDiscussion,
    #[serde(rename = "Project Inquiry")]
    ProjectInquiry,
    #[serde(rename = "Other")]
    Other,
}

impl Subject {
    /// All subjects in the order the form lists them.
    pub const ALL: [Subject; 6] = [
        Subject::GeneralInquiry,
        Subject::JobOpportunity,
        Subject::CollaborationProposal,
        Subject::TechnicalDiscussion,
        Subject::ProjectInquiry,
        Subject::Other,
    ];

    pub fn from_label(label: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::JobOpportunity => "Job Opportunity",
            Subject::CollaborationProposal => "Collaboration Proposal",
            Subject::TechnicalDiscussion => "Technical Discussion",
            Subject::ProjectInquiry => "Project Inquiry",
            Subject::Other => "Other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contact form submission. Transient: validated, dispatched, dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "subject_or_default")]
    pub subject: Subject,
    #[serde(default)]
    pub message: String,
}

const SUBJECT_LABELS: &[&str] = &[
    "General Inquiry",
    "Job Opportunity",
    "Collaboration Proposal",
    "Technical Discussion",
    "Project Inquiry",
    "Other",
];

/// An empty subject (e.g. `subject=` in a form post) means the default.
fn subject_or_default<'de, D>(deserializer: D) -> Result<Subject, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    if label.trim().is_empty() {
        return Ok(Subject::default());
    }
    Subject::from_label(&label).ok_or_else(|| de::Error::unknown_variant(&label, SUBJECT_LABELS))
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// Terminal: reported to the user, never dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingField(Field),

    #[error("email address must contain '@'")]
    InvalidEmail,
}

impl ValidationError {
    /// Message shown on the page and in the JSON error envelope.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "Please fill in all required fields (*)",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Discord webhook URL not configured")]
    EndpointNotSet,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Discord API returned status code: {0}")]
    NonAcceptedStatus(u16),

    #[error("Error sending Discord notification: {0}")]
    TransportFailure(#[from] reqwest::Error),
}

/// What a single notification attempt can fail with. Both kinds fall through
/// to the next strategy in the chain.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Rich,
    Simple,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Rich => "rich",
            Channel::Simple => "simple",
        })
    }
}

/// Final result of a dispatch. Every variant ends in a user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Delivered { channel: Channel },
    ManualFallback { mailto: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subject_deserializes_from_form_label() {
        let s: Subject = serde_json::from_value(json!("Collaboration Proposal")).unwrap();
        assert_eq!(s, Subject::CollaborationProposal);
        assert_eq!(s.to_string(), "Collaboration Proposal");
    }

    #[test]
    fn test_unknown_subject_is_rejected() {
        let result: Result<Subject, _> = serde_json::from_value(json!("Spam"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subject_defaults_to_general_inquiry() {
        let s: ContactSubmission = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .unwrap();
        assert_eq!(s.subject, Subject::GeneralInquiry);
    }

    #[test]
    fn test_empty_subject_defaults_to_general_inquiry() {
        let s: ContactSubmission = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "",
            "message": "Hello"
        }))
        .unwrap();
        assert_eq!(s.subject, Subject::GeneralInquiry);
    }

    #[test]
    fn test_unknown_submission_subject_is_rejected() {
        let result: Result<ContactSubmission, _> = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Spam",
            "message": "Hello"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let delivered = DispatchOutcome::Delivered {
            channel: Channel::Simple,
        };
        assert_eq!(
            serde_json::to_value(&delivered).unwrap(),
            json!({"status": "delivered", "channel": "simple"})
        );

        let fallback = DispatchOutcome::ManualFallback {
            mailto: "mailto:me@example.com".to_string(),
            reason: "Discord webhook URL not configured".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&fallback).unwrap()["status"],
            "manual_fallback"
        );
    }

    #[test]
    fn test_labels_cover_every_subject() {
        let labels: Vec<&str> = Subject::ALL.iter().map(Subject::label).collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "General Inquiry");
        assert_eq!(labels[5], "Other");
        assert_eq!(labels, SUBJECT_LABELS);
        assert_eq!(Subject::from_label("Other"), Some(Subject::Other));
    }
}
