use url::form_urlencoded;

use crate::contact::models::ContactSubmission;

/// Builds the pre-filled compose-email link offered when automated delivery
/// fails. Subject and body are percent-encoded; line breaks are CRLF.
pub fn build_mailto(recipient: &str, submission: &ContactSubmission) -> String {
    let subject = format!("Portfolio Contact: {}", submission.subject);
    let body = format!(
        "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
        submission.name, submission.email, submission.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&subject),
        encode_component(&body)
    )
}

/// Form encoding writes spaces as `+`, which mail clients show literally.
/// A literal `+` is already escaped to `%2B`, so every remaining `+` is a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
