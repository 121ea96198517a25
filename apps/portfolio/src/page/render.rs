//! Presentation Renderer: turns a `Profile` plus the contact form state into
//! a complete HTML document.
//!
//! Every piece of text, static or user-supplied, goes through `esc` before it
//! is written into markup.

use ammonia::clean_text as esc;

use crate::contact::models::{Channel, ContactSubmission, DispatchOutcome, Subject, ValidationError};
use crate::page::profile::Profile;

const STYLESHEET: &str = include_str!("../../assets/style.css");

/// Result of the last contact attempt, shown above the form.
#[derive(Debug, Clone)]
pub enum ContactNotice {
    Outcome(DispatchOutcome),
    Invalid(ValidationError),
    /// The post could not be decoded at all.
    Unreadable,
}

/// Per-request view state. The default is a fresh page.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub notice: Option<ContactNotice>,
    /// Values echoed back into the form after a validation error.
    pub form: Option<ContactSubmission>,
    /// Shows the webhook setup guide when `false`.
    pub webhook_configured: bool,
}

pub fn render_page(profile: &Profile, view: &PageView) -> String {
    let mut html = String::with_capacity(32 * 1024);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} - Portfolio</title>\n<style>\n{}</style>\n</head>\n<body>\n",
        esc(profile.name),
        STYLESHEET
    ));

    render_header(&mut html, profile);
    render_metrics(&mut html, profile);
    render_about(&mut html, profile);
    render_experience(&mut html, profile);
    render_projects(&mut html, profile);
    render_skills(&mut html, profile);
    render_education(&mut html, profile);
    render_certifications(&mut html, profile);
    render_contact(&mut html, profile, view);
    if !view.webhook_configured {
        render_setup_guide(&mut html);
    }
    render_footer(&mut html, profile);

    html.push_str("</body>\n</html>\n");
    html
}

fn section_header(html: &mut String, title: &str) {
    html.push_str(&format!("<h2 class=\"section-header\">{}</h2>\n", esc(title)));
}

fn skill_tags(tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| format!("<span class=\"skill-tag\">{}</span>", esc(tag)))
        .collect()
}

fn bullet_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", esc(item)))
        .collect();
    format!("<ul>{items}</ul>")
}

fn render_header(html: &mut String, p: &Profile) {
    html.push_str(&format!(
        "<h1 class=\"main-header\">{name}</h1>\n\
         <p class=\"sub-header\">{headline}</p>\n\
         <div class=\"columns\">\n\
         <div>📍 <strong>{location}</strong></div>\n\
         <div>📞 <strong><a href=\"tel:{tel}\">{phone}</a></strong></div>\n\
         <div>✉️ <strong><a href=\"mailto:{email}\">{email}</a></strong></div>\n\
         <div class=\"social-links\">🔗 <a href=\"{linkedin}\" target=\"_blank\">LinkedIn</a> | \
         <a href=\"{github}\" target=\"_blank\">GitHub</a></div>\n\
         </div>\n\
         <div style=\"text-align: center; margin: 20px 0;\">\
         <a href=\"{resume}\" target=\"_blank\" class=\"resume-button\">📄 View Resume</a></div>\n",
        name = esc(p.name),
        headline = esc(p.headline),
        location = esc(p.location),
        tel = esc(&p.phone.replace(' ', "")),
        phone = esc(p.phone),
        email = esc(p.email),
        linkedin = esc(p.linkedin_url),
        github = esc(p.github_url),
        resume = esc(p.resume_url),
    ));
}

fn render_metrics(html: &mut String, p: &Profile) {
    html.push_str("<div class=\"columns\">\n");
    for card in p.metrics {
        let lines: Vec<String> = card.lines.iter().map(|l| esc(l)).collect();
        html.push_str(&format!(
            "<div class=\"metric-card\"><h3>{}</h3><p>{}<br><strong>{}</strong></p></div>\n",
            esc(card.title),
            lines.join("<br>"),
            esc(card.highlight)
        ));
    }
    html.push_str("</div>\n");
}

fn render_about(html: &mut String, p: &Profile) {
    section_header(html, "About Me");
    html.push_str(&format!("<p>{}</p>\n<p><strong>Key Strengths:</strong></p>\n<ul>\n", esc(p.about)));
    for (title, detail) in p.strengths {
        html.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            esc(title),
            esc(detail)
        ));
    }
    html.push_str("</ul>\n");
}

fn render_experience(html: &mut String, p: &Profile) {
    section_header(html, "Professional Experience");
    html.push_str("<div class=\"columns\">\n");
    for job in p.experience {
        html.push_str(&format!(
            "<div class=\"project-card\"><h3>{}</h3><p><strong>{}</strong></p>{}</div>\n",
            esc(job.role),
            esc(job.period),
            bullet_list(job.bullets)
        ));
    }
    html.push_str("</div>\n");
}

fn render_projects(html: &mut String, p: &Profile) {
    section_header(html, "Featured Projects");
    html.push_str("<div class=\"columns\">\n");
    for project in p.projects {
        html.push_str(&format!(
            "<div>\n<div class=\"project-card\"><h3>{}</h3><p><strong>{}</strong></p>{}\
             <div style=\"margin-top: 10px;\"><a href=\"{}\" target=\"_blank\">{}</a></div></div>\n\
             <div>{}</div>\n</div>\n",
            esc(project.title),
            esc(project.tagline),
            bullet_list(project.bullets),
            esc(project.link),
            esc(project.link_label),
            skill_tags(project.tags)
        ));
    }
    html.push_str("</div>\n");
}

fn render_skills(html: &mut String, p: &Profile) {
    section_header(html, "Technical Skills");
    html.push_str("<div class=\"columns\">\n");
    for group in p.skills {
        html.push_str(&format!(
            "<div><h3>{}</h3>{}</div>\n",
            esc(group.title),
            skill_tags(group.skills)
        ));
    }
    html.push_str("</div>\n");
}

fn render_education(html: &mut String, p: &Profile) {
    section_header(html, "Education");
    html.push_str("<div class=\"columns\">\n");
    for entry in p.education {
        html.push_str(&format!(
            "<div class=\"info-card\"><h4>{}</h4><p><strong>{}</strong><br>{}<br>{}<br>\
             <strong>{}</strong></p></div>\n",
            esc(entry.degree),
            esc(entry.field),
            esc(entry.institution),
            esc(entry.period),
            esc(entry.grade)
        ));
    }
    html.push_str("</div>\n");
}

fn render_certifications(html: &mut String, p: &Profile) {
    html.push_str("<h3>🏆 Certifications &amp; Awards</h3>\n<div class=\"columns\">\n");
    for group in p.certifications {
        html.push_str(&format!(
            "<div><p><strong>{}:</strong></p>{}</div>\n",
            esc(group.title),
            bullet_list(group.items)
        ));
    }
    html.push_str("</div>\n");
}

fn render_contact(html: &mut String, p: &Profile, view: &PageView) {
    section_header(html, "Get In Touch");
    html.push_str("<div class=\"columns\">\n<div>\n<h3>💼 I'm interested in:</h3>\n<ul>\n");
    for interest in p.interests {
        html.push_str(&format!("<li><strong>{}</strong></li>\n", esc(interest)));
    }
    html.push_str(&format!(
        "</ul>\n<h3>📱 Connect with me:</h3>\n<p>\
         <strong>📧 Email:</strong> <a href=\"mailto:{email}\">{email}</a><br>\
         <strong>📱 Phone:</strong> {phone}<br>\
         <strong>🔗 LinkedIn:</strong> <a href=\"{linkedin}\">{linkedin}</a><br>\
         <strong>👨‍💻 GitHub:</strong> <a href=\"{github}\">{github}</a><br>\
         <strong>📍 Location:</strong> {location}</p>\n</div>\n",
        email = esc(p.email),
        phone = esc(p.phone),
        linkedin = esc(p.linkedin_url),
        github = esc(p.github_url),
        location = esc(p.location),
    ));

    html.push_str("<div>\n<h3>💬 Send me a message</h3>\n<div id=\"contact-notice\">\n");
    if let Some(notice) = &view.notice {
        render_notice(html, notice);
    }
    html.push_str("</div>\n");
    render_form(html, view.form.as_ref());
    html.push_str("</div>\n</div>\n");
}

fn notice(html: &mut String, kind: &str, text: &str) {
    html.push_str(&format!(
        "<div class=\"notice notice-{kind}\">{}</div>\n",
        esc(text)
    ));
}

fn render_notice(html: &mut String, contact: &ContactNotice) {
    match contact {
        ContactNotice::Invalid(err) => notice(html, "error", err.user_message()),
        ContactNotice::Unreadable => notice(
            html,
            "error",
            "Sorry, your message could not be read. Please check the form and try again.",
        ),
        ContactNotice::Outcome(DispatchOutcome::Delivered { channel }) => {
            notice(
                html,
                "success",
                "✅ Thank you for your message! I'll get back to you soon.",
            );
            let detail = match channel {
                Channel::Rich => {
                    "💬 Your message has been sent to Discord! I typically respond within 24 hours."
                }
                Channel::Simple => "💬 Your message has been sent! I typically respond within 24 hours.",
            };
            notice(html, "info", detail);
        }
        ContactNotice::Outcome(DispatchOutcome::ManualFallback { mailto, reason }) => {
            notice(html, "info", "📧 Click here to send email directly:");
            html.push_str(&format!(
                "<p><a id=\"manual-email\" href=\"{}\">📧 Send Email</a></p>\n",
                esc(mailto)
            ));
            notice(
                html,
                "warning",
                &format!(
                    "⚠️ Discord notification failed: {reason}. Please use the direct email link above."
                ),
            );
        }
    }
}

fn render_form(html: &mut String, previous: Option<&ContactSubmission>) {
    let (name, email, message, selected) = match previous {
        Some(s) => (s.name.as_str(), s.email.as_str(), s.message.as_str(), s.subject),
        None => ("", "", "", Subject::default()),
    };

    let options: String = Subject::ALL
        .iter()
        .map(|subject| {
            format!(
                "<option value=\"{label}\"{sel}>{label}</option>",
                label = esc(subject.label()),
                sel = if *subject == selected { " selected" } else { "" }
            )
        })
        .collect();

    html.push_str(&format!(
        "<form class=\"contact-form\" method=\"post\" action=\"/contact\">\n\
         <label for=\"name\">Your Name *</label>\
         <input id=\"name\" name=\"name\" type=\"text\" placeholder=\"Enter your full name\" value=\"{name}\">\n\
         <label for=\"email\">Your Email *</label>\
         <input id=\"email\" name=\"email\" type=\"text\" placeholder=\"your.email@example.com\" value=\"{email}\">\n\
         <label for=\"subject\">Subject</label>\
         <select id=\"subject\" name=\"subject\">{options}</select>\n\
         <label for=\"message\">Message *</label>\
         <textarea id=\"message\" name=\"message\" rows=\"6\" placeholder=\"Tell me about your inquiry...\">{message}</textarea>\n\
         <button type=\"submit\">Send Message 💬</button>\n\
         </form>\n",
        name = esc(name),
        email = esc(email),
        message = esc(message),
    ));
}

fn render_setup_guide(html: &mut String) {
    html.push_str(
        "<hr>\n<h3>🔧 Discord Setup Instructions</h3>\n\
         <details>\n<summary>Click to see Discord webhook setup guide</summary>\n\
         <p><strong>To enable Discord notifications:</strong></p>\n<ol>\n\
         <li><strong>Create a Discord Server</strong> (if you don't have one)</li>\n\
         <li><strong>Create a Webhook:</strong> right-click a channel, choose Edit Channel, \
         open Integrations &rarr; Webhooks, click &quot;New Webhook&quot; and copy the webhook URL.</li>\n\
         <li><strong>Configure the webhook URL:</strong> set <code>DISCORD_WEBHOOK_URL</code> in the \
         environment (or a <code>.env</code> file), or point <code>DISCORD_WEBHOOK_URL_FILE</code> \
         at a mounted secret file, then restart the service.</li>\n\
         <li><strong>Test the integration</strong> by submitting a message through the contact form.</li>\n\
         </ol>\n\
         <p><strong>Security Note:</strong> Never commit webhook URLs to public repositories!</p>\n\
         </details>\n",
    );
}

fn render_footer(html: &mut String, p: &Profile) {
    let lines: String = p
        .footer_lines
        .iter()
        .map(|line| format!("<p>{}</p>", esc(line)))
        .collect();
    html.push_str(&format!(
        "<footer>\n<p><strong>Built with ❤️ in Rust | © 2025 {name}</strong></p>\n{lines}\n\
         <div style=\"margin-top: 20px;\">\
         <a href=\"{linkedin}\" target=\"_blank\">LinkedIn</a>\
         <a href=\"{github}\" target=\"_blank\">GitHub</a>\
         <a href=\"mailto:{email}\">Email</a></div>\n</footer>\n",
        name = esc(p.name),
        linkedin = esc(p.linkedin_url),
        github = esc(p.github_url),
        email = esc(p.email),
    ));
}
