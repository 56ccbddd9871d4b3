/**
 * Demo Inbox Generator
 *
 * Stand-in for a real provider integration. Builds the fixed batch of
 * canned messages that the sync endpoint inserts for a user: a welcome
 * note, a sync-progress notice, and a website-lead alert, with staggered
 * received times. Message ids carry a millisecond timestamp plus a
 * sequence suffix and share the `demo-` prefix the purge keys on.
 */

use chrono::{DateTime, Duration, Utc};

use crate::emails::types::{EmailAddress, NewEmail};

/// Number of messages produced per sync.
pub const DEMO_BATCH_SIZE: usize = 3;

/// Prefix identifying generated messages.
pub const DEMO_MESSAGE_PREFIX: &str = "demo-";

/// Build the demo batch addressed to a user. `provider` is the raw value
/// from the request; it only affects the second message's wording.
pub fn demo_inbox(
    user_name: &str,
    user_email: &str,
    provider: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<NewEmail> {
    let greeting_name = if user_name.is_empty() { "there" } else { user_name };
    let recipient = EmailAddress {
        name: user_name.to_string(),
        email: user_email.to_string(),
    };
    let provider_label = provider.unwrap_or("your email provider");
    let millis = now.timestamp_millis();

    vec![
        NewEmail {
            message_id: format!("{DEMO_MESSAGE_PREFIX}{millis}-1"),
            subject: "Welcome to SuperSync - Your Email Integration is Ready!".to_string(),
            sender: EmailAddress {
                name: "SuperSync Team".to_string(),
                email: "hello@supersync.com".to_string(),
            },
            recipients: vec![recipient.clone()],
            body: format!(
                "Hi {greeting_name}!\n\nWelcome to SuperSync! We're excited to have you on \
                 board. Your email integration has been successfully set up and you can now \
                 start managing your contacts and emails in one place.\n\nHere's what you can \
                 do:\n- Sync contacts from your email\n- Manage leads and prospects\n- Track \
                 email conversations\n- Organize your network\n\nIf you have any questions, \
                 just reply to this email.\n\nBest regards,\nThe SuperSync Team"
            ),
            is_read: false,
            is_important: true,
            labels: vec!["welcome".to_string(), "setup".to_string()],
            received_at: now,
        },
        NewEmail {
            message_id: format!("{DEMO_MESSAGE_PREFIX}{millis}-2"),
            subject: "Your contacts are being synced".to_string(),
            sender: EmailAddress {
                name: "SuperSync Support".to_string(),
                email: "support@supersync.com".to_string(),
            },
            recipients: vec![recipient.clone()],
            body: format!(
                "Hi {greeting_name},\n\nYour contact sync is in progress. We're importing your \
                 contacts from {provider_label} and organizing them for you.\n\nThis process \
                 usually takes a few minutes. You'll receive a notification once it's \
                 complete.\n\nIn the meantime, you can start exploring the dashboard and adding \
                 new contacts manually.\n\nThanks for choosing SuperSync!\n\nBest,\nSupport Team"
            ),
            is_read: false,
            is_important: false,
            labels: vec!["sync".to_string(), "notification".to_string()],
            received_at: now - Duration::minutes(30),
        },
        NewEmail {
            message_id: format!("{DEMO_MESSAGE_PREFIX}{millis}-3"),
            subject: "New lead from your website contact form".to_string(),
            sender: EmailAddress {
                name: "Website Lead".to_string(),
                email: "leads@supersync.com".to_string(),
            },
            recipients: vec![recipient],
            body: "A new lead has submitted your contact form:\n\nName: John Smith\nCompany: \
                   TechCorp Inc.\nEmail: john.smith@techcorp.com\nMessage: \"Interested in \
                   learning more about your email management solution for our team of 50+ \
                   people.\"\n\nThis lead has been automatically added to your contacts. You \
                   can follow up directly from your dashboard.\n\nDon't let this opportunity \
                   slip away!"
                .to_string(),
            is_read: false,
            is_important: true,
            labels: vec!["lead".to_string(), "website".to_string(), "urgent".to_string()],
            received_at: now - Duration::hours(1),
        },
    ]
}

/// Truncate a body for the sync preview.
pub fn preview_body(body: &str) -> String {
    let truncated: String = body.chars().take(150).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_shape() {
        let now = Utc::now();
        let batch = demo_inbox("Ann", "ann@example.com", Some("gmail"), now);

        assert_eq!(batch.len(), DEMO_BATCH_SIZE);
        for message in &batch {
            assert!(message.message_id.starts_with(DEMO_MESSAGE_PREFIX));
            assert!(!message.is_read);
            assert_eq!(message.recipients.len(), 1);
            assert_eq!(message.recipients[0].email, "ann@example.com");
            assert!(message.received_at <= now);
        }
    }

    #[test]
    fn test_message_ids_are_distinct() {
        let batch = demo_inbox("Ann", "ann@example.com", None, Utc::now());
        let mut ids: Vec<_> = batch.iter().map(|m| m.message_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEMO_BATCH_SIZE);
    }

    #[test]
    fn test_provider_appears_in_sync_notice() {
        let batch = demo_inbox("Ann", "ann@example.com", Some("outlook"), Utc::now());
        assert!(batch[1].body.contains("outlook"));

        let batch = demo_inbox("Ann", "ann@example.com", None, Utc::now());
        assert!(batch[1].body.contains("your email provider"));
    }

    #[test]
    fn test_preview_body_truncates() {
        let long = "x".repeat(500);
        let preview = preview_body(&long);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));

        assert_eq!(preview_body("short"), "short...");
    }
}
