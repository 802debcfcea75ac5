//! User-facing reply texts (Telegram HTML).

use crate::{
    formatting::{escape_html, json_block, link},
    messaging::types::{LinkButton, Reply},
};

pub const USAGE_HINT: &str = "🤖 Use the commands:\n\
/start - start working with the bot\n\
/info - show information about yourself";

pub const AUTH_FAILED: &str = "❌ <b>Authorization failed</b>\n\n\
Possible reasons:\n\
• the login link has expired (it is valid for 5 minutes)\n\
• this link has already been used\n\
• the server is temporarily unavailable\n\n\
Go back to the website and press \"Log in with Telegram\" again.";

pub const OPEN_SITE_LABEL: &str = "🌐 Open site";

pub fn welcome(first_name: &str) -> String {
    format!(
        "👋 Hi, {}!\n\n\
I show what Telegram shares with bots about you and confirm sign-ins on the website.\n\n\
📋 /info - show your profile data\n\
🔐 To sign in, press \"Log in with Telegram\" on the website and follow the link to this bot. \
The link is valid for 5 minutes.",
        escape_html(first_name)
    )
}

pub fn profile(json: &str) -> String {
    format!("📋 <b>Your profile:</b>\n\n{}", json_block(json))
}

/// Success reply; the link and its button are only added when the service
/// returned a callback URL.
pub fn auth_succeeded(callback_url: Option<&str>, service_message: Option<&str>) -> Reply {
    let note = service_message
        .filter(|m| !m.trim().is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "You are signed in on the website.".to_string());
    let header = format!("✅ <b>Authorization successful!</b>\n\n{note}");

    match callback_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => Reply::with_button(
            format!("{header}\n\n👉 {}", link(url, "Return to the site")),
            LinkButton::new(OPEN_SITE_LABEL, url),
        ),
        None => Reply::text(header),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_hint_lists_both_commands() {
        let lines: Vec<&str> = USAGE_HINT.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("/start"));
        assert!(lines[2].starts_with("/info"));
    }

    #[test]
    fn welcome_escapes_name() {
        let text = welcome("<Bob & Co>");
        assert!(text.contains("&lt;Bob &amp; Co&gt;"));
        assert!(!text.contains("<Bob"));
    }

    #[test]
    fn success_without_callback_has_no_button() {
        let reply = auth_succeeded(None, Some("Done"));
        assert!(reply.button.is_none());
        assert!(reply.html.contains("Done"));
        assert!(!reply.html.contains("href"));
    }
}
