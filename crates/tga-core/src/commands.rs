//! Command routing.

/// Recognized commands. Anything else gets the usage hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotCommand {
    /// `/start [payload]`; the payload is the deep-link argument, if any.
    Start { payload: Option<String> },
    Info,
    Other,
}

impl BotCommand {
    /// Route a message text. `None` (stickers, photos, ...) falls through to `Other`.
    ///
    /// Command names are case-sensitive. A `/cmd@mention` only counts when the
    /// mention is this bot's username; without a known username any mention
    /// is rejected.
    pub fn route(text: Option<&str>, bot_username: Option<&str>) -> Self {
        let Some(parsed) = text.and_then(parse_command) else {
            return BotCommand::Other;
        };
        if let Some(mention) = parsed.mention {
            let ours = bot_username.is_some_and(|me| me.eq_ignore_ascii_case(mention));
            if !ours {
                return BotCommand::Other;
            }
        }
        match parsed.name {
            "start" => BotCommand::Start {
                payload: parsed.args.split_whitespace().next().map(str::to_string),
            },
            "info" => BotCommand::Info,
            _ => BotCommand::Other,
        }
    }
}

/// `/cmd@mention arg1 ...` split into its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub mention: Option<&'a str>,
    pub args: &'a str,
}

/// Returns `None` when the text is not a command at all.
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let args = parts.next().unwrap_or("").trim();

    let body = first.strip_prefix('/')?;
    let (name, mention) = match body.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (body, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        name,
        mention,
        args,
    })
}
