use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://tgauth2.vercel.app/api";
pub const DEFAULT_TELEGRAM_FILE_BASE: &str = "https://api.telegram.org/file";

/// Typed configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub telegram_file_base: String,
    pub drop_pending_updates: bool,

    // Browser login handshake
    pub api_base_url: String,
    pub auth_forwarding: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        let api_base_url = lookup("API_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();

        let telegram_file_base = lookup("TELEGRAM_FILE_BASE")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_TELEGRAM_FILE_BASE.to_string());
        let telegram_file_base = telegram_file_base.trim().trim_end_matches('/').to_string();

        let auth_forwarding = lookup("AUTH_FORWARDING")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(true);
        let drop_pending_updates = lookup("DROP_PENDING_UPDATES")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(true);

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            telegram_file_base,
            drop_pending_updates,
            api_base_url,
            auth_forwarding,
        })
    }

    /// `{API_BASE}/auth/browser/complete`
    pub fn auth_complete_url(&self) -> String {
        format!("{}/auth/browser/complete", self.api_base_url)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim().trim_start_matches("export ").trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOT_TOKEN"));

        assert!(load(&[("BOT_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn defaults_apply() {
        let cfg = load(&[("BOT_TOKEN", "123:abc")]).unwrap();
        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.telegram_file_base, DEFAULT_TELEGRAM_FILE_BASE);
        assert!(cfg.auth_forwarding);
        assert!(cfg.drop_pending_updates);
        assert_eq!(
            cfg.auth_complete_url(),
            "https://tgauth2.vercel.app/api/auth/browser/complete"
        );
    }

    #[test]
    fn legacy_token_name_and_overrides() {
        let cfg = load(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("API_BASE_URL", "http://localhost:3000/api/"),
            ("AUTH_FORWARDING", "off"),
            ("DROP_PENDING_UPDATES", "no"),
        ])
        .unwrap();
        assert_eq!(cfg.bot_token, "t");
        assert_eq!(
            cfg.auth_complete_url(),
            "http://localhost:3000/api/auth/browser/complete"
        );
        assert!(!cfg.auth_forwarding);
        assert!(!cfg.drop_pending_updates);
    }

    #[test]
    fn unparseable_bool_keeps_default() {
        let cfg = load(&[("BOT_TOKEN", "t"), ("AUTH_FORWARDING", "maybe")]).unwrap();
        assert!(cfg.auth_forwarding);
    }

    #[test]
    fn dotenv_parsing() {
        let parsed = parse_dotenv(
            "# comment\n\nBOT_TOKEN=\"123:abc\"\nexport API_BASE_URL='http://x'\nbroken line\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("BOT_TOKEN".to_string(), "123:abc".to_string()),
                ("API_BASE_URL".to_string(), "http://x".to_string()),
            ]
        );
    }
}
