use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_RETRY_TIME_SECS: u64 = 480;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Typed configuration, loaded once at startup and immutable thereafter.
#[derive(Clone, Debug)]
pub struct Config {
    // Required secrets
    pub practicum_token: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: ChatId,

    // Tunables with defaults
    pub endpoint_url: String,
    pub retry_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `load()` wires this to the process
    /// environment; tests pass a map.
    ///
    /// All three secrets are checked before the first error is returned so
    /// the startup diagnostic names every missing variable at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let practicum_token = lookup("PRACTICUM_TOKEN").and_then(non_empty);
        let telegram_bot_token = lookup("TELEGRAM_TOKEN").and_then(non_empty);
        let telegram_chat_id = lookup("TELEGRAM_CHAT_ID").and_then(non_empty);

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push("PRACTICUM_TOKEN");
        }
        if telegram_bot_token.is_none() {
            missing.push("TELEGRAM_TOKEN");
        }
        if telegram_chat_id.is_none() {
            missing.push("TELEGRAM_CHAT_ID");
        }
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required environment variables: {missing:?}"
            )));
        }

        let telegram_chat_id = {
            let raw = telegram_chat_id.unwrap_or_default();
            let id = raw.trim().parse::<i64>().map_err(|_| {
                Error::Config(format!("TELEGRAM_CHAT_ID is not a numeric chat id: {raw}"))
            })?;
            ChatId(id)
        };

        let endpoint_url = lookup("ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let retry_interval = Duration::from_secs(
            parse_u64(lookup("RETRY_TIME")).unwrap_or(DEFAULT_RETRY_TIME_SECS),
        );
        let request_timeout = Duration::from_millis(
            parse_u64(lookup("REQUEST_TIMEOUT_MS")).unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        );

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_bot_token: telegram_bot_token.unwrap_or_default(),
            telegram_chat_id,
            endpoint_url,
            retry_interval,
            request_timeout,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, value) in parse_dotenv(&contents) {
        if env::var_os(&key).is_none() {
            env::set_var(key, value); // do not override existing env
        }
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

        let key = k.trim();
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

fn parse_u64(v: Option<String>) -> Option<u64> {
    v.and_then(|s| s.trim().parse::<u64>().ok())
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
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        move |key| map.get(key).cloned()
    }

    #[test]
    fn all_secrets_present_loads_defaults() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "123456"),
        ]);
        let cfg = Config::from_lookup(lookup(&map)).unwrap();
        assert_eq!(cfg.telegram_chat_id, ChatId(123456));
        assert_eq!(cfg.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(cfg.retry_interval, Duration::from_secs(480));
        assert_eq!(cfg.request_timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn missing_secrets_are_all_named_at_once() {
        let map = env(&[("TELEGRAM_CHAT_ID", "1")]);
        let err = Config::from_lookup(lookup(&map)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PRACTICUM_TOKEN"));
        assert!(msg.contains("TELEGRAM_TOKEN"));
        assert!(!msg.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn empty_secret_counts_as_missing() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "   "),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "1"),
        ]);
        let err = Config::from_lookup(lookup(&map)).unwrap_err();
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn non_numeric_chat_id_is_a_config_error() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "@channel"),
        ]);
        let err = Config::from_lookup(lookup(&map)).unwrap_err();
        assert!(err.to_string().contains("numeric chat id"));
    }

    #[test]
    fn tunables_can_be_overridden() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "1"),
            ("ENDPOINT", "http://localhost:8080/statuses/"),
            ("RETRY_TIME", "5"),
            ("REQUEST_TIMEOUT_MS", "2500"),
        ]);
        let cfg = Config::from_lookup(lookup(&map)).unwrap();
        assert_eq!(cfg.endpoint_url, "http://localhost:8080/statuses/");
        assert_eq!(cfg.retry_interval, Duration::from_secs(5));
        assert_eq!(cfg.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn dotenv_lines_parse_with_quotes_and_comments() {
        let parsed = parse_dotenv(
            "# comment\n\
             PRACTICUM_TOKEN=abc\n\
             TELEGRAM_TOKEN=\"quoted\"\n\
             \n\
             broken-line\n\
             TELEGRAM_CHAT_ID='42'\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("PRACTICUM_TOKEN".to_string(), "abc".to_string()),
                ("TELEGRAM_TOKEN".to_string(), "quoted".to_string()),
                ("TELEGRAM_CHAT_ID".to_string(), "42".to_string()),
            ]
        );
    }
}
