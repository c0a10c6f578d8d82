use chrono::Utc;

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Unix-seconds boundary for `from_date` queries.
///
/// Owned exclusively by the poll loop; advanced to the server's reported
/// `current_date` once per cycle when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollCursor(pub i64);

impl PollCursor {
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }
}

/// Review state reported by the API. Anything else is undocumented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Localized verdict shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One submission's review metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// The status-change sentence sent to the chat.
    pub fn status_line(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\": {}",
            self.name,
            self.status.verdict()
        )
    }
}
