/// Core error type for the watcher.
///
/// Adapter crates map their specific errors into this type so the driver can
/// route failures consistently (notify the chat vs. log-only).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// The endpoint answered, but not with HTTP 200.
    #[error("endpoint {url} with params from_date={from_date} is unavailable: HTTP {status}")]
    EndpointStatus {
        url: String,
        from_date: i64,
        status: u16,
    },

    /// Transport-level failure reaching the endpoint (DNS, timeout, refused
    /// connection, undecodable body).
    #[error("failed to reach {url}: {cause}")]
    Endpoint { url: String, cause: String },

    #[error("API response is not a JSON object: {value}")]
    ResponseNotObject { value: String },

    #[error("key `homeworks` is missing from the API response; available keys: {keys:?}")]
    MissingHomeworks { keys: Vec<String> },

    #[error("value under `homeworks` is not a list: {value}")]
    HomeworksNotList { value: String },

    #[error("homework record is missing required key `{key}`")]
    MissingRecordKey { key: &'static str },

    #[error("undocumented homework status: {status}")]
    UnknownStatus { status: String },

    /// The notifier itself could not deliver a message. Routed log-only by
    /// the driver: never notify about a notify failure.
    #[error("failed to send message: {0}")]
    SendMessage(String),
}

impl Error {
    pub fn is_send_failure(&self) -> bool {
        matches!(self, Error::SendMessage(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
