//! Typed decode of a homework record + the localized status-change message.

use serde_json::Value;

use crate::{
    domain::{Homework, HomeworkStatus},
    errors::Error,
    Result,
};

/// Decodes one homework record, requiring `homework_name` and `status`.
///
/// A status outside the documented three-value set is an error, not a
/// passthrough.
pub fn decode_homework(record: &Value) -> Result<Homework> {
    let name = require_str(record, "homework_name")?;
    let raw_status = require_str(record, "status")?;

    let Some(status) = HomeworkStatus::parse(raw_status) else {
        return Err(Error::UnknownStatus {
            status: raw_status.to_string(),
        });
    };

    Ok(Homework {
        name: name.to_string(),
        status,
    })
}

/// Decode + format in one step, the shape the watcher consumes.
pub fn status_message(record: &Value) -> Result<String> {
    Ok(decode_homework(record)?.status_line())
}

fn require_str<'a>(record: &'a Value, key: &'static str) -> Result<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .ok_or(Error::MissingRecordKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_status_formats_the_exact_sentence() {
        let record = json!({ "homework_name": "Project1", "status": "approved" });
        assert_eq!(
            status_message(&record).unwrap(),
            "Изменился статус проверки работы \"Project1\": \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn reviewing_and_rejected_have_their_own_verdicts() {
        let reviewing = json!({ "homework_name": "hw", "status": "reviewing" });
        assert!(status_message(&reviewing)
            .unwrap()
            .ends_with("Работа взята на проверку ревьюером."));

        let rejected = json!({ "homework_name": "hw", "status": "rejected" });
        assert!(status_message(&rejected)
            .unwrap()
            .ends_with("Работа проверена: у ревьюера есть замечания."));
    }

    #[test]
    fn missing_name_key_is_identified() {
        let record = json!({ "status": "approved" });
        let err = status_message(&record).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRecordKey { key: "homework_name" }
        ));
    }

    #[test]
    fn missing_status_key_is_identified() {
        let record = json!({ "homework_name": "hw" });
        let err = status_message(&record).unwrap_err();
        assert!(matches!(err, Error::MissingRecordKey { key: "status" }));
    }

    #[test]
    fn undocumented_status_is_named() {
        let record = json!({ "homework_name": "hw", "status": "burned" });
        match status_message(&record).unwrap_err() {
            Error::UnknownStatus { status } => assert_eq!(status, "burned"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
