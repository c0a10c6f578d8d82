//! Shape validation for the homework API payload.
//!
//! The API answers with an untyped JSON body. Everything here returns typed
//! errors naming what was wrong instead of panicking on a surprise shape.

use serde_json::Value;

use crate::{errors::Error, Result};

/// Validates the payload shape and picks the most recent submission.
///
/// `Ok(None)` means a well-formed response with nothing to report (empty
/// `homeworks` list). Only the first entry is considered; earlier unread
/// entries are silently ignored.
pub fn extract_homework(response: &Value) -> Result<Option<Value>> {
    let Some(map) = response.as_object() else {
        return Err(Error::ResponseNotObject {
            value: response.to_string(),
        });
    };

    let Some(homeworks) = map.get("homeworks") else {
        return Err(Error::MissingHomeworks {
            keys: map.keys().cloned().collect(),
        });
    };

    let Some(list) = homeworks.as_array() else {
        return Err(Error::HomeworksNotList {
            value: homeworks.to_string(),
        });
    };

    let Some(first) = list.first() else {
        tracing::debug!("homework review status has not changed");
        return Ok(None);
    };

    Ok(Some(first.clone()))
}

/// The server's own clock, used to advance the poll cursor. Absent or
/// non-numeric values leave the cursor where it was.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
