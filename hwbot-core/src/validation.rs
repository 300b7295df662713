//! Response validation
//!
//! Structural checks on status API responses and formatting of the
//! resulting status messages. Both operations are pure: they only inspect
//! their input and log what they find.

use serde_json::Value;
use tracing::debug;

use crate::domain::homework::{Homework, HomeworkStatus};
use crate::dto::status::StatusResponse;
use crate::error::ResponseError;

/// Validates a status API response body
///
/// Checks, in order, that the body is an object, that it has a `homeworks`
/// key and that `homeworks` is an array. The list may be empty.
/// `current_date` is optional; a missing or non-integer value yields `None`.
pub fn check_response(body: Value) -> Result<StatusResponse, ResponseError> {
    debug!("Checking status API response");

    let mut map = match body {
        Value::Object(map) => map,
        other => return Err(ResponseError::NotAnObject(other.to_string())),
    };

    let homeworks = match map.remove("homeworks") {
        None => return Err(ResponseError::EmptyResponse),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(ResponseError::HomeworksNotAList(other.to_string())),
    };

    let current_date = map.get("current_date").and_then(Value::as_i64);

    debug!(
        "Response is valid: {} work item(s), current_date={:?}",
        homeworks.len(),
        current_date
    );

    Ok(StatusResponse {
        homeworks,
        current_date,
    })
}

/// Extracts a typed work item from its raw JSON
pub fn parse_homework(item: &Value) -> Result<Homework, ResponseError> {
    let map = item
        .as_object()
        .ok_or_else(|| ResponseError::NotAnObject(item.to_string()))?;

    let homework_name = match map.get("homework_name") {
        None => return Err(ResponseError::MissingKey("homework_name")),
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(ResponseError::WrongFieldType {
                key: "homework_name",
                value: other.to_string(),
            });
        }
    };

    let status = match map.get("status") {
        None => return Err(ResponseError::MissingKey("status")),
        Some(Value::String(code)) => code
            .parse::<HomeworkStatus>()
            .map_err(ResponseError::StrangeStatus)?,
        Some(other) => return Err(ResponseError::StrangeStatus(other.to_string())),
    };

    Ok(Homework {
        homework_name,
        status,
    })
}

/// Formats the status message for one work item
///
/// Fails if `homework_name` is missing or the status is not in the verdict table.
pub fn parse_status(item: &Value) -> Result<String, ResponseError> {
    debug!("Parsing homework status");
    let homework = parse_homework(item)?;
    debug!(
        "Homework '{}' has status {}",
        homework.homework_name, homework.status
    );
    Ok(homework.status_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_valid() {
        let body = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });

        let response = check_response(body).unwrap();
        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.current_date, Some(1000));
    }

    #[test]
    fn test_check_response_empty_list_is_valid() {
        let response = check_response(json!({"homeworks": [], "current_date": 2000})).unwrap();
        assert!(response.homeworks.is_empty());
        assert_eq!(response.current_date, Some(2000));
    }

    #[test]
    fn test_check_response_not_an_object() {
        let err = check_response(json!([{"homeworks": []}])).unwrap_err();
        assert!(matches!(err, ResponseError::NotAnObject(_)));
    }

    #[test]
    fn test_check_response_missing_homeworks() {
        let err = check_response(json!({"current_date": 1000})).unwrap_err();
        assert_eq!(err, ResponseError::EmptyResponse);

        let err = check_response(json!({})).unwrap_err();
        assert_eq!(err, ResponseError::EmptyResponse);
    }

    #[test]
    fn test_check_response_homeworks_not_a_list() {
        let err = check_response(json!({"homeworks": {"homework_name": "hw1"}})).unwrap_err();
        assert!(matches!(err, ResponseError::HomeworksNotAList(_)));
    }

    #[test]
    fn test_check_response_ignores_bad_current_date() {
        let response = check_response(json!({"homeworks": [], "current_date": "soon"})).unwrap();
        assert_eq!(response.current_date, None);
    }

    #[test]
    fn test_parse_status_every_verdict() {
        for status in HomeworkStatus::ALL {
            let item = json!({"homework_name": "hw", "status": status.as_str()});
            let message = parse_status(&item).unwrap();
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_parse_status_approved_message() {
        let item = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&item).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_missing_name() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(err, ResponseError::MissingKey("homework_name"));
    }

    #[test]
    fn test_parse_status_missing_status() {
        let err = parse_status(&json!({"homework_name": "hw1"})).unwrap_err();
        assert_eq!(err, ResponseError::MissingKey("status"));
    }

    #[test]
    fn test_parse_status_strange_status() {
        let err = parse_status(&json!({"homework_name": "hw1", "status": "lost"})).unwrap_err();
        assert_eq!(err, ResponseError::StrangeStatus("lost".to_string()));
        assert_eq!(err.to_string(), "Неизвестный статус работы - lost");

        let err = parse_status(&json!({"homework_name": "hw1", "status": 3})).unwrap_err();
        assert_eq!(err, ResponseError::StrangeStatus("3".to_string()));
    }

    #[test]
    fn test_parse_status_name_wrong_type() {
        let err = parse_status(&json!({"homework_name": 7, "status": "approved"})).unwrap_err();
        assert!(matches!(
            err,
            ResponseError::WrongFieldType {
                key: "homework_name",
                ..
            }
        ));
    }
}
