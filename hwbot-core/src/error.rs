//! Error types for response validation
//!
//! Display strings end up in the chat, so they are written in the chat's language.

use thiserror::Error;

/// Errors raised while validating a status API response or one of its work items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// A value that must be a JSON object is something else
    #[error("{0} не является dict")]
    NotAnObject(String),

    /// The response has no `homeworks` key
    #[error("Пустой ответ от API: нет ключа homeworks")]
    EmptyResponse,

    /// The `homeworks` value is not a JSON array
    #[error("{0} не является list")]
    HomeworksNotAList(String),

    /// A work item lacks a required key
    #[error("В ответе отсутствует ключ {0}")]
    MissingKey(&'static str),

    /// A work item field has the wrong JSON type
    #[error("Ключ {key} имеет неверный тип: {value}")]
    WrongFieldType {
        /// Name of the offending field
        key: &'static str,
        /// The value as received
        value: String,
    },

    /// A work item carries a status outside the verdict table
    #[error("Неизвестный статус работы - {0}")]
    StrangeStatus(String),
}
