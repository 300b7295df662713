//! Homework domain model
//!
//! A single submission's review record and its status.

use std::str::FromStr;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work
    Approved,

    /// Work is under review
    Reviewing,

    /// Reviewer returned the work with remarks
    Rejected,
}

impl HomeworkStatus {
    /// All statuses known to the verdict table
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A homework submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Name of the submitted work
    pub homework_name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl Homework {
    /// Message announcing this work's current status
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("approved".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Approved));
        assert_eq!("reviewing".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Reviewing));
        assert_eq!("rejected".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Rejected));
        assert_eq!(
            "Approved".parse::<HomeworkStatus>(),
            Err("Approved".to_string())
        );
    }

    #[test]
    fn test_status_message() {
        let homework = Homework {
            homework_name: "hw2".to_string(),
            status: HomeworkStatus::Reviewing,
        };

        assert_eq!(
            homework.status_message(),
            "Изменился статус проверки работы \"hw2\". Работа взята на проверку ревьюером."
        );
    }
}
