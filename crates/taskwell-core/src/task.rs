use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datetime::due_date_serde;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
}

impl TaskStatus {
    pub fn all() -> [Self; 3] {
        [Self::Pending, Self::Processing, Self::Completed]
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Processing => 1,
            Self::Completed => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::Processing),
            2 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,

    #[serde(default)]
    pub task_title: String,

    #[serde(default)]
    pub task_description: String,

    #[serde(with = "status_code_serde")]
    pub task_status: TaskStatus,

    #[serde(default, with = "due_date_serde::option")]
    pub task_due_date: Option<NaiveDate>,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        self.task_status.label()
    }
}

// The API stores the status as a bare column and echoes it back either as
// an integer or as the numeric string the form posted.
pub mod status_code_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TaskStatus;

    pub fn serialize<S>(status: &TaskStatus, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(status.code())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawStatus {
            Number(i64),
            Text(String),
        }

        let code = match RawStatus::deserialize(deserializer)? {
            RawStatus::Number(value) => value,
            RawStatus::Text(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid task status {value:?}")))?,
        };

        TaskStatus::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown task status code {code}")))
    }
}
