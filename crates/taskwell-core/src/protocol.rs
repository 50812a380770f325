use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::datetime::format_due_date;
use crate::task::{
  Task,
  TaskStatus
};

pub type FormParams =
  Vec<(&'static str, String)>;

/// JSON body every endpoint replies
/// with; the HTTP status code mirrors
/// the inner `status` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
  #[serde(default)]
  pub status:  u16,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub data:    Value
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
  Ok(T),
  SessionExpired,
  ValidationError(String),
  Other(String)
}

impl ApiOutcome<Value> {
  pub fn decode<R>(
    self
  ) -> ApiOutcome<R>
  where
    R: DeserializeOwned
  {
    match self {
      | Self::Ok(value) => {
        match serde_json::from_value(
          value
        ) {
          | Ok(payload) => {
            ApiOutcome::Ok(payload)
          }
          | Err(error) => {
            ApiOutcome::Other(format!(
              "failed decoding \
               response payload: \
               {error}"
            ))
          }
        }
      }
      | Self::SessionExpired => {
        ApiOutcome::SessionExpired
      }
      | Self::ValidationError(
        message
      ) => {
        ApiOutcome::ValidationError(
          message
        )
      }
      | Self::Other(message) => {
        ApiOutcome::Other(message)
      }
    }
  }
}

/// Classification keys off the HTTP
/// status alone; the envelope's inner
/// `status` field is informational.
#[must_use]
pub fn classify(
  http_status: u16,
  envelope: Option<Envelope>
) -> ApiOutcome<Value> {
  let message = envelope
    .as_ref()
    .and_then(|env| {
      env.message.clone()
    });

  match http_status {
    | 200 => ApiOutcome::Ok(
      envelope
        .map(|env| env.data)
        .unwrap_or(Value::Null)
    ),
    | 401 => {
      ApiOutcome::SessionExpired
    }
    | 422 => {
      ApiOutcome::ValidationError(
        message.unwrap_or_else(|| {
          "Validation failed."
            .to_string()
        })
      )
    }
    | status => ApiOutcome::Other(
      message.unwrap_or_else(|| {
        format!(
          "Request failed (HTTP \
           {status})"
        )
      })
    )
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInArgs {
  pub user_email:    String,
  pub user_password: String
}

impl SignInArgs {
  #[must_use]
  pub fn form_params(
    &self
  ) -> FormParams {
    vec![
      (
        "user_email",
        self.user_email.clone()
      ),
      (
        "user_password",
        self.user_password.clone()
      ),
    ]
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListArgs {
  pub status_filter:
    Option<TaskStatus>,
  pub skip:          u32,
  pub search:        String
}

impl TaskListArgs {
  #[must_use]
  pub fn form_params(
    &self
  ) -> FormParams {
    vec![
      (
        "status_filter",
        self
          .status_filter
          .map(|status| {
            status.code().to_string()
          })
          .unwrap_or_default()
      ),
      ("skip", self.skip.to_string()),
      ("search", self.search.clone()),
    ]
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskUpsertArgs {
  pub task_id:          Option<i64>,
  pub task_title:       String,
  pub task_description: String,
  pub task_status:      TaskStatus,
  pub task_due_date:
    Option<NaiveDate>
}

impl TaskUpsertArgs {
  /// Identifier presence switches the
  /// endpoint between create and
  /// update.
  #[must_use]
  pub fn form_params(
    &self
  ) -> FormParams {
    let mut params = vec![
      (
        "task_title",
        self.task_title.clone()
      ),
      (
        "task_description",
        self.task_description.clone()
      ),
      (
        "task_status",
        self
          .task_status
          .code()
          .to_string()
      ),
      (
        "task_due_date",
        self
          .task_due_date
          .map(format_due_date)
          .unwrap_or_default()
      ),
    ];
    if let Some(task_id) =
      self.task_id
    {
      params.push((
        "task_id",
        task_id.to_string()
      ));
    }
    params
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRemoveArgs {
  pub task_id: i64
}

impl TaskRemoveArgs {
  #[must_use]
  pub fn form_params(
    &self
  ) -> FormParams {
    vec![(
      "task_id",
      self.task_id.to_string()
    )]
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TaskPage {
  #[serde(default)]
  pub task_list:     Vec<Task>,
  #[serde(default)]
  pub total_pages:   u32,
  #[serde(default)]
  pub total_records: u64
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SignInData {
  pub token: String
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::{
    ApiOutcome,
    Envelope,
    SignInData,
    TaskListArgs,
    TaskPage,
    TaskUpsertArgs,
    classify
  };
  use crate::task::TaskStatus;

  fn envelope(
    status: u16,
    message: &str
  ) -> Envelope {
    Envelope {
      status,
      message: Some(
        message.to_string()
      ),
      data: serde_json::Value::Null
    }
  }

  #[test]
  fn unauthorized_is_session_expired()
  {
    let outcome = classify(
      401,
      Some(envelope(
        401,
        "Session expired! Please \
         log in."
      ))
    );
    assert_eq!(
      outcome,
      ApiOutcome::SessionExpired
    );
    assert_eq!(
      classify(401, None),
      ApiOutcome::SessionExpired
    );
  }

  #[test]
  fn validation_carries_the_server_message()
   {
    let outcome = classify(
      422,
      Some(envelope(
        422,
        "Task Title is required."
      ))
    );
    assert_eq!(
      outcome,
      ApiOutcome::ValidationError(
        "Task Title is required."
          .to_string()
      )
    );
  }

  #[test]
  fn success_returns_the_payload() {
    let outcome = classify(
      200,
      Some(Envelope {
        status:  200,
        message: Some(
          "Login Successful."
            .to_string()
        ),
        data:    json!({
          "token": "abc123"
        })
      })
    );
    let decoded = outcome
      .decode::<SignInData>();
    assert_eq!(
      decoded,
      ApiOutcome::Ok(SignInData {
        token: "abc123".to_string()
      })
    );
  }

  #[test]
  fn other_errors_keep_the_server_message()
   {
    assert_eq!(
      classify(
        500,
        Some(envelope(
          500,
          "Task already exists."
        ))
      ),
      ApiOutcome::Other(
        "Task already exists."
          .to_string()
      )
    );
    assert_eq!(
      classify(502, None),
      ApiOutcome::Other(
        "Request failed (HTTP 502)"
          .to_string()
      )
    );
  }

  #[test]
  fn decode_failure_is_surfaced() {
    let outcome = classify(
      200,
      Some(Envelope {
        status:  200,
        message: None,
        data:    json!({
          "unexpected": true
        })
      })
    );
    assert!(matches!(
      outcome.decode::<SignInData>(),
      ApiOutcome::Other(_)
    ));
  }

  #[test]
  fn list_params_follow_the_wire_names()
   {
    let args = TaskListArgs {
      status_filter: Some(
        TaskStatus::Processing
      ),
      skip:          3,
      search:        "report"
        .to_string()
    };
    assert_eq!(
      args.form_params(),
      vec![
        (
          "status_filter",
          "1".to_string()
        ),
        ("skip", "3".to_string()),
        (
          "search",
          "report".to_string()
        ),
      ]
    );

    let unfiltered = TaskListArgs {
      status_filter: None,
      skip:          1,
      search:        String::new()
    };
    assert_eq!(
      unfiltered.form_params()[0],
      (
        "status_filter",
        String::new()
      )
    );
  }

  #[test]
  fn upsert_includes_id_only_for_edits()
   {
    let create = TaskUpsertArgs {
      task_id:          None,
      task_title:       "Weekly \
                         report"
        .to_string(),
      task_description: "Numbers"
        .to_string(),
      task_status:
        TaskStatus::Pending,
      task_due_date:    None
    };
    let params =
      create.form_params();
    assert!(!params.iter().any(
      |(name, _)| *name == "task_id"
    ));
    assert!(params.contains(&(
      "task_due_date",
      String::new()
    )));

    let edit = TaskUpsertArgs {
      task_id: Some(7),
      ..create
    };
    assert!(
      edit.form_params().contains(&(
        "task_id",
        "7".to_string()
      ))
    );
  }

  #[test]
  fn task_page_tolerates_sparse_payloads()
   {
    let page: TaskPage =
      serde_json::from_value(json!({
        "task_list": [],
        "current_page": "1",
        "per_page_records": 10,
        "total_pages": 0,
        "total_records": 0
      }))
      .unwrap();
    assert!(page.task_list.is_empty());
    assert_eq!(page.total_pages, 0);

    let bare: TaskPage =
      serde_json::from_value(
        json!({})
      )
      .unwrap();
    assert_eq!(bare.total_records, 0);
  }
}
