use chrono::NaiveDate;

use crate::protocol::TaskUpsertArgs;
use crate::task::{
  Task,
  TaskStatus
};

/// Editable state behind the task
/// modal. The server is authoritative
/// for validation; the draft only
/// carries what the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
  pub task_id:     Option<i64>,
  pub title:       String,
  pub description: String,
  pub status:      TaskStatus,
  pub due_date:    Option<NaiveDate>
}

impl Default for TaskDraft {
  fn default() -> Self {
    Self::blank()
  }
}

impl TaskDraft {
  #[must_use]
  pub fn blank() -> Self {
    Self {
      task_id:     None,
      title:       String::new(),
      description: String::new(),
      status:      TaskStatus::Pending,
      due_date:    None
    }
  }

  #[must_use]
  pub fn for_task(
    task: &Task
  ) -> Self {
    Self {
      task_id:     Some(task.task_id),
      title:       task
        .task_title
        .clone(),
      description: task
        .task_description
        .clone(),
      status:      task.task_status,
      due_date:    task.task_due_date
    }
  }

  pub fn is_edit(&self) -> bool {
    self.task_id.is_some()
  }

  #[must_use]
  pub fn to_upsert(
    &self
  ) -> TaskUpsertArgs {
    TaskUpsertArgs {
      task_id:          self.task_id,
      task_title:       self
        .title
        .clone(),
      task_description: self
        .description
        .clone(),
      task_status:      self.status,
      task_due_date:    self.due_date
    }
  }
}
