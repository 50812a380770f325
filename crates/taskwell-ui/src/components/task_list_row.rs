use taskwell_core::task::{
  Task,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

fn badge_class(
  status: TaskStatus
) -> &'static str {
  match status {
    | TaskStatus::Pending => {
      "badge-pending"
    }
    | TaskStatus::Processing => {
      "badge-processing"
    }
    | TaskStatus::Completed => {
      "badge-completed"
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_edit:   Callback<Task>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let on_edit_click = {
    let on_edit = props.on_edit.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_edit.emit(task.clone());
    })
  };

  let on_delete_click = {
    let on_delete =
      props.on_delete.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_delete.emit(task.clone());
    })
  };

  html! {
      <div class="task-row">
          <div class="col-title" onclick={on_edit_click.clone()}>
              <div class="task-title">{ &props.task.task_title }</div>
              <div class="task-description">{ &props.task.task_description }</div>
          </div>
          <div class="col-status">
              <span class={classes!("badge", badge_class(props.task.task_status))}>
                  { props.task.status_label() }
              </span>
          </div>
          <div class="col-actions">
              <button class="row-action" onclick={on_edit_click}>
                  { "Edit" }
              </button>
              <button class="row-action row-action-danger" onclick={on_delete_click}>
                  { "Delete" }
              </button>
          </div>
      </div>
  }
}
