use taskwell_core::task::Task;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub fetching:  bool,
  pub error:     Option<String>,
  pub on_edit:   Callback<Task>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let body = if let Some(error) =
    props.error.as_ref().filter(|_| {
      props.tasks.is_empty()
    }) {
    html! {
        <div class="list-notice list-error">
            { format!("Could not load tasks: {error}") }
        </div>
    }
  } else if props.tasks.is_empty() {
    let placeholder = if props.fetching
    {
      "Loading..."
    } else {
      "No results found"
    };
    html! {
        <div class="list-notice">
            { placeholder }
        </div>
    }
  } else {
    html! {
        <>
            {
                for props.tasks.iter().cloned().map(|task| html! {
                    <TaskListRow
                        key={task.task_id}
                        task={task.clone()}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })
            }
            {
                if let Some(error) = props.error.as_ref() {
                    html! {
                        <div class="list-notice list-error">
                            { format!("Could not load more tasks: {error}") }
                        </div>
                    }
                } else {
                    Html::default()
                }
            }
        </>
    }
  };

  html! {
      <div class="task-list">
          <div class="task-list-header">
              <div class="col-title">{ "Task name" }</div>
              <div class="col-status">{ "Status" }</div>
              <div class="col-actions">{ "Actions" }</div>
          </div>
          { body }
      </div>
  }
}
