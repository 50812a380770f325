use gloo::events::EventListener;
use taskwell_core::datetime::{
  format_due_date,
  parse_due_date
};
use taskwell_core::draft::TaskDraft;
use taskwell_core::task::TaskStatus;
use wasm_bindgen::JsCast;
use web_sys::{
  Event,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with
};

use super::TextInput;

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub draft:     TaskDraft,
  pub busy:      bool,
  pub on_change: Callback<TaskDraft>,
  pub on_submit: Callback<()>,
  pub on_close:  Callback<()>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  {
    let on_close =
      props.on_close.clone();
    use_effect_with((), move |_| {
      let document =
        web_sys::window().and_then(
          |window| window.document()
        );
      let listener =
        document.map(|document| {
          EventListener::new(
            &document,
            "keydown",
            move |event| {
              let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| {
                  key.key() == "Escape"
                });
              if escape {
                on_close.emit(());
              }
            }
          )
        });
      move || drop(listener)
    });
  }

  let on_title_input = {
    let on_change =
      props.on_change.clone();
    let draft = props.draft.clone();
    Callback::from(
      move |value: String| {
        let mut next = draft.clone();
        next.title = value;
        on_change.emit(next);
      }
    )
  };

  let on_description_input = {
    let on_change =
      props.on_change.clone();
    let draft = props.draft.clone();
    Callback::from(
      move |event: InputEvent| {
        let area: HtmlTextAreaElement =
          event.target_unchecked_into();
        let mut next = draft.clone();
        next.description =
          area.value();
        on_change.emit(next);
      }
    )
  };

  let on_status_change = {
    let on_change =
      props.on_change.clone();
    let draft = props.draft.clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        let code = select
          .value()
          .parse::<i64>()
          .ok();
        if let Some(status) =
          code.and_then(
            TaskStatus::from_code
          )
        {
          let mut next = draft.clone();
          next.status = status;
          on_change.emit(next);
        }
      }
    )
  };

  let on_due_input = {
    let on_change =
      props.on_change.clone();
    let draft = props.draft.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: web_sys::HtmlInputElement =
          event.target_unchecked_into();
        let mut next = draft.clone();
        next.due_date =
          parse_due_date(&input.value());
        on_change.emit(next);
      }
    )
  };

  let on_form_submit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.emit(());
      }
    )
  };

  let on_overlay_click = {
    let on_close =
      props.on_close.clone();
    Callback::from(
      move |event: MouseEvent| {
        if event.target()
          == event.current_target()
        {
          on_close.emit(());
        }
      }
    )
  };

  let heading =
    if props.draft.is_edit() {
      "Edit Task"
    } else {
      "Create Task"
    };
  let save_label = if props.busy {
    "Saving..."
  } else {
    "Save"
  };
  let due_value = props
    .draft
    .due_date
    .map(format_due_date)
    .unwrap_or_default();
  // New due dates may not lie in the
  // past; existing ones render as-is.
  let due_min = format_due_date(
    chrono::Local::now().date_naive()
  );

  html! {
      <div class="modal-overlay" onclick={on_overlay_click}>
          <div class="modal">
              <h2 class="modal-title">{ heading }</h2>
              <form onsubmit={on_form_submit}>
                  <TextInput
                      id="title"
                      label="Title"
                      value={props.draft.title.clone()}
                      on_input={on_title_input}
                  />

                  <div class="field">
                      <label class="field-label" for="description">
                          { "Description" }
                      </label>
                      <textarea
                          rows="4"
                          id="description"
                          name="description"
                          value={props.draft.description.clone()}
                          oninput={on_description_input}
                      />
                  </div>

                  <div class="field">
                      <label class="field-label" for="status">
                          { "Status" }
                      </label>
                      <select id="status" onchange={on_status_change}>
                          {
                              for TaskStatus::all().into_iter().map(|status| html! {
                                  <option
                                      value={status.code().to_string()}
                                      selected={props.draft.status == status}
                                  >
                                      { status.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>

                  <div class="field">
                      <label class="field-label" for="due-date">
                          { "Due date" }
                      </label>
                      <input
                          type="date"
                          id="due-date"
                          name="due-date"
                          min={due_min}
                          value={due_value}
                          oninput={on_due_input}
                      />
                  </div>

                  <button
                      type="submit"
                      class="primary"
                      disabled={props.busy}
                  >
                      { save_label }
                  </button>
              </form>
          </div>
      </div>
  }
}
