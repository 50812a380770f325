use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use taskwell_core::draft::TaskDraft;
use taskwell_core::feed::{
  FeedAction,
  FetchTicket,
  TaskFeed
};
use taskwell_core::protocol::{
  ApiOutcome,
  FormParams,
  TaskPage,
  TaskRemoveArgs
};
use taskwell_core::task::{
  Task,
  TaskStatus
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api;
use crate::components::{
  ConfirmDialog,
  TaskList,
  TaskModal,
  ToastRequest
};
use crate::session;

const SESSION_REDIRECT_DELAY_MS: u32 =
  1_200;

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[derive(Clone, PartialEq)]
struct FeedState {
  feed: TaskFeed
}

impl Reducible for FeedState {
  type Action = FeedAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut feed = self.feed.clone();
    feed.apply(action);
    Rc::new(Self {
      feed
    })
  }
}

fn near_page_bottom() -> bool {
  let Some(window) =
    web_sys::window()
  else {
    return false;
  };
  let Some(root) = window
    .document()
    .and_then(|document| {
      document.document_element()
    })
  else {
    return false;
  };

  let inner_height = window
    .inner_height()
    .ok()
    .and_then(|value| value.as_f64())
    .unwrap_or(0.0);
  let scroll_top =
    f64::from(root.scroll_top());
  let scroll_height =
    f64::from(root.scroll_height());

  inner_height + scroll_top + 1.0
    >= scroll_height
}

#[derive(Properties, PartialEq)]
pub struct TasksPageProps {
  pub token:         String,
  pub notify:
    Callback<ToastRequest>,
  pub on_logged_out: Callback<()>
}

#[function_component(TasksPage)]
pub fn tasks_page(
  props: &TasksPageProps
) -> Html {
  let feed = use_reducer(|| {
    FeedState {
      feed: TaskFeed::new()
    }
  });
  let modal =
    use_state(|| None::<TaskDraft>);
  let modal_busy =
    use_state(|| false);
  let pending_delete =
    use_state(|| None::<Task>);

  let on_session_expired = {
    let notify = props.notify.clone();
    let on_logged_out =
      props.on_logged_out.clone();
    Callback::from(move |()| {
      session::clear_token();
      notify.emit(
        ToastRequest::error(
          "Session expired! Please \
           log in."
        )
      );
      let on_logged_out =
        on_logged_out.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          TimeoutFuture::new(
            SESSION_REDIRECT_DELAY_MS
          )
          .await;
          on_logged_out.emit(());
        }
      );
    })
  };

  {
    use_effect_with((), move |_| {
      if let Some(document) =
        web_sys::window().and_then(
          |window| window.document()
        )
      {
        document.set_title(
          "Taskwell - My Tasks"
        );
      }
      || ()
    });
  }

  {
    let feed = feed.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "feed.mount",
        "issuing initial fetch"
      );
      feed.dispatch(
        FeedAction::Restart
      );
      || ()
    });
  }

  {
    let feed = feed.clone();
    let token = props.token.clone();
    let on_session_expired =
      on_session_expired.clone();
    use_effect_with(
      feed.feed.in_flight().cloned(),
      move |ticket: &Option<
        FetchTicket
      >| {
        if let Some(ticket) =
          ticket.clone()
        {
          let feed = feed.clone();
          let token = token.clone();
          let on_session_expired =
            on_session_expired
              .clone();
          wasm_bindgen_futures::spawn_local(async move {
                        ui_debug(
                            "feed.fetch",
                            &format!("page={} reset={}", ticket.page, ticket.reset),
                        );
                        let outcome = api::call::<TaskPage>(
                            "task/task-list",
                            &ticket.list_args().form_params(),
                            Some(&token),
                        )
                        .await;

                        match outcome {
                            ApiOutcome::Ok(page) => {
                                feed.dispatch(FeedAction::Finished {
                                    ticket,
                                    result: Ok(page),
                                });
                            }
                            ApiOutcome::SessionExpired => {
                                feed.dispatch(FeedAction::Finished {
                                    ticket,
                                    result: Err("Session expired! Please log in.".to_string()),
                                });
                                on_session_expired.emit(());
                            }
                            ApiOutcome::ValidationError(message)
                            | ApiOutcome::Other(message) => {
                                feed.dispatch(FeedAction::Finished {
                                    ticket,
                                    result: Err(message),
                                });
                            }
                        }
                    });
        }
        || ()
      }
    );
  }

  {
    let feed = feed.clone();
    use_effect_with((), move |_| {
      let listener = web_sys::window()
        .map(|window| {
          EventListener::new(
            &window,
            "scroll",
            move |_| {
              if near_page_bottom() {
                feed.dispatch(
                  FeedAction::ScrolledToBottom
                );
              }
            }
          )
        });
      move || drop(listener)
    });
  }

  let on_search_input = {
    let feed = feed.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        feed.dispatch(
          FeedAction::SearchChanged(
            input.value()
          )
        );
      }
    )
  };

  let on_filter_change = {
    let feed = feed.clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        let filter = select
          .value()
          .parse::<i64>()
          .ok()
          .and_then(
            TaskStatus::from_code
          );
        feed.dispatch(
          FeedAction::FilterChanged(
            filter
          )
        );
      }
    )
  };

  let on_new_task = {
    let modal = modal.clone();
    Callback::from(move |_| {
      ui_debug(
        "modal.open",
        "blank draft"
      );
      modal
        .set(Some(TaskDraft::blank()));
    })
  };

  let on_edit = {
    let modal = modal.clone();
    Callback::from(
      move |task: Task| {
        ui_debug(
          "modal.open",
          &format!(
            "editing task {}",
            task.task_id
          )
        );
        modal.set(Some(
          TaskDraft::for_task(&task)
        ));
      }
    )
  };

  let on_modal_change = {
    let modal = modal.clone();
    Callback::from(
      move |draft: TaskDraft| {
        modal.set(Some(draft));
      }
    )
  };

  let on_modal_close = {
    let modal = modal.clone();
    Callback::from(move |()| {
      modal.set(None);
    })
  };

  let on_modal_submit = {
    let modal = modal.clone();
    let modal_busy =
      modal_busy.clone();
    let feed = feed.clone();
    let token = props.token.clone();
    let notify = props.notify.clone();
    let on_session_expired =
      on_session_expired.clone();
    Callback::from(move |()| {
      if *modal_busy {
        ui_debug(
          "modal.submit.skip",
          "ignored duplicate while \
           busy"
        );
        return;
      }
      let Some(draft) =
        (*modal).clone()
      else {
        return;
      };
      modal_busy.set(true);

      let args = draft.to_upsert();
      let modal = modal.clone();
      let modal_busy =
        modal_busy.clone();
      let feed = feed.clone();
      let token = token.clone();
      let notify = notify.clone();
      let on_session_expired =
        on_session_expired.clone();

      wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::call::<serde_json::Value>(
                    "task/add-or-edit-task",
                    &args.form_params(),
                    Some(&token),
                )
                .await;

                match outcome {
                    ApiOutcome::Ok(_) => {
                        ui_debug("modal.submit.ok", "save complete, restarting feed");
                        modal.set(None);
                        feed.dispatch(FeedAction::Restart);
                    }
                    ApiOutcome::SessionExpired => {
                        on_session_expired.emit(());
                    }
                    ApiOutcome::ValidationError(message) | ApiOutcome::Other(message) => {
                        tracing::warn!(%message, "task save failed");
                        notify.emit(ToastRequest::error(message));
                    }
                }
                modal_busy.set(false);
            });
    })
  };

  let on_delete_request = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(
      move |task: Task| {
        pending_delete
          .set(Some(task));
      }
    )
  };

  let on_delete_cancel = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |()| {
      pending_delete.set(None);
    })
  };

  let on_delete_confirm = {
    let pending_delete =
      pending_delete.clone();
    let feed = feed.clone();
    let token = props.token.clone();
    let notify = props.notify.clone();
    let on_session_expired =
      on_session_expired.clone();
    Callback::from(move |()| {
      let Some(task) =
        (*pending_delete).clone()
      else {
        return;
      };
      pending_delete.set(None);

      let args = TaskRemoveArgs {
        task_id: task.task_id
      };
      let feed = feed.clone();
      let token = token.clone();
      let notify = notify.clone();
      let on_session_expired =
        on_session_expired.clone();

      wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::call::<serde_json::Value>(
                    "task/task-remove",
                    &args.form_params(),
                    Some(&token),
                )
                .await;

                match outcome {
                    ApiOutcome::Ok(_) => {
                        feed.dispatch(FeedAction::TaskRemoved(args.task_id));
                    }
                    ApiOutcome::SessionExpired => {
                        on_session_expired.emit(());
                    }
                    ApiOutcome::ValidationError(message) | ApiOutcome::Other(message) => {
                        tracing::error!(%message, task_id = args.task_id, "task remove failed");
                        notify.emit(ToastRequest::error(message));
                    }
                }
            });
    })
  };

  let on_logout = {
    let token = props.token.clone();
    let notify = props.notify.clone();
    let on_logged_out =
      props.on_logged_out.clone();
    Callback::from(move |_| {
      let token = token.clone();
      let notify = notify.clone();
      let on_logged_out =
        on_logged_out.clone();

      wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::call::<serde_json::Value>(
                    "auth/logout",
                    &FormParams::new(),
                    Some(&token),
                )
                .await;

                match outcome {
                    ApiOutcome::Ok(_) | ApiOutcome::SessionExpired => {
                        on_logged_out.emit(());
                    }
                    ApiOutcome::ValidationError(message) | ApiOutcome::Other(message) => {
                        tracing::error!(%message, "logout failed");
                        notify.emit(ToastRequest::error(message));
                    }
                }
            });
    })
  };

  let filter_value = feed
    .feed
    .query()
    .status_filter
    .map(|status| {
      status.code().to_string()
    })
    .unwrap_or_default();

  html! {
      <main class="dashboard">
          <header class="panel dashboard-header">
              <h1>{ "Dashboard" }</h1>
              <div class="header-actions">
                  <button class="primary" onclick={on_new_task}>
                      { "New Task" }
                  </button>
                  <button class="secondary" onclick={on_logout}>
                      { "Logout" }
                  </button>
              </div>
          </header>

          <section class="panel">
              <div class="list-controls">
                  <input
                      type="text"
                      class="search-input"
                      name="search"
                      placeholder="Search"
                      value={feed.feed.query().search.clone()}
                      oninput={on_search_input}
                  />
                  <select class="filter-select" onchange={on_filter_change}>
                      <option value="" selected={filter_value.is_empty()}>
                          { "All" }
                      </option>
                      {
                          for TaskStatus::all().into_iter().map(|status| html! {
                              <option
                                  value={status.code().to_string()}
                                  selected={filter_value == status.code().to_string()}
                              >
                                  { status.label() }
                              </option>
                          })
                      }
                  </select>
              </div>

              <TaskList
                  tasks={feed.feed.tasks().to_vec()}
                  fetching={feed.feed.is_fetching()}
                  error={feed.feed.error().map(str::to_string)}
                  on_edit={on_edit}
                  on_delete={on_delete_request}
              />
          </section>

          {
              if let Some(draft) = (*modal).clone() {
                  html! {
                      <TaskModal
                          draft={draft}
                          busy={*modal_busy}
                          on_change={on_modal_change}
                          on_submit={on_modal_submit}
                          on_close={on_modal_close}
                      />
                  }
              } else {
                  Html::default()
              }
          }

          {
              if (*pending_delete).is_some() {
                  html! {
                      <ConfirmDialog
                          title="Are you absolutely sure?"
                          body="This action cannot be undone. This will permanently delete this task."
                          on_confirm={on_delete_confirm}
                          on_cancel={on_delete_cancel}
                      />
                  }
              } else {
                  Html::default()
              }
          }
      </main>
  }
}
