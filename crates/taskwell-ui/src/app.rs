use std::rc::Rc;

use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_reducer,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Redirect,
  Routable,
  Switch
};

use crate::components::{
  Toast,
  ToastHost,
  ToastRequest
};
use crate::pages::{
  LoginPage,
  TasksPage
};
use crate::session;

#[derive(
  Clone, Routable, PartialEq,
)]
pub enum Route {
  #[at("/login")]
  Login,
  #[at("/")]
  Home,
  #[not_found]
  #[at("/404")]
  NotFound
}

pub enum ToastAction {
  Push(ToastRequest),
  Dismiss(u64)
}

#[derive(
  Clone, PartialEq, Default,
)]
struct ToastList {
  toasts: Vec<Toast>,
  seq:    u64
}

impl Reducible for ToastList {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | ToastAction::Push(request) => {
        next.seq =
          next.seq.wrapping_add(1);
        next.toasts.push(Toast {
          id:      next.seq,
          kind:    request.kind,
          message: request.message
        });
      }
      | ToastAction::Dismiss(id) => {
        next.toasts.retain(|toast| {
          toast.id != id
        });
      }
    }
    next.into()
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let session =
    use_state(session::load_token);
  let toast_list =
    use_reducer(ToastList::default);

  let notify = {
    let toast_list = toast_list.clone();
    Callback::from(
      move |request: ToastRequest| {
        toast_list.dispatch(
          ToastAction::Push(request)
        );
      }
    )
  };

  let on_toast_dismiss = {
    let toast_list = toast_list.clone();
    Callback::from(move |id: u64| {
      toast_list.dispatch(
        ToastAction::Dismiss(id)
      );
    })
  };

  let on_authenticated = {
    let session = session.clone();
    Callback::from(
      move |token: String| {
        session::save_token(&token);
        session.set(Some(token));
        tracing::info!(
          "session established"
        );
      }
    )
  };

  let on_logged_out = {
    let session = session.clone();
    Callback::from(move |()| {
      session::clear_token();
      session.set(None);
      tracing::info!(
        "session torn down"
      );
    })
  };

  let render = {
    let session = session.clone();
    let notify = notify.clone();
    let on_authenticated =
      on_authenticated.clone();
    let on_logged_out =
      on_logged_out.clone();
    move |route: Route| match route {
      | Route::Login => html! {
          <LoginPage
              on_authenticated={on_authenticated.clone()}
              notify={notify.clone()}
          />
      },
      | Route::Home
      | Route::NotFound => {
        if let Some(token) =
          (*session).clone()
        {
          html! {
              <TasksPage
                  token={token}
                  notify={notify.clone()}
                  on_logged_out={on_logged_out.clone()}
              />
          }
        } else {
          html! {
              <Redirect<Route> to={Route::Login} />
          }
        }
      }
    }
  };

  html! {
      <BrowserRouter>
          <Switch<Route> render={render} />
          <ToastHost
              toasts={toast_list.toasts.clone()}
              on_dismiss={on_toast_dismiss}
          />
      </BrowserRouter>
  }
}
