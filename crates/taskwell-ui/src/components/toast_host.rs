use gloo::timers::future::TimeoutFuture;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with
};

const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ToastKind {
  Success,
  Error
}

impl ToastKind {
  fn as_class(self) -> &'static str {
    match self {
      | Self::Success => {
        "toast-success"
      }
      | Self::Error => "toast-error"
    }
  }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
  pub id:      u64,
  pub kind:    ToastKind,
  pub message: String
}

#[derive(Clone, PartialEq)]
pub struct ToastRequest {
  pub kind:    ToastKind,
  pub message: String
}

impl ToastRequest {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    ToastKind::Success,
      message: message.into()
    }
  }

  pub fn error(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    ToastKind::Error,
      message: message.into()
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
  pub toasts:     Vec<Toast>,
  pub on_dismiss: Callback<u64>
}

#[function_component(ToastHost)]
pub fn toast_host(
  props: &ToastHostProps
) -> Html {
  html! {
      <div class="toast-host">
          {
              for props.toasts.iter().cloned().map(|toast| html! {
                  <ToastItem
                      key={toast.id}
                      toast={toast.clone()}
                      on_dismiss={props.on_dismiss.clone()}
                  />
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
  toast:      Toast,
  on_dismiss: Callback<u64>
}

#[function_component(ToastItem)]
fn toast_item(
  props: &ToastItemProps
) -> Html {
  {
    let on_dismiss =
      props.on_dismiss.clone();
    use_effect_with(
      props.toast.id,
      move |id| {
        let id = *id;
        wasm_bindgen_futures::spawn_local(
          async move {
            TimeoutFuture::new(
              TOAST_DISMISS_MS
            )
            .await;
            on_dismiss.emit(id);
          }
        );
        || ()
      }
    );
  }

  let on_click = {
    let on_dismiss =
      props.on_dismiss.clone();
    let id = props.toast.id;
    Callback::from(move |_| {
      on_dismiss.emit(id);
    })
  };

  html! {
      <div
          class={classes!("toast", props.toast.kind.as_class())}
          onclick={on_click}
      >
          { &props.toast.message }
      </div>
  }
}
