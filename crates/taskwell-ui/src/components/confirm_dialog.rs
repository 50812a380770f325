use web_sys::MouseEvent;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
  pub title:      AttrValue,
  pub body:       AttrValue,
  pub on_confirm: Callback<()>,
  pub on_cancel:  Callback<()>
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(
  props: &ConfirmDialogProps
) -> Html {
  let on_confirm_click = {
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_confirm.emit(());
      }
    )
  };

  let on_cancel_click = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(());
      }
    )
  };

  let on_overlay_click = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |event: MouseEvent| {
        if event.target()
          == event.current_target()
        {
          on_cancel.emit(());
        }
      }
    )
  };

  html! {
      <div class="modal-overlay" onclick={on_overlay_click}>
          <div class="modal modal-confirm">
              <h2 class="modal-title">{ props.title.clone() }</h2>
              <p class="modal-body">{ props.body.clone() }</p>
              <div class="modal-actions">
                  <button class="secondary" onclick={on_cancel_click}>
                      { "Cancel" }
                  </button>
                  <button class="danger" onclick={on_confirm_click}>
                      { "Continue" }
                  </button>
              </div>
          </div>
      </div>
  }
}
