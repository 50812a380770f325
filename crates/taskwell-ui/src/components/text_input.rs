use web_sys::HtmlInputElement;
use yew::{
  AttrValue,
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
  pub id:          AttrValue,
  pub label:       AttrValue,
  pub value:       AttrValue,
  pub on_input:    Callback<String>,
  #[prop_or(AttrValue::Static("text"))]
  pub kind:        AttrValue,
  #[prop_or_default]
  pub placeholder: AttrValue
}

/// Floating-label text input shared
/// by the login form and the task
/// modal.
#[function_component(TextInput)]
pub fn text_input(
  props: &TextInputProps
) -> Html {
  let oninput = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  html! {
      <div class="field">
          <label class="field-label" for={props.id.clone()}>
              { props.label.clone() }
          </label>
          <input
              type={props.kind.clone()}
              id={props.id.clone()}
              name={props.id.clone()}
              value={props.value.clone()}
              placeholder={props.placeholder.clone()}
              {oninput}
          />
      </div>
  }
}
