use gloo::timers::future::TimeoutFuture;
use taskwell_core::protocol::{
  ApiOutcome,
  SignInArgs,
  SignInData
};
use web_sys::SubmitEvent;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::api;
use crate::app::Route;
use crate::components::{
  TextInput,
  ToastRequest
};

const LOGIN_REDIRECT_DELAY_MS: u32 =
  1_000;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
  pub on_authenticated:
    Callback<String>,
  pub notify: Callback<ToastRequest>
}

#[function_component(LoginPage)]
pub fn login_page(
  props: &LoginPageProps
) -> Html {
  let email =
    use_state(String::new);
  let password =
    use_state(String::new);
  let show_password =
    use_state(|| false);
  let loading = use_state(|| false);
  let error =
    use_state(|| None::<String>);
  let navigator = use_navigator();

  {
    use_effect_with((), move |_| {
      if let Some(document) =
        web_sys::window().and_then(
          |window| window.document()
        )
      {
        document.set_title(
          "Taskwell - Login"
        );
      }
      || ()
    });
  }

  let on_email_input = {
    let email = email.clone();
    Callback::from(
      move |value: String| {
        email.set(value);
      }
    )
  };

  let on_password_input = {
    let password = password.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          event.target_unchecked_into();
        password.set(input.value());
      }
    )
  };

  let on_toggle_password = {
    let show_password =
      show_password.clone();
    Callback::from(move |_| {
      show_password
        .set(!*show_password);
    })
  };

  let on_submit = {
    let email = email.clone();
    let password = password.clone();
    let loading = loading.clone();
    let error = error.clone();
    let navigator = navigator.clone();
    let on_authenticated =
      props.on_authenticated.clone();
    let notify = props.notify.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        if *loading {
          return;
        }
        loading.set(true);
        error.set(None);

        let args = SignInArgs {
          user_email:    (*email)
            .clone(),
          user_password: (*password)
            .clone()
        };
        let loading = loading.clone();
        let error = error.clone();
        let navigator =
          navigator.clone();
        let on_authenticated =
          on_authenticated.clone();
        let notify = notify.clone();

        wasm_bindgen_futures::spawn_local(async move {
                    let outcome = api::call::<SignInData>(
                        "auth/sign-in",
                        &args.form_params(),
                        None,
                    )
                    .await;

                    match outcome {
                        ApiOutcome::Ok(data) => {
                            tracing::info!("sign-in succeeded");
                            on_authenticated.emit(data.token);
                            notify.emit(ToastRequest::success("Login successful!"));
                            loading.set(false);
                            TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        ApiOutcome::SessionExpired => {
                            error.set(Some("Session expired! Please log in.".to_string()));
                            loading.set(false);
                        }
                        ApiOutcome::ValidationError(message)
                        | ApiOutcome::Other(message) => {
                            tracing::warn!(%message, "sign-in failed");
                            error.set(Some(message));
                            loading.set(false);
                        }
                    }
                });
      }
    )
  };

  let password_kind =
    if *show_password {
      "text"
    } else {
      "password"
    };
  let toggle_label =
    if *show_password {
      "Hide"
    } else {
      "Show"
    };
  let submit_label = if *loading {
    "Logging in..."
  } else {
    "Login"
  };

  html! {
      <main class="login-screen">
          <div class="login-card">
              <h1 class="login-heading">{ "Taskwell" }</h1>
              <p class="login-subheading">{ "Sign in to your account" }</p>

              <form class="login-form" onsubmit={on_submit}>
                  <TextInput
                      id="user_email"
                      kind="email"
                      label="Email address"
                      value={(*email).clone()}
                      on_input={on_email_input}
                  />

                  <div class="field password-field">
                      <label class="field-label" for="user_password">
                          { "Password" }
                      </label>
                      <input
                          type={password_kind}
                          id="user_password"
                          name="user_password"
                          placeholder="6+ characters"
                          value={(*password).clone()}
                          oninput={on_password_input}
                      />
                      <button
                          type="button"
                          class="password-toggle"
                          onclick={on_toggle_password}
                      >
                          { toggle_label }
                      </button>
                  </div>

                  <button type="submit" class="primary" disabled={*loading}>
                      { submit_label }
                  </button>

                  {
                      if let Some(message) = (*error).clone() {
                          html! { <div class="form-error">{ message }</div> }
                      } else {
                          Html::default()
                      }
                  }
              </form>
          </div>
      </main>
  }
}
