use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use taskwell_core::protocol::{
  ApiOutcome,
  Envelope,
  FormParams,
  classify
};
use web_sys::UrlSearchParams;

use crate::config;

/// POSTs a form-encoded body to
/// `{base_url}/{endpoint}`, attaching
/// the bearer header when a token is
/// present. All side effects of the
/// outcome (navigation, toasts, token
/// teardown) belong to the caller.
pub async fn call<R>(
  endpoint: &str,
  params: &FormParams,
  token: Option<&str>
) -> ApiOutcome<R>
where
  R: DeserializeOwned
{
  let url = format!(
    "{}/{}",
    config::api_base_url(),
    endpoint
  );

  let body = match UrlSearchParams::new()
  {
    | Ok(body) => body,
    | Err(error) => {
      return ApiOutcome::Other(
        format!(
          "failed building request \
           body: {error:?}"
        )
      );
    }
  };
  for (name, value) in params {
    body.append(name, value);
  }

  let mut builder =
    Request::post(&url);
  if let Some(token) = token {
    builder = builder.header(
      "Authorization",
      &format!("Bearer {token}")
    );
  }

  let request =
    match builder.body(body) {
      | Ok(request) => request,
      | Err(error) => {
        return ApiOutcome::Other(
          format!(
            "failed building \
             request: {error}"
          )
        );
      }
    };

  let response =
    match request.send().await {
      | Ok(response) => response,
      | Err(error) => {
        tracing::error!(
          endpoint,
          %error,
          "request transport failed"
        );
        return ApiOutcome::Other(
          format!(
            "network error: {error}"
          )
        );
      }
    };

  let status = response.status();
  let envelope = response
    .json::<Envelope>()
    .await
    .ok();

  tracing::debug!(
    endpoint,
    status,
    "api call resolved"
  );

  classify(status, envelope).decode()
}
