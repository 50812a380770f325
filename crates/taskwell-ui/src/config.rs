use std::sync::OnceLock;

use serde::Deserialize;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/config.toml");

#[derive(Debug, Deserialize)]
struct AppConfig {
  base_url: Option<String>
}

const DEFAULT_BASE_URL: &str =
  "http://localhost:8000";

pub fn api_base_url() -> &'static str {
  static BASE_URL: OnceLock<String> =
    OnceLock::new();
  BASE_URL
    .get_or_init(resolve_base_url)
}

fn resolve_base_url() -> String {
  if let Some(raw) =
    option_env!("TASKWELL_API_URL")
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return trimmed
        .trim_end_matches('/')
        .to_string();
    }
  }

  match toml::from_str::<AppConfig>(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => {
      if let Some(base_url) =
        config.base_url
      {
        let trimmed =
          base_url.trim().to_string();
        if !trimmed.is_empty() {
          return trimmed
            .trim_end_matches('/')
            .to_string();
        }
      }
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing embedded \
         app config; using default \
         base URL"
      );
    }
  }

  DEFAULT_BASE_URL.to_string()
}
