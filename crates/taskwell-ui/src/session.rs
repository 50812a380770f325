const TOKEN_STORAGE_KEY: &str =
  "taskwell.auth_token";

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(
    |window| {
      window
        .local_storage()
        .ok()
        .flatten()
    }
  )
}

pub fn load_token() -> Option<String> {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored {
    | Some(token)
      if !token.is_empty() =>
    {
      Some(token)
    }
    | _ => None
  }
}

pub fn save_token(token: &str) {
  if let Some(storage) =
    local_storage()
  {
    let _ = storage.set_item(
      TOKEN_STORAGE_KEY,
      token
    );
  }
}

pub fn clear_token() {
  if let Some(storage) =
    local_storage()
  {
    let _ = storage
      .remove_item(TOKEN_STORAGE_KEY);
  }
}
