use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::api::RedirectSlot;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(slot): Extension<RedirectSlot>,
) -> Html<&'static str> {
    let result = match (params.get("code"), params.get("error")) {
        (Some(code), _) if !code.is_empty() => Ok(code.clone()),
        (_, Some(error)) => Err(format!("Spotify denied access ({})", error)),
        _ => return Html("<h4>Missing authorization code.</h4>"),
    };

    let accepted = result.is_ok();
    *slot.lock().await = Some(result);

    if accepted {
        Html("<h2>Authorization received.</h2><p>Close browser window.</p>")
    } else {
        Html("<h4>Authorization failed.</h4><p>Check the terminal.</p>")
    }
}
