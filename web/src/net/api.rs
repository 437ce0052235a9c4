//! REST call to the protected resource API.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome collapses to a display string: the server's `message` field,
//! a fallback for message-less success, or a diagnostic embedding the status
//! code or transport error. Nothing here leaves the view hanging.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Base URL of the resource API, fixed at build time.
fn api_base_url() -> Option<&'static str> {
    option_env!("API_BASE_URL")
}

/// Fallback when the API answers 2xx without a string `message` field.
pub const NO_MESSAGE_FALLBACK: &str = "Good response with no message.";

/// Interpret the protected endpoint's answer.
#[must_use]
pub fn interpret_private_response(ok: bool, status: u16, body: &str) -> String {
    if !ok {
        return format!("Bad response {status}");
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str().map(ToOwned::to_owned)))
        .unwrap_or_else(|| NO_MESSAGE_FALLBACK.to_owned())
}

/// Call `GET /api/private` with the bearer credential.
pub async fn fetch_private_message(access_token: &str) -> String {
    let Some(base) = api_base_url() else {
        return "API base URL not configured.".to_owned();
    };
    let request = gloo_net::http::Request::get(&format!("{base}/api/private"))
        .header("Authorization", &format!("Bearer {access_token}"));
    match request.send().await {
        Ok(resp) => {
            let ok = resp.ok();
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            interpret_private_response(ok, status, &body)
        }
        Err(e) => format!("Request failed: {e}"),
    }
}
