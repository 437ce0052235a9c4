//! Provider-redirect callback page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider returns the browser here with `code` and `state` in the
//! query. The page drives the callback state machine: resolve the session
//! (code exchange, or stored-user lookup on remount), then call the
//! protected API endpoint once, then render profile + response + logout.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::manager::SessionManager;
use crate::auth::user::User;
use crate::net;
use crate::state::auth::AuthPhase;
use crate::state::callback::{CallbackAction, CallbackPhase, CallbackRender, callback_render, next_action};

/// Diagnostic shown when session resolution completed without a user.
pub(crate) fn no_user_diagnostic(action: CallbackAction) -> &'static str {
    match action {
        CallbackAction::ExchangeCode => "Processed callback, but no user?",
        CallbackAction::LoadStoredUser => "No user?",
    }
}

/// Diagnostic shown when session resolution itself failed.
pub(crate) fn resolution_error_diagnostic(action: CallbackAction) -> Option<&'static str> {
    match action {
        CallbackAction::ExchangeCode => None,
        CallbackAction::LoadStoredUser => Some("Error getting user?"),
    }
}

/// Callback page — resolves the redirect, fetches the protected message,
/// and renders the signed-in view.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthPhase>>();
    let manager = expect_context::<Rc<SessionManager>>();

    let phase = RwSignal::new(CallbackPhase::Init);
    let user = RwSignal::new(None::<User>);
    let api_response = RwSignal::new(None::<String>);

    // State-machine driver. The phase is moved off `Init` before the spawn,
    // so later re-runs of this effect cannot start duplicate requests.
    {
        let manager = Rc::clone(&manager);
        Effect::new(move || {
            let Some(action) = next_action(phase.get(), auth.get()) else {
                return;
            };
            phase.set(CallbackPhase::ResolvingSession);

            let manager = Rc::clone(&manager);
            leptos::task::spawn_local(async move {
                let resolved = match action {
                    CallbackAction::ExchangeCode => manager.signin_redirect_callback().await,
                    CallbackAction::LoadStoredUser => manager.get_user().await,
                };
                match resolved {
                    Ok(Some(resolved_user)) => {
                        auth.set(AuthPhase::Authenticated);
                        let token = resolved_user.access_token.clone();
                        user.set(Some(resolved_user));
                        phase.set(CallbackPhase::FetchingApi);

                        let message = net::api::fetch_private_message(&token).await;
                        api_response.set(Some(message));
                        phase.set(CallbackPhase::Done);
                    }
                    Ok(None) => {
                        auth.set(AuthPhase::Unauthenticated);
                        api_response.set(Some(no_user_diagnostic(action).to_owned()));
                        phase.set(CallbackPhase::Failed);
                    }
                    Err(e) => {
                        log::warn!("session resolution failed: {e}");
                        auth.set(AuthPhase::Unauthenticated);
                        if let Some(diagnostic) = resolution_error_diagnostic(action) {
                            api_response.set(Some(diagnostic.to_owned()));
                        }
                        phase.set(CallbackPhase::Failed);
                    }
                }
            });
        });
    }

    view! {
        <div class="callback-page">
            {move || match callback_render(auth.get(), api_response.with(Option::is_some), phase.get()) {
                CallbackRender::Loading => view! { <div>"Loading..."</div> }.into_any(),
                CallbackRender::Diagnostic => view! {
                    <div class="callback-diagnostic">
                        {move || api_response.get().unwrap_or_else(|| "Sign-in failed.".to_owned())}
                    </div>
                }
                .into_any(),
                CallbackRender::Profile => {
                    let manager = Rc::clone(&manager);
                    let name = move || {
                        user.with(|u| u.as_ref().and_then(|u| u.profile.name.clone()).unwrap_or_default())
                    };
                    let email = move || {
                        user.with(|u| u.as_ref().and_then(|u| u.profile.email.clone()).unwrap_or_default())
                    };
                    view! {
                        <div class="callback-profile">
                            <p>"Name: " {name}</p>
                            <p>"Email: " {email}</p>
                            <p>"API Response: " {move || api_response.get().unwrap_or_default()}</p>
                            <button class="logout-button" on:click=move |_| manager.signout_redirect()>
                                "Log out"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
