//! Login page: loading indicator, sign-in control, or callback redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::auth::manager::SessionManager;
use crate::state::auth::AuthPhase;

/// What the login page shows for a given authentication phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginRender {
    Loading,
    SignInButton,
    /// A session already exists; continue straight to the callback view.
    RedirectToCallback,
}

/// Pure render decision over the authentication tri-state.
#[must_use]
pub fn login_render(auth: AuthPhase) -> LoginRender {
    match auth {
        AuthPhase::Unknown => LoginRender::Loading,
        AuthPhase::Unauthenticated => LoginRender::SignInButton,
        AuthPhase::Authenticated => LoginRender::RedirectToCallback,
    }
}

/// Login page — the button hands the browser to the provider's
/// authorization page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthPhase>>();
    let manager = expect_context::<Rc<SessionManager>>();

    view! {
        <div class="login-page">
            {move || match login_render(auth.get()) {
                LoginRender::Loading => view! { <div>"Loading..."</div> }.into_any(),
                LoginRender::SignInButton => {
                    let manager = Rc::clone(&manager);
                    view! {
                        <div>
                            <button class="login-button" on:click=move |_| manager.signin_redirect()>
                                "Login"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                LoginRender::RedirectToCallback => view! { <Redirect path="/login-callback"/> }.into_any(),
            }}
        </div>
    }
}
