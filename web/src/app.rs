//! Root application component with routing and session bootstrap.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::manager::SessionManager;
use crate::pages::{callback::CallbackPage, login::LoginPage};
use crate::state::auth::AuthPhase;

/// Root application component.
///
/// Owns the authentication tri-state, resolves the stored session once on
/// startup, and routes `/` to the login view and `/login-callback` to the
/// provider-redirect callback view.
#[component]
pub fn App(manager: Rc<SessionManager>) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthPhase::Unknown);
    provide_context(auth);
    provide_context(Rc::clone(&manager));

    // Initial session lookup. Reads no signals, so it runs once after mount.
    Effect::new(move || {
        let manager = Rc::clone(&manager);
        leptos::task::spawn_local(async move {
            let present = matches!(manager.get_user().await, Ok(Some(_)));
            auth.set(AuthPhase::from_user_presence(present));
        });
    });

    view! {
        <Title text="Sup?"/>

        <div class="app">
            <header class="app__header">
                <h1>"Sup?"</h1>
                <p>"OpenID Connect demo"</p>

                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LoginPage/>
                        <Route path=StaticSegment("login-callback") view=CallbackPage/>
                    </Routes>
                </Router>
            </header>
        </div>
    }
}
