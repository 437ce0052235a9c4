use std::rc::Rc;

use leptos::prelude::*;

use sup_web::app::App;
use sup_web::auth::config::AuthConfig;
use sup_web::auth::manager::SessionManager;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = AuthConfig::from_build_env()
        .expect("AUTH_URL, AUTH_CLIENT_ID and AUTH_REDIRECT_URI must be set at build time");

    // One session manager per process, handed down through context.
    let manager = Rc::new(SessionManager::new(config));

    leptos::mount::mount_to_body(move || view! { <App manager=Rc::clone(&manager)/> });
}
