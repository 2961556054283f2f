mod api;
mod components;
mod config;
mod models;
mod state;
mod widget;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::Chatbot;
use config::WidgetConfig;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    view! {
        <Chatbot config=WidgetConfig::from_build_env() />
    }
}

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("Failed to init logger: {e}");
    }
    mount_to_body(App);
}
