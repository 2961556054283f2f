use leptos::ev;
use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::models::Message;
use crate::state::WidgetState;

/// Chat box: the conversation so far, a text field and a send button.
#[component]
pub fn Chatbot(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_else(WidgetConfig::from_build_env);
    let state = WidgetState::new(&config);
    let widget = state.widget;

    let on_keypress = move |ev: ev::KeyboardEvent| {
        // Ignored while the button is disabled, like a click.
        if ev.key() == "Enter" && !widget.with(|w| w.submit_disabled()) {
            state.submit();
        }
    };

    // Messages are append-only, so a position never changes owner and can
    // serve as the list key.
    view! {
        <div class="chatbot-container">
            <div class="chatbox">
                <For
                    each=move || widget.with(|w| {
                        w.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message={entry.1} />
                </For>
            </div>
            <input
                type="text"
                prop:value=move || widget.with(|w| w.input().to_string())
                on:input=move |ev| state.set_input(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <button
                on:click=move |_| state.submit()
                disabled=move || widget.with(|w| w.submit_disabled())
            >
                {move || widget.with(|w| w.submit_label())}
            </button>
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    view! {
        <div class={message.sender().as_class()}>
            <p>{message.text().to_string()}</p>
        </div>
    }
}
