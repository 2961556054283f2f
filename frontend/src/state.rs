use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AnswerClient, HttpAnswerClient};
use crate::config::WidgetConfig;
use crate::widget::ChatWidget;

/// Reactive handle on one widget instance.
///
/// The view-model sits in a signal so the view re-renders on every change;
/// the HTTP client is stored alongside it so the handle stays `Copy`.
#[derive(Clone, Copy)]
pub struct WidgetState {
    pub widget: RwSignal<ChatWidget>,
    client: StoredValue<HttpAnswerClient>,
}

impl WidgetState {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            widget: RwSignal::new(ChatWidget::new()),
            client: StoredValue::new(HttpAnswerClient::new(config)),
        }
    }

    pub fn set_input(&self, text: String) {
        self.widget.update(|w| w.set_input(text));
    }

    /// Submits the current input.
    ///
    /// The user's message, the loading flag and the cleared input land
    /// synchronously; the reply is applied once the request resolves.
    pub fn submit(&self) {
        let Some(query) = self.widget.try_update(ChatWidget::begin_submit).flatten() else {
            return;
        };
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        let widget = self.widget;

        spawn_local(async move {
            let outcome = client.ask(&query).await;
            // Signal is gone once the widget unmounts; drop the late reply.
            if widget.try_update(|w| w.finish_submit(outcome)).is_none() {
                log::debug!("Chat widget unmounted before reply arrived");
            }
        });
    }
}
