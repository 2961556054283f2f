use crate::api::RequestFailed;
use crate::models::{AnswerBody, Message, SOMETHING_WENT_WRONG};

/// State behind the chat widget: the conversation, the text being typed and
/// whether a request is in flight.
///
/// A submission is split in two so the view can hand control back to the user
/// while the request runs: [`ChatWidget::begin_submit`] records the user's
/// message and yields the query to send, [`ChatWidget::finish_submit`] records
/// whatever came back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatWidget {
    messages: Vec<Message>,
    input: String,
    loading: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Starts a submission of the current input.
    ///
    /// Returns `None` without touching any state when the input is blank.
    /// Otherwise appends the user's message verbatim, marks the widget as
    /// loading, clears the input and returns the text to send.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let query = std::mem::take(&mut self.input);
        self.messages.push(Message::user(query.clone()));
        self.loading = true;
        Some(query)
    }

    /// Records the outcome of a request started by [`ChatWidget::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<AnswerBody, RequestFailed>) {
        let reply = match outcome {
            Ok(body) => body.reply_text(),
            Err(e) => {
                log::error!("Error fetching response: {e}");
                SOMETHING_WENT_WRONG.to_string()
            }
        };
        self.messages.push(Message::bot(reply));
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Loading..." } else { "Send" }
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_loading()
    }
}
