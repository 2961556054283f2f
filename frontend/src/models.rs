use serde::Serialize;
use serde_json::Value;

/// Bot text used when a successful reply carries neither usable field.
pub const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand that.";

/// Bot text used for every failed request.
pub const SOMETHING_WENT_WRONG: &str = "Sorry, something went wrong.";

/// Who a message came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class used to style a message bubble.
    pub fn as_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single line of the conversation. Never changed after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

/// Request body for `POST /get_response`.
#[derive(Clone, Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// The fields of a successful reply the widget cares about.
///
/// The service may answer with any JSON shape; fields that are missing or not
/// strings are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerBody {
    pub response: Option<String>,
    pub disease_info: Option<String>,
}

impl AnswerBody {
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            response: field("response"),
            disease_info: field("disease_info"),
        }
    }

    /// Text of the bot message: `response`, then `disease_info`, then a fixed
    /// fallback. Empty strings count as absent.
    pub fn reply_text(self) -> String {
        let non_empty = |s: &String| !s.is_empty();
        self.response
            .filter(non_empty)
            .or_else(|| self.disease_info.filter(non_empty))
            .unwrap_or_else(|| NOT_UNDERSTOOD.to_string())
    }
}
