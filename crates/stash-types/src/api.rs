use serde::Deserialize;

/// Text stored when a message request carries no (or an empty) `msg`.
pub const DEFAULT_MESSAGE: &str = "No message provided.";

// -- Messages --

/// Body of `POST /message`, either form-encoded or JSON.
#[derive(Debug, Default, Deserialize)]
pub struct MessageInput {
    pub msg: Option<MessageValue>,
}

/// JSON clients may send scalars; they are stored as their text form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl MessageValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl MessageInput {
    /// The text to persist, falling back to [`DEFAULT_MESSAGE`].
    pub fn content(self) -> String {
        self.msg
            .map(MessageValue::into_text)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
    }
}

// -- Uploads --

/// Outcome of a stored upload, rendered as the plain-text confirmation.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub id: i32,
    pub filename: String,
}

impl std::fmt::Display for UploadReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "File \"{}\" uploaded and stored with ID={} in the \"files\" table.",
            self.filename, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_msg_uses_placeholder() {
        assert_eq!(MessageInput::default().content(), DEFAULT_MESSAGE);
    }

    #[test]
    fn empty_msg_uses_placeholder() {
        let input: MessageInput = serde_json::from_str(r#"{"msg":""}"#).unwrap();
        assert_eq!(input.content(), DEFAULT_MESSAGE);
    }

    #[test]
    fn msg_is_kept_verbatim() {
        let input: MessageInput = serde_json::from_str(r#"{"msg":"  hello "}"#).unwrap();
        assert_eq!(input.content(), "  hello ");
    }

    #[test]
    fn scalar_msgs_are_stored_as_text() {
        for (json, expected) in [
            (r#"{"msg":5}"#, "5"),
            (r#"{"msg":-1.5}"#, "-1.5"),
            (r#"{"msg":true}"#, "true"),
        ] {
            let input: MessageInput = serde_json::from_str(json).unwrap();
            assert_eq!(input.content(), expected);
        }
    }

    #[test]
    fn null_msg_uses_placeholder() {
        let input: MessageInput = serde_json::from_str(r#"{"msg":null}"#).unwrap();
        assert_eq!(input.content(), DEFAULT_MESSAGE);
    }

    #[test]
    fn receipt_text() {
        let receipt = UploadReceipt {
            id: 7,
            filename: "1700000000000.png".into(),
        };
        assert_eq!(
            receipt.to_string(),
            "File \"1700000000000.png\" uploaded and stored with ID=7 in the \"files\" table."
        );
    }
}
