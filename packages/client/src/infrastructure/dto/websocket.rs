//! Chat channel wire format.
//!
//! The server streams JSON objects tagged by `type`:
//!
//! ```json
//! {"type": "chunk", "id": "m1", "content": "Hel"}
//! {"type": "end"}
//! ```
//!
//! Other `type` values decode to `Unknown`. Outbound frames are raw user text
//! and have no DTO.

use serde::Deserialize;

/// Inbound chat frame
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatFrame {
    Chunk { id: String, content: String },
    End,
    #[serde(other)]
    Unknown,
}

impl ChatFrame {
    /// Decode a text frame
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunk() {
        // テスト項目: chunk フレームが id と content 付きでデコードされる
        // given (前提条件):
        let text = r#"{"type":"chunk","id":"m1","content":"Hel"}"#;

        // when (操作):
        let frame = ChatFrame::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            ChatFrame::Chunk {
                id: "m1".to_string(),
                content: "Hel".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_end() {
        // テスト項目: end フレームがデコードされる
        // given (前提条件):
        let text = r#"{"type":"end"}"#;

        // when (操作):
        let frame = ChatFrame::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame, ChatFrame::End);
    }

    #[test]
    fn test_parse_unknown_type() {
        // テスト項目: 未知の type は Unknown としてデコードされる
        // given (前提条件):
        let text = r#"{"type":"typing","id":"m1"}"#;

        // when (操作):
        let frame = ChatFrame::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame, ChatFrame::Unknown);
    }

    #[test]
    fn test_parse_extra_fields_are_accepted() {
        // テスト項目: 余分なフィールドがあってもデコードできる
        // given (前提条件):
        let text = r#"{"type":"end","id":"m1","reason":"done"}"#;

        // when (操作):
        let frame = ChatFrame::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame, ChatFrame::End);
    }

    #[test]
    fn test_parse_chunk_without_content_fails() {
        // テスト項目: content のない chunk はデコードエラーになる
        // given (前提条件):
        let text = r#"{"type":"chunk","id":"m1"}"#;

        // when (操作):
        let result = ChatFrame::parse(text);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_non_json_fails() {
        // テスト項目: JSON でないテキストはデコードエラーになる
        // given (前提条件):
        let text = "Connected";

        // when (操作):
        let result = ChatFrame::parse(text);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
