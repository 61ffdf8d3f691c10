//! Conversion from chat DTOs to domain events.

use crate::domain::ChatEvent;
use crate::infrastructure::dto::websocket::ChatFrame;

impl From<ChatFrame> for ChatEvent {
    fn from(frame: ChatFrame) -> Self {
        match frame {
            ChatFrame::Chunk { id, content } => Self::Chunk { id, content },
            ChatFrame::End => Self::End,
            ChatFrame::Unknown => Self::Ignored,
        }
    }
}

/// Decode a raw chat text frame into a domain event.
///
/// Undecodable text is logged and treated like an unknown frame type.
pub fn decode_chat_event(text: &str) -> ChatEvent {
    match ChatFrame::parse(text) {
        Ok(frame) => frame.into(),
        Err(e) => {
            tracing::warn!("Dropping undecodable chat frame ({}): {}", e, text);
            ChatEvent::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_frame_to_event() {
        // テスト項目: chunk フレームがドメインイベントに変換される
        // given (前提条件):
        let frame = ChatFrame::Chunk {
            id: "m1".to_string(),
            content: "Hi".to_string(),
        };

        // when (操作):
        let event: ChatEvent = frame.into();

        // then (期待する結果):
        assert_eq!(
            event,
            ChatEvent::Chunk {
                id: "m1".to_string(),
                content: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_frame_to_ignored() {
        // テスト項目: 未知のフレームは Ignored に変換される
        // given (前提条件):
        let frame = ChatFrame::Unknown;

        // when (操作):
        let event: ChatEvent = frame.into();

        // then (期待する結果):
        assert_eq!(event, ChatEvent::Ignored);
    }

    #[test]
    fn test_decode_chat_event_end() {
        // テスト項目: end テキストが End イベントにデコードされる
        // given (前提条件):
        let text = r#"{"type":"end"}"#;

        // when (操作):
        let event = decode_chat_event(text);

        // then (期待する結果):
        assert_eq!(event, ChatEvent::End);
    }

    #[test]
    fn test_decode_chat_event_malformed_is_ignored() {
        // テスト項目: 不正なテキストはエラーにならず Ignored になる
        // given (前提条件):
        let text = "{not json";

        // when (操作):
        let event = decode_chat_event(text);

        // then (期待する結果):
        assert_eq!(event, ChatEvent::Ignored);
    }
}
