//! Message formatting utilities for terminal display.

use ragbot_shared::time::timestamp_to_local_clock;

use crate::domain::Notice;

const RULE: &str = "============================================================";

/// Message formatter for terminal display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the banner shown while queued
    pub fn format_waiting_header() -> String {
        format!("\n{}\nWaiting in Queue\n{}\n", RULE, RULE)
    }

    /// Format one queue status line, shown verbatim
    pub fn format_queue_status(text: &str) -> String {
        format!("  {}\n", text)
    }

    /// Format the banner shown once admitted
    ///
    /// # Arguments
    ///
    /// * `identity` - The session identity token
    pub fn format_chat_header(identity: &str) -> String {
        format!(
            "\n{}\nChat (session {})\nType a message and press Enter. Press Ctrl+C to exit.\n{}\n",
            RULE, identity, RULE
        )
    }

    /// Format the confirmation printed after a user message is sent
    ///
    /// # Arguments
    ///
    /// * `sent_at` - Unix timestamp when the message was sent (milliseconds)
    pub fn format_sent_confirmation(sent_at: i64) -> String {
        format!("sent at {}\n", timestamp_to_local_clock(sent_at))
    }

    /// Format the label that starts a server message
    pub fn format_server_label() -> String {
        "\n@bot: ".to_string()
    }

    /// Format the label when an earlier server message grows after another one
    /// has been printed
    ///
    /// # Arguments
    ///
    /// * `id` - The server message id
    pub fn format_continuation_label(id: &str) -> String {
        format!("\n@bot ({}, continued): ", id)
    }

    /// Format the marker printed when the server turn ends
    pub fn format_turn_end() -> String {
        "\n".to_string()
    }

    /// Format a user-visible notice
    pub fn format_notice(notice: &Notice) -> String {
        format!("\n! {}\n", notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChannelError;

    #[test]
    fn test_format_waiting_header() {
        // テスト項目: 待機中のバナーにタイトルと罫線が含まれる
        // given (前提条件):

        // when (操作):
        let result = MessageFormatter::format_waiting_header();

        // then (期待する結果):
        assert!(result.contains("Waiting in Queue"));
        assert!(result.contains(RULE));
    }

    #[test]
    fn test_format_queue_status_is_verbatim() {
        // テスト項目: キューの状態テキストがそのまま表示される
        // given (前提条件):
        let text = "Position 3 of 10";

        // when (操作):
        let result = MessageFormatter::format_queue_status(text);

        // then (期待する結果):
        assert_eq!(result, "  Position 3 of 10\n");
    }

    #[test]
    fn test_format_chat_header() {
        // テスト項目: チャットのバナーにセッション ID が含まれる
        // given (前提条件):
        let identity = "abc-123";

        // when (操作):
        let result = MessageFormatter::format_chat_header(identity);

        // then (期待する結果):
        assert!(result.contains("Chat (session abc-123)"));
        assert!(result.contains("Ctrl+C"));
    }

    #[test]
    fn test_format_sent_confirmation() {
        // テスト項目: 送信確認に時刻が含まれる
        // given (前提条件):
        let sent_at = 1672531200000;

        // when (操作):
        let result = MessageFormatter::format_sent_confirmation(sent_at);

        // then (期待する結果):
        assert!(result.starts_with("sent at "));
        assert_eq!(result.matches(':').count(), 2);
    }

    #[test]
    fn test_format_continuation_label() {
        // テスト項目: 続きのラベルにメッセージ id が含まれる
        // given (前提条件):
        let id = "m1";

        // when (操作):
        let result = MessageFormatter::format_continuation_label(id);

        // then (期待する結果):
        assert!(result.contains("m1, continued"));
    }

    #[test]
    fn test_format_notice() {
        // テスト項目: 通知が本文付きでフォーマットされる
        // given (前提条件):
        let notice = Notice::ChatError(ChannelError::Closed);

        // when (操作):
        let result = MessageFormatter::format_notice(&notice);

        // then (期待する結果):
        assert_eq!(result, "\n! There was an error loading the chat\n");
    }
}
