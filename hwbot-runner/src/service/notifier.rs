//! Notifier service
//!
//! Delivers chat messages with a duplicate guard. Delivery failures are
//! logged and swallowed: a broken chat must never stop the polling loop.

use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Outcome of a single [`Notifier::notify`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message was delivered
    Sent,

    /// Same text as the last delivered message; nothing was sent
    Suppressed,

    /// The delivery attempt failed; the error was logged
    Failed,
}

/// Sends messages, suppressing immediate repeats
pub struct Notifier {
    repository: Arc<dyn MessageRepository>,
    last_sent: Option<String>,
}

impl Notifier {
    /// Creates a notifier with an empty duplicate guard
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self {
            repository,
            last_sent: None,
        }
    }

    /// Text of the most recently delivered message
    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Delivers `text` unless it equals the last delivered message
    ///
    /// At most one delivery attempt is made. The guard only moves on
    /// success, so a failed message is retried when it comes up again.
    pub async fn notify(&mut self, text: &str) -> Delivery {
        if self.last_sent.as_deref() == Some(text) {
            debug!("Message unchanged, not sending again");
            return Delivery::Suppressed;
        }

        self.send(text).await
    }

    /// Delivers `text` without consulting the guard
    ///
    /// Used for the startup notice; the guard is still updated on success.
    pub async fn send(&mut self, text: &str) -> Delivery {
        debug!("Sending message");

        match self.repository.send_message(text).await {
            Ok(()) => {
                debug!("Message sent: {}", text);
                self.last_sent = Some(text.to_string());
                Delivery::Sent
            }
            Err(e) => {
                error!("Failed to send message: {}", e);
                Delivery::Failed
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use hwbot_client::ClientError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records delivered messages; fails the next `fail_next` attempts
    #[derive(Default)]
    pub(crate) struct RecordingChat {
        pub sent: Mutex<Vec<String>>,
        pub attempts: AtomicUsize,
        pub fail_next: AtomicUsize,
    }

    impl RecordingChat {
        pub fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageRepository for RecordingChat {
        async fn send_message(&self, text: &str) -> Result<(), ClientError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            let failing = self
                .fail_next
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(ClientError::Telegram("Bad Request: chat not found".to_string()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_duplicate_is_suppressed() {
        let chat = Arc::new(RecordingChat::default());
        let mut notifier = Notifier::new(chat.clone());

        assert_eq!(notifier.notify("hello").await, Delivery::Sent);
        assert_eq!(notifier.notify("hello").await, Delivery::Suppressed);

        assert_eq!(chat.sent(), vec!["hello".to_string()]);
        assert_eq!(chat.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_changed_message_is_sent() {
        let chat = Arc::new(RecordingChat::default());
        let mut notifier = Notifier::new(chat.clone());

        notifier.notify("a").await;
        notifier.notify("b").await;
        notifier.notify("a").await;

        assert_eq!(chat.sent(), vec!["a", "b", "a"]);
        assert_eq!(notifier.last_sent(), Some("a"));
    }

    #[tokio::test]
    async fn test_failure_is_swallowed_and_guard_kept() {
        let chat = Arc::new(RecordingChat::default());
        chat.fail_next.store(1, Ordering::SeqCst);
        let mut notifier = Notifier::new(chat.clone());

        assert_eq!(notifier.notify("hello").await, Delivery::Failed);
        assert_eq!(notifier.last_sent(), None);

        // Not suppressed: the first attempt never reached the chat.
        assert_eq!(notifier.notify("hello").await, Delivery::Sent);
        assert_eq!(chat.attempts.load(Ordering::SeqCst), 2);
        assert_eq!(chat.sent(), vec!["hello"]);
    }
}
