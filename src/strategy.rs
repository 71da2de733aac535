//! Pattern 3: Strategy
//!
//! Each notification platform is its own strategy object; the service picks
//! one at runtime from the channel name and falls back to a strategy that
//! reports the channel as unsupported.

use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Unsupported notification channel: '{channel}'")]
    UnsupportedChannel { channel: String },
}

/// Receipt for a delivered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub platform: String,
    pub destination: String,
    pub message: String,
}

pub trait NotificationStrategy: Send + Sync {
    fn platform(&self) -> &str;

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError>;
}

fn deliver(platform: &str, destination: &str, message: &str) -> Notification {
    info!(
        service = "notification",
        platform,
        destination,
        message,
        "notification sent to {}",
        platform
    );
    Notification {
        platform: platform.to_string(),
        destination: destination.to_string(),
        message: message.to_string(),
    }
}

pub struct DiscordNotificationStrategy;

impl NotificationStrategy for DiscordNotificationStrategy {
    fn platform(&self) -> &str {
        "Discord"
    }

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
        Ok(deliver(self.platform(), destination, message))
    }
}

pub struct InstagramNotificationStrategy;

impl NotificationStrategy for InstagramNotificationStrategy {
    fn platform(&self) -> &str {
        "Instagram"
    }

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
        Ok(deliver(self.platform(), destination, message))
    }
}

pub struct TwitterNotificationStrategy;

impl NotificationStrategy for TwitterNotificationStrategy {
    fn platform(&self) -> &str {
        "Twitter"
    }

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
        Ok(deliver(self.platform(), destination, message))
    }
}

pub struct WhatsAppNotificationStrategy;

impl NotificationStrategy for WhatsAppNotificationStrategy {
    fn platform(&self) -> &str {
        "WhatsApp"
    }

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
        Ok(deliver(self.platform(), destination, message))
    }
}

pub struct EmailNotificationStrategy;

impl NotificationStrategy for EmailNotificationStrategy {
    fn platform(&self) -> &str {
        "Email"
    }

    fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
        Ok(deliver(self.platform(), destination, message))
    }
}

/// Fallback used when no strategy is registered for a channel.
pub struct UnsupportedNotificationStrategy {
    channel: String,
}

impl UnsupportedNotificationStrategy {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl NotificationStrategy for UnsupportedNotificationStrategy {
    fn platform(&self) -> &str {
        &self.channel
    }

    fn send(&self, destination: &str, _message: &str) -> Result<Notification, NotificationError> {
        error!(
            service = "notification",
            channel = %self.channel,
            destination,
            "unsupported notification channel"
        );
        Err(NotificationError::UnsupportedChannel {
            channel: self.channel.clone(),
        })
    }
}

pub struct NotificationService {
    strategies: HashMap<String, Box<dyn NotificationStrategy>>,
}

impl NotificationService {
    /// Service with the five built-in platforms registered.
    pub fn new() -> Self {
        let mut service = Self::empty();
        service.register("discord", DiscordNotificationStrategy);
        service.register("instagram", InstagramNotificationStrategy);
        service.register("twitter", TwitterNotificationStrategy);
        service.register("whatsapp", WhatsAppNotificationStrategy);
        service.register("email", EmailNotificationStrategy);
        service
    }

    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Add or replace the strategy for `channel` (case-insensitive).
    pub fn register<S>(&mut self, channel: &str, strategy: S) -> &mut Self
    where
        S: NotificationStrategy + 'static,
    {
        self.strategies
            .insert(channel.to_lowercase(), Box::new(strategy));
        self
    }

    pub fn notify(
        &self,
        channel: &str,
        destination: &str,
        message: &str,
    ) -> Result<Notification, NotificationError> {
        let channel = channel.to_lowercase();
        match self.strategies.get(&channel) {
            Some(strategy) => strategy.send(destination, message),
            None => UnsupportedNotificationStrategy::new(channel).send(destination, message),
        }
    }

    pub fn supports(&self, channel: &str) -> bool {
        self.strategies.contains_key(&channel.to_lowercase())
    }

    pub fn channels(&self) -> Vec<&str> {
        let mut channels: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        channels.sort_unstable();
        channels
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    const DESTINATION: &str = "user@example.com";
    const MESSAGE: &str = "Hello! This is a test message.";

    // Captures everything it is asked to send.
    #[derive(Clone, Default)]
    struct RecordingStrategy {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl NotificationStrategy for RecordingStrategy {
        fn platform(&self) -> &str {
            "Recorder"
        }

        fn send(&self, destination: &str, message: &str) -> Result<Notification, NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((destination.to_string(), message.to_string()));
            Ok(deliver(self.platform(), destination, message))
        }
    }

    #[test]
    fn test_builtin_channels() {
        let service = NotificationService::new();
        assert_eq!(
            service.channels(),
            vec!["discord", "email", "instagram", "twitter", "whatsapp"]
        );
    }

    #[test]
    fn test_each_channel_routes_to_its_platform() {
        let service = NotificationService::new();
        let cases = [
            ("discord", "Discord"),
            ("instagram", "Instagram"),
            ("twitter", "Twitter"),
            ("whatsapp", "WhatsApp"),
            ("email", "Email"),
        ];

        for (channel, platform) in cases {
            let receipt = service.notify(channel, DESTINATION, MESSAGE).unwrap();
            assert_eq!(receipt.platform, platform);
            assert_eq!(receipt.destination, DESTINATION);
            assert_eq!(receipt.message, MESSAGE);
        }
    }

    #[test]
    fn test_channel_lookup_ignores_case() {
        let service = NotificationService::new();
        let receipt = service.notify("WhatsApp", DESTINATION, MESSAGE).unwrap();
        assert_eq!(receipt.platform, "WhatsApp");
        assert!(service.supports("EMAIL"));
    }

    #[test]
    fn test_unsupported_channel_is_an_error() {
        let service = NotificationService::new();
        let err = service.notify("Telegram", DESTINATION, MESSAGE).unwrap_err();
        assert_eq!(
            err,
            NotificationError::UnsupportedChannel {
                channel: "telegram".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unsupported notification channel: 'telegram'");
        assert!(!service.supports("telegram"));
    }

    #[test]
    fn test_empty_service_rejects_everything() {
        let service = NotificationService::empty();
        assert!(service.channels().is_empty());
        assert!(service.notify("email", DESTINATION, MESSAGE).is_err());
    }

    #[test]
    fn test_register_custom_strategy() {
        let recorder = RecordingStrategy::default();
        let mut service = NotificationService::new();
        service.register("Telegram", recorder.clone());

        let receipt = service.notify("telegram", DESTINATION, MESSAGE).unwrap();

        assert_eq!(receipt.platform, "Recorder");
        assert_eq!(
            *recorder.sent.lock().unwrap(),
            vec![(DESTINATION.to_string(), MESSAGE.to_string())]
        );
        assert!(service.channels().contains(&"telegram"));
    }

    #[test]
    fn test_register_replaces_existing_strategy() {
        let recorder = RecordingStrategy::default();
        let mut service = NotificationService::new();
        service.register("email", recorder.clone());

        service.notify("email", DESTINATION, MESSAGE).unwrap();

        assert_eq!(recorder.sent.lock().unwrap().len(), 1);
        assert_eq!(service.channels().len(), 5);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service = Arc::new(NotificationService::new());
        let handles: Vec<_> = ["discord", "email", "twitter"]
            .into_iter()
            .map(|channel| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.notify(channel, DESTINATION, MESSAGE).is_ok())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    proptest! {
        #[test]
        fn test_dispatch_is_case_insensitive(mask in prop::collection::vec(any::<bool>(), 9)) {
            let service = NotificationService::new();
            let channel: String = "instagram"
                .chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();

            let receipt = service.notify(&channel, DESTINATION, MESSAGE).unwrap();
            prop_assert_eq!(receipt.platform, "Instagram");
        }
    }
}
