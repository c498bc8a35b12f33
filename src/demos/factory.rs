//! Factory 模式：把「依條件挑選具體實作」這件事集中在一個建構點。
//!
//! Typical uses: notification channels, or readers picked by input format.

use crate::console::Console;
use crate::utils::error::{DemoError, Result};

pub trait Notification: Send + Sync {
    fn send(&self, message: &str);
}

pub struct EmailNotification<C: Console> {
    console: C,
}

impl<C: Console> EmailNotification<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Notification for EmailNotification<C> {
    fn send(&self, message: &str) {
        self.console.write_line(&format!("Email sent: {}", message));
    }
}

pub struct SmsNotification<C: Console> {
    console: C,
}

impl<C: Console> SmsNotification<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Notification for SmsNotification<C> {
    fn send(&self, message: &str) {
        self.console.write_line(&format!("SMS sent: {}", message));
    }
}

pub struct NotificationFactory;

impl NotificationFactory {
    /// 依類型字串建立對應的通知通道。
    /// 類型集合是封閉的；集合外的值一律回傳錯誤，不產生任何實例。
    pub fn create<C: Console + 'static>(kind: &str, console: C) -> Result<Box<dyn Notification>> {
        match kind {
            "email" => Ok(Box::new(EmailNotification::new(console))),
            "sms" => Ok(Box::new(SmsNotification::new(console))),
            other => Err(DemoError::UnsupportedNotificationError {
                kind: other.to_string(),
            }),
        }
    }
}

pub fn run<C: Console + 'static>(console: C) -> Result<()> {
    let notification = NotificationFactory::create("sms", console)?;
    notification.send("Hello from the factory");

    Ok(())
}
