use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Notification type not supported")]
    UnsupportedNotificationError { kind: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DemoError>;

impl DemoError {
    /// 根據錯誤種類決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::UnsupportedNotificationError { .. } => 1,
            DemoError::SerializationError(_) => 1,
            DemoError::InvalidConfigValueError { .. } => 2,
        }
    }
}
