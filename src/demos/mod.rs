pub mod decorator;
pub mod factory;
pub mod repository;
pub mod strategy;

use crate::console::Console;
use crate::utils::error::{DemoError, Result};

/// 可執行的示範名稱（封閉集合，依預設執行順序排列）
pub const DEMO_NAMES: &[&str] = &["decorator", "factory", "repository", "strategy"];

pub fn run_demo<C: Console + Clone + 'static>(name: &str, console: C) -> Result<()> {
    match name {
        "decorator" => decorator::run(console),
        "factory" => factory::run(console),
        "repository" => repository::run(console),
        "strategy" => strategy::run(console),
        other => Err(DemoError::InvalidConfigValueError {
            field: "demo".to_string(),
            value: other.to_string(),
            reason: format!("Unknown demo. Known demos: {}", DEMO_NAMES.join(", ")),
        }),
    }
}
