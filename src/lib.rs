pub mod config;
pub mod console;
pub mod demos;
pub mod utils;

pub use config::RunnerConfig;
pub use console::{Console, MemoryConsole, StdoutConsole};
pub use demos::{run_demo, DEMO_NAMES};
pub use utils::error::{DemoError, Result};
