//! Decorator 模式：在不修改既有實作的情況下，為能力加上額外行為。
//!
//! Typical uses: logging, caching, authorization, metrics.

use crate::console::Console;
use crate::utils::error::Result;

pub trait Service: Send + Sync {
    fn execute(&self);
}

pub struct BaseService<C: Console> {
    console: C,
}

impl<C: Console> BaseService<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Service for BaseService<C> {
    fn execute(&self) {
        self.console.write_line("Executing base service logic");
    }
}

/// 包裝任何一個 Service，於委派前後各輸出一個標記。
/// 裝飾器本身也是 Service，因此可以層層疊加。
pub struct LoggingDecorator<S: Service, C: Console> {
    inner: S,
    console: C,
}

impl<S: Service, C: Console> LoggingDecorator<S, C> {
    pub fn new(inner: S, console: C) -> Self {
        Self { inner, console }
    }
}

impl<S: Service, C: Console> Service for LoggingDecorator<S, C> {
    fn execute(&self) {
        self.console.write_line("Before execution");
        self.inner.execute();
        self.console.write_line("After execution");
    }
}

pub fn run<C: Console + Clone>(console: C) -> Result<()> {
    let service = LoggingDecorator::new(BaseService::new(console.clone()), console);
    service.execute();

    Ok(())
}
