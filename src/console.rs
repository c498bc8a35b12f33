use std::sync::{Arc, Mutex};

pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// 記錄輸出行的 Console；clone 之間共享同一個緩衝區
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .expect("Failed to lock console buffer")
            .clone()
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .expect("Failed to lock console buffer")
            .push(line.to_string());
    }
}
