use std::fmt;

/// Default time limit in seconds (5:00).
pub const DEFAULT_TIME_LIMIT: u32 = 300;

/// Countdown in whole seconds, advanced by the host once per second.
///
/// Stops for good when it reaches zero or when stopped explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    remaining: u32,
    running: bool,
}

impl Timer {
    pub const fn new(seconds: u32) -> Self {
        Self { remaining: seconds, running: seconds > 0 }
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Count down one second. Returns whether the value changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

/// Seconds as `M:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.remaining))
    }
}
