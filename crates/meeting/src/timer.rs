//! Countdown clock shown during the meeting.

/// Default meeting length: 90 minutes.
pub const DEFAULT_DURATION_SECS: u32 = 90 * 60;

/// Pausable countdown. Starts paused at the full duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingTimer {
    duration_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Default for MeetingTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl MeetingTimer {
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pauses and restores the full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.duration_secs;
    }

    /// Advances the clock by `elapsed_secs` while running.
    ///
    /// Saturates at zero and stops once time is up. Returns the remaining
    /// seconds.
    pub fn tick(&mut self, elapsed_secs: u32) -> u32 {
        if self.running {
            self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
            if self.remaining_secs == 0 {
                self.running = false;
            }
        }
        self.remaining_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `MM:SS`; minutes may exceed two digits.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
