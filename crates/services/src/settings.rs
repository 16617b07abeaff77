use crate::error::SessionError;

/// Seconds per practice question unless configured otherwise.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 30;

/// Knobs for practice sessions, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSettings {
    countdown_secs: u32,
    shuffle: bool,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            shuffle: false,
        }
    }
}

impl PracticeSettings {
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCountdown` when `countdown_secs` is zero.
    pub fn new(countdown_secs: u32, shuffle: bool) -> Result<Self, SessionError> {
        if countdown_secs == 0 {
            return Err(SessionError::InvalidCountdown(countdown_secs));
        }
        Ok(Self {
            countdown_secs,
            shuffle,
        })
    }

    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }
}
