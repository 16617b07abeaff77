use clap::Parser;
use services::{DEFAULT_COUNTDOWN_SECS, PracticeSettings, SessionError};

/// Desktop JavaScript interview preparation.
#[derive(Debug, Parser)]
#[command(name = "js-interview-prep", version, about)]
pub struct Args {
    /// Seconds allowed per practice question.
    #[arg(
        long,
        env = "PREP_COUNTDOWN_SECS",
        default_value_t = DEFAULT_COUNTDOWN_SECS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub countdown_secs: u32,

    /// Shuffle the practice questions at the start of each run.
    #[arg(long, env = "PREP_SHUFFLE")]
    pub shuffle: bool,

    /// Log filter directive, e.g. `info` or `services=debug`.
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Args {
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCountdown` for a zero countdown.
    pub fn practice_settings(&self) -> Result<PracticeSettings, SessionError> {
        PracticeSettings::new(self.countdown_secs, self.shuffle)
    }
}
