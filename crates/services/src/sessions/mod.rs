mod progress;
mod service;
mod summary;
mod workflow;

// Public API of the practice subsystem.
pub use crate::error::SessionError;
pub use progress::PracticeProgress;
pub use service::{
    OptionState, PracticePhase, PracticeSession, RevealCause, TickOutcome, TimePressure,
    Transition,
};
pub use summary::{PracticeSummary, Verdict};
pub use workflow::PracticeLoopService;
