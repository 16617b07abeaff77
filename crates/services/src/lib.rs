#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_service;
pub mod sessions;
pub mod settings;
pub mod study;
pub mod topic_service;

pub use prep_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuestionServiceError, SessionError, TopicServiceError};
pub use question_service::{QuestionCatalog, QuestionService};
pub use sessions::{
    OptionState, PracticeLoopService, PracticePhase, PracticeProgress, PracticeSession,
    PracticeSummary, RevealCause, TickOutcome, TimePressure, Transition, Verdict,
};
pub use settings::{DEFAULT_COUNTDOWN_SECS, PracticeSettings};
pub use study::StudyProgress;
pub use topic_service::{TopicListing, TopicOverview, TopicService};
