mod practice_vm;
mod question_vm;
mod time_fmt;
mod topic_vm;

pub use practice_vm::{
    NavDotVm, OptionItemVm, PracticeIntent, PracticeSummaryVm, PracticeVm, start_practice,
};
pub use question_vm::{QuestionCardVm, difficulty_class, map_question_card, map_question_cards};
pub use time_fmt::format_datetime;
pub use topic_vm::{TopicCardVm, TopicOverviewVm, map_topic_card, map_topic_overview};
