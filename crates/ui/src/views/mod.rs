mod home;
mod practice;
mod questions;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use practice::PracticeView;
pub use questions::QuestionsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topics::TopicsView;
