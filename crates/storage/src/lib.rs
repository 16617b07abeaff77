#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;

pub use repository::{
    InMemoryRepository, PracticeRepository, QuestionRepository, Storage, StorageError,
    TopicRepository,
};
