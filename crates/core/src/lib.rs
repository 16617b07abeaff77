#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod time;

pub use time::{Clock, Countdown};
