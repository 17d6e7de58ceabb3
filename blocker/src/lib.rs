mod blocker;
mod error;
mod logger;
mod store;

pub use crate::blocker::Blocker;
pub use blocker_common::Verdict;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

const EVENT_ARRAY: &str = "EVENTS";
const BLOCKLIST: &str = "BLOCKLIST";
