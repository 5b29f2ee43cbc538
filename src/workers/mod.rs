pub mod commander;
pub mod core;
pub mod poller;

pub use commander::{BotCommand, Commander};
pub use poller::Poller;
