//! Telegram side: source adapter, update conversion, dispatcher runner.

pub mod adapters;
pub mod runner;
pub mod source;

pub use adapters::TelegramUpdateWrapper;
pub use runner::run_dispatcher;
pub use source::TelegramSource;
