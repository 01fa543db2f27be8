//! Botboard - a visual bot constructor.
//!
//! Compose a bot's behavior as spatially arranged blocks on a grid canvas,
//! edit each block's settings through a modal form, and submit the result
//! to a generation service that returns the bot's source as a zip archive.

pub mod app;
pub mod board;
pub mod constants;
pub mod generate;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;
