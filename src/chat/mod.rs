//! Chat view state: the static dataset and the controller that owns the
//! interaction state of the single messenger screen

pub mod controller;
pub mod models;
pub mod seed;

pub use controller::{ChatAction, ChatController};
pub use models::{ChatSummary, Message, Section};
