//! UI Views - the panels of the messenger screen
//!
//! Views only read the controller. Every interaction is pushed onto the
//! frame's action list and applied by the app once the frame is built.

pub mod chat_list;
pub mod chat_view;
pub mod main_view;
pub mod settings;
pub mod sidebar;
