//! Reusable UI components

pub mod avatar;
pub mod badge;
pub mod message_bubble;

pub use avatar::Avatar;
pub use badge::Badge;
