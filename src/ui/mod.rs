//! User interface: theme, reusable components, and the views of the
//! messenger screen

pub mod components;
pub mod theme;
pub mod views;
pub mod widgets;
