//! YRES Widgets UI Components
//!
//! Dioxus building blocks shared by the donation card and the program grid.
//!
//! ## Palette
//!
//! - **Teal (#3D96AB)**: primary actions, progress fill, category badges
//! - **Deep teal (#2d7a8f)**: hover states
//! - **Light teal (#6bb3c4)**: focus rings
//! - **Grey (#e0e0e0)**: progress track, disabled buttons

pub mod components;

pub use components::*;
