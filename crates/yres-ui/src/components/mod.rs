//! Reusable UI components
//!
//! Components take already-derived view data from `yres-core` and only
//! paint it; none of them own interaction state.

mod badge;
mod button;
mod progress_bar;

pub use badge::*;
pub use button::*;
pub use progress_bar::*;
