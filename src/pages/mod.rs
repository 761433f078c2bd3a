//! Page components for the YRES widgets.

mod donate;
mod programs;

pub use donate::Donate;
pub use programs::Programs;
