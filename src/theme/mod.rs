//! Global styles for the YRES widgets.

mod styles;

pub use styles::GLOBAL_STYLES;
