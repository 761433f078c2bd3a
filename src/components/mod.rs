//! UI components for the YRES widgets.

mod donation_card;
mod nav;
mod program_card;
mod program_grid;

pub use donation_card::DonationCard;
pub use nav::{NavLocation, SiteNav};
pub use program_card::ProgramCard;
pub use program_grid::{run_dispatch, ProgramGrid};
