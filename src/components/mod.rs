//! UI Components
//!
//! Leptos components for each page section.

mod booking_form;
mod cart_button;
mod gallery;
mod menu_filters;
mod menu_grid;
mod menu_section;
mod site_header;

pub use booking_form::BookingForm;
pub use cart_button::CartButton;
pub use gallery::{Gallery, LightboxOverlay};
pub use menu_filters::MenuFilters;
pub use menu_grid::MenuGrid;
pub use menu_section::MenuSection;
pub use site_header::SiteHeader;
