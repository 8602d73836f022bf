//! Rendering — layout, theme, navbar, section builders, and the page view.

pub mod layout;
pub mod navbar;
pub mod page;
pub mod sections;
pub mod smooth_scroll;
pub mod theme;
