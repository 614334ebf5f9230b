//! DOM controllers mounted onto the server-rendered documentation page.
//!
//! The two controllers are independent: a page without a search box can still
//! mount the theme toggle, and the other way round.

pub mod search_box;
pub mod theme_toggle;
