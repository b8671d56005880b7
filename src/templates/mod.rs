//! HTML templates and styling for the note client.
//!
//! This module contains the CSS, the small amount of browser script and the
//! HTML generation functions for the web interface. Every function here is a
//! pure mapping from data to markup.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (nav bar, notices, base template)
//! - `editor` - Note form with the rich-text toolbar
//! - `listing` - Note cards and pagination controls
//! - `sidebar` - Tag list, statistics and activity calendar
//! - `index` - The main page assembled from the pieces above

mod components;
mod editor;
mod index;
mod listing;
mod sidebar;
mod styles;

pub use components::{base_html, nav_bar, render_notices};
pub use editor::render_note_form;
pub use index::{render_index, IndexView, Panel};
pub use listing::{render_notes, render_pagination, NO_NOTES_PLACEHOLDER};
pub use sidebar::{render_calendar, render_statistics, render_tags, NO_DATA_PLACEHOLDER};
pub use styles::STYLE;
