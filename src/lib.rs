//! A hamburger navigation menu for [`iced`].
//!
//! A [`HamburgerMenu`] couples three surfaces that stay consistent while the
//! application adds, removes, reorders, selects, or resizes entries:
//!
//! * a navigation list of rows (icon column + label column, collapsible to
//!   the icon column alone),
//! * a main content surface showing the child of the currently pinned row,
//! * a transient overlay surface showing the child of an overlay row, placed
//!   next to its originating row and dismissed by releasing on the backdrop.
//!
//! The menu entries live in an application-owned [`State`]: one [`Item`] per
//! child element, kept index-parallel with the children passed to the widget
//! on every `view`. Structural changes go through the [`State`] operations
//! (`insert`, `remove`, `move_range`, `replace`, `reset`), which keep the
//! selection invariants intact: exactly one pinned row is selected whenever
//! any non-overlay row exists, and at most one overlay row is selected at a
//! time.
//!
//! # Example
//! ```ignore
//! use hamburger_menu::{hamburger_menu, Icon, Item, SelectionChange, State};
//!
//! struct App {
//!     menu: State,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Navigated(SelectionChange),
//! }
//!
//! impl App {
//!     fn new() -> Self {
//!         Self {
//!             menu: State::new([
//!                 Item::new("Inbox").icon(Icon::new('\u{2709}')),
//!                 Item::new("Archive").icon(Icon::new('\u{1F5C4}')),
//!                 Item::new("Settings").icon(Icon::new('\u{2699}')).overlay(),
//!             ]),
//!         }
//!     }
//!
//!     fn view(&self) -> Element<'_, Message> {
//!         hamburger_menu(
//!             &self.menu,
//!             [inbox_view(), archive_view(), settings_view()],
//!         )
//!         .header("Mail")
//!         .on_select(Message::Navigated)
//!         .into()
//!     }
//! }
//! ```
//!
//! [`iced`]: https://github.com/iced-rs/iced
pub use iced_widget::core;
pub use iced_widget::Renderer;

pub use crate::core::theme;
pub use crate::core::Theme;

mod item;
mod items;
mod measure;
mod selection;

pub mod menu;

pub use item::{Icon, Item};
pub use measure::Dimensions;
pub use menu::{hamburger_menu, HamburgerMenu, Side, State};
pub use selection::{Delta, SelectionChange};
