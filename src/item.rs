//! Menu entry descriptors.
use crate::core::{Font, Pixels, Size};

/// One row of a [`HamburgerMenu`](crate::HamburgerMenu)'s navigation list.
///
/// An [`Item`] describes the row itself: the label shown in the label
/// column, an optional [`Icon`] for the icon column, and whether activating
/// the row selects it into the pinned (main) slot or the transient
/// (overlay) slot.
///
/// Items are positional: the item at index `i` of a
/// [`State`](crate::State) always describes the child element at index `i`
/// of the children given to the widget.
///
/// A plain string converts into a caption-only item, which is handy when a
/// child needs no icon:
///
/// ```
/// use hamburger_menu::Item;
///
/// let item = Item::from("Settings");
/// assert_eq!(item.content(), "Settings");
/// assert!(item.glyph().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    content: String,
    icon: Option<Icon>,
    is_overlay: bool,
    is_selected: bool,
    icon_size: Size,
    content_size: Size,
}

impl Item {
    /// Creates a new [`Item`] with the given label.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            icon: None,
            is_overlay: false,
            is_selected: false,
            icon_size: Size::ZERO,
            content_size: Size::ZERO,
        }
    }

    /// Sets the [`Icon`] shown in the icon column.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks this [`Item`] as an overlay entry.
    ///
    /// Activating an overlay entry selects it into the transient overlay
    /// slot instead of replacing the pinned selection; its child is shown
    /// on a dismissible surface next to the row.
    pub fn overlay(mut self) -> Self {
        self.is_overlay = true;
        self
    }

    /// Returns the label of this [`Item`].
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the [`Icon`] of this [`Item`], if any.
    pub fn glyph(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Returns whether this [`Item`] is an overlay entry.
    pub fn is_overlay(&self) -> bool {
        self.is_overlay
    }

    /// Returns whether this [`Item`] is currently selected, in either slot.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Caches the intrinsic sizes measured for this row.
    ///
    /// Returns whether either size changed, so the caller can invalidate
    /// the shared dimensions.
    pub(crate) fn set_intrinsic(&mut self, icon: Size, content: Size) -> bool {
        let changed = self.icon_size != icon || self.content_size != content;

        self.icon_size = icon;
        self.content_size = content;

        changed
    }

    pub(crate) fn icon_size(&self) -> Size {
        self.icon_size
    }

    pub(crate) fn content_size(&self) -> Size {
        self.content_size
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for Item {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Item {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// A font glyph used as the icon of an [`Item`] or as the header icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// The font that will be used to display the `code_point`.
    pub font: Font,
    /// The unicode code point that will be used as the icon.
    pub code_point: char,
    /// The font size of the icon.
    ///
    /// Defaults to the renderer's default size.
    pub size: Option<Pixels>,
}

impl Icon {
    /// Creates a new [`Icon`] from a unicode code point, using the default
    /// font and size.
    pub fn new(code_point: char) -> Self {
        Self {
            font: Font::default(),
            code_point,
            size: None,
        }
    }

    /// Sets the font of the [`Icon`].
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the font size of the [`Icon`].
    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = Some(size.into());
        self
    }
}

impl From<char> for Icon {
    fn from(code_point: char) -> Self {
        Self::new(code_point)
    }
}
