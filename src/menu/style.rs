//! Styling for hamburger menus.
use crate::core::{Background, Color, Theme};

/// The appearance of a [`HamburgerMenu`](crate::HamburgerMenu).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The [`Background`] of the navigation list.
    pub background: Background,
    /// The text [`Color`] of row labels and the header.
    pub text_color: Color,
    /// The [`Color`] of row icons and the header icon.
    pub icon_color: Color,
    /// The [`Background`] of selected rows.
    pub selected_background: Background,
    /// The text and icon [`Color`] of selected rows.
    pub selected_text_color: Color,
    /// The [`Background`] of the hovered row.
    pub hovered_background: Background,
    /// The [`Color`] of the scrim behind the overlay surface.
    pub backdrop: Color,
}

/// The theme catalog of a [`HamburgerMenu`](crate::HamburgerMenu).
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class.
    fn style(&self, class: &Self::Class<'_>) -> Style;
}

/// A styling function for a [`HamburgerMenu`](crate::HamburgerMenu).
///
/// This is just a boxed closure: `Fn(&Theme) -> Style`.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> StyleFn<'a, Self> {
        Box::new(default)
    }

    fn style(&self, class: &StyleFn<'_, Self>) -> Style {
        class(self)
    }
}

/// The default style of a [`HamburgerMenu`](crate::HamburgerMenu).
pub fn default(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: palette.background.weak.color.into(),
        text_color: palette.background.weak.text,
        icon_color: palette.background.weak.text,
        selected_background: palette.primary.base.color.into(),
        selected_text_color: palette.primary.base.text,
        hovered_background: palette.background.strong.color.into(),
        backdrop: Color {
            a: 0.4,
            ..Color::BLACK
        },
    }
}
