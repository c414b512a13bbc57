//! A hamburger navigation menu.
//!
//! The widget shows a navigation list of rows next to a content surface.
//! Every row shares the same icon column width, label column width and row
//! height, aggregated from the intrinsic sizes of the rows and the header.
//! Releasing inside a row selects it: regular rows swap the content surface,
//! overlay rows open a dismissible surface next to the row.
//!
//! # Example
//! ```ignore
//! use hamburger_menu::{hamburger_menu, Icon, Item, State};
//!
//! let state = State::new([
//!     Item::new("Inbox").icon(Icon::new('\u{2709}')),
//!     Item::new("Settings").icon(Icon::new('\u{2699}')).overlay(),
//! ]);
//!
//! let menu = hamburger_menu(&state, [inbox_view(), settings_view()])
//!     .header("Mail")
//!     .on_select(Message::Navigated);
//! ```
mod overlay;
mod state;
mod style;

pub use state::State;
pub use style::{default, Catalog, Style, StyleFn};

use crate::core::event;
use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::text::paragraph;
use crate::core::text::{self, Text};
use crate::core::touch;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::Operation;
use crate::core::window;
use crate::core::{
    alignment, Clipboard, Element, Event, Font, Layout, Length, Padding, Pixels, Point, Rectangle,
    Shell, Size, Vector, Widget,
};
use crate::item::Icon;
use crate::measure::Dimensions;
use crate::selection::SelectionChange;

use self::overlay::ContentOverlay;

/// The default padding of a [`HamburgerMenu`]'s rows.
pub const DEFAULT_PADDING: Padding = Padding {
    top: 0.0,
    right: 8.0,
    bottom: 0.0,
    left: 8.0,
};

/// The edge of the widget the navigation list is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    /// The navigation list sits on the left edge.
    #[default]
    Left,
    /// The navigation list sits on the right edge.
    Right,
}

/// Creates a new [`HamburgerMenu`] with the given [`State`] and children.
///
/// The children must be index-parallel with the items of the [`State`]:
/// child `i` is the content shown when the row described by item `i` is
/// selected.
pub fn hamburger_menu<'a, Message, Theme, Renderer>(
    state: &'a State,
    children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
) -> HamburgerMenu<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: text::Renderer<Font = Font>,
{
    HamburgerMenu::new(state, children)
}

/// A navigation menu with a collapsible list of rows, a main content
/// surface and a transient overlay surface.
///
/// The rows are described by the [`Item`](crate::Item)s of an
/// application-owned [`State`]; the children passed to the widget are the
/// surfaces being navigated. Exactly one non-overlay row is selected
/// whenever any exists; its child fills the content region. At most one
/// overlay row is selected; its child floats over the content region next
/// to the row and is dismissed by releasing on the backdrop.
pub struct HamburgerMenu<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: text::Renderer<Font = Font>,
{
    state: &'a State,
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    header: Option<String>,
    header_icon: Option<Icon>,
    side: Side,
    width: Length,
    height: Length,
    padding: Padding,
    text_size: Option<Pixels>,
    font: Option<Font>,
    on_select: Option<Box<dyn Fn(SelectionChange) -> Message + 'a>>,
    class: <Theme as Catalog>::Class<'a>,
}

impl<'a, Message, Theme, Renderer> HamburgerMenu<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: text::Renderer<Font = Font>,
{
    /// Creates a new [`HamburgerMenu`] with the given [`State`] and
    /// children.
    pub fn new(
        state: &'a State,
        children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            state,
            children: children.into_iter().collect(),
            header: None,
            header_icon: Some(Icon::new('\u{2630}')),
            side: Side::default(),
            width: Length::Fill,
            height: Length::Fill,
            padding: DEFAULT_PADDING,
            text_size: None,
            font: None,
            on_select: None,
            class: <Theme as Catalog>::default(),
        }
    }

    /// Adds a child to the [`HamburgerMenu`].
    pub fn push(mut self, child: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Sets the header label shown above the rows.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the header icon.
    ///
    /// Releasing inside the header icon toggles the navigation list between
    /// its expanded and collapsed widths.
    pub fn header_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.header_icon = Some(icon.into());
        self
    }

    /// Sets the header icon, or removes it with `None`.
    ///
    /// Without a header icon, the click-to-toggle interaction is
    /// unavailable; the expand flag can still be driven through
    /// [`State::set_expanded`].
    pub fn header_icon_maybe(mut self, icon: Option<Icon>) -> Self {
        self.header_icon = icon;
        self
    }

    /// Sets the [`Side`] the navigation list is attached to.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Sets the width of the [`HamburgerMenu`].
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height of the [`HamburgerMenu`].
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the [`Padding`] of the rows.
    pub fn padding<P: Into<Padding>>(mut self, padding: P) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the text size of the row labels and the header.
    pub fn text_size(mut self, size: impl Into<Pixels>) -> Self {
        self.text_size = Some(size.into());
        self
    }

    /// Sets the font of the row labels and the header.
    pub fn font(mut self, font: impl Into<Font>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the message produced when the selection changes.
    ///
    /// The [`SelectionChange`] carries the previous and current indices of
    /// both the pinned and the overlay slot.
    pub fn on_select(mut self, on_select: impl Fn(SelectionChange) -> Message + 'a) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Sets the style of the [`HamburgerMenu`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme) -> Style + 'a) -> Self
    where
        <Theme as Catalog>::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`HamburgerMenu`].
    #[must_use]
    pub fn class(mut self, class: impl Into<<Theme as Catalog>::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    fn has_header(&self) -> bool {
        self.header.is_some() || self.header_icon.is_some()
    }

    fn geometry(&self, bounds: Rectangle) -> Geometry {
        let inner = self.state.inner.borrow();

        Geometry::new(
            bounds,
            inner.dimensions(),
            inner.current_label_width(),
            self.padding,
            self.side,
            self.has_header(),
            inner.items.len(),
        )
    }
}

/// The resolved placement of the navigation list, its rows and the content
/// region inside the widget bounds.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    bounds: Rectangle,
    nav: Rectangle,
    content: Rectangle,
    header: Option<Rectangle>,
    row_height: f32,
    icon_width: f32,
    label_width: f32,
    padding: Padding,
    count: usize,
}

impl Geometry {
    fn new(
        bounds: Rectangle,
        dimensions: Dimensions,
        label_width: f32,
        padding: Padding,
        side: Side,
        has_header: bool,
        count: usize,
    ) -> Self {
        let nav_width =
            (padding.horizontal() + dimensions.icon_width + label_width).min(bounds.width);

        let nav_x = match side {
            Side::Left => bounds.x,
            Side::Right => bounds.x + bounds.width - nav_width,
        };
        let nav = Rectangle {
            x: nav_x,
            y: bounds.y,
            width: nav_width,
            height: bounds.height,
        };

        let content_x = match side {
            Side::Left => bounds.x + nav_width,
            Side::Right => bounds.x,
        };
        let content = Rectangle {
            x: content_x,
            y: bounds.y,
            width: (bounds.width - nav_width).max(0.0),
            height: bounds.height,
        };

        let header = has_header.then_some(Rectangle {
            height: dimensions.row_height,
            ..nav
        });

        Self {
            bounds,
            nav,
            content,
            header,
            row_height: dimensions.row_height,
            icon_width: dimensions.icon_width,
            label_width,
            padding,
            count,
        }
    }

    fn rows_top(&self) -> f32 {
        self.bounds.y + self.header.map(|header| header.height).unwrap_or(0.0)
    }

    fn row(&self, index: usize) -> Rectangle {
        Rectangle {
            x: self.nav.x,
            y: self.rows_top() + index as f32 * self.row_height,
            width: self.nav.width,
            height: self.row_height,
        }
    }

    fn row_at(&self, position: Point) -> Option<usize> {
        if self.row_height <= 0.0 || !self.nav.contains(position) {
            return None;
        }

        let offset = position.y - self.rows_top();
        if offset < 0.0 {
            return None;
        }

        let index = (offset / self.row_height) as usize;

        (index < self.count).then_some(index)
    }

    fn icon_cell(&self, row: Rectangle) -> Rectangle {
        Rectangle {
            x: row.x + self.padding.left,
            width: self.icon_width,
            ..row
        }
    }

    fn label_cell(&self, row: Rectangle) -> Rectangle {
        Rectangle {
            x: row.x + self.padding.left + self.icon_width,
            width: self.label_width,
            ..row
        }
    }

    /// The zone whose release toggles the expand flag.
    fn header_toggle(&self) -> Option<Rectangle> {
        self.header.map(|header| self.icon_cell(header))
    }
}

struct RowText<P: text::Paragraph> {
    icon: paragraph::Plain<P>,
    label: paragraph::Plain<P>,
}

impl<P: text::Paragraph> Default for RowText<P> {
    fn default() -> Self {
        Self {
            icon: paragraph::Plain::default(),
            label: paragraph::Plain::default(),
        }
    }
}

struct Internal<P: text::Paragraph> {
    header: paragraph::Plain<P>,
    header_icon: paragraph::Plain<P>,
    rows: Vec<RowText<P>>,
    misconfigured: bool,
}

impl<P: text::Paragraph> Default for Internal<P> {
    fn default() -> Self {
        Self {
            header: paragraph::Plain::default(),
            header_icon: paragraph::Plain::default(),
            rows: Vec::new(),
            misconfigured: false,
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for HamburgerMenu<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: text::Renderer<Font = Font>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Internal<Renderer::Paragraph>>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Internal::<Renderer::Paragraph>::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let internal = tree.state.downcast_mut::<Internal<Renderer::Paragraph>>();
        let size = limits.resolve(self.width, self.height, Size::ZERO);

        let mut inner = self.state.inner.borrow_mut();

        let misconfigured = self.children.len() != inner.items.len();
        if misconfigured != internal.misconfigured {
            internal.misconfigured = misconfigured;

            if misconfigured {
                log::error!(
                    "hamburger_menu: {} children declared for {} items; \
                     the menu is disabled until the two match",
                    self.children.len(),
                    inner.items.len(),
                );
            }
        }

        if misconfigured {
            drop(inner);

            return layout::Node::with_children(
                size,
                self.children
                    .iter()
                    .map(|_| layout::Node::new(Size::ZERO))
                    .collect(),
            );
        }

        let font = self.font.unwrap_or_else(|| renderer.default_font());
        let text_size = self.text_size.unwrap_or_else(|| renderer.default_size());

        internal.rows.resize_with(inner.items.len(), Default::default);

        let unconstrained = Text {
            content: "",
            bounds: Size::INFINITY,
            size: text_size,
            line_height: text::LineHeight::default(),
            font,
            horizontal_alignment: alignment::Horizontal::Left,
            vertical_alignment: alignment::Vertical::Center,
            shaping: text::Shaping::default(),
            wrapping: text::Wrapping::default(),
        };

        // The measure-commit cycle runs at most twice: once to discover a
        // stale aggregate, once more after committing changed dimensions.
        for _ in 0..2 {
            let state::Inner {
                items, aggregate, ..
            } = &mut *inner;

            for (item, row) in items.iter_mut().zip(internal.rows.iter_mut()) {
                row.label.update(Text {
                    content: item.content(),
                    ..unconstrained
                });

                let icon_size = match item.glyph() {
                    Some(icon) => {
                        let code_point = icon.code_point.to_string();

                        row.icon.update(Text {
                            content: &code_point,
                            size: icon.size.unwrap_or(text_size),
                            font: icon.font,
                            ..unconstrained
                        });

                        row.icon.min_bounds()
                    }
                    None => Size::ZERO,
                };

                if item.set_intrinsic(icon_size, row.label.min_bounds()) {
                    aggregate.invalidate();
                }
            }

            let header_size = match &self.header {
                Some(header) => {
                    internal.header.update(Text {
                        content: header,
                        ..unconstrained
                    });

                    internal.header.min_bounds()
                }
                None => Size::ZERO,
            };
            aggregate.set_header(header_size);

            let header_icon_size = match &self.header_icon {
                Some(icon) => {
                    let code_point = icon.code_point.to_string();

                    internal.header_icon.update(Text {
                        content: &code_point,
                        size: icon.size.unwrap_or(text_size),
                        font: icon.font,
                        ..unconstrained
                    });

                    internal.header_icon.min_bounds()
                }
                None => Size::ZERO,
            };
            aggregate.set_header_icon(header_icon_size);

            if !aggregate.commit(items.iter()) {
                break;
            }
        }

        let geometry = Geometry::new(
            Rectangle::new(Point::ORIGIN, size),
            inner.dimensions(),
            inner.current_label_width(),
            self.padding,
            self.side,
            self.has_header(),
            inner.items.len(),
        );
        let main = inner.items.selected_main();

        drop(inner);

        let nodes = self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(index, (child, tree))| {
                if Some(index) == main {
                    let limits = layout::Limits::new(Size::ZERO, geometry.content.size());

                    child
                        .as_widget()
                        .layout(tree, renderer, &limits)
                        .move_to(geometry.content.position())
                } else {
                    layout::Node::new(Size::ZERO)
                }
            })
            .collect();

        layout::Node::with_children(size, nodes)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        if tree
            .state
            .downcast_ref::<Internal<Renderer::Paragraph>>()
            .misconfigured
        {
            return event::Status::Ignored;
        }

        // repair the pinned-selection invariant before reacting to input
        let corrected = self.state.inner.borrow_mut().correct();
        if let Some(change) = corrected {
            if let Some(on_select) = &self.on_select {
                shell.publish(on_select(change));
            }

            shell.invalidate_layout();
        }

        let main = self.state.inner.borrow().items.selected_main();

        let status = match main {
            Some(index) => {
                let forwarded = self
                    .children
                    .get_mut(index)
                    .zip(tree.children.get_mut(index))
                    .zip(layout.children().nth(index));

                match forwarded {
                    Some(((child, state), child_layout)) => child.as_widget_mut().on_event(
                        state,
                        event.clone(),
                        child_layout,
                        cursor,
                        renderer,
                        clipboard,
                        shell,
                        viewport,
                    ),
                    None => event::Status::Ignored,
                }
            }
            None => event::Status::Ignored,
        };

        if status == event::Status::Captured {
            return status;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                let Some(position) = cursor.position() else {
                    return status;
                };

                let geometry = self.geometry(layout.bounds());

                if self.header_icon.is_some()
                    && geometry
                        .header_toggle()
                        .is_some_and(|zone| zone.contains(position))
                {
                    let mut inner = self.state.inner.borrow_mut();
                    inner.expanded = !inner.expanded;
                    // a release outside the overlay item dismisses the overlay
                    let change = inner.dismiss_overlay();
                    drop(inner);

                    if let Some(change) = change {
                        if let Some(on_select) = &self.on_select {
                            shell.publish(on_select(change));
                        }
                    }

                    shell.invalidate_layout();
                    shell.request_redraw(window::RedrawRequest::NextFrame);

                    return event::Status::Captured;
                }

                if let Some(index) = geometry.row_at(position) {
                    let change = self.state.inner.borrow_mut().pointer_activate(index);

                    if let Some(change) = change {
                        if let Some(on_select) = &self.on_select {
                            shell.publish(on_select(change));
                        }

                        shell.invalidate_layout();
                        shell.request_redraw(window::RedrawRequest::NextFrame);

                        return event::Status::Captured;
                    }
                }

                status
            }
            _ => status,
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if tree
            .state
            .downcast_ref::<Internal<Renderer::Paragraph>>()
            .misconfigured
        {
            return mouse::Interaction::default();
        }

        let geometry = self.geometry(layout.bounds());

        let over_nav = cursor.position().is_some_and(|position| {
            geometry.row_at(position).is_some()
                || (self.header_icon.is_some()
                    && geometry
                        .header_toggle()
                        .is_some_and(|zone| zone.contains(position)))
        });

        if over_nav {
            return mouse::Interaction::Pointer;
        }

        let main = self.state.inner.borrow().items.selected_main();

        main.and_then(|index| {
            let child = self.children.get(index)?;
            let state = tree.children.get(index)?;
            let child_layout = layout.children().nth(index)?;

            Some(
                child
                    .as_widget()
                    .mouse_interaction(state, child_layout, cursor, viewport, renderer),
            )
        })
        .unwrap_or_default()
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        defaults: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let internal = tree.state.downcast_ref::<Internal<Renderer::Paragraph>>();
        if internal.misconfigured {
            return;
        }

        let bounds = layout.bounds();
        let style = Catalog::style(theme, &self.class);
        let geometry = self.geometry(bounds);

        let font = self.font.unwrap_or_else(|| renderer.default_font());
        let text_size = self.text_size.unwrap_or_else(|| renderer.default_size());
        let line_height = text::LineHeight::default();

        let label_text = Text {
            content: String::new(),
            bounds: Size::ZERO,
            size: text_size,
            line_height,
            font,
            horizontal_alignment: alignment::Horizontal::Left,
            vertical_alignment: alignment::Vertical::Center,
            shaping: text::Shaping::default(),
            wrapping: text::Wrapping::default(),
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds: geometry.nav,
                ..renderer::Quad::default()
            },
            style.background,
        );

        let hovered = cursor.position().and_then(|position| geometry.row_at(position));
        let inner = self.state.inner.borrow();

        renderer.with_layer(geometry.nav, |renderer| {
            if let Some(header) = geometry.header {
                if let Some(icon) = &self.header_icon {
                    let cell = geometry.icon_cell(header);

                    renderer.fill_text(
                        Text {
                            content: icon.code_point.to_string(),
                            size: icon.size.unwrap_or(text_size),
                            font: icon.font,
                            bounds: cell.size(),
                            horizontal_alignment: alignment::Horizontal::Center,
                            ..label_text.clone()
                        },
                        Point::new(cell.center_x(), cell.center_y()),
                        style.icon_color,
                        header,
                    );
                }

                if let Some(label) = self.header.as_ref().filter(|_| geometry.label_width > 0.0) {
                    let cell = geometry.label_cell(header);

                    renderer.fill_text(
                        Text {
                            content: label.clone(),
                            bounds: cell.size(),
                            ..label_text.clone()
                        },
                        Point::new(cell.x, cell.center_y()),
                        style.text_color,
                        header,
                    );
                }
            }

            for (index, item) in inner.items.iter().enumerate() {
                let row = geometry.row(index);

                let (text_color, icon_color) = if item.is_selected() {
                    renderer.fill_quad(
                        renderer::Quad {
                            bounds: row,
                            ..renderer::Quad::default()
                        },
                        style.selected_background,
                    );

                    (style.selected_text_color, style.selected_text_color)
                } else {
                    if hovered == Some(index) {
                        renderer.fill_quad(
                            renderer::Quad {
                                bounds: row,
                                ..renderer::Quad::default()
                            },
                            style.hovered_background,
                        );
                    }

                    (style.text_color, style.icon_color)
                };

                if let Some(icon) = item.glyph() {
                    let cell = geometry.icon_cell(row);

                    renderer.fill_text(
                        Text {
                            content: icon.code_point.to_string(),
                            size: icon.size.unwrap_or(text_size),
                            font: icon.font,
                            bounds: cell.size(),
                            horizontal_alignment: alignment::Horizontal::Center,
                            ..label_text.clone()
                        },
                        Point::new(cell.center_x(), cell.center_y()),
                        icon_color,
                        row,
                    );
                }

                if geometry.label_width > 0.0 {
                    let cell = geometry.label_cell(row);

                    renderer.fill_text(
                        Text {
                            content: item.content().to_string(),
                            bounds: cell.size(),
                            ..label_text.clone()
                        },
                        Point::new(cell.x, cell.center_y()),
                        text_color,
                        row,
                    );
                }
            }
        });

        let main = inner.items.selected_main();
        drop(inner);

        if let Some(index) = main {
            if let Some(((child, state), child_layout)) = self
                .children
                .get(index)
                .zip(tree.children.get(index))
                .zip(layout.children().nth(index))
            {
                child
                    .as_widget()
                    .draw(state, renderer, theme, defaults, child_layout, cursor, viewport);
            }
        }
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let main = self.state.inner.borrow().items.selected_main();

        operation.container(None, layout.bounds(), &mut |operation| {
            if let Some(((child, state), child_layout)) = main.and_then(|index| {
                self.children
                    .get(index)
                    .zip(tree.children.get_mut(index))
                    .zip(layout.children().nth(index))
            }) {
                child
                    .as_widget()
                    .operate(state, child_layout, renderer, operation);
            }
        });
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        _renderer: &Renderer,
        translation: Vector,
    ) -> Option<crate::core::overlay::Element<'b, Message, Theme, Renderer>> {
        if tree
            .state
            .downcast_ref::<Internal<Renderer::Paragraph>>()
            .misconfigured
        {
            return None;
        }

        let bounds = layout.bounds() + translation;
        let geometry = self.geometry(bounds);

        let index = self.state.inner.borrow().items.selected_overlay()?;
        if index >= self.children.len() {
            return None;
        }

        let row = geometry.row(index);

        Some(crate::core::overlay::Element::new(Box::new(
            ContentOverlay {
                tree: &mut tree.children[index],
                content: &mut self.children[index],
                state: self.state,
                on_select: self.on_select.as_deref(),
                backdrop: geometry.content,
                side: self.side,
                row_offset: row.y - geometry.bounds.y,
                class: &self.class,
            },
        )))
    }
}

impl<'a, Message, Theme, Renderer> From<HamburgerMenu<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: text::Renderer<Font = Font> + 'a,
{
    fn from(menu: HamburgerMenu<'a, Message, Theme, Renderer>) -> Self {
        Self::new(menu)
    }
}
