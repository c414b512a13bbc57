//! The transient content surface of a hamburger menu.
use crate::core::event;
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay::Overlay;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::{Operation, Tree};
use crate::core::{
    Clipboard, Element, Event, Layout, Point, Rectangle, Shell, Size, Vector,
};
use crate::menu::style::Catalog;
use crate::menu::{Side, State};
use crate::selection::SelectionChange;

/// Clamps the vertical offset of the overlay surface so it is not clipped
/// off the bottom of the available region.
///
/// `row_offset` is the offset of the originating row relative to the
/// region's top edge.
pub(super) fn overlay_offset(row_offset: f32, overlay_height: f32, available_height: f32) -> f32 {
    if row_offset + overlay_height > available_height {
        (available_height - overlay_height).max(0.0)
    } else {
        row_offset
    }
}

/// The surface showing the child of the selected overlay item.
///
/// It floats over the content region, next to the navigation list, and
/// claims that region as its backdrop: a release on the backdrop deselects
/// the overlay item. The navigation list is left unclaimed so releases on
/// its rows keep reaching the menu.
pub(super) struct ContentOverlay<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    pub tree: &'b mut Tree,
    pub content: &'b mut Element<'a, Message, Theme, Renderer>,
    pub state: &'a State,
    pub on_select: Option<&'b dyn Fn(SelectionChange) -> Message>,
    /// The content region of the menu, in overlay coordinates.
    pub backdrop: Rectangle,
    pub side: Side,
    /// The vertical offset of the originating row, relative to the menu.
    pub row_offset: f32,
    pub class: &'b <Theme as Catalog>::Class<'a>,
}

impl<'a, 'b, Message, Theme, Renderer> Overlay<Message, Theme, Renderer>
    for ContentOverlay<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, _bounds: Size) -> layout::Node {
        let limits = layout::Limits::new(Size::ZERO, self.backdrop.size());

        let node = self
            .content
            .as_widget()
            .layout(self.tree, renderer, &limits);

        let size = node.size();
        let position = Point::new(
            match self.side {
                Side::Left => 0.0,
                Side::Right => (self.backdrop.width - size.width).max(0.0),
            },
            overlay_offset(self.row_offset, size.height, self.backdrop.height),
        );

        layout::Node::with_children(self.backdrop.size(), vec![node.move_to(position)])
            .move_to(self.backdrop.position())
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bounds = layout.bounds();
        let backdrop = Catalog::style(theme, self.class).backdrop;

        renderer.with_layer(bounds, |renderer| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    ..renderer::Quad::default()
                },
                backdrop,
            );

            let child_layout = layout.children().next().unwrap();

            self.content
                .as_widget()
                .draw(self.tree, renderer, theme, style, child_layout, cursor, &bounds);
        });
    }

    fn on_event(
        &mut self,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        let child_layout = layout.children().next().unwrap();

        let status = self.content.as_widget_mut().on_event(
            self.tree,
            event.clone(),
            child_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            &layout.bounds(),
        );

        if status == event::Status::Captured {
            return status;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                let released_on_backdrop = cursor.position().is_some_and(|position| {
                    layout.bounds().contains(position)
                        && !child_layout.bounds().contains(position)
                });

                if released_on_backdrop {
                    let change = self.state.inner.borrow_mut().dismiss_overlay();

                    if let Some(change) = change {
                        if let Some(on_select) = self.on_select {
                            shell.publish(on_select(change));
                        }

                        shell.invalidate_layout();

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
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let child_layout = layout.children().next().unwrap();

        self.content
            .as_widget()
            .mouse_interaction(self.tree, child_layout, cursor, viewport, renderer)
    }

    fn operate(
        &mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let child_layout = layout.children().next().unwrap();

        self.content
            .as_widget()
            .operate(self.tree, child_layout, renderer, operation);
    }

    fn overlay<'c>(
        &'c mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
    ) -> Option<crate::core::overlay::Element<'c, Message, Theme, Renderer>> {
        let child_layout = layout.children().next()?;

        self.content.as_widget_mut().overlay(
            self.tree,
            child_layout,
            renderer,
            Vector::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::overlay_offset;

    #[test]
    fn fitting_overlays_open_at_their_row() {
        assert_eq!(overlay_offset(0.0, 100.0, 400.0), 0.0);
        assert_eq!(overlay_offset(120.0, 100.0, 400.0), 120.0);
    }

    #[test]
    fn an_overlay_ending_exactly_at_the_bottom_is_not_moved() {
        assert_eq!(overlay_offset(300.0, 100.0, 400.0), 300.0);
    }

    #[test]
    fn overshooting_overlays_are_clamped_to_the_bottom() {
        assert_eq!(overlay_offset(350.0, 100.0, 400.0), 300.0);
    }

    #[test]
    fn overlays_taller_than_the_region_pin_to_the_top() {
        assert_eq!(overlay_offset(50.0, 500.0, 400.0), 0.0);
    }

    #[test]
    fn the_offset_is_the_row_offset_clamped_to_the_free_space() {
        for (p, oh, h) in [
            (0.0_f32, 50.0_f32, 200.0_f32),
            (10.0, 190.0, 200.0),
            (150.0, 100.0, 200.0),
            (200.0, 300.0, 200.0),
        ] {
            assert_eq!(overlay_offset(p, oh, h), p.min((h - oh).max(0.0)));
        }
    }
}
