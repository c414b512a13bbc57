//! The retained state of a [`HamburgerMenu`](crate::HamburgerMenu).
use std::cell::RefCell;

use crate::item::Item;
use crate::items::{Change, Items};
use crate::measure::{Aggregate, Dimensions};
use crate::selection;
use crate::selection::SelectionChange;

/// The state of a [`HamburgerMenu`](crate::HamburgerMenu).
///
/// It is the application's handle to the menu: the ordered [`Item`]
/// collection, the selection, the expand flag, and the shared row
/// dimensions. It must be kept around between `view` calls, and its item
/// collection must stay index-parallel with the children given to the
/// widget: every structural change to the children goes through the
/// matching operation here ([`insert`], [`remove`], [`move_range`],
/// [`replace`], [`reset`]).
///
/// Operations that can move the selection return the resulting
/// [`SelectionChange`], which is `None` when nothing moved.
///
/// [`insert`]: Self::insert
/// [`remove`]: Self::remove
/// [`move_range`]: Self::move_range
/// [`replace`]: Self::replace
/// [`reset`]: Self::reset
#[derive(Debug, Default)]
pub struct State {
    pub(super) inner: RefCell<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) items: Items,
    pub(crate) aggregate: Aggregate,
    pub(crate) expanded: bool,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: Items::default(),
            aggregate: Aggregate::new(),
            expanded: true,
        }
    }
}

impl Inner {
    pub(crate) fn activate(&mut self, index: usize) -> Option<SelectionChange> {
        selection::activate(&mut self.items, index)
    }

    pub(crate) fn pointer_activate(&mut self, index: usize) -> Option<SelectionChange> {
        selection::pointer_activate(&mut self.items, index)
    }

    pub(crate) fn dismiss_overlay(&mut self) -> Option<SelectionChange> {
        selection::dismiss_overlay(&mut self.items)
    }

    pub(crate) fn correct(&mut self) -> Option<SelectionChange> {
        selection::correct(&mut self.items)
    }

    pub(crate) fn dimensions(&self) -> Dimensions {
        self.aggregate.dimensions()
    }

    /// The label column width the layout currently targets: the shared
    /// label width when expanded, zero when collapsed.
    pub(crate) fn current_label_width(&self) -> f32 {
        if self.expanded {
            self.dimensions().label_width
        } else {
            0.0
        }
    }

    fn change(&mut self, change: Change) -> Option<SelectionChange> {
        if !self.items.apply(change) {
            return None;
        }

        self.aggregate.invalidate();
        self.correct()
    }
}

impl State {
    /// Creates a new [`State`] from the initial items.
    ///
    /// The pinned-selection invariant is established immediately: the first
    /// non-overlay item starts out selected.
    pub fn new(items: impl IntoIterator<Item = impl Into<Item>>) -> Self {
        let state = Self::default();
        let _ = state.inner.borrow_mut().change(Change::Reset {
            items: items.into_iter().map(Into::into).collect(),
        });

        state
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Returns whether the menu holds no items.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Returns a copy of the [`Item`] at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Item> {
        self.inner.borrow().items.get(index).cloned()
    }

    /// Calls `f` with the current items, in order.
    pub fn with_items<R>(&self, f: impl FnOnce(&[Item]) -> R) -> R {
        f(self.inner.borrow().items.as_slice())
    }

    /// Inserts items before `index`, shifting later rows.
    ///
    /// The matching children must be inserted at the same position.
    pub fn insert(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = impl Into<Item>>,
    ) -> Option<SelectionChange> {
        self.inner.get_mut().change(Change::Insert {
            index,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Appends a single item.
    pub fn push(&mut self, item: impl Into<Item>) -> Option<SelectionChange> {
        let index = self.len();

        self.insert(index, [item.into()])
    }

    /// Removes `count` items starting at `index`.
    pub fn remove(&mut self, index: usize, count: usize) -> Option<SelectionChange> {
        self.inner.get_mut().change(Change::Remove { index, count })
    }

    /// Relocates `count` items starting at `from` so they start at `to`,
    /// where `to` indexes the collection with the range taken out.
    ///
    /// Selection and cached measurements travel with the items.
    pub fn move_range(&mut self, from: usize, count: usize, to: usize) -> Option<SelectionChange> {
        self.inner.get_mut().change(Change::Move { from, count, to })
    }

    /// Replaces the items starting at `index`, one for one.
    ///
    /// Only the replaced rows are re-derived; their previous selection is
    /// discarded, and the correction rule re-establishes a pinned selection
    /// if the replaced row held it.
    pub fn replace(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = impl Into<Item>>,
    ) -> Option<SelectionChange> {
        self.inner.get_mut().change(Change::Replace {
            index,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Discards all items and rebuilds the collection from `items`.
    pub fn reset(
        &mut self,
        items: impl IntoIterator<Item = impl Into<Item>>,
    ) -> Option<SelectionChange> {
        self.inner.get_mut().change(Change::Reset {
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns the index of the currently pinned item, if any.
    pub fn selected_main(&self) -> Option<usize> {
        self.inner.borrow().items.selected_main()
    }

    /// Returns the index of the currently selected overlay item, if any.
    pub fn selected_overlay(&self) -> Option<usize> {
        self.inner.borrow().items.selected_overlay()
    }

    /// Selects the item at `index`.
    ///
    /// Overlay items fill the overlay slot, other items the pinned slot;
    /// the remaining slot is left alone. Unlike a pointer release inside a
    /// row, a programmatic selection never dismisses the current overlay.
    pub fn select(&mut self, index: usize) -> Option<SelectionChange> {
        self.inner.get_mut().activate(index)
    }

    /// Deselects the current overlay item, if any.
    pub fn clear_overlay(&mut self) -> Option<SelectionChange> {
        self.inner.get_mut().dismiss_overlay()
    }

    /// The shared width of the icon column.
    pub fn icon_width(&self) -> f32 {
        self.inner.borrow().dimensions().icon_width
    }

    /// The shared width of the label column.
    pub fn label_width(&self) -> f32 {
        self.inner.borrow().dimensions().label_width
    }

    /// The shared height of every row.
    pub fn row_height(&self) -> f32 {
        self.inner.borrow().dimensions().row_height
    }

    /// The label column width the layout currently targets; zero when the
    /// menu is collapsed.
    pub fn current_label_width(&self) -> f32 {
        self.inner.borrow().current_label_width()
    }

    /// Pins the icon column width, or restores automatic sizing with
    /// `None`.
    pub fn set_icon_width(&mut self, width: Option<f32>) {
        self.inner.get_mut().aggregate.set_icon_width(width);
    }

    /// Pins the label column width, or restores automatic sizing with
    /// `None`.
    pub fn set_label_width(&mut self, width: Option<f32>) {
        self.inner.get_mut().aggregate.set_label_width(width);
    }

    /// Pins the row height, or restores automatic sizing with `None`.
    pub fn set_row_height(&mut self, height: Option<f32>) {
        self.inner.get_mut().aggregate.set_row_height(height);
    }

    /// Returns whether the navigation list shows its label column.
    pub fn is_expanded(&self) -> bool {
        self.inner.borrow().expanded
    }

    /// Shows or hides the label column.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.inner.get_mut().expanded = expanded;
    }

    /// Toggles between the expanded and collapsed navigation list.
    pub fn toggle_expanded(&mut self) {
        let inner = self.inner.get_mut();
        inner.expanded = !inner.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> State {
        State::new([
            Item::new("first"),
            Item::new("popup").overlay(),
            Item::new("second"),
        ])
    }

    #[test]
    fn construction_pins_the_first_non_overlay_item() {
        let state = State::new([Item::new("a").overlay(), Item::new("b"), Item::new("c")]);

        assert_eq!(state.selected_main(), Some(1));
        assert_eq!(state.selected_overlay(), None);
    }

    #[test]
    fn overlay_and_pinned_selection_coexist() {
        let mut state = mixed();

        let change = state.select(1).unwrap();

        assert_eq!(change.overlay.current, Some(1));
        assert_eq!(state.selected_main(), Some(0));
        assert_eq!(state.selected_overlay(), Some(1));

        // selecting another main row replaces the pinned selection and
        // leaves the overlay alone
        let change = state.select(2).unwrap();

        assert_eq!(change.main.current, Some(2));
        assert_eq!(state.selected_overlay(), Some(1));
    }

    #[test]
    fn clearing_the_overlay_keeps_the_pinned_selection() {
        let mut state = mixed();
        let _ = state.select(1);

        let change = state.clear_overlay().unwrap();

        assert_eq!(change.overlay.previous, Some(1));
        assert_eq!(state.selected_main(), Some(0));
        assert_eq!(state.selected_overlay(), None);
    }

    #[test]
    fn removing_the_pinned_row_repins_the_first_main_row() {
        let mut state = mixed();
        assert_eq!(state.selected_main(), Some(0));

        let change = state.remove(0, 1).unwrap();

        // after the removal, "second" sits at index 1 and takes the slot
        assert_eq!(change.main.current, Some(1));
        assert_eq!(state.selected_main(), Some(1));
    }

    #[test]
    fn removing_an_unselected_row_moves_no_selection() {
        let mut state = mixed();

        assert!(state.remove(2, 1).is_none());
        assert_eq!(state.selected_main(), Some(0));
    }

    #[test]
    fn moving_rows_keeps_the_selection_on_the_item() {
        let mut state = mixed();

        assert!(state.move_range(0, 1, 2).is_none());

        assert_eq!(state.selected_main(), Some(2));
        assert_eq!(state.get(2).unwrap().content(), "first");
    }

    #[test]
    fn replacing_the_pinned_row_triggers_correction() {
        let mut state = mixed();

        let change = state.replace(0, [Item::new("fresh")]).unwrap();

        assert_eq!(change.main.current, Some(0));
        assert_eq!(state.get(0).unwrap().content(), "fresh");
    }

    #[test]
    fn reset_rebuilds_and_repins() {
        let mut state = mixed();
        let _ = state.select(1);

        let change = state.reset([Item::new("only").overlay(), Item::new("main")]);

        assert_eq!(change.unwrap().main.current, Some(1));
        assert_eq!(state.selected_overlay(), None);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn expanding_toggles_the_current_label_width() {
        let mut state = mixed();
        state.set_label_width(Some(120.0));

        assert!(state.is_expanded());
        assert_eq!(state.current_label_width(), 120.0);

        state.toggle_expanded();

        assert!(!state.is_expanded());
        assert_eq!(state.current_label_width(), 0.0);
    }

    #[test]
    fn out_of_range_operations_are_absorbed() {
        let mut state = mixed();

        assert!(state.remove(5, 1).is_none());
        assert!(state.insert(9, [Item::new("x")]).is_none());
        assert_eq!(state.len(), 3);
    }
}
