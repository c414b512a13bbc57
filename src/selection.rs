//! Selection transitions over the descriptor collection.
//!
//! A menu holds two selection slots: the pinned slot (the row whose child
//! fills the main surface; exactly one non-overlay row holds it whenever any
//! exists) and the overlay slot (at most one overlay row, shown on the
//! dismissible surface). Transitions compute the next occupant of both slots
//! first and commit them in a single pass, so no intermediate state ever
//! violates the two invariants.
use crate::items::Items;

/// A change of one selection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    /// The index selected into the slot before the transition.
    pub previous: Option<usize>,
    /// The index selected into the slot after the transition.
    pub current: Option<usize>,
}

impl Delta {
    /// Returns whether the slot changed occupants.
    pub fn is_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// A selection transition of a menu, as published through
/// [`HamburgerMenu::on_select`](crate::HamburgerMenu::on_select).
///
/// Indices refer to positions in the menu's item collection, which match
/// the positions of the children given to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// The pinned (main surface) slot.
    pub main: Delta,
    /// The transient (overlay surface) slot.
    pub overlay: Delta,
}

/// Activates the item at `index`.
///
/// Stale indices are ignored. Activating an overlay item fills the overlay
/// slot; activating a non-overlay item fills the pinned slot. The other
/// slot is left alone.
pub(crate) fn activate(items: &mut Items, index: usize) -> Option<SelectionChange> {
    let target = items.get(index)?;

    let (main, overlay) = if target.is_overlay() {
        (items.selected_main(), Some(index))
    } else {
        (Some(index), items.selected_overlay())
    };

    commit(items, main, overlay)
}

/// Activates the item at `index` from a pointer release inside its row.
///
/// On top of [`activate`], a release that did not land on the overlay item
/// also dismisses the current overlay selection; both slot updates are
/// committed in one pass.
pub(crate) fn pointer_activate(items: &mut Items, index: usize) -> Option<SelectionChange> {
    let target = items.get(index)?;

    let (main, overlay) = if target.is_overlay() {
        (items.selected_main(), Some(index))
    } else {
        (Some(index), None)
    };

    commit(items, main, overlay)
}

/// Clears the overlay slot, leaving the pinned slot alone.
pub(crate) fn dismiss_overlay(items: &mut Items) -> Option<SelectionChange> {
    let main = items.selected_main();

    commit(items, main, None)
}

/// Restores the pinned-selection invariant.
///
/// When no pinned item is selected, the first non-overlay item takes the
/// pinned slot. Idempotent, and cannot cascade: it only fires when the slot
/// is empty and always leaves it filled.
pub(crate) fn correct(items: &mut Items) -> Option<SelectionChange> {
    if items.selected_main().is_some() {
        return None;
    }

    let first = items.first_main()?;
    let overlay = items.selected_overlay();

    commit(items, Some(first), overlay)
}

/// Commits the next occupants of both slots, updating the per-item flags
/// and reporting the resulting deltas.
fn commit(
    items: &mut Items,
    main: Option<usize>,
    overlay: Option<usize>,
) -> Option<SelectionChange> {
    let change = SelectionChange {
        main: Delta {
            previous: items.selected_main(),
            current: main,
        },
        overlay: Delta {
            previous: items.selected_overlay(),
            current: overlay,
        },
    };

    if !change.main.is_changed() && !change.overlay.is_changed() {
        return None;
    }

    for (index, item) in items.iter_mut().enumerate() {
        item.set_selected(Some(index) == main || Some(index) == overlay);
    }

    Some(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn menu(overlay_mask: &[bool]) -> Items {
        Items::new(
            overlay_mask
                .iter()
                .enumerate()
                .map(|(i, overlay)| {
                    let item = Item::new(format!("item {i}"));
                    if *overlay { item.overlay() } else { item }
                })
                .collect(),
        )
    }

    fn assert_invariants(items: &Items) {
        let overlays = items
            .iter()
            .filter(|item| item.is_selected() && item.is_overlay())
            .count();
        let mains = items
            .iter()
            .filter(|item| item.is_selected() && !item.is_overlay())
            .count();

        assert!(overlays <= 1, "more than one overlay selected");
        if items.iter().any(|item| !item.is_overlay()) {
            assert!(mains <= 1, "more than one pinned item selected");
        } else {
            assert_eq!(mains, 0);
        }
    }

    #[test]
    fn correction_pins_first_non_overlay() {
        let mut items = menu(&[false, false, false]);

        let change = correct(&mut items).unwrap();

        assert_eq!(change.main.current, Some(0));
        assert_eq!(items.selected_main(), Some(0));
        assert_invariants(&items);
    }

    #[test]
    fn correction_is_idempotent() {
        let mut items = menu(&[true, false, false]);

        let first = correct(&mut items);
        let second = correct(&mut items);

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(items.selected_main(), Some(1));
    }

    #[test]
    fn correction_without_main_candidates_is_a_noop() {
        let mut items = menu(&[true, true]);

        assert!(correct(&mut items).is_none());
        assert_eq!(items.selected_main(), None);
    }

    #[test]
    fn correction_keeps_the_selected_overlay() {
        let mut items = menu(&[true, false]);
        let _ = activate(&mut items, 0);

        let change = correct(&mut items).unwrap();

        assert_eq!(change.main.current, Some(1));
        assert_eq!(items.selected_overlay(), Some(0));
        assert_invariants(&items);
    }

    #[test]
    fn activating_replaces_the_pinned_selection() {
        let mut items = menu(&[false, false, false]);
        let _ = correct(&mut items);

        let change = activate(&mut items, 2).unwrap();

        assert_eq!(change.main.previous, Some(0));
        assert_eq!(change.main.current, Some(2));
        assert_eq!(items.selected_main(), Some(2));
        assert_invariants(&items);
    }

    #[test]
    fn activating_the_pinned_item_again_is_a_noop() {
        let mut items = menu(&[false, false]);
        let _ = correct(&mut items);

        assert!(activate(&mut items, 0).is_none());
    }

    #[test]
    fn activating_an_overlay_keeps_the_pinned_selection() {
        let mut items = menu(&[false, true, false]);
        let _ = correct(&mut items);

        let change = activate(&mut items, 1).unwrap();

        assert_eq!(change.overlay.current, Some(1));
        assert!(!change.main.is_changed());
        assert_eq!(items.selected_main(), Some(0));
        assert_eq!(items.selected_overlay(), Some(1));
        assert_invariants(&items);
    }

    #[test]
    fn activating_another_overlay_replaces_the_overlay_selection() {
        let mut items = menu(&[false, true, true]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        let change = activate(&mut items, 2).unwrap();

        assert_eq!(change.overlay.previous, Some(1));
        assert_eq!(change.overlay.current, Some(2));
        assert_eq!(items.selected_main(), Some(0));
        assert_invariants(&items);
    }

    #[test]
    fn activating_the_selected_overlay_again_is_a_noop() {
        let mut items = menu(&[false, true]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        assert!(activate(&mut items, 1).is_none());
    }

    #[test]
    fn activating_a_row_keeps_the_overlay_selection() {
        let mut items = menu(&[false, true, false]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        let change = activate(&mut items, 2).unwrap();

        assert_eq!(change.main.previous, Some(0));
        assert_eq!(change.main.current, Some(2));
        assert_eq!(items.selected_overlay(), Some(1));
        assert_invariants(&items);
    }

    #[test]
    fn releasing_on_a_row_dismisses_the_overlay() {
        let mut items = menu(&[false, true, false]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        let change = pointer_activate(&mut items, 2).unwrap();

        assert_eq!(change.main.current, Some(2));
        assert_eq!(change.overlay.current, None);
        assert_eq!(items.selected_overlay(), None);
        assert_invariants(&items);
    }

    #[test]
    fn releasing_on_the_pinned_row_only_dismisses_the_overlay() {
        let mut items = menu(&[false, true]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        let change = pointer_activate(&mut items, 0).unwrap();

        assert!(!change.main.is_changed());
        assert_eq!(change.overlay.previous, Some(1));
        assert_eq!(change.overlay.current, None);
        assert_invariants(&items);
    }

    #[test]
    fn releasing_on_the_selected_overlay_row_is_a_noop() {
        let mut items = menu(&[false, true]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        assert!(pointer_activate(&mut items, 1).is_none());
        assert_eq!(items.selected_overlay(), Some(1));
    }

    #[test]
    fn dismissing_the_overlay_keeps_the_pinned_selection() {
        let mut items = menu(&[false, true]);
        let _ = correct(&mut items);
        let _ = activate(&mut items, 1);

        let change = dismiss_overlay(&mut items).unwrap();

        assert_eq!(change.overlay.previous, Some(1));
        assert_eq!(change.overlay.current, None);
        assert_eq!(items.selected_main(), Some(0));
        assert_invariants(&items);
    }

    #[test]
    fn dismissing_without_an_overlay_is_a_noop() {
        let mut items = menu(&[false]);
        let _ = correct(&mut items);

        assert!(dismiss_overlay(&mut items).is_none());
    }

    #[test]
    fn stale_indices_are_ignored() {
        let mut items = menu(&[false, false]);
        let _ = correct(&mut items);

        assert!(activate(&mut items, 7).is_none());
        assert_eq!(items.selected_main(), Some(0));
    }
}
