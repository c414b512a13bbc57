//! The ordered descriptor collection backing a menu.
//!
//! [`Items`] mirrors the child collection declared by the application: the
//! descriptor at index `i` always describes the child at index `i`. The
//! mirror is kept in sync by applying explicit structural [`Change`]s, never
//! by observing the children.
use crate::item::Item;

/// A structural change to the child collection, to be mirrored onto the
/// descriptor collection.
#[derive(Debug, Clone)]
pub(crate) enum Change {
    /// New children were spliced in at `index`.
    Insert { index: usize, items: Vec<Item> },
    /// `count` children were removed starting at `index`.
    Remove { index: usize, count: usize },
    /// `count` children starting at `from` were relocated to start at `to`,
    /// where `to` is an index into the collection with the range removed.
    Move { from: usize, count: usize, to: usize },
    /// The children starting at `index` were replaced one for one.
    Replace { index: usize, items: Vec<Item> },
    /// The whole collection was replaced.
    Reset { items: Vec<Item> },
}

/// The ordered collection of [`Item`] descriptors of a menu.
#[derive(Debug, Clone, Default)]
pub(crate) struct Items {
    entries: Vec<Item>,
}

impl Items {
    pub fn new(entries: Vec<Item>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Item> {
        self.entries.iter_mut()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.entries
    }

    /// Returns the index of the selected pinned item, if any.
    pub fn selected_main(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|item| item.is_selected() && !item.is_overlay())
    }

    /// Returns the index of the selected overlay item, if any.
    pub fn selected_overlay(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|item| item.is_selected() && item.is_overlay())
    }

    /// Returns the index of the first non-overlay item, if any.
    pub fn first_main(&self) -> Option<usize> {
        self.entries.iter().position(|item| !item.is_overlay())
    }

    /// Applies a structural [`Change`], keeping index correspondence with
    /// the child collection.
    ///
    /// Returns whether the change was applied. Changes referencing indices
    /// outside the collection are absorbed: a diagnostic is logged and the
    /// collection is left untouched.
    pub fn apply(&mut self, change: Change) -> bool {
        match change {
            Change::Insert { index, items } => {
                if index > self.entries.len() {
                    log::warn!(
                        "hamburger_menu: ignoring insert at {index} into {} items",
                        self.entries.len()
                    );
                    return false;
                }

                let _ = self.entries.splice(index..index, items);
            }
            Change::Remove { index, count } => {
                let Some(end) = index.checked_add(count).filter(|end| *end <= self.entries.len())
                else {
                    log::warn!(
                        "hamburger_menu: ignoring removal of {count} items at {index} from {} items",
                        self.entries.len()
                    );
                    return false;
                };

                let _ = self.entries.drain(index..end);
            }
            Change::Move { from, count, to } => {
                let valid = from
                    .checked_add(count)
                    .is_some_and(|end| end <= self.entries.len())
                    && to <= self.entries.len() - count;

                if !valid {
                    log::warn!(
                        "hamburger_menu: ignoring move of {count} items from {from} to {to} in {} items",
                        self.entries.len()
                    );
                    return false;
                }

                let moved: Vec<Item> = self.entries.drain(from..from + count).collect();
                let _ = self.entries.splice(to..to, moved);
            }
            Change::Replace { index, items } => {
                let Some(end) = index
                    .checked_add(items.len())
                    .filter(|end| *end <= self.entries.len())
                else {
                    log::warn!(
                        "hamburger_menu: ignoring replacement of {} items at {index} in {} items",
                        items.len(),
                        self.entries.len()
                    );
                    return false;
                };

                for (slot, item) in self.entries[index..end].iter_mut().zip(items) {
                    *slot = item;
                }
            }
            Change::Reset { items } => {
                self.entries = items;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &Items) -> Vec<&str> {
        items.iter().map(Item::content).collect()
    }

    fn three() -> Items {
        Items::new(vec![Item::new("a"), Item::new("b"), Item::new("c")])
    }

    #[test]
    fn insert_splices_at_index() {
        let mut items = three();

        assert!(items.apply(Change::Insert {
            index: 1,
            items: vec![Item::new("x"), Item::new("y")],
        }));

        assert_eq!(labels(&items), ["a", "x", "y", "b", "c"]);
    }

    #[test]
    fn remove_deletes_range() {
        let mut items = three();

        assert!(items.apply(Change::Remove { index: 0, count: 2 }));

        assert_eq!(labels(&items), ["c"]);
    }

    #[test]
    fn move_relocates_without_rederiving() {
        let mut items = three();
        items.iter_mut().next().unwrap().set_selected(true);

        assert!(items.apply(Change::Move {
            from: 0,
            count: 1,
            to: 2,
        }));

        assert_eq!(labels(&items), ["b", "c", "a"]);
        // the selection flag travels with the item
        assert!(items.get(2).unwrap().is_selected());
    }

    #[test]
    fn replace_regenerates_only_the_range() {
        let mut items = three();
        items.iter_mut().nth(2).unwrap().set_selected(true);

        assert!(items.apply(Change::Replace {
            index: 0,
            items: vec![Item::new("x")],
        }));

        assert_eq!(labels(&items), ["x", "b", "c"]);
        assert!(!items.get(0).unwrap().is_selected());
        assert!(items.get(2).unwrap().is_selected());
    }

    #[test]
    fn reset_rebuilds_in_order() {
        let mut items = three();

        assert!(items.apply(Change::Reset {
            items: vec![Item::new("z")],
        }));

        assert_eq!(labels(&items), ["z"]);
    }

    #[test]
    fn out_of_range_changes_are_absorbed() {
        let mut items = three();

        assert!(!items.apply(Change::Insert {
            index: 4,
            items: vec![Item::new("x")],
        }));
        assert!(!items.apply(Change::Remove { index: 2, count: 2 }));
        assert!(!items.apply(Change::Move {
            from: 1,
            count: 3,
            to: 0,
        }));
        assert!(!items.apply(Change::Replace {
            index: 2,
            items: vec![Item::new("x"), Item::new("y")],
        }));

        assert_eq!(labels(&items), ["a", "b", "c"]);
    }

    #[test]
    fn length_tracks_arbitrary_sequences() {
        let mut items = Items::default();

        assert!(items.apply(Change::Insert {
            index: 0,
            items: vec![Item::new("a"), Item::new("b"), Item::new("c")],
        }));
        assert!(items.apply(Change::Move {
            from: 2,
            count: 1,
            to: 0,
        }));
        assert!(items.apply(Change::Remove { index: 1, count: 1 }));
        assert!(items.apply(Change::Insert {
            index: 2,
            items: vec![Item::new("d")],
        }));

        assert_eq!(labels(&items), ["c", "b", "d"]);
    }
}
