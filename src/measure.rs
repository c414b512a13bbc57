//! Shared dimension aggregation.
//!
//! Every row of a menu shares one icon column width, one label column width
//! and one row height, each the maximum of the intrinsic sizes of the
//! header, the header icon and the materialized rows. The aggregate is
//! recomputed lazily: mutations only mark it stale, and the layout pass
//! commits a recomputation at most twice per external change.
use crate::core::Size;
use crate::item::Item;

/// The shared dimensions of a menu's navigation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// The width of the icon column, shared by all rows.
    pub icon_width: f32,
    /// The width of the label column, shared by all rows.
    pub label_width: f32,
    /// The height of every row, including the header row.
    pub row_height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            icon_width: 45.0,
            label_width: 155.0,
            row_height: 45.0,
        }
    }
}

/// The measurement cache of a menu.
///
/// Holds the intrinsic sizes of the header parts, the committed
/// [`Dimensions`], and any explicit overrides pinned by the application.
#[derive(Debug, Clone)]
pub(crate) struct Aggregate {
    header: Size,
    header_icon: Size,
    computed: Dimensions,
    icon_width: Option<f32>,
    label_width: Option<f32>,
    row_height: Option<f32>,
    stale: bool,
}

impl Aggregate {
    pub fn new() -> Self {
        Self {
            header: Size::ZERO,
            header_icon: Size::ZERO,
            computed: Dimensions::default(),
            icon_width: None,
            label_width: None,
            row_height: None,
            stale: true,
        }
    }

    /// Marks the aggregate stale, scheduling a recomputation on the next
    /// layout pass.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Caches the header's intrinsic size, measured unconstrained.
    pub fn set_header(&mut self, size: Size) {
        if self.header != size {
            self.header = size;
            self.stale = true;
        }
    }

    /// Caches the header icon's intrinsic size, measured unconstrained.
    pub fn set_header_icon(&mut self, size: Size) {
        if self.header_icon != size {
            self.header_icon = size;
            self.stale = true;
        }
    }

    /// Pins the icon column width, or restores automatic aggregation.
    pub fn set_icon_width(&mut self, width: Option<f32>) {
        if self.icon_width != width {
            self.icon_width = width;
            self.stale = true;
        }
    }

    /// Pins the label column width, or restores automatic aggregation.
    pub fn set_label_width(&mut self, width: Option<f32>) {
        if self.label_width != width {
            self.label_width = width;
            self.stale = true;
        }
    }

    /// Pins the row height, or restores automatic aggregation.
    pub fn set_row_height(&mut self, height: Option<f32>) {
        if self.row_height != height {
            self.row_height = height;
            self.stale = true;
        }
    }

    /// Recomputes the shared dimensions from the cached intrinsic sizes.
    ///
    /// Does nothing unless the aggregate is stale. Returns whether the
    /// committed [`Dimensions`] actually changed, so the layout pass can
    /// decide to run its one allowed repeat.
    pub fn commit<'a>(&mut self, rows: impl Iterator<Item = &'a Item>) -> bool {
        if !self.stale {
            return false;
        }

        self.stale = false;

        let (icon, content) = rows.fold(
            (Size::ZERO, Size::ZERO),
            |(icon, content): (Size, Size), item| {
                (
                    Size::new(
                        icon.width.max(item.icon_size().width),
                        icon.height.max(item.icon_size().height),
                    ),
                    Size::new(
                        content.width.max(item.content_size().width),
                        content.height.max(item.content_size().height),
                    ),
                )
            },
        );

        let next = Dimensions {
            icon_width: icon.width.max(self.header_icon.width),
            label_width: content.width.max(self.header.width),
            row_height: icon
                .height
                .max(content.height)
                .max(self.header.height)
                .max(self.header_icon.height),
        };

        let changed = next != self.computed;
        self.computed = next;

        changed
    }

    /// The committed dimensions, with any pinned overrides applied.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            icon_width: self.icon_width.unwrap_or(self.computed.icon_width),
            label_width: self.label_width.unwrap_or(self.computed.label_width),
            row_height: self.row_height.unwrap_or(self.computed.row_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(icon: Size, content: Size) -> Item {
        let mut item = Item::new("row");
        let _ = item.set_intrinsic(icon, content);
        item
    }

    fn committed(aggregate: &mut Aggregate, rows: &[Item]) -> Dimensions {
        let _ = aggregate.commit(rows.iter());
        aggregate.dimensions()
    }

    #[test]
    fn aggregates_maxima_over_rows_and_header() {
        let mut aggregate = Aggregate::new();
        aggregate.set_header(Size::new(80.0, 20.0));
        aggregate.set_header_icon(Size::new(24.0, 24.0));

        let rows = [
            row(Size::new(16.0, 16.0), Size::new(120.0, 18.0)),
            row(Size::new(20.0, 30.0), Size::new(60.0, 18.0)),
        ];

        let dimensions = committed(&mut aggregate, &rows);

        assert_eq!(dimensions.icon_width, 24.0);
        assert_eq!(dimensions.label_width, 120.0);
        assert_eq!(dimensions.row_height, 30.0);
    }

    #[test]
    fn a_wider_icon_raises_only_the_icon_column() {
        let mut aggregate = Aggregate::new();
        let mut rows = vec![row(Size::new(16.0, 16.0), Size::new(120.0, 18.0))];
        let before = committed(&mut aggregate, &rows);

        rows.push(row(Size::new(32.0, 16.0), Size::new(40.0, 12.0)));
        aggregate.invalidate();
        let after = committed(&mut aggregate, &rows);

        assert_eq!(after.icon_width, 32.0);
        assert_eq!(after.label_width, before.label_width);
        assert_eq!(after.row_height, before.row_height);
    }

    #[test]
    fn commit_is_a_noop_until_invalidated() {
        let mut aggregate = Aggregate::new();
        let rows = [row(Size::new(16.0, 16.0), Size::new(120.0, 18.0))];
        let _ = committed(&mut aggregate, &rows);

        // no invalidation arrived, so nothing is recomputed even with
        // different rows in hand
        let wider = [row(Size::new(90.0, 16.0), Size::new(120.0, 18.0))];
        assert!(!aggregate.commit(wider.iter()));
        assert_eq!(aggregate.dimensions().icon_width, 16.0);

        aggregate.invalidate();
        // same inputs recompute to the same dimensions
        assert!(!aggregate.commit(rows.iter()));
    }

    #[test]
    fn missing_parts_contribute_zero() {
        let mut aggregate = Aggregate::new();

        let dimensions = committed(&mut aggregate, &[]);

        assert_eq!(dimensions.icon_width, 0.0);
        assert_eq!(dimensions.label_width, 0.0);
        assert_eq!(dimensions.row_height, 0.0);
    }

    #[test]
    fn overrides_pin_the_committed_values() {
        let mut aggregate = Aggregate::new();
        aggregate.set_icon_width(Some(64.0));

        let rows = [row(Size::new(16.0, 16.0), Size::new(120.0, 18.0))];
        let dimensions = committed(&mut aggregate, &rows);

        assert_eq!(dimensions.icon_width, 64.0);
        assert_eq!(dimensions.label_width, 120.0);

        aggregate.set_icon_width(None);
        assert_eq!(aggregate.dimensions().icon_width, 16.0);
    }
}
