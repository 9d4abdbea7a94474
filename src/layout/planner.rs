/// How many buttons fit on a row, and how many trailing buttons are left over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    pub items_per_row: usize,
    pub overflow_count: usize,
}

impl LayoutPlan {
    /// Plan for a fixed column count. `columns` of 0 is treated as 1.
    pub fn with_columns(columns: usize, item_count: usize) -> Self {
        let items_per_row = columns.max(1);
        Self {
            items_per_row,
            overflow_count: item_count % items_per_row,
        }
    }

    /// Items that stay in the primary grid.
    pub fn primary_count(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.overflow_count)
    }
}

/// Work out the row width for a grid of `item_count` buttons.
///
/// The grid has no trailing gap after its last column, so one `spacing` is
/// credited back whenever there is more than one item. A button wider than the
/// usable width still gets a row of its own.
pub fn plan(
    available_width: u16,
    item_width: u16,
    spacing: u16,
    item_count: usize,
    horizontal_padding: u16,
) -> LayoutPlan {
    let mut usable = u32::from(available_width).saturating_sub(2 * u32::from(horizontal_padding));
    if item_count > 1 {
        usable += u32::from(spacing);
    }
    let stride = (u32::from(item_width) + u32::from(spacing)).max(1);
    let per_row = (usable / stride) as usize;
    LayoutPlan::with_columns(per_row, item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_phone_wraps_one() {
        let p = plan(264, 102, 0, 7, 16);
        assert_eq!(p.items_per_row, 2);
        assert_eq!(p.overflow_count, 1);
        assert_eq!(p.primary_count(7), 6);
    }

    #[test]
    fn oversized_button_clamps_to_one_per_row() {
        let p = plan(50, 130, 0, 7, 16);
        assert_eq!(p.items_per_row, 1);
        assert_eq!(p.overflow_count, 0);
    }

    #[test]
    fn spacing_is_credited_once() {
        // 40 - 2*2 = 36, +1 = 37, stride 13 -> 2
        assert_eq!(plan(40, 12, 1, 7, 2).items_per_row, 2);
        // 42 - 4 + 1 = 39 -> exactly 3
        let p = plan(42, 12, 1, 7, 2);
        assert_eq!(p.items_per_row, 3);
        assert_eq!(p.overflow_count, 1);
        // a single item gets no credit
        assert_eq!(plan(42, 12, 1, 1, 2).items_per_row, 2);
    }

    #[test]
    fn padding_wider_than_screen_saturates() {
        let p = plan(10, 4, 0, 7, 20);
        assert_eq!(p, LayoutPlan { items_per_row: 1, overflow_count: 0 });
    }

    #[test]
    fn zero_stride_does_not_divide_by_zero() {
        let p = plan(30, 0, 0, 7, 0);
        assert_eq!(p.items_per_row, 30);
        assert_eq!(p.overflow_count, 7);
    }

    #[test]
    fn overflow_is_remainder_for_all_sizes() {
        for width in 0..400u16 {
            for count in 0..12usize {
                let p = plan(width, 14, 1, count, 2);
                assert!(p.items_per_row >= 1);
                assert_eq!(p.overflow_count, count % p.items_per_row);
                assert!(p.overflow_count < p.items_per_row);
                assert_eq!(p.primary_count(count) + p.overflow_count, count);
            }
        }
    }

    #[test]
    fn with_columns_clamps_zero() {
        assert_eq!(LayoutPlan::with_columns(0, 7).items_per_row, 1);
        assert_eq!(LayoutPlan::with_columns(3, 7).overflow_count, 1);
    }

    #[test]
    fn plan_is_pure() {
        assert_eq!(plan(120, 14, 1, 7, 2), plan(120, 14, 1, 7, 2));
    }
}
