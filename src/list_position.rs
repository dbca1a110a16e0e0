//! Pure math between visible-range indices, pixel offsets, and the
//! normalized travel percentage that places the scrollbar thumb.
//! Keeping the conversions free of UI state makes the two-writer scroll
//! reconciliation testable in isolation.

/// Normalized progress through the filtered list's index space.
///
/// Tracks position in item-count space rather than pixels: zero when
/// everything fits in the viewport, one when the last page is visible.
pub fn travel_percentage(start_index: usize, total: usize, visible: usize) -> f32 {
    if total <= visible {
        return 0.0;
    }
    start_index as f32 / (total - visible) as f32
}

/// Optimistic travel value written when a match jump is issued, ahead of
/// the authoritative range notification that follows the scroll.
pub fn jump_travel(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    index as f32 / total as f32
}

/// Convert a scrollbar track fraction into a pixel offset for the list.
///
/// The fraction is clamped to `[0, 1]`; degenerate geometry (content not
/// taller than the viewport) pins the offset to zero instead of producing
/// NaN or a negative travel.
pub fn fraction_to_offset(fraction: f32, total_extent: f32, viewport: f32) -> f32 {
    let travel = (total_extent - viewport).max(0.0);
    fraction.clamp(0.0, 1.0) * travel
}

/// Offset that centers `row` in the viewport, clamped to the valid scroll
/// range.
pub fn offset_to_center_row(row: usize, row_pitch: f32, viewport: f32, total_extent: f32) -> f32 {
    let row_top = row as f32 * row_pitch;
    let desired = row_top - (viewport - row_pitch) * 0.5;
    let max_offset = (total_extent - viewport).max(0.0);
    desired.clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_spans_zero_to_one_over_index_space() {
        assert_eq!(travel_percentage(0, 100, 10), 0.0);
        assert_eq!(travel_percentage(90, 100, 10), 1.0);
        assert_eq!(travel_percentage(45, 100, 10), 0.5);
    }

    #[test]
    fn travel_is_zero_when_everything_fits() {
        assert_eq!(travel_percentage(0, 5, 10), 0.0);
        assert_eq!(travel_percentage(0, 10, 10), 0.0);
        assert_eq!(travel_percentage(0, 0, 0), 0.0);
    }

    #[test]
    fn fraction_maps_onto_scrollable_extent() {
        assert_eq!(fraction_to_offset(0.5, 1000.0, 200.0), 400.0);
        assert_eq!(fraction_to_offset(0.0, 1000.0, 200.0), 0.0);
        assert_eq!(fraction_to_offset(1.0, 1000.0, 200.0), 800.0);
    }

    #[test]
    fn degenerate_geometry_pins_offset_to_zero() {
        assert_eq!(fraction_to_offset(0.5, 100.0, 200.0), 0.0);
        assert_eq!(fraction_to_offset(0.5, 200.0, 200.0), 0.0);
        assert_eq!(fraction_to_offset(0.5, 0.0, 0.0), 0.0);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(fraction_to_offset(1.5, 1000.0, 200.0), 800.0);
        assert_eq!(fraction_to_offset(-0.5, 1000.0, 200.0), 0.0);
    }

    #[test]
    fn jump_travel_divides_by_list_length() {
        assert_eq!(jump_travel(25, 100), 0.25);
        assert_eq!(jump_travel(0, 0), 0.0);
    }

    #[test]
    fn centering_clamps_to_scroll_range() {
        // Row 0 cannot be centered; offset stays at the top.
        assert_eq!(offset_to_center_row(0, 30.0, 300.0, 3000.0), 0.0);
        // Last row cannot be centered either; offset stops at the bottom.
        assert_eq!(offset_to_center_row(99, 30.0, 300.0, 3000.0), 2700.0);
        // A middle row lands with equal slack above and below.
        let offset = offset_to_center_row(50, 30.0, 300.0, 3000.0);
        assert_eq!(offset, 50.0 * 30.0 - (300.0 - 30.0) * 0.5);
    }
}
