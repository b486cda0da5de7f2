//! Row geometry for fixed-height tree rows.

/// Top edge of the row at `index`.
pub fn row_top(index: usize, row_height: f32, spacing: f32) -> f32 {
    index as f32 * (row_height + spacing)
}

/// Row slot under the vertical position `y`, clamped to the last row.
///
/// Returns `None` for an empty list or a position above the first row.
pub fn row_at(
    y: f32,
    row_height: f32,
    spacing: f32,
    count: usize,
) -> Option<usize> {
    let pitch = row_height + spacing;
    if count == 0 || !y.is_finite() || y < 0.0 || pitch <= 0.0 {
        return None;
    }

    let index = (y / pitch).floor() as usize;
    Some(index.min(count - 1))
}

/// Scroll offset that brings a row into view with the least movement.
///
/// Returns `None` when the row is already fully visible. An unknown
/// viewport (zero height) always scrolls the row to the top.
pub fn nearest_offset(
    offset_y: f32,
    viewport_height: f32,
    row_top: f32,
    row_height: f32,
) -> Option<f32> {
    if viewport_height <= 0.0 {
        return Some(row_top.max(0.0));
    }

    let row_bottom = row_top + row_height;
    if row_top < offset_y {
        Some(row_top.max(0.0))
    } else if row_bottom > offset_y + viewport_height {
        Some((row_bottom - viewport_height).max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_pointer_position_when_mapping_to_rows_then_slot_is_found() {
        assert_eq!(row_at(0.0, 28.0, 0.0, 3), Some(0));
        assert_eq!(row_at(29.0, 28.0, 0.0, 3), Some(1));
        assert_eq!(row_at(31.0, 28.0, 2.0, 3), Some(1));
        assert_eq!(row_at(500.0, 28.0, 0.0, 3), Some(2));
    }

    #[test]
    fn given_empty_list_or_negative_position_when_mapping_then_none() {
        assert_eq!(row_at(10.0, 28.0, 0.0, 0), None);
        assert_eq!(row_at(-1.0, 28.0, 0.0, 3), None);
        assert_eq!(row_at(f32::NAN, 28.0, 0.0, 3), None);
    }

    #[test]
    fn given_row_inside_viewport_when_scrolling_then_offset_is_kept() {
        assert_eq!(nearest_offset(0.0, 100.0, 28.0, 28.0), None);
    }

    #[test]
    fn given_row_above_viewport_when_scrolling_then_row_aligns_to_top() {
        assert_eq!(nearest_offset(200.0, 100.0, 56.0, 28.0), Some(56.0));
    }

    #[test]
    fn given_row_below_viewport_when_scrolling_then_row_aligns_to_bottom() {
        assert_eq!(nearest_offset(0.0, 100.0, 140.0, 28.0), Some(68.0));
    }

    #[test]
    fn given_unknown_viewport_when_scrolling_then_row_aligns_to_top() {
        assert_eq!(nearest_offset(0.0, 0.0, 84.0, 28.0), Some(84.0));
        assert_eq!(row_top(3, 28.0, 0.0), 84.0);
    }
}
