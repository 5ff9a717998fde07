use raylib::prelude::*;

use crate::constants::PANEL_PADDING;

/// Split the window into `count` equal rows, one per carousel, with padding
/// around and between them.
pub fn stacked_rows(screen_width: f32, screen_height: f32, count: usize) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let width = (screen_width - 2.0 * PANEL_PADDING).max(0.0);
    let total_height = screen_height - PANEL_PADDING * (count as f32 + 1.0);
    let row_height = (total_height / count as f32).max(0.0);

    (0..count)
        .map(|i| {
            let y = PANEL_PADDING + i as f32 * (row_height + PANEL_PADDING);
            Rectangle::new(PANEL_PADDING, y, width, row_height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_panels_no_rows() {
        assert!(stacked_rows(1280.0, 800.0, 0).is_empty());
    }

    #[test]
    fn one_panel_fills_the_window_inside_padding() {
        let rows = stacked_rows(1280.0, 800.0, 1);
        assert_eq!(rows.len(), 1);
        let row = rows[0];
        assert_eq!(row.x, PANEL_PADDING);
        assert_eq!(row.y, PANEL_PADDING);
        assert_eq!(row.width, 1280.0 - 2.0 * PANEL_PADDING);
        assert_eq!(row.height, 800.0 - 2.0 * PANEL_PADDING);
    }

    #[test]
    fn rows_are_equal_and_do_not_overlap() {
        let rows = stacked_rows(1280.0, 800.0, 3);
        assert_eq!(rows.len(), 3);
        for pair in rows.windows(2) {
            assert_eq!(pair[0].height, pair[1].height);
            assert!(pair[0].y + pair[0].height <= pair[1].y);
        }
        let last = rows[2];
        assert!(last.y + last.height <= 800.0);
    }

    #[test]
    fn degenerate_window_clamps_to_zero() {
        let rows = stacked_rows(10.0, 10.0, 4);
        for row in rows {
            assert!(row.width >= 0.0);
            assert!(row.height >= 0.0);
        }
    }
}
