//! Tests for popup geometry

use ratatui::layout::Rect;

use super::*;

#[test]
fn test_popup_sits_directly_above_anchor() {
    let anchor = Rect {
        x: 0,
        y: 10,
        width: 80,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 30, 6, 2);
    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 4);
    assert_eq!(popup.width, 30);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_height_clamped_to_space_above() {
    let anchor = Rect {
        x: 0,
        y: 3,
        width: 80,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 30, 12, 2);
    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_width_clamped_to_anchor() {
    let anchor = Rect {
        x: 0,
        y: 10,
        width: 20,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 60, 6, 2);
    assert_eq!(popup.width, 16);
}
