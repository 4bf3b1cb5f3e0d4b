//! Pure placement math for auto-positioned windows.
//!
//! All functions take the desktop [`Viewport`] (browser viewport minus the
//! taskbar) and rendered window dimensions; none of them touch shell state.

use crate::model::{Point, Viewport, WinSize};

/// Minimum distance kept between an auto-placed window and the desktop edge.
pub const EDGE_MARGIN: i32 = 6;
/// Margin used by the right-edge spawn column.
pub const SPAWN_MARGIN: i32 = 24;
/// Vertical offset between successive spawn slots.
pub const SPAWN_STEP: i32 = 34;
/// Fixed position for the pinned window, recomputed on viewport resize.
pub const PIN_LEFT: Point = Point { x: 120, y: 70 };

/// Horizontal window strip that must stay reachable while dragging.
const DRAG_KEEP_X: i32 = 48;
/// Titlebar height that must stay reachable while dragging.
const DRAG_KEEP_Y: i32 = 24;

/// Centers a window in the desktop area, never closer than [`EDGE_MARGIN`]
/// to the top-left corner.
pub fn center(viewport: Viewport, size: WinSize) -> Point {
    Point {
        x: EDGE_MARGIN.max((viewport.w - size.w) / 2),
        y: EDGE_MARGIN.max((viewport.h - size.h) / 2),
    }
}

/// Fixed-offset position for the pinned window.
pub fn pin_left() -> Point {
    PIN_LEFT
}

/// Number of vertical spawn slots that fit the viewport. Always at least one.
pub fn stagger_slots(viewport: Viewport) -> usize {
    (((viewport.h - 20) / SPAWN_STEP).max(1)) as usize
}

/// Right-aligned column position for the `spawn_index`-th auto-spawned
/// window. The vertical offset cascades downward in [`SPAWN_STEP`] steps and
/// wraps back to the top once it would run past the visible height.
pub fn spawn_staggered(viewport: Viewport, size: WinSize, spawn_index: usize) -> Point {
    let k = (spawn_index % stagger_slots(viewport)) as i32;
    Point {
        x: SPAWN_MARGIN.max(viewport.w - size.w - SPAWN_MARGIN),
        y: SPAWN_MARGIN.max((SPAWN_MARGIN + k * SPAWN_STEP).min(viewport.h - size.h - SPAWN_MARGIN)),
    }
}

/// Clamps a dragged window so part of it (and its titlebar) stays on screen.
pub fn clamp_drag(viewport: Viewport, size: WinSize, position: Point) -> Point {
    Point {
        x: position.x.clamp(DRAG_KEEP_X - size.w, viewport.w - DRAG_KEEP_X),
        y: position.y.clamp(0, (viewport.h - DRAG_KEEP_Y).max(0)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport { w: 1000, h: 960 };

    #[test]
    fn center_splits_remaining_width() {
        let pos = center(VIEWPORT, WinSize { w: 300, h: 400 });
        assert_eq!(pos, Point { x: 350, y: 280 });
    }

    #[test]
    fn center_clamps_oversized_windows_to_margin() {
        let pos = center(VIEWPORT, WinSize { w: 1400, h: 1200 });
        assert_eq!(pos, Point { x: EDGE_MARGIN, y: EDGE_MARGIN });
    }

    #[test]
    fn spawn_column_is_right_aligned_and_steps_down() {
        let size = WinSize { w: 300, h: 200 };
        let first = spawn_staggered(VIEWPORT, size, 0);
        let second = spawn_staggered(VIEWPORT, size, 1);

        assert_eq!(first.x, VIEWPORT.w - size.w - SPAWN_MARGIN);
        assert_eq!(second.x, first.x);
        assert_eq!(second.y, first.y + SPAWN_STEP);
    }

    #[test]
    fn spawn_index_wraps_instead_of_running_off_screen() {
        let size = WinSize { w: 300, h: 200 };
        let slots = stagger_slots(VIEWPORT);
        let wrapped = spawn_staggered(VIEWPORT, size, slots);

        assert_eq!(wrapped, spawn_staggered(VIEWPORT, size, 0));
    }

    #[test]
    fn spawn_never_places_below_visible_area() {
        let short = Viewport { w: 800, h: 300 };
        let size = WinSize { w: 300, h: 280 };
        for index in 0..12 {
            let pos = spawn_staggered(short, size, index);
            assert!(pos.y >= SPAWN_MARGIN);
            assert!(pos.y <= short.h);
        }
    }

    #[test]
    fn drag_clamp_keeps_titlebar_reachable() {
        let size = WinSize { w: 400, h: 300 };
        let pos = clamp_drag(VIEWPORT, size, Point { x: -2000, y: -50 });
        assert_eq!(pos, Point { x: 48 - size.w, y: 0 });

        let pos = clamp_drag(VIEWPORT, size, Point { x: 5000, y: 5000 });
        assert_eq!(pos, Point { x: VIEWPORT.w - 48, y: VIEWPORT.h - 24 });
    }
}
