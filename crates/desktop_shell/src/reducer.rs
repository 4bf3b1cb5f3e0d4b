//! Shell actions, side-effect intents, and the window-manager transition
//! engine.

use thiserror::Error;

use crate::content::DocumentMeta;
use crate::manifest::{self, WindowContent};
use crate::model::{
    DragSession, InteractionState, Point, ShellState, Viewport, WinSize, WindowId,
};
use crate::placement;

/// How a deferred placement request should position the window once its
/// rendered dimensions are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// One-time auto placement: pinned windows go to the fixed left offset,
    /// everything else joins the right-edge stagger column.
    FirstOpen,
    /// Explicit centering, used by transient popups. Applies once, for this
    /// call only.
    Center,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open a window, with optional explicit centering.
    OpenWindow {
        window_id: WindowId,
        center: bool,
    },
    CloseWindow {
        window_id: WindowId,
    },
    /// Close whichever window is active, if any (Escape key).
    CloseActiveWindow,
    MinimizeWindow {
        window_id: WindowId,
    },
    /// Raise and activate an open, non-minimized window.
    FocusWindow {
        window_id: WindowId,
    },
    /// Clear `minimized`, then focus. Distinct from focus: clicking a
    /// minimized window's taskbar entry restores on the first click.
    RestoreWindow {
        window_id: WindowId,
    },
    /// Taskbar button click: restore if minimized, minimize if active,
    /// focus otherwise.
    ToggleTaskbarWindow {
        window_id: WindowId,
    },
    ToggleStartMenu,
    CloseStartMenu,
    /// Exclusive desktop icon selection.
    SelectDesktopIcon {
        window_id: WindowId,
    },
    ClearDesktopSelection,
    /// Open the currently selected desktop icon (Enter key).
    OpenSelectedDesktopIcon,
    /// Stage title/body for the shared popup before opening it.
    StagePopup {
        title: String,
        body: String,
    },
    /// Begin a titlebar drag. Focuses the window immediately.
    BeginDrag {
        window_id: WindowId,
        pointer: Point,
    },
    /// Update the active drag, clamped to keep the window reachable.
    UpdateDrag {
        pointer: Point,
        viewport: Viewport,
    },
    /// End the active drag and mark the window user-moved.
    EndDrag,
    /// Apply a deferred placement once the host has measured the window.
    ApplyPlacement {
        window_id: WindowId,
        mode: PlacementMode,
        viewport: Viewport,
        size: WinSize,
    },
    /// Re-pin automatically placed pinned windows after a viewport resize.
    ViewportResized {
        viewport: Viewport,
    },
    /// Resolved (or failed) document metadata from the content hook.
    ApplyDocumentMeta {
        window_id: WindowId,
        meta: DocumentMeta,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host to execute.
pub enum RuntimeEffect {
    /// Measure the window on the next paint frame, then dispatch
    /// [`ShellAction::ApplyPlacement`]. Dimensions are not knowable
    /// synchronously right after the window becomes paintable.
    SchedulePlacement {
        window_id: WindowId,
        mode: PlacementMode,
    },
    /// Point the embedded viewer at its resource and fire the metadata
    /// fetch. Fire-and-forget; completion arrives as
    /// [`ShellAction::ApplyDocumentMeta`].
    HydrateDocumentViewer {
        window_id: WindowId,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReducerError {
    /// The target id is not in the registry. Downgraded to a log line by
    /// the dispatch layer; never fatal.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`ShellAction`] to the shell state and collects side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references an id
/// outside the manifest's closed set.
pub fn reduce_shell(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenWindow { window_id, center } => {
            open_window(state, window_id, center, &mut effects)?;
        }
        ShellAction::CloseWindow { window_id } => {
            close_window(state, window_id)?;
        }
        ShellAction::CloseActiveWindow => {
            if let Some(window_id) = state.active_window_id() {
                close_window(state, window_id)?;
            }
        }
        ShellAction::MinimizeWindow { window_id } => {
            let window = state
                .window_mut(window_id)
                .ok_or(ReducerError::WindowNotFound)?;
            // Valid only from Open; minimized stays in the open set.
            if window.open {
                window.minimized = true;
                window.active = false;
            }
        }
        ShellAction::FocusWindow { window_id } => {
            focus_window(state, window_id)?;
        }
        ShellAction::RestoreWindow { window_id } => {
            let window = state
                .window_mut(window_id)
                .ok_or(ReducerError::WindowNotFound)?;
            if window.open {
                window.minimized = false;
                focus_window(state, window_id)?;
            }
        }
        ShellAction::ToggleTaskbarWindow { window_id } => {
            let window = state.window(window_id).ok_or(ReducerError::WindowNotFound)?;
            if window.minimized {
                reduce_shell(state, interaction, ShellAction::RestoreWindow { window_id })?;
            } else if window.active {
                reduce_shell(state, interaction, ShellAction::MinimizeWindow { window_id })?;
            } else {
                reduce_shell(state, interaction, ShellAction::FocusWindow { window_id })?;
            }
        }
        ShellAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        ShellAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        ShellAction::SelectDesktopIcon { window_id } => {
            state.selected_icon = Some(window_id);
        }
        ShellAction::ClearDesktopSelection => {
            state.selected_icon = None;
        }
        ShellAction::OpenSelectedDesktopIcon => {
            if let Some(window_id) = state.selected_icon {
                open_window(state, window_id, false, &mut effects)?;
            }
        }
        ShellAction::StagePopup { title, body } => {
            state.popup_title = title;
            state.popup_body = body;
        }
        ShellAction::BeginDrag { window_id, pointer } => {
            // Pointer capture is per-handle: a second drag cannot start
            // while one is active.
            if interaction.dragging.is_some() {
                return Ok(effects);
            }
            let Some(window) = state.window(window_id) else {
                return Err(ReducerError::WindowNotFound);
            };
            if !window.visible() {
                return Ok(effects);
            }
            let position_start = window.position;
            focus_window(state, window_id)?;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        ShellAction::UpdateDrag { pointer, viewport } => {
            if let Some(session) = interaction.dragging {
                let window = state
                    .window_mut(session.window_id)
                    .ok_or(ReducerError::WindowNotFound)?;
                let moved = Point {
                    x: session.position_start.x + (pointer.x - session.pointer_start.x),
                    y: session.position_start.y + (pointer.y - session.pointer_start.y),
                };
                window.position = placement::clamp_drag(viewport, window.size_or_default(), moved);
            }
        }
        ShellAction::EndDrag => {
            if let Some(session) = interaction.dragging.take() {
                if let Some(window) = state.window_mut(session.window_id) {
                    window.user_moved = true;
                }
            }
        }
        ShellAction::ApplyPlacement {
            window_id,
            mode,
            viewport,
            size,
        } => {
            apply_placement(state, window_id, mode, viewport, size)?;
        }
        ShellAction::ViewportResized { viewport: _ } => {
            for spec in manifest::window_manifest().iter().filter(|s| s.pinned) {
                if let Some(window) = state.window_mut(spec.id) {
                    if window.visible() && !window.user_moved {
                        window.position = placement::pin_left();
                    }
                }
            }
        }
        ShellAction::ApplyDocumentMeta { window_id, meta } => {
            let window = state
                .window_mut(window_id)
                .ok_or(ReducerError::WindowNotFound)?;
            if window.doc_meta.is_some() {
                window.doc_meta = Some(meta);
            }
        }
    }

    Ok(effects)
}

fn open_window(
    state: &mut ShellState,
    window_id: WindowId,
    center: bool,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let window = state
        .window_mut(window_id)
        .ok_or(ReducerError::WindowNotFound)?;

    window.open = true;
    window.minimized = false;

    // First-ever open schedules one-time auto placement; repeated opens
    // must not re-stagger.
    if !window.ever_opened {
        window.ever_opened = true;
        effects.push(RuntimeEffect::SchedulePlacement {
            window_id,
            mode: PlacementMode::FirstOpen,
        });
    }
    if center {
        effects.push(RuntimeEffect::SchedulePlacement {
            window_id,
            mode: PlacementMode::Center,
        });
    }

    if let Some(spec) = manifest::window_spec(window_id) {
        if matches!(spec.content, WindowContent::DocumentViewer { .. }) {
            effects.push(RuntimeEffect::HydrateDocumentViewer { window_id });
        }
    }

    focus_window(state, window_id)?;
    state.start_menu_open = false;
    Ok(())
}

fn close_window(state: &mut ShellState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = state
        .window_mut(window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    window.open = false;
    window.minimized = false;
    // No automatic successor: focus is re-acquired by the next interaction.
    window.active = false;
    Ok(())
}

fn focus_window(state: &mut ShellState, window_id: WindowId) -> Result<(), ReducerError> {
    let Some(window) = state.window(window_id) else {
        return Err(ReducerError::WindowNotFound);
    };
    if !window.visible() {
        return Ok(());
    }

    for other in &mut state.windows {
        other.active = false;
    }
    state.z_top += 1;
    let z_top = state.z_top;
    if let Some(window) = state.window_mut(window_id) {
        window.active = true;
        window.z_order = z_top;
    }
    Ok(())
}

fn apply_placement(
    state: &mut ShellState,
    window_id: WindowId,
    mode: PlacementMode,
    viewport: Viewport,
    size: WinSize,
) -> Result<(), ReducerError> {
    let pinned = manifest::window_spec(window_id).is_some_and(|spec| spec.pinned);
    let spawn_index = state.spawn_index;

    let window = state
        .window_mut(window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    if !window.open {
        // Closed again before the paint frame arrived.
        return Ok(());
    }
    window.size = Some(size);

    match mode {
        PlacementMode::FirstOpen => {
            // The user won the race: a drag before the deferred placement
            // frame disables auto placement for good.
            if window.user_moved {
                return Ok(());
            }
            if pinned {
                window.position = placement::pin_left();
            } else {
                window.position = placement::spawn_staggered(viewport, size, spawn_index);
                state.spawn_index += 1;
            }
        }
        PlacementMode::Center => {
            window.position = placement::center(viewport, size);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::manifest::{
        ABOUT_WINDOW, NOTES_WINDOW, POPUP_WINDOW, PROJECTS_WINDOW, RESUME_WINDOW,
    };
    use crate::model::INITIAL_Z_ORDER;

    const VIEWPORT: Viewport = Viewport { w: 1000, h: 960 };
    const SIZE: WinSize = WinSize { w: 300, h: 200 };

    fn shell() -> (ShellState, InteractionState) {
        (ShellState::default(), InteractionState::default())
    }

    fn dispatch(
        state: &mut ShellState,
        interaction: &mut InteractionState,
        action: ShellAction,
    ) -> Vec<RuntimeEffect> {
        let effects = reduce_shell(state, interaction, action).expect("known window id");
        assert_invariants(state);
        effects
    }

    fn open(state: &mut ShellState, interaction: &mut InteractionState, id: WindowId) -> Vec<RuntimeEffect> {
        dispatch(
            state,
            interaction,
            ShellAction::OpenWindow {
                window_id: id,
                center: false,
            },
        )
    }

    fn place_first(state: &mut ShellState, interaction: &mut InteractionState, id: WindowId) {
        dispatch(
            state,
            interaction,
            ShellAction::ApplyPlacement {
                window_id: id,
                mode: PlacementMode::FirstOpen,
                viewport: VIEWPORT,
                size: SIZE,
            },
        );
    }

    fn assert_invariants(state: &ShellState) {
        for window in &state.windows {
            if window.minimized {
                assert!(window.open, "minimized window {} must be open", window.id);
            }
        }
        let active = state
            .windows
            .iter()
            .filter(|w| w.active)
            .map(|w| w.id)
            .collect::<Vec<_>>();
        assert!(active.len() <= 1, "multiple active windows: {active:?}");
    }

    #[test]
    fn open_marks_open_focuses_and_schedules_first_placement() {
        let (mut state, mut interaction) = shell();
        let effects = open(&mut state, &mut interaction, ABOUT_WINDOW);

        let window = state.window(ABOUT_WINDOW).unwrap();
        assert!(window.open && !window.minimized && window.active);
        assert_eq!(window.z_order, INITIAL_Z_ORDER + 1);
        assert_eq!(
            effects,
            vec![RuntimeEffect::SchedulePlacement {
                window_id: ABOUT_WINDOW,
                mode: PlacementMode::FirstOpen,
            }]
        );
    }

    #[test]
    fn reopening_does_not_reschedule_first_placement() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        let effects = open(&mut state, &mut interaction, ABOUT_WINDOW);
        assert_eq!(effects, vec![]);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::CloseWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        let effects = open(&mut state, &mut interaction, ABOUT_WINDOW);
        assert_eq!(effects, vec![]);
    }

    #[test]
    fn opening_a_document_viewer_triggers_the_content_hook_every_time() {
        let (mut state, mut interaction) = shell();
        let effects = open(&mut state, &mut interaction, RESUME_WINDOW);
        assert!(effects.contains(&RuntimeEffect::HydrateDocumentViewer {
            window_id: RESUME_WINDOW
        }));

        let effects = open(&mut state, &mut interaction, RESUME_WINDOW);
        assert_eq!(
            effects,
            vec![RuntimeEffect::HydrateDocumentViewer {
                window_id: RESUME_WINDOW
            }]
        );
    }

    #[test]
    fn focus_assigns_strictly_increasing_z_order() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        open(&mut state, &mut interaction, PROJECTS_WINDOW);

        let mut last = 0;
        for id in [ABOUT_WINDOW, PROJECTS_WINDOW, ABOUT_WINDOW, ABOUT_WINDOW] {
            dispatch(
                &mut state,
                &mut interaction,
                ShellAction::FocusWindow { window_id: id },
            );
            let z = state.window(id).unwrap().z_order;
            assert!(z > last, "z-order must be strictly increasing");
            last = z;
        }
        assert_eq!(state.active_window_id(), Some(ABOUT_WINDOW));
    }

    #[test]
    fn focus_is_a_noop_on_closed_or_minimized_windows() {
        let (mut state, mut interaction) = shell();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        assert_eq!(state.active_window_id(), None);

        open(&mut state, &mut interaction, ABOUT_WINDOW);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::MinimizeWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        let z_before = state.window(ABOUT_WINDOW).unwrap().z_order;
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        let window = state.window(ABOUT_WINDOW).unwrap();
        assert!(window.minimized && !window.active);
        assert_eq!(window.z_order, z_before);
    }

    #[test]
    fn minimize_and_close_clear_active_with_no_successor() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        open(&mut state, &mut interaction, PROJECTS_WINDOW);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::MinimizeWindow {
                window_id: PROJECTS_WINDOW,
            },
        );
        assert_eq!(state.active_window_id(), None);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::CloseWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        assert_eq!(state.active_window_id(), None);
    }

    #[test]
    fn taskbar_click_walks_the_decision_table() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        assert_eq!(state.taskbar_windows().len(), 1);
        assert!(state.taskbar_windows()[0].active);

        // Active: minimize. The button stays, unmarked active.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ToggleTaskbarWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        let window = state.window(ABOUT_WINDOW).unwrap();
        assert!(window.open && window.minimized && !window.active);
        assert_eq!(state.taskbar_windows().len(), 1);

        // Minimized: restore and focus on the first click.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ToggleTaskbarWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        let window = state.window(ABOUT_WINDOW).unwrap();
        assert!(window.open && !window.minimized && window.active);

        // Open but inactive: focus.
        open(&mut state, &mut interaction, PROJECTS_WINDOW);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ToggleTaskbarWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        assert_eq!(state.active_window_id(), Some(ABOUT_WINDOW));
        assert!(!state.window(ABOUT_WINDOW).unwrap().minimized);
    }

    #[test]
    fn popup_is_centered_and_kept_off_the_taskbar() {
        let (mut state, mut interaction) = shell();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::StagePopup {
                title: "Build notes".to_string(),
                body: "Shipped with the static site.".to_string(),
            },
        );
        let effects = dispatch(
            &mut state,
            &mut interaction,
            ShellAction::OpenWindow {
                window_id: POPUP_WINDOW,
                center: true,
            },
        );

        assert!(effects.contains(&RuntimeEffect::SchedulePlacement {
            window_id: POPUP_WINDOW,
            mode: PlacementMode::Center,
        }));
        assert_eq!(state.popup_title, "Build notes");
        assert!(state
            .taskbar_windows()
            .iter()
            .all(|w| w.id != POPUP_WINDOW));

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ApplyPlacement {
                window_id: POPUP_WINDOW,
                mode: PlacementMode::Center,
                viewport: VIEWPORT,
                size: SIZE,
            },
        );
        let window = state.window(POPUP_WINDOW).unwrap();
        assert_eq!(window.position, Point { x: 350, y: 380 });
    }

    #[test]
    fn center_placement_matches_the_reference_geometry() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ApplyPlacement {
                window_id: ABOUT_WINDOW,
                mode: PlacementMode::Center,
                viewport: VIEWPORT,
                size: WinSize { w: 300, h: 1200 },
            },
        );
        let window = state.window(ABOUT_WINDOW).unwrap();
        assert_eq!(window.position.x, 350);
        assert_eq!(window.position.y, 6);
    }

    #[test]
    fn successive_auto_spawns_do_not_share_a_top_left() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        place_first(&mut state, &mut interaction, ABOUT_WINDOW);
        open(&mut state, &mut interaction, PROJECTS_WINDOW);
        place_first(&mut state, &mut interaction, PROJECTS_WINDOW);

        let a = state.window(ABOUT_WINDOW).unwrap().position;
        let b = state.window(PROJECTS_WINDOW).unwrap().position;
        assert_ne!(a, b, "stagger must offset the second spawn");
    }

    #[test]
    fn first_placement_pins_the_pinned_window() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, NOTES_WINDOW);
        place_first(&mut state, &mut interaction, NOTES_WINDOW);
        assert_eq!(
            state.window(NOTES_WINDOW).unwrap().position,
            Point { x: 120, y: 70 }
        );
    }

    #[test]
    fn drag_updates_position_and_end_marks_user_moved() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        place_first(&mut state, &mut interaction, ABOUT_WINDOW);
        let start = state.window(ABOUT_WINDOW).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: ABOUT_WINDOW,
                pointer: Point { x: 500, y: 300 },
            },
        );
        assert_eq!(state.active_window_id(), Some(ABOUT_WINDOW));

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: Point { x: 440, y: 330 },
                viewport: VIEWPORT,
            },
        );
        let moved = state.window(ABOUT_WINDOW).unwrap().position;
        assert_eq!(moved, Point { x: start.x - 60, y: start.y + 30 });

        dispatch(&mut state, &mut interaction, ShellAction::EndDrag);
        assert!(state.window(ABOUT_WINDOW).unwrap().user_moved);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_is_clamped_to_keep_the_window_reachable() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        place_first(&mut state, &mut interaction, ABOUT_WINDOW);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: ABOUT_WINDOW,
                pointer: Point { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: Point { x: -9000, y: -9000 },
                viewport: VIEWPORT,
            },
        );
        let position = state.window(ABOUT_WINDOW).unwrap().position;
        assert_eq!(position, Point { x: 48 - SIZE.w, y: 0 });
    }

    #[test]
    fn only_one_drag_session_at_a_time() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        open(&mut state, &mut interaction, PROJECTS_WINDOW);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: ABOUT_WINDOW,
                pointer: Point { x: 10, y: 10 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: PROJECTS_WINDOW,
                pointer: Point { x: 20, y: 20 },
            },
        );
        assert_eq!(
            interaction.dragging.map(|s| s.window_id),
            Some(ABOUT_WINDOW)
        );
    }

    #[test]
    fn resize_repins_the_pinned_window_until_the_user_drags_it() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, NOTES_WINDOW);
        place_first(&mut state, &mut interaction, NOTES_WINDOW);

        // Automatic pinning follows the viewport.
        if let Some(window) = state.window_mut(NOTES_WINDOW) {
            window.position = Point { x: 0, y: 0 };
        }
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ViewportResized { viewport: VIEWPORT },
        );
        assert_eq!(
            state.window(NOTES_WINDOW).unwrap().position,
            Point { x: 120, y: 70 }
        );

        // After a drag, resize must not move it, pinned or not.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: NOTES_WINDOW,
                pointer: Point { x: 200, y: 90 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: Point { x: 260, y: 140 },
                viewport: VIEWPORT,
            },
        );
        dispatch(&mut state, &mut interaction, ShellAction::EndDrag);
        let dragged_to = state.window(NOTES_WINDOW).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ViewportResized { viewport: VIEWPORT },
        );
        assert_eq!(state.window(NOTES_WINDOW).unwrap().position, dragged_to);
    }

    #[test]
    fn late_first_placement_loses_to_a_user_drag() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: ABOUT_WINDOW,
                pointer: Point { x: 100, y: 100 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: Point { x: 150, y: 120 },
                viewport: VIEWPORT,
            },
        );
        dispatch(&mut state, &mut interaction, ShellAction::EndDrag);
        let dragged_to = state.window(ABOUT_WINDOW).unwrap().position;

        // The paint-frame placement arrives after the drag finished.
        place_first(&mut state, &mut interaction, ABOUT_WINDOW);
        assert_eq!(state.window(ABOUT_WINDOW).unwrap().position, dragged_to);
    }

    #[test]
    fn start_menu_toggles_and_closes_on_open() {
        let (mut state, mut interaction) = shell();
        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        open(&mut state, &mut interaction, ABOUT_WINDOW);
        assert!(!state.start_menu_open, "opening a window closes the menu");

        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);
        dispatch(&mut state, &mut interaction, ShellAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn pressing_a_window_surface_dismisses_the_start_menu() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        // A press on a window stops propagation, so the surface handler
        // dispatches the dismissal itself before focusing.
        dispatch(&mut state, &mut interaction, ShellAction::CloseStartMenu);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow {
                window_id: ABOUT_WINDOW,
            },
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.active_window_id(), Some(ABOUT_WINDOW));
    }

    #[test]
    fn desktop_selection_is_exclusive_and_enter_opens_it() {
        let (mut state, mut interaction) = shell();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SelectDesktopIcon {
                window_id: ABOUT_WINDOW,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SelectDesktopIcon {
                window_id: PROJECTS_WINDOW,
            },
        );
        assert_eq!(state.selected_icon, Some(PROJECTS_WINDOW));

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::OpenSelectedDesktopIcon,
        );
        assert!(state.window(PROJECTS_WINDOW).unwrap().open);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ClearDesktopSelection,
        );
        assert_eq!(state.selected_icon, None);
    }

    #[test]
    fn escape_closes_the_active_window() {
        let (mut state, mut interaction) = shell();
        open(&mut state, &mut interaction, ABOUT_WINDOW);
        dispatch(&mut state, &mut interaction, ShellAction::CloseActiveWindow);
        assert!(!state.window(ABOUT_WINDOW).unwrap().open);

        // Nothing active: a no-op, not an error.
        dispatch(&mut state, &mut interaction, ShellAction::CloseActiveWindow);
    }

    #[test]
    fn document_meta_updates_only_viewer_windows() {
        let (mut state, mut interaction) = shell();
        let meta = crate::content::document_meta(Some(130_048), None);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ApplyDocumentMeta {
                window_id: RESUME_WINDOW,
                meta: meta.clone(),
            },
        );
        assert_eq!(state.window(RESUME_WINDOW).unwrap().doc_meta, Some(meta));

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ApplyDocumentMeta {
                window_id: ABOUT_WINDOW,
                meta: crate::content::DocumentMeta::unresolved(),
            },
        );
        assert_eq!(state.window(ABOUT_WINDOW).unwrap().doc_meta, None);
    }

    #[test]
    fn unknown_ids_surface_as_window_not_found() {
        let (mut state, mut interaction) = shell();
        let result = reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::OpenWindow {
                window_id: WindowId("win-unmapped"),
                center: false,
            },
        );
        assert_eq!(result, Err(ReducerError::WindowNotFound));
        assert_eq!(state, ShellState::default());
    }
}
