use std::time::Duration;

use super::*;
use super::start_menu::StartMenu;
use crate::model::{ShellState, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        Self { hour: 0, minute: 0 }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

/// A task button is pressed only while its window currently holds active
/// status and is not minimized. Read per render, not at view creation:
/// `<For>` reuses a keyed child view when focus or minimize flips, so a
/// captured snapshot would go stale.
fn task_button_pressed(state: &ShellState, id: WindowId) -> bool {
    state
        .window(id)
        .is_some_and(|w| w.active && !w.minimized)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Any press outside the start menu or its button dismisses the menu;
    // both stop mousedown propagation themselves.
    let outside_press_listener = window_event_listener(ev::mousedown, move |_| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(ShellAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_press_listener.remove());

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <button
                class="start-button"
                aria-haspopup="menu"
                aria-expanded=move || state.get().start_menu_open.to_string()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(ShellAction::ToggleStartMenu);
                }
            >
                "Start"
            </button>

            <div class="tasks" role="group" aria-label="Open windows">
                <For
                    each=move || state.get().taskbar_windows()
                    key=|win| win.id
                    let:win
                >
                    {{
                        let id = win.id;
                        let pressed = create_memo(move |_| {
                            task_button_pressed(&state.get(), id)
                        });
                        view! {
                            <button
                                class=move || {
                                    if pressed.get() { "task active" } else { "task" }
                                }
                                aria-pressed=move || pressed.get().to_string()
                                on:mousedown=move |ev| ev.stop_propagation()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(ShellAction::CloseStartMenu);
                                    runtime
                                        .dispatch_action(ShellAction::ToggleTaskbarWindow {
                                            window_id: id,
                                        });
                                }
                            >
                                <WindowIcon icon=win.icon />
                                <span class="task-text">{win.title}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-clock" aria-label="Clock">
                {move || format_clock(clock.get())}
            </div>

            <StartMenu />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_pads_hours_and_minutes() {
        assert_eq!(format_clock(ClockSnapshot { hour: 9, minute: 5 }), "09:05");
        assert_eq!(
            format_clock(ClockSnapshot {
                hour: 23,
                minute: 59
            }),
            "23:59"
        );
    }

    #[test]
    fn task_button_pressed_follows_minimize_and_restore() {
        use crate::manifest::ABOUT_WINDOW;
        use crate::model::InteractionState;
        use crate::reducer::{reduce_shell, ShellAction};

        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::OpenWindow {
                window_id: ABOUT_WINDOW,
                center: false,
            },
        )
        .unwrap();
        assert!(task_button_pressed(&state, ABOUT_WINDOW));

        // Minimizing keeps the button (window stays open) but must drop
        // the pressed marking even though the taskbar key set is unchanged.
        reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::ToggleTaskbarWindow {
                window_id: ABOUT_WINDOW,
            },
        )
        .unwrap();
        let win = state.window(ABOUT_WINDOW).unwrap();
        assert!(win.open && win.minimized);
        assert!(!task_button_pressed(&state, ABOUT_WINDOW));

        reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::ToggleTaskbarWindow {
                window_id: ABOUT_WINDOW,
            },
        )
        .unwrap();
        assert!(task_button_pressed(&state, ABOUT_WINDOW));
    }
}
