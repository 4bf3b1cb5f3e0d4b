//! Desktop shell UI composition and interaction surfaces.
//!
//! Components here are a thin projection of [`crate::model::ShellState`]
//! onto the DOM; every interaction goes back through the reducer.

mod contents;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    icons::WindowIcon,
    manifest,
    model::Point,
    reducer::ShellAction,
    runtime_context::{use_shell_runtime, ShellRuntimeContext},
};

fn pointer_from_event(ev: &web_sys::PointerEvent) -> Point {
    Point {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Stages popup content and opens the shared popup window centered.
pub fn open_info_popup(runtime: ShellRuntimeContext, title: &str, body: &str) {
    runtime.dispatch_action(ShellAction::StagePopup {
        title: title.to_string(),
        body: body.to_string(),
    });
    runtime.dispatch_action(ShellAction::OpenWindow {
        window_id: manifest::POPUP_WINDOW,
        center: true,
    });
}

#[component]
/// Renders the full desktop shell: desktop icons, window layer, start menu
/// and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    // Document-level pointer tracking resolves the active drag even when
    // the pointer leaves the titlebar.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(ShellAction::UpdateDrag {
                pointer: pointer_from_event(&ev),
                viewport: runtime.host.get_value().desktop_viewport(),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(ShellAction::EndDrag);
        }
    };

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(ShellAction::ViewportResized {
            viewport: runtime.host.get_value().desktop_viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    // Escape dismisses the start menu first, then the active window.
    // Enter opens the selected desktop icon.
    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => {
                if runtime.state.get_untracked().start_menu_open {
                    runtime.dispatch_action(ShellAction::CloseStartMenu);
                } else {
                    runtime.dispatch_action(ShellAction::CloseActiveWindow);
                }
            }
            "Enter" => {
                if runtime.state.get_untracked().selected_icon.is_some() {
                    ev.prevent_default();
                    runtime.dispatch_action(ShellAction::OpenSelectedDesktopIcon);
                }
            }
            _ => {}
        }
    });
    on_cleanup(move || keydown_listener.remove());

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop"
                on:mousedown=move |_| {
                    runtime.dispatch_action(ShellAction::ClearDesktopSelection);
                    runtime.dispatch_action(ShellAction::CloseStartMenu);
                }
            >
                <div class="desk-icons" role="group" aria-label="Desktop shortcuts">
                    <For
                        each={|| manifest::desktop_icon_windows().collect::<Vec<_>>()}
                        key=|spec| spec.id
                        let:spec
                    >
                        <DesktopIcon spec=spec />
                    </For>
                </div>

                <For
                    each=move || state.get().windows
                    key=|win| win.id
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(spec: &'static manifest::WindowSpec) -> impl IntoView {
    let runtime = use_shell_runtime();
    let id = spec.id;
    let selected = create_memo(move |_| runtime.state.get().selected_icon == Some(id));

    view! {
        <button
            class=move || {
                if selected.get() {
                    "desk-icon selected"
                } else {
                    "desk-icon"
                }
            }
            on:mousedown=move |ev| ev.stop_propagation()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(ShellAction::SelectDesktopIcon { window_id: id });
                runtime.dispatch_action(ShellAction::CloseStartMenu);
            }
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(ShellAction::OpenWindow {
                    window_id: id,
                    center: false,
                });
            }
        >
            <WindowIcon icon=spec.icon />
            <span class="desk-icon-label">{spec.desktop_label}</span>
        </button>
    }
}
