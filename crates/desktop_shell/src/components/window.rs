use super::*;
use crate::host::window_dom_id;
use crate::manifest::WindowContent;
use crate::model::WindowId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let window = Signal::derive(move || runtime.state.get().window(window_id).cloned());

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginDrag {
            window_id,
            pointer: pointer_from_event(&ev),
        });
    };
    let minimize = move |_| runtime.dispatch_action(ShellAction::MinimizeWindow { window_id });
    let close = move |_| runtime.dispatch_action(ShellAction::CloseWindow { window_id });

    view! {
        <Show when=move || window.get().map(|w| w.open).unwrap_or(false) fallback=|| ()>
            {move || {
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let size_style = win
                    .size
                    .map(|s| format!("width:{}px;height:{}px;", s.w, s.h))
                    .unwrap_or_default();
                let style = format!(
                    "left:{}px;top:{}px;{}z-index:{};",
                    win.position.x, win.position.y, size_style, win.z_order
                );
                let minimized_class = if win.minimized { " minimized" } else { "" };
                let active_class = if win.active { " active" } else { "" };

                view! {
                    <section
                        id=window_dom_id(window_id)
                        class=format!("win open{}{}", minimized_class, active_class)
                        style=style
                        role="dialog"
                        aria-label=win.title
                        on:mousedown=move |ev| {
                            // Propagation stops here, so the document-level
                            // menu dismissal never sees this press; close
                            // the menu explicitly.
                            ev.stop_propagation();
                            runtime.dispatch_action(ShellAction::CloseStartMenu);
                            runtime.dispatch_action(ShellAction::FocusWindow { window_id });
                        }
                    >
                        <header class="win-titlebar" on:pointerdown=begin_drag>
                            <div class="win-titlebar-label">
                                <WindowIcon icon=win.icon />
                                <span class="win-title">{win.title}</span>
                            </div>
                            <div class="win-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                >
                                    "_"
                                </button>
                                <button
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        </header>
                        <div class="win-body">
                            <WindowBody window_id=window_id />
                        </div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    match manifest::window_spec(window_id).map(|spec| spec.content) {
        Some(WindowContent::Notes) => view! { <contents::NotesContent /> }.into_view(),
        Some(WindowContent::About) => view! { <contents::AboutContent /> }.into_view(),
        Some(WindowContent::Projects) => view! { <contents::ProjectsContent /> }.into_view(),
        Some(WindowContent::DocumentViewer { .. }) => {
            view! { <contents::DocumentViewerContent window_id=window_id /> }.into_view()
        }
        Some(WindowContent::Popup) => view! { <contents::PopupContent /> }.into_view(),
        None => ().into_view(),
    }
}
