use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <nav
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <For
                    each={|| manifest::launcher_windows().collect::<Vec<_>>()}
                    key=|spec| spec.id
                    let:spec
                >
                    {{
                        let id = spec.id;
                        view! {
                            <button
                                class="start-item"
                                role="menuitem"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    // Opening closes the menu in the reducer.
                                    runtime
                                        .dispatch_action(ShellAction::OpenWindow {
                                            window_id: id,
                                            center: false,
                                        });
                                }
                            >
                                <WindowIcon icon=spec.icon />
                                <span>{spec.title}</span>
                            </button>
                        }
                    }}
                </For>
            </nav>
        </Show>
    }
}
