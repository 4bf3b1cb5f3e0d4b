//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the long-lived reducer container and runtime effect queue. UI
//! composition stays in [`crate::components`].

use leptos::*;

use crate::{
    host::ShellHostContext,
    manifest,
    model::{InteractionState, ShellState},
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]
/// values.
pub struct ShellRuntimeContext {
    /// Browser adapter for viewport queries and effect execution.
    pub host: StoredValue<ShellHostContext>,
    /// Reactive window-registry state signal.
    pub state: RwSignal<ShellState>,
    /// Reactive drag-session state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and opens the
/// boot windows.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let host = store_value(ShellHostContext::default());
    let state = create_rw_signal(ShellState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_shell = shell.clone();
        let previous_ui = ui;

        match reduce_shell(&mut shell, &mut ui, action) {
            Ok(new_effects) => {
                if shell != previous_shell {
                    state.set(shell);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            // Missing targets are never fatal: malformed markup or config
            // must not crash the shell.
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    // Drain queued runtime effects in dispatch order. The queue is emptied
    // up front: an effect that dispatches again lands its follow-up effects
    // in a fresh batch instead of colliding with the drain in flight.
    create_effect(move |_| {
        let drained = runtime.effects.get();
        if drained.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());
        for effect in drained {
            runtime.host.get_value().run_runtime_effect(runtime, effect);
        }
    });

    for spec in manifest::boot_windows() {
        runtime.dispatch_action(ShellAction::OpenWindow {
            window_id: spec.id,
            center: false,
        });
    }

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
