//! Browser adapter for the shell: viewport queries and runtime effect
//! execution. This is the only module that needs a real display environment;
//! everything it feeds into the reducer is plain data.

use leptos::{logging, SignalGetUntracked};

use crate::{
    manifest::{self, WindowContent},
    model::{Viewport, WindowId, TASKBAR_HEIGHT_PX},
    reducer::{PlacementMode, RuntimeEffect, ShellAction},
    runtime_context::ShellRuntimeContext,
};

/// DOM id of a managed window element.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desk-window-{window_id}")
}

/// DOM id of a document-viewer window's embedded frame.
pub fn viewer_frame_dom_id(window_id: WindowId) -> String {
    format!("{window_id}-frame")
}

#[derive(Debug, Clone, Copy, Default)]
/// Stateless browser host bundle.
pub struct ShellHostContext;

impl ShellHostContext {
    /// Returns the desktop area available to windows: the browser viewport
    /// minus the taskbar strip.
    pub fn desktop_viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let w = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(1024.0) as i32;
                let h = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(768.0) as i32;
                return Viewport {
                    w,
                    h: h - TASKBAR_HEIGHT_PX,
                };
            }
        }

        Viewport {
            w: 1024,
            h: 768 - TASKBAR_HEIGHT_PX,
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: ShellRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::SchedulePlacement { window_id, mode } => {
                schedule_placement(runtime, window_id, mode);
            }
            RuntimeEffect::HydrateDocumentViewer { window_id } => {
                hydrate_document_viewer(runtime, window_id);
            }
        }
    }
}

/// Defers placement to the next paint frame, where the window's rendered
/// dimensions are knowable, then feeds them back through the reducer.
fn schedule_placement(runtime: ShellRuntimeContext, window_id: WindowId, mode: PlacementMode) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let size = measure_window(runtime, window_id);
            let viewport = runtime.host.get_value().desktop_viewport();
            runtime.dispatch_action(ShellAction::ApplyPlacement {
                window_id,
                mode,
                viewport,
                size,
            });
        });
        if window
            .request_animation_frame(callback.unchecked_ref())
            .is_err()
        {
            logging::warn!("placement frame request failed for {window_id}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No paint loop outside the browser; place with last-known sizes.
        let viewport = runtime.host.get_value().desktop_viewport();
        let size = runtime
            .state
            .get_untracked()
            .window(window_id)
            .map(|w| w.size_or_default())
            .unwrap_or_default();
        runtime.dispatch_action(ShellAction::ApplyPlacement {
            window_id,
            mode,
            viewport,
            size,
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn measure_window(runtime: ShellRuntimeContext, window_id: WindowId) -> crate::model::WinSize {
    use crate::model::WinSize;

    let fallback = runtime
        .state
        .get_untracked()
        .window(window_id)
        .map(|w| w.size_or_default())
        .unwrap_or_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return fallback;
    };
    let Some(element) = document.get_element_by_id(&window_dom_id(window_id)) else {
        return fallback;
    };
    let rect = element.get_bounding_client_rect();
    let (w, h) = (rect.width() as i32, rect.height() as i32);
    if w > 0 && h > 0 {
        WinSize { w, h }
    } else {
        fallback
    }
}

/// Points the embedded viewer at its configured resource and fires the
/// metadata fetch. Neither step is awaited by the window manager.
fn hydrate_document_viewer(runtime: ShellRuntimeContext, window_id: WindowId) {
    let Some(spec) = manifest::window_spec(window_id) else {
        return;
    };
    let WindowContent::DocumentViewer { src } = spec.content else {
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(frame) = document
                .get_element_by_id(&viewer_frame_dom_id(window_id))
                .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            {
                if frame.get_attribute("src").as_deref() != Some(src) {
                    if let Err(err) = frame.set_attribute("src", src) {
                        logging::warn!("viewer hydration failed for {window_id}: {err:?}");
                    }
                }
            }
        }

        wasm_bindgen_futures::spawn_local(async move {
            let meta = crate::content::fetch_document_meta(src).await;
            runtime.dispatch_action(ShellAction::ApplyDocumentMeta { window_id, meta });
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (runtime, src);
        logging::log!("viewer hydration skipped outside the browser: {window_id}");
    }
}
