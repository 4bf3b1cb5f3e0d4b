//! Static window contents. The manager only shows, hides and positions
//! these; none of them hold window-management state.

use super::*;
use crate::host::viewer_frame_dom_id;
use crate::manifest::{ABOUT_WINDOW, PROJECTS_WINDOW, RESUME_WINDOW};
use crate::model::WindowId;

#[component]
pub(super) fn NotesContent() -> impl IntoView {
    let runtime = use_shell_runtime();

    view! {
        <div class="notes-body">
            <p>"Welcome. This desktop is my portfolio: poke around, drag things, lose the popup behind a window."</p>
            <ul>
                <li>"Systems and web tooling, mostly backend."</li>
                <li>"Currently tinkering with build pipelines and tiny UIs."</li>
            </ul>
            <div class="notes-chips">
                <button
                    class="chip"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(ShellAction::OpenWindow {
                            window_id: ABOUT_WINDOW,
                            center: false,
                        });
                    }
                >
                    "About me"
                </button>
                <button
                    class="chip"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(ShellAction::OpenWindow {
                            window_id: RESUME_WINDOW,
                            center: false,
                        });
                    }
                >
                    "Resume"
                </button>
                <button
                    class="chip"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(ShellAction::OpenWindow {
                            window_id: PROJECTS_WINDOW,
                            center: false,
                        });
                    }
                >
                    "Projects"
                </button>
            </div>
        </div>
    }
}

#[component]
pub(super) fn AboutContent() -> impl IntoView {
    view! {
        <div class="about-body">
            <p>"Software engineer with a soft spot for window managers that fit in one file."</p>
            <p>"This shell is a re-creation of a certain mid-90s desktop, built for the fun of the invariants."</p>
        </div>
    }
}

struct ProjectEntry {
    name: &'static str,
    blurb: &'static str,
    details: &'static str,
}

static PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        name: "deskshell",
        blurb: "This site: a retro desktop shell.",
        details: "Draggable windows, a taskbar and a start menu, driven by a single pure reducer.",
    },
    ProjectEntry {
        name: "pipeline-gardener",
        blurb: "CI tending bot.",
        details: "Watches flaky jobs, retries with backoff, and files a report when a job goes from flaky to dead.",
    },
    ProjectEntry {
        name: "kvetch",
        blurb: "Tiny key-value store.",
        details: "Log-structured storage experiment with a deliberately rude name and a surprisingly polite API.",
    },
];

#[component]
pub(super) fn ProjectsContent() -> impl IntoView {
    let runtime = use_shell_runtime();

    view! {
        <ul class="projects-body">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <li class="project-row">
                            <span class="project-name">{project.name}</span>
                            <span class="project-blurb">{project.blurb}</span>
                            <button
                                class="info-btn"
                                aria-label=format!("About {}", project.name)
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    open_info_popup(runtime, project.name, project.details);
                                }
                            >
                                "i"
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub(super) fn DocumentViewerContent(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();
    // Placeholders until the metadata fetch resolves; `Unknown` on failure.
    let meta = Signal::derive(move || {
        runtime
            .state
            .get()
            .window(window_id)
            .and_then(|w| w.doc_meta.clone())
            .unwrap_or_default()
    });

    view! {
        <div class="resume-body">
            <iframe
                id=viewer_frame_dom_id(window_id)
                class="resume-frame"
                title="Resume document"
            ></iframe>
            <div class="resume-status">
                <span>{move || meta.get().size_label}</span>
                <span>{move || meta.get().updated_label}</span>
            </div>
        </div>
    }
}

#[component]
pub(super) fn PopupContent() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <div class="popup-body">
            <h2>{move || state.get().popup_title}</h2>
            <p>{move || state.get().popup_body}</p>
        </div>
    }
}
