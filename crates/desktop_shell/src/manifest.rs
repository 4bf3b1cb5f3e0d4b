//! Static window manifest.
//!
//! The manifest is the closed set of windows the shell manages. Descriptors
//! are built from it once at init; ids never appear or disappear afterwards.

use crate::model::{Point, WinSize, WindowId};

pub const NOTES_WINDOW: WindowId = WindowId("win-notes");
pub const ABOUT_WINDOW: WindowId = WindowId("win-about");
pub const PROJECTS_WINDOW: WindowId = WindowId("win-projects");
pub const RESUME_WINDOW: WindowId = WindowId("win-resume");
pub const POPUP_WINDOW: WindowId = WindowId("popup");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowContent {
    Notes,
    About,
    Projects,
    /// Embedded viewer pointed at `src`, with async size/last-modified
    /// metadata display.
    DocumentViewer { src: &'static str },
    /// The shared popup; title and body are staged per trigger.
    Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub id: WindowId,
    pub title: &'static str,
    /// Glyph or image path, classified by [`crate::icons::IconRef`].
    pub icon: &'static str,
    pub initial_position: Point,
    pub initial_size: Option<WinSize>,
    /// Pinned windows are re-placed at the fixed left offset on every
    /// viewport resize until the user drags them.
    pub pinned: bool,
    pub show_on_desktop: bool,
    pub desktop_label: &'static str,
    pub show_in_launcher: bool,
    pub taskbar_visible: bool,
    pub open_on_boot: bool,
    pub content: WindowContent,
}

static WINDOW_MANIFEST: [WindowSpec; 5] = [
    WindowSpec {
        id: NOTES_WINDOW,
        title: "Notes",
        icon: "🗒",
        initial_position: Point { x: 80, y: 60 },
        initial_size: Some(WinSize { w: 640, h: 380 }),
        pinned: true,
        show_on_desktop: true,
        desktop_label: "Notes",
        show_in_launcher: true,
        taskbar_visible: true,
        open_on_boot: true,
        content: WindowContent::Notes,
    },
    WindowSpec {
        id: ABOUT_WINDOW,
        title: "About Me",
        icon: "👤",
        initial_position: Point { x: 96, y: 76 },
        initial_size: None,
        pinned: false,
        show_on_desktop: true,
        desktop_label: "About",
        show_in_launcher: true,
        taskbar_visible: true,
        open_on_boot: false,
        content: WindowContent::About,
    },
    WindowSpec {
        id: PROJECTS_WINDOW,
        title: "Projects",
        icon: "🗂",
        initial_position: Point { x: 112, y: 92 },
        initial_size: None,
        pinned: false,
        show_on_desktop: true,
        desktop_label: "Projects",
        show_in_launcher: true,
        taskbar_visible: true,
        open_on_boot: false,
        content: WindowContent::Projects,
    },
    WindowSpec {
        id: RESUME_WINDOW,
        title: "Resume",
        icon: "assets/icons/resume.png",
        initial_position: Point { x: 128, y: 108 },
        initial_size: None,
        pinned: false,
        show_on_desktop: true,
        desktop_label: "Resume",
        show_in_launcher: true,
        taskbar_visible: true,
        open_on_boot: false,
        content: WindowContent::DocumentViewer {
            src: "assets/resume.pdf",
        },
    },
    WindowSpec {
        id: POPUP_WINDOW,
        title: "Info",
        icon: "ℹ️",
        initial_position: Point { x: 160, y: 140 },
        initial_size: None,
        pinned: false,
        show_on_desktop: false,
        desktop_label: "",
        show_in_launcher: false,
        taskbar_visible: false,
        open_on_boot: false,
        content: WindowContent::Popup,
    },
];

pub fn window_manifest() -> &'static [WindowSpec] {
    &WINDOW_MANIFEST
}

pub fn window_spec(id: WindowId) -> Option<&'static WindowSpec> {
    WINDOW_MANIFEST.iter().find(|spec| spec.id == id)
}

pub fn desktop_icon_windows() -> impl Iterator<Item = &'static WindowSpec> {
    WINDOW_MANIFEST.iter().filter(|spec| spec.show_on_desktop)
}

pub fn launcher_windows() -> impl Iterator<Item = &'static WindowSpec> {
    WINDOW_MANIFEST.iter().filter(|spec| spec.show_in_launcher)
}

pub fn boot_windows() -> impl Iterator<Item = &'static WindowSpec> {
    WINDOW_MANIFEST.iter().filter(|spec| spec.open_on_boot)
}
