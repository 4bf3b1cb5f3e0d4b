use crate::content::DocumentMeta;
use crate::manifest::{self, WindowContent};

/// Height reserved for the taskbar at the bottom of the browser viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 40;
/// Stacking order assigned to the first focused window.
pub const INITIAL_Z_ORDER: u32 = 20;
/// Fallback window dimensions used before the first layout measurement.
pub const DEFAULT_WINDOW_WIDTH: i32 = 420;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

/// Stable identifier for one managed window, assigned by the static manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub &'static str);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSize {
    pub w: i32,
    pub h: i32,
}

impl Default for WinSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Desktop area available to windows: browser viewport minus the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub w: i32,
    pub h: i32,
}

/// State record for one window. Descriptors are created once at init from
/// the manifest and only toggled afterwards; there is no dynamic creation.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: &'static str,
    pub open: bool,
    /// Minimized implies open: the window keeps its taskbar entry but is
    /// not painted.
    pub minimized: bool,
    pub active: bool,
    pub position: Point,
    /// Last-known rendered dimensions, populated on first layout.
    pub size: Option<WinSize>,
    pub z_order: u32,
    /// Guards one-time auto placement across repeated opens.
    pub ever_opened: bool,
    /// Set once the user drags the window; disables auto placement and
    /// re-pinning for the rest of the session.
    pub user_moved: bool,
    /// Resource metadata display state for document-viewer windows.
    pub doc_meta: Option<DocumentMeta>,
}

impl WindowDescriptor {
    pub fn visible(&self) -> bool {
        self.open && !self.minimized
    }

    pub fn size_or_default(&self) -> WinSize {
        self.size.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    /// The window registry, in manifest order. The id set is closed after
    /// initialization.
    pub windows: Vec<WindowDescriptor>,
    /// Monotonic stacking counter; bumped on every focus.
    pub z_top: u32,
    /// Running index for right-edge stagger placement.
    pub spawn_index: usize,
    pub start_menu_open: bool,
    pub selected_icon: Option<WindowId>,
    /// Staged content for the shared popup window.
    pub popup_title: String,
    pub popup_body: String,
}

impl Default for ShellState {
    fn default() -> Self {
        let windows = manifest::window_manifest()
            .iter()
            .map(|spec| WindowDescriptor {
                id: spec.id,
                title: spec.title,
                icon: spec.icon,
                open: false,
                minimized: false,
                active: false,
                position: spec.initial_position,
                size: spec.initial_size,
                z_order: INITIAL_Z_ORDER,
                ever_opened: false,
                user_moved: false,
                doc_meta: match spec.content {
                    WindowContent::DocumentViewer { .. } => Some(DocumentMeta::default()),
                    _ => None,
                },
            })
            .collect();

        Self {
            windows,
            z_top: INITIAL_Z_ORDER,
            spawn_index: 0,
            start_menu_open: false,
            selected_icon: None,
            popup_title: String::new(),
            popup_body: String::new(),
        }
    }
}

impl ShellState {
    pub fn window(&self, id: WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.active && w.visible())
            .map(|w| w.id)
    }

    /// Taskbar button source: open windows in registry order, minus the
    /// manifest's taskbar-excluded entries (the shared popup).
    pub fn taskbar_windows(&self) -> Vec<WindowDescriptor> {
        self.windows
            .iter()
            .filter(|w| w.open && manifest::window_spec(w.id).is_some_and(|s| s.taskbar_visible))
            .cloned()
            .collect()
    }
}

/// An in-progress titlebar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: Point,
    pub position_start: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
