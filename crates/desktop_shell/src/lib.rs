pub mod components;
pub mod content;
pub mod host;
pub mod icons;
pub mod manifest;
pub mod model;
pub mod placement;
pub mod reducer;
pub mod runtime_context;

pub use components::{open_info_popup, DesktopShell};
pub use content::DocumentMeta;
pub use model::*;
pub use reducer::{reduce_shell, ReducerError, RuntimeEffect, ShellAction};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
