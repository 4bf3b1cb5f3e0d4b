//! Window icon classification and rendering.
//!
//! Manifest icon values are either an inline glyph (usually an emoji) or a
//! path to an image asset. Classification is heuristic: a string that looks
//! like a path (contains `/` or `.`) is an image unless it contains a
//! pictographic character, in which case it is rendered literally.

use leptos::*;

/// Glyph used when a window declares no icon or an unusable one.
pub const DEFAULT_WINDOW_GLYPH: &str = "🗔";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    Glyph(String),
    Image(String),
}

impl IconRef {
    pub fn classify(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Glyph(DEFAULT_WINDOW_GLYPH.to_string());
        }
        let looks_like_path = raw.contains('/') || raw.contains('.');
        if looks_like_path && !raw.chars().any(is_pictographic) {
            Self::Image(raw.to_string())
        } else {
            Self::Glyph(raw.to_string())
        }
    }
}

/// Approximation of the `Extended_Pictographic` property covering the
/// symbol blocks the shell actually uses for glyph icons.
fn is_pictographic(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'
        | '\u{2600}'..='\u{27BF}'
        | '\u{2B00}'..='\u{2BFF}'
        | '\u{2190}'..='\u{21FF}'
        | '\u{FE0F}'
    )
}

/// Renders a window icon as either an `<img>` or an inline glyph span.
#[component]
pub fn WindowIcon(icon: &'static str) -> impl IntoView {
    match IconRef::classify(icon) {
        IconRef::Image(src) => view! {
            <img class="task-icn" src=src alt="" aria-hidden="true" />
        }
        .into_view(),
        IconRef::Glyph(glyph) => view! {
            <span class="task-glyph" aria-hidden="true">{glyph}</span>
        }
        .into_view(),
    }
}
