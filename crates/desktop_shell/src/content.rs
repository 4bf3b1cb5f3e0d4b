//! Document-viewer metadata hook.
//!
//! When a document-viewer window opens, the host points the embedded viewer
//! at its resource and fires a HEAD request for `content-length` and
//! `last-modified`. The request is never awaited by the window manager;
//! failure degrades to placeholder text.

/// Display state for a viewed document's metadata line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    /// e.g. `PDF • 127 KB`, or `PDF • …` while pending/unresolved.
    pub size_label: String,
    /// e.g. `Last updated: 2026-08-24 13:05`, or `Unknown` on failure.
    pub updated_label: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            size_label: size_label(None),
            updated_label: "Last updated: …".to_string(),
        }
    }
}

impl DocumentMeta {
    /// Metadata shown when the fetch failed or headers were unusable.
    pub fn unresolved() -> Self {
        Self {
            size_label: size_label(None),
            updated_label: updated_label(None),
        }
    }
}

/// Local-time fields of a parsed `Last-Modified` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

pub fn size_label(size_bytes: Option<u64>) -> String {
    match size_bytes {
        Some(bytes) => format!("PDF • {} KB", (bytes as f64 / 1024.0).round() as u64),
        None => "PDF • …".to_string(),
    }
}

pub fn updated_label(parts: Option<DateParts>) -> String {
    match parts {
        Some(d) => format!(
            "Last updated: {:04}-{:02}-{:02} {:02}:{:02}",
            d.year, d.month, d.day, d.hour, d.minute
        ),
        None => "Last updated: Unknown".to_string(),
    }
}

pub fn document_meta(size_bytes: Option<u64>, modified: Option<DateParts>) -> DocumentMeta {
    DocumentMeta {
        size_label: size_label(size_bytes),
        updated_label: updated_label(modified),
    }
}

/// Issues the HEAD request and builds the resulting metadata display state.
///
/// Any network or header failure resolves to [`DocumentMeta::unresolved`];
/// this function never returns an error.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_document_meta(src: &str) -> DocumentMeta {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return DocumentMeta::unresolved();
    };

    let init = web_sys::RequestInit::new();
    init.set_method("HEAD");
    init.set_cache(web_sys::RequestCache::NoCache);
    let Ok(request) = web_sys::Request::new_with_str_and_init(src, &init) else {
        return DocumentMeta::unresolved();
    };

    let Ok(response) = JsFuture::from(window.fetch_with_request(&request)).await else {
        return DocumentMeta::unresolved();
    };
    let Ok(response) = response.dyn_into::<web_sys::Response>() else {
        return DocumentMeta::unresolved();
    };

    let headers = response.headers();
    let size_bytes = headers
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|len| len.parse::<u64>().ok());
    let modified = headers
        .get("last-modified")
        .ok()
        .flatten()
        .and_then(|value| parse_http_date(&value));

    document_meta(size_bytes, modified)
}

/// Parses an HTTP date header into local-time parts via `js_sys::Date`,
/// rejecting anything the Date constructor cannot make sense of.
#[cfg(target_arch = "wasm32")]
fn parse_http_date(value: &str) -> Option<DateParts> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(value));
    if date.get_time().is_nan() {
        return None;
    }
    Some(DateParts {
        year: date.get_full_year(),
        month: date.get_month() + 1,
        day: date.get_date(),
        hour: date.get_hours(),
        minute: date.get_minutes(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_label_rounds_to_whole_kilobytes() {
        assert_eq!(size_label(Some(130_048)), "PDF • 127 KB");
        assert_eq!(size_label(Some(1_500)), "PDF • 1 KB");
        assert_eq!(size_label(None), "PDF • …");
    }

    #[test]
    fn updated_label_formats_or_reports_unknown() {
        let parts = DateParts {
            year: 2026,
            month: 8,
            day: 24,
            hour: 9,
            minute: 5,
        };
        assert_eq!(updated_label(Some(parts)), "Last updated: 2026-08-24 09:05");
        assert_eq!(updated_label(None), "Last updated: Unknown");
    }

    #[test]
    fn pending_and_unresolved_states_differ_only_in_the_updated_line() {
        let pending = DocumentMeta::default();
        let failed = DocumentMeta::unresolved();
        assert_eq!(pending.size_label, failed.size_label);
        assert_eq!(pending.updated_label, "Last updated: …");
        assert_eq!(failed.updated_label, "Last updated: Unknown");
    }
}
