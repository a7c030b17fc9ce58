//! Strudel Highlighter WASM Bindings
//!
//! Exposes the highlighter to the browser editor. Structured results cross
//! the boundary as JSON strings.

use serde::Serialize;
use strudel_highlight::StringLocation;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook to log to console
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Highlight a full Strudel source and return the markup.
#[wasm_bindgen(js_name = highlightStrudel)]
pub fn highlight_strudel(code: &str) -> String {
    strudel_highlight::highlight_strudel(code)
}

/// Highlight a full Strudel source and return `{html, strings}` as JSON.
///
/// Each entry of `strings` is `{start, end, contentStart, contentEnd}`, byte
/// offsets into the UTF-8 source. On serialization failure returns
/// `{"html":"","strings":[],"error":"..."}`.
#[wasm_bindgen(js_name = highlightStrudelWithMeta)]
pub fn highlight_strudel_with_meta(code: &str) -> String {
    to_json(
        &strudel_highlight::highlight_strudel_with_meta(code),
        meta_error,
    )
}

/// Highlight a bare mini-notation string whose first byte sits at `base`.
#[wasm_bindgen(js_name = highlightMininotation)]
pub fn highlight_mininotation(content: &str, base: u32) -> String {
    strudel_highlight::highlight_mininotation(content, base)
}

/// The string literal containing byte `offset` as JSON, or `null`.
///
/// On serialization failure returns `{"error":"..."}`.
#[wasm_bindgen(js_name = stringAt)]
pub fn string_at(code: &str, offset: u32) -> String {
    let result = strudel_highlight::highlight_strudel_with_meta(code);
    let loc: Option<&StringLocation> = result.string_at(offset);
    to_json(&loc, location_error)
}

/// Serialize `value`, or build the caller's error shape from the message.
fn to_json<T: Serialize>(value: &T, fallback: fn(&str) -> String) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| fallback(&escape_json(&format!("Serialization error: {e}"))))
}

/// Empty `highlightStrudelWithMeta` result carrying an error.
fn meta_error(message: &str) -> String {
    format!(r#"{{"html":"","strings":[],"error":"{message}"}}"#)
}

/// `stringAt` error; kept distinct from `null`, which means no literal.
fn location_error(message: &str) -> String {
    format!(r#"{{"error":"{message}"}}"#)
}

fn escape_json(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    format!("strudel-highlight {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_is_json() {
        assert_eq!(
            highlight_strudel_with_meta("n('0')"),
            concat!(
                r#"{"html":"<span class=\"hl-function\" data-start=\"0\" data-end=\"1\">n</span>"#,
                r#"<span class=\"hl-paren\" data-start=\"1\" data-end=\"2\">(</span>"#,
                r#"<span class=\"hl-string\">'<span class=\"hl-number\" data-start=\"3\" data-end=\"4\">0</span>'</span>"#,
                r#"<span class=\"hl-paren\" data-start=\"5\" data-end=\"6\">)</span>","#,
                r#""strings":[{"start":2,"end":5,"contentStart":3,"contentEnd":4}]}"#,
            )
        );
    }

    #[test]
    fn string_at_is_json_or_null() {
        assert_eq!(
            string_at("s('bd')", 3),
            r#"{"start":2,"end":6,"contentStart":3,"contentEnd":5}"#
        );
        assert_eq!(string_at("s('bd')", 0), "null");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("bad \"value\"\nhere"))
        }
    }

    #[test]
    fn meta_failure_keeps_the_meta_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&Unserializable, meta_error)).unwrap();
        assert_eq!(json["html"], "");
        assert_eq!(json["strings"], serde_json::json!([]));
        assert_eq!(json["error"], "Serialization error: bad \"value\"\nhere");
    }

    #[test]
    fn location_failure_is_an_error_object() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&Unserializable, location_error)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Serialization error: bad \"value\"\nhere" })
        );
    }
}
