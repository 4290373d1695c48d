//! Pre-escaped output and script-safe literal encoding.

use std::fmt;

use gaq_core::GaqResult;
use serde_json::Value;

/// Markup that is already safe to write into an HTML page verbatim.
///
/// Only this crate's renderers construct it, so a template engine can emit
/// it unescaped without double-escaping the generated JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Wrap a script body in a `<script type="text/javascript">` element.
pub(crate) fn script_tag(body: &str) -> SafeHtml {
    SafeHtml::new(format!(
        "<script type=\"text/javascript\">\n{body}\n</script>"
    ))
}

/// Encode a value as a JavaScript literal that cannot terminate the
/// enclosing `<script>` element or string.
///
/// JSON is valid JavaScript; the characters that matter to the HTML parser
/// only ever occur inside string literals, where `\uXXXX` escapes keep
/// their meaning.
pub fn js_literal(value: &Value) -> GaqResult<String> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\'' => out.push_str("\\u0027"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}
