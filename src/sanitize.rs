//! Title sanitization for the two report destinations. The HTML path keeps
//! quotes and non-ASCII text; the chat path trades fidelity for a string that
//! survives a chat-message payload and a scripting-string context. The two
//! pipelines stay separate: merging them would either leak non-ASCII into the
//! chat destination or over-escape the HTML one.

/// Titles longer than this are cut with an ellipsis marker.
pub const TITLE_MAX: usize = 80;

/// Truncate to `max` characters total, ellipsis included.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}

/// Title form safe to embed in the HTML report. Only the angle brackets
/// become entities; quotes survive.
pub fn markup_title(title: &str) -> String {
    truncate(title, TITLE_MAX)
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Title form safe inside a chat message and a scripting-string context.
/// Curly and straight quotes go away entirely, backslashes become forward
/// slashes, literal `$` is quoted, the result is JS-string encoded and then
/// reduced to ASCII. Lossy for non-ASCII titles.
pub fn chat_title(title: &str) -> String {
    let cleaned = truncate(title, TITLE_MAX)
        .replace(['\u{201c}', '\u{201d}', '"', '\''], "")
        .replace('\\', "/")
        .replace('$', "'$'");
    js_string_encode(&cleaned)
        .chars()
        .filter(|c| c.is_ascii())
        .collect()
}

/// English count phrase: "1 comment", "7 comments".
pub fn comment_phrase(count: u32) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}

/// Minimal JS string-literal encoder: backslashes, quotes, and control
/// characters. Everything else passes through untouched.
fn js_string_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
