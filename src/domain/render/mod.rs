pub mod card;
pub mod pagination;
pub mod sidebar;

pub use card::render_card;
pub use pagination::render_pagination;
pub use sidebar::render_sidebar;

use chrono::{DateTime, Utc};
use html2text::from_read;
use std::sync::OnceLock;

/// Display length cap for plain-text summaries.
pub const SUMMARY_MAX_CHARS: usize = 160;

/// Entity-escape text before embedding it in a fragment. Applied to every
/// externally sourced field so a hostile feed cannot inject markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn whitespace_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"\s+").expect("valid regex"))
}

/// Strip markup from a summary and collapse runs of whitespace.
pub fn strip_summary(html: &str) -> String {
    let plain = from_read(html.as_bytes(), usize::MAX);
    whitespace_re().replace_all(&plain, " ").trim().to_string()
}

/// Cap `text` at `SUMMARY_MAX_CHARS` characters, appending the truncation
/// marker when something was cut. Counts characters, not bytes, so a
/// multi-byte character is never split.
pub fn trim_summary(text: &str) -> String {
    let normalized = whitespace_re().replace_all(text, " ").trim().to_string();
    if normalized.chars().count() > SUMMARY_MAX_CHARS {
        let cut: String = normalized.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        normalized
    }
}

/// Strip and cap in one step, as the loaders need it.
pub fn summary_text(html: &str) -> String {
    trim_summary(&strip_summary(html))
}

/// Short date line, matching the site's ko-KR card format.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y. %-m. %-d.").to_string()
}

/// Long date line for detail pages.
pub fn format_date_long(date: &DateTime<Utc>) -> String {
    date.format("%Y년 %-m월 %-d일").to_string()
}
