use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BYTES_PER_MB: f64 = 1_048_576.0;
const ELLIPSIS: &str = "...";

/// Megabytes with two decimals, e.g. `"1.00 MB"`.
pub fn format_memory(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Shortens `path` to `max_width` columns, keeping the first and last `/`
/// segments when possible.
///
/// Each further segment appends `/.../<last>` to the first segment. As soon as
/// that grows past `max_width` the result is cut and ends in `...`.
pub fn smart_truncate_path(path: &str, max_width: usize) -> String {
    if path.width() <= max_width {
        return path.to_string();
    }

    let mut segments = path.split('/');
    let first = segments.next().unwrap_or_default();
    let last = path.rsplit('/').next().unwrap_or_default();

    let mut truncated = first.to_string();
    for _ in segments {
        truncated.push_str("/.../");
        truncated.push_str(last);
        if truncated.width() > max_width {
            break;
        }
    }

    // Names without a separator never enter the loop.
    if truncated.width() > max_width {
        return hard_truncate(&truncated, max_width);
    }
    truncated
}

fn hard_truncate(s: &str, max_width: usize) -> String {
    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push_str(ELLIPSIS);
    result
}
