use regex::Regex;
use std::sync::LazyLock;

/// Markup punctuation removed before previewing. This is a character strip, not a parser.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*_>`\[\]()\-!]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Appended when the preview is cut.
const PLACEHOLDER: &str = " …";

pub const DEFAULT_WIDTH: usize = 250;

/// Plain one-line preview of `text`, at most `width` characters long.
///
/// Cuts happen between words when at least one word fits; a single word longer
/// than the budget is hard-cut instead.
pub fn summarize(text: &str, width: usize) -> String {
    let stripped = MARKUP_RE.replace_all(text, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let plain = collapsed.trim();

    if plain.chars().count() <= width {
        return plain.to_string();
    }

    let placeholder_len = PLACEHOLDER.chars().count();
    if width <= placeholder_len {
        let cut: String = plain.chars().take(width).collect();
        return cut.trim_end().to_string();
    }

    let budget = width - placeholder_len;
    let mut preview = String::new();
    let mut used = 0;
    for word in plain.split(' ') {
        let word_len = word.chars().count();
        let needed = if used == 0 { word_len } else { used + 1 + word_len };
        if needed > budget {
            break;
        }
        if used > 0 {
            preview.push(' ');
        }
        preview.push_str(word);
        used = needed;
    }

    if used == 0 {
        // Not even one word fits.
        let mut cut: String = plain.chars().take(width - 1).collect();
        cut.push('…');
        return cut;
    }

    preview.push_str(PLACEHOLDER);
    preview
}
