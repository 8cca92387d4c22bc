//! Fitting text into columns: splitting, truncating, and wrapping single lines.

use crate::units::*;

/// Split a block of text into the lines it will be drawn as. Surrounding blank lines and
/// whitespace are dropped, so text written as an indented multi-line string literal lays
/// out the way it reads.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Drop trailing characters from `line` until `measure` says it fits within `max_width`.
/// The result is always a prefix of `line`, and is empty if not even one character fits.
pub fn truncate_to_width<F>(line: &str, max_width: Mm, measure: F) -> &str
where
    F: Fn(&str) -> Mm,
{
    let mut end = line.len();
    while end > 0 && measure(&line[..end]) > max_width {
        end = line[..end]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }
    &line[..end]
}

/// How many glyphs `reference_width` wide fit side by side in `available`. Used to clip code
/// lines without measuring every line, on the assumption that code is set in a fixed-width
/// face where every glyph is as wide as the reference glyph.
pub fn char_budget(available: Mm, reference_width: Mm) -> usize {
    if reference_width <= Mm(0.0) {
        return usize::MAX;
    }
    (available / reference_width).floor().max(0.0) as usize
}

/// The first `budget` characters of `line`
pub fn truncate_chars(line: &str, budget: usize) -> &str {
    match line.char_indices().nth(budget) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// Estimate how many lines text `text_width` wide needs when wrapped into `available`. Always
/// at least one line; a partial line counts as a whole one.
pub fn estimate_lines(text_width: Mm, available: Mm) -> usize {
    if available <= Mm(0.0) {
        return 1;
    }
    (text_width / available).floor().max(0.0) as usize + 1
}

/// Word-wrap `text` into lines no wider than `max_width`.
///
/// Lines break at spaces; a word that is wider than a whole line on its own is broken between
/// characters instead, so the result never overflows (unless a single character is wider than
/// `max_width`, in which case every line holds one character).
pub fn wrap_words<F>(text: &str, max_width: Mm, measure: F) -> Vec<String>
where
    F: Fn(&str) -> Mm,
{
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) <= max_width {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        // break up words that can't fit on a line of their own
        let mut rest = word;
        while measure(rest) > max_width {
            let head = truncate_to_width(rest, max_width, &measure);
            let split = if head.is_empty() {
                rest.chars().next().map(char::len_utf8).unwrap_or(rest.len())
            } else {
                head.len()
            };
            if split >= rest.len() {
                break;
            }
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
        line = rest.to_string();
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFont;

    fn helvetica(text: &str) -> Mm {
        BuiltinFont::Helvetica.width_of_text(text, Pt(6.0)).into()
    }

    /// every character is exactly 1mm wide
    fn unit(text: &str) -> Mm {
        Mm(text.chars().count() as f32)
    }

    #[test]
    fn can_split_lines() {
        assert_eq!(split_lines("\n  first\r\nsecond\n\n"), vec!["first", "second"]);
        assert_eq!(split_lines("only"), vec!["only"]);
    }

    #[test]
    fn truncation_returns_a_fitting_prefix() {
        let line = "Geospatial index: QuadTree or Geohash, matched to the nearest driver";
        for max in [0.5, 5.0, 20.0, 40.0, 1000.0] {
            let max = Mm(max);
            let truncated = truncate_to_width(line, max, helvetica);
            assert!(line.starts_with(truncated));
            assert!(helvetica(truncated) <= max);
            if truncated.len() < line.len() {
                // one more character would not have fit
                let next = &line[..line[truncated.len()..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| truncated.len() + i)
                    .unwrap_or(line.len())];
                assert!(helvetica(next) > max);
            }
        }
        assert_eq!(truncate_to_width(line, Mm(1000.0), helvetica), line);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let truncated = truncate_to_width("h\u{E9}llo w\u{F6}rld", Mm(4.0), unit);
        assert_eq!(truncated, "h\u{E9}ll");
    }

    #[test]
    fn can_budget_characters() {
        assert_eq!(char_budget(Mm(10.0), Mm(3.0)), 3);
        assert_eq!(char_budget(Mm(2.0), Mm(3.0)), 0);
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("\u{3BB}x.x", 1), "\u{3BB}");
    }

    #[test]
    fn can_estimate_lines() {
        assert_eq!(estimate_lines(Mm(0.0), Mm(10.0)), 1);
        assert_eq!(estimate_lines(Mm(9.0), Mm(10.0)), 1);
        assert_eq!(estimate_lines(Mm(10.0), Mm(10.0)), 2);
        assert_eq!(estimate_lines(Mm(31.0), Mm(10.0)), 4);
    }

    #[test]
    fn can_wrap_at_spaces() {
        let lines = wrap_words("count, isEmpty, startIndex, endIndex", Mm(16.0), unit);
        assert_eq!(lines, vec!["count, isEmpty,", "startIndex,", "endIndex"]);
    }

    #[test]
    fn long_words_break_between_characters() {
        let lines = wrap_words("a merge(_:uniquingKeysWith:) b", Mm(10.0), unit);
        assert_eq!(lines, vec!["a", "merge(_:un", "iquingKeys", "With:) b"]);
        assert!(lines.iter().all(|line| unit(line) <= Mm(10.0)));
    }

    #[test]
    fn wrapping_nothing_gives_no_lines() {
        assert!(wrap_words("", Mm(10.0), unit).is_empty());
        assert_eq!(wrap_words("x", Mm(0.0), unit), vec!["x"]);
    }
}
