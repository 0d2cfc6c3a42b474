//! Picks a heading for a zipped block.
//!
//! The tracker looks for the non-empty line with the lowest indent among the
//! lines seen so far, ignoring lines that do not start with a letter. It keeps
//! the latest such line, except inside a run of consecutive candidates at the
//! same indent, where the first one of the run wins. For prose this tends to
//! pick the first line of the paragraph; for code, the enclosing declaration.

/// Indent reported for blank lines, deeper than any real line.
const BLANK_INDENT: usize = 1 << 30;

fn indent_of(line: &str) -> usize {
    if line.trim().is_empty() {
        return BLANK_INDENT;
    }
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingTracker {
    indent: usize,
    line: String,
    in_run: bool,
}

impl HeadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next line in document order.
    pub fn observe(&mut self, line: &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.chars();
        let starts_with_letter = chars.next().is_some_and(char::is_alphabetic)
            || chars.next().is_some_and(char::is_alphabetic);
        if trimmed.chars().count() <= 2 || !starts_with_letter {
            self.in_run = false;
            return;
        }

        let indent = indent_of(line);
        if !self.line.is_empty() && indent > self.indent {
            self.in_run = false;
            return;
        }
        if indent == self.indent && self.in_run {
            return;
        }
        self.indent = indent;
        self.line = line.to_string();
        self.in_run = true;
    }

    /// The current heading, but only if the first non-blank line of `block`
    /// is nested under it.
    pub fn heading<'a>(&self, block: impl IntoIterator<Item = &'a str>) -> Option<String> {
        if self.line.is_empty() {
            return None;
        }
        let first = block.into_iter().find(|line| !line.trim().is_empty())?;
        let indent = indent_of(first);
        if indent > self.indent || (indent == self.indent && self.in_run) {
            return Some(self.line.trim().to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(lines: &[&str]) -> HeadingTracker {
        let mut tracker = HeadingTracker::new();
        for line in lines {
            tracker.observe(line);
        }
        tracker
    }

    #[test]
    fn test_picks_enclosing_declaration() {
        let tracker = track(&["fn main() {", "    let a = 1;", "    let b = 2;"]);
        assert_eq!(
            tracker.heading(["    let c = 3;"]),
            Some("fn main() {".to_string())
        );
    }

    #[test]
    fn test_no_heading_for_sibling_block() {
        let tracker = track(&["fn main() {", "}", "    inner"]);
        assert_eq!(tracker.heading(["struct Next;"]), None);
    }

    #[test]
    fn test_first_line_of_paragraph_wins() {
        let tracker = track(&["Intro line here", "continues here", "and here"]);
        assert_eq!(
            tracker.heading(["more text"]),
            Some("Intro line here".to_string())
        );
    }

    #[test]
    fn test_ignores_punctuation_and_short_lines() {
        let tracker = track(&["{", "}", "ab", "// c"]);
        assert_eq!(tracker.heading(["    x = 1"]), None);
    }

    #[test]
    fn test_skips_blank_lines_in_block() {
        let tracker = track(&["impl Foo {"]);
        assert_eq!(
            tracker.heading(["", "   ", "    fn bar() {}"]),
            Some("impl Foo {".to_string())
        );
        assert_eq!(tracker.heading(["", ""]), None);
    }
}
