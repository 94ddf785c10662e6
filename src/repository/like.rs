//! SQL `LIKE` pattern matching for name queries.
//!
//! `%` matches any run of characters (including none), `_` matches exactly
//! one character, and `\` makes the next character literal (`\%`, `\_`).
//! Everything else matches itself, case-sensitively.

use regex::Regex;

/// A `LIKE` pattern compiled to an anchored regular expression.
#[derive(Debug, Clone)]
pub struct LikePattern {
    regex: Regex,
}

impl LikePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&like_to_regex(pattern))?;
        Ok(Self { regex })
    }

    /// Returns true when `value` matches the whole pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

fn like_to_regex(pattern: &str) -> String {
    // (?s) lets `_` and `%` span newlines
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push_str("(?s)^");

    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => regex.push_str(".*"),
            '_' => regex.push('.'),
            '\\' => {
                // a trailing backslash matches itself
                let literal = chars.next().unwrap_or('\\');
                regex.push_str(&regex::escape(literal.encode_utf8(&mut [0; 4])));
            }
            c => regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex.push('$');
    regex
}
