//! Translation of `LIKE` patterns into query-string and regular-expression syntax.

/// Wildcard characters declared by a `LIKE` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSyntax {
    pub wildcard: char,
    pub single_char: char,
    pub escape: char,
}

impl LikeSyntax {
    /// Query-string syntax: `*`, `?`, backslash escapes. A trailing escape
    /// character is dropped.
    pub fn to_query_string(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 4);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c == self.escape {
                if let Some(next) = chars.next() {
                    out.push('\\');
                    out.push(next);
                }
            } else if c == self.wildcard {
                out.push('*');
            } else if c == self.single_char {
                out.push('?');
            } else if matches!(c, '*' | '?' | '\\') {
                out.push('\\');
                out.push(c);
            } else {
                out.push(c);
            }
        }

        out
    }

    /// Regular expression matching the whole value.
    pub fn to_regex(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c == self.escape {
                if let Some(next) = chars.next() {
                    push_regex_literal(&mut out, next);
                }
            } else if c == self.wildcard {
                out.push_str(".*");
            } else if c == self.single_char {
                out.push('.');
            } else {
                push_regex_literal(&mut out, c);
            }
        }

        out
    }
}

fn push_regex_literal(out: &mut String, c: char) {
    const RESERVED: &[char] = &[
        '.', '?', '+', '*', '|', '{', '}', '[', ']', '(', ')', '"', '\\', '#', '@', '&', '<', '>',
        '~', '^', '$',
    ];
    if RESERVED.contains(&c) {
        out.push('\\');
    }
    out.push(c);
}
