//! Shared string utility functions for code emission.

/// Uppercase the first character (e.g., "myModule" -> "MyModule").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "MyScope" -> "myScope").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello-world" -> "HelloWorld").
///
/// Hyphens, underscores and dots are treated as word separators. The casing
/// of characters inside a word is preserved.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_', '.'])
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect()
}

/// Convert a string to camelCase (e.g., "hello-world" -> "helloWorld").
pub fn to_camel_case(s: &str) -> String {
    lower_first(&to_pascal_case(s))
}

/// Wrap text into lines no longer than `width` characters.
///
/// Words are never split: a single word longer than `width` ends up on a
/// line of its own. Runs of whitespace collapse to a single space. A width
/// of zero disables wrapping.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap a value in single quotes so it reads back as a single-line string literal.
///
/// Backslashes, single quotes, line terminators (including U+2028 and U+2029)
/// and other control characters are escaped.
pub fn quote_single(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:x}}}", c as u32)),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_char_casing() {
        assert_eq!(upper_first("myModule"), "MyModule");
        assert_eq!(lower_first("MyScope"), "myScope");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar.baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("myModule"), "MyModule");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Hello"), "hello");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("MyScope"), "myScope");
    }

    #[test]
    fn test_word_wrap_short_line() {
        assert_eq!(word_wrap("short line", 100), vec!["short line"]);
    }

    #[test]
    fn test_word_wrap_splits_on_words() {
        let lines = word_wrap("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(lines, vec!["the quick brown", "fox jumps over", "the lazy dog"]);
        assert!(lines.iter().all(|l| l.len() <= 15));
    }

    #[test]
    fn test_word_wrap_long_word() {
        let lines = word_wrap("a supercalifragilistic word", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_word_wrap_disabled() {
        assert_eq!(word_wrap("keep   as is", 0), vec!["keep   as is"]);
    }

    #[test]
    fn test_word_wrap_empty() {
        assert_eq!(word_wrap("", 10), vec![""]);
    }

    #[test]
    fn test_quote_single() {
        assert_eq!(quote_single("Up"), "'Up'");
        assert_eq!(quote_single(""), "''");
        assert_eq!(quote_single("it's"), "'it\\'s'");
        assert_eq!(quote_single("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_quote_single_line_terminators() {
        assert_eq!(quote_single("hello\nworld"), "'hello\\nworld'");
        assert_eq!(quote_single("a\r\nb"), "'a\\r\\nb'");
        assert_eq!(quote_single("col\tcol"), "'col\\tcol'");
        assert_eq!(quote_single("x\u{2028}y\u{2029}z"), "'x\\u2028y\\u2029z'");
        assert_eq!(quote_single("bell\u{7}"), "'bell\\u{7}'");
        assert_eq!(quote_single("nul\0"), "'nul\\u{0}'");
        assert!(!quote_single("a\nb\u{2028}c").contains(|c: char| c == '\n' || c == '\u{2028}'));
    }
}
