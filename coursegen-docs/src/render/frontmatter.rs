//! YAML frontmatter helpers.

use std::sync::LazyLock;

use regex::Regex;

static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n").expect("valid regex"));

/// A frontmatter block located at the start of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// YAML between the `---` fences
    pub yaml: &'a str,
    /// Byte offset just past the closing `---\n`
    pub end: usize,
}

/// Locates the leading `---` fenced YAML block of `document`.
#[must_use]
pub fn split_frontmatter(document: &str) -> Option<Frontmatter<'_>> {
    let caps = FRONTMATTER.captures(document)?;
    let whole = caps.get(0)?;
    let yaml = caps.get(1)?;
    Some(Frontmatter {
        yaml: yaml.as_str(),
        end: whole.end(),
    })
}

/// Quote a YAML string value if it contains special characters or would
/// otherwise be read back as a number, boolean or null.
#[must_use]
pub fn quote_yaml_string(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.contains(':')
        || s.contains('#')
        || s.contains('"')
        || s.contains(char::is_control)
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.starts_with(['[', '{', '&', '*', '!', '|', '>', '\'', '%', '@', '`', '-', '?'])
        || !scalar_reads_as(s, s);
    if needs_quotes {
        double_quoted(s)
    } else {
        s.to_string()
    }
}

/// Returns `true` if the YAML scalar `text` loads as the string `expected`.
///
/// `'1105'`, `"1105"` and `1105` are distinct texts; only the first two
/// load as the string `1105`.
#[must_use]
pub fn scalar_reads_as(text: &str, expected: &str) -> bool {
    matches!(
        serde_yaml::from_str::<serde_yaml::Value>(text),
        Ok(serde_yaml::Value::String(ref loaded)) if loaded == expected
    )
}

/// Always renders `s` as a double-quoted YAML scalar on a single line.
#[must_use]
pub fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
