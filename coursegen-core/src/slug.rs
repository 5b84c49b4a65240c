//! Filename slug generation.
//!
//! Every tool that needs the file name of a session or an activity
//! recomputes it from the course plan, so the mapping from
//! `(prefix, text)` to a file name must be a pure function.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::SlugError;

/// Slugs longer than this are cut down to [`MAX_SLUG_TOKENS`] words.
pub const MAX_SLUG_LEN: usize = 50;

/// Number of hyphen-delimited words kept when a slug is too long.
pub const MAX_SLUG_TOKENS: usize = 6;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// File name prefix, usually a week number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    /// Rendered zero-padded to two digits
    Number(i64),
    /// Rendered verbatim
    Text(String),
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:02}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Prefix {
    fn from(n: u32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<i32> for Prefix {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<i64> for Prefix {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Prefix {
    /// Numeric text becomes a number; anything else is kept as text.
    fn from(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::Number)
    }
}

impl From<String> for Prefix {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Converts free text into a lowercase ASCII slug.
///
/// # Rules
/// 1. NFKD-decompose and drop everything that is not ASCII
/// 2. Strip characters other than word characters, whitespace and `-`
/// 3. Trim, lowercase, collapse whitespace/hyphen runs into one `-`
/// 4. Above [`MAX_SLUG_LEN`] characters keep the first
///    [`MAX_SLUG_TOKENS`] words, so no word is cut in half
///
/// The result may be empty.
#[must_use]
pub fn slugify(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    let stripped = UNSAFE_CHARS.replace_all(&ascii, "");
    let lowered = stripped.trim().to_lowercase();
    let slug = SEPARATOR_RUNS.replace_all(&lowered, "-").into_owned();

    if slug.len() > MAX_SLUG_LEN {
        slug.split('-')
            .take(MAX_SLUG_TOKENS)
            .collect::<Vec<_>>()
            .join("-")
    } else {
        slug
    }
}

/// Builds the file name `"{prefix}-{slug}.md"` for a title or description.
///
/// # Errors
///
/// Returns `SlugError::EmptySlug` if nothing of `text` survives
/// sanitization, rather than producing an ambiguous `"NN-.md"`.
pub fn generate_filename(prefix: impl Into<Prefix>, text: &str) -> Result<String, SlugError> {
    let slug = slugify(text);
    if slug.is_empty() {
        return Err(SlugError::EmptySlug {
            text: text.to_string(),
        });
    }
    Ok(format!("{}-{slug}.md", prefix.into()))
}

/// Builds file names for a batch of texts sharing one prefix.
///
/// A name already taken earlier in the batch gets a `-2`, `-3`, ... suffix
/// in front of `.md`. The result depends only on the order of `texts`, so
/// separate tools recomputing the same batch agree on every name.
pub fn assign_filenames<S: AsRef<str>>(
    prefix: impl Into<Prefix>,
    texts: &[S],
) -> Vec<Result<String, SlugError>> {
    let prefix = prefix.into();
    let mut used: HashSet<String> = HashSet::new();

    texts
        .iter()
        .map(|text| {
            let name = generate_filename(prefix.clone(), text.as_ref())?;
            let unique = if used.contains(&name) {
                let stem = name.strip_suffix(".md").unwrap_or(&name);
                let mut index = 2;
                loop {
                    let candidate = format!("{stem}-{index}.md");
                    if !used.contains(&candidate) {
                        break candidate;
                    }
                    index += 1;
                }
            } else {
                name
            };
            used.insert(unique.clone());
            Ok(unique)
        })
        .collect()
}
