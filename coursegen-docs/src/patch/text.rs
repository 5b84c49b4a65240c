//! Line-oriented regex patcher.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{DocumentPatcher, KeyPath, KeyTarget, MarkerBlock, PatchOutcome};
use crate::render::frontmatter::{quote_yaml_string, scalar_reads_as, split_frontmatter};

static SCALAR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lead>[ \t]*(?:-[ \t]+)?[^:#\s][^:#]*:[ \t]*)(?P<value>.*?)(?P<tail>[ \t]+#.*)?$",
    )
    .expect("valid regex")
});

/// Patches documents with anchored regex edits on individual lines.
///
/// YAML sections are located by indentation: a section runs from its
/// `name:` header at column 0 to the next line that starts at column 0
/// with anything other than a comment or a list dash.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPatcher;

impl TextPatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentPatcher for TextPatcher {
    fn replace_block(&self, document: &str, block: &MarkerBlock, payload: &str) -> PatchOutcome {
        let marker = block.marker();
        let rendered = block.render(payload);

        if let Some(start) = document.find(marker) {
            let after = start + marker.len();
            let Some(offset) = document[after..].find(marker) else {
                // A lone marker is ambiguous; inserting would leave three.
                return PatchOutcome::not_found(document);
            };
            let end = after + offset + marker.len();
            let text = format!("{}{rendered}{}", &document[..start], &document[end..]);
            return PatchOutcome::replaced(text, 1);
        }

        match split_frontmatter(document) {
            Some(fm) => {
                let text = format!(
                    "{}\n{rendered}\n{}",
                    &document[..fm.end],
                    &document[fm.end..]
                );
                PatchOutcome::inserted(text)
            }
            None => PatchOutcome::not_found(document),
        }
    }

    fn replace_value(&self, document: &str, target: &KeyTarget, value: &str) -> PatchOutcome {
        let lines = split_lines(document);
        let scope = match &target.section {
            Some(section) => match section_body(&lines, section) {
                Some(body) => body,
                None => return PatchOutcome::not_found(document),
            },
            None => &lines[..],
        };

        let located = match &target.path {
            KeyPath::Key(key) => find_key_line(scope, key),
            KeyPath::FirstListItem { list, field } => find_first_item_line(scope, list, field),
        };

        match located {
            Some(line) => match rewrite_scalar(line, value) {
                Some(new_line) => {
                    let text = format!(
                        "{}{new_line}{}",
                        &document[..line.start],
                        &document[line.end..]
                    );
                    PatchOutcome::replaced(text, 1)
                }
                None => PatchOutcome::not_found(document),
            },
            None => PatchOutcome::not_found(document),
        }
    }

    fn rewrite_file_refs(
        &self,
        document: &str,
        folder: &str,
        prefix: &str,
        file_name: &str,
    ) -> PatchOutcome {
        let pattern = format!(
            r#"(file:[ \t]*{}/)({}-[^\s"']*\.md)"#,
            regex::escape(folder),
            regex::escape(prefix)
        );
        let Ok(re) = Regex::new(&pattern) else {
            return PatchOutcome::not_found(document);
        };

        let count = re.find_iter(document).count();
        if count == 0 {
            return PatchOutcome::not_found(document);
        }
        let text = re
            .replace_all(document, |caps: &Captures<'_>| {
                format!("{}{file_name}", &caps[1])
            })
            .into_owned();
        PatchOutcome::replaced(text, count)
    }
}

// ============================================================================
// Line Scanning
// ============================================================================

/// One line of a document, without its line terminator.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

impl Line<'_> {
    fn indent(&self) -> &str {
        &self.text[..self.text.len() - self.text.trim_start().len()]
    }

    fn is_content(&self) -> bool {
        let trimmed = self.text.trim_start();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    }
}

fn split_lines(document: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    let mut lines = Vec::new();
    for piece in document.split_inclusive('\n') {
        let body = piece.strip_suffix('\n').unwrap_or(piece);
        let body = body.strip_suffix('\r').unwrap_or(body);
        lines.push(Line {
            start: offset,
            end: offset + body.len(),
            text: body,
        });
        offset += piece.len();
    }
    lines
}

/// Returns `true` if `line` is `{key}:` followed only by whitespace, an
/// inline value or a comment.
fn starts_with_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

fn is_bare_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|rest| {
            let rest = rest.trim_start();
            rest.is_empty() || rest.starts_with('#')
        })
}

/// Lines belonging to the top-level mapping `section`.
fn section_body<'a>(lines: &'a [Line<'a>], section: &str) -> Option<&'a [Line<'a>]> {
    let header = lines.iter().position(|l| is_bare_key(l.text, section))?;
    let body = &lines[header + 1..];
    let len = body
        .iter()
        .position(|l| l.text.starts_with(|c: char| !matches!(c, ' ' | '\t' | '#' | '-')))
        .unwrap_or(body.len());
    Some(&body[..len])
}

fn child_indent<'a>(scope: &'a [Line<'a>]) -> &'a str {
    scope
        .iter()
        .find(|l| l.is_content())
        .map_or("", Line::indent)
}

fn indent_width(line: &Line<'_>) -> usize {
    line.indent().len()
}

/// Finds the line holding the scalar `key` at the scope's child indent.
///
/// A key whose value is a nested block is not a scalar and is skipped.
fn find_key_line<'a>(scope: &'a [Line<'a>], key: &str) -> Option<&'a Line<'a>> {
    let indent = child_indent(scope);
    scope.iter().enumerate().find_map(|(i, line)| {
        let rest = line.text.strip_prefix(indent)?;
        if line.indent() != indent || !starts_with_key(rest, key) {
            return None;
        }
        if is_bare_key(rest, key) {
            let nested = scope[i + 1..]
                .iter()
                .find(|l| l.is_content())
                .is_some_and(|next| indent_width(next) > indent.len());
            if nested {
                return None;
            }
        }
        Some(line)
    })
}

/// Finds the line holding `field` inside the first item of the list `list`.
fn find_first_item_line<'a>(
    scope: &'a [Line<'a>],
    list: &str,
    field: &str,
) -> Option<&'a Line<'a>> {
    let indent = child_indent(scope);
    let header = scope.iter().position(|line| {
        line.indent() == indent
            && line
                .text
                .strip_prefix(indent)
                .is_some_and(|rest| is_bare_key(rest, list))
    })?;

    let mut rest = scope[header + 1..].iter().skip_while(|l| !l.is_content());
    let first = rest.next()?;
    let dash_col = indent_width(first);
    if dash_col < indent.len() {
        return None;
    }
    let after_dash = first.text[dash_col..].strip_prefix('-')?;
    let item = after_dash.trim_start_matches([' ', '\t']);
    if item.len() == after_dash.len() {
        return None;
    }
    if starts_with_key(item, field) {
        return Some(first);
    }

    let key_col = first.text.len() - item.len();
    rest.take_while(|l| !l.is_content() || indent_width(l) > dash_col)
        .find(|l| {
            l.is_content()
                && indent_width(l) == key_col
                && starts_with_key(&l.text[key_col..], field)
        })
}

/// Rebuilds a `key: value  # comment` line with a new value.
///
/// A line whose value already loads as `value`, in whatever quoting style,
/// is returned as is.
fn rewrite_scalar(line: &Line<'_>, value: &str) -> Option<String> {
    let caps = SCALAR_LINE.captures(line.text)?;
    if scalar_reads_as(&caps["value"], value) {
        return Some(line.text.to_string());
    }
    let lead = &caps["lead"];
    let tail = caps.name("tail").map_or("", |m| m.as_str());
    let separator = if lead.ends_with([' ', '\t']) { "" } else { " " };
    Some(format!(
        "{lead}{separator}{}{tail}",
        quote_yaml_string(value)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchAction;

    const MYST: &str = "\
version: 1
project:
  id: fi1105
  # course title shown in the header
  title: Old Title   # keep me
  subtitle: I Semestre 2024
  authors:
    - name: Old Author
      email: old@example.com
    - name: Second Author
  copyright: © 2024 Old Author.
  toc:
    - file: programa.md
    - title: Semana 1
      children:
        - file: sessions/01-intro.md
        - file: activities/01-lab.md
site:
  template: book-theme
  title: Old Title
  options:
    logo: assets/site_logo.svg
";

    fn changed_lines(before: &str, after: &str) -> Vec<(String, String)> {
        before
            .lines()
            .zip(after.lines())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Marker blocks
    // ------------------------------------------------------------------------

    #[test]
    fn test_block_inserted_after_frontmatter() {
        let doc = "---\ntitle: Lab\n---\n\n## Description\n";
        let outcome = TextPatcher.replace_block(doc, &MarkerBlock::activity_badges(), "BADGES");
        assert_eq!(outcome.action, PatchAction::Inserted);
        assert_eq!(
            outcome.text,
            "---\ntitle: Lab\n---\n\n<!-- ACTIVITY-BADGES -->\nBADGES\n<!-- ACTIVITY-BADGES -->\n\n## Description\n"
        );
    }

    #[test]
    fn test_block_patch_is_idempotent() {
        let doc = "---\ntitle: Lab\n---\n\nBody text\n";
        let block = MarkerBlock::activity_badges();
        let once = TextPatcher.replace_block(doc, &block, "BADGES").text;
        let twice = TextPatcher.replace_block(&once, &block, "BADGES");
        assert_eq!(twice.action, PatchAction::Replaced);
        assert_eq!(twice.text, once);
        assert!(!twice.changed(&once));
        assert_eq!(once.matches("<!-- ACTIVITY-BADGES -->").count(), 2);
    }

    #[test]
    fn test_block_replaced_in_place() {
        let doc = "intro\n<!-- M -->\nold\nlines\n<!-- M -->\noutro\n";
        let outcome = TextPatcher.replace_block(doc, &MarkerBlock::new("<!-- M -->"), "new");
        assert_eq!(outcome.action, PatchAction::Replaced);
        assert_eq!(outcome.text, "intro\n<!-- M -->\nnew\n<!-- M -->\noutro\n");
    }

    #[test]
    fn test_block_without_anchor() {
        let doc = "# No frontmatter\n";
        let outcome = TextPatcher.replace_block(doc, &MarkerBlock::activity_badges(), "X");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
        assert_eq!(outcome.text, doc);
    }

    #[test]
    fn test_lone_marker_left_alone() {
        let doc = "---\na: 1\n---\n<!-- ACTIVITY-BADGES -->\nstray\n";
        let outcome = TextPatcher.replace_block(doc, &MarkerBlock::activity_badges(), "X");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
        assert_eq!(outcome.text, doc);
    }

    // ------------------------------------------------------------------------
    // Scalar values
    // ------------------------------------------------------------------------

    #[test]
    fn test_single_key_changes_exactly_one_line() {
        let outcome = TextPatcher.replace_value(MYST, &KeyTarget::key("project", "title"), "FI1105");
        assert_eq!(outcome.action, PatchAction::Replaced);
        assert_eq!(
            changed_lines(MYST, &outcome.text),
            vec![(
                "  title: Old Title   # keep me".to_string(),
                "  title: FI1105   # keep me".to_string()
            )]
        );
    }

    #[test]
    fn test_section_scoping() {
        let outcome = TextPatcher.replace_value(MYST, &KeyTarget::key("site", "title"), "FI1105");
        let changed = changed_lines(MYST, &outcome.text);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1, "  title: FI1105");
        assert!(outcome.text.contains("  title: Old Title   # keep me"));
    }

    #[test]
    fn test_value_patch_is_idempotent() {
        let target = KeyTarget::key("project", "subtitle");
        let once = TextPatcher.replace_value(MYST, &target, "II Semestre 2025").text;
        let twice = TextPatcher.replace_value(&once, &target, "II Semestre 2025");
        assert!(!twice.changed(&once));
        assert!(once.contains("  subtitle: II Semestre 2025\n"));
    }

    #[test]
    fn test_value_is_quoted_when_needed() {
        let outcome = TextPatcher.replace_value(
            MYST,
            &KeyTarget::key("project", "title"),
            "Física: Mecánica",
        );
        assert!(outcome.text.contains("  title: \"Física: Mecánica\"   # keep me"));
    }

    #[test]
    fn test_numeric_text_stays_a_string() {
        let target = KeyTarget::key("project", "title");
        let outcome = TextPatcher.replace_value(MYST, &target, "1105");
        assert!(outcome.text.contains("  title: \"1105\"   # keep me\n"));

        let doc = "project:\n  title: '1105'\n";
        let again = TextPatcher.replace_value(doc, &target, "1105");
        assert_eq!(again.text, doc);

        let bare = TextPatcher.replace_value("project:\n  title: 1105\n", &target, "1105");
        assert_eq!(bare.text, "project:\n  title: \"1105\"\n");
    }

    #[test]
    fn test_line_break_in_value_stays_on_one_line() {
        let target = KeyTarget::key("project", "subtitle");
        let outcome = TextPatcher.replace_value(MYST, &target, "II Semestre\nsite: hijack");
        assert_eq!(outcome.text.lines().count(), MYST.lines().count());
        let changed = changed_lines(MYST, &outcome.text);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1, "  subtitle: \"II Semestre\\nsite: hijack\"");
    }

    #[test]
    fn test_missing_key_and_section() {
        let missing_key =
            TextPatcher.replace_value(MYST, &KeyTarget::key("project", "github"), "x");
        assert_eq!(missing_key.action, PatchAction::AnchorNotFound);
        assert_eq!(missing_key.text, MYST);

        let missing_section =
            TextPatcher.replace_value(MYST, &KeyTarget::key("parts", "title"), "x");
        assert_eq!(missing_section.action, PatchAction::AnchorNotFound);
    }

    #[test]
    fn test_nested_keys_are_not_children() {
        // `logo` lives under site.options, not directly under site
        let outcome = TextPatcher.replace_value(MYST, &KeyTarget::key("site", "logo"), "x");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
    }

    #[test]
    fn test_block_valued_key_is_not_a_scalar() {
        let outcome = TextPatcher.replace_value(MYST, &KeyTarget::key("site", "options"), "x");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
    }

    #[test]
    fn test_top_level_key() {
        let outcome = TextPatcher.replace_value(MYST, &KeyTarget::top_level("version"), "2");
        assert_eq!(
            changed_lines(MYST, &outcome.text),
            vec![("version: 1".to_string(), "version: 2".to_string())]
        );
    }

    #[test]
    fn test_empty_value_gets_separator() {
        let doc = "project:\n  title:\n  subtitle: x\n";
        let outcome = TextPatcher.replace_value(doc, &KeyTarget::key("project", "title"), "New");
        assert_eq!(outcome.text, "project:\n  title: New\n  subtitle: x\n");
    }

    // ------------------------------------------------------------------------
    // First list item
    // ------------------------------------------------------------------------

    #[test]
    fn test_first_author_name() {
        let target = KeyTarget::first_list_item("project", "authors", "name");
        let outcome = TextPatcher.replace_value(MYST, &target, "Ada Lovelace");
        assert_eq!(
            changed_lines(MYST, &outcome.text),
            vec![(
                "    - name: Old Author".to_string(),
                "    - name: Ada Lovelace".to_string()
            )]
        );
        assert!(outcome.text.contains("    - name: Second Author"));
    }

    #[test]
    fn test_first_item_field_not_on_dash_line() {
        let doc = "project:\n  authors:\n  - id: a1\n    name: Old\n  - id: a2\n    name: Other\n";
        let target = KeyTarget::first_list_item("project", "authors", "name");
        let outcome = TextPatcher.replace_value(doc, &target, "New");
        assert_eq!(
            outcome.text,
            "project:\n  authors:\n  - id: a1\n    name: New\n  - id: a2\n    name: Other\n"
        );
    }

    #[test]
    fn test_first_item_without_field() {
        let doc = "project:\n  authors:\n    - id: a1\n    - name: Second\n";
        let target = KeyTarget::first_list_item("project", "authors", "name");
        let outcome = TextPatcher.replace_value(doc, &target, "New");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
    }

    // ------------------------------------------------------------------------
    // File references
    // ------------------------------------------------------------------------

    #[test]
    fn test_rewrite_file_refs() {
        let outcome = TextPatcher.rewrite_file_refs(MYST, "sessions", "01", "01-kinematics.md");
        assert_eq!(outcome.replacements, 1);
        assert!(outcome.text.contains("- file: sessions/01-kinematics.md\n"));
        assert!(outcome.text.contains("- file: activities/01-lab.md\n"));

        let again =
            TextPatcher.rewrite_file_refs(&outcome.text, "sessions", "01", "01-kinematics.md");
        assert!(!again.changed(&outcome.text));
    }

    #[test]
    fn test_rewrite_file_refs_no_match() {
        let outcome = TextPatcher.rewrite_file_refs(MYST, "sessions", "07", "07-waves.md");
        assert_eq!(outcome.action, PatchAction::AnchorNotFound);
        assert_eq!(outcome.replacements, 0);
    }

    #[test]
    fn test_crlf_lines_keep_terminators() {
        let doc = "project:\r\n  title: Old\r\n  subtitle: S\r\n";
        let outcome = TextPatcher.replace_value(doc, &KeyTarget::key("project", "title"), "New");
        assert_eq!(outcome.text, "project:\r\n  title: New\r\n  subtitle: S\r\n");
    }
}
