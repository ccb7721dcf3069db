//! Ignore patterns
//!
//! Patterns are loaded from the ignore file at the working-tree root, one
//! shell-glob per line. Blank lines and `#` comment lines are skipped.
//! Patterns match against the full path relative to the working-tree root.
//! A bare name (no separator, no glob metacharacters) additionally matches
//! any single path component, so `target` ignores `target/debug/app` too;
//! glob patterns never cross into components, so `*.log` leaves
//! `logs/debug.log` alone.
//!
//! Globs are compiled to anchored regexes: `*` matches within one path
//! component, `?` matches a single character, `[...]` classes pass through.

use anyhow::Context;
use std::path::Path;

/// One compiled ignore pattern
#[derive(Debug)]
struct IgnorePattern {
    regex: regex::Regex,
    /// Bare names also match any single path component
    bare_name: bool,
}

/// Compiled ignore patterns for one working tree
#[derive(Debug, Default)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    /// Load patterns from the ignore file, if one exists
    ///
    /// A missing file yields an empty list; nothing is ignored.
    pub fn load(ignore_file: &Path) -> anyhow::Result<Self> {
        if !ignore_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(ignore_file)
            .with_context(|| format!("Unable to read ignore file {}", ignore_file.display()))?;

        Self::parse(&content)
    }

    /// Parse patterns from the ignore file's text content
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                Ok(IgnorePattern {
                    regex: Self::compile_glob(line)?,
                    bare_name: !line.contains('/') && !line.contains(['*', '?', '[']),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(IgnoreList { patterns })
    }

    /// Check whether a working-tree-relative path is ignored
    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let full = path.to_string_lossy();
        self.patterns.iter().any(|pattern| {
            if pattern.regex.is_match(&full) {
                return true;
            }

            pattern.bare_name
                && path.components().any(|component| match component {
                    std::path::Component::Normal(name) => {
                        pattern.regex.is_match(&name.to_string_lossy())
                    }
                    _ => false,
                })
        })
    }

    fn compile_glob(glob: &str) -> anyhow::Result<regex::Regex> {
        let mut pattern = String::with_capacity(glob.len() + 8);
        pattern.push('^');

        let mut chars = glob.chars();
        while let Some(c) = chars.next() {
            match c {
                // within one path component only
                '*' => pattern.push_str("[^/]*"),
                '?' => pattern.push_str("[^/]"),
                '[' => {
                    pattern.push('[');
                    for class_char in chars.by_ref() {
                        pattern.push(class_char);
                        if class_char == ']' {
                            break;
                        }
                    }
                }
                c => pattern.push_str(&regex::escape(&c.to_string())),
            }
        }

        pattern.push('$');

        regex::Regex::new(&pattern)
            .with_context(|| format!("Invalid ignore pattern: {}", glob))
    }
}
