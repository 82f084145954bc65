//! trackDb stanzas and the output they are rendered into.
//!
//! A [`TrackBlock`] is one stanza: an ordered list of `key value` lines. A
//! [`TrackDb`] collects stanzas and `#` comment lines in output order, and is
//! only written to a [`Write`] sink at the end, so that generation itself never
//! performs I/O.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;
use std::io::{self, Write};

/// Indentation of child stanzas in composites with subgroups.
pub const CHILD_INDENT: &str = "    ";

lazy_static! {
    static ref UNSAFE_ID_CHARS: Regex = Regex::new(r"[^\w-]").unwrap();
}

/// Build a track identifier from a parent identifier and a suffix.
///
/// Every character other than a word character or `-` is replaced by `_`, and
/// the result is cut to at most `max_len` characters.
pub fn track_id(parent: &str, suffix: &str, max_len: usize) -> String {
    let id = format!("{}_{}", parent, suffix);
    UNSAFE_ID_CHARS
        .replace_all(&id, "_")
        .chars()
        .take(max_len)
        .collect()
}

/// One trackDb stanza.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackBlock {
    indent: &'static str,
    entries: Vec<(String, String)>,
}

impl TrackBlock {
    /// A stanza starting with `track <id>`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            indent: "",
            entries: vec![("track".to_string(), id.into())],
        }
    }

    /// Render every line with `indent` before it.
    pub fn indented(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Append a `key value` line.
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    /// The value of the first line with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `track` identifier.
    pub fn id(&self) -> &str {
        self.get("track").unwrap_or_default()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The stanza's lines, followed by the empty separator line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(move |(key, value)| format!("{}{} {}", self.indent, key, value))
            .chain(std::iter::once(String::new()))
    }
}

/// An ordered trackDb document of comments and stanzas.
#[derive(Clone, Debug, Default)]
pub struct TrackDb {
    lines: Vec<String>,
    blocks: usize,
}

impl TrackDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment line. `comment` must already start with `#`.
    pub fn comment(&mut self, comment: impl Into<String>) {
        self.lines.push(comment.into());
    }

    pub fn push_block(&mut self, block: &TrackBlock) {
        self.lines.extend(block.lines());
        self.blocks += 1;
    }

    /// Number of stanzas added.
    pub fn num_blocks(&self) -> usize {
        self.blocks
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write all lines, newline terminated.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}
