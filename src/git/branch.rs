//! Parsing of `git branch -vv` listings
//!
//! Each line has the shape
//!
//! ```text
//! * main      3f2a9c1 [origin/main: ahead 1] Fix bug
//! + feature   8be0d44 (/home/me/repo.feature) [origin/feature] Add widget
//!   scratch   11aa22b WIP
//! ```
//!
//! and is read left to right by a small cursor: marker, name, hash, optional
//! worktree path, optional upstream annotation, subject. Lines that don't fit
//! the shape (blank lines, detached HEAD entries) produce no record.

use std::borrow::Cow;

/// One branch from the listing, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    /// The branch is checked out in the current worktree (`*`)
    pub is_current: bool,
    /// Display glyph: the configured current marker, `+` for a branch checked
    /// out in another worktree, or empty
    pub marker: String,
    pub name: String,
    /// Last path segment of the linked worktree, empty when absent
    pub worktree_hint: String,
    /// Tracked upstream ref (e.g. `origin/main`), empty when the branch has none
    pub upstream: String,
    pub subject: String,
}

impl BranchRecord {
    /// Parse one line of `git branch -vv` output.
    ///
    /// `current_marker` replaces the `*` on the checked-out branch.
    pub fn parse(line: &str, current_marker: &str) -> Option<Self> {
        let mut cursor = Cursor::new(line);

        cursor.skip_whitespace();
        let marker_char = cursor.eat_one_of(&['*', '+']);
        cursor.skip_whitespace();

        let name = cursor.take_while(is_name_char);
        if name.is_empty() || cursor.skip_whitespace() == 0 {
            return None;
        }

        let hash = cursor.take_while(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if hash.is_empty() {
            return None;
        }

        let worktree_path = cursor.worktree_path();
        if cursor.skip_whitespace() == 0 {
            return None;
        }

        let upstream = cursor
            .bracketed()
            .map(|annotation| {
                annotation
                    .split_once(':')
                    .map_or(annotation, |(remote, _)| remote)
                    .trim()
            })
            .unwrap_or_default();
        cursor.skip_whitespace();

        let (is_current, marker) = match marker_char {
            Some('*') => (true, current_marker),
            Some('+') => (false, "+"),
            _ => (false, ""),
        };

        Some(Self {
            is_current,
            marker: marker.to_string(),
            name: name.to_string(),
            worktree_hint: worktree_path.map(last_path_segment).unwrap_or_default().to_string(),
            upstream: upstream.to_string(),
            subject: cursor.rest().to_string(),
        })
    }

    /// Name as shown in the name column, with the worktree hint when present.
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.worktree_hint.is_empty() {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Owned(format!("{} ({})", self.name, self.worktree_hint))
        }
    }
}

/// Parse a full listing, keeping input order and skipping unparseable lines.
pub fn parse_branch_listing(output: &str, current_marker: &str) -> Vec<BranchRecord> {
    output
        .lines()
        .filter_map(|line| {
            let record = BranchRecord::parse(line, current_marker);
            if record.is_none() {
                log::trace!("Skipping unparseable branch line: {line:?}");
            }
            record
        })
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '+' | '-' | '.')
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
}

/// Forward-only reader over one listing line.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn rest(&self) -> &'a str {
        self.rest
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c: char| !pred(c)).unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    /// Returns the number of bytes skipped
    fn skip_whitespace(&mut self) -> usize {
        self.take_while(|c| c.is_ascii_whitespace()).len()
    }

    fn eat_one_of(&mut self, options: &[char]) -> Option<char> {
        let ch = self.rest.chars().next().filter(|c| options.contains(c))?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }

    /// ` (path)` directly after the hash, as printed for branches checked out
    /// in linked worktrees.
    ///
    /// Only consumed when whitespace follows the closing paren; otherwise the
    /// parenthesized text belongs to the subject.
    fn worktree_path(&mut self) -> Option<&'a str> {
        let mut probe = *self;
        if probe.skip_whitespace() == 0 || probe.eat_one_of(&['(']).is_none() {
            return None;
        }
        let path = probe.take_while(|c| c != ')');
        probe.eat_one_of(&[')'])?;
        if !probe.rest.starts_with(|c: char| c.is_ascii_whitespace()) {
            return None;
        }
        *self = probe;
        Some(path)
    }

    /// Contents of a `[...]` annotation, closed by the first `]`.
    fn bracketed(&mut self) -> Option<&'a str> {
        let inner = self.rest.strip_prefix('[')?;
        let (contents, rest) = inner.split_once(']')?;
        self.rest = rest;
        Some(contents)
    }
}
