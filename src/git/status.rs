//! Parsing of `git status --porcelain` and name-list output.

use std::fmt;

/// Kind of change git reports for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Unmerged,
    Untracked,
    Unknown,
}

impl ChangeKind {
    /// Map a trimmed two-character porcelain status code.
    fn from_code(code: &str) -> Self {
        match code {
            "M" => ChangeKind::Modified,
            "A" => ChangeKind::Added,
            "D" => ChangeKind::Deleted,
            "R" => ChangeKind::Renamed,
            "C" => ChangeKind::Copied,
            "U" => ChangeKind::Unmerged,
            "??" => ChangeKind::Untracked,
            _ => ChangeKind::Unknown,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Modified => "Modified",
            ChangeKind::Added => "Added",
            ChangeKind::Deleted => "Deleted",
            ChangeKind::Renamed => "Renamed",
            ChangeKind::Copied => "Copied",
            ChangeKind::Unmerged => "Updated but unmerged",
            ChangeKind::Untracked => "Untracked",
            ChangeKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A changed file with its human-readable status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: String,
    pub kind: ChangeKind,
}

/// Parse `git status --porcelain` output into per-file statuses.
///
/// The first two characters of each line carry the status code and the path
/// starts at the fourth. Lines shorter than four bytes are skipped.
pub(crate) fn parse_porcelain(output: &str) -> Vec<FileStatus> {
    output.lines().filter_map(parse_porcelain_line).collect()
}

fn parse_porcelain_line(line: &str) -> Option<FileStatus> {
    if line.len() < 4 {
        return None;
    }
    let code = line.get(..2)?.trim();
    let path = line.get(3..)?.trim();
    Some(FileStatus {
        path: path.to_string(),
        kind: ChangeKind::from_code(code),
    })
}

/// Split `--name-only` style output into paths, dropping empty lines.
pub(crate) fn parse_name_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
