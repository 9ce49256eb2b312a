use std::str::FromStr;

use crate::graph::Commit;

/// Level of detail for commit nodes.
#[derive(Debug)]
pub enum CommitFormat {
    /// Message only.
    OneLine,
    /// Message and modified files.
    Full,
}

impl FromStr for CommitFormat {
    type Err = String;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str {
            "oneline" => Ok(CommitFormat::OneLine),
            "full" => Ok(CommitFormat::Full),
            str => Err(format!(
                "Unknown commit style '{}'. Available styles are: {}",
                str,
                itertools::join(["oneline", "full"], ", ")
            )),
        }
    }
}

/// Formats the body lines of a commit node: the quoted message,
/// followed by one line per modified file for [`CommitFormat::Full`].
///
/// File names are emitted verbatim, without escaping.
pub fn format_node(commit: &Commit, format: &CommitFormat) -> Vec<String> {
    let mut lines = vec![format!("  \"{}\"", commit.message)];

    if let CommitFormat::Full = format {
        for file in &commit.modified_files {
            lines.push(format!("  {}", file));
        }
    }

    lines
}
