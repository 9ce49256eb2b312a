//! Collects the commit history of a repository by querying git.

use std::io::{BufRead, BufReader};

use yansi::Paint;

use crate::runner::{CommandHandle, CommandRunner};
use crate::settings::Settings;
use crate::text;

/// A single commit, with the files it modified.
///
/// Immutable snapshot, created once during collection.
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub modified_files: Vec<String>,
    pub parent_hashes: Vec<String>,
}

/// The commit graph of a repository.
pub struct CommitGraph {
    pub commits: Vec<Commit>,
}

impl CommitGraph {
    /// Collects all commits of the repository at `repo_path`,
    /// in the order emitted by git.
    pub fn new(
        repo_path: &str,
        settings: &Settings,
        runner: &dyn CommandRunner,
    ) -> Result<Self, String> {
        let commits = collect_commits(repo_path, settings, runner)?;
        Ok(CommitGraph { commits })
    }
}

/// Queries the commit history over all branches, one commit per line,
/// and analyzes each commit for the files it modified.
///
/// A history query that exits with a non-zero code is reported as a warning;
/// the commits parsed up to that point are still returned.
pub fn collect_commits(
    repo_path: &str,
    settings: &Settings,
    runner: &dyn CommandRunner,
) -> Result<Vec<Commit>, String> {
    let max_count = settings.max_count.map(|count| format!("--max-count={}", count));

    let mut args = vec!["-C", repo_path, "log", "--all", "--pretty=format:%H|%s|%P"];
    if let Some(max_count) = &max_count {
        args.push(max_count);
    }

    let mut handle = runner.start("git", &args)?;
    let stdout = handle
        .stdout()
        .ok_or_else(|| "Standard output of git log not available.".to_string())?;

    let mut commits = Vec::new();
    for line in BufReader::new(stdout).lines() {
        let line = line.map_err(|err| err.to_string())?;
        match text::parse_log_line(&line) {
            Some((hash, message, parent_hashes)) => {
                commits.push(analyze_commit(repo_path, runner, hash, message, parent_hashes)?);
            }
            None => eprintln!(
                "{}",
                Paint::yellow(format!("Skipping malformed history line '{}'.", line))
            ),
        }
    }

    let exit_code = handle.wait()?;
    if exit_code != 0 {
        eprintln!(
            "{}",
            Paint::yellow(format!(
                "git log exited with code {}. The graph may be incomplete.",
                exit_code
            ))
        );
    }

    Ok(commits)
}

/// Queries the files modified by the given commit and builds the complete record.
///
/// A diff query that exits with a non-zero code is reported as a warning;
/// the files read up to that point are still part of the commit.
pub fn analyze_commit(
    repo_path: &str,
    runner: &dyn CommandRunner,
    hash: String,
    message: String,
    parent_hashes: Vec<String>,
) -> Result<Commit, String> {
    let args = ["-C", repo_path, "diff-tree", "--no-commit-id", "--name-only", "-r", &hash];

    let mut handle = runner.start("git", &args)?;
    let stdout = handle
        .stdout()
        .ok_or_else(|| "Standard output of git diff-tree not available.".to_string())?;

    let mut modified_files = Vec::new();
    for line in BufReader::new(stdout).lines() {
        modified_files.push(line.map_err(|err| err.to_string())?);
    }

    let exit_code = handle.wait()?;
    if exit_code != 0 {
        eprintln!(
            "{}",
            Paint::yellow(format!(
                "git diff-tree exited with code {} for commit {}.",
                exit_code, hash
            ))
        );
    }

    Ok(Commit {
        hash,
        message,
        modified_files,
        parent_hashes,
    })
}

#[cfg(test)]
mod tests {
    use crate::runner::scripted::ScriptedRunner;
    use crate::settings::Settings;

    const LOG: &str = "git -C path/to/repo log --all --pretty=format:%H|%s|%P";
    const DIFF_ABC: &str = "git -C path/to/repo diff-tree --no-commit-id --name-only -r abc123";
    const DIFF_DEF: &str = "git -C path/to/repo diff-tree --no-commit-id --name-only -r def456";

    #[test]
    fn collect_commits() {
        let runner = ScriptedRunner::new()
            .on(LOG, "abc123|Initial commit|def456\ndef456|Second commit", 0)
            .on(DIFF_ABC, "file1.txt\nfile2.txt\n", 0)
            .on(DIFF_DEF, "file2.txt\nfile3.txt\n", 0);

        let graph = super::CommitGraph::new("path/to/repo", &Settings::default(), &runner).unwrap();

        assert_eq!(graph.commits.len(), 2);

        assert_eq!(graph.commits[0].hash, "abc123");
        assert_eq!(graph.commits[0].message, "Initial commit");
        assert_eq!(graph.commits[0].modified_files, vec!["file1.txt", "file2.txt"]);
        assert_eq!(graph.commits[0].parent_hashes, vec!["def456"]);

        assert_eq!(graph.commits[1].hash, "def456");
        assert_eq!(graph.commits[1].message, "Second commit");
        assert_eq!(graph.commits[1].modified_files, vec!["file2.txt", "file3.txt"]);
        assert!(graph.commits[1].parent_hashes.is_empty());
    }

    #[test]
    fn collect_commits_with_max_count() {
        let mut settings = Settings::default();
        settings.max_count = Some(1);

        let runner = ScriptedRunner::new()
            .on(
                "git -C path/to/repo log --all --pretty=format:%H|%s|%P --max-count=1",
                "abc123|Initial commit|",
                0,
            )
            .on(DIFF_ABC, "file1.txt\n", 0);

        let commits = super::collect_commits("path/to/repo", &settings, &runner).unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "abc123");
    }

    #[test]
    fn collect_commits_skips_malformed_lines() {
        let runner = ScriptedRunner::new()
            .on(LOG, "abc123|Initial commit|\nnot-a-commit-line\ndef456|Second commit|abc123", 0)
            .on(DIFF_ABC, "file1.txt\n", 0)
            .on(DIFF_DEF, "file2.txt\n", 0);

        let commits =
            super::collect_commits("path/to/repo", &Settings::default(), &runner).unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "abc123");
        assert_eq!(commits[1].hash, "def456");
    }

    #[test]
    fn collect_commits_keeps_parsed_commits_on_log_failure() {
        let runner = ScriptedRunner::new()
            .on(LOG, "abc123|Initial commit|", 128)
            .on(DIFF_ABC, "file1.txt\n", 0);

        let commits =
            super::collect_commits("path/to/repo", &Settings::default(), &runner).unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "abc123");
    }

    #[test]
    fn collect_commits_fails_on_launch_error() {
        let runner = ScriptedRunner::new();

        let result = super::collect_commits("path/to/repo", &Settings::default(), &runner);

        assert!(result.is_err());
    }

    #[test]
    fn analyze_commit() {
        let runner = ScriptedRunner::new().on(DIFF_ABC, "file1.txt\nfile2.txt\n", 0);

        let commit = super::analyze_commit(
            "path/to/repo",
            &runner,
            "abc123".to_string(),
            "Sample commit".to_string(),
            vec!["def456".to_string()],
        )
        .unwrap();

        assert_eq!(commit.hash, "abc123");
        assert_eq!(commit.message, "Sample commit");
        assert_eq!(commit.modified_files, vec!["file1.txt", "file2.txt"]);
        assert_eq!(commit.parent_hashes, vec!["def456"]);
    }

    #[test]
    fn analyze_commit_preserves_duplicate_files() {
        let runner = ScriptedRunner::new().on(DIFF_ABC, "file1.txt\nfile1.txt\n", 0);

        let commit = super::analyze_commit(
            "path/to/repo",
            &runner,
            "abc123".to_string(),
            "Sample commit".to_string(),
            vec![],
        )
        .unwrap();

        assert_eq!(commit.modified_files, vec!["file1.txt", "file1.txt"]);
    }

    #[test]
    fn analyze_commit_keeps_partial_files_on_diff_failure() {
        let runner = ScriptedRunner::new().on(DIFF_ABC, "file1.txt\nfile2.txt\n", 1);

        let commit = super::analyze_commit(
            "path/to/repo",
            &runner,
            "abc123".to_string(),
            "Sample commit".to_string(),
            vec![],
        )
        .unwrap();

        assert_eq!(commit.modified_files, vec!["file1.txt", "file2.txt"]);
    }
}
