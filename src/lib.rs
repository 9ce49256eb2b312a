//! Command line tool to render the commit graph of a git repository via PlantUML.

use std::path::Path;

pub mod config;
pub mod graph;
pub mod print;
pub mod render;
pub mod runner;
pub mod settings;
pub mod text;

/// Checks that the given repository path is an existing directory.
///
/// Whether the directory actually holds a git repository is left to the
/// history query; a non-repository yields a warning and an empty graph.
pub fn get_repo<P: AsRef<Path>>(path: P) -> Result<(), String> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(())
    } else {
        Err(format!("No directory found at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn get_repo() {
        let dir = tempfile::tempdir().unwrap();

        assert!(super::get_repo(dir.path()).is_ok());
        assert!(super::get_repo(dir.path().join("missing")).is_err());
    }
}
