//! Create graphs in the PlantUML diagram language.

use std::fmt::Write;

use crate::graph::CommitGraph;
use crate::print::format::format_node;
use crate::settings::Settings;

/// Creates a PlantUML representation of a graph.
///
/// Emits one `class` block per commit in graph order, followed by one
/// `parent --> commit` edge per parent in parse order. Empty parent
/// hashes produce no edge. The output is deterministic: the same graph
/// yields the same text.
pub fn print_plantuml(graph: &CommitGraph, settings: &Settings) -> Result<String, String> {
    let mut out = String::new();

    writeln!(out, "@startuml").map_err(|err| err.to_string())?;

    for commit in &graph.commits {
        writeln!(out, "class {} {{", commit.hash).map_err(|err| err.to_string())?;
        for line in format_node(commit, &settings.format) {
            writeln!(out, "{}", line).map_err(|err| err.to_string())?;
        }
        writeln!(out, "}}").map_err(|err| err.to_string())?;
    }

    for commit in &graph.commits {
        for parent in &commit.parent_hashes {
            if !parent.is_empty() {
                writeln!(out, "{} --> {}", parent, commit.hash).map_err(|err| err.to_string())?;
            }
        }
    }

    writeln!(out, "@enduml").map_err(|err| err.to_string())?;

    Ok(out)
}
