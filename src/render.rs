//! Renders a diagram description to an image via the external renderer.

use std::io::Write;
use std::path::PathBuf;

use crate::runner::{CommandHandle, CommandRunner};
use crate::settings::RendererSettingsDef;

/// Locations and exit status of a finished render run.
pub struct RenderOutcome {
    /// The diagram source file that was written.
    pub source_file: PathBuf,
    /// Where the renderer is expected to write the image.
    ///
    /// Derived from the source file by replacing the extension;
    /// existence is not verified.
    pub image_file: PathBuf,
    /// Exit code of the renderer.
    pub exit_code: i32,
}

/// Writes the diagram source to a fresh, uniquely named temporary file
/// with a `.puml` extension.
///
/// The file is kept on disk so the renderer can read it and the user
/// can inspect it afterwards.
pub fn write_diagram_file(source: &str) -> Result<PathBuf, String> {
    let mut file = tempfile::Builder::new()
        .prefix("commit_graph_")
        .suffix(".puml")
        .tempfile()
        .map_err(|err| err.to_string())?;

    file.write_all(source.as_bytes())
        .map_err(|err| err.to_string())?;

    file.into_temp_path().keep().map_err(|err| err.to_string())
}

/// Writes the diagram source to a temporary file and runs the renderer on it.
///
/// The renderer's standard input is closed right after launch; its exit code
/// is reported in the outcome and is not treated as an error.
pub fn render_graph(
    source: &str,
    plantuml_path: &str,
    renderer: &RendererSettingsDef,
    runner: &dyn CommandRunner,
) -> Result<RenderOutcome, String> {
    let source_file = write_diagram_file(source)?;
    let source_str = source_file
        .to_str()
        .ok_or_else(|| format!("Invalid characters in path {}", source_file.display()))?;

    let mut args = vec!["-jar", plantuml_path];
    for arg in &renderer.renderer_args {
        args.push(arg);
    }
    args.push(source_str);

    let mut handle = runner.start(&renderer.java_executable, &args)?;
    handle.close_stdin();
    let exit_code = handle.wait()?;

    let image_file = source_file.with_extension(&renderer.image_extension);

    Ok(RenderOutcome {
        source_file,
        image_file,
        exit_code,
    })
}
