use serde_derive::{Deserialize, Serialize};

use crate::print::format::CommitFormat;

/// Top-level settings
pub struct Settings {
    /// Maximum number of commits to include in the graph
    pub max_count: Option<usize>,
    /// Level of detail for commit nodes
    pub format: CommitFormat,
    /// How to invoke the renderer
    pub renderer: RendererSettingsDef,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_count: None,
            format: CommitFormat::Full,
            renderer: RendererSettingsDef::png(),
        }
    }
}

/// Renderer invocation settings for one output image format,
/// read from and written to TOML profile files.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RendererSettingsDef {
    /// Program used to launch the renderer
    pub java_executable: String,
    /// Extra arguments passed to the renderer, before the input file
    pub renderer_args: Vec<String>,
    /// File extension of the image the renderer produces
    pub image_extension: String,
}

impl RendererSettingsDef {
    /// PNG output, the renderer's default.
    pub fn png() -> Self {
        Self {
            java_executable: "java".to_string(),
            renderer_args: vec![],
            image_extension: "png".to_string(),
        }
    }

    /// SVG output.
    pub fn svg() -> Self {
        Self {
            java_executable: "java".to_string(),
            renderer_args: vec!["-tsvg".to_string()],
            image_extension: "svg".to_string(),
        }
    }

    /// EPS output.
    pub fn eps() -> Self {
        Self {
            java_executable: "java".to_string(),
            renderer_args: vec!["-teps".to_string()],
            image_extension: "eps".to_string(),
        }
    }
}
