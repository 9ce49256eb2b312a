use crate::settings::RendererSettingsDef;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Creates the directory `APP_DATA/git-uml/formats` if it does not exist,
/// and writes the files for built-in output formats there.
pub fn create_config<P: AsRef<Path> + AsRef<OsStr>>(app_format_path: &P) -> Result<(), String> {
    let path: &Path = app_format_path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(app_format_path).map_err(|err| err.to_string())?;

        let formats = [
            (RendererSettingsDef::png(), "png.toml"),
            (RendererSettingsDef::svg(), "svg.toml"),
            (RendererSettingsDef::eps(), "eps.toml"),
        ];
        for (format, file) in &formats {
            let mut path = PathBuf::from(&app_format_path);
            path.push(file);
            let str = toml::to_string_pretty(&format).map_err(|err| err.to_string())?;
            std::fs::write(&path, str).map_err(|err| err.to_string())?;
        }
    }

    Ok(())
}

/// Get output formats available in `APP_DATA/git-uml/formats`.
pub fn get_available_formats<P: AsRef<Path>>(app_format_path: &P) -> Result<Vec<String>, String> {
    let formats = std::fs::read_dir(app_format_path)
        .map_err(|err| err.to_string())?
        .filter_map(|e| match e {
            Ok(e) => {
                if let (Some(name), Some(ext)) = (e.path().file_name(), e.path().extension()) {
                    if ext == "toml" {
                        name.to_str()
                            .map(|name| (name[..(name.len() - 5)]).to_string())
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            Err(_) => None,
        })
        .collect::<Vec<_>>();

    Ok(formats)
}

/// Try to get the renderer settings for a given output format.
/// If no format name is given, returns the PNG default.
pub fn get_format<P: AsRef<Path> + AsRef<OsStr>>(
    format: Option<&str>,
    app_format_path: &P,
) -> Result<RendererSettingsDef, String> {
    match format {
        Some(format) => read_format(format, app_format_path),
        None => {
            Ok(read_format("png", app_format_path).unwrap_or_else(|_| RendererSettingsDef::png()))
        }
    }
}

/// Read an output format profile file.
fn read_format<P: AsRef<Path> + AsRef<OsStr>>(
    format: &str,
    app_format_path: &P,
) -> Result<RendererSettingsDef, String> {
    let mut format_file = PathBuf::from(&app_format_path);
    format_file.push(format!("{}.toml", format));

    if format_file.exists() {
        toml::from_str::<RendererSettingsDef>(
            &std::fs::read_to_string(format_file).map_err(|err| err.to_string())?,
        )
        .map_err(|err| err.to_string())
    } else {
        let formats = get_available_formats(&app_format_path)?;
        let path: &Path = app_format_path.as_ref();
        Err(format!(
            "ERROR: No output format named '{}' found in {}\n       Available formats are: {}",
            format,
            path.display(),
            itertools::join(formats, ", ")
        ))
    }
}
