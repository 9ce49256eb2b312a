//! Command line tool to render the commit graph of a git repository via PlantUML.

use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use platform_dirs::AppDirs;
use yansi::Paint;

use git_uml::config;
use git_uml::get_repo;
use git_uml::graph::CommitGraph;
use git_uml::print::format::CommitFormat;
use git_uml::print::plantuml::print_plantuml;
use git_uml::render::render_graph;
use git_uml::runner::OsCommandRunner;
use git_uml::settings::Settings;

fn main() {
    std::process::exit(match from_args() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", Paint::red(&err));
            1
        }
    });
}

/// Parses the command line into settings and runs the tool.
fn from_args() -> Result<(), String> {
    let app = Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("plantuml")
                .help("Path to the PlantUML jar file")
                .required(true),
        )
        .arg(
            Arg::new("repository")
                .help("Path to the git repository")
                .required(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .num_args(1)
                .help("Output image format: png|svg|eps, or any profile in APP_DATA/git-uml/formats"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .num_args(1)
                .help("Commit node style: full|oneline"),
        )
        .arg(
            Arg::new("max-count")
                .long("max-count")
                .short('n')
                .num_args(1)
                .help("Maximum number of commits to include"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Print without colors"),
        );

    let matches = match app.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                std::process::exit(0);
            }
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    };

    if matches.get_flag("no-color") || !atty::is(atty::Stream::Stdout) {
        Paint::disable();
    }

    let plantuml_path = matches
        .get_one::<String>("plantuml")
        .ok_or_else(|| "Missing argument <plantuml>".to_string())?;
    let repo_path = matches
        .get_one::<String>("repository")
        .ok_or_else(|| "Missing argument <repository>".to_string())?;
    get_repo(repo_path)?;

    let max_count = matches
        .get_one::<String>("max-count")
        .map(|count| {
            count.parse::<usize>().map_err(|_| {
                format!(
                    "Option --max-count expects a positive number, but got '{}'",
                    count
                )
            })
        })
        .transpose()?;

    let format = matches
        .get_one::<String>("style")
        .map(|style| CommitFormat::from_str(style))
        .transpose()?
        .unwrap_or(CommitFormat::Full);

    let app_dir = AppDirs::new(Some("git-uml"), false)
        .ok_or_else(|| "Unable to determine the application config directory.".to_string())?
        .config_dir;
    let mut formats_dir = app_dir;
    formats_dir.push("formats");

    config::create_config(&formats_dir)?;
    let renderer = config::get_format(
        matches.get_one::<String>("format").map(String::as_str),
        &formats_dir,
    )?;

    let settings = Settings {
        max_count,
        format,
        renderer,
    };

    run(plantuml_path, repo_path, &settings)
}

/// Collects the commit graph, renders it, and reports the outcome.
fn run(plantuml_path: &str, repo_path: &str, settings: &Settings) -> Result<(), String> {
    let runner = OsCommandRunner;

    let graph = CommitGraph::new(repo_path, settings, &runner)?;
    let source = print_plantuml(&graph, settings)?;
    let outcome = render_graph(&source, plantuml_path, &settings.renderer, &runner)?;

    if outcome.exit_code == 0 {
        println!("Commit graph rendered successfully.");
        println!(
            "PlantUML source written to {}",
            outcome.source_file.display()
        );
        println!("Expected image file: {}", outcome.image_file.display());
    } else {
        println!(
            "{}",
            Paint::yellow(format!("PlantUML exited with code {}.", outcome.exit_code))
        );
    }

    Ok(())
}
