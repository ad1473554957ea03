use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use hdevelop::formatting::{Formatter, Identity, Indentation, Terminal};
use hdevelop::language::LoadingError;
use hdevelop::notebook::{self, Cells};

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("hdevelop")
        .version(VERSION)
        .propagate_version(true)
        .about("Edit HDevelop procedure files as notebooks of parameters and code.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log progress to standard error."),
        )
        .arg(
            Arg::new("tab-size")
                .long("tab-size")
                .global(true)
                .value_parser(value_parser!(usize))
                .default_value("4")
                .help("Number of spaces per level of indentation."),
        )
        .arg(
            Arg::new("tabs")
                .long("tabs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Indent with a tab character rather than spaces."),
        )
        .subcommand(
            Command::new("cells")
                .about("Show the cells of the given procedure file")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the cells as a JSON object rather than as a listing."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The procedure file (.hdvp) to open."),
                ),
        )
        .subcommand(
            Command::new("save")
                .about("Write the given procedure file back out, optionally with edited cells")
                .arg(
                    Arg::new("cells")
                        .long("cells")
                        .help("A JSON file with the edited cells, as printed by `cells --json`."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Where to write the result. Defaults to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The procedure file (.hdvp) to open."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Reindent the given file of HDevelop code")
                .arg(
                    Arg::new("check")
                        .long("check")
                        .action(ArgAction::SetTrue)
                        .help("Report lines whose indentation would change, and exit non-zero if there are any."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code you want to format."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let settings = Indentation {
        tab_size: matches
            .get_one::<usize>("tab-size")
            .copied()
            .unwrap_or(4),
        insert_spaces: !matches.get_flag("tabs"),
    };
    debug!(?settings, "Indentation");

    match matches.subcommand() {
        Some(("cells", submatches)) => cells(submatches, &settings),
        Some(("save", submatches)) => save(submatches, &settings),
        Some(("format", submatches)) => format(submatches, &settings),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: hdevelop [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    // clap enforces presence of required arguments
    submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap_or(Path::new("-"))
}

fn load(filename: &Path) -> String {
    info!("Reading file: {}", filename.display());

    match std::fs::read(filename) {
        Ok(content) => match String::from_utf8(content) {
            Ok(text) => text,
            Err(e) => fail(&LoadingError {
                problem: "File is not valid UTF-8".to_string(),
                details: e.to_string(),
                filename,
            }),
        },
        Err(e) => fail(&LoadingError {
            problem: "Unable to read file".to_string(),
            details: e.to_string(),
            filename,
        }),
    }
}

fn fail(error: &LoadingError) -> ! {
    eprintln!("{}", problem::concise_loading_error(error));
    std::process::exit(1);
}

fn open(filename: &Path, settings: &Indentation) -> notebook::EditableDocument {
    let source = load(filename);

    match notebook::open(source.as_bytes(), settings) {
        Ok(document) => document,
        Err(error) => {
            eprintln!(
                "{}",
                problem::full_notebook_error(&error, filename, &source)
            );
            std::process::exit(1);
        }
    }
}

fn cells(submatches: &ArgMatches, settings: &Indentation) {
    let filename = filename(submatches);
    let document = open(filename, settings);

    let result = if submatches.get_flag("json") {
        output::json(&document.cells).map_err(|e| e.to_string())
    } else if submatches.get_flag("raw-control-chars")
        || std::io::stdout().is_terminal()
    {
        output::listing(&document.cells, &Terminal).map_err(|e| e.to_string())
    } else {
        output::listing(&document.cells, &Identity).map_err(|e| e.to_string())
    };

    match result {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("{}: {}", "error".bright_red(), e);
            std::process::exit(1);
        }
    }
}

fn save(submatches: &ArgMatches, settings: &Indentation) {
    let filename = filename(submatches);
    let mut document = open(filename, settings);

    if let Some(path) = submatches.get_one::<String>("cells") {
        let path = Path::new(path);
        let text = load(path);
        match serde_json::from_str::<Cells>(&text) {
            Ok(cells) => document.cells = cells,
            Err(e) => fail(&LoadingError {
                problem: "Unable to read cells".to_string(),
                details: e.to_string(),
                filename: path,
            }),
        }
    }

    let bytes = match document.save() {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!(
                "{}",
                problem::full_notebook_error(&error, filename, "")
            );
            std::process::exit(1);
        }
    };

    match submatches.get_one::<String>("output") {
        Some(target) => {
            let target = Path::new(target);
            if let Err(e) = std::fs::write(target, &bytes) {
                fail(&LoadingError {
                    problem: "Unable to write file".to_string(),
                    details: e.to_string(),
                    filename: target,
                });
            }
            info!("Wrote {}", target.display());
        }
        None => print!("{}", String::from_utf8_lossy(&bytes)),
    }
}

fn format(submatches: &ArgMatches, settings: &Indentation) {
    let filename = filename(submatches);
    let source = load(filename);
    let formatter = Formatter::from_settings(settings);

    let lines: Vec<&str> = source
        .split('\n')
        .collect();
    let edits = formatter.indentation_edits(&lines);

    if submatches.get_flag("check") {
        for edit in &edits {
            println!(
                "{}:{}: {}",
                filename.display(),
                edit.line + 1,
                "indentation differs".bold()
            );
        }
        if !edits.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    let mut result: Vec<String> = lines
        .iter()
        .map(|line| line.to_string())
        .collect();
    for edit in &edits {
        result[edit.line] = edit.apply(&result[edit.line]);
    }

    print!("{}", result.join("\n"));
}
