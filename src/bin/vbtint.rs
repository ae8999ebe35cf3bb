//! Command-line interface for vbtint
//!
//! This binary reads a VB.NET source file, classifies it into lexical spans,
//! and shows the result.
//!
//! Usage:
//!   vbtint highlight `<path>` [--theme `<file>`] [--legend]  - Print the file with lexemes colorized
//!   vbtint spans `<path>` [--format `<format>`]            - Dump the classified span table
mod theme;

use clap::{Arg, ArgAction, Command};

use theme::Theme;
use vbtint::vb::classify::classify_vb;
use vbtint::vb::lexeme::CLASSIFICATION_ORDER;
use vbtint::vb::render::{fragments, FragmentKind};
use vbtint::vb::table::LexemeTable;

fn main() {
    let matches = Command::new("vbtint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for viewing VB.NET source with its lexemes colorized")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("highlight")
                .about("Print a source file with each lexeme colorized")
                .arg(
                    Arg::new("path")
                        .help("Path to the VB.NET source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .short('t')
                        .help("Path to a YAML theme file"),
                )
                .arg(
                    Arg::new("legend")
                        .long("legend")
                        .help("Print a color key before the output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("spans")
                .about("Dump the classified span table")
                .arg(
                    Arg::new("path")
                        .help("Path to the VB.NET source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("highlight", highlight_matches)) => {
            let path = highlight_matches.get_one::<String>("path").unwrap();
            let theme_path = highlight_matches.get_one::<String>("theme");
            let legend = highlight_matches.get_flag("legend");
            handle_highlight_command(path, theme_path.map(String::as_str), legend);
        }
        Some(("spans", spans_matches)) => {
            let path = spans_matches.get_one::<String>("path").unwrap();
            let format = spans_matches.get_one::<String>("format").unwrap();
            handle_spans_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the highlight command
fn handle_highlight_command(path: &str, theme_path: Option<&str>, legend: bool) {
    let theme = match theme_path {
        Some(theme_path) => Theme::from_yaml_file(theme_path).unwrap_or_else(|e| {
            eprintln!("Error loading theme: {}", e);
            std::process::exit(1);
        }),
        None => Theme::default(),
    };

    let source = read_source(path);
    let mut table = classify_source(&source);

    if legend {
        print_legend(&theme);
    }
    for fragment in fragments(&source, &mut table) {
        match fragment.kind {
            FragmentKind::Plain => print!("{}", fragment.text),
            FragmentKind::Lexeme(category) => print!("{}", theme.paint(category, fragment.text)),
        }
    }
}

/// Handle the spans command
fn handle_spans_command(path: &str, format: &str) {
    let source = read_source(path);
    let mut table = classify_source(&source);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(table.ordered_view()).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "text" => {
            for span in table.ordered_view() {
                println!(
                    "{:>6}..{:<6} {:<22} {:?}",
                    span.start,
                    span.end(),
                    span.category.label(),
                    &source[span.range()]
                );
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// One sample line per category, in its configured style.
fn print_legend(theme: &Theme) {
    println!("Colors:");
    for category in CLASSIFICATION_ORDER {
        println!("{}", theme.paint(category, category.label()));
    }
    println!();
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn classify_source(source: &str) -> LexemeTable {
    classify_vb(source).unwrap_or_else(|e| {
        eprintln!("Classification error: {}", e);
        std::process::exit(1);
    })
}
