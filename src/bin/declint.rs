use clap::Parser as CParser;
use colored::Colorize;

use declint::analyzer::{analyze_with_budget, token_rows, Analysis};
use declint::repair::MAX_EDITS;

#[derive(CParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Source file to analyze.
    #[arg(short, long)]
    file: std::path::PathBuf,

    /// Cap on the number of repair edits.
    #[arg(short, long, default_value_t = MAX_EDITS)]
    max_edits: usize,

    /// Emit the analysis as JSON instead of a table.
    #[arg(short, long)]
    json: bool,

    /// Log the repair search.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).unwrap();

    let file_content = std::fs::read_to_string(&args.file).unwrap_or_else(|_| {
        panic!("Could not read file: '{}'", args.file.to_string_lossy())
    });

    let analysis = analyze_with_budget(&file_content, args.max_edits);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).expect("analysis serializes")
        );
    } else {
        print_analysis(&analysis);
    }

    if !analysis.errors.is_empty() {
        std::process::exit(1);
    }
}

fn print_analysis(analysis: &Analysis) {
    println!(
        "{:<6} {:<7} {:<7} {:<12} VALUE",
        "LINE", "START", "END", "KIND"
    );
    for row in token_rows(&analysis.tokens) {
        println!(
            "{:<6} {:<7} {:<7} {:<12} {}",
            row.line, row.start_column, row.end_column, row.kind, row.value
        );
    }

    for error in &analysis.errors {
        eprintln!("{}", error.to_string().red());
    }
}
