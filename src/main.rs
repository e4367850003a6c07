mod cli;

use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use cli::commands::{Cli, CompareArgs, Commands};
use cli::progress::{restore_cursor, CliReporter};
use cli::{logging, prompt};
use colored::*;
use console::Term;
use dotenv::dotenv;
use same_same::config::{load_configuration, split_filter_list};
use same_same::report::format_seconds;
use same_same::scanner::{self, FileFilter};
use same_same::{
    AppConfig, CompareEngine, FileNormalizer, ProgressReporter, ResultTable, SilentReporter,
};
use tracing::{debug, error, info};

fn main() {
    dotenv().ok();

    let guard = logging::init_logger();
    configure_color(Term::stdout().is_term());

    let config = match load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            drop(guard);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    let result = match args.command {
        Some(Commands::Compare(compare_args)) => run_compare(&config, compare_args),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            Ok(())
        }
        None => run_compare(&config, CompareArgs::default()),
    };

    restore_cursor();

    if let Err(err) = result {
        error!("{:#}", err);
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        drop(guard);
        process::exit(1);
    }
}

/// Piped or redirected reports stay free of ANSI styling.
fn configure_color(stdout_is_term: bool) {
    if !stdout_is_term {
        colored::control::set_override(false);
    }
}

fn run_compare(config: &AppConfig, args: CompareArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let root = match args.dir.or_else(|| config.root_dir.as_ref().map(PathBuf::from)) {
        Some(dir) if dir.is_dir() => dir,
        Some(dir) => {
            println!("'{}' is not a valid directory", dir.display());
            prompt::prompt_dir(&mut input, &mut out)?
        }
        None => prompt::prompt_dir(&mut input, &mut out)?,
    };

    let extensions = match args.extensions.or_else(|| config.extensions.clone()) {
        Some(list) => split_filter_list(&list),
        None => prompt::prompt_space_delimited(&mut input, &mut out, prompt::EXTENSIONS_PROMPT)?,
    };
    let file_names = match args.names.or_else(|| config.file_names.clone()) {
        Some(list) => split_filter_list(&list),
        None => prompt::prompt_space_delimited(&mut input, &mut out, prompt::NAMES_PROMPT)?,
    };
    let diff_tool = args.diff_tool.unwrap_or_else(|| config.diff_tool.clone());

    let filter = FileFilter::new(&extensions, &file_names).context("Invalid file filter")?;
    print_summary(&root, &filter);

    let reporter: Box<dyn ProgressReporter> = if config.progress && !args.no_progress {
        Box::new(CliReporter::new())
    } else {
        Box::new(SilentReporter)
    };

    let start = Instant::now();
    let files = scanner::discover_files(&root, &filter)
        .with_context(|| format!("Error scanning {}", root.display()))?;
    reporter.on_discover_complete(files.len(), start.elapsed().as_secs_f64());
    debug!("Files: {:?}", files);

    let path_width = scanner::max_path_width(&files);
    let engine = CompareEngine::new(files);
    let outcome = engine.compare(&FileNormalizer, reporter.as_ref())?;

    // separates the progress output from the table
    println!("\n");

    let total_visits = outcome.total_visits;
    let scored = outcome.pairs.len();
    let table = ResultTable::new(outcome.pairs.into_ranked())
        .with_total_visits(total_visits)
        .with_path_width(path_width)
        .with_diff_tool(&diff_tool);
    print!("{table}");

    let elapsed = start.elapsed().as_secs_f64();
    println!("{} Sec", format_seconds(elapsed));

    info!(
        "{} files, {} scored pairs, {} total",
        format!("{}", engine.files().len()).cyan(),
        format!("{}", scored).cyan(),
        format!("{:.2}s", elapsed).green(),
    );

    Ok(())
}

fn print_summary(root: &Path, filter: &FileFilter) {
    println!("{}", "Summary:".bold());
    println!("{:>20}{}", "Directory Path: ", root.display());
    println!("{:>20}{}", "File Extension(s): ", filter.extensions());
    println!("{:>20}{}", "File Name(s): ", filter.file_names());
    println!("{}\n", "=".repeat(100));
}
