use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use linediff::areas::comparator::Comparator;
use linediff::areas::workspace::LineSplitter;
use linediff::artifacts::core::{PagerWriter, should_page};
use minus::Pager;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "LINEDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Locate the first difference between two lines or two files",
    long_about = "This tool reports the first point where two lines of text, or two files, diverge. \
    The report shows both lines with a marker pointing at the differing column.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the report")]
    color: ColorChoice,
    #[arg(long, global = true, help = "Write the report directly to stdout")]
    no_pager: bool,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "lines",
        about = "Show the first difference between two lines",
        long_about = "This command compares two lines given as arguments. \
        Neither line may contain a newline or carriage return."
    )]
    Lines {
        #[arg(index = 1, allow_hyphen_values = true)]
        line1: String,
        #[arg(index = 2, allow_hyphen_values = true)]
        line2: String,
        #[arg(long, help = "Exit with status 1 when the lines differ")]
        exit_code: bool,
    },
    #[command(
        name = "files",
        about = "Show the first difference between two files",
        long_about = "This command compares two files line by line and reports the first \
        differing line together with the differing column inside it."
    )]
    Files {
        #[arg(index = 1)]
        file1: PathBuf,
        #[arg(index = 2)]
        file2: PathBuf,
        #[arg(long, help = "Ignore empty lines in both files")]
        skip_blank: bool,
        #[arg(long, help = "Exit with status 1 when the files differ")]
        exit_code: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => {}
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    apply_color_choice(cli.color);

    let pager = should_page(cli.no_pager).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let mut comparator = Comparator::new(&pwd, writer)?;

    let differs = match &cli.command {
        Commands::Lines {
            line1,
            line2,
            exit_code,
        } => {
            let diff = comparator.diff_lines(line1, line2)?;
            *exit_code && !diff.is_identical()
        }
        Commands::Files {
            file1,
            file2,
            skip_blank,
            exit_code,
        } => {
            let diff = comparator.diff_files(file1, file2, &LineSplitter::new(*skip_blank))?;
            *exit_code && !diff.is_identical()
        }
    };

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(if differs {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
