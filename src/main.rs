use anyhow::Result;
use brewdigest::analysis::{Analysis, analyze_casks, analyze_formulae};
use brewdigest::{
    DEFAULT_DATA_FILE, DEFAULT_LEAVES_FILE, DEFAULT_REPORT_FILE, colors, report, snapshot,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brewdigest")]
#[command(author, version, about = "Categorized Markdown report of installed Homebrew packages", long_about = None)]
struct Cli {
    /// Snapshot from `brew info --json=v2 --installed`
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Output of `brew leaves` (optional)
    #[arg(short, long, default_value = DEFAULT_LEAVES_FILE)]
    leaves: PathBuf,

    /// Where to write the report (overwritten)
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Progress line, suppressed when the report itself goes to stdout
macro_rules! progress {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            println!($($arg)*);
        }
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    colors::init_colors();

    let quiet = cli.stdout;

    progress!(quiet, "{} Loading brew data...", "==>".bold().green());
    let (snapshot, leaves) = snapshot::load(&cli.data, &cli.leaves)?;
    progress!(
        quiet,
        "Found {} formulae and {} casks",
        snapshot.formulae.len().to_string().bold(),
        snapshot.casks.len().to_string().bold()
    );
    progress!(quiet, "User-installed leaves: {}", leaves.len().to_string().bold());

    progress!(quiet, "{} Analyzing formulae...", "==>".bold().green());
    let formulae = analyze_formulae(&snapshot.formulae, &leaves);

    progress!(quiet, "{} Analyzing casks...", "==>".bold().green());
    let casks = analyze_casks(&snapshot.casks);

    progress!(quiet, "{} Generating report...", "==>".bold().green());
    let analysis = Analysis { formulae, casks };
    let text = report::render(&analysis);

    if cli.stdout {
        println!("{}", text);
        return Ok(());
    }

    report::write_report(&cli.output, &text)?;

    println!(
        "{} Report written to {}",
        "✓".green(),
        cli.output.display().to_string().cyan()
    );
    println!("   - {} formulae analyzed", analysis.formulae.total());
    println!("   - {} leaves identified", analysis.formulae.leaf_count());
    println!(
        "   - {} cleanup candidates found",
        analysis.formulae.cleanup_candidates.len()
    );

    Ok(())
}
