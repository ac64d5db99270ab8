//! extract_revenue CLI - read the Revenue figure from a financial statement

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use finrev::extract::{DEFAULT_FALLBACK_COLUMN, DEFAULT_HEADER_ROWS, DEFAULT_HEADING, DEFAULT_LABEL};
use finrev::render::write_report;
use finrev::{
    AnalyzerOptions, DocumentAnalyzer, ExtractOptions, ExtractionResult, JsonFormat, ReportFormat,
    RevenueExtractor, SavedResponseAnalyzer, TextractAnalyzer, DEFAULT_FEATURES,
};

/// Exit code for bad input: unreadable or unsupported files, bad saved responses.
const EXIT_INPUT: i32 = 1;
/// Exit code for analysis or extraction failures.
const EXIT_EXTRACTION: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "extract_revenue")]
#[command(version)]
#[command(
    about = "Extract Revenue from the 'STATEMENT OF PROFIT OR LOSS' using Textract",
    long_about = None
)]
struct Cli {
    /// Path to the statement PDF
    #[arg(long, value_name = "FILE", required_unless_present = "blocks")]
    pdf: Option<PathBuf>,

    /// Target year column header, e.g., 2024
    #[arg(long, value_name = "YEAR")]
    target_year: Option<String>,

    /// Read a saved analysis response instead of calling Textract
    #[arg(long, value_name = "JSON")]
    blocks: Option<PathBuf>,

    /// Save the raw analysis response as JSON
    #[arg(long, value_name = "JSON", conflicts_with = "blocks")]
    save_blocks: Option<PathBuf>,

    /// Heading that marks the statement page
    #[arg(long, default_value = DEFAULT_HEADING)]
    heading: String,

    /// Row label to extract
    #[arg(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// Column used when no header matches the target year (0-indexed)
    #[arg(long, default_value_t = DEFAULT_FALLBACK_COLUMN)]
    fallback_column: usize,

    /// Leading rows scanned for the target year
    #[arg(long, default_value_t = DEFAULT_HEADER_ROWS)]
    header_rows: usize,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// AWS credentials profile
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

impl Cli {
    fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with_heading(&self.heading)
            .with_label(&self.label)
            .with_fallback_column(self.fallback_column)
            .with_header_rows(self.header_rows);
        if let Some(ref year) = self.target_year {
            options = options.with_target_year(year);
        }
        options
    }

    fn report_format(&self) -> ReportFormat {
        match (self.json, self.compact) {
            (false, _) => ReportFormat::Text,
            (true, false) => ReportFormat::Json(JsonFormat::Pretty),
            (true, true) => ReportFormat::Json(JsonFormat::Compact),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_exit_code(&e) {
            Some(code) => {
                let _ = e.print();
                std::process::exit(code);
            }
            None => e.exit(),
        },
    };

    if let Err(e) = run(&cli) {
        let code = match e.downcast_ref::<finrev::Error>() {
            Some(err) => exit_code(err),
            None => EXIT_INPUT,
        };
        eprintln!("{} {}", "Error:".red().bold(), error_message(e.as_ref()));
        std::process::exit(code);
    }
}

/// Failure text following `Error:`, tagged with the stage for library errors.
fn error_message(e: &(dyn std::error::Error + 'static)) -> String {
    match e.downcast_ref::<finrev::Error>() {
        Some(err) => format!("[{}] {}", err.stage(), err),
        None => e.to_string(),
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = RevenueExtractor::new().with_options(cli.extract_options());

    let result = match (&cli.blocks, &cli.pdf) {
        (Some(blocks), _) => cmd_saved(&extractor, blocks)?,
        (None, Some(pdf)) => cmd_analyze(&extractor, cli, pdf)?,
        (None, None) => return Err("either --pdf or --blocks is required".into()),
    };

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &result, cli.report_format())?;
    Ok(())
}

fn cmd_saved(
    extractor: &RevenueExtractor,
    blocks: &Path,
) -> Result<ExtractionResult, Box<dyn std::error::Error>> {
    let analyzer = SavedResponseAnalyzer::new(blocks);
    let response = analyzer.analyze(&[], DEFAULT_FEATURES)?;
    Ok(extractor.extract_response(&response)?)
}

fn cmd_analyze(
    extractor: &RevenueExtractor,
    cli: &Cli,
    pdf: &Path,
) -> Result<ExtractionResult, Box<dyn std::error::Error>> {
    let mut analyzer_options = AnalyzerOptions::new();
    if let Some(ref region) = cli.region {
        analyzer_options = analyzer_options.with_region(region);
    }
    if let Some(ref profile) = cli.profile {
        analyzer_options = analyzer_options.with_profile(profile);
    }
    let analyzer = TextractAnalyzer::with_options(&analyzer_options)?;

    let extractor = match cli.save_blocks {
        Some(ref path) => extractor.clone().save_response_to(path),
        None => extractor.clone(),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Analyzing {}...", pdf.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = extractor.extract_file(&analyzer, pdf);
    spinner.finish_and_clear();

    if let Some(ref path) = cli.save_blocks {
        if result.is_ok() || matches!(result, Err(ref e) if e.is_not_found()) {
            eprintln!("{} {}", "Saved analysis to".green(), path.display());
        }
    }
    Ok(result?)
}

/// Exit code for a command-line parse failure; `None` for help and version output.
fn usage_exit_code(err: &clap::Error) -> Option<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(EXIT_INPUT),
    }
}

fn exit_code(err: &finrev::Error) -> i32 {
    match err {
        finrev::Error::Io(_)
        | finrev::Error::UnknownFormat
        | finrev::Error::DocumentTooLarge { .. }
        | finrev::Error::InvalidResponse(_) => EXIT_INPUT,
        _ => EXIT_EXTRACTION,
    }
}
