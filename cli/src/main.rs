//! pdfsect CLI - research paper section extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsect::render::{self, JsonFormat, MarkdownOptions};
use pdfsect::{
    ErrorMode, ExtractOptions, ExtractionObserver, ExtractionResult, ExtractionStats,
    HeadingDetector, NormalizeOptions, PageSelection, PdfLoader, SectionExtractor, Stage,
    TextNormalizer,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pdfsect")]
#[command(version)]
#[command(about = "Split research PDFs into ordered, typed sections", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    extract: ExtractArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every extraction command.
#[derive(Args, Clone, Debug)]
struct ExtractArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long, global = true, env = "PDFSECT_PAGES")]
    pages: Option<String>,

    /// Detect headings with the line rule only
    #[arg(long, global = true)]
    no_sentences: bool,

    /// Skip Unicode normalization and ligature expansion
    #[arg(long, global = true)]
    no_unicode: bool,

    /// Fail on the first page whose text cannot be extracted
    #[arg(long, global = true)]
    strict: bool,

    /// Hide the progress spinner
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl ExtractArgs {
    fn to_options(&self) -> CliResult<ExtractOptions> {
        let pages = match self.pages.as_deref() {
            Some(p) => PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?,
            None => PageSelection::All,
        };

        let normalize = if self.no_unicode {
            NormalizeOptions::rewrites_only()
        } else {
            NormalizeOptions::default()
        };

        let error_mode = if self.strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Lenient
        };

        Ok(ExtractOptions::new()
            .with_pages(pages)
            .with_error_mode(error_mode)
            .with_normalize(normalize)
            .with_sentence_pass(!self.no_sentences))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract sections as JSON
    Sections {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract sections as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading level for section headings (1-6)
        #[arg(long, default_value = "2")]
        heading_level: u8,

        /// Omit the type hint comment under each heading
        #[arg(long)]
        no_type_hints: bool,
    },

    /// Print the normalized text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List detected headings and the pass that found them
    Headings {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show extraction statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Drives a spinner from pipeline callbacks and keeps stage warnings
/// for the summary.
struct ProgressObserver {
    bar: ProgressBar,
    warnings: Vec<String>,
}

impl ProgressObserver {
    fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
            {
                bar.set_style(style);
            }
            bar
        };
        Self {
            bar,
            warnings: Vec::new(),
        }
    }

    fn print_warnings(&self) {
        for warning in &self.warnings {
            eprintln!("{}: {}", "Warning".yellow().bold(), warning);
        }
    }
}

impl ExtractionObserver for ProgressObserver {
    fn on_stage(&mut self, stage: Stage) {
        self.bar.set_message(format!("{}...", stage));
        self.bar.tick();
    }

    fn on_document_loaded(&mut self, page_count: u32, chars: usize) {
        log::debug!("{} pages, {} chars", page_count, chars);
    }

    fn on_warning(&mut self, stage: Stage, message: &str) {
        self.warnings.push(format!("{}: {}", stage, message));
    }

    fn on_finished(&mut self, stats: &ExtractionStats) {
        self.bar
            .set_message(format!("{} sections", stats.section_count));
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let args = cli.extract;

    let result = match cli.command {
        Some(Commands::Sections {
            input,
            output,
            compact,
        }) => cmd_sections(&input, output.as_deref(), compact, &args),
        Some(Commands::Markdown {
            input,
            output,
            heading_level,
            no_type_hints,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            heading_level,
            !no_type_hints,
            &args,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), &args),
        Some(Commands::Headings { input }) => cmd_headings(&input, &args),
        Some(Commands::Info { input, json }) => cmd_info(&input, json, &args),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: sections as JSON
            if let Some(input) = cli.input {
                cmd_sections(&input, None, false, &args)
            } else {
                println!("{}", "Usage: pdfsect <FILE>".yellow());
                println!("       pdfsect --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extract(input: &Path, args: &ExtractArgs) -> CliResult<ExtractionResult> {
    let extractor = SectionExtractor::with_options(args.to_options()?);
    let mut progress = ProgressObserver::new(args.quiet);
    let result = extractor.try_run_file_observed(input, &mut progress);
    progress.bar.finish_and_clear();
    progress.print_warnings();
    Ok(result?)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_sections(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &ExtractArgs,
) -> CliResult<()> {
    let result = extract(input, args)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&result.sections, format)?;
    write_output(output, &json)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    heading_level: u8,
    type_hints: bool,
    args: &ExtractArgs,
) -> CliResult<()> {
    let result = extract(input, args)?;

    let options = MarkdownOptions::new()
        .with_heading_level(heading_level)
        .with_type_hints(type_hints);
    let markdown = render::to_markdown(&result.sections, &options);
    write_output(output, &markdown)
}

fn load_normalized(input: &Path, args: &ExtractArgs) -> CliResult<String> {
    let options = args.to_options()?;
    let loaded = PdfLoader::with_options(options.load).try_load(input)?;
    let normalizer = TextNormalizer::new(options.normalize)?;
    Ok(normalizer.normalize(&loaded.text))
}

fn cmd_text(input: &Path, output: Option<&Path>, args: &ExtractArgs) -> CliResult<()> {
    let text = load_normalized(input, args)?;
    write_output(output, &text)
}

fn cmd_headings(input: &Path, args: &ExtractArgs) -> CliResult<()> {
    let text = load_normalized(input, args)?;

    let detector = if args.no_sentences {
        HeadingDetector::rule_only()?
    } else {
        HeadingDetector::new()?
    };
    let report = detector.detect_detailed(&text);

    println!("{}", "Detected Headings".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for heading in report.headings() {
        let origin = match (
            report.rule.contains(&heading),
            report.sentence.contains(&heading),
        ) {
            (true, true) => "rule+sentence",
            (true, false) => "rule",
            _ => "sentence",
        };
        println!("{} {}", format!("[{}]", origin).dimmed(), heading);
    }

    if detector.has_sentence_pass() && !report.sentence_pass_ran {
        eprintln!(
            "{}: sentence pass failed; rule headings only",
            "Warning".yellow().bold()
        );
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool, args: &ExtractArgs) -> CliResult<()> {
    let result = extract(input, args)?;
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Ok(version) = pdfsect::loader::sniff_path(input) {
        println!("{}: {}", "Format".bold(), version);
    }
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Pages with text".bold(), stats.pages_with_text);
    println!("{}: {}", "Raw characters".bold(), stats.raw_chars);
    println!("{}: {}", "Normalized characters".bold(), stats.normalized_chars);

    println!();
    println!("{}", "Section Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {} ({} rule, {} sentence)",
        "Headings".bold(),
        stats.heading_count,
        stats.rule_headings,
        stats.sentence_headings
    );
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Empty sections dropped".bold(), stats.dropped_sections);
    println!("{}: {}", "Words".bold(), stats.word_count);

    for section in &result.sections {
        println!(
            "  {} {:>3}  {:<14} {}",
            "├─".dimmed(),
            section.position,
            section.type_hint.to_string().dimmed(),
            section.heading
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfsect".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Research paper section extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ExtractArgs {
        ExtractArgs {
            pages: None,
            no_sentences: false,
            no_unicode: false,
            strict: false,
            quiet: true,
        }
    }

    #[test]
    fn test_default_args_map_to_default_options() {
        let options = args().to_options().unwrap();
        assert_eq!(options.load.pages, PageSelection::All);
        assert_eq!(options.load.error_mode, ErrorMode::Lenient);
        assert!(options.sentence_pass);
        assert!(options.normalize.normalize_unicode);
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = ExtractArgs {
            pages: Some("2-4".into()),
            no_sentences: true,
            no_unicode: true,
            strict: true,
            quiet: true,
        };
        let options = args.to_options().unwrap();
        assert_eq!(options.load.pages, PageSelection::Range(2..=4));
        assert_eq!(options.load.error_mode, ErrorMode::Strict);
        assert!(!options.sentence_pass);
        assert!(!options.normalize.normalize_unicode);
    }

    #[test]
    fn test_invalid_page_range() {
        let args = ExtractArgs {
            pages: Some("5-2".into()),
            ..args()
        };
        assert!(args.to_options().is_err());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(extract(Path::new("/no/such/paper.pdf"), &args()).is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.json");
        write_output(Some(&path), "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["pdfsect", "info", "paper.pdf", "--no-sentences", "--quiet"])
            .unwrap();
        assert!(cli.extract.no_sentences);
        assert!(matches!(cli.command, Some(Commands::Info { json: false, .. })));
    }
}
