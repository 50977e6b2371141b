//! Command-line interface for treesketch.
//!
//! Reads a tree drawing or path list from a file, stdin, the clipboard or a
//! built-in template, prints the recovered structure, and optionally creates
//! it on disk.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use treesketch::{
    InputSource, ParseResult, ScaffoldBuilder, ScaffoldOptions, output, parse, read_input,
    scaffold, templates,
};

/// treesketch: turn pasted tree drawings into real directory structures
#[derive(Parser)]
#[command(name = "treesketch", version, about, long_about = None)]
struct Cli {
    /// Input file; `-` reads stdin (default when no other source is given)
    input: Option<PathBuf>,

    /// Read the input from the system clipboard
    #[arg(long, conflicts_with_all = ["input", "template"])]
    clipboard: bool,

    /// Use a built-in template as input
    #[arg(short, long, conflicts_with = "input")]
    template: Option<String>,

    /// List built-in templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Pretty output (indented JSON, a directory and file count under the tree,
    /// one line per scaffolded entry)
    #[arg(short, long)]
    pretty: bool,

    /// Print parser warnings to stderr
    #[arg(short = 'w', long)]
    show_warnings: bool,

    /// Create the parsed structure under this directory
    #[arg(long, value_name = "DIR")]
    apply: Option<PathBuf>,

    /// With --apply: only report what would be created
    #[arg(long, requires = "apply")]
    dry_run: bool,

    /// With --apply: overwrite files that already exist
    #[arg(long, requires = "apply")]
    force: bool,

    /// With --apply: create empty files instead of seeding default content
    #[arg(long, requires = "apply")]
    no_content: bool,

    /// With --apply: glob patterns to skip (can be repeated)
    #[arg(short = 'I', long = "exclude", requires = "apply")]
    exclude_patterns: Vec<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Paths,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tree => output::OutputFormat::Tree,
            OutputFormat::Paths => output::OutputFormat::Paths,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn source(&self) -> InputSource {
        if self.clipboard {
            InputSource::Clipboard
        } else if let Some(name) = &self.template {
            InputSource::Template(name.clone())
        } else {
            match &self.input {
                Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
                _ => InputSource::Stdin,
            }
        }
    }

    fn scaffold_options(&self) -> Option<ScaffoldOptions> {
        let root = self.apply.clone()?;
        Some(
            ScaffoldBuilder::new(root)
                .dry_run(self.dry_run)
                .overwrite(self.force)
                .populate(!self.no_content)
                .exclude_patterns(self.exclude_patterns.clone())
                .build(),
        )
    }
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();

    if cli.list_templates {
        for name in templates::list() {
            println!("{}", name);
        }
        return;
    }

    let text = read_input(&cli.source()).unwrap_or_else(|e| fail(e));
    let result = parse(&text);

    if cli.show_warnings {
        for warning in &result.warnings {
            eprintln!("warning: {}", warning);
        }
    }

    match cli.scaffold_options() {
        Some(options) => run_scaffold(&result, &options, cli.format, cli.pretty),
        None => print_result(&result, cli.format, cli.pretty),
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(result: &ParseResult, format: OutputFormat, pretty: bool) {
    let out = output::format_result(result, format.into(), pretty).unwrap_or_else(|e| fail(e));
    if !out.is_empty() {
        println!("{}", out);
    }
    if pretty && format == OutputFormat::Tree {
        println!(
            "\n{} directories, {} files",
            result.dirs().count(),
            result.files().count()
        );
    }
}

fn run_scaffold(
    result: &ParseResult,
    options: &ScaffoldOptions,
    format: OutputFormat,
    pretty: bool,
) {
    let report = scaffold(&result.nodes, options).unwrap_or_else(|e| fail(e));
    if format == OutputFormat::Json {
        let json = if pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .unwrap_or_else(|e| fail(e));
        println!("{}", json);
        return;
    }
    let verb = if report.dry_run { "would create" } else { "created" };
    if pretty {
        for dir in &report.created_dirs {
            println!("{} {}/", verb, dir);
        }
        for file in &report.created_files {
            println!("{} {}", verb, file);
        }
        for path in &report.skipped {
            println!("exists  {}", path);
        }
        return;
    }
    println!(
        "{} {} directories and {} files under {} ({} existing, {} excluded)",
        verb,
        report.created_dirs.len(),
        report.created_files.len(),
        options.root.display(),
        report.skipped.len(),
        report.excluded.len()
    );
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    exit(1);
}
