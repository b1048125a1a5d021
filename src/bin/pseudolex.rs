use clap::Parser;
use pseudolex::{
    LanguageMetadata, OutputFormat, PseudolexError, PseudolexResult, ScanConfig, TokenSpan,
    Tokenizer,
};
use std::{
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to tokenize; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Recognize `//` and `/* */` comments
    #[arg(long)]
    comments: bool,

    /// Print the language metadata as JSON and exit
    #[arg(long)]
    metadata: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> PseudolexResult<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.comments {
        config.recognize_comments = true;
    }
    Ok(config)
}

fn read_sources(cli: &Cli) -> PseudolexResult<Vec<(String, String)>> {
    if cli.files.is_empty() {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(vec![("<stdin>".to_string(), source)]);
    }

    cli.files
        .iter()
        .map(|path| -> PseudolexResult<(String, String)> {
            let source = std::fs::read_to_string(path)
                .map_err(|e| PseudolexError::read(path.display().to_string(), e))?;
            Ok((path.display().to_string(), source))
        })
        .collect()
}

fn write_span(
    out: &mut impl Write,
    file: &str,
    span: &TokenSpan,
    config: &ScanConfig,
) -> PseudolexResult<()> {
    match config.format {
        OutputFormat::Tsv => writeln!(out, "{}", span)?,
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file": file,
                "line": span.line,
                "column": span.column,
                "start": span.start,
                "end": span.end,
                "class": span.token.class(),
                "scope": span.token.scope(&config.scope_suffix),
                "lexeme": span.token.lexeme,
            });
            writeln!(out, "{}", value)?
        }
        OutputFormat::Scopes => writeln!(out, "{}", span.token.scope(&config.scope_suffix))?,
    }
    Ok(())
}

fn run(cli: &Cli) -> PseudolexResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.metadata {
        let metadata = serde_json::to_string_pretty(&LanguageMetadata::pseudocode())?;
        writeln!(out, "{}", metadata)?;
        return Ok(());
    }

    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let tokenizer = Tokenizer::with_options(config.scan_options());
    let sources = read_sources(cli)?;
    // Json records carry the file name; the line formats get a header per file.
    let headers = sources.len() > 1 && config.format != OutputFormat::Json;
    for (name, source) in &sources {
        let spans = tokenizer.tokenize(source);
        info!("{}: {} tokens", name, spans.len());
        if headers {
            writeln!(out, "==> {} <==", name)?;
        }
        for span in &spans {
            write_span(&mut out, name, span, &config)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
