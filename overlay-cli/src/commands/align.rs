//! Align command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::PageProgress;
use anyhow::{Context, Result};
use clap::Args;
use overlay_engine::{AlignFlag, Input, Output, PageProcessor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Page JSON files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Align flag: "on" resolves overlaps, anything else keeps raw boxes
    #[arg(long, value_name = "on|off")]
    pub align: Option<AlignFlag>,

    /// Skip geometry validation
    #[arg(long)]
    pub no_validate: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let processor = self.processor(&config);
        let files = resolve_patterns(&self.input)?;

        log::info!(
            "Aligning {} file(s) with align={}",
            files.len(),
            processor.config().align
        );

        let progress = PageProgress::new(files.len(), self.quiet);

        let parallel = self.parallel || config.performance.parallel;
        let results = if parallel && files.len() > 1 {
            let threads = self
                .threads
                .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
                .unwrap_or_else(num_cpus::get);
            log::debug!("Using {threads} worker thread(s)");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| {
                        let result = process_file(&processor, path);
                        record(&progress, path, &result);
                        result
                    })
                    .collect::<Vec<_>>()
            })
        } else {
            files
                .iter()
                .map(|path| {
                    let result = process_file(&processor, path);
                    record(&progress, path, &result);
                    result
                })
                .collect()
        };
        let totals = progress.finish();
        log::info!("Aligned {totals}");

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = self.writer()?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (path, result) in files.iter().zip(results) {
            let output = result?;
            formatter.format_page(&path.display().to_string(), &output)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Build the page processor; flags override the configuration file
    fn processor(&self, config: &CliConfig) -> PageProcessor {
        let mut engine = config.engine_config();
        if let Some(flag) = self.align {
            engine.align = flag;
        }
        if self.no_validate {
            engine.validate = false;
        }
        PageProcessor::with_config(engine)
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        Ok(writer)
    }
}

fn process_file(processor: &PageProcessor, path: &Path) -> Result<Output> {
    processor
        .process(Input::from_file(path))
        .with_context(|| format!("Failed to process {}", path.display()))
}

fn record(progress: &PageProgress, path: &Path, result: &Result<Output>) {
    let stats = result.as_ref().ok().map(|output| &output.metadata.stats);
    progress.page_resolved(&path.display().to_string(), stats);
}
