//! Command implementations for the judol CLI.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::join_tokens;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DetectorConfig;
use crate::detector::SpamDetector;
use crate::error::{JudolError, Result};
use crate::keywords::KeywordAggregator;
use crate::report::{RawComment, analyze_comments};

/// Execute a CLI command.
pub fn execute_command(args: JudolArgs) -> Result<()> {
    let config = detector_config(&args)?;
    match &args.command {
        Command::Normalize(normalize_args) => normalize_texts(normalize_args, &config, &args),
        Command::Classify(classify_args) => classify_text(classify_args, config, &args),
        Command::Report(report_args) => report_comments(report_args, config, &args),
        Command::Keywords(keywords_args) => aggregate_keywords(keywords_args, &config, &args),
    }
}

/// Build the detector configuration: file (or defaults), environment, then
/// command line overrides.
pub fn detector_config(args: &JudolArgs) -> Result<DetectorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            DetectorConfig::from_file(path)?
        }
        None => DetectorConfig::default(),
    };
    config.apply_env();
    if let Some(model) = &args.model {
        config.model_path = model.clone();
    }
    if let Some(threshold) = args.threshold {
        config.decision_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

/// Print the normalized form of every text.
fn normalize_texts(args: &NormalizeArgs, config: &DetectorConfig, cli_args: &JudolArgs) -> Result<()> {
    let normalizer = TextNormalizer::from_config(&config.normalizer);
    let results: Vec<NormalizationResult> = args
        .texts
        .iter()
        .map(|text| {
            let canonical = normalizer.canonicalize(text);
            let tokens = normalizer.analyze_canonical(&canonical);
            NormalizationResult {
                text: text.clone(),
                normalized: join_tokens(&tokens),
                canonical,
                tokens,
            }
        })
        .collect();
    output_result(&results, cli_args)
}

/// Classify one comment, optionally with its explanation.
fn classify_text(args: &ClassifyArgs, config: DetectorConfig, cli_args: &JudolArgs) -> Result<()> {
    let detector = SpamDetector::new(config);
    if args.explain {
        let mut explanation = detector.classify_and_explain(&args.text)?;
        explanation.features.truncate(args.top);
        output_result(&explanation, cli_args)
    } else {
        let prediction = detector.classify(&args.text)?;
        output_result(&prediction, cli_args)
    }
}

/// Score a JSON array of comments.
fn report_comments(args: &ReportArgs, config: DetectorConfig, cli_args: &JudolArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input)?;
    let comments: Vec<RawComment> = serde_json::from_str(&content)?;
    info!("Read {} comments from {}", comments.len(), args.input.display());

    let detector = SpamDetector::new(config);
    detector.warm_up()?;

    let start_time = Instant::now();
    let mut report = analyze_comments(&detector, &comments)?;
    info!("Scored in {}ms", start_time.elapsed().as_millis());

    if !args.all && cli_args.output_format == OutputFormat::Json {
        report.comments.clear();
    }
    output_result(&report, cli_args)
}

/// Aggregate keywords over a file of texts.
fn aggregate_keywords(args: &KeywordsArgs, config: &DetectorConfig, cli_args: &JudolArgs) -> Result<()> {
    let file = File::open(&args.input)?;
    let lines: Vec<String> = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(JudolError::other(format!(
            "{} contains no text",
            args.input.display()
        )));
    }

    let texts: Vec<String> = if args.raw {
        lines
    } else {
        let normalizer = TextNormalizer::from_config(&config.normalizer);
        lines.par_iter().map(|line| normalizer.normalize(line)).collect()
    };

    let aggregator = KeywordAggregator::with_min_len(args.min_len);
    let result = KeywordResults {
        texts: texts.len(),
        keywords: aggregator.top(&texts, args.top),
    };
    output_result(&result, cli_args)
}
