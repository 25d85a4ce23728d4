//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{JudolArgs, OutputFormat};
use crate::detector::{ExplanationResult, PredictionResult};
use crate::error::Result;
use crate::report::{BatchReport, ScoredComment};

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub text: String,
    pub canonical: String,
    pub normalized: String,
    pub tokens: Vec<Token>,
}

/// Result structure for keyword aggregation.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordResults {
    pub texts: usize,
    pub keywords: Vec<(String, usize)>,
}

/// Something the CLI can print.
pub trait Render: Serialize {
    /// Print in human-readable form.
    fn render_human(&self, args: &JudolArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(result: &T, args: &JudolArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.render_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &JudolArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl Render for Vec<NormalizationResult> {
    fn render_human(&self, args: &JudolArgs) {
        for result in self {
            if args.verbosity() > 1 {
                println!("{} -> {}", result.text, result.normalized);
                println!("  canonical: {}", result.canonical);
                for token in &result.tokens {
                    println!("  {:>3} {:<12} {}", token.position, token.kind.to_string(), token.text);
                }
            } else {
                println!("{}", result.normalized);
            }
        }
    }
}

impl Render for PredictionResult {
    fn render_human(&self, _args: &JudolArgs) {
        print_prediction(self);
    }
}

impl Render for ExplanationResult {
    fn render_human(&self, _args: &JudolArgs) {
        print_prediction(&self.prediction);
        if self.features.is_empty() {
            return;
        }
        println!();
        println!("Top features:");
        println!("─────────────");
        println!("{:<24} {:>8} {:>10} {:>12}", "token", "tf-idf", "coef", "contribution");
        for feature in &self.features {
            println!(
                "{:<24} {:>8.4} {:>10.4} {:>+12.4}",
                feature.token, feature.feature_weight, feature.coefficient, feature.contribution
            );
        }
    }
}

impl Render for BatchReport {
    fn render_human(&self, args: &JudolArgs) {
        let stats = &self.stats;
        println!("Comment Report:");
        println!("═══════════════");
        println!("Total comments: {}", stats.total);
        println!(
            "Judol: {} ({})",
            stats.judol_count,
            format_percentage(stats.judol_count, stats.total)
        );
        println!(
            "Clean: {} ({})",
            stats.clean_count,
            format_percentage(stats.clean_count, stats.total)
        );

        print_keywords("Top judol keywords", &stats.top_keywords);
        print_keywords("Top clean keywords", &stats.top_keywords_negative);
        print_comments("Most confident judol", &stats.high_confidence_spam);
        print_comments("Unsure", &stats.unsure_comments);

        if !stats.sample_clean_comments.is_empty() {
            println!();
            println!("Clean samples:");
            for text in &stats.sample_clean_comments {
                println!("  {}", truncate(text, 80));
            }
        }

        if args.verbosity() > 1 {
            print_comments("All comments", &self.comments);
        }
    }
}

impl Render for KeywordResults {
    fn render_human(&self, args: &JudolArgs) {
        if args.verbosity() > 0 {
            println!("{} texts", self.texts);
        }
        for (term, count) in &self.keywords {
            println!("{count:>6}  {term}");
        }
    }
}

fn print_prediction(prediction: &PredictionResult) {
    println!("Label: {}", prediction.label_desc());
    println!("Probability: {:.4}", prediction.probability);
    println!("Normalized: {}", prediction.canonical_text);
}

fn print_keywords(title: &str, keywords: &[(String, usize)]) {
    if keywords.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    let line: Vec<String> = keywords
        .iter()
        .map(|(term, count)| format!("{term} ({count})"))
        .collect();
    println!("  {}", line.join(", "));
}

fn print_comments(title: &str, comments: &[ScoredComment]) {
    if comments.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for comment in comments {
        println!(
            "  [{:.3}] {}: {}",
            comment.probability,
            comment.author,
            truncate(&comment.text, 80)
        );
    }
}

/// Format a count as a percentage of `total`.
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

/// Cut `text` to at most `max_chars` characters, marking the cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(1, 4), "25.0%");
        assert_eq!(format_percentage(0, 0), "0.0%");
        assert_eq!(format_percentage(2, 3), "66.7%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line\nbreak", 20), "line break");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}
