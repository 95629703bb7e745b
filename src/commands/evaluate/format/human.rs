//! Human-readable dashboard for the evaluate command

use crate::cli::Cli;
use crate::commands::evaluate::Dashboard;
use revisor_core::stats::HistogramBin;

/// Width of per-document score bars, in cells
const BAR_WIDTH: usize = 20;

/// Width of the longest histogram bar, in cells
const HISTOGRAM_WIDTH: usize = 20;

/// Output in human-readable format
pub fn output_human(cli: &Cli, dashboard: &Dashboard, show_comments: bool) {
    if !cli.quiet {
        println!(
            "Project: {} ({})",
            dashboard.project_name, dashboard.project_code
        );
        println!(
            "Evaluated: {}",
            dashboard.evaluated_at.format("%d/%m/%Y %H:%M:%S")
        );
        println!();
    }

    print_ranking(dashboard);

    if cli.quiet {
        return;
    }

    print_metrics(dashboard);
    print_histogram(&dashboard.histogram);
    print_bars(dashboard);

    if show_comments {
        print_comments(dashboard);
    }

    for path in &dashboard.exports {
        println!("Report written to {}", path.display());
    }
}

fn print_ranking(dashboard: &Dashboard) {
    let width = name_width(dashboard.ranking.iter().map(|r| r.document_id));
    println!("Results");
    println!(
        "  {:>3}  {:<width$}  {:>12}",
        "#",
        "Document",
        format!("Score (0-{})", dashboard.max_score),
        width = width
    );
    for entry in &dashboard.ranking {
        println!(
            "  {:>3}  {:<width$}  {:>12.2}",
            entry.rank,
            entry.document_id,
            entry.total_score,
            width = width
        );
    }
}

fn print_metrics(dashboard: &Dashboard) {
    let summary = &dashboard.summary;
    println!();
    println!("Metrics");
    println!("  Mean score:     {:.2}", summary.mean);
    println!(
        "  Passing (>={}): {} ({:.1}%)",
        summary.pass_threshold, summary.passing, summary.passing_pct
    );
    println!("  Highest score:  {:.2}", summary.max);
    println!("  Lowest score:   {:.2}", summary.min);
}

fn print_histogram(bins: &[HistogramBin]) {
    println!();
    println!("Score distribution");
    for line in histogram_lines(bins) {
        println!("  {}", line);
    }
}

fn print_bars(dashboard: &Dashboard) {
    let width = name_width(dashboard.results.iter().map(|r| r.document_id.as_str()));
    println!();
    println!("Scores");
    for result in dashboard.results {
        println!(
            "  {:<width$}  {}  {:.2}/{}",
            result.document_id,
            score_bar(result.total_score, dashboard.max_score, BAR_WIDTH),
            result.total_score,
            dashboard.max_score,
            width = width
        );
    }
}

fn print_comments(dashboard: &Dashboard) {
    println!();
    println!("Comments");
    for result in dashboard.results {
        println!("  {}", result.document_id);
        let width = name_width(result.criteria_results.iter().map(|r| r.criterion.as_str()));
        for r in &result.criteria_results {
            println!(
                "    {:<width$}  {}/{}  {}",
                r.criterion,
                r.points_awarded,
                r.max_points,
                r.comment,
                width = width
            );
        }
    }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(8)
}

/// Filled/empty bar proportional to `score / max`
pub fn score_bar(score: f64, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((score / f64::from(max)) * width as f64)
            .round()
            .clamp(0.0, width as f64) as usize
    };
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

/// One line per bin: range, bar scaled to the fullest bin, count
pub fn histogram_lines(bins: &[HistogramBin]) -> Vec<String> {
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0);
    bins.iter()
        .map(|bin| {
            let len = if peak == 0 {
                0
            } else {
                bin.count * HISTOGRAM_WIDTH / peak
            };
            format!(
                "{:>6.2} - {:<6.2} |{} {}",
                bin.lower,
                bin.upper,
                "#".repeat(len),
                bin.count
            )
        })
        .collect()
}
