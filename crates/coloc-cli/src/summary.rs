use std::path::Path;

use console::Style;
use coloc_core::io::batch::BatchSummary;
use coloc_core::pipeline::{AnalysisConfig, BatchConfig, ColocalizationResult};
use coloc_core::stats::RoiStatistics;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            error: Style::new().red(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_stats(s: &Styles, name: &str, threshold: f64, stats: &RoiStatistics) {
    println!("  {}", s.header.apply_to(name));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!("{threshold:.2}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mean"),
        s.value.apply_to(format!("{:.3}", stats.mean))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max"),
        s.value.apply_to(stats.max)
    );
    println!();
}

pub fn print_result_summary(
    config: &AnalysisConfig,
    result: &ColocalizationResult,
    output: &Path,
    nmdp_path: Option<&Path>,
) {
    let s = Styles::new();

    print_title(&s, &result.colormap.title);

    println!(
        "  {:<14}{}",
        s.label.apply_to("Thresholds"),
        s.method.apply_to(&config.threshold)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("ROI pixels"),
        s.value.apply_to(result.total)
    );
    println!();

    print_stats(&s, "Channel 1", result.thresholds.threshold1, &result.stats1);
    print_stats(&s, "Channel 2", result.thresholds.threshold2, &result.stats2);

    println!("  {}", s.header.apply_to("Index of correlation"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Icorr"),
        s.value.apply_to(result.icorr)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Positive"),
        s.value.apply_to(format!("{} / {}", result.positive, result.total))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Colormap"),
        s.path.apply_to(output.display())
    );
    match nmdp_path {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("nMDPs"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("nMDPs"),
            s.disabled.apply_to("not saved")
        ),
    }
    println!();
}

pub fn print_batch_summary(config: &BatchConfig, summary: &BatchSummary) {
    let s = Styles::new();

    print_title(&s, "Batch Summary");

    for outcome in &summary.outcomes {
        match outcome.result {
            Ok(icorr) => println!(
                "  {:<40}{}",
                outcome.pair.stem,
                s.value.apply_to(format!("Icorr {icorr:.4}"))
            ),
            Err(ref e) => println!(
                "  {:<40}{}",
                outcome.pair.stem,
                s.error.apply_to(e)
            ),
        }
    }
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Succeeded"),
        s.method.apply_to(summary.succeeded())
    );
    if summary.failed() > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Failed"),
            s.error.apply_to(summary.failed())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();
}
