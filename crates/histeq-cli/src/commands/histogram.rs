use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use histeq_core::color::luminance::{to_luminance, Quantization};
use histeq_core::histogram::{analyze, CumulativeTable, FrequencyTable};
use histeq_core::io::image_io::{load_image, SourceImage};
use serde::Serialize;

#[derive(Args)]
pub struct HistogramArgs {
    /// Input image file
    pub file: PathBuf,

    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Include the cumulative distribution
    #[arg(long)]
    pub cumulative: bool,

    /// Round luminance to the nearest level instead of truncating
    #[arg(long)]
    pub round_luminance: bool,
}

/// Value/frequency series in a shape plotting tools can consume directly.
#[derive(Serialize)]
struct HistogramExport<'a> {
    pixels: usize,
    levels: usize,
    frequencies: &'a FrequencyTable,
    normalized: Vec<(u8, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cumulative: Option<CumulativeExport>,
}

#[derive(Serialize)]
struct CumulativeExport {
    table: CumulativeTable,
    normalized: Vec<(u8, f64)>,
    reference_line: Option<[(f64, f64); 2]>,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let source = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let frame = match source {
        SourceImage::Gray(frame) => frame,
        SourceImage::Color(color) => {
            let quantization = if args.round_luminance {
                Quantization::Round
            } else {
                Quantization::Truncate
            };
            to_luminance(&color, quantization)
                .context("Luminance conversion failed")?
        }
    };

    let table = analyze(&frame).context("Histogram analysis failed")?;
    let cumulative = args.cumulative.then(|| {
        let table = table.cumulative();
        CumulativeExport {
            normalized: table.normalized(),
            reference_line: table.reference_line(),
            table,
        }
    });

    if args.json {
        let export = HistogramExport {
            pixels: table.total(),
            levels: table.levels(),
            frequencies: &table,
            normalized: table.normalized(),
            cumulative,
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    println!(
        "{}x{} pixels, {} distinct levels",
        frame.width(),
        frame.height(),
        table.levels()
    );
    println!();
    match cumulative {
        Some(cum) => {
            println!("{:>5}  {:>10}  {:>8}  {:>8}", "value", "count", "fraction", "cdf");
            for ((value, count), (_, cdf)) in table.iter().zip(cum.normalized.iter()) {
                let fraction = count as f64 / table.total() as f64;
                println!("{value:>5}  {count:>10}  {fraction:>8.5}  {cdf:>8.5}");
            }
        }
        None => {
            println!("{:>5}  {:>10}  {:>8}", "value", "count", "fraction");
            for (value, fraction) in table.normalized() {
                let count = table.count_of(value).unwrap_or(0);
                println!("{value:>5}  {count:>10}  {fraction:>8.5}");
            }
        }
    }

    Ok(())
}
