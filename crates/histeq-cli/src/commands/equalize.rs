use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use histeq_core::color::luminance::Quantization;
use histeq_core::mapping::TransferRounding;
use histeq_core::pipeline::config::{EqualizeConfig, PipelineConfig};
use histeq_core::pipeline::{run_pipeline, EqualizeReport};
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::{print_config_summary, print_report_summary};

#[derive(Clone, Copy, ValueEnum)]
pub enum RoundingArg {
    Ceil,
    Nearest,
}

impl From<RoundingArg> for TransferRounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Ceil => Self::Ceil,
            RoundingArg::Nearest => Self::Nearest,
        }
    }
}

#[derive(Args)]
pub struct EqualizeArgs {
    /// Input image file (any format the decoder supports)
    pub file: PathBuf,

    /// Pipeline config file (TOML); the input path argument overrides its `input`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Round luminance to the nearest level instead of truncating
    #[arg(long)]
    pub round_luminance: bool,

    /// Rounding of the equalization transfer function
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Rescale equalized levels to the full 0-255 range
    #[arg(long)]
    pub stretch: bool,

    /// Write before/after histograms and the intensity map as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &EqualizeArgs) -> Result<()> {
    let config = build_config(args)?;
    print_config_summary(&config);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:26} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );

    let progress = pb.clone();
    let output = run_pipeline(&config, move |stage, fraction| {
        progress.set_message(stage.to_string());
        progress.set_position((fraction * 100.0) as u64);
    })
    .with_context(|| format!("Equalization of {} failed", config.input.display()))?;

    pb.finish_with_message("Done");

    if let Some(ref path) = args.report {
        write_report_or_discard(&output.report, path, &config.output)?;
    }

    print_report_summary(&output.report, output.converted);
    if let Some(ref path) = args.report {
        println!("Report saved to {}", path.display());
    }
    println!("\nOutput saved to {}", config.output.display());
    Ok(())
}

/// Write the JSON report. If that fails the saved image is removed, so a
/// failed run leaves no output behind.
fn write_report_or_discard(report: &EqualizeReport, path: &Path, image: &Path) -> Result<()> {
    let written = serde_json::to_string_pretty(report)
        .map_err(anyhow::Error::from)
        .and_then(|json| {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))
        });

    if written.is_err() {
        if let Err(e) = std::fs::remove_file(image) {
            tracing::warn!(image = %image.display(), error = %e, "Could not remove output image");
        }
    }
    written
}

fn build_config(args: &EqualizeArgs) -> Result<PipelineConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        PipelineConfig {
            input: args.file.clone(),
            output: PathBuf::from("equalized.png"),
            equalize: EqualizeConfig::default(),
        }
    };

    config.input = args.file.clone();
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if args.round_luminance {
        config.equalize.quantization = Quantization::Round;
    }
    if let Some(rounding) = args.rounding {
        config.equalize.rounding = rounding.into();
    }
    if args.stretch {
        config.equalize.stretch_output = true;
    }

    Ok(config)
}
