use std::sync::Arc;

use tracing::info;

use crate::color::luminance::to_luminance;
use crate::error::Result;
use crate::filters::stretch::stretch_levels;
use crate::frame::{ColorFrame, GrayFrame};
use crate::histogram::analyze;
use crate::io::image_io::{load_image, save_gray_image, SourceImage};
use crate::mapping::IntensityMap;
use crate::remap::remap;

use super::config::{EqualizeConfig, PipelineConfig};
use super::types::{
    CallbackReporter, EqualizeReport, NoOpReporter, PipelineOutput, PipelineStage,
    ProgressReporter,
};

/// Equalize an intensity frame in place.
///
/// Runs analyze -> map -> remap (-> stretch) -> analyze, returning both
/// histograms so callers can compare the distribution before and after.
pub fn equalize_in_place(
    frame: &mut GrayFrame,
    config: &EqualizeConfig,
) -> Result<EqualizeReport> {
    equalize_reported(frame, config, &NoOpReporter)
}

/// Convert a color frame to luminance and equalize the result.
pub fn equalize_color(
    color: &ColorFrame,
    config: &EqualizeConfig,
) -> Result<(GrayFrame, EqualizeReport)> {
    let mut frame = to_luminance(color, config.quantization)?;
    let report = equalize_in_place(&mut frame, config)?;
    Ok((frame, report))
}

fn equalize_reported(
    frame: &mut GrayFrame,
    config: &EqualizeConfig,
    reporter: &dyn ProgressReporter,
) -> Result<EqualizeReport> {
    reporter.begin_stage(PipelineStage::Analyzing);
    let before = analyze(frame)?;
    reporter.finish_stage();
    info!(
        pixels = before.total(),
        levels = before.levels(),
        "Source histogram computed"
    );

    reporter.begin_stage(PipelineStage::Mapping);
    let map = IntensityMap::from_frequencies(&before, frame.pixel_count(), config.rounding)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Remapping);
    remap(frame, &map)?;
    reporter.finish_stage();

    if config.stretch_output {
        reporter.begin_stage(PipelineStage::Stretching);
        stretch_levels(frame, map.max_level());
        reporter.finish_stage();
    }

    reporter.begin_stage(PipelineStage::Reanalyzing);
    let after = analyze(frame)?;
    reporter.finish_stage();
    info!(levels = after.levels(), "Equalized histogram computed");

    Ok(EqualizeReport { before, after, map })
}

/// Run the file-to-file pipeline with a thread-safe progress reporter.
///
/// The output file is written only after every stage succeeded.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Reading);
    let source = load_image(&config.input)?;
    reporter.finish_stage();
    info!(input = %config.input.display(), "Image decoded");

    let (mut frame, converted) = match source {
        SourceImage::Gray(frame) => (frame, false),
        SourceImage::Color(color) => {
            reporter.begin_stage(PipelineStage::Converting);
            let frame = to_luminance(&color, config.equalize.quantization)?;
            reporter.finish_stage();
            (frame, true)
        }
    };
    info!(
        width = frame.width(),
        height = frame.height(),
        converted,
        "Intensity frame ready"
    );

    let report = equalize_reported(&mut frame, &config.equalize, reporter.as_ref())?;

    reporter.begin_stage(PipelineStage::Writing);
    save_gray_image(&frame, &config.output)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Output saved");

    Ok(PipelineOutput {
        frame,
        report,
        converted,
    })
}

/// Run the file-to-file pipeline.
///
/// `on_progress` is called with (stage, fraction_complete) as each stage
/// begins.
pub fn run_pipeline<F>(config: &PipelineConfig, on_progress: F) -> Result<PipelineOutput>
where
    F: Fn(PipelineStage, f32) + Send + Sync + 'static,
{
    run_pipeline_reported(config, Arc::new(CallbackReporter(on_progress)))
}
