use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::luminance::Quantization;
use crate::mapping::TransferRounding;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub equalize: EqualizeConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualizeConfig {
    /// Float to 8-bit step of the luminance conversion.
    pub quantization: Quantization,
    /// Rounding of the transfer function.
    pub rounding: TransferRounding,
    /// Rescale the equalized levels `[0, L-1]` to `[0, 255]` before saving.
    pub stretch_output: bool,
}
