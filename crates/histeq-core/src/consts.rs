/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of representable 8-bit intensity levels.
pub const INTENSITY_LEVELS: usize = 256;

/// Largest 8-bit intensity value.
pub const MAX_INTENSITY: u8 = 255;

/// Luminance weight for the red channel.
pub const LUMINANCE_R: f32 = 0.30;

/// Luminance weight for the green channel.
pub const LUMINANCE_G: f32 = 0.59;

/// Luminance weight for the blue channel.
pub const LUMINANCE_B: f32 = 0.11;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Pixels per chunk when counting intensities in parallel.
pub const HISTOGRAM_CHUNK_SIZE: usize = 4096;
