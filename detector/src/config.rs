use serde::{Deserialize, Serialize};

/// Tunable thresholds for [`crate::detect`]. `Default` reproduces the
/// literal constants a first cut of the detector would hard-code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub green_g_over_r: f64,
    pub green_min: f64,

    pub cyan_g_over_r: f64,
    pub cyan_b_over_r: f64,
    pub cyan_sum_min: f64,

    pub purple_b_over_r: f64,
    pub purple_r_over_g: f64,
    pub purple_sum_min: f64,

    pub mean_rgb_min: f64,

    /// Region is rejected outright if the best row score is below this
    /// fraction of the raster width.
    pub no_region_row_score_ratio: f64,
    /// Vertical span boundary: rows scoring above this fraction of the max
    /// row score are included.
    pub vertical_span_threshold_ratio: f64,
    /// Horizontal span boundary: columns scoring above this fraction of the
    /// max column score are included.
    pub horizontal_span_threshold_ratio: f64,
    /// Minimum vertical span, as a fraction of raster height, to accept.
    pub min_vertical_span_ratio: f64,
    /// Minimum horizontal span, as a fraction of raster width, to accept.
    pub min_horizontal_span_ratio: f64,

    /// Per-pixel brightness (r+g+b) floor for inclusion in a band's sample.
    pub band_brightness_min: f64,
    /// Fraction of a band's brightest pixels averaged into its color.
    pub band_top_fraction: f64,

    /// Mean-confidence floor below which a frame counts as `LowConfidence`.
    pub confidence_floor: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            green_g_over_r: 1.1,
            green_min: 30.0,

            cyan_g_over_r: 0.9,
            cyan_b_over_r: 0.6,
            cyan_sum_min: 80.0,

            purple_b_over_r: 0.6,
            purple_r_over_g: 0.4,
            purple_sum_min: 80.0,

            mean_rgb_min: 30.0,

            no_region_row_score_ratio: 0.1,
            vertical_span_threshold_ratio: 0.3,
            horizontal_span_threshold_ratio: 0.2,
            min_vertical_span_ratio: 0.05,
            min_horizontal_span_ratio: 0.3,

            band_brightness_min: 30.0,
            band_top_fraction: 0.25,

            confidence_floor: 0.15,
        }
    }
}
