//! Locates the aurora strip in a pixel raster and reconstructs a candidate
//! [`aurora_core::Frame`] from it.
//!
//! Detection failures are soft: [`DetectionResult`] always carries whatever
//! diagnostic information was available, rather than collapsing to a bare
//! error, so a caller can show "low confidence" feedback instead of nothing.

pub mod config;
pub mod error;
pub mod raster;
mod region;

use aurora_core::band::{bands_to_bytes, BAND_COUNT};
use aurora_core::frame::{Frame, FRAME_LEN};
use aurora_core::palette::{color_confidence, find_closest_palette_index};

pub use config::DetectorConfig;
pub use error::DetectorError;
pub use raster::Raster;

/// Outcome of running [`detect`] on one raster.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionResult {
    /// No plausible aurora region was found.
    NoRegion,
    /// A region was found but the mean band confidence fell below
    /// [`DetectorConfig::confidence_floor`].
    LowConfidence {
        indices: [u8; BAND_COUNT],
        confidence: f64,
    },
    /// Bands decoded to a frame whose CRC-8 did not match.
    ChecksumFail { frame: Frame, confidence: f64 },
    /// A frame was recovered and its checksum verified.
    Detected { frame: Frame, confidence: f64 },
}

/// Runs the full detection pipeline on `raster`.
pub fn detect(raster: &Raster, cfg: &DetectorConfig) -> DetectionResult {
    let region = match region::find_region(raster, cfg) {
        Some(r) => r,
        None => {
            log::debug!("no aurora region found in raster");
            return DetectionResult::NoRegion;
        }
    };

    let span = region.right - region.left + 1;
    let mut indices = [0u8; BAND_COUNT];
    let mut confidences = [0f64; BAND_COUNT];
    for band in 0..BAND_COUNT {
        let x0 = region.left + span * band / BAND_COUNT;
        let x1 = region.left + span * (band + 1) / BAND_COUNT;
        let x1 = x1.max(x0 + 1).min(region.right + 1);
        let color = region::band_color(raster, &region, x0, x1, cfg);
        indices[band] = find_closest_palette_index(color) as u8;
        confidences[band] = color_confidence(color);
    }

    let mean_confidence = confidences.iter().sum::<f64>() / BAND_COUNT as f64;
    if mean_confidence < cfg.confidence_floor {
        log::debug!("region found but mean confidence {mean_confidence:.3} is below floor");
        return DetectionResult::LowConfidence {
            indices,
            confidence: mean_confidence,
        };
    }

    let bytes: [u8; FRAME_LEN] = bands_to_bytes(&indices);
    let frame = Frame::deserialize(&bytes);
    if frame.verify_checksum() {
        DetectionResult::Detected {
            frame,
            confidence: mean_confidence,
        }
    } else {
        DetectionResult::ChecksumFail {
            frame,
            confidence: mean_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::palette::PALETTE;

    fn solid_raster(width: usize, height: usize, color: (u8, u8, u8)) -> Vec<u8> {
        let mut pixels = vec![0u8; width * height * 4];
        for px in pixels.chunks_mut(4) {
            px[0] = color.0;
            px[1] = color.1;
            px[2] = color.2;
            px[3] = 255;
        }
        pixels
    }

    #[test]
    fn blank_raster_has_no_region() {
        let pixels = solid_raster(64, 64, (0, 0, 0));
        let raster = Raster::new(64, 64, &pixels);
        assert_eq!(detect(&raster, &DetectorConfig::default()), DetectionResult::NoRegion);
    }

    #[test]
    fn synthetic_frame_round_trips_through_detection() {
        let frame = Frame::new(0, 5, 0x2222, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 4);
        let bands = aurora_core::band::bytes_to_bands(&frame.serialize());

        let width = 320usize;
        let height = 80usize;
        let mut pixels = vec![0u8; width * height * 4];
        let band_width = width / bands.len();
        for (i, &idx) in bands.iter().enumerate() {
            let color = PALETTE[idx as usize];
            let x0 = i * band_width;
            let x1 = if i + 1 == bands.len() { width } else { x0 + band_width };
            for y in 0..height {
                for x in x0..x1 {
                    let p = (y * width + x) * 4;
                    pixels[p] = color.0;
                    pixels[p + 1] = color.1;
                    pixels[p + 2] = color.2;
                    pixels[p + 3] = 255;
                }
            }
        }

        let raster = Raster::new(width, height, &pixels);
        match detect(&raster, &DetectorConfig::default()) {
            DetectionResult::Detected { frame: got, .. } => assert_eq!(got, frame),
            other => panic!("expected Detected, got {other:?}"),
        }
    }
}
