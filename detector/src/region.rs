use crate::config::DetectorConfig;
use crate::raster::Raster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

fn is_aurora_pixel(r: u8, g: u8, b: u8, cfg: &DetectorConfig) -> bool {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let green = g > cfg.green_g_over_r * r && g > cfg.green_min;
    let cyan = g > cfg.cyan_g_over_r * r && b > cfg.cyan_b_over_r * r && (g + b) > cfg.cyan_sum_min;
    let purple = b > cfg.purple_b_over_r * r && r > cfg.purple_r_over_g * g && (r + b) > cfg.purple_sum_min;
    let mean = (r + g + b) / 3.0;
    (green || cyan || purple) && mean > cfg.mean_rgb_min
}

/// Locates the aurora strip within `raster`, or `None` if no plausible
/// region exists.
pub fn find_region(raster: &Raster, cfg: &DetectorConfig) -> Option<Region> {
    let mut row_score = vec![0u32; raster.height];
    let mut col_score = vec![0u32; raster.width];

    for y in 0..raster.height {
        for x in 0..raster.width {
            let (r, g, b) = raster.pixel(x, y);
            if is_aurora_pixel(r, g, b, cfg) {
                row_score[y] += 1;
                col_score[x] += 1;
            }
        }
    }

    let max_row = *row_score.iter().max().unwrap_or(&0);
    if (max_row as f64) < cfg.no_region_row_score_ratio * raster.width as f64 {
        return None;
    }

    let row_threshold = cfg.vertical_span_threshold_ratio * max_row as f64;
    let top = row_score.iter().position(|&s| (s as f64) > row_threshold)?;
    let bottom = row_score.iter().rposition(|&s| (s as f64) > row_threshold)?;

    let max_col = *col_score.iter().max().unwrap_or(&0);
    let col_threshold = cfg.horizontal_span_threshold_ratio * max_col as f64;
    let left = col_score.iter().position(|&s| (s as f64) > col_threshold)?;
    let right = col_score.iter().rposition(|&s| (s as f64) > col_threshold)?;

    let vertical_span = (bottom - top + 1) as f64;
    let horizontal_span = (right - left + 1) as f64;
    if vertical_span < cfg.min_vertical_span_ratio * raster.height as f64 {
        return None;
    }
    if horizontal_span < cfg.min_horizontal_span_ratio * raster.width as f64 {
        return None;
    }

    Some(Region { top, bottom, left, right })
}

/// Average color of the brightest `top_fraction` of pixels, within
/// `[region.top, region.bottom]`, for the horizontal slice `[x0, x1)`.
pub fn band_color(raster: &Raster, region: &Region, x0: usize, x1: usize, cfg: &DetectorConfig) -> (u8, u8, u8) {
    let mut samples: Vec<(u32, (u8, u8, u8))> = Vec::new();
    for y in region.top..=region.bottom {
        for x in x0..x1 {
            let (r, g, b) = raster.pixel(x, y);
            let sum = r as u32 + g as u32 + b as u32;
            if (sum as f64) > cfg.band_brightness_min {
                samples.push((sum, (r, g, b)));
            }
        }
    }

    if samples.is_empty() {
        return (0, 0, 0);
    }

    samples.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    let take = ((samples.len() as f64) * cfg.band_top_fraction).ceil().max(1.0) as usize;
    let take = take.min(samples.len());

    let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);
    for &(_, (r, g, b)) in &samples[..take] {
        sr += r as u32;
        sg += g as u32;
        sb += b as u32;
    }
    (
        (sr / take as u32) as u8,
        (sg / take as u32) as u8,
        (sb / take as u32) as u8,
    )
}
