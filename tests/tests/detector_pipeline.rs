use aurora_core::band::bytes_to_bands;
use aurora_core::palette::PALETTE;
use aurora_core::{encode_packet, Frame};
use aurora_detector::{detect, DetectionResult, DetectorConfig, Raster};

fn render_frame(frame: &Frame, width: usize, height: usize) -> Vec<u8> {
    let bands = bytes_to_bands(&frame.serialize());
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
    pixels
}

#[test]
fn every_emitted_frame_is_recovered_from_its_rendering() {
    let frames = encode_packet("Hi!").unwrap();
    let cfg = DetectorConfig::default();
    for frame in &frames {
        let pixels = render_frame(frame, 320, 80);
        let raster = Raster::new(320, 80, &pixels);
        match detect(&raster, &cfg) {
            DetectionResult::Detected { frame: got, .. } => assert_eq!(&got, frame),
            other => panic!("expected Detected for frame {}, got {other:?}", frame.frame_index),
        }
    }
}

#[test]
fn blank_raster_yields_no_region() {
    let pixels = vec![0u8; 320 * 80 * 4];
    let raster = Raster::new(320, 80, &pixels);
    assert_eq!(detect(&raster, &DetectorConfig::default()), DetectionResult::NoRegion);
}
