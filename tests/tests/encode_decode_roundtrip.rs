use aurora_core::{encode_packet, MultiFrameDecoder};

fn round_trip(text: &str) -> String {
    let frames = encode_packet(text).unwrap();
    let mut decoder = MultiFrameDecoder::new();
    for f in frames {
        decoder.add_frame(f);
    }
    decoder.decode().unwrap()
}

#[test]
fn lossless_channel_recovers_exact_text() {
    for text in ["A", "Hello Aurora!", "the quick brown fox jumps over the lazy dog"] {
        assert_eq!(round_trip(text), text);
    }
}

#[test]
fn single_character_sizing_matches_spec() {
    let frames = encode_packet("A").unwrap();
    assert_eq!(frames.len(), 5);
    assert!(frames.iter().all(|f| f.total_frames == 5 && f.parity_count == 4));
}

#[test]
fn erasure_resilient_round_trip_drops_exactly_parity_budget() {
    let text = "Hello Aurora!";
    let frames = encode_packet(text).unwrap();
    let parity = frames[0].parity_count as usize;

    let mut decoder = MultiFrameDecoder::new();
    for (i, f) in frames.into_iter().enumerate() {
        if i < parity {
            continue; // drop exactly `parity` frames
        }
        decoder.add_frame(f);
    }
    assert_eq!(decoder.decode().unwrap(), text);
}

#[test]
fn dropping_specific_indices_still_recovers() {
    let text = "Hello Aurora!";
    let frames = encode_packet(text).unwrap();
    let mut decoder = MultiFrameDecoder::new();
    for (i, f) in frames.into_iter().enumerate() {
        if i == 1 || i == 3 {
            continue;
        }
        decoder.add_frame(f);
    }
    assert_eq!(decoder.decode().unwrap(), text);
}

#[test]
fn corrupted_checksum_frame_is_dropped_before_decoding_but_recovery_still_succeeds() {
    let text = "Hello Aurora!";
    let mut frames = encode_packet(text).unwrap();
    frames[0].checksum ^= 0xFF;

    let mut decoder = MultiFrameDecoder::new();
    for f in frames {
        if f.verify_checksum() {
            decoder.add_frame(f);
        }
    }
    assert_eq!(decoder.decode().unwrap(), text);
}

#[test]
fn sequence_isolation_keeps_only_the_latest_sequence() {
    use aurora_core::Frame;

    let mut decoder = MultiFrameDecoder::new();
    decoder.add_frame(Frame::new(0, 5, 0x1234, [0; 10], 4));
    decoder.add_frame(Frame::new(0, 8, 0x9ABC, [0; 10], 4));

    assert_eq!(decoder.collected(), 1);
    assert_eq!(decoder.required(), Some(4));
}
