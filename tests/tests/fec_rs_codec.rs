use aurora_fec::{decode, encode};

#[test]
fn encode_decode_round_trip_across_many_erasure_counts() {
    let data: Vec<u8> = (0..40u8).collect();
    for nsym in 1..=8usize {
        let codeword = encode(&data, nsym);
        assert_eq!(codeword.len(), data.len() + nsym);

        let mut received: Vec<Option<u8>> = codeword.iter().map(|&b| Some(b)).collect();
        for i in 0..nsym {
            received[i * 3 % codeword.len()] = None;
        }
        let recovered = decode(&received, data.len(), nsym).unwrap();
        assert_eq!(recovered, data, "failed with nsym={nsym}");
    }
}

#[test]
fn too_many_erasures_is_reported_rather_than_silently_wrong() {
    let data = vec![1u8, 2, 3, 4, 5, 6];
    let nsym = 3;
    let codeword = encode(&data, nsym);
    let mut received: Vec<Option<u8>> = codeword.iter().map(|&b| Some(b)).collect();
    for slot in received.iter_mut().take(nsym + 1) {
        *slot = None;
    }
    assert!(decode(&received, data.len(), nsym).is_err());
}
