// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-pipeline round-trip properties, exercised through the public API rather than any
//! single module in isolation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use xcompressor_core::{codec, layer::LayerOptions, multi_compress, multi_decompress};

fn assert_round_trips(input: &[u8]) {
    let encoded = codec::compress(input);
    assert_eq!(codec::decompress(&encoded).unwrap(), input, "single-layer round-trip failed");

    for opts in [LayerOptions::store_only(), LayerOptions::default(), LayerOptions::max()] {
        let container = multi_compress(input, &opts);
        assert_eq!(
            multi_decompress(&container).unwrap(),
            input,
            "multi-layer round-trip failed for {:?}",
            opts
        );
    }
}

#[test]
fn round_trips_empty_input() {
    assert_round_trips(&[]);
}

#[test]
fn round_trips_ascii_text() {
    assert_round_trips(b"the quick brown fox jumps over the lazy dog");
}

#[test]
fn round_trips_all_byte_values_scenario_s4() {
    let input: Vec<u8> = (0u16..256).map(|v| v as u8).collect();
    assert_round_trips(&input);
}

#[test]
fn round_trips_long_zero_run_scenario_s5() {
    assert_round_trips(&vec![0u8; 64 * 1024]);
}

#[test]
fn round_trips_random_bytes_of_varying_length() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for len in [0usize, 1, 2, 17, 255, 256, 257, 4096, 70_000] {
        let input: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        assert_round_trips(&input);
    }
}

#[test]
fn round_trips_highly_redundant_input_scenario_s6() {
    let input = b"abababababab".repeat(10_000);
    let container = multi_compress(&input, &LayerOptions::max());
    assert!(container[0] as usize <= 255);
    assert!(container.len() < input.len());
    assert_eq!(multi_decompress(&container).unwrap(), input);
}

#[test]
fn deterministic_k_schedule_across_independent_encodes() {
    let mut rng = SmallRng::seed_from_u64(0xD00D);
    let input: Vec<u8> = (0..10_000).map(|_| rng.random::<u8>()).collect();
    assert_eq!(codec::compress(&input), codec::compress(&input));
}
