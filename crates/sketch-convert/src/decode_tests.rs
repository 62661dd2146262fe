//! Tests for the raster decoder, mostly through the encoder.

use sketch_bytecode::{HEIGHT, Raster, SAMPLE_COUNT, WIDTH};

use crate::decode::decode;
use crate::encode::encode;

/// Deterministic noise (xorshift32).
fn noise(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn assert_roundtrip(raster: &Raster) {
    let decoded = decode(&encode(raster));
    for y in 0..HEIGHT {
        assert_eq!(decoded.row(y), raster.row(y), "row {y}");
    }
}

#[test]
fn roundtrip_uniform() {
    assert_roundtrip(&Raster::from_samples(vec![0; SAMPLE_COUNT]));
    assert_roundtrip(&Raster::from_samples(vec![255; SAMPLE_COUNT]));
}

#[test]
fn roundtrip_every_grey_level() {
    let samples = (0..SAMPLE_COUNT).map(|i| (i % 256) as u8).collect();
    assert_roundtrip(&Raster::from_samples(samples));
}

#[test]
fn roundtrip_noise() {
    assert_roundtrip(&Raster::from_samples(noise(0x2545_F491, SAMPLE_COUNT)));
}

#[test]
fn roundtrip_two_tone_noise() {
    let samples = noise(7, SAMPLE_COUNT)
        .into_iter()
        .map(|v| if v < 128 { 0 } else { 255 })
        .collect();
    assert_roundtrip(&Raster::from_samples(samples));
}

#[test]
fn roundtrip_bands_around_wide_coordinates() {
    let mut raster = Raster::new();
    for y in 0..HEIGHT {
        raster.fill_span(y, 60..70, 100);
        raster.fill_span(y, 63..64, 101);
        raster.fill_span(y, 199..WIDTH, (y % 256) as u8);
    }
    assert_roundtrip(&raster);
}

#[test]
fn empty_program_decodes_black() {
    assert_eq!(decode(&[]), Raster::new());
}

#[test]
fn truncated_program_keeps_decoded_rows() {
    let raster = Raster::from_samples(noise(99, SAMPLE_COUNT));
    let program = encode(&raster);
    let decoded = decode(&program[..program.len() / 2]);
    assert_eq!(decoded.row(0), raster.row(0));
    assert!(decoded.row(HEIGHT - 1).iter().all(|&v| v == 0));
}

#[test]
fn foreign_bytecode_is_not_an_error() {
    // line drawing and frames: nothing the decoder recognises as a run
    let program = [0x81, 0x05, 0x45, 0x88, 0x86, 0x3F];
    assert_eq!(decode(&program), Raster::new());

    // a run cut off right after TOOL NONE
    let program = [0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x83, 0xC0, 0x80];
    assert_eq!(decode(&program), Raster::new());
}

#[test]
fn stray_instruction_resets_colour_fields() {
    // five fields, a stray TOOL LINE, then six fields of 200 and a 10-pixel run
    let mut program = vec![0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0x81];
    program.extend_from_slice(&[0xC3, 0xC8, 0xF2, 0xCC, 0xE3, 0xFF, 0x83]);
    program.extend_from_slice(&[0xC0, 0x84, 0xC0, 0x85, 0x80, 0x40, 0xCA, 0x84]);
    let decoded = decode(&program);
    assert_eq!(&decoded.row(0)[..11], &[200, 200, 200, 200, 200, 200, 200, 200, 200, 200, 0]);
}
