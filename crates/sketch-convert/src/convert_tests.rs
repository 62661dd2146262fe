//! File conversion tests against a scratch directory.

use std::fs;
use std::path::Path;

use sketch_bytecode::{Raster, SAMPLE_COUNT};

use crate::convert::convert_file;
use crate::direction::Direction;
use crate::error::{ConvertError, UsageError};

fn write_pgm(path: &Path, raster: &Raster) {
    let mut bytes = Vec::new();
    raster.write_pgm(&mut bytes).unwrap();
    fs::write(path, bytes).unwrap();
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn pgm_to_sketch_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("bands.pgm");

    let samples = (0..SAMPLE_COUNT).map(|i| ((i / 7) % 251) as u8).collect();
    let raster = Raster::from_samples(samples);
    write_pgm(&pgm, &raster);

    let done = convert_file(&pgm).unwrap();
    assert_eq!(done.conversion.direction, Direction::PgmToSketch);
    assert_eq!(done.conversion.target, dir.path().join("bands.sk"));
    assert!(fs::metadata(&done.conversion.target).unwrap().len() > 0);
    assert!(done.header.unwrap().is_canvas());
    assert_eq!(done.header_mismatch(), None);

    fs::remove_file(&pgm).unwrap();
    let done = convert_file(&dir.path().join("bands.sk")).unwrap();
    assert_eq!(done.conversion.target, pgm);
    assert_eq!(done.header, None);

    let bytes = fs::read(&pgm).unwrap();
    assert!(bytes.starts_with(b"P5 200 200 255\n"));
    let back = Raster::read_pgm(&mut &bytes[..]).unwrap();
    assert_eq!(back, raster);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let err = convert_file(&dir.path().join("absent.pgm")).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
    let err = convert_file(&dir.path().join("absent.sk")).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));

    assert!(entries(dir.path()).is_empty());
}

#[test]
fn usage_errors_touch_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    fs::write(&txt, b"hello").unwrap();

    let err = convert_file(&txt).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Usage(UsageError::UnsupportedExtension(ref ext)) if ext == "txt"
    ));

    let err = convert_file(&dir.path().join("noext")).unwrap_err();
    assert!(matches!(err, ConvertError::Usage(UsageError::MissingExtension)));

    let err = convert_file(&dir.path().join(".pgm")).unwrap_err();
    assert!(matches!(err, ConvertError::Usage(UsageError::MissingExtension)));

    assert_eq!(entries(dir.path()), ["notes.txt"]);
}

#[test]
fn short_pgm_encodes_what_it_has() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("short.pgm");
    fs::write(&pgm, b"P5 200 200 255\n\x07\x07\x07").unwrap();

    convert_file(&pgm).unwrap();
    let program = fs::read(dir.path().join("short.sk")).unwrap();
    // a single run [0, 3) on row 0
    assert_eq!(program.iter().filter(|&&b| b == 130).count(), 1);
}

#[test]
fn foreign_header_is_reported_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("small.pgm");
    let mut bytes = b"P5 64 32 255\n".to_vec();
    bytes.extend(std::iter::repeat_n(5u8, 64 * 32));
    fs::write(&pgm, bytes).unwrap();

    let done = convert_file(&pgm).unwrap();
    let header = done.header_mismatch().unwrap();
    assert_eq!((header.width, header.height, header.maxval), (64, 32, 255));
    assert!(dir.path().join("small.sk").exists());
}

#[test]
fn unparsable_header_is_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("odd.pgm");
    fs::write(&pgm, b"P2 junk\n\x01\x02").unwrap();

    let done = convert_file(&pgm).unwrap();
    assert_eq!(done.header, None);
    assert_eq!(done.header_mismatch(), None);
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(UsageError::MissingExtension, @"The file must have an extension.");
    insta::assert_snapshot!(
        UsageError::UnsupportedExtension("txt".into()),
        @"The file must be .sk or .pgm."
    );
}
