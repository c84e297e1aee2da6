use super::*;
use std::path::PathBuf;

use log::Level;
use smartmem_lib::SchemeError;
use smartmem_lib::hpe::encryption_id;
use tempfile::TempDir;

use crate::commands::log_capture::{at_level, capture_logs};

const ABLIC: RegisterPair = RegisterPair::new(0x1C85, 0x2221);
const MICROCHIP: RegisterPair = RegisterPair::new(0x0054, 0x2201);

fn make_spd_image(code: u32) -> Vec<u8> {
    let mut image = vec![0u8; 512];
    for (i, b) in image[0x7E..0x100].iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(7);
    }
    image[0x181..0x184].copy_from_slice(b"HPT");
    image[0x184..0x188].copy_from_slice(&code.to_le_bytes());
    image
}

/// Image whose stored Secure ID is the one `registers` reproduce.
fn image_for(registers: RegisterPair) -> Vec<u8> {
    let mut image = make_spd_image(0);
    let code = encryption_id(&image, registers.reg6, registers.reg7);
    image[0x184..0x188].copy_from_slice(&code.to_le_bytes());
    image
}

fn write_image(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join("spd.bin");
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn matching_image_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &image_for(ABLIC));

    let outcome = run_verify(&path, ABLIC, Some("S34TS04A - Ablic"), false).unwrap();
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn mismatching_image_is_negative() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &image_for(ABLIC));

    let outcome = run_verify(&path, MICROCHIP, None, false).unwrap();
    assert_eq!(outcome, Outcome::Negative);
}

#[test]
fn image_without_secure_id_is_negative() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &[0u8; 0x100]);

    let outcome = run_verify(&path, ABLIC, None, false).unwrap();
    assert_eq!(outcome, Outcome::Negative);
}

#[test]
fn json_output_keeps_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &image_for(ABLIC));

    assert_eq!(run_verify(&path, ABLIC, None, true).unwrap(), Outcome::Success);
    assert_eq!(
        run_verify(&path, MICROCHIP, None, true).unwrap(),
        Outcome::Negative
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_verify(&dir.path().join("missing.bin"), ABLIC, None, false);
    assert!(matches!(
        result,
        Err(CliError::Scheme(SchemeError::Io(_)))
    ));
}

#[test]
fn mismatch_verdict_is_reported_at_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &image_for(ABLIC));

    let records = capture_logs(|| {
        run_verify(&path, MICROCHIP, None, false).unwrap();
    });

    assert!(at_level(&records, Level::Warn).is_empty());
    assert!(
        at_level(&records, Level::Info)
            .iter()
            .any(|m| m.contains("Result:") && m.contains("MISMATCH"))
    );
}

#[test]
fn short_image_warns_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_image(&dir, &[0u8; 0x100]);

    let records = capture_logs(|| {
        run_verify(&path, ABLIC, None, false).unwrap();
    });

    let warnings = at_level(&records, Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("256 bytes"));
    assert!(
        at_level(&records, Level::Info)
            .iter()
            .any(|m| m.contains("NO REFERENCE"))
    );
}
