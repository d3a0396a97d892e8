#![cfg(test)]
use std::io::Write;

use duidgen_common::IdentityError;
use duidgen_common::machine_id::read_machine_id;
use duidgen_core::{DuidError, DuidGenerator, DuidType};
use tempfile::NamedTempFile;

fn identity_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

/// The machine-id file ends with a newline, exactly as systemd writes it.
#[test]
fn reads_machine_id_with_trailing_newline() -> anyhow::Result<()> {
    let file = identity_file("b08dfa6083e7567a1921a715000001fb\n");
    let machine_id = read_machine_id(file.path())?;

    let generator = DuidGenerator::default();
    let en = generator.generate(DuidType::En, Some(&machine_id))?;
    let uuid = generator.generate(DuidType::Uuid, Some(&machine_id))?;

    assert_eq!(en.to_string(), "00:02:00:00:ab:11:63:a4:91:b1:8a:cc:47:1d");
    assert_eq!(
        uuid.to_string(),
        "00:04:2e:67:70:09:16:d0:40:6f:99:bb:1e:e4:76:75:c0:6f"
    );
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("machine-id");

    let err = read_machine_id(&path).unwrap_err();
    assert!(
        matches!(&err, IdentityError::Io { path: p, .. } if *p == path),
        "unexpected error: {err:?}"
    );
}

#[test]
fn malformed_file_fails_before_hashing() {
    let odd = identity_file("b08dfa6083e7567a1921a715000001f\n");
    let err = read_machine_id(odd.path()).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err:?}");

    let garbage = identity_file("uninitialized\n");
    let err = DuidError::from(read_machine_id(garbage.path()).unwrap_err());
    assert!(err.is_decode(), "unexpected error: {err:?}");

    let short = identity_file("b08dfa6083e7567a\n");
    assert!(matches!(
        read_machine_id(short.path()),
        Err(IdentityError::Length { expected: 16, actual: 8, .. })
    ));
}
