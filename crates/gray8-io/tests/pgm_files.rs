use gray8_core::GrayImage;
use gray8_io::{pgm, read, write, IoError};
use std::fs;
use std::io::ErrorKind;

fn checker(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height, 255).unwrap();
    for (x, y) in img.bounds().positions() {
        img.set(x, y, if (x + y) % 2 == 0 { 255 } else { 0 });
    }
    img
}

#[test]
fn write_then_read_pgm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.pgm");
    let img = checker(9, 4);

    write(&path, &img).expect("write pgm");
    let back = read(&path).expect("read pgm");
    assert_eq!(back, img);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5\n9 4\n255\n"));
    assert_eq!(bytes.len(), b"P5\n9 4\n255\n".len() + 36);
}

#[test]
fn extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("UPPER.PGM");
    write(&path, &checker(2, 2)).unwrap();
    assert_eq!(read(&path).unwrap().dimensions(), (2, 2));
}

#[test]
fn unknown_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.png");
    assert!(matches!(write(&path, &checker(1, 1)), Err(IoError::UnsupportedFormat(_))));
    assert!(!path.exists());
    assert!(matches!(read(&path), Err(IoError::UnsupportedFormat(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    match read(dir.path().join("absent.pgm")) {
        Err(IoError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn hand_written_file_with_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comment.pgm");
    fs::write(&path, b"P5\n# CREATOR: hand\n3 1\n# levels\n15\n\x00\x07\x0f").unwrap();

    let img = pgm::read(&path).unwrap();
    assert_eq!(img.max_gray(), 15);
    assert_eq!(img.as_bytes(), &[0, 7, 15]);
    assert_eq!(img.stats(), (0, 15));
}

#[test]
fn truncated_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.pgm");
    fs::write(&path, b"P5\n4 4\n255\n\x01\x02").unwrap();
    assert!(matches!(read(&path), Err(IoError::DecodeError(_))));
}
