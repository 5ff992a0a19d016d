use std::io::Cursor;
use std::path::PathBuf;

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use tempfile::TempDir;

pub(crate) fn gps_rational_field(tag: Tag, triple: [(u32, u32); 3]) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational::from(triple[0]),
            Rational::from(triple[1]),
            Rational::from(triple[2]),
        ]),
    }
}

pub(crate) fn gps_ref_field(tag: Tag, value: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![value.as_bytes().to_vec()]),
    }
}

/// A minimal JPEG carrying the given fields in an APP1 Exif segment.
pub(crate) fn jpeg_with_exif(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("compose exif segment");
    let tiff = tiff.into_inner();

    let mut jpeg = vec![0xFF, 0xD8];
    jpeg.extend_from_slice(&[0xFF, 0xE1]);
    jpeg.extend_from_slice(
        &u16::try_from(tiff.len() + 8)
            .expect("segment fits")
            .to_be_bytes(),
    );
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub(crate) fn jpeg_with_pittsburgh_gps() -> Vec<u8> {
    jpeg_with_exif(&[
        gps_rational_field(Tag::GPSLatitude, [(40, 1), (26, 1), (46, 1)]),
        gps_ref_field(Tag::GPSLatitudeRef, "N"),
        gps_rational_field(Tag::GPSLongitude, [(79, 1), (58, 1), (0, 1)]),
        gps_ref_field(Tag::GPSLongitudeRef, "W"),
    ])
}

pub(crate) fn write_photo(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write photo");
    path
}
