// crates/infra/src/image_metadata.rs
use std::path::Path;

use exif::{Exif, In, Tag, Value};
use exif_report_ports::metadata::MetadataSource;
use exif_report_shared_kernel::{MetadataField, MetadataResult};

use crate::persistence::FileReader;

/// Metadata adapter backed by the `exif` crate (kamadak-exif).
#[derive(Debug, Default)]
pub struct ExifMetadataSource;

impl ExifMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for ExifMetadataSource {
    fn extract(&self, path: &Path) -> MetadataResult {
        match read_exif(path) {
            Ok(Some(exif)) => gps_metadata(&exif),
            Ok(None) => MetadataResult::NoMetadata,
            Err(reason) => {
                log::debug!("EXIF extraction failed for {}: {reason}", path.display());
                MetadataResult::ExtractionFailed { reason }
            }
        }
    }
}

/// `Ok(None)` when the container holds no EXIF block or an empty one.
fn read_exif(path: &Path) -> Result<Option<Exif>, String> {
    let mut reader = FileReader::open_buffered(path).map_err(|err| err.to_string())?;
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) if exif.fields().next().is_none() => Ok(None),
        Ok(exif) => Ok(Some(exif)),
        Err(exif::Error::NotFound(_)) => Ok(None),
        Err(err) => Err(err.to_string()),
    }
}

/// Coordinates are only read when every GPS field is tagged.
fn gps_metadata(exif: &Exif) -> MetadataResult {
    let all_tagged = MetadataField::ALL
        .iter()
        .all(|field| exif.get_field(tags(*field).0, In::PRIMARY).is_some());
    if !all_tagged {
        return MetadataResult::without_gps();
    }
    MetadataResult::Metadata {
        gps_latitude: decimal_degrees(exif, MetadataField::GpsLatitude),
        gps_longitude: decimal_degrees(exif, MetadataField::GpsLongitude),
    }
}

/// Value tag and hemisphere reference tag for each requested field.
fn tags(field: MetadataField) -> (Tag, Tag) {
    match field {
        MetadataField::GpsLatitude => (Tag::GPSLatitude, Tag::GPSLatitudeRef),
        MetadataField::GpsLongitude => (Tag::GPSLongitude, Tag::GPSLongitudeRef),
    }
}

// Degrees, minutes and seconds folded into one value; `None` when the tag does
// not hold usable rationals.
fn decimal_degrees(exif: &Exif, field: MetadataField) -> Option<f64> {
    let (value_tag, ref_tag) = tags(field);
    let parts = match &exif.get_field(value_tag, In::PRIMARY)?.value {
        Value::Rational(parts) if !parts.is_empty() => parts,
        other => {
            log::debug!("{field} holds {other:?}, not rationals");
            return None;
        }
    };
    let degrees: f64 = parts.iter().zip([1.0, 60.0, 3600.0]).map(|(part, scale)| part.to_f64() / scale).sum();
    if !degrees.is_finite() {
        return None;
    }

    let southern_or_western = exif.get_field(ref_tag, In::PRIMARY).is_some_and(|reference| {
        matches!(&reference.value, Value::Ascii(strings)
            if strings.first().and_then(|s| s.first()).is_some_and(|c| matches!(c, b'S' | b'W')))
    });
    Some(if southern_or_western { -degrees } else { degrees })
}
