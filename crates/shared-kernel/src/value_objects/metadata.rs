// crates/shared-kernel/src/value_objects/metadata.rs
use std::fmt;

/// Embedded metadata fields the report asks the extractor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    GpsLatitude,
    GpsLongitude,
}

impl MetadataField {
    pub const ALL: [Self; 2] = [Self::GpsLatitude, Self::GpsLongitude];

    /// Namespaced tag key, as used in diagnostics.
    #[must_use]
    pub const fn tag_key(self) -> &'static str {
        match self {
            Self::GpsLatitude => "GPSInfo.GPSLatitude",
            Self::GpsLongitude => "GPSInfo.GPSLongitude",
        }
    }

    /// Label printed in front of the value in a report record.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GpsLatitude => "GPS Latitude",
            Self::GpsLongitude => "GPS Longitude",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_key())
    }
}

/// Outcome of asking the metadata extractor about one file.
///
/// Latitude and longitude are independently optional; nothing forces both to
/// resolve together.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataResult {
    /// The file has no extractable tag table.
    NoMetadata,
    /// A tag table exists; GPS coordinates are in decimal degrees.
    Metadata {
        gps_latitude: Option<f64>,
        gps_longitude: Option<f64>,
    },
    /// The extractor raised a decoding fault for this file.
    ExtractionFailed { reason: String },
}

impl MetadataResult {
    pub fn gps(latitude: f64, longitude: f64) -> Self {
        Self::Metadata { gps_latitude: Some(latitude), gps_longitude: Some(longitude) }
    }

    pub fn without_gps() -> Self {
        Self::Metadata { gps_latitude: None, gps_longitude: None }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed { reason: reason.into() }
    }

    /// Value of `field` if a tag table was read and the field resolved.
    #[must_use]
    pub fn value(&self, field: MetadataField) -> Option<f64> {
        match (self, field) {
            (Self::Metadata { gps_latitude, .. }, MetadataField::GpsLatitude) => *gps_latitude,
            (Self::Metadata { gps_longitude, .. }, MetadataField::GpsLongitude) => *gps_longitude,
            _ => None,
        }
    }

    #[must_use]
    pub fn has_gps(&self) -> bool {
        MetadataField::ALL.iter().any(|field| self.value(*field).is_some())
    }
}
