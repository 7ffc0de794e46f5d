//! Track parsing module
//!
//! This module provides the [`Track`] type, an ordered sequence of 3D coordinates
//! read from a GPX document. Point order is the direction of travel and is kept
//! exactly as recorded.

use crate::ParseError;

/// A single track point: longitude and latitude in degrees, elevation in meters
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    /// Meters. `0.0` when the source point has no elevation.
    pub elevation: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(longitude: f64, latitude: f64, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation,
        }
    }

    /// `[lon, lat, ele]`, the position layout used by GeoJSON and most 3D renderers
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.longitude, self.latitude, self.elevation]
    }

    fn from_waypoint(waypoint: &gpx::Waypoint) -> Self {
        let point = waypoint.point();
        Self::new(point.x(), point.y(), waypoint.elevation.unwrap_or(0.0))
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

/// An ordered, immutable sequence of at least two coordinates
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTrack"))]
pub struct Track {
    /// Track name from the document (`<trk><name>`), if any
    name: Option<String>,
    coordinates: Vec<Coordinate>,
}

/// Unchecked wire form of a [`Track`]; deserialization goes through [`Track::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrack {
    name: Option<String>,
    coordinates: Vec<Coordinate>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTrack> for Track {
    type Error = ParseError;

    fn try_from(raw: RawTrack) -> Result<Self, Self::Error> {
        Track::new(raw.name, raw.coordinates)
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Track {
    /// Create a track from already ordered coordinates
    ///
    /// Fails with [`ParseError::NotEnoughPoints`] when fewer than two are given.
    pub fn new(name: Option<String>, coordinates: Vec<Coordinate>) -> Result<Self, ParseError> {
        if coordinates.len() < 2 {
            return Err(ParseError::NotEnoughPoints {
                found: coordinates.len(),
            });
        }
        Ok(Self { name, coordinates })
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of points, always at least 2
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`; provided for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &Coordinate {
        &self.coordinates[0]
    }

    #[inline]
    pub fn last(&self) -> &Coordinate {
        &self.coordinates[self.coordinates.len() - 1]
    }
}

/// Parse raw GPX content into a [`Track`]
///
/// The first track (in document order) holding at least two points wins. Its
/// segments are concatenated in order. Points without `<ele>` get elevation `0`.
pub fn parse(raw: &[u8]) -> Result<Track, ParseError> {
    #[cfg(feature = "profiling")]
    profiling::scope!("track::parse");

    let gpx_data = gpx::read(raw)?;
    from_gpx(gpx_data)
}

/// Parse GPX text into a [`Track`], see [`parse`]
pub fn parse_str(text: &str) -> Result<Track, ParseError> {
    parse(text.as_bytes())
}

fn from_gpx(gpx_data: gpx::Gpx) -> Result<Track, ParseError> {
    let mut longest = 0;

    for track in gpx_data.tracks {
        let point_count: usize = track.segments.iter().map(|s| s.points.len()).sum();
        if point_count < 2 {
            tracing::debug!(
                "Skipping track {:?} with {} point(s)",
                track.name,
                point_count
            );
            longest = longest.max(point_count);
            continue;
        }

        let mut missing_elevation = 0;
        let mut coordinates = Vec::with_capacity(point_count);
        for waypoint in track.segments.iter().flat_map(|s| s.points.iter()) {
            if waypoint.elevation.is_none() {
                missing_elevation += 1;
            }
            coordinates.push(Coordinate::from_waypoint(waypoint));
        }

        if missing_elevation > 0 {
            tracing::warn!(
                "{} of {} track points have no elevation; using 0 m",
                missing_elevation,
                point_count
            );
        }
        tracing::debug!(
            "Parsed track {:?}: {} points in {} segment(s)",
            track.name,
            point_count,
            track.segments.len()
        );

        return Track::new(track.name, coordinates);
    }

    Err(ParseError::NotEnoughPoints { found: longest })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_test_gpx(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="track-scene-tests" xmlns="http://www.topografix.com/GPX/1/1">
{body}
</gpx>"#
        )
    }

    pub(crate) fn create_rae_lakes_gpx() -> String {
        create_test_gpx(
            r#"<trk><name>Rae Lakes</name><trkseg>
  <trkpt lat="36.0" lon="-118.0"><ele>100</ele></trkpt>
  <trkpt lat="36.01" lon="-118.01"><ele>150</ele></trkpt>
  <trkpt lat="36.02" lon="-118.02"><ele>90</ele></trkpt>
</trkseg></trk>"#,
        )
    }

    pub(crate) fn create_test_track() -> Track {
        parse_str(&create_rae_lakes_gpx()).unwrap()
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let track = create_test_track();

        assert_eq!(track.len(), 3);
        assert_eq!(track.name(), Some("Rae Lakes"));
        assert_eq!(
            track.coordinates(),
            &[
                Coordinate::new(-118.0, 36.0, 100.0),
                Coordinate::new(-118.01, 36.01, 150.0),
                Coordinate::new(-118.02, 36.02, 90.0),
            ]
        );
    }

    #[test]
    fn test_parse_single_point_fails() {
        let gpx = create_test_gpx(
            r#"<trk><trkseg><trkpt lat="36.0" lon="-118.0"><ele>100</ele></trkpt></trkseg></trk>"#,
        );
        let result = parse_str(&gpx);
        assert!(matches!(
            result,
            Err(ParseError::NotEnoughPoints { found: 1 })
        ));
    }

    #[test]
    fn test_parse_no_tracks_fails() {
        let gpx = create_test_gpx(r#"<wpt lat="36.0" lon="-118.0"></wpt>"#);
        let result = parse_str(&gpx);
        assert!(matches!(
            result,
            Err(ParseError::NotEnoughPoints { found: 0 })
        ));
    }

    #[test]
    fn test_parse_malformed_fails() {
        let result = parse_str("<gpx version=\"1.1\"><trk><trkseg><trkpt");
        assert!(matches!(result, Err(ParseError::Gpx(_))));

        let result = parse(b"definitely not a track file");
        assert!(matches!(result, Err(ParseError::Gpx(_))));
    }

    #[test]
    fn test_parse_missing_elevation_defaults_to_zero() {
        let gpx = create_test_gpx(
            r#"<trk><trkseg>
  <trkpt lat="36.0" lon="-118.0"></trkpt>
  <trkpt lat="36.01" lon="-118.01"></trkpt>
</trkseg></trk>"#,
        );
        let track = parse_str(&gpx).unwrap();

        assert_eq!(track.len(), 2);
        assert!(track.coordinates().iter().all(|c| c.elevation == 0.0));
    }

    #[test]
    fn test_parse_partial_elevation_stays_aligned() {
        let gpx = create_test_gpx(
            r#"<trk><trkseg>
  <trkpt lat="36.0" lon="-118.0"><ele>100</ele></trkpt>
  <trkpt lat="36.01" lon="-118.01"></trkpt>
  <trkpt lat="36.02" lon="-118.02"><ele>90</ele></trkpt>
</trkseg></trk>"#,
        );
        let track = parse_str(&gpx).unwrap();

        let elevations: Vec<f64> = track.coordinates().iter().map(|c| c.elevation).collect();
        assert_eq!(elevations, vec![100.0, 0.0, 90.0]);
    }

    #[test]
    fn test_parse_concatenates_segments() {
        let gpx = create_test_gpx(
            r#"<trk>
<trkseg>
  <trkpt lat="1.0" lon="1.0"></trkpt>
  <trkpt lat="2.0" lon="2.0"></trkpt>
</trkseg>
<trkseg>
  <trkpt lat="3.0" lon="3.0"></trkpt>
</trkseg>
</trk>"#,
        );
        let track = parse_str(&gpx).unwrap();

        let latitudes: Vec<f64> = track.coordinates().iter().map(|c| c.latitude).collect();
        assert_eq!(latitudes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_skips_short_tracks() {
        let gpx = create_test_gpx(
            r#"<trk><name>stub</name><trkseg><trkpt lat="0.0" lon="0.0"></trkpt></trkseg></trk>
<trk><name>hike</name><trkseg>
  <trkpt lat="1.0" lon="1.0"></trkpt>
  <trkpt lat="2.0" lon="2.0"></trkpt>
</trkseg></trk>"#,
        );
        let track = parse_str(&gpx).unwrap();

        assert_eq!(track.name(), Some("hike"));
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_track_new_requires_two_points() {
        let result = Track::new(None, vec![Coordinate::new(0.0, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(ParseError::NotEnoughPoints { found: 1 })
        ));
    }

    #[test]
    fn test_first_and_last() {
        let track = create_test_track();

        assert_eq!(track.first(), &Coordinate::new(-118.0, 36.0, 100.0));
        assert_eq!(track.last(), &Coordinate::new(-118.02, 36.02, 90.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_enforces_two_points() {
        let track = create_test_track();
        let json = serde_json::to_string(&track).unwrap();
        assert_eq!(serde_json::from_str::<Track>(&json).unwrap(), track);

        let empty = serde_json::from_str::<Track>(r#"{"name":null,"coordinates":[]}"#);
        assert!(empty.is_err());

        let one_point = serde_json::from_str::<Track>(
            r#"{"name":null,"coordinates":[{"longitude":1.0,"latitude":2.0,"elevation":3.0}]}"#,
        );
        let err = one_point.unwrap_err().to_string();
        assert!(err.contains("at least 2"), "{err}");
    }
}
