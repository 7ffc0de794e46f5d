//! Presentation adapter between a [`ScenePayload`] and external rendering services
//!
//! A backend exposes three capabilities: a line layer, a point layer and an
//! elevation-profile chart. [`present`] shapes the payload into the descriptors
//! those services take and makes exactly one registration attempt per service.
//! Registrations are independent: a rejection is reported, never retried, and
//! does not undo or skip the other services.

use crate::{
    Coordinate, ElevationProfile, EndpointRole, PresentationError, Rgb, ScenePayload,
};
use std::fmt;

/// Title of the track line and of the elevation chart series
pub const TRACK_TITLE: &str = "Hike Track";
/// Title of the endpoint layer as shown in layer lists
pub const POINT_LAYER_TITLE: &str = "Start & arrival points";
/// Name of the integer record key field
pub const ID_FIELD: &str = "ObjectID";
/// Name of the string role field
pub const ROLE_FIELD: &str = "type";
/// Height of the track line above the terrain, in meters
pub const LINE_GROUND_OFFSET_M: f64 = 5.0;
/// Marker outline width in points
pub const MARKER_OUTLINE_WIDTH: f32 = 1.5;

/// The external services a payload is registered with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    LineLayer,
    PointLayer,
    ElevationProfile,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LineLayer => "line layer",
            Self::PointLayer => "point layer",
            Self::ElevationProfile => "elevation profile",
        })
    }
}

/// The track drawn as a 3D line
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayer<'a> {
    pub title: &'a str,
    /// Ordered coordinates with elevation
    pub coordinates: &'a [Coordinate],
    pub color: Rgb,
    pub width: f32,
    /// Meters above the terrain surface
    pub ground_offset: f64,
    /// Whether the layer is listed in layer-list UIs
    pub listed: bool,
}

/// One record of the point layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    /// Value of [`ID_FIELD`]
    pub id: u32,
    /// Value of [`ROLE_FIELD`]
    pub role: EndpointRole,
    pub coordinate: Coordinate,
}

/// How records of one role are drawn
#[derive(Clone, Debug, PartialEq)]
pub struct PointSymbol {
    pub role: EndpointRole,
    pub color: Rgb,
    pub size: f32,
    /// Legend label
    pub label: &'static str,
    pub outline_color: Rgb,
    pub outline_width: f32,
}

/// The endpoints drawn as two keyed point records
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayer<'a> {
    pub title: &'a str,
    pub id_field: &'a str,
    pub role_field: &'a str,
    pub records: [PointRecord; 2],
    /// One symbol per role, keyed by the role field
    pub symbols: [PointSymbol; 2],
}

/// Input series of the elevation-profile chart
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationInput<'a> {
    pub title: &'a str,
    pub color: Rgb,
    /// The same coordinates as the line layer
    pub coordinates: &'a [Coordinate],
    pub profile: ElevationProfile,
}

/// Capability interface of a rendering backend
pub trait PresentationBackend {
    fn register_line_layer(&mut self, layer: &LineLayer<'_>) -> Result<(), PresentationError>;

    fn register_point_layer(&mut self, layer: &PointLayer<'_>) -> Result<(), PresentationError>;

    fn set_elevation_input(&mut self, input: &ElevationInput<'_>)
    -> Result<(), PresentationError>;
}

/// Per-service result of one [`present`] call
#[derive(Debug)]
pub struct PresentationOutcome {
    pub line: Result<(), PresentationError>,
    pub points: Result<(), PresentationError>,
    pub elevation: Result<(), PresentationError>,
}

impl PresentationOutcome {
    pub fn is_success(&self) -> bool {
        self.line.is_ok() && self.points.is_ok() && self.elevation.is_ok()
    }

    /// Services that rejected the payload
    pub fn failures(&self) -> impl Iterator<Item = &PresentationError> {
        [&self.line, &self.points, &self.elevation]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
    }

    /// The first failure in registration order, if any
    pub fn into_result(self) -> Result<(), PresentationError> {
        self.line?;
        self.points?;
        self.elevation
    }
}

/// Shape the payload into the line layer descriptor
pub fn line_layer(payload: &ScenePayload) -> LineLayer<'_> {
    LineLayer {
        title: payload.line.name().unwrap_or(TRACK_TITLE),
        coordinates: payload.line.coordinates(),
        color: payload.style.line_color,
        width: payload.style.line_width,
        ground_offset: LINE_GROUND_OFFSET_M,
        listed: false,
    }
}

/// Shape the payload into the point layer descriptor
pub fn point_layer(payload: &ScenePayload) -> PointLayer<'static> {
    let record = |i: usize| {
        let endpoint = &payload.endpoints[i];
        PointRecord {
            id: endpoint.id,
            role: endpoint.role,
            coordinate: endpoint.coordinate,
        }
    };
    let symbol = |role: EndpointRole| PointSymbol {
        role,
        color: payload.style.endpoint_color(role),
        size: payload.style.marker_size,
        label: match role {
            EndpointRole::Start => "Start point",
            EndpointRole::End => "Arrival point",
        },
        outline_color: Rgb::WHITE,
        outline_width: MARKER_OUTLINE_WIDTH,
    };

    PointLayer {
        title: POINT_LAYER_TITLE,
        id_field: ID_FIELD,
        role_field: ROLE_FIELD,
        records: [record(0), record(1)],
        symbols: [symbol(EndpointRole::Start), symbol(EndpointRole::End)],
    }
}

/// Shape the payload into the elevation chart input
pub fn elevation_input(payload: &ScenePayload) -> ElevationInput<'_> {
    ElevationInput {
        title: TRACK_TITLE,
        color: payload.style.line_color,
        coordinates: payload.line.coordinates(),
        profile: ElevationProfile::from_track(&payload.line),
    }
}

fn log_registration(service: Service, result: &Result<(), PresentationError>) {
    match result {
        Ok(()) => tracing::debug!("Registered {}", service),
        Err(e) => tracing::error!("Registration with {} failed: {}", service, e),
    }
}

/// Register the payload with every service of the backend, once each
pub fn present(
    payload: &ScenePayload,
    backend: &mut dyn PresentationBackend,
) -> PresentationOutcome {
    #[cfg(feature = "profiling")]
    profiling::scope!("presentation::present");

    let line = backend.register_line_layer(&line_layer(payload));
    log_registration(Service::LineLayer, &line);

    let points = backend.register_point_layer(&point_layer(payload));
    log_registration(Service::PointLayer, &points);

    let elevation = backend.set_elevation_input(&elevation_input(payload));
    log_registration(Service::ElevationProfile, &elevation);

    PresentationOutcome {
        line,
        points,
        elevation,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::build_payload;
    use crate::track::tests::create_test_track;

    /// Records every call and optionally rejects one service
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub calls: Vec<Service>,
        pub reject: Option<Service>,
        pub line_points: usize,
        pub records: Vec<PointRecord>,
        pub elevation_points: usize,
    }

    impl RecordingBackend {
        fn check(&mut self, service: Service) -> Result<(), PresentationError> {
            self.calls.push(service);
            if self.reject == Some(service) {
                return Err(PresentationError::Rejected {
                    service,
                    reason: "test rejection".to_string(),
                });
            }
            Ok(())
        }
    }

    impl PresentationBackend for RecordingBackend {
        fn register_line_layer(&mut self, layer: &LineLayer<'_>) -> Result<(), PresentationError> {
            self.check(Service::LineLayer)?;
            self.line_points = layer.coordinates.len();
            Ok(())
        }

        fn register_point_layer(
            &mut self,
            layer: &PointLayer<'_>,
        ) -> Result<(), PresentationError> {
            self.check(Service::PointLayer)?;
            self.records = layer.records.to_vec();
            Ok(())
        }

        fn set_elevation_input(
            &mut self,
            input: &ElevationInput<'_>,
        ) -> Result<(), PresentationError> {
            self.check(Service::ElevationProfile)?;
            self.elevation_points = input.coordinates.len();
            Ok(())
        }
    }

    #[test]
    fn test_present_registers_each_service_once() {
        let payload = build_payload(&create_test_track());
        let mut backend = RecordingBackend::default();

        let outcome = present(&payload, &mut backend);

        assert!(outcome.is_success());
        assert_eq!(
            backend.calls,
            vec![
                Service::LineLayer,
                Service::PointLayer,
                Service::ElevationProfile
            ]
        );
        assert_eq!(backend.line_points, 3);
        assert_eq!(backend.elevation_points, 3);
        assert_eq!(backend.records[0].id, 1);
        assert_eq!(backend.records[0].role, EndpointRole::Start);
        assert_eq!(backend.records[1].id, 2);
        assert_eq!(backend.records[1].role, EndpointRole::End);
    }

    #[test]
    fn test_rejection_does_not_stop_other_services() {
        let payload = build_payload(&create_test_track());
        let mut backend = RecordingBackend {
            reject: Some(Service::PointLayer),
            ..Default::default()
        };

        let outcome = present(&payload, &mut backend);

        assert!(!outcome.is_success());
        assert!(outcome.line.is_ok());
        assert!(outcome.elevation.is_ok());
        assert_eq!(outcome.failures().count(), 1);
        assert_eq!(backend.calls.len(), 3);
        assert!(matches!(
            outcome.into_result(),
            Err(PresentationError::Rejected {
                service: Service::PointLayer,
                ..
            })
        ));
    }

    #[test]
    fn test_descriptors_follow_style() {
        let payload = build_payload(&create_test_track());

        let line = line_layer(&payload);
        assert_eq!(line.title, "Rae Lakes");
        assert_eq!(line.color, payload.style.line_color);
        assert_eq!(line.ground_offset, LINE_GROUND_OFFSET_M);

        let points = point_layer(&payload);
        assert_eq!(points.id_field, "ObjectID");
        assert_eq!(points.role_field, "type");
        assert_eq!(points.symbols[0].color, payload.style.start_color);
        assert_eq!(points.symbols[1].color, payload.style.end_color);
        assert_eq!(points.symbols[1].label, "Arrival point");

        let input = elevation_input(&payload);
        assert_eq!(input.coordinates, line.coordinates);
        assert_eq!(input.title, TRACK_TITLE);
    }
}
