//! Plain-text presentation backend
//!
//! Describes every registration as it happens: the track line with its extent and
//! a suggested overhead camera, the two endpoint markers, and the elevation chart
//! statistics.

use std::io::Write;
use track_scene_lib::presentation::{
    ElevationInput, LineLayer, PointLayer, PresentationBackend, Service,
};
use track_scene_lib::{PresentationError, utils};

/// Camera altitude above the track center, in meters
const CAMERA_ALTITUDE_M: f64 = 30000.0;

pub struct SummaryScene<W: Write> {
    out: W,
}

impl<W: Write> SummaryScene<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, service: Service, text: String) -> Result<(), PresentationError> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|source| PresentationError::Io { service, source })
    }
}

impl<W: Write> PresentationBackend for SummaryScene<W> {
    fn register_line_layer(&mut self, layer: &LineLayer<'_>) -> Result<(), PresentationError> {
        let Some(extent) = utils::extent(layer.coordinates) else {
            return Err(PresentationError::Rejected {
                service: Service::LineLayer,
                reason: "line has no coordinates".to_string(),
            });
        };
        let (center_lon, center_lat) = utils::rect_center(&extent);

        let text = format!(
            "Line layer \"{}\": {} points, color {}, width {}, {} m above ground\n  \
             extent: lon {:.5}..{:.5}, lat {:.5}..{:.5}\n  \
             camera: lon {:.5}, lat {:.5}, altitude {} m, heading 0, tilt 0\n",
            layer.title,
            layer.coordinates.len(),
            layer.color,
            layer.width,
            layer.ground_offset,
            extent.min().x,
            extent.max().x,
            extent.min().y,
            extent.max().y,
            center_lon,
            center_lat,
            CAMERA_ALTITUDE_M,
        );
        self.write(Service::LineLayer, text)
    }

    fn register_point_layer(&mut self, layer: &PointLayer<'_>) -> Result<(), PresentationError> {
        let mut text = format!("Point layer \"{}\":\n", layer.title);
        for (record, symbol) in layer.records.iter().zip(&layer.symbols) {
            let c = record.coordinate;
            text.push_str(&format!(
                "  {}={} {}={:<5} {:<13} ({:.5}, {:.5}, {:.1} m) color {} size {}\n",
                layer.id_field,
                record.id,
                layer.role_field,
                record.role,
                symbol.label,
                c.longitude,
                c.latitude,
                c.elevation,
                symbol.color,
                symbol.size,
            ));
        }
        self.write(Service::PointLayer, text)
    }

    fn set_elevation_input(
        &mut self,
        input: &ElevationInput<'_>,
    ) -> Result<(), PresentationError> {
        let profile = &input.profile;
        let text = format!(
            "Elevation profile \"{}\": {} samples\n  \
             distance {:.2} km, ascent {:.0} m, descent {:.0} m, elevation {:.0}..{:.0} m\n",
            input.title,
            profile.samples.len(),
            profile.total_distance / 1000.0,
            profile.ascent,
            profile.descent,
            profile.min_elevation,
            profile.max_elevation,
        );
        self.write(Service::ElevationProfile, text)
    }
}
