//! GeoJSON presentation backend
//!
//! Renders the scene as a single FeatureCollection: the track as a 3D
//! `LineString`, each endpoint as a `Point` carrying its id, role and marker
//! color, and the elevation chart summary as collection-level properties.

use crate::presentation::{ElevationInput, LineLayer, PointLayer, PresentationBackend, Service};
use crate::{EndpointRole, PresentationError};
use serde_json::{Map, Value, json};

/// Collects registrations into a GeoJSON FeatureCollection
#[derive(Debug, Default)]
pub struct GeoJsonScene {
    line: Option<Value>,
    points: Option<Vec<Value>>,
    elevation: Option<Value>,
}

impl GeoJsonScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject_duplicate(service: Service, registered: bool) -> Result<(), PresentationError> {
        if registered {
            return Err(PresentationError::Rejected {
                service,
                reason: "already registered for this scene".to_string(),
            });
        }
        Ok(())
    }

    /// Number of features registered so far
    pub fn feature_count(&self) -> usize {
        self.line.iter().count() + self.points.as_ref().map_or(0, Vec::len)
    }

    /// Assemble the FeatureCollection, line first then points
    pub fn to_feature_collection(&self) -> Value {
        let features: Vec<Value> = self
            .line
            .iter()
            .cloned()
            .chain(self.points.iter().flatten().cloned())
            .collect();

        let mut collection = Map::new();
        collection.insert("type".to_string(), json!("FeatureCollection"));
        collection.insert("features".to_string(), Value::Array(features));
        if let Some(elevation) = &self.elevation {
            collection.insert("properties".to_string(), json!({ "elevationProfile": elevation }));
        }
        Value::Object(collection)
    }

    pub fn to_string_pretty(&self) -> String {
        // Serializing a `Value` cannot fail
        serde_json::to_string_pretty(&self.to_feature_collection()).unwrap_or_default()
    }
}

impl PresentationBackend for GeoJsonScene {
    fn register_line_layer(&mut self, layer: &LineLayer<'_>) -> Result<(), PresentationError> {
        Self::reject_duplicate(Service::LineLayer, self.line.is_some())?;

        let coordinates: Vec<[f64; 3]> = layer.coordinates.iter().map(|c| c.to_array()).collect();
        self.line = Some(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "title": layer.title,
                "stroke": layer.color.to_hex(),
                "stroke-width": layer.width,
                "groundOffset": layer.ground_offset,
            },
        }));
        Ok(())
    }

    fn register_point_layer(&mut self, layer: &PointLayer<'_>) -> Result<(), PresentationError> {
        Self::reject_duplicate(Service::PointLayer, self.points.is_some())?;

        let symbol_for = |role: EndpointRole| layer.symbols.iter().find(|s| s.role == role);
        let mut features = Vec::with_capacity(layer.records.len());
        for record in &layer.records {
            let symbol = symbol_for(record.role).ok_or_else(|| PresentationError::Rejected {
                service: Service::PointLayer,
                reason: format!("no symbol for role {}", record.role),
            })?;

            let mut properties = Map::new();
            properties.insert(layer.id_field.to_string(), json!(record.id));
            properties.insert(layer.role_field.to_string(), json!(record.role.as_str()));
            properties.insert("label".to_string(), json!(symbol.label));
            properties.insert("marker-color".to_string(), json!(symbol.color.to_hex()));
            properties.insert("marker-size".to_string(), json!(symbol.size));

            features.push(json!({
                "type": "Feature",
                "id": record.id,
                "geometry": {
                    "type": "Point",
                    "coordinates": record.coordinate.to_array(),
                },
                "properties": properties,
            }));
        }
        self.points = Some(features);
        Ok(())
    }

    fn set_elevation_input(
        &mut self,
        input: &ElevationInput<'_>,
    ) -> Result<(), PresentationError> {
        Self::reject_duplicate(Service::ElevationProfile, self.elevation.is_some())?;

        let profile = &input.profile;
        self.elevation = Some(json!({
            "title": input.title,
            "color": input.color.to_hex(),
            "points": input.coordinates.len(),
            "distance": profile.total_distance,
            "ascent": profile.ascent,
            "descent": profile.descent,
            "minElevation": profile.min_elevation,
            "maxElevation": profile.max_elevation,
        }));
        Ok(())
    }
}
