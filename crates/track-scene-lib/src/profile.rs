//! Elevation profile series and summary statistics

use crate::{Track, utils};

/// One point of the elevation chart
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSample {
    /// Cumulative ground distance from the start in meters
    pub distance: f64,
    /// Meters
    pub elevation: f64,
}

/// Distance/elevation series of a track with its summary statistics
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationProfile {
    /// One sample per track point, in track order
    pub samples: Vec<ProfileSample>,
    /// Total distance in meters
    pub total_distance: f64,
    /// Sum of positive elevation deltas in meters
    pub ascent: f64,
    /// Sum of negative elevation deltas in meters, as a positive number
    pub descent: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ElevationProfile {
    /// Compute the profile in a single pass over the track
    pub fn from_track(track: &Track) -> Self {
        let coordinates = track.coordinates();
        let mut samples = Vec::with_capacity(coordinates.len());
        let mut total_distance = 0.0;
        let mut ascent = 0.0;
        let mut descent = 0.0;
        let mut min_elevation = f64::INFINITY;
        let mut max_elevation = f64::NEG_INFINITY;

        for (i, coordinate) in coordinates.iter().enumerate() {
            if let Some(prev) = i.checked_sub(1).map(|j| &coordinates[j]) {
                total_distance += utils::haversine_distance(prev, coordinate);
                let delta = coordinate.elevation - prev.elevation;
                if delta > 0.0 {
                    ascent += delta;
                } else {
                    descent -= delta;
                }
            }
            min_elevation = min_elevation.min(coordinate.elevation);
            max_elevation = max_elevation.max(coordinate.elevation);
            samples.push(ProfileSample {
                distance: total_distance,
                elevation: coordinate.elevation,
            });
        }

        Self {
            samples,
            total_distance,
            ascent,
            descent,
            min_elevation,
            max_elevation,
        }
    }
}
