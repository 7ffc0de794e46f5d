//! Start and end markers derived from a track

use crate::{Coordinate, Track};
use std::fmt;

/// Which end of the track an [`Endpoint`] marks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EndpointRole {
    Start,
    End,
}

impl EndpointRole {
    /// Value of the string role field handed to renderers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Record key of the endpoint with this role
    pub fn id(&self) -> u32 {
        match self {
            Self::Start => 1,
            Self::End => 2,
        }
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The first or last coordinate of a track as a labeled point record
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub coordinate: Coordinate,
    pub role: EndpointRole,
    /// Small positive record key, unique within one payload
    pub id: u32,
}

impl Endpoint {
    fn new(coordinate: Coordinate, role: EndpointRole) -> Self {
        Self {
            coordinate,
            role,
            id: role.id(),
        }
    }
}

/// Derive the start (id 1) and end (id 2) endpoints of a track
pub fn extract_endpoints(track: &Track) -> (Endpoint, Endpoint) {
    (
        Endpoint::new(*track.first(), EndpointRole::Start),
        Endpoint::new(*track.last(), EndpointRole::End),
    )
}
