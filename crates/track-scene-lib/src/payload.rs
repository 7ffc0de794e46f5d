//! Scene payload construction
//!
//! A [`ScenePayload`] bundles everything a renderer needs for one hike: the full
//! track for the line geometry, the two endpoints, and the style to draw them with.
//! Construction is pure; the same track and style always give an equal payload.

use crate::{Endpoint, StyleMetadata, Track, extract_endpoints};

/// Display-ready bundle of geometry, derived points and style
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScenePayload"))]
pub struct ScenePayload {
    /// Line geometry, also the elevation chart's input series
    pub line: Track,
    /// `[start, end]`
    pub endpoints: [Endpoint; 2],
    pub style: StyleMetadata,
}

/// Unchecked wire form of a [`ScenePayload`]; endpoints must match the line
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScenePayload {
    line: Track,
    endpoints: [Endpoint; 2],
    style: StyleMetadata,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScenePayload> for ScenePayload {
    type Error = String;

    fn try_from(raw: RawScenePayload) -> Result<Self, Self::Error> {
        let payload = PayloadBuilder::new(raw.style).build(&raw.line);
        if payload.endpoints != raw.endpoints {
            return Err(format!(
                "endpoints {:?} do not match the line's first and last points",
                raw.endpoints
            ));
        }
        Ok(payload)
    }
}

impl ScenePayload {
    #[inline]
    pub fn start(&self) -> &Endpoint {
        &self.endpoints[0]
    }

    #[inline]
    pub fn end(&self) -> &Endpoint {
        &self.endpoints[1]
    }
}

/// Builds payloads with a fixed style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PayloadBuilder {
    style: StyleMetadata,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl PayloadBuilder {
    pub fn new(style: StyleMetadata) -> Self {
        Self { style }
    }

    /// Combine the track with its endpoints and this builder's style
    pub fn build(&self, track: &Track) -> ScenePayload {
        let (start, end) = extract_endpoints(track);
        tracing::debug!(
            "Built scene payload: {} line points, start {:?}, end {:?}",
            track.len(),
            start.coordinate,
            end.coordinate
        );
        ScenePayload {
            line: track.clone(),
            endpoints: [start, end],
            style: self.style,
        }
    }
}

/// Build a payload with the default style
pub fn build_payload(track: &Track) -> ScenePayload {
    PayloadBuilder::default().build(track)
}
