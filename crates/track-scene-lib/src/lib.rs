//! Track Scene Library - GPX hike recordings to display-ready 3D scenes
//!
//! This library turns a single GPX track recording into a [`ScenePayload`]: the
//! track as a 3D line, its start and end points as labeled markers, and the style
//! metadata needed to draw them. The payload is then handed to any rendering
//! backend through the [`PresentationBackend`] capability trait.
//!
//! # Architecture
//!
//! - **[`Track`]**: Immutable, ordered coordinates parsed from a GPX document
//! - **[`Endpoint`]**: The first and last coordinate, tagged with a role and an id
//! - **[`ScenePayload`]**: Line + endpoints + [`StyleMetadata`], built by [`PayloadBuilder`]
//! - **[`PresentationBackend`]**: Line layer, point layer and elevation chart services
//! - **[`pipeline`]**: fetch → parse → build → present, with one await point
//!
//! The pipeline is stateless: running it twice on the same file yields equal payloads.

mod endpoint;
pub mod fetch;
pub mod geojson;
mod payload;
pub mod pipeline;
pub mod presentation;
mod profile;
mod style;
mod track;
pub mod utils;

// Public API exports
pub use endpoint::{Endpoint, EndpointRole, extract_endpoints};
pub use fetch::TrackSource;
pub use geojson::GeoJsonScene;
pub use payload::{PayloadBuilder, ScenePayload, build_payload};
pub use presentation::{
    ElevationInput, LineLayer, PointLayer, PointRecord, PointSymbol, PresentationBackend,
    PresentationOutcome, Service, present,
};
pub use profile::{ElevationProfile, ProfileSample};
pub use style::{Rgb, StyleMetadata};
pub use track::{Coordinate, Track, parse, parse_str};

/// Failure while reading the raw track file
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to read track file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("Failed to download track from {url}: {source}")]
    Remote {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure while turning track file content into a [`Track`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("GPX parsing error: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("Not enough track points: need at least 2, the longest track has {found}")]
    NotEnoughPoints { found: usize },
}

/// Failure reported by an external presentation service
#[derive(Debug, thiserror::Error)]
pub enum PresentationError {
    #[error("{service} rejected the payload: {reason}")]
    Rejected { service: Service, reason: String },

    #[error("{service} output failed: {source}")]
    Io {
        service: Service,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure that terminates a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, Error>;
