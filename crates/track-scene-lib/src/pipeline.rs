//! End-to-end track-to-scene pipeline
//!
//! fetch → parse → build → present. Each run is independent and keeps no state;
//! the fetch is the single await point.

use crate::fetch::{TrackSource, fetch};
use crate::{PayloadBuilder, PresentationBackend, PresentationOutcome, Result, ScenePayload};

/// Fetch, parse and build the payload for one track source
pub async fn load_payload(source: &TrackSource, builder: &PayloadBuilder) -> Result<ScenePayload> {
    let content = fetch(source).await?;
    let track = crate::parse(&content)?;
    Ok(builder.build(&track))
}

/// Run the whole pipeline against a backend
///
/// Fetch and parse failures end the run with an error. Presentation failures are
/// reported per service in the returned outcome.
pub async fn run(
    source: &TrackSource,
    builder: &PayloadBuilder,
    backend: &mut dyn PresentationBackend,
) -> Result<PresentationOutcome> {
    let payload = load_payload(source, builder).await?;
    tracing::info!(
        "Presenting {} ({} points)",
        payload.line.name().unwrap_or("unnamed track"),
        payload.line.len()
    );
    Ok(crate::present(&payload, backend))
}
