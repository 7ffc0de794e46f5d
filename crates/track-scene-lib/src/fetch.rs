//! Reading raw track file content
//!
//! Fetching is the only asynchronous step of a pipeline run. It is attempted
//! once; any failure ends the run.

use crate::FetchError;
use std::fmt;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where the track file comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackSource {
    /// A local file
    Path(PathBuf),
    /// Standard input, written as `-`
    Stdin,
    /// An `http://` or `https://` URL
    #[cfg(feature = "remote")]
    Url(String),
}

impl From<&str> for TrackSource {
    fn from(s: &str) -> Self {
        if s == "-" {
            return Self::Stdin;
        }
        #[cfg(feature = "remote")]
        if s.starts_with("http://") || s.starts_with("https://") {
            return Self::Url(s.to_string());
        }
        Self::Path(PathBuf::from(s))
    }
}

impl std::str::FromStr for TrackSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for TrackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
            #[cfg(feature = "remote")]
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Read the full content of a track source
pub async fn fetch(source: &TrackSource) -> Result<Vec<u8>, FetchError> {
    let io_error = |source_err| FetchError::Io {
        path: source.to_string(),
        source: source_err,
    };

    let content = match source {
        TrackSource::Path(path) => tokio::fs::read(path).await.map_err(io_error)?,
        TrackSource::Stdin => {
            let mut content = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut content)
                .await
                .map_err(io_error)?;
            content
        }
        #[cfg(feature = "remote")]
        TrackSource::Url(url) => {
            let remote_error = |e| FetchError::Remote {
                url: url.clone(),
                source: e,
            };
            let response = reqwest::get(url.as_str())
                .await
                .and_then(|r| r.error_for_status())
                .map_err(remote_error)?;
            response.bytes().await.map_err(remote_error)?.to_vec()
        }
    };

    tracing::info!("Read {} bytes from {}", content.len(), source);
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!(TrackSource::from("-"), TrackSource::Stdin);
        assert_eq!(
            TrackSource::from("RaeLakes.gpx"),
            TrackSource::Path(PathBuf::from("RaeLakes.gpx"))
        );
        assert_eq!(TrackSource::Stdin.to_string(), "<stdin>");
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_url_source_from_str() {
        let source: TrackSource = "https://example.com/RaeLakes.gpx".parse().unwrap();
        assert_eq!(
            source,
            TrackSource::Url("https://example.com/RaeLakes.gpx".to_string())
        );
        assert_eq!(source.to_string(), "https://example.com/RaeLakes.gpx");
        assert!(matches!(
            TrackSource::from("http://localhost/a.gpx"),
            TrackSource::Url(_)
        ));
    }

    #[cfg(not(feature = "remote"))]
    #[test]
    fn test_url_is_a_path_without_remote() {
        assert_eq!(
            TrackSource::from("https://example.com/RaeLakes.gpx"),
            TrackSource::Path(PathBuf::from("https://example.com/RaeLakes.gpx"))
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let source = TrackSource::from("/nonexistent/dir/track.gpx");
        let result = fetch(&source).await;

        match result {
            Err(FetchError::Io { path, .. }) => assert_eq!(path, "/nonexistent/dir/track.gpx"),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let path = std::env::temp_dir().join(format!("track-scene-fetch-{}.gpx", std::process::id()));
        std::fs::write(&path, b"<gpx/>").unwrap();

        let content = fetch(&TrackSource::Path(path.clone())).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(content, b"<gpx/>");
    }
}
