use clap::{Parser, ValueEnum};
use track_scene_lib::{PayloadBuilder, Rgb, StyleMetadata, TrackSource};

/// How the scene is rendered to standard output
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable description of every registered layer
    Summary,
    /// A GeoJSON FeatureCollection
    Geojson,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Hike Track Scene - Turn a GPX hike recording into a 3D map scene
pub struct Settings {
    /// GPX file to load, or `-` for standard input
    #[clap(value_name = "FILE")]
    pub source: TrackSource,

    /// Output format
    #[clap(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    /// Track line color (#rrggbb or r,g,b)
    #[clap(long, default_value = "#f5cb42")]
    pub line_color: Rgb,

    /// Track line width in points
    #[clap(long, default_value = "3.0")]
    pub line_width: f32,

    /// Start marker color (#rrggbb or r,g,b)
    #[clap(long, default_value = "#6cebb8")]
    pub start_color: Rgb,

    /// Arrival marker color (#rrggbb or r,g,b)
    #[clap(long, default_value = "#a80808")]
    pub end_color: Rgb,

    /// Marker size in points
    #[clap(long, default_value = "10.0")]
    pub marker_size: f32,
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    pub fn style(&self) -> StyleMetadata {
        StyleMetadata {
            line_color: self.line_color,
            line_width: self.line_width,
            start_color: self.start_color,
            end_color: self.end_color,
            marker_size: self.marker_size,
        }
    }

    pub fn payload_builder(&self) -> PayloadBuilder {
        PayloadBuilder::new(self.style())
    }
}
