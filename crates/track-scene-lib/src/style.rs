//! Fixed presentational metadata attached to a scene payload

use std::fmt;
use std::str::FromStr;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    #[inline]
    pub fn to_array(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts `#rrggbb` or `r,g,b`
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("expected #rrggbb, got {s:?}"));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|e| format!("invalid hex color {s:?}: {e}"))
            };
            return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid color channel in {s:?}: {e}"))?;
        match channels[..] {
            [r, g, b] => Ok(Rgb(r, g, b)),
            _ => Err(format!("expected 3 channels (r,g,b), got {s:?}")),
        }
    }
}

/// Style directives for the track line and its endpoint markers
///
/// Start and end colors must differ so the two markers stay distinguishable
/// regardless of the rendering engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleMetadata {
    pub line_color: Rgb,
    /// Line thickness in points
    pub line_width: f32,
    pub start_color: Rgb,
    pub end_color: Rgb,
    /// Marker diameter in points
    pub marker_size: f32,
}

impl Default for StyleMetadata {
    fn default() -> Self {
        Self {
            line_color: Rgb(245, 203, 66),
            line_width: 3.0,
            start_color: Rgb(108, 235, 184),
            end_color: Rgb(168, 8, 8),
            marker_size: 10.0,
        }
    }
}

impl StyleMetadata {
    /// Marker color for an endpoint role
    pub fn endpoint_color(&self, role: crate::EndpointRole) -> Rgb {
        match role {
            crate::EndpointRole::Start => self.start_color,
            crate::EndpointRole::End => self.end_color,
        }
    }
}
