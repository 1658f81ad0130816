use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::color::parse_color;
use crate::constellation::ConstellationStyle;
use crate::error::{Error, Result};
use crate::geometry::SurfaceSize;

/// API base used when the viewer runs against a local development server.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:5050";

/// Default query endpoint, relative to the API base.
pub const DEFAULT_ENDPOINT: &str = "/query";

/// Pick the API base for a page served from `hostname`: the local
/// development server for loopback hosts, same-origin (empty) otherwise.
pub fn api_base_for_host(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" => LOCAL_API_BASE,
        _ => "",
    }
}

/// Constellation colors as CSS strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub orientation: String,
    pub texture: String,
    pub edge: String,
    pub label: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            orientation: "gold".to_string(),
            texture: "cyan".to_string(),
            edge: "rgba(255,255,255,0.08)".to_string(),
            label: "rgba(255,255,255,0.65)".to_string(),
        }
    }
}

/// Viewer and CLI configuration, usually read from `mindfield.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Explicit API base. When unset the base is chosen from `host`.
    pub api_base: Option<String>,
    /// Hostname the client considers itself served from.
    pub host: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Surface size for headless rendering.
    pub surface: SurfaceSize,
    pub palette: Palette,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            host: "localhost".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            surface: SurfaceSize::default(),
            palette: Palette::default(),
        }
    }
}

impl AtlasConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {path}, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn api_base(&self) -> &str {
        match self.api_base.as_deref() {
            Some(base) => base,
            None => api_base_for_host(&self.host),
        }
    }

    /// Absolute URL of the query endpoint.
    pub fn endpoint_url(&self) -> Result<Url> {
        let base = self.api_base().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::Config(format!(
                "host '{}' implies a same-origin API; set api_base to an absolute URL",
                self.host
            )));
        }
        let joined = format!("{base}{}", self.endpoint);
        Url::parse(&joined).map_err(|e| Error::Config(format!("invalid endpoint '{joined}': {e}")))
    }

    /// Constellation style with the palette applied.
    pub fn constellation_style(&self) -> Result<ConstellationStyle> {
        let color = |name: &str, value: &str| {
            parse_color(value).ok_or_else(|| Error::Config(format!("invalid {name} color '{value}'")))
        };
        let mut style = ConstellationStyle::DEFAULT;
        style.orientation_color = color("orientation", &self.palette.orientation)?;
        style.texture_color = color("texture", &self.palette.texture)?;
        style.edge.color = color("edge", &self.palette.edge)?;
        style.label_color = color("label", &self.palette.label)?;
        Ok(style)
    }
}
