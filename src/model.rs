use serde::{Deserialize, Serialize};

/// Number of excerpt characters used when a point has no title.
pub const LABEL_EXCERPT_CHARS: usize = 48;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Body of the `POST` sent to the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    /// Build a request from raw user input. Returns `None` when the trimmed
    /// query is empty, in which case nothing should be sent.
    pub fn from_input(input: &str) -> Option<Self> {
        let query = input.trim();
        if query.is_empty() {
            None
        } else {
            Some(Self {
                query: query.to_string(),
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Point
// ────────────────────────────────────────────────────────────────────────────

/// A labeled marker placed by the server in normalized coordinates.
///
/// `x` and `y` are nominally within `[-1, 1]` but are never validated; values
/// outside that range simply land outside the visible area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub id: String,
}

impl Point {
    pub fn new(x: f64, y: f64, id: impl Into<String>) -> Self {
        Self {
            x,
            y,
            title: None,
            excerpt: None,
            id: id.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Text drawn next to the marker: the title, else the head of the
    /// excerpt, else the id. Empty strings count as absent.
    pub fn label(&self) -> &str {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            return title;
        }
        if let Some(excerpt) = self.excerpt.as_deref().filter(|e| !e.is_empty()) {
            return truncate_chars(excerpt, LABEL_EXCERPT_CHARS);
        }
        &self.id
    }
}

/// Prefix of `s` holding at most `max` characters, cut on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response
// ────────────────────────────────────────────────────────────────────────────

/// The two point categories of a constellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Anchor items (theory compasses).
    #[serde(default)]
    pub orientation: Vec<Point>,
    /// Related items (paragraph fragments).
    #[serde(default)]
    pub texture: Vec<Point>,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.orientation.is_empty() && self.texture.is_empty()
    }

    /// Orientation point paired with `texture[index]` by cyclic index.
    pub fn partner_of(&self, index: usize) -> Option<&Point> {
        if self.orientation.is_empty() {
            return None;
        }
        self.orientation.get(index % self.orientation.len())
    }
}

/// A decoded server response, classified once at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    /// Pre-formatted multi-line bridge output.
    Text(String),
    /// Points to draw as a constellation.
    Geometry(Geometry),
}

impl QueryResponse {
    pub fn mode(&self) -> RenderMode {
        match self {
            QueryResponse::Text(_) => RenderMode::Text,
            QueryResponse::Geometry(_) => RenderMode::Constellation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Text,
    Constellation,
}
