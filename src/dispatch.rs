//! Mode dispatcher: routes a decoded response to the text renderer or the
//! constellation renderer and drives the status and output regions.
//!
//! The host owns three regions (status line, output panel, drawing surface)
//! and lends them to the core for one call through a [`RenderContext`].
//! Every failure, whether from a renderer or from the transport, ends in the
//! same place: [`Status::Error`] plus [`FALLBACK_MESSAGE`] in the output
//! region.

use crate::constellation::{ConstellationStyle, draw_constellation};
use crate::error::{Error, Result};
use crate::fragments::{self, VisualFragment};
use crate::model::{QueryResponse, RenderMode};
use crate::surface::Surface;

/// Message shown in the output region whenever a query fails.
pub const FALLBACK_MESSAGE: &str = "Bridge error — no geometry returned.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Querying,
    FormattingText,
    TextComplete,
    RenderingConstellation,
    ConstellationComplete,
    Error,
}

impl Status {
    pub fn text(self) -> &'static str {
        match self {
            Status::Idle => "",
            Status::Querying => "⟳ querying...",
            Status::FormattingText => "formatting bridge output...",
            Status::TextComplete => "✅ bridge complete",
            Status::RenderingConstellation => "rendering constellation...",
            Status::ConstellationComplete => "✅ complete",
            Status::Error => "⚠️ error in bridge",
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(
            self,
            Status::Querying | Status::FormattingText | Status::RenderingConstellation
        )
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::TextComplete | Status::ConstellationComplete)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Regions
// ────────────────────────────────────────────────────────────────────────────

/// Status line. Keeps every transition so hosts can animate and tests can
/// check ordering.
#[derive(Debug, Clone, Default)]
pub struct StatusRegion {
    current: Status,
    transitions: Vec<Status>,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, status: Status) {
        log::debug!("status: {:?}", status);
        self.current = status;
        self.transitions.push(status);
    }

    pub fn current(&self) -> Status {
        self.current
    }

    pub fn text(&self) -> &'static str {
        self.current.text()
    }

    pub fn transitions(&self) -> &[Status] {
        &self.transitions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputContent {
    #[default]
    Empty,
    /// Formatted bridge output: the fragments and their markup.
    Formatted {
        fragments: Vec<VisualFragment>,
        html: String,
    },
    /// A plain message shown as text, not markup.
    Message(String),
}

/// Output panel. Every write replaces the previous content.
#[derive(Debug, Clone, Default)]
pub struct OutputRegion {
    content: OutputContent,
}

impl OutputRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.content = OutputContent::Empty;
    }

    pub fn show_fragments(&mut self, fragments: Vec<VisualFragment>) {
        self.content = if fragments.is_empty() {
            OutputContent::Empty
        } else {
            let html = fragments::to_html(&fragments);
            OutputContent::Formatted { fragments, html }
        };
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.content = OutputContent::Message(message.into());
    }

    pub fn content(&self) -> &OutputContent {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, OutputContent::Empty)
    }

    pub fn fragments(&self) -> &[VisualFragment] {
        match &self.content {
            OutputContent::Formatted { fragments, .. } => fragments,
            _ => &[],
        }
    }

    /// Markup equivalent of the current content. Messages are escaped.
    pub fn html(&self) -> String {
        match &self.content {
            OutputContent::Empty => String::new(),
            OutputContent::Formatted { html, .. } => html.clone(),
            OutputContent::Message(message) => html_escape::encode_text(message).into_owned(),
        }
    }
}

/// Handles to the host's regions, lent to the core for one call.
pub struct RenderContext<'a, S: Surface + ?Sized> {
    pub status: &'a mut StatusRegion,
    pub output: &'a mut OutputRegion,
    pub surface: &'a mut S,
    pub style: &'a ConstellationStyle,
}

impl<'a, S: Surface + ?Sized> RenderContext<'a, S> {
    pub fn new(
        status: &'a mut StatusRegion,
        output: &'a mut OutputRegion,
        surface: &'a mut S,
    ) -> Self {
        Self {
            status,
            output,
            surface,
            style: &ConstellationStyle::DEFAULT,
        }
    }

    pub fn with_style(mut self, style: &'a ConstellationStyle) -> Self {
        self.style = style;
        self
    }
}

/// What one successful dispatch rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub mode: RenderMode,
    pub fragments: usize,
    pub points: usize,
    pub edges: usize,
}

impl RenderSummary {
    /// Whether the pass drew on the surface. Text responses never do.
    pub fn drew_surface(&self) -> bool {
        self.mode == RenderMode::Constellation
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Mark a query as in flight and clear the output region. The surface keeps
/// its last drawing until a response arrives.
pub fn begin_query<S: Surface + ?Sized>(ctx: &mut RenderContext<'_, S>) {
    ctx.status.set(Status::Querying);
    ctx.output.clear();
}

/// Render one response. On failure the error state is already shown when
/// this returns; the error is handed back for logging or retries.
pub fn dispatch<S: Surface + ?Sized>(
    response: &QueryResponse,
    ctx: &mut RenderContext<'_, S>,
) -> Result<RenderSummary> {
    let rendered = match response {
        QueryResponse::Text(text) => {
            ctx.status.set(Status::FormattingText);
            let fragments = fragments::render_text(text);
            let count = fragments.len();
            ctx.output.show_fragments(fragments);
            ctx.status.set(Status::TextComplete);
            Ok(RenderSummary {
                mode: RenderMode::Text,
                fragments: count,
                points: 0,
                edges: 0,
            })
        }
        QueryResponse::Geometry(geometry) => {
            ctx.status.set(Status::RenderingConstellation);
            draw_constellation(ctx.surface, geometry, ctx.style).map(|stats| {
                ctx.status.set(Status::ConstellationComplete);
                RenderSummary {
                    mode: RenderMode::Constellation,
                    fragments: 0,
                    points: stats.points(),
                    edges: stats.edges,
                }
            })
        }
    };

    if let Err(err) = &rendered {
        if response.mode() == RenderMode::Constellation {
            // Drop the partial drawing along with the partial output.
            if let Err(clear_err) = ctx.surface.clear() {
                log::warn!("could not clear surface after failed pass: {clear_err}");
            }
        }
        report_failure(ctx, err);
    }
    rendered
}

/// Show the error state: error status and the fallback message, replacing
/// whatever the output region held.
pub fn report_failure<S: Surface + ?Sized>(ctx: &mut RenderContext<'_, S>, err: &Error) {
    log::error!("query failed: {err}");
    ctx.status.set(Status::Error);
    ctx.output.show_message(FALLBACK_MESSAGE);
}

/// Finish a query with whatever the network collaborator delivered.
pub fn complete<S: Surface + ?Sized>(
    result: Result<QueryResponse>,
    ctx: &mut RenderContext<'_, S>,
) -> Option<RenderSummary> {
    match result {
        Ok(response) => dispatch(&response, ctx).ok(),
        Err(err) => {
            report_failure(ctx, &err);
            None
        }
    }
}
