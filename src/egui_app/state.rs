#![cfg(feature = "egui")]

use std::sync::mpsc::{self, Receiver, Sender};

use crate::client::QueryClient;
use crate::config::AtlasConfig;
use crate::constellation::{ConstellationStyle, draw_constellation};
use crate::dispatch::{self, OutputRegion, RenderContext, StatusRegion};
use crate::error::{Error, Result};
use crate::geometry::SurfaceSize;
use crate::model::{Geometry, QueryRequest, QueryResponse};
use crate::surface::{DisplayList, Surface};

/// Interactive viewer state.
///
/// Overlapping queries are allowed to race: every submission gets its own
/// worker and whichever answer arrives last owns the display.
pub struct AtlasApp {
    pub query: String,
    pub status: StatusRegion,
    pub output: OutputRegion,
    /// Last constellation pass, replayed into the painter every frame.
    pub display: DisplayList,
    /// Geometry behind `display`, kept to redraw after a resize.
    pub geometry: Option<Geometry>,
    pub style: ConstellationStyle,
    client: std::result::Result<QueryClient, String>,
    tx: Sender<Result<QueryResponse>>,
    rx: Receiver<Result<QueryResponse>>,
    in_flight: usize,
}

impl AtlasApp {
    pub fn new(config: &AtlasConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let client = QueryClient::from_config(config).map_err(|e| e.to_string());
        if let Err(err) = &client {
            log::error!("query client unavailable: {err}");
        }
        let style = config.constellation_style().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to default palette");
            ConstellationStyle::DEFAULT
        });
        Self {
            query: String::new(),
            status: StatusRegion::new(),
            output: OutputRegion::new(),
            display: DisplayList::new(config.surface),
            geometry: None,
            style,
            client,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Send the current query. Blank input is ignored.
    pub fn submit(&mut self) {
        let Some(request) = QueryRequest::from_input(&self.query) else {
            return;
        };
        {
            let mut ctx = RenderContext::new(&mut self.status, &mut self.output, &mut self.display)
                .with_style(&self.style);
            dispatch::begin_query(&mut ctx);
        }
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(message) => {
                self.apply(Err(Error::Config(message.clone())));
                return;
            }
        };
        let tx = self.tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let result = client.query(&request);
            if tx.send(result).is_err() {
                log::debug!("viewer closed before the response arrived");
            }
        });
    }

    /// Apply every response that has arrived since the last frame.
    pub fn poll(&mut self) {
        while let Ok(result) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(result);
        }
    }

    /// Render one delivered result into the regions.
    pub fn apply(&mut self, result: Result<QueryResponse>) {
        let geometry = match &result {
            Ok(QueryResponse::Geometry(geometry)) => Some(geometry.clone()),
            _ => None,
        };
        let summary = {
            let mut ctx =
                RenderContext::new(&mut self.status, &mut self.output, &mut self.display)
                    .with_style(&self.style);
            dispatch::complete(result, &mut ctx)
        };
        if summary.is_some() && geometry.is_some() {
            self.geometry = geometry;
        }
    }

    /// Track the canvas size. A changed size redraws the last constellation so
    /// the mapping always uses the current dimensions.
    pub fn ensure_size(&mut self, size: SurfaceSize) {
        if self.display.size() == size {
            return;
        }
        self.display.resize(size);
        if let Some(geometry) = &self.geometry {
            if let Err(err) = draw_constellation(&mut self.display, geometry, &self.style) {
                log::warn!("redraw after resize failed: {err}");
            }
        }
    }
}
