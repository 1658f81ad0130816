//! Dual-mode renderer for MindField query-bridge responses.
//!
//! A query response is either pre-formatted text, rendered as a sequence of
//! classified lines, or two sets of points, rendered as a constellation
//! diagram. [`response::decode`] classifies a body, [`dispatch::dispatch`]
//! renders it into host-owned regions passed through a
//! [`dispatch::RenderContext`].
//!
//! The binary `mindfield` renders live or saved responses headlessly; the
//! `mindfield-atlas` binary (feature `egui`) is the interactive viewer.

pub mod client;
pub mod color;
pub mod config;
pub mod constellation;
pub mod dispatch;
pub mod error;
pub mod fragments;
pub mod geometry;
pub mod model;
pub mod response;
pub mod surface;
pub mod svg;

// Optional GUI functionality lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use error::{Error, Result};
