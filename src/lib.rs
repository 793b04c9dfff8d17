//! Deterministic cost/waste analysis engine for consulting engagements.
//!
//! A client engagement record holds ~20 numeric project inputs; the
//! model layer turns them into a cost breakdown, ROI scenarios and a
//! ranked list of waste-reduction opportunities. Records persist to a
//! local SQLite store keyed by client id.

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
