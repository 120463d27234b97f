//! Docflow - Personal Document Workflow Manager
//!
//! This crate implements a priority-and-status document lifecycle over a
//! folder-per-status markdown workspace, with capacity guards and triage
//! advice for keeping work-in-progress bounded.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
