//! Style Assessment - Guided personality-style questionnaire
//!
//! This crate scores an eighteen-question forced-choice battery against four
//! behavioral styles (Driver, Analytical, Amiable, Expressive), reports the
//! dominant style or blend, and exports each completed attempt to a
//! configurable result sink.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
