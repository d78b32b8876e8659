//! # bita-test
//!
//! Testing utilities for bita-rs. Provides submission channels that record
//! or hold back what a form sends, plus fixtures for building the site's
//! forms with valid values.
//!
//! ## Modules
//!
//! - [`recording_channel`] - Captures payloads and replays scripted outcomes
//! - [`gate_channel`] - Holds each submission until the test releases it
//! - [`fixtures`] - Valid field values and pre-wired forms

pub mod fixtures;
pub mod gate_channel;
pub mod recording_channel;

pub use gate_channel::GateChannel;
pub use recording_channel::RecordingChannel;
