//! Core engine behind the donor registration experience: the accumulating
//! draft record, per-field validators, government-ID formatters, the donor
//! eligibility rule, and the four-step wizard state machine.
//!
//! Network delivery, notification display, and persistence are collaborator
//! concerns reached through the traits in [`workflows::registration::gateway`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
