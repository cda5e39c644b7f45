//! Bathwise core library exports
//!
//! The recommendation decision engine (persona matching, safety filtering,
//! conflict resolution, context branching, assembly, sub-protocol overrides)
//! and the home-surface orchestration policy. Every decision function is pure
//! and synchronous; persistence lives in [`history`] and [`config`] and is
//! driven by the caller around the engine.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod history;
pub mod home;
pub mod model;
pub mod trace;

pub use error::EngineError;
