//! The recommendation engine.
//!
//! Control flow for one routine request:
//! safety filter + persona matching -> forced-persona override -> conflict
//! resolution -> safety ceiling -> context branch -> forced bath type ->
//! ingredient assembly -> finished [`BathRecommendation`](crate::model::BathRecommendation).

pub mod assembler;
pub mod conflict;
pub mod context;
pub mod persona;
pub mod safety;
pub mod sub_protocol;

pub use assembler::{
    assemble_ingredient_ids, generate_care_recommendation, generate_recommendation,
    generate_trip_recommendation, should_force_safety_persona,
};
pub use conflict::{resolve_conflicts, ResolvedParameters};
pub use context::{apply_context_branch, ContextOverrides};
pub use persona::{match_personas, persona, PersonaCode, PersonaDefinition};
pub use safety::{apply_safety_filter, SafetyFilterResult, SafetyRule, Severity};
pub use sub_protocol::apply_sub_protocol_overrides;
