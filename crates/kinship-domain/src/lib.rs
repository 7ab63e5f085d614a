//! Kinship Domain Layer
//!
//! This crate contains the value objects shared by every other kinship crate.
//! It has no I/O and a single external dependency (`chrono`, for calendar
//! dates), and defines the fundamental concepts the engine reasons about.
//!
//! ## Key Concepts
//!
//! - **Person**: an individual with a gender and optional birth/death dates
//! - **Relationship fact**: a pairwise edge (parent, child, spouse, sibling)
//! - **Spouse status**: current, deceased or ex, resolved per pair
//! - **Relation**: a gender-neutral kinship concept (e.g. "parent's sibling")
//! - **Terms**: the male / female / neutral spellings of a relation
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Graph construction and classification live in `kinship-engine`
//! - Rendering a relation for a specific person goes through `Relation::terms`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fact;
pub mod ordinal;
pub mod person;
pub mod relation;

// Re-exports for convenience
pub use fact::{FactKind, RelationshipFact, SpouseStatus};
pub use person::{Gender, Person, PersonId};
pub use relation::{Relation, RelationFamily, Terms};
