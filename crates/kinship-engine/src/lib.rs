//! Kinship Engine
//!
//! Determines the kinship label one person bears to another ("Mother",
//! "Step-Brother", "2nd Cousin once removed", "Late Wife's Sister") from
//! pairwise relationship facts and birth/death dates.
//!
//! # Architecture
//!
//! ```text
//! facts → Normalizer → FamilyGraph → Classifier (TimelineValidator, GenderResolver) → label
//! ```
//!
//! The engine provides:
//! - Fact normalization across two directional conventions
//! - An immutable family graph with inferred biological siblings
//! - Lifespan checks that sever step links through people who died too early
//! - An ordered rule cascade: direct, step, blood, late spouse's family, in-law
//! - Blood-relationship detection for vetting unions
//!
//! # Examples
//!
//! ```
//! use kinship_domain::{Gender, Person, PersonId, RelationshipFact};
//! use kinship_engine::{EngineConfig, KinshipEngine};
//!
//! let people = vec![
//!     Person::new("john", Gender::Male),
//!     Person::new("lisa", Gender::Female),
//!     Person::new("alice", Gender::Female),
//!     Person::new("michael", Gender::Male),
//! ];
//! let facts = vec![
//!     RelationshipFact::parent_of("john", "alice"),
//!     RelationshipFact::parent_of("lisa", "michael"),
//!     RelationshipFact::spouse("john", "lisa"),
//! ];
//!
//! let engine = KinshipEngine::new(EngineConfig::default());
//! let label = engine.classify_relationship(
//!     &PersonId::new("michael"),
//!     &PersonId::new("alice"),
//!     &people,
//!     &facts,
//! );
//! assert_eq!(label, "Step-Brother");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod consanguinity;
mod engine;
mod error;
mod gender;
mod graph;
mod input;
mod normalizer;
mod timeline;

pub use classifier::Classifier;
pub use config::{EngineConfig, GenderFallback, SpousePrecedence};
pub use consanguinity::{degree, BloodRelationship};
pub use engine::{ClassifiedPerson, KinshipEngine};
pub use error::KinshipError;
pub use gender::GenderResolver;
pub use graph::FamilyGraph;
pub use input::{parse_date, Snapshot};
pub use normalizer::{detect_convention, normalize, Convention, NormalizedFacts, SpouseEdge};
pub use timeline::{lifespans_overlap, TimelineValidator};
