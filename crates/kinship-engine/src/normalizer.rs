//! Fact normalization
//!
//! Converts raw facts, which may follow either of two directional
//! conventions, into canonical parent→child, spouse and sibling edges. The
//! convention is detected once per input set; nothing downstream looks at
//! raw fact shapes again.

use crate::config::{EngineConfig, SpousePrecedence};
use kinship_domain::{FactKind, Person, PersonId, RelationshipFact, SpouseStatus};
use std::collections::BTreeMap;
use tracing::debug;

/// Meaning of `parent`-kind facts in an input set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `parent` means source is parent of target
    Testing,
    /// `parent` means source has parent target (both `parent` and `child` facts present)
    Store,
}

/// A spouse pair with its resolved status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseEdge {
    /// Lower identifier of the pair
    pub a: PersonId,
    /// Higher identifier of the pair
    pub b: PersonId,
    /// Resolved status
    pub status: SpouseStatus,
}

/// Canonical directed edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFacts {
    /// Convention detected for `parent`-kind facts
    pub convention: Convention,
    /// (parent, child) edges, possibly duplicated
    pub parent_edges: Vec<(PersonId, PersonId)>,
    /// One edge per spouse pair
    pub spouse_edges: Vec<SpouseEdge>,
    /// Explicit sibling pairs, possibly duplicated
    pub sibling_edges: Vec<(PersonId, PersonId)>,
}

/// Detect the convention: store when both `parent` and `child` kinds occur anywhere
pub fn detect_convention(facts: &[RelationshipFact]) -> Convention {
    let has_parent = facts.iter().any(|f| f.kind == FactKind::Parent);
    let has_child = facts.iter().any(|f| f.kind == FactKind::Child);
    if has_parent && has_child {
        Convention::Store
    } else {
        Convention::Testing
    }
}

/// Resolve a spouse pair's status from its merged flags
pub fn resolve_spouse_status(
    is_ex: bool,
    is_deceased: bool,
    precedence: SpousePrecedence,
) -> SpouseStatus {
    match (is_ex, is_deceased, precedence) {
        (true, true, SpousePrecedence::DeceasedOverEx) => SpouseStatus::Deceased,
        (true, _, _) => SpouseStatus::Ex,
        (false, true, _) => SpouseStatus::Deceased,
        (false, false, _) => SpouseStatus::Current,
    }
}

#[derive(Default)]
struct SpouseFlags {
    is_ex: bool,
    is_deceased: bool,
}

/// Normalize raw facts into canonical edges
///
/// `people` is consulted only for death dates, which make a spouse pair
/// deceased. Self-referencing facts are dropped.
pub fn normalize(
    facts: &[RelationshipFact],
    people: &BTreeMap<PersonId, Person>,
    config: &EngineConfig,
) -> NormalizedFacts {
    let convention = detect_convention(facts);
    debug!("Detected fact convention: {:?}", convention);

    let mut parent_edges = Vec::new();
    let mut sibling_edges = Vec::new();
    let mut spouse_flags: BTreeMap<(PersonId, PersonId), SpouseFlags> = BTreeMap::new();

    for fact in facts {
        if fact.is_self_loop() {
            debug!("Dropping self-referencing {} fact for {}", fact.kind.as_str(), fact.source);
            continue;
        }

        match fact.kind {
            FactKind::Child => parent_edges.push((fact.source.clone(), fact.target.clone())),
            FactKind::Parent => match convention {
                Convention::Testing => {
                    parent_edges.push((fact.source.clone(), fact.target.clone()))
                }
                Convention::Store => {
                    parent_edges.push((fact.target.clone(), fact.source.clone()))
                }
            },
            FactKind::Spouse => {
                let flags = spouse_flags.entry(ordered(&fact.source, &fact.target)).or_default();
                flags.is_ex |= fact.is_ex;
                flags.is_deceased |= fact.is_deceased;
            }
            FactKind::Sibling => sibling_edges.push((fact.source.clone(), fact.target.clone())),
        }
    }

    let spouse_edges = spouse_flags
        .into_iter()
        .map(|((a, b), flags)| {
            let either_dead = [&a, &b]
                .iter()
                .any(|id| people.get(*id).is_some_and(Person::is_deceased));
            let status = resolve_spouse_status(
                flags.is_ex,
                flags.is_deceased || either_dead,
                config.spouse_precedence,
            );
            SpouseEdge { a, b, status }
        })
        .collect();

    NormalizedFacts {
        convention,
        parent_edges,
        spouse_edges,
        sibling_edges,
    }
}

fn ordered(x: &PersonId, y: &PersonId) -> (PersonId, PersonId) {
    if x <= y {
        (x.clone(), y.clone())
    } else {
        (y.clone(), x.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kinship_domain::Gender;

    fn people(list: Vec<Person>) -> BTreeMap<PersonId, Person> {
        list.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    fn id(s: &str) -> PersonId {
        PersonId::new(s)
    }

    #[test]
    fn test_testing_convention_parent_is_source() {
        let facts = vec![RelationshipFact::new("john", "alice", FactKind::Parent)];
        let normalized = normalize(&facts, &BTreeMap::new(), &EngineConfig::default());

        assert_eq!(normalized.convention, Convention::Testing);
        assert_eq!(normalized.parent_edges, vec![(id("john"), id("alice"))]);
    }

    #[test]
    fn test_store_convention_flips_parent_facts_only() {
        let facts = vec![
            RelationshipFact::new("alice", "john", FactKind::Parent),
            RelationshipFact::new("john", "alice", FactKind::Child),
            RelationshipFact::new("bob", "mary", FactKind::Child),
        ];
        let normalized = normalize(&facts, &BTreeMap::new(), &EngineConfig::default());

        assert_eq!(normalized.convention, Convention::Store);
        assert_eq!(
            normalized.parent_edges,
            vec![
                (id("john"), id("alice")),
                (id("john"), id("alice")),
                (id("bob"), id("mary")),
            ]
        );
    }

    #[test]
    fn test_spouse_status_from_death_date() {
        let died = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        let people = people(vec![
            Person::new("john", Gender::Male),
            Person::new("jane", Gender::Female).died(died),
            Person::new("lisa", Gender::Female),
        ]);
        let facts = vec![
            RelationshipFact::spouse("john", "jane"),
            RelationshipFact::spouse("lisa", "john"),
            RelationshipFact::spouse("john", "lisa"),
        ];
        let normalized = normalize(&facts, &people, &EngineConfig::default());

        assert_eq!(normalized.spouse_edges.len(), 2);
        assert_eq!(normalized.spouse_edges[0].a, id("jane"));
        assert_eq!(normalized.spouse_edges[0].status, SpouseStatus::Deceased);
        assert_eq!(normalized.spouse_edges[1].status, SpouseStatus::Current);
    }

    #[test]
    fn test_ex_precedence_is_configurable() {
        let died = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let people = people(vec![
            Person::new("a", Gender::Male).died(died),
            Person::new("b", Gender::Female),
        ]);
        let facts = vec![RelationshipFact::ex_spouse("a", "b")];

        let default = normalize(&facts, &people, &EngineConfig::default());
        assert_eq!(default.spouse_edges[0].status, SpouseStatus::Ex);

        let config = EngineConfig {
            spouse_precedence: SpousePrecedence::DeceasedOverEx,
            ..EngineConfig::default()
        };
        let flipped = normalize(&facts, &people, &config);
        assert_eq!(flipped.spouse_edges[0].status, SpouseStatus::Deceased);
    }

    #[test]
    fn test_duplicate_spouse_facts_merge_flags() {
        let facts = vec![
            RelationshipFact::spouse("a", "b"),
            RelationshipFact::ex_spouse("b", "a"),
        ];
        let normalized = normalize(&facts, &BTreeMap::new(), &EngineConfig::default());
        assert_eq!(normalized.spouse_edges.len(), 1);
        assert_eq!(normalized.spouse_edges[0].status, SpouseStatus::Ex);
    }

    #[test]
    fn test_self_loops_dropped() {
        let facts = vec![
            RelationshipFact::parent_of("a", "a"),
            RelationshipFact::spouse("b", "b"),
        ];
        let normalized = normalize(&facts, &BTreeMap::new(), &EngineConfig::default());
        assert!(normalized.parent_edges.is_empty());
        assert!(normalized.spouse_edges.is_empty());
    }
}
