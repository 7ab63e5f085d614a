//! Engine entry points

use crate::classifier::Classifier;
use crate::consanguinity::BloodRelationship;
use crate::graph::FamilyGraph;
use crate::{EngineConfig, KinshipError, Snapshot};
use kinship_domain::{Person, PersonId, Relation, RelationshipFact};
use tracing::info;

/// One row of a batch classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPerson {
    /// The person described
    pub person: PersonId,

    /// Their relation to the root
    pub relation: Relation,

    /// Gendered label
    pub label: String,
}

/// Kinship engine: builds a graph per query and classifies pairs
///
/// # Examples
///
/// ```
/// use kinship_domain::{Gender, Person, PersonId, RelationshipFact};
/// use kinship_engine::KinshipEngine;
///
/// let people = vec![
///     Person::new("john", Gender::Male),
///     Person::new("alice", Gender::Female),
/// ];
/// let facts = vec![RelationshipFact::parent_of("john", "alice")];
///
/// let engine = KinshipEngine::default_config();
/// let label = engine.classify_relationship(
///     &PersonId::new("alice"),
///     &PersonId::new("john"),
///     &people,
///     &facts,
/// );
/// assert_eq!(label, "Daughter");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KinshipEngine {
    config: EngineConfig,
}

impl KinshipEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine after validating the configuration
    pub fn try_new(config: EngineConfig) -> Result<Self, KinshipError> {
        config.validate().map_err(KinshipError::Config)?;
        Ok(Self::new(config))
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a graph for callers that want to reuse it across queries
    pub fn build_graph(&self, people: &[Person], facts: &[RelationshipFact]) -> FamilyGraph {
        FamilyGraph::build(people, facts, &self.config)
    }

    /// A classifier over a prebuilt graph
    pub fn classifier<'a>(&'a self, graph: &'a FamilyGraph) -> Classifier<'a> {
        Classifier::new(graph, &self.config)
    }

    /// Label of `person` relative to `root`
    pub fn classify_relationship(
        &self,
        person: &PersonId,
        root: &PersonId,
        people: &[Person],
        facts: &[RelationshipFact],
    ) -> String {
        let graph = self.build_graph(people, facts);
        self.classifier(&graph).label(person, root)
    }

    /// Label every person relative to `root`, in input order
    pub fn classify_all(
        &self,
        root: &PersonId,
        people: &[Person],
        facts: &[RelationshipFact],
    ) -> Vec<ClassifiedPerson> {
        let graph = self.build_graph(people, facts);
        self.classify_all_in(&graph, root)
    }

    /// Label every person in a prebuilt graph relative to `root`
    pub fn classify_all_in(&self, graph: &FamilyGraph, root: &PersonId) -> Vec<ClassifiedPerson> {
        let classifier = self.classifier(graph);
        let rows: Vec<ClassifiedPerson> = graph
            .people()
            .map(|p| {
                let relation = classifier.classify(&p.id, root);
                ClassifiedPerson {
                    person: p.id.clone(),
                    label: classifier.spell(&p.id, &relation),
                    relation,
                }
            })
            .collect();

        let related = rows
            .iter()
            .filter(|r| !matches!(r.relation, Relation::Unrelated | Relation::Root))
            .count();
        info!("Classified {} people relative to {} ({} related)", rows.len(), root, related);
        rows
    }

    /// Classify every person in a snapshot relative to `root`
    pub fn classify_snapshot(&self, root: &PersonId, snapshot: &Snapshot) -> Vec<ClassifiedPerson> {
        self.classify_all(root, &snapshot.people, &snapshot.facts)
    }

    /// Whether `a` is a blood relative of `b`, ignoring lifespans
    pub fn detect_blood_relationship(
        &self,
        a: &PersonId,
        b: &PersonId,
        facts: &[RelationshipFact],
        people: &[Person],
    ) -> BloodRelationship {
        let graph = self.build_graph(people, facts);
        let classifier = self.classifier(&graph);
        let relation = match classifier.classify_blood(a, b) {
            Relation::Root => Relation::Unrelated,
            other => other,
        };
        let label = classifier.spell(a, &relation);
        BloodRelationship::from_relation(relation, label)
    }
}
