//! Relationship classification
//!
//! The classifier runs an ordered cascade of small rules, most specific
//! first, and returns the first match:
//!
//! ```text
//! identity → timeline gate → direct → step → blood → late spouse's family → in-law → Unrelated
//! ```
//!
//! Every rule is a pure function of `(classifier, person, root)` returning
//! `Option<Relation>`, so each can be exercised in isolation.

mod affinity;
mod blood;
mod direct;
mod step;

use crate::config::EngineConfig;
use crate::gender::GenderResolver;
use crate::graph::FamilyGraph;
use crate::timeline::TimelineValidator;
use kinship_domain::{PersonId, Relation};
use tracing::debug;

/// A single classification rule
type Rule = fn(&Classifier<'_>, &PersonId, &PersonId) -> Option<Relation>;

/// The full cascade after the identity check and timeline gate
const CASCADE: &[(&str, Rule)] = &[
    ("parent", direct::parent),
    ("child", direct::child),
    ("spouse", direct::spouse),
    ("sibling", direct::sibling),
    ("late_spouse", direct::late_spouse),
    ("ex_spouse", direct::ex_spouse),
    ("step_ancestor", step::step_ancestor),
    ("step_descendant", step::step_descendant),
    ("step_sibling", step::step_sibling),
    ("lineal", blood::lineal),
    ("half_sibling", blood::half_sibling),
    ("parent_sibling", blood::parent_sibling),
    ("sibling_child", blood::sibling_child),
    ("step_parent_sibling", blood::step_parent_sibling),
    ("step_sibling_child", blood::step_sibling_child),
    ("collateral", blood::collateral),
    ("late_spouse_family", affinity::late_spouse_family),
    ("late_sibling_spouse", affinity::late_sibling_spouse),
    ("parent_in_law", affinity::parent_in_law),
    ("child_in_law", affinity::child_in_law),
    ("sibling_in_law", affinity::sibling_in_law),
    ("co_parent_in_law", affinity::co_parent_in_law),
];

/// Blood-only rules, used when vetting unions
const BLOOD_CASCADE: &[(&str, Rule)] = &[
    ("parent", direct::parent),
    ("child", direct::child),
    ("sibling", direct::sibling),
    ("lineal", blood::lineal),
    ("half_sibling", blood::half_sibling),
    ("parent_sibling", blood::parent_sibling),
    ("sibling_child", blood::sibling_child),
    ("collateral", blood::collateral),
];

/// Classifies the relationship of a person to a root over one graph
pub struct Classifier<'a> {
    graph: &'a FamilyGraph,
    timeline: TimelineValidator<'a>,
    genders: GenderResolver<'a>,
}

impl<'a> Classifier<'a> {
    /// Create a classifier over a built graph
    pub fn new(graph: &'a FamilyGraph, config: &EngineConfig) -> Self {
        Self {
            graph,
            timeline: TimelineValidator::new(graph, config.enforce_timeline),
            genders: GenderResolver::new(graph, config.gender_fallback),
        }
    }

    /// The relation `person` bears to `root`
    ///
    /// Total: unknown people and unmatched pairs yield `Relation::Unrelated`.
    pub fn classify(&self, person: &PersonId, root: &PersonId) -> Relation {
        if person == root {
            return Relation::Root;
        }
        if !self.graph.contains(person) || !self.graph.contains(root) {
            debug!("Unknown person in pair {} / {}", person, root);
            return Relation::Unrelated;
        }
        if !self.timeline.coexisted(person, root) && !self.graph.is_lineal(person, root) {
            debug!("Lifespans of {} and {} never overlapped", person, root);
            return Relation::Unrelated;
        }
        self.run(CASCADE, person, root)
    }

    /// The blood relation `person` bears to `root`, ignoring lifespans
    pub fn classify_blood(&self, person: &PersonId, root: &PersonId) -> Relation {
        if person == root {
            return Relation::Root;
        }
        if !self.graph.contains(person) || !self.graph.contains(root) {
            return Relation::Unrelated;
        }
        self.run(BLOOD_CASCADE, person, root)
    }

    /// Gendered label of `person` relative to `root`
    pub fn label(&self, person: &PersonId, root: &PersonId) -> String {
        let relation = self.classify(person, root);
        self.genders.label(person, &relation)
    }

    /// Spell an already-computed relation for `person`
    pub fn spell(&self, person: &PersonId, relation: &Relation) -> String {
        self.genders.label(person, relation)
    }

    fn run(&self, rules: &[(&str, Rule)], person: &PersonId, root: &PersonId) -> Relation {
        for (name, rule) in rules {
            if let Some(relation) = rule(self, person, root) {
                debug!("{} is {:?} of {} (rule {})", person, relation, root, name);
                return relation;
            }
        }
        Relation::Unrelated
    }

    pub(crate) fn graph(&self) -> &'a FamilyGraph {
        self.graph
    }

    pub(crate) fn timeline(&self) -> &TimelineValidator<'a> {
        &self.timeline
    }

    /// Whether the marriage `a`–`b` can still serve as a step link between `person` and `root`
    ///
    /// Only marriages ended by death can be severed; each dead partner is
    /// checked as a connector.
    pub(crate) fn marriage_links(
        &self,
        a: &PersonId,
        b: &PersonId,
        person: &PersonId,
        root: &PersonId,
    ) -> bool {
        let g = self.graph;
        if g.current_spouses(a).contains(b) {
            return true;
        }
        if !g.deceased_spouses(a).contains(b) {
            return false;
        }
        [(a, b), (b, a)].into_iter().all(|(dead, via)| {
            !g.is_deceased(dead) || !self.timeline.blocks_step_link(dead, via, person, root)
        })
    }

    /// Whether `a` and `b` are step-siblings: their parents are (or were) married, and they share none
    pub(crate) fn is_step_sibling(&self, a: &PersonId, b: &PersonId) -> bool {
        let g = self.graph;
        let (pa, pb) = (g.parents(a), g.parents(b));
        if a == b || pa.is_empty() || pb.is_empty() || !pa.is_disjoint(pb) {
            return false;
        }
        pa.iter().any(|p| {
            g.step_spouses(p)
                .filter(|q| pb.contains(*q))
                .any(|q| self.marriage_links(p, q, a, b))
        })
    }
}
