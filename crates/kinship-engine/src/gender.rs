//! Gender resolution of relation labels

use crate::config::GenderFallback;
use crate::graph::FamilyGraph;
use kinship_domain::{Gender, PersonId, Relation};

/// Picks the gendered spelling of a label for the person being described
pub struct GenderResolver<'a> {
    graph: &'a FamilyGraph,
    fallback: GenderFallback,
}

impl<'a> GenderResolver<'a> {
    /// Create a resolver over a graph
    pub fn new(graph: &'a FamilyGraph, fallback: GenderFallback) -> Self {
        Self { graph, fallback }
    }

    /// Female or male label on a match, else `neutral`, else the male label
    pub fn resolve(&self, id: &PersonId, male: &str, female: &str, neutral: Option<&str>) -> String {
        match self.graph.gender(id) {
            Gender::Male => male.to_string(),
            Gender::Female => female.to_string(),
            Gender::Unknown => neutral.unwrap_or(male).to_string(),
        }
    }

    /// Spell a relation for the given person
    pub fn label(&self, id: &PersonId, relation: &Relation) -> String {
        let terms = relation.terms();
        let neutral = match self.fallback {
            GenderFallback::Neutral => Some(terms.neutral.as_str()),
            GenderFallback::Male => None,
        };
        self.resolve(id, &terms.male, &terms.female, neutral)
    }
}
