//! Timeline validation
//!
//! Decides whether two lifespans overlapped and whether a step link that
//! routes through a deceased connector still holds. Missing dates always
//! count as "possible".

use crate::graph::FamilyGraph;
use chrono::NaiveDate;
use kinship_domain::{Person, PersonId};
use tracing::debug;

/// Lifespan checks over one family graph
pub struct TimelineValidator<'a> {
    graph: &'a FamilyGraph,
    enforce: bool,
}

impl<'a> TimelineValidator<'a> {
    /// Create a validator; when `enforce` is false every check passes
    pub fn new(graph: &'a FamilyGraph, enforce: bool) -> Self {
        Self { graph, enforce }
    }

    /// Whether the two lifespans can have overlapped
    ///
    /// False only when one person was born strictly after the other died,
    /// with both dates known. Unknown people are treated as undated.
    pub fn coexisted(&self, a: &PersonId, b: &PersonId) -> bool {
        if !self.enforce {
            return true;
        }
        match (self.graph.person(a), self.graph.person(b)) {
            (Some(pa), Some(pb)) => lifespans_overlap(pa, pb),
            _ => true,
        }
    }

    /// Whether a person was alive (or not yet known to be dead) on a date
    pub fn alive_at(&self, id: &PersonId, date: NaiveDate) -> bool {
        match self.graph.person(id).and_then(|p| p.date_of_death) {
            Some(death) => death >= date,
            None => true,
        }
    }

    /// Birth date of whichever of the two was born later, if both are known
    ///
    /// When only one birth date is known it is used as the later one.
    pub fn later_birth(&self, a: &PersonId, b: &PersonId) -> Option<NaiveDate> {
        let birth = |id: &PersonId| self.graph.person(id).and_then(|p| p.date_of_birth);
        match (birth(a), birth(b)) {
            (Some(x), Some(y)) => Some(x.max(y)),
            (x, y) => x.or(y),
        }
    }

    /// Whether a step link through `deceased` (married to `via`) is severed
    ///
    /// The link is blocked when the deceased connector died strictly before
    /// the later-born of `person` and `root`, and no other connecting parent
    /// alive at that birth links the two.
    pub fn blocks_step_link(
        &self,
        deceased: &PersonId,
        via: &PersonId,
        person: &PersonId,
        root: &PersonId,
    ) -> bool {
        if !self.enforce {
            return false;
        }
        let Some(death) = self.graph.person(deceased).and_then(|p| p.date_of_death) else {
            return false;
        };
        let Some(birth) = self.later_birth(person, root) else {
            return false;
        };
        if death >= birth {
            return false;
        }

        let alternative = self
            .connecting_parents(person, root)
            .into_iter()
            .find(|c| c != deceased && self.alive_at(c, birth));
        match alternative {
            Some(c) => {
                debug!(
                    "Link {}-{} through late {} (via {}) kept by living connector {}",
                    person, root, deceased, via, c
                );
                false
            }
            None => {
                debug!(
                    "Link {}-{} through late {} (via {}) severed: died {} before birth {}",
                    person, root, deceased, via, death, birth
                );
                true
            }
        }
    }

    /// Parents that connect the two people directly
    ///
    /// A parent of both, or a parent of one side who is a child of the other.
    fn connecting_parents(&self, person: &PersonId, root: &PersonId) -> Vec<PersonId> {
        let g = self.graph;
        let mut found: Vec<PersonId> = g.shared_parents(person, root).into_iter().collect();
        found.extend(g.parents(root).intersection(g.children(person)).cloned());
        found.extend(g.parents(person).intersection(g.children(root)).cloned());
        found
    }
}

/// Whether two dated lifespans overlap (missing dates overlap)
pub fn lifespans_overlap(a: &Person, b: &Person) -> bool {
    let born_after_death = |x: &Person, y: &Person| match (x.date_of_birth, y.date_of_death) {
        (Some(birth), Some(death)) => birth > death,
        _ => false,
    };
    !born_after_death(a, b) && !born_after_death(b, a)
}
