//! Family graph construction
//!
//! The graph is an immutable value built from one snapshot. Facts that name
//! unknown people are dropped; the sibling index is augmented with inferred
//! biological siblings (identical, non-empty parent sets).

use crate::config::EngineConfig;
use crate::normalizer::normalize;
use kinship_domain::{Gender, Person, PersonId, RelationshipFact, SpouseStatus};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::{debug, warn};

type Index = BTreeMap<PersonId, BTreeSet<PersonId>>;

static EMPTY: BTreeSet<PersonId> = BTreeSet::new();

/// Indexed, read-only view of a family tree
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    people: BTreeMap<PersonId, Person>,
    order: Vec<PersonId>,
    child_to_parents: Index,
    parent_to_children: Index,
    current_spouses: Index,
    deceased_spouses: Index,
    ex_spouses: Index,
    siblings: Index,
    max_generations: usize,
}

impl FamilyGraph {
    /// Build a graph from people and raw facts
    ///
    /// Never fails: duplicate people keep their first record and facts
    /// referencing unknown identifiers are ignored.
    pub fn build(people: &[Person], facts: &[RelationshipFact], config: &EngineConfig) -> Self {
        let mut by_id = BTreeMap::new();
        let mut order = Vec::with_capacity(people.len());
        for person in people {
            if by_id.contains_key(&person.id) {
                warn!("Duplicate person record {}, keeping the first", person.id);
                continue;
            }
            order.push(person.id.clone());
            by_id.insert(person.id.clone(), person.clone());
        }

        let normalized = normalize(facts, &by_id, config);
        let known = |a: &PersonId, b: &PersonId| {
            let ok = by_id.contains_key(a) && by_id.contains_key(b);
            if !ok {
                debug!("Dropping fact between {} and {}: unknown person", a, b);
            }
            ok
        };

        let mut graph = Self {
            people: BTreeMap::new(),
            order,
            child_to_parents: Index::new(),
            parent_to_children: Index::new(),
            current_spouses: Index::new(),
            deceased_spouses: Index::new(),
            ex_spouses: Index::new(),
            siblings: Index::new(),
            max_generations: config.max_generations,
        };

        for (parent, child) in &normalized.parent_edges {
            if known(parent, child) {
                link(&mut graph.child_to_parents, child, parent);
                link(&mut graph.parent_to_children, parent, child);
            }
        }

        for edge in &normalized.spouse_edges {
            if !known(&edge.a, &edge.b) {
                continue;
            }
            let index = match edge.status {
                SpouseStatus::Current => &mut graph.current_spouses,
                SpouseStatus::Deceased => &mut graph.deceased_spouses,
                SpouseStatus::Ex => &mut graph.ex_spouses,
            };
            link(index, &edge.a, &edge.b);
            link(index, &edge.b, &edge.a);
        }

        for (a, b) in &normalized.sibling_edges {
            if known(a, b) {
                link(&mut graph.siblings, a, b);
                link(&mut graph.siblings, b, a);
            }
        }

        let inferred = graph.augment_siblings();
        graph.people = by_id;

        debug!(
            "Built family graph: {} people, {} with parents, {} current / {} late / {} ex spouse pairs, {} inferred sibling links",
            graph.order.len(),
            graph.child_to_parents.len(),
            pair_count(&graph.current_spouses),
            pair_count(&graph.deceased_spouses),
            pair_count(&graph.ex_spouses),
            inferred
        );
        graph
    }

    /// Add sibling links between everyone sharing an identical, non-empty parent set
    fn augment_siblings(&mut self) -> usize {
        let pairs: Vec<(PersonId, PersonId)> = {
            let mut groups: BTreeMap<&BTreeSet<PersonId>, Vec<&PersonId>> = BTreeMap::new();
            for (child, parents) in &self.child_to_parents {
                if !parents.is_empty() {
                    groups.entry(parents).or_default().push(child);
                }
            }

            let mut pairs = Vec::new();
            for members in groups.values() {
                for (i, a) in members.iter().enumerate() {
                    for b in &members[i + 1..] {
                        pairs.push(((*a).clone(), (*b).clone()));
                    }
                }
            }
            pairs
        };

        let mut added = 0;
        for (a, b) in pairs {
            if self.siblings.get(&a).is_some_and(|s| s.contains(&b)) {
                continue;
            }
            link(&mut self.siblings, &a, &b);
            link(&mut self.siblings, &b, &a);
            added += 1;
        }
        added
    }

    /// Look up a person
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Whether the person is known
    pub fn contains(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Everyone, in the order supplied
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.order.iter().filter_map(|id| self.people.get(id))
    }

    /// Number of distinct people
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no people
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Recorded gender, `Unknown` for unknown people
    pub fn gender(&self, id: &PersonId) -> Gender {
        self.person(id).map(|p| p.gender).unwrap_or_default()
    }

    /// Whether the person has a recorded death date
    pub fn is_deceased(&self, id: &PersonId) -> bool {
        self.person(id).is_some_and(Person::is_deceased)
    }

    /// Walk bound used by ancestor and descendant searches
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Recorded parents
    pub fn parents(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.child_to_parents.get(id).unwrap_or(&EMPTY)
    }

    /// Recorded children
    pub fn children(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.parent_to_children.get(id).unwrap_or(&EMPTY)
    }

    /// Current spouses
    pub fn current_spouses(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.current_spouses.get(id).unwrap_or(&EMPTY)
    }

    /// Spouses whose marriage ended by death
    pub fn deceased_spouses(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.deceased_spouses.get(id).unwrap_or(&EMPTY)
    }

    /// Former spouses
    pub fn ex_spouses(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.ex_spouses.get(id).unwrap_or(&EMPTY)
    }

    /// Current and late spouses: the marriages that create step links
    pub fn step_spouses<'a>(&'a self, id: &PersonId) -> impl Iterator<Item = &'a PersonId> {
        self.current_spouses(id).iter().chain(self.deceased_spouses(id).iter())
    }

    /// Status of the marriage between two people, if any
    pub fn spouse_status(&self, a: &PersonId, b: &PersonId) -> Option<SpouseStatus> {
        if self.current_spouses(a).contains(b) {
            Some(SpouseStatus::Current)
        } else if self.deceased_spouses(a).contains(b) {
            Some(SpouseStatus::Deceased)
        } else if self.ex_spouses(a).contains(b) {
            Some(SpouseStatus::Ex)
        } else {
            None
        }
    }

    /// Sibling index: explicit plus inferred links, unvalidated
    pub fn siblings(&self, id: &PersonId) -> &BTreeSet<PersonId> {
        self.siblings.get(id).unwrap_or(&EMPTY)
    }

    /// Parents recorded for both people
    pub fn shared_parents(&self, a: &PersonId, b: &PersonId) -> BTreeSet<PersonId> {
        self.parents(a).intersection(self.parents(b)).cloned().collect()
    }

    /// A sibling link backed by parent data
    ///
    /// Parent facts are authoritative: when both people have recorded
    /// parents, the sets must be identical. An explicit link where either
    /// side has no recorded parents has nothing contradicting it.
    pub fn is_full_sibling(&self, a: &PersonId, b: &PersonId) -> bool {
        if a == b || !self.siblings(a).contains(b) {
            return false;
        }
        let (pa, pb) = (self.parents(a), self.parents(b));
        pa.is_empty() || pb.is_empty() || pa == pb
    }

    /// Validated full siblings
    pub fn full_siblings<'a>(&'a self, id: &'a PersonId) -> impl Iterator<Item = &'a PersonId> {
        self.siblings(id).iter().filter(move |s| self.is_full_sibling(id, s))
    }

    /// Share at least one recorded parent but not all
    pub fn is_half_sibling(&self, a: &PersonId, b: &PersonId) -> bool {
        if a == b {
            return false;
        }
        let (pa, pb) = (self.parents(a), self.parents(b));
        pa != pb && !pa.is_disjoint(pb)
    }

    /// Everyone sharing some but not all parents
    pub fn half_siblings(&self, id: &PersonId) -> BTreeSet<PersonId> {
        self.parents(id)
            .iter()
            .flat_map(|p| self.children(p).iter())
            .filter(|c| self.is_half_sibling(id, c))
            .cloned()
            .collect()
    }

    /// Full or half siblings
    pub fn any_siblings(&self, id: &PersonId) -> BTreeSet<PersonId> {
        let mut all = self.half_siblings(id);
        all.extend(self.full_siblings(id).cloned());
        all
    }

    /// Blood ancestors with their nearest generation distance (parents = 1)
    pub fn ancestors(&self, id: &PersonId) -> BTreeMap<PersonId, u32> {
        self.walk(id, |p| self.parents(p))
    }

    /// Blood descendants with their nearest generation distance (children = 1)
    pub fn descendants(&self, id: &PersonId) -> BTreeMap<PersonId, u32> {
        self.walk(id, |p| self.children(p))
    }

    /// Generations from `descendant` up to `ancestor`, if lineal
    pub fn ancestor_depth(&self, ancestor: &PersonId, descendant: &PersonId) -> Option<u32> {
        self.ancestors(descendant).get(ancestor).copied()
    }

    /// Whether either person is a lineal ancestor of the other
    pub fn is_lineal(&self, a: &PersonId, b: &PersonId) -> bool {
        self.ancestor_depth(a, b).is_some() || self.ancestor_depth(b, a).is_some()
    }

    /// Breadth-first walk with a visited set, bounded by `max_generations`
    fn walk<'a, F>(&'a self, start: &PersonId, next: F) -> BTreeMap<PersonId, u32>
    where
        F: Fn(&PersonId) -> &'a BTreeSet<PersonId>,
    {
        let mut found = BTreeMap::new();
        let mut visited = BTreeSet::from([start.clone()]);
        let mut queue = VecDeque::from([(start.clone(), 0u32)]);

        while let Some((current, depth)) = queue.pop_front() {
            if depth as usize >= self.max_generations {
                continue;
            }
            for relative in next(&current) {
                if visited.insert(relative.clone()) {
                    found.insert(relative.clone(), depth + 1);
                    queue.push_back((relative.clone(), depth + 1));
                }
            }
        }
        found
    }
}

fn link(index: &mut Index, from: &PersonId, to: &PersonId) {
    index.entry(from.clone()).or_default().insert(to.clone());
}

fn pair_count(index: &Index) -> usize {
    index.values().map(BTreeSet::len).sum::<usize>() / 2
}
