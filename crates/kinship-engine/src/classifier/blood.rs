//! Blood relationships: shared ancestry beyond a single edge

use super::Classifier;
use crate::graph::FamilyGraph;
use kinship_domain::{PersonId, Relation};
use std::collections::BTreeMap;

/// Grandparents and grandchildren at any depth
pub(super) fn lineal(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    let g = c.graph();
    if let Some(generations) = g.ancestor_depth(person, root).filter(|d| *d >= 2) {
        return Some(Relation::Ancestor { generations });
    }
    g.ancestor_depth(root, person)
        .filter(|d| *d >= 2)
        .map(|generations| Relation::Descendant { generations })
}

pub(super) fn half_sibling(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    c.graph().is_half_sibling(person, root).then_some(Relation::HalfSibling)
}

/// Aunt or uncle: a full sibling of one of the root's parents
pub(super) fn parent_sibling(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    g.parents(root)
        .iter()
        .any(|p| g.is_full_sibling(person, p))
        .then_some(Relation::ParentSibling { generations: 1, half: false })
}

/// Niece or nephew: a child of one of the root's full siblings
pub(super) fn sibling_child(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    g.parents(person)
        .iter()
        .any(|p| g.is_full_sibling(root, p))
        .then_some(Relation::SiblingChild { generations: 1, half: false })
}

pub(super) fn step_parent_sibling(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    c.graph()
        .parents(root)
        .iter()
        .any(|p| c.is_step_sibling(person, p))
        .then_some(Relation::StepParentSibling)
}

pub(super) fn step_sibling_child(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    c.graph()
        .parents(person)
        .iter()
        .any(|p| c.is_step_sibling(root, p))
        .then_some(Relation::StepSiblingChild)
}

/// Cousins, great-aunts/uncles, great-nieces/nephews and half variants
///
/// Finds the nearest common ancestor by generations from each side. An
/// explicit sibling link between two ancestors counts as a common ancestor
/// one generation above them.
pub(super) fn collateral(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    if g.is_lineal(person, root) {
        return None;
    }
    let (up, down) = nearest_common_generations(g, person, root)?;

    match (up, down) {
        (1, 1) => None,
        (1, d) => {
            let generations = d - 1;
            let half = !lineage(g, root)
                .iter()
                .any(|(y, depth)| *depth == generations && g.is_full_sibling(person, y));
            Some(Relation::ParentSibling { generations, half })
        }
        (u, 1) => {
            let generations = u - 1;
            let half = !lineage(g, person)
                .iter()
                .any(|(x, depth)| *depth == generations && g.is_full_sibling(root, x));
            Some(Relation::SiblingChild { generations, half })
        }
        (u, d) => Some(Relation::Cousin {
            degree: u.min(d) - 1,
            removed: u.abs_diff(d),
        }),
    }
}

/// Generations from each side up to their nearest shared ancestor
///
/// Lineal pairs (one side at distance zero) are excluded. Ties on total
/// distance prefer the most balanced pair.
fn nearest_common_generations(
    g: &FamilyGraph,
    person: &PersonId,
    root: &PersonId,
) -> Option<(u32, u32)> {
    let a = lineage(g, person);
    let b = lineage(g, root);
    let mut best: Option<(u32, u32)> = None;
    let mut consider = |up: u32, down: u32| {
        if up == 0 || down == 0 {
            return;
        }
        let key = |(u, d): (u32, u32)| (u + d, u.max(d));
        if best.map_or(true, |current| key((up, down)) < key(current)) {
            best = Some((up, down));
        }
    };

    for (z, up) in &a {
        if let Some(down) = b.get(z) {
            consider(*up, *down);
        }
    }
    for (x, up) in &a {
        for y in g.full_siblings(x) {
            if let Some(down) = b.get(y) {
                consider(up + 1, down + 1);
            }
        }
    }
    best
}

/// Ancestors plus the person at generation zero
fn lineage(g: &FamilyGraph, id: &PersonId) -> BTreeMap<PersonId, u32> {
    let mut line = g.ancestors(id);
    line.insert(id.clone(), 0);
    line
}
