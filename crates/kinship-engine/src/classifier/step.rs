//! Step relationships: created by a parent's marriage to a non-parent

use super::Classifier;
use kinship_domain::{PersonId, Relation};
use std::collections::BTreeSet;

/// Deepest step line labelled (step-great-grandparent)
const MAX_STEP_GENERATIONS: u32 = 3;

pub(super) fn step_ancestor(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    step_depth(c, person, root).map(|generations| Relation::StepAncestor { generations })
}

pub(super) fn step_descendant(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    step_depth(c, root, person).map(|generations| Relation::StepDescendant { generations })
}

pub(super) fn step_sibling(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    c.is_step_sibling(person, root).then_some(Relation::StepSibling)
}

/// Generations from `descendant` up to `ancestor` along a line with exactly one step link
///
/// A step link is the spouse (current or late) of a parent who is not
/// itself a parent. Climbing may pass a step link at any level, so both a
/// grandparent's spouse and a step-parent's parent are step-grandparents.
/// Blood lineage takes precedence and yields `None`.
fn step_depth(c: &Classifier<'_>, ancestor: &PersonId, descendant: &PersonId) -> Option<u32> {
    let g = c.graph();
    if g.is_lineal(ancestor, descendant) {
        return None;
    }

    let mut frontier: BTreeSet<(PersonId, bool)> = BTreeSet::from([(descendant.clone(), false)]);
    for depth in 1..=MAX_STEP_GENERATIONS {
        let mut next = BTreeSet::new();
        for (current, stepped) in &frontier {
            let parents = g.parents(current);
            for parent in parents {
                if *stepped && parent == ancestor {
                    return Some(depth);
                }
                next.insert((parent.clone(), *stepped));
                if *stepped {
                    continue;
                }
                for spouse in g.step_spouses(parent) {
                    if spouse == current || parents.contains(spouse) {
                        continue;
                    }
                    if !c.marriage_links(parent, spouse, ancestor, descendant) {
                        continue;
                    }
                    if spouse == ancestor {
                        return Some(depth);
                    }
                    next.insert((spouse.clone(), true));
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    None
}
