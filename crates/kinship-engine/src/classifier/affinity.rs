//! Affinity: a late spouse's family and in-laws through current marriages
//!
//! Ex-spouses confer nothing here. A late spouse's parents are
//! left unrelated to the widow(er); siblings and other children keep a
//! "Late Spouse's ..." label.

use super::Classifier;
use crate::graph::FamilyGraph;
use kinship_domain::{PersonId, Relation};

/// Late spouses of `id` who are the deceased partner of the pair
///
/// When `id` is the one who died, the surviving partner is not their "late" spouse.
fn late_partners<'a>(c: &'a Classifier<'_>, id: &'a PersonId) -> impl Iterator<Item = &'a PersonId> {
    let g: &'a FamilyGraph = c.graph();
    g.deceased_spouses(id)
        .iter()
        .filter(move |s| g.is_deceased(s) || !g.is_deceased(id))
}

pub(super) fn late_spouse_family(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    for spouse in late_partners(c, root) {
        if g.parents(spouse).contains(person) {
            continue;
        }
        let gender = g.gender(spouse);
        let sibling = g.is_full_sibling(person, spouse) || g.is_half_sibling(person, spouse);
        if sibling && !c.timeline().blocks_step_link(spouse, root, person, root) {
            return Some(Relation::LateSpouseSibling { spouse: gender });
        }
        // Children stay the late spouse's even where the step link is severed
        if g.children(spouse).contains(person) && !g.children(root).contains(person) {
            return Some(Relation::LateSpouseChild { spouse: gender });
        }
    }
    None
}

/// The widow(er) of one of the root's siblings
pub(super) fn late_sibling_spouse(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    late_partners(c, person)
        .filter(|sibling| g.any_siblings(sibling).contains(root))
        .find(|sibling| !c.timeline().blocks_step_link(sibling, person, person, root))
        .map(|sibling| Relation::LateSiblingSpouse {
            sibling: g.gender(sibling),
        })
}

pub(super) fn parent_in_law(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    g.current_spouses(root)
        .iter()
        .any(|s| g.parents(s).contains(person))
        .then_some(Relation::ParentInLaw)
}

pub(super) fn child_in_law(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    g.children(root)
        .iter()
        .any(|child| g.current_spouses(child).contains(person))
        .then_some(Relation::ChildInLaw)
}

/// A spouse's sibling, or a sibling's spouse
pub(super) fn sibling_in_law(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    let spouse_sibling = g
        .current_spouses(root)
        .iter()
        .any(|s| g.any_siblings(s).contains(person));
    let sibling_spouse = g
        .any_siblings(root)
        .iter()
        .any(|s| g.current_spouses(s).contains(person));
    (spouse_sibling || sibling_spouse).then_some(Relation::SiblingInLaw)
}

/// Parents of two people married to each other
pub(super) fn co_parent_in_law(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    let root_children = g.children(root);
    g.children(person)
        .iter()
        .any(|child| {
            g.current_spouses(child)
                .iter()
                .any(|spouse| root_children.contains(spouse))
        })
        .then_some(Relation::CoParentInLaw)
}
