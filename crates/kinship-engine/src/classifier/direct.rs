//! Direct relationships: one recorded edge between the two people

use super::Classifier;
use kinship_domain::{PersonId, Relation};

pub(super) fn parent(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    c.graph().parents(root).contains(person).then_some(Relation::Parent)
}

pub(super) fn child(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    c.graph().children(root).contains(person).then_some(Relation::Child)
}

pub(super) fn spouse(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    c.graph().current_spouses(root).contains(person).then_some(Relation::Spouse)
}

/// Sibling edge that parent data does not contradict
pub(super) fn sibling(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    c.graph().is_full_sibling(person, root).then_some(Relation::Sibling)
}

pub(super) fn late_spouse(
    c: &Classifier<'_>,
    person: &PersonId,
    root: &PersonId,
) -> Option<Relation> {
    let g = c.graph();
    g.deceased_spouses(root).contains(person).then(|| Relation::LateSpouse {
        qualified: !g.is_deceased(root),
    })
}

pub(super) fn ex_spouse(c: &Classifier<'_>, person: &PersonId, root: &PersonId) -> Option<Relation> {
    c.graph().ex_spouses(root).contains(person).then_some(Relation::ExSpouse)
}
