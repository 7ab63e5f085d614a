//! Blood-relationship detection for vetting unions

use kinship_domain::Relation;

/// Outcome of a blood-relationship check between two people
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodRelationship {
    /// Whether the two share ancestry (or an unrefuted sibling link)
    pub is_blood: bool,

    /// Gendered blood label of the first person relative to the second, or "Unrelated"
    pub label: String,

    /// Civil degree of consanguinity: generations up to the common ancestor from both sides
    pub degree: Option<u32>,

    /// The underlying relation
    pub relation: Relation,
}

impl BloodRelationship {
    /// Build a result from a blood-only classification
    pub fn from_relation(relation: Relation, label: String) -> Self {
        let degree = degree(&relation);
        Self {
            is_blood: degree.is_some(),
            label,
            degree,
            relation,
        }
    }
}

/// Civil degree for a blood relation, `None` for anything else
///
/// A parent is one degree away, a sibling two, an aunt three, a first cousin four.
pub fn degree(relation: &Relation) -> Option<u32> {
    match *relation {
        Relation::Parent | Relation::Child => Some(1),
        Relation::Sibling | Relation::HalfSibling => Some(2),
        Relation::Ancestor { generations } | Relation::Descendant { generations } => {
            Some(generations)
        }
        Relation::ParentSibling { generations, .. } | Relation::SiblingChild { generations, .. } => {
            Some(generations + 2)
        }
        Relation::Cousin { degree, removed } => Some(2 * degree + 2 + removed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(degree(&Relation::Parent), Some(1));
        assert_eq!(degree(&Relation::HalfSibling), Some(2));
        assert_eq!(degree(&Relation::Ancestor { generations: 3 }), Some(3));
        assert_eq!(
            degree(&Relation::ParentSibling { generations: 1, half: false }),
            Some(3)
        );
        assert_eq!(degree(&Relation::Cousin { degree: 1, removed: 0 }), Some(4));
        assert_eq!(degree(&Relation::Cousin { degree: 2, removed: 1 }), Some(7));
    }

    #[test]
    fn test_non_blood_has_no_degree() {
        assert_eq!(degree(&Relation::StepSibling), None);
        assert_eq!(degree(&Relation::Spouse), None);
        assert_eq!(degree(&Relation::Root), None);

        let result = BloodRelationship::from_relation(Relation::Unrelated, "Unrelated".into());
        assert!(!result.is_blood);
        assert_eq!(result.degree, None);
    }
}
