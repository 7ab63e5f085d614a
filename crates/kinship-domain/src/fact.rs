//! Relationship facts (pairwise edges only)

use crate::PersonId;

/// Kind of a raw relationship fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    /// Parent edge; direction depends on the input convention
    Parent,

    /// Child edge; always means source is parent of target
    Child,

    /// Marriage or partnership
    Spouse,

    /// Explicitly recorded sibling
    Sibling,
}

impl FactKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::Parent => "parent",
            FactKind::Child => "child",
            FactKind::Spouse => "spouse",
            FactKind::Sibling => "sibling",
        }
    }
}

/// Resolved status of a spouse pair
///
/// A pair appears under exactly one status in the family graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpouseStatus {
    /// Married, both living
    Current,

    /// Marriage ended by the death of one partner
    Deceased,

    /// Divorced or separated
    Ex,
}

/// A pairwise relationship fact as supplied by the caller
///
/// Facts may arrive in either direction, with or without their reverse,
/// and may be duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipFact {
    /// Source person
    pub source: PersonId,

    /// Target person
    pub target: PersonId,

    /// Kind of edge
    pub kind: FactKind,

    /// Spouse edge marked as ex
    pub is_ex: bool,

    /// Spouse edge explicitly marked as ended by death
    pub is_deceased: bool,
}

impl RelationshipFact {
    /// Create a fact with no status flags
    pub fn new(source: impl Into<PersonId>, target: impl Into<PersonId>, kind: FactKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            is_ex: false,
            is_deceased: false,
        }
    }

    /// `parent` is parent of `child` (child-kind facts are direction-independent)
    pub fn parent_of(parent: impl Into<PersonId>, child: impl Into<PersonId>) -> Self {
        Self::new(parent, child, FactKind::Child)
    }

    /// A current spouse edge
    pub fn spouse(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, FactKind::Spouse)
    }

    /// An ex-spouse edge
    pub fn ex_spouse(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self {
            is_ex: true,
            ..Self::spouse(a, b)
        }
    }

    /// A spouse edge explicitly ended by death
    pub fn late_spouse(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self {
            is_deceased: true,
            ..Self::spouse(a, b)
        }
    }

    /// An explicit sibling edge
    pub fn sibling(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, FactKind::Sibling)
    }

    /// Whether source and target are the same person
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_uses_child_kind() {
        let fact = RelationshipFact::parent_of("john", "alice");
        assert_eq!(fact.kind, FactKind::Child);
        assert_eq!(fact.source.as_str(), "john");
        assert_eq!(fact.target.as_str(), "alice");
    }

    #[test]
    fn test_spouse_flags() {
        assert!(RelationshipFact::ex_spouse("a", "b").is_ex);
        assert!(RelationshipFact::late_spouse("a", "b").is_deceased);
        let current = RelationshipFact::spouse("a", "b");
        assert!(!current.is_ex && !current.is_deceased);
    }

    #[test]
    fn test_self_loop() {
        assert!(RelationshipFact::sibling("a", "a").is_self_loop());
        assert!(!RelationshipFact::sibling("a", "b").is_self_loop());
    }
}
