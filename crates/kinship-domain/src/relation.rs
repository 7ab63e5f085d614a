//! Relation module - gender-neutral kinship concepts and their spellings

use crate::ordinal::{greats, lineal, ordinal, removal};
use crate::Gender;

/// Broad family a relation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationFamily {
    /// The root itself
    Identity,
    /// Shared ancestry
    Blood,
    /// Marriage of the two people themselves
    Marriage,
    /// Created by a parent's marriage
    Step,
    /// Created by a marriage one step away (in-laws, late spouse's family)
    Affinity,
    /// No relationship
    None,
}

impl RelationFamily {
    /// Lowercase name of the family
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationFamily::Identity => "identity",
            RelationFamily::Blood => "blood",
            RelationFamily::Marriage => "marriage",
            RelationFamily::Step => "step",
            RelationFamily::Affinity => "affinity",
            RelationFamily::None => "none",
        }
    }
}

/// The kinship a person bears to a root, before gendering
///
/// `generations` counts steps between the two people along the lineal line,
/// so a grandparent is 2 generations up and a great-aunt is the sibling of
/// an ancestor 2 generations up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Person and root are the same
    Root,
    /// Parent of the root
    Parent,
    /// Child of the root
    Child,
    /// Current spouse
    Spouse,
    /// Full sibling (or an explicit sibling not contradicted by parent data)
    Sibling,
    /// Spouse whose marriage ended by death
    LateSpouse {
        /// Whether the "Late" qualifier applies (dropped when the root is deceased)
        qualified: bool,
    },
    /// Former spouse
    ExSpouse,
    /// Spouse of a parent (or further up), not a blood ancestor
    StepAncestor {
        /// 1 = step-parent, 2 = step-grandparent, 3 = step-great-grandparent
        generations: u32,
    },
    /// Inverse of `StepAncestor`
    StepDescendant {
        /// 1 = step-child, 2 = step-grandchild, 3 = step-great-grandchild
        generations: u32,
    },
    /// Child of a parent's spouse, sharing no parent
    StepSibling,
    /// Blood ancestor two or more generations up
    Ancestor {
        /// 2 = grandparent, 3 = great-grandparent, ...
        generations: u32,
    },
    /// Blood descendant two or more generations down
    Descendant {
        /// 2 = grandchild, 3 = great-grandchild, ...
        generations: u32,
    },
    /// Shares at least one parent but not all
    HalfSibling,
    /// Sibling of an ancestor (aunt, uncle, great-aunt, ...)
    ParentSibling {
        /// Generations up to the ancestor whose sibling this is
        generations: u32,
        /// Sibling shares only some parents
        half: bool,
    },
    /// Descendant of a sibling (niece, nephew, great-niece, ...)
    SiblingChild {
        /// Generations down from the sibling
        generations: u32,
        /// Sibling shares only some parents
        half: bool,
    },
    /// Step-sibling of a parent
    StepParentSibling,
    /// Child of a step-sibling
    StepSiblingChild,
    /// Cousin at a given degree, possibly removed
    Cousin {
        /// 1 = first cousin
        degree: u32,
        /// Generational difference
        removed: u32,
    },
    /// Sibling of the root's late spouse
    LateSpouseSibling {
        /// Gender of the late spouse
        spouse: Gender,
    },
    /// Child of the root's late spouse who is not the root's child
    LateSpouseChild {
        /// Gender of the late spouse
        spouse: Gender,
    },
    /// Widow(er) of the root's late sibling
    LateSiblingSpouse {
        /// Gender of the late sibling
        sibling: Gender,
    },
    /// Parent of the root's current spouse
    ParentInLaw,
    /// Current spouse of the root's child
    ChildInLaw,
    /// Sibling of the root's spouse, or spouse of the root's sibling
    SiblingInLaw,
    /// Parent of the spouse of the root's child
    CoParentInLaw,
    /// No relationship found
    Unrelated,
}

/// The three spellings of a relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terms {
    /// Label for a male person
    pub male: String,
    /// Label for a female person
    pub female: String,
    /// Label when gender is unknown or non-binary
    pub neutral: String,
}

impl Terms {
    fn new(male: impl Into<String>, female: impl Into<String>, neutral: impl Into<String>) -> Self {
        Self {
            male: male.into(),
            female: female.into(),
            neutral: neutral.into(),
        }
    }

    fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label.clone(), label)
    }

    fn prefixed(prefix: &str, male: &str, female: &str, neutral: &str) -> Self {
        Self::new(
            format!("{}{}", prefix, male),
            format!("{}{}", prefix, female),
            format!("{}{}", prefix, neutral),
        )
    }

    /// Pick the spelling for a gender, using `neutral` for anything else
    pub fn for_gender(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Unknown => &self.neutral,
        }
    }
}

fn spouse_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Husband",
        Gender::Female => "Wife",
        Gender::Unknown => "Spouse",
    }
}

fn sibling_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Brother",
        Gender::Female => "Sister",
        Gender::Unknown => "Sibling",
    }
}

impl Relation {
    /// The male / female / neutral labels for this relation
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::Relation;
    ///
    /// let terms = Relation::Cousin { degree: 2, removed: 1 }.terms();
    /// assert_eq!(terms.neutral, "2nd Cousin once removed");
    /// assert_eq!(Relation::Parent.terms().female, "Mother");
    /// ```
    pub fn terms(&self) -> Terms {
        match *self {
            Relation::Root => Terms::uniform("Root"),
            Relation::Unrelated => Terms::uniform("Unrelated"),
            Relation::Parent => Terms::new("Father", "Mother", "Parent"),
            Relation::Child => Terms::new("Son", "Daughter", "Child"),
            Relation::Spouse => Terms::new("Husband", "Wife", "Spouse"),
            Relation::Sibling => Terms::new("Brother", "Sister", "Sibling"),
            Relation::LateSpouse { qualified } => {
                let prefix = if qualified { "Late " } else { "" };
                Terms::prefixed(prefix, "Husband", "Wife", "Spouse")
            }
            Relation::ExSpouse => Terms::new("Ex-Husband", "Ex-Wife", "Ex-Spouse"),
            Relation::StepAncestor { generations } => Terms::new(
                format!("Step-{}", lineal(generations, "Father", "Grandfather")),
                format!("Step-{}", lineal(generations, "Mother", "Grandmother")),
                format!("Step-{}", lineal(generations, "Parent", "Grandparent")),
            ),
            Relation::StepDescendant { generations } => Terms::new(
                format!("Step-{}", lineal(generations, "Son", "Grandson")),
                format!("Step-{}", lineal(generations, "Daughter", "Granddaughter")),
                format!("Step-{}", lineal(generations, "Child", "Grandchild")),
            ),
            Relation::StepSibling => Terms::new("Step-Brother", "Step-Sister", "Step-Sibling"),
            Relation::Ancestor { generations } => Terms::new(
                lineal(generations, "Father", "Grandfather"),
                lineal(generations, "Mother", "Grandmother"),
                lineal(generations, "Parent", "Grandparent"),
            ),
            Relation::Descendant { generations } => Terms::new(
                lineal(generations, "Son", "Grandson"),
                lineal(generations, "Daughter", "Granddaughter"),
                lineal(generations, "Child", "Grandchild"),
            ),
            Relation::HalfSibling => Terms::new("Half-Brother", "Half-Sister", "Half-Sibling"),
            Relation::ParentSibling { generations, half } => {
                let prefix = format!(
                    "{}{}",
                    if half { "Half-" } else { "" },
                    greats(generations.saturating_sub(1))
                );
                let sibling = if half { "Half-Sibling" } else { "Sibling" };
                Terms::new(
                    format!("{}Uncle", prefix),
                    format!("{}Aunt", prefix),
                    format!("{}'s {}", lineal(generations, "Parent", "Grandparent"), sibling),
                )
            }
            Relation::SiblingChild { generations, half } => {
                let prefix = format!(
                    "{}{}",
                    if half { "Half-" } else { "" },
                    greats(generations.saturating_sub(1))
                );
                let sibling = if half { "Half-Sibling" } else { "Sibling" };
                Terms::new(
                    format!("{}Nephew", prefix),
                    format!("{}Niece", prefix),
                    format!("{}'s {}", sibling, lineal(generations, "Child", "Grandchild")),
                )
            }
            Relation::StepParentSibling => {
                Terms::new("Step-Uncle", "Step-Aunt", "Parent's Step-Sibling")
            }
            Relation::StepSiblingChild => {
                Terms::new("Step-Nephew", "Step-Niece", "Step-Sibling's Child")
            }
            Relation::Cousin { degree, removed } => {
                let base = format!("{} Cousin", ordinal(degree));
                match removal(removed) {
                    Some(phrase) => Terms::uniform(format!("{} {}", base, phrase)),
                    None => Terms::uniform(base),
                }
            }
            Relation::LateSpouseSibling { spouse } => Terms::prefixed(
                &format!("Late {}'s ", spouse_word(spouse)),
                "Brother",
                "Sister",
                "Sibling",
            ),
            Relation::LateSpouseChild { spouse } => Terms::prefixed(
                &format!("Late {}'s ", spouse_word(spouse)),
                "Son",
                "Daughter",
                "Child",
            ),
            Relation::LateSiblingSpouse { sibling } => Terms::prefixed(
                &format!("Late {}'s ", sibling_word(sibling)),
                "Husband",
                "Wife",
                "Spouse",
            ),
            Relation::ParentInLaw => {
                Terms::new("Father-in-law", "Mother-in-law", "Parent-in-law")
            }
            Relation::ChildInLaw => Terms::new("Son-in-law", "Daughter-in-law", "Child-in-law"),
            Relation::SiblingInLaw => {
                Terms::new("Brother-in-law", "Sister-in-law", "Sibling-in-law")
            }
            Relation::CoParentInLaw => {
                Terms::new("Co-Father-in-law", "Co-Mother-in-law", "Co-Parent-in-law")
            }
        }
    }

    /// Which family of kinship this relation belongs to
    pub fn family(&self) -> RelationFamily {
        match self {
            Relation::Root => RelationFamily::Identity,
            Relation::Parent
            | Relation::Child
            | Relation::Sibling
            | Relation::Ancestor { .. }
            | Relation::Descendant { .. }
            | Relation::HalfSibling
            | Relation::ParentSibling { .. }
            | Relation::SiblingChild { .. }
            | Relation::Cousin { .. } => RelationFamily::Blood,
            Relation::Spouse | Relation::LateSpouse { .. } | Relation::ExSpouse => {
                RelationFamily::Marriage
            }
            Relation::StepAncestor { .. }
            | Relation::StepDescendant { .. }
            | Relation::StepSibling
            | Relation::StepParentSibling
            | Relation::StepSiblingChild => RelationFamily::Step,
            Relation::LateSpouseSibling { .. }
            | Relation::LateSpouseChild { .. }
            | Relation::LateSiblingSpouse { .. }
            | Relation::ParentInLaw
            | Relation::ChildInLaw
            | Relation::SiblingInLaw
            | Relation::CoParentInLaw => RelationFamily::Affinity,
            Relation::Unrelated => RelationFamily::None,
        }
    }

    /// Whether this is a blood relationship
    pub fn is_blood(&self) -> bool {
        self.family() == RelationFamily::Blood
    }
}
