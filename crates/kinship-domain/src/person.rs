//! Person module - the individuals in a family tree

use chrono::NaiveDate;
use std::fmt;

/// Stable identifier of a person, compared as a string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create an identifier from anything string-like
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PersonId;
    ///
    /// let id = PersonId::new("alice");
    /// assert_eq!(id.as_str(), "alice");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Recorded gender of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Anything else, including absent
    #[default]
    Unknown,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }

    /// Parse a gender case-insensitively; unrecognised values are `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

/// A person in the family tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Recorded gender
    pub gender: Gender,

    /// Display name, if known
    pub name: Option<String>,

    /// Date of birth, if known
    pub date_of_birth: Option<NaiveDate>,

    /// Date of death; presence implies the person is deceased
    pub date_of_death: Option<NaiveDate>,
}

impl Person {
    /// Create a living person with no recorded dates
    pub fn new(id: impl Into<PersonId>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            gender,
            name: None,
            date_of_birth: None,
            date_of_death: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the date of birth
    pub fn born(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Set the date of death
    pub fn died(mut self, date: NaiveDate) -> Self {
        self.date_of_death = Some(date);
        self
    }

    /// Whether a death date is recorded
    pub fn is_deceased(&self) -> bool {
        self.date_of_death.is_some()
    }

    /// Name for display, falling back to the identifier
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse("FEMALE"), Gender::Female);
        assert_eq!(Gender::parse(" female "), Gender::Female);
        assert_eq!(Gender::parse("non-binary"), Gender::Unknown);
        assert_eq!(Gender::parse(""), Gender::Unknown);
    }

    #[test]
    fn test_gender_parse_rejects_abbreviations() {
        assert_eq!(Gender::parse("m"), Gender::Unknown);
        assert_eq!(Gender::parse("F"), Gender::Unknown);
        assert_eq!(Gender::parse("males"), Gender::Unknown);
    }

    #[test]
    fn test_person_builder() {
        let birth = NaiveDate::from_ymd_opt(1950, 3, 1).unwrap();
        let death = NaiveDate::from_ymd_opt(2020, 7, 9).unwrap();
        let person = Person::new("richard", Gender::Male)
            .with_name("Richard")
            .born(birth)
            .died(death);

        assert!(person.is_deceased());
        assert_eq!(person.display_name(), "Richard");
        assert_eq!(person.date_of_birth, Some(birth));
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let person = Person::new("p-17", Gender::Unknown);
        assert_eq!(person.display_name(), "p-17");
        assert!(!person.is_deceased());
    }
}
