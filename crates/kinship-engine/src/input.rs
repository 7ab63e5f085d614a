//! Snapshot ingestion
//!
//! Accepts people and relationship records as JSON, tolerating the field
//! aliases used by different callers, and produces domain values. Bad
//! individual records are skipped with a warning; only malformed JSON fails.

use crate::KinshipError;
use chrono::{DateTime, NaiveDate};
use kinship_domain::{FactKind, Gender, Person, PersonId, RelationshipFact};
use serde::Deserialize;
use tracing::{debug, warn};

/// People and facts supplied for one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Everyone in the tree
    pub people: Vec<Person>,

    /// Pairwise facts between them
    pub facts: Vec<RelationshipFact>,
}

impl Snapshot {
    /// Create a snapshot from already-materialised values
    pub fn new(people: Vec<Person>, facts: Vec<RelationshipFact>) -> Self {
        Self { people, facts }
    }

    /// Parse a snapshot from `{"people": [...], "relationships": [...]}`
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_engine::Snapshot;
    ///
    /// let json = r#"{
    ///     "people": [{"id": 1, "gender": "male"}, {"id": 2, "gender": "female"}],
    ///     "relationships": [{"from": 1, "to": 2, "relationship_type": "child"}]
    /// }"#;
    /// let snapshot = Snapshot::from_json(json).unwrap();
    /// assert_eq!(snapshot.people.len(), 2);
    /// assert_eq!(snapshot.facts.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, KinshipError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;

        let people: Vec<Person> = raw
            .people
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| match serde_json::from_value::<RawPerson>(value) {
                Ok(person) => Some(person.into_person()),
                Err(e) => {
                    warn!("Skipping person record {}: {}", idx, e);
                    None
                }
            })
            .collect();

        let facts: Vec<RelationshipFact> = raw
            .relationships
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| {
                let fact = match serde_json::from_value::<RawFact>(value) {
                    Ok(fact) => fact,
                    Err(e) => {
                        warn!("Skipping relationship record {}: {}", idx, e);
                        return None;
                    }
                };
                let kind = fact.kind.clone();
                let parsed = fact.into_fact();
                if parsed.is_none() {
                    warn!("Skipping relationship record {}: unknown type '{}'", idx, kind);
                }
                parsed
            })
            .collect();

        debug!(
            "Loaded snapshot with {} people and {} facts",
            people.len(),
            facts.len()
        );
        Ok(Self { people, facts })
    }
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    people: Vec<serde_json::Value>,

    #[serde(default, alias = "facts")]
    relationships: Vec<serde_json::Value>,
}

/// Identifiers arrive as strings or numbers depending on the caller
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl RawId {
    fn into_id(self) -> PersonId {
        match self {
            RawId::Text(s) => PersonId::new(s),
            RawId::Integer(n) => PersonId::new(n.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    id: RawId,

    #[serde(default)]
    gender: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default, alias = "birth_date", alias = "dob")]
    date_of_birth: Option<String>,

    #[serde(default, alias = "death_date", alias = "dod")]
    date_of_death: Option<String>,
}

impl RawPerson {
    fn into_person(self) -> Person {
        let id = self.id.into_id();
        let date_of_birth = self
            .date_of_birth
            .as_deref()
            .and_then(|s| parse_date_logged(&id, "date_of_birth", s));
        let date_of_death = self
            .date_of_death
            .as_deref()
            .and_then(|s| parse_date_logged(&id, "date_of_death", s));

        Person {
            gender: self.gender.as_deref().map(Gender::parse).unwrap_or_default(),
            name: self.name,
            date_of_birth,
            date_of_death,
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFact {
    #[serde(alias = "from", alias = "person_id")]
    source: RawId,

    #[serde(alias = "to", alias = "relative_id")]
    target: RawId,

    #[serde(rename = "type", alias = "relationship_type", alias = "kind")]
    kind: String,

    #[serde(default)]
    is_ex: Option<bool>,

    #[serde(default)]
    is_deceased: Option<bool>,
}

impl RawFact {
    fn into_fact(self) -> Option<RelationshipFact> {
        let (kind, implied_ex) = parse_kind(&self.kind)?;
        Some(RelationshipFact {
            source: self.source.into_id(),
            target: self.target.into_id(),
            kind,
            is_ex: implied_ex || self.is_ex.unwrap_or(false),
            is_deceased: self.is_deceased.unwrap_or(false),
        })
    }
}

/// Map a relationship type string to a kind, plus whether it implies ex
fn parse_kind(s: &str) -> Option<(FactKind, bool)> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
        "parent" => Some((FactKind::Parent, false)),
        "child" => Some((FactKind::Child, false)),
        "spouse" | "partner" => Some((FactKind::Spouse, false)),
        "ex_spouse" | "ex_partner" => Some((FactKind::Spouse, true)),
        "sibling" => Some((FactKind::Sibling, false)),
        _ => None,
    }
}

fn parse_date_logged(id: &PersonId, field: &str, s: &str) -> Option<NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    let parsed = parse_date(s);
    if parsed.is_none() {
        warn!("Ignoring unparseable {} '{}' for person {}", field, s, id);
    }
    parsed
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`, or a bare year
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(prefix) = s.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }
    s.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}
