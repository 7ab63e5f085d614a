//! Integration tests for the kinship engine

use chrono::NaiveDate;
use kinship_domain::{FactKind, Gender, Person, PersonId, Relation, RelationshipFact};
use kinship_engine::{EngineConfig, KinshipEngine, KinshipError, Snapshot, SpousePrecedence};

fn id(s: &str) -> PersonId {
    PersonId::new(s)
}

fn date(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 6, 1).unwrap()
}

/// Helper to create the blended family used throughout
fn blended_family() -> (Vec<Person>, Vec<RelationshipFact>) {
    let people = vec![
        Person::new("john", Gender::Male),
        Person::new("jane", Gender::Female),
        Person::new("lisa", Gender::Female),
        Person::new("alice", Gender::Female),
        Person::new("charlie", Gender::Male),
        Person::new("michael", Gender::Male),
    ];
    let facts = vec![
        RelationshipFact::parent_of("john", "alice"),
        RelationshipFact::parent_of("john", "charlie"),
        RelationshipFact::late_spouse("john", "jane"),
        RelationshipFact::spouse("john", "lisa"),
        RelationshipFact::parent_of("lisa", "michael"),
    ];
    (people, facts)
}

#[test]
fn test_blended_family_labels() {
    let (people, facts) = blended_family();
    let engine = KinshipEngine::default_config();
    let label = |p: &str, r: &str| engine.classify_relationship(&id(p), &id(r), &people, &facts);

    assert_eq!(label("michael", "alice"), "Step-Brother");
    assert_eq!(label("alice", "michael"), "Step-Sister");
    assert_eq!(label("jane", "lisa"), "Unrelated");
    assert_eq!(label("jane", "john"), "Late Wife");
    assert_eq!(label("lisa", "charlie"), "Step-Mother");
    assert_eq!(label("charlie", "alice"), "Brother");
}

#[test]
fn test_classify_all_keeps_input_order() {
    let (people, facts) = blended_family();
    let engine = KinshipEngine::default_config();
    let rows = engine.classify_all(&id("alice"), &people, &facts);

    let ids: Vec<&str> = rows.iter().map(|r| r.person.as_str()).collect();
    assert_eq!(ids, vec!["john", "jane", "lisa", "alice", "charlie", "michael"]);

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Father", "Step-Mother", "Step-Mother", "Root", "Brother", "Step-Brother"]
    );
    assert_eq!(rows[0].relation, Relation::Parent);
}

#[test]
fn test_severed_step_grandparent() {
    let people = vec![
        Person::new("richard", Gender::Male).born(date(1940)),
        Person::new("jane", Gender::Female)
            .born(date(1970))
            .died(date(2022)),
        Person::new("john", Gender::Male).born(date(1968)),
        Person::new("lisa", Gender::Female).born(date(1980)),
        Person::new("michael", Gender::Male).born(date(2024)),
    ];
    let facts = vec![
        RelationshipFact::parent_of("richard", "jane"),
        RelationshipFact::spouse("john", "jane"),
        RelationshipFact::spouse("john", "lisa"),
        RelationshipFact::parent_of("john", "michael"),
        RelationshipFact::parent_of("lisa", "michael"),
    ];
    let engine = KinshipEngine::default_config();

    assert_eq!(
        engine.classify_relationship(&id("richard"), &id("michael"), &people, &facts),
        "Unrelated"
    );
    assert_eq!(
        engine.classify_relationship(&id("michael"), &id("richard"), &people, &facts),
        "Unrelated"
    );

    // Without date checks the link through Jane survives
    let lenient = KinshipEngine::new(EngineConfig::lenient());
    assert_eq!(
        lenient.classify_relationship(&id("richard"), &id("michael"), &people, &facts),
        "Step-Grandfather"
    );
}

#[test]
fn test_store_convention_matches_testing_convention() {
    let people = vec![
        Person::new("gpa", Gender::Male),
        Person::new("mom", Gender::Female),
        Person::new("aunt", Gender::Female),
        Person::new("kid", Gender::Male),
    ];
    let testing = vec![
        RelationshipFact::parent_of("gpa", "mom"),
        RelationshipFact::parent_of("gpa", "aunt"),
        RelationshipFact::parent_of("mom", "kid"),
    ];
    // Store convention: both directions recorded, parent kind points child → parent
    let store = vec![
        RelationshipFact::new("mom", "gpa", FactKind::Parent),
        RelationshipFact::new("gpa", "mom", FactKind::Child),
        RelationshipFact::new("aunt", "gpa", FactKind::Parent),
        RelationshipFact::new("gpa", "aunt", FactKind::Child),
        RelationshipFact::new("kid", "mom", FactKind::Parent),
        RelationshipFact::new("mom", "kid", FactKind::Child),
    ];
    let engine = KinshipEngine::default_config();

    for (person, root, expected) in [
        ("gpa", "kid", "Grandfather"),
        ("aunt", "kid", "Aunt"),
        ("kid", "aunt", "Nephew"),
        ("aunt", "mom", "Sister"),
    ] {
        assert_eq!(
            engine.classify_relationship(&id(person), &id(root), &people, &testing),
            expected
        );
        assert_eq!(
            engine.classify_relationship(&id(person), &id(root), &people, &store),
            expected
        );
    }
}

#[test]
fn test_duplicate_and_reversed_facts_are_harmless() {
    let people = vec![
        Person::new("a", Gender::Male),
        Person::new("b", Gender::Female),
    ];
    let facts = vec![
        RelationshipFact::spouse("a", "b"),
        RelationshipFact::spouse("b", "a"),
        RelationshipFact::spouse("a", "b"),
        RelationshipFact::sibling("a", "a"),
    ];
    let engine = KinshipEngine::default_config();
    assert_eq!(
        engine.classify_relationship(&id("b"), &id("a"), &people, &facts),
        "Wife"
    );
}

#[test]
fn test_spouse_precedence_is_configurable() {
    let people = vec![
        Person::new("a", Gender::Male),
        Person::new("b", Gender::Female).died(date(2010)),
    ];
    let facts = vec![RelationshipFact::ex_spouse("a", "b")];

    let default = KinshipEngine::default_config();
    assert_eq!(
        default.classify_relationship(&id("b"), &id("a"), &people, &facts),
        "Ex-Wife"
    );

    let config = EngineConfig {
        spouse_precedence: SpousePrecedence::DeceasedOverEx,
        ..EngineConfig::default()
    };
    let engine = KinshipEngine::new(config);
    assert_eq!(
        engine.classify_relationship(&id("b"), &id("a"), &people, &facts),
        "Late Wife"
    );
}

#[test]
fn test_blood_detection() {
    let people = vec![
        Person::new("gpa", Gender::Male),
        Person::new("p1", Gender::Male),
        Person::new("p2", Gender::Female),
        Person::new("c1", Gender::Female),
        Person::new("c2", Gender::Male),
        Person::new("partner", Gender::Female),
    ];
    let facts = vec![
        RelationshipFact::parent_of("gpa", "p1"),
        RelationshipFact::parent_of("gpa", "p2"),
        RelationshipFact::parent_of("p1", "c1"),
        RelationshipFact::parent_of("p2", "c2"),
        RelationshipFact::spouse("c2", "partner"),
    ];
    let engine = KinshipEngine::default_config();

    let cousins = engine.detect_blood_relationship(&id("c1"), &id("c2"), &facts, &people);
    assert!(cousins.is_blood);
    assert_eq!(cousins.label, "1st Cousin");
    assert_eq!(cousins.degree, Some(4));

    let in_law = engine.detect_blood_relationship(&id("partner"), &id("c2"), &facts, &people);
    assert!(!in_law.is_blood);
    assert_eq!(in_law.label, "Unrelated");

    let same = engine.detect_blood_relationship(&id("c1"), &id("c1"), &facts, &people);
    assert!(!same.is_blood);
}

#[test]
fn test_blood_detection_ignores_lifespans() {
    let people = vec![
        Person::new("ancestor", Gender::Female).died(date(1800)),
        Person::new("mid", Gender::Female).born(date(1780)),
        Person::new("descendant", Gender::Male).born(date(1990)),
    ];
    let facts = vec![
        RelationshipFact::parent_of("ancestor", "mid"),
        RelationshipFact::parent_of("mid", "descendant"),
    ];
    let engine = KinshipEngine::default_config();
    let result = engine.detect_blood_relationship(&id("ancestor"), &id("descendant"), &facts, &people);
    assert!(result.is_blood);
    assert_eq!(result.label, "Grandmother");
    assert_eq!(result.degree, Some(2));
}

#[test]
fn test_snapshot_with_aliases() {
    let json = r#"{
        "people": [
            {"id": 1, "gender": "MALE", "name": "John", "birth_date": "1960-03-04"},
            {"id": 2, "gender": "female", "dob": "1990"},
            {"id": "3", "gender": "Female", "date_of_birth": "1992-01-01T00:00:00Z"}
        ],
        "facts": [
            {"from": 1, "to": 2, "relationship_type": "child"},
            {"person_id": 1, "relative_id": 3, "type": "CHILD"},
            {"source": 2, "target": 3, "type": "sibling"},
            {"source": 2, "target": 3, "type": "godparent"}
        ]
    }"#;
    let snapshot = Snapshot::from_json(json).unwrap();
    assert_eq!(snapshot.people.len(), 3);
    assert_eq!(snapshot.facts.len(), 3);
    assert_eq!(
        snapshot.people[0].date_of_birth,
        NaiveDate::from_ymd_opt(1960, 3, 4)
    );

    let engine = KinshipEngine::default_config();
    let rows = engine.classify_snapshot(&id("1"), &snapshot);
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Root", "Daughter", "Daughter"]);

    let rows = engine.classify_snapshot(&id("2"), &snapshot);
    assert_eq!(rows[2].label, "Sister");
}

#[test]
fn test_snapshot_errors() {
    assert!(matches!(
        Snapshot::from_json("{ not json"),
        Err(KinshipError::JsonParse(_))
    ));

    let empty = Snapshot::from_json("{}").unwrap();
    assert!(empty.people.is_empty());
}

#[test]
fn test_facts_without_people_are_dropped_at_build() {
    let snapshot =
        Snapshot::from_json(r#"{"relationships": [{"from": 1, "to": 2, "type": "spouse"}]}"#)
            .unwrap();
    assert!(snapshot.people.is_empty());
    assert_eq!(snapshot.facts.len(), 1);

    let engine = KinshipEngine::new(EngineConfig::default());
    assert!(engine.classify_snapshot(&id("1"), &snapshot).is_empty());
}

#[test]
fn test_unknown_root_yields_unrelated_rows() {
    let (people, facts) = blended_family();
    let engine = KinshipEngine::default_config();
    let rows = engine.classify_all(&id("nobody"), &people, &facts);
    assert!(rows.iter().all(|r| r.relation == Relation::Unrelated));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EngineConfig {
        max_generations: 1,
        ..EngineConfig::default()
    };
    assert!(matches!(
        KinshipEngine::try_new(config),
        Err(KinshipError::Config(_))
    ));
    assert!(KinshipEngine::try_new(EngineConfig::strict()).is_ok());
}
