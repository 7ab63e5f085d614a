//! Command implementations.

pub mod blood;
pub mod classify;
pub mod config;
pub mod tree;

pub use self::blood::execute_blood;
pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::tree::execute_tree;

use crate::cli::DataArgs;
use crate::error::{CliError, Result};
use kinship_domain::{Person, PersonId};
use kinship_engine::{EngineConfig, KinshipEngine, Snapshot};
use std::fs;
use tracing::debug;

/// Read and parse the snapshot named on the command line.
pub fn load_snapshot(args: &DataArgs) -> Result<Snapshot> {
    let json = fs::read_to_string(&args.data)?;
    let snapshot = Snapshot::from_json(&json)?;
    if snapshot.people.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} contains no people",
            args.data.display()
        )));
    }
    debug!(
        "Read {} people from {}",
        snapshot.people.len(),
        args.data.display()
    );
    Ok(snapshot)
}

/// Build an engine from the configured settings and command-line overrides.
pub fn engine_for(args: &DataArgs, config: &EngineConfig) -> Result<KinshipEngine> {
    let mut config = config.clone();
    if args.lenient {
        config.enforce_timeline = false;
    }
    Ok(KinshipEngine::try_new(config)?)
}

/// Find a person by id, failing with the id that was asked for.
pub fn require_person<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Person> {
    let id = PersonId::new(id);
    snapshot
        .people
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CliError::UnknownPerson(id.to_string()))
}


#[cfg(test)]
mod tests {
    use super::fixtures::blended_snapshot;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_snapshot() {
        let (_dir, args) = blended_snapshot();
        let snapshot = load_snapshot(&args).unwrap();
        assert_eq!(snapshot.people.len(), 7);
        assert_eq!(snapshot.facts.len(), 5);
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();
        let args = DataArgs {
            data: path,
            lenient: false,
        };
        assert!(matches!(load_snapshot(&args), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file() {
        let args = DataArgs {
            data: "/nonexistent/tree.json".into(),
            lenient: false,
        };
        assert!(matches!(load_snapshot(&args), Err(CliError::Io(_))));
    }

    #[test]
    fn test_require_person() {
        let (_dir, args) = blended_snapshot();
        let snapshot = load_snapshot(&args).unwrap();
        assert_eq!(require_person(&snapshot, "alice").unwrap().display_name(), "Alice");
        assert!(matches!(
            require_person(&snapshot, "nobody"),
            Err(CliError::UnknownPerson(id)) if id == "nobody"
        ));
    }

    #[test]
    fn test_lenient_override() {
        let (_dir, mut args) = blended_snapshot();
        args.lenient = true;
        let engine = engine_for(&args, &EngineConfig::default()).unwrap();
        assert!(!engine.config().enforce_timeline);
    }
}
