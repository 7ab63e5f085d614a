//! Blood command implementation.

use super::{engine_for, load_snapshot, require_person};
use crate::cli::BloodArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the blood command.
pub fn execute_blood(args: BloodArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_blood(&args, config, formatter)?);
    Ok(())
}

/// Check two people for shared ancestry and format the verdict.
pub fn render_blood(args: &BloodArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let snapshot = load_snapshot(&args.data)?;
    let a = require_person(&snapshot, &args.a)?;
    let b = require_person(&snapshot, &args.b)?;

    let engine = engine_for(&args.data, &config.engine)?;
    let result = engine.detect_blood_relationship(&a.id, &b.id, &snapshot.facts, &snapshot.people);

    formatter.format_blood(a, b, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::blended_snapshot;
    use crate::config::OutputFormat;

    fn render(a: &str, b: &str) -> String {
        let (_dir, data) = blended_snapshot();
        let args = BloodArgs {
            a: a.to_string(),
            b: b.to_string(),
            data,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        render_blood(&args, &Config::default(), &formatter).unwrap()
    }

    #[test]
    fn test_siblings_are_blood() {
        let value: serde_json::Value = serde_json::from_str(&render("charlie", "alice")).unwrap();
        assert_eq!(value["is_blood"], true);
        assert_eq!(value["label"], "Brother");
        assert_eq!(value["degree"], 2);
    }

    #[test]
    fn test_step_siblings_are_not_blood() {
        let value: serde_json::Value = serde_json::from_str(&render("michael", "alice")).unwrap();
        assert_eq!(value["is_blood"], false);
        assert_eq!(value["label"], "Unrelated");
        assert!(value["degree"].is_null());
    }
}
