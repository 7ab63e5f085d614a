//! Classify command implementation.

use super::{engine_for, load_snapshot, require_person};
use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_classify(&args, config, formatter)?);
    Ok(())
}

/// Classify one pair and format the result.
pub fn render_classify(args: &ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let snapshot = load_snapshot(&args.data)?;
    let person = require_person(&snapshot, &args.person)?;
    let root = require_person(&snapshot, &args.root)?;

    let engine = engine_for(&args.data, &config.engine)?;
    let graph = engine.build_graph(&snapshot.people, &snapshot.facts);
    let classifier = engine.classifier(&graph);
    let relation = classifier.classify(&person.id, &root.id);
    let label = classifier.spell(&person.id, &relation);

    formatter.format_classification(person, root, &relation, &label)
}
