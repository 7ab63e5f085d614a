//! Tree command implementation.

use super::{engine_for, load_snapshot, require_person};
use crate::cli::TreeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::Relation;

/// Execute the tree command.
pub fn execute_tree(args: TreeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_tree(&args, config, formatter)?);
    Ok(())
}

/// Classify everyone relative to the root and format the rows.
pub fn render_tree(args: &TreeArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let snapshot = load_snapshot(&args.data)?;
    let root = require_person(&snapshot, &args.root)?;

    let engine = engine_for(&args.data, &config.engine)?;
    let graph = engine.build_graph(&snapshot.people, &snapshot.facts);
    let mut rows = engine.classify_all_in(&graph, &root.id);
    if args.related {
        rows.retain(|row| row.relation != Relation::Unrelated);
    }

    formatter.format_tree(&root.id, &rows, |id| graph.person(id))
}
