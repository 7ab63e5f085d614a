//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{Person, PersonId, Relation, RelationFamily};
use kinship_engine::{BloodRelationship, ClassifiedPerson};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    show_family: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            show_family: true,
        }
    }

    /// Toggle the relation family column in tables.
    pub fn with_family_column(mut self, show: bool) -> Self {
        self.show_family = show;
        self
    }

    /// Format a single classification.
    pub fn format_classification(
        &self,
        person: &Person,
        root: &Person,
        relation: &Relation,
        label: &str,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "person": person.id.as_str(),
                    "root": root.id.as_str(),
                    "label": label,
                    "family": relation.family().as_str(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(label.to_string()),
            OutputFormat::Table => Ok(format!(
                "{} is {}'s {}",
                person.display_name(),
                root.display_name(),
                self.paint_label(label, relation.family())
            )),
        }
    }

    /// Format every person's relation to a root.
    ///
    /// `lookup` resolves ids to people so names can be shown.
    pub fn format_tree<'a, F>(
        &self,
        root: &PersonId,
        rows: &[ClassifiedPerson],
        lookup: F,
    ) -> Result<String>
    where
        F: Fn(&PersonId) -> Option<&'a Person>,
    {
        match self.format {
            OutputFormat::Json => {
                let people: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "id": row.person.as_str(),
                            "name": lookup(&row.person).and_then(|p| p.name.as_deref()),
                            "label": row.label,
                            "family": row.relation.family().as_str(),
                        })
                    })
                    .collect();
                let value = serde_json::json!({ "root": root.as_str(), "people": people });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|row| format!("{}\t{}", row.person, row.label))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No relatives found.", "yellow"));
                }

                let mut builder = Builder::default();
                let mut header = vec!["ID", "Name", "Relation"];
                if self.show_family {
                    header.push("Family");
                }
                builder.push_record(header);

                for row in rows {
                    let name = lookup(&row.person).map(Person::display_name).unwrap_or("");
                    let mut record = vec![
                        row.person.to_string(),
                        name.to_string(),
                        row.label.clone(),
                    ];
                    if self.show_family {
                        record.push(row.relation.family().as_str().to_string());
                    }
                    builder.push_record(record);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a blood-relationship check.
    pub fn format_blood(&self, a: &Person, b: &Person, result: &BloodRelationship) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "a": a.id.as_str(),
                    "b": b.id.as_str(),
                    "is_blood": result.is_blood,
                    "label": result.label,
                    "degree": result.degree,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(result.is_blood.to_string()),
            OutputFormat::Table => {
                if !result.is_blood {
                    return Ok(self.success(&format!(
                        "{} and {} are not blood relatives",
                        a.display_name(),
                        b.display_name()
                    )));
                }
                let degree = result
                    .degree
                    .map(|d| format!(" (degree {})", d))
                    .unwrap_or_default();
                Ok(self.warning(&format!(
                    "{} is {}'s {}{}",
                    a.display_name(),
                    b.display_name(),
                    result.label,
                    degree
                )))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn paint_label(&self, label: &str, family: RelationFamily) -> String {
        let color = match family {
            RelationFamily::Blood => "green",
            RelationFamily::Marriage => "magenta",
            RelationFamily::Step => "cyan",
            RelationFamily::Affinity => "blue",
            RelationFamily::Identity | RelationFamily::None => "",
        };
        self.colorize(label, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
