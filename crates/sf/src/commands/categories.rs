//! `sf categories` command implementation.

use clap::Args;
use sf_catalog::{Category, CategoryTree};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the categories command.
#[derive(Args)]
pub(crate) struct CategoriesArgs {
    /// Print the taxonomy as JSON.
    #[arg(long)]
    json: bool,
}

impl CategoriesArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let (_, tree) = global.load_catalog()?;

        if self.json {
            output.result(&serde_json::to_string_pretty(tree.categories())?);
            return Ok(());
        }

        for line in format_tree(&tree) {
            output.result(&line);
        }
        output.success(&format!("{} top-level categories", tree.len()));

        Ok(())
    }
}

/// Render the taxonomy as indented lines.
fn format_tree(tree: &CategoryTree) -> Vec<String> {
    let mut lines = Vec::new();
    for category in tree.categories() {
        let info = category.info();
        match category {
            Category::Pending(_) => lines.push(format!(
                "{} ({}) [subcategories not loaded]",
                info.name, info.slug
            )),
            Category::Leaf(_) | Category::Parent(_) => {
                lines.push(format!("{} ({})", info.name, info.slug));
            }
        }
        for child in category.children() {
            lines.push(format!("  {} ({})", child.name(), child.slug()));
        }
    }
    lines
}
