//! `sf browse` command implementation.

use std::sync::Arc;

use clap::Args;
use sf_catalog::CategoryTree;
use sf_navigation::{NavigationIntent, Router, Sidebar, SidebarEntry, filter_for_route, route_path};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the browse command.
#[derive(Args)]
pub(crate) struct BrowseArgs {
    /// Sidebar steps: a category slug, `back`, `close`, or `toggle`.
    ///
    /// A slug step reopens the sidebar first if it is closed.
    #[arg(required = true)]
    steps: Vec<String>,
}

/// Sidebar step parsed from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Step<'a> {
    Back,
    Close,
    Toggle,
    Select(&'a str),
}

impl<'a> Step<'a> {
    fn parse(step: &'a str) -> Self {
        match step {
            "back" => Self::Back,
            "close" => Self::Close,
            "toggle" => Self::Toggle,
            slug => Self::Select(slug),
        }
    }
}

/// Router that prints each route and the product filter it lands on.
struct ReportingRouter {
    tree: Arc<CategoryTree>,
    output: Output,
}

impl Router for ReportingRouter {
    fn navigate(&self, intent: NavigationIntent) {
        let filter = filter_for_route(&self.tree, &intent);
        let report = serde_json::json!({
            "path": route_path(&intent),
            "intent": intent,
            "filter": filter,
        });
        self.output.result(&report.to_string());
    }
}

impl BrowseArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = global.load_catalog()?;
        let tree = Arc::new(tree);

        let router = ReportingRouter {
            tree: Arc::clone(&tree),
            output: Output::new(),
        };
        let mut sidebar =
            Sidebar::new(tree, router).with_header_color(config.sidebar.header_color.clone());
        sidebar.open();

        for step in &self.steps {
            match Step::parse(step) {
                Step::Back => sidebar.back(),
                Step::Close => sidebar.close(),
                Step::Toggle => sidebar.toggle(),
                Step::Select(slug) => {
                    if !sidebar.is_open() {
                        sidebar.open();
                    }
                    if sidebar.select(slug).is_none() && sidebar.is_open() {
                        output.info(&format!("Showing {}", describe_position(&sidebar)));
                    }
                }
            }
        }

        if sidebar.is_open() {
            output.highlight(&format!(
                "Sidebar open at {} (header {})",
                describe_position(&sidebar),
                sidebar.header_color()
            ));
            for entry in sidebar.entries() {
                output.info(&format_entry(&entry));
            }
        } else {
            output.success("Sidebar closed");
        }

        Ok(())
    }
}

fn describe_position<R: Router>(sidebar: &Sidebar<R>) -> String {
    match sidebar.state().drilled() {
        Some(parent) => format!("'{}'", parent.info.name),
        None => "top level".to_owned(),
    }
}

fn format_entry(entry: &SidebarEntry<'_>) -> String {
    let chevron = if entry.has_children { " >" } else { "" };
    format!("  {} ({}){chevron}", entry.name, entry.slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_steps() {
        assert_eq!(Step::parse("back"), Step::Back);
        assert_eq!(Step::parse("close"), Step::Close);
        assert_eq!(Step::parse("toggle"), Step::Toggle);
        assert_eq!(Step::parse("phones"), Step::Select("phones"));
    }

    #[test]
    fn test_format_entry_marks_children() {
        let entry = SidebarEntry {
            slug: "electronics",
            name: "Electronics",
            color: None,
            has_children: true,
        };

        assert_eq!(format_entry(&entry), "  Electronics (electronics) >");
    }

    #[test]
    fn test_format_leaf_entry() {
        let entry = SidebarEntry {
            slug: "books",
            name: "Books",
            color: Some("#FFD700"),
            has_children: false,
        };

        assert_eq!(format_entry(&entry), "  Books (books)");
    }
}
