//! `sf resolve` command implementation.

use clap::Args;
use sf_navigation::{NavigationIntent, filter_for_route, parse_route};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Selected category slug (default: all products).
    category: Option<String>,

    /// Subcategory slug within CATEGORY.
    #[arg(short, long, requires = "category")]
    subcategory: Option<String>,

    /// Resolve a route path such as `/electronics/phones` instead.
    #[arg(long, conflicts_with_all = ["category", "subcategory"])]
    route: Option<String>,
}

impl ResolveArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let intent = self.intent()?;
        let (_, tree) = global.load_catalog()?;

        let filter = filter_for_route(&tree, &intent);
        if filter.is_empty() {
            output.warning("Selection matches no products");
        }

        output.result(&serde_json::to_string_pretty(&filter)?);
        Ok(())
    }

    /// Navigation intent described by the arguments.
    fn intent(&self) -> Result<NavigationIntent, CliError> {
        if let Some(route) = &self.route {
            return Ok(parse_route(route)?);
        }

        match (&self.category, &self.subcategory) {
            (None, None) => Ok(NavigationIntent::Root),
            (Some(category), None) => Ok(NavigationIntent::Category {
                category: category.clone(),
            }),
            (Some(category), Some(subcategory)) => Ok(NavigationIntent::CategoryAndSubcategory {
                category: category.clone(),
                subcategory: subcategory.clone(),
            }),
            (None, Some(_)) => Err(CliError::Validation(
                "--subcategory requires a CATEGORY".to_owned(),
            )),
        }
    }
}
