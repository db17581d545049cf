//! `sf layout` command implementation.

use std::time::Duration;

use clap::Args;
use sf_layout::{CategoryBar, ResizeDebouncer};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Interval between checks for a settled resize burst.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Arguments for the layout command.
#[derive(Args)]
pub(crate) struct LayoutArgs {
    /// Container width in pixels. Repeat to replay a resize burst; only the
    /// last width is applied once the burst settles.
    #[arg(long, required = true)]
    container: Vec<f64>,

    /// Width of the "View All" control in pixels (overrides config).
    #[arg(long)]
    control: Option<f64>,

    /// Measured item widths in display order.
    #[arg(required = true)]
    widths: Vec<f64>,
}

impl LayoutArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(self.control)?;

        let mut bar = CategoryBar::new(config.layout.overflow_control_width);
        bar.set_items(self.widths);

        let debouncer = ResizeDebouncer::new(config.layout.resize_debounce());
        for &width in &self.container {
            debouncer.record(width);
        }
        let settled = loop {
            if let Some(width) = debouncer.drain_ready() {
                break width;
            }
            std::thread::sleep(POLL_INTERVAL);
        };

        let visible = bar.resize(settled);
        output.result(&visible.to_string());

        if bar.has_overflow() {
            output.info(&format!(
                "{} of {} items collapsed into \"View All\"",
                bar.item_count() - visible,
                bar.item_count()
            ));
        }

        Ok(())
    }
}
