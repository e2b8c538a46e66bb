//! Order command implementation
//!
//! Shows and edits the saved rate table order. The file holds the same
//! versioned document a view would keep under its row-order storage key.

use clap::Subcommand;
use fx_core::types::{PairCatalog, PairId};
use fx_feed::presentation::RowOrder;
use std::path::Path;
use tracing::{debug, info};

use crate::{CliError, Result};

/// Default row order file.
pub const DEFAULT_ORDER_FILE: &str = "rates-row-order.json";

/// Order subcommands
#[derive(Subcommand)]
pub enum OrderAction {
    /// Print the pairs in display order
    Show,

    /// Move one pair to another pair's position
    Move {
        /// Pair to move
        source: String,
        /// Pair whose position it takes
        target: String,
    },

    /// Forget the saved order
    Reset,
}

/// Load the saved order, or the default order if there is none.
pub fn load(path: &Path) -> RowOrder {
    match std::fs::read_to_string(path) {
        Ok(text) => RowOrder::from_json(&text),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No saved row order");
            RowOrder::default()
        }
    }
}

/// Run the order command
pub fn run(path: &Path, action: OrderAction) -> Result<()> {
    let catalog_ids = PairCatalog::standard().ids();
    let mut order = load(path);

    match action {
        OrderAction::Show => {
            let label = if order.is_custom() { "custom" } else { "default" };
            println!("Row order ({})", label);
            for (i, id) in order.ordered_ids(&catalog_ids).iter().enumerate() {
                println!("{:>3}. {}", i + 1, id);
            }
        }
        OrderAction::Move { source, target } => {
            let current = order.ordered_ids(&catalog_ids);
            let (source, target) = (PairId::from(source.trim()), PairId::from(target.trim()));
            if !order.move_row(&current, &source, &target) {
                return Err(CliError::InvalidArgument(format!(
                    "cannot move {} to {}: both must be distinct catalog pairs",
                    source, target
                )));
            }
            if let Some(text) = order.to_json() {
                std::fs::write(path, text)?;
            }
            info!(%source, %target, path = %path.display(), "Row order saved");
        }
        OrderAction::Reset => {
            if path.exists() {
                std::fs::remove_file(path)?;
            }
            info!(path = %path.display(), "Row order reset");
        }
    }
    Ok(())
}
