//! Pairs command implementation
//!
//! Lists the pair catalog through the rate table filter.

use fx_core::types::{Market, PairCatalog, PairFilter, PairGroup};
use tracing::info;

use crate::Result;

/// Run the pairs command
pub fn run(market: Option<Market>, group: Option<PairGroup>, search: &str, json: bool) -> Result<()> {
    let mut filter = PairFilter::default().with_search(search);
    if let Some(m) = market {
        filter = filter.with_market(m);
    }
    if let Some(g) = group {
        filter = filter.with_group(g);
    }

    let pairs = PairCatalog::standard().filter(&filter);
    info!(count = pairs.len(), "Filtered pair catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    println!("{:<12} {:<8} {:<12} {:<9} Groups", "Id", "Code", "Name", "Market");
    for pair in &pairs {
        let groups: Vec<&str> = PairGroup::ALL
            .iter()
            .filter(|g| g.contains(pair))
            .map(|g| g.label())
            .collect();
        println!(
            "{:<12} {:<8} {:<12} {:<9} {}",
            pair.id(),
            pair.code(),
            pair.display_name(),
            pair.market(),
            groups.join(", ")
        );
    }
    if pairs.is_empty() {
        println!("(no pairs match)");
    }
    Ok(())
}
