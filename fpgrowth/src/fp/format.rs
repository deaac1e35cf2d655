//! Line format of a discovered itemset: `i1,i2,...,ik:s.ssss`.

use super::transactions::Item;

/// Renders sorted `items` with the support ratio to four decimals.
pub fn format_itemset(items: &[Item], ratio: f64) -> String {
    let items = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{items}:{ratio:.4}")
}
