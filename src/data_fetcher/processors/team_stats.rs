use serde_json::Value;

use super::json::{json_array, json_non_empty, json_opt_u32, json_str};
use crate::data_fetcher::models::TeamStat;

/// Flattens a team statistics payload into one [`TeamStat`] per stat,
/// tagged with its category.
pub fn normalize_team_stats(raw: &Value) -> Vec<TeamStat> {
    let mut categories = json_array(raw, &["splits", "categories"]);
    if categories.is_empty() {
        categories = json_array(raw, &["results", "stats", "categories"]);
    }

    categories
        .iter()
        .flat_map(|category| {
            let category_name = json_non_empty(category, &["displayName"])
                .unwrap_or_else(|| json_str(category, &["name"]));
            json_array(category, &["stats"])
                .iter()
                .map(move |stat| TeamStat {
                    name: json_non_empty(stat, &["displayName"])
                        .unwrap_or_else(|| json_str(stat, &["name"])),
                    value: json_str(stat, &["displayValue"]),
                    rank: json_opt_u32(stat, &["rank"]),
                    category: category_name.clone(),
                })
        })
        .collect()
}
