use serde_json::Value;

use super::json::{json_array, json_datetime, json_str, json_str_or};
use crate::constants::limits::MAX_NEWS_ARTICLES;
use crate::data_fetcher::models::NewsItem;

/// The first [`MAX_NEWS_ARTICLES`] articles of a news payload.
pub fn normalize_news(raw: &Value) -> Vec<NewsItem> {
    json_array(raw, &["articles"])
        .iter()
        .take(MAX_NEWS_ARTICLES)
        .map(|article| NewsItem {
            headline: json_str_or(article, &["headline"], "No headline"),
            description: json_str(article, &["description"]),
            published_at: json_datetime(article, &["published"]),
            source: json_str_or(article, &["source"], "ESPN"),
            url: json_str(article, &["links", "web", "href"]),
        })
        .collect()
}
