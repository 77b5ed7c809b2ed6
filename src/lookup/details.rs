//! Details record: the merged view of a title page's two embedded JSON blocks.

use scraper::Html;
use serde_json::Value;

use super::domain::LookupError;
use super::schema::{SiteSchema, selector};

/// Merged structured-data and page-state payloads for one title.
///
/// Always holds a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsRecord(Value);

impl DetailsRecord {
    /// Shallow-merge two payloads. Keys from `page_state` override keys from
    /// `structured` on collision.
    pub fn merge(structured: Value, page_state: Value) -> Result<Self, LookupError> {
        let Value::Object(mut merged) = structured else {
            return Err(LookupError::parse("structured data", "expected a JSON object"));
        };
        let Value::Object(state) = page_state else {
            return Err(LookupError::parse("page state", "expected a JSON object"));
        };
        merged.extend(state);
        Ok(Self(Value::Object(merged)))
    }

    /// Extract both script blocks from a title page and merge them.
    pub fn from_page(markup: &str, schema: &dyn SiteSchema) -> Result<Self, LookupError> {
        let document = Html::parse_document(markup);
        let structured = script_json(&document, schema.structured_data_script())?;
        let page_state = script_json(&document, schema.page_state_script())?;
        Self::merge(structured, page_state)
    }

    /// Value at a JSON pointer, if present and not null.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.pointer(path).filter(|v| !v.is_null())
    }

    /// Value at a JSON pointer, or [`LookupError::FieldMissing`].
    pub fn require(&self, path: &str) -> Result<&Value, LookupError> {
        self.get(path)
            .ok_or_else(|| LookupError::FieldMissing(path.to_string()))
    }
}

/// Parse the first script block matching `css` as JSON.
pub(crate) fn script_json(document: &Html, css: &str) -> Result<Value, LookupError> {
    let sel = selector(css)?;
    let script = document
        .select(&sel)
        .next()
        .ok_or_else(|| LookupError::SelectorMissing(css.to_string()))?;
    let body: String = script.text().collect();
    serde_json::from_str(&body).map_err(|e| LookupError::parse(format!("script `{css}`"), e))
}
