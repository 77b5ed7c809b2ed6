//! Query to identifier resolution.

use scraper::Html;

use super::domain::{Identifier, LookupError};
use super::fetcher::DocumentFetcher;
use super::schema::{SiteSchema, selector};

/// Turn a free-text query or canonical identifier into an [`Identifier`].
///
/// - Empty queries are [`LookupError::NotFound`] without any fetch.
/// - Canonical identifiers are returned as-is without any fetch.
/// - Anything else goes through the search page; the first result wins.
pub async fn resolve(
    query: &str,
    fetcher: &dyn DocumentFetcher,
    schema: &dyn SiteSchema,
) -> Result<Identifier, LookupError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(LookupError::NotFound);
    }
    if let Some(id) = Identifier::parse(query) {
        return Ok(id);
    }

    let url = schema.search_url(query);
    let markup = fetcher.fetch(&url).await.inspect_err(|e| {
        tracing::warn!("Search for {:?} failed: {}", query, e);
    })?;

    let Some(href) = first_result_href(&markup, schema)? else {
        tracing::warn!("No title match found for {:?}", query);
        return Err(LookupError::NotFound);
    };

    let id = schema
        .identifier_from_href(&href)
        .and_then(Identifier::parse)
        .ok_or_else(|| LookupError::parse("search result link", format!("unexpected href {href:?}")))?;

    tracing::debug!("Resolved {:?} to {}", query, id);
    Ok(id)
}

/// Link target of the first search result, if there is one.
fn first_result_href(markup: &str, schema: &dyn SiteSchema) -> Result<Option<String>, LookupError> {
    let document = Html::parse_document(markup);
    let sel = selector(schema.search_result_link())?;
    let Some(link) = document.select(&sel).next() else {
        return Ok(None);
    };
    link.value()
        .attr("href")
        .map(|href| Some(href.to_string()))
        .ok_or_else(|| LookupError::parse("search result link", "missing href"))
}
