//! Cast extraction from the full credits page.
//!
//! The credits table is parsed and filtered first; only accepted rows cost an
//! extra request (the actor page, for the portrait). Those requests run
//! through a bounded buffer of `CastOptions::concurrency` futures and the
//! output always keeps credits-table order.

use futures::stream::{self, StreamExt};
use scraper::Html;
use serde_json::Value;

use super::details::script_json;
use super::domain::{CastEntry, CastOptions, Identifier, LookupError};
use super::fetcher::DocumentFetcher;
use super::schema::{SiteSchema, selector};
use super::text::clean_text;

/// One cast table row before the actor page has been visited.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CastRow {
    actor: String,
    href: String,
    character: String,
}

/// Fetch the credits page for `id` and build cast entries per `options`.
pub async fn extract_cast(
    id: &Identifier,
    fetcher: &dyn DocumentFetcher,
    schema: &dyn SiteSchema,
    options: CastOptions,
) -> Result<Vec<CastEntry>, LookupError> {
    let markup = fetcher.fetch(&schema.credits_url(id)).await?;
    let rows = accept_rows(parse_cast_rows(&markup, schema)?, &options);

    let entries: Vec<CastEntry> = stream::iter(rows)
        .map(|row| cast_entry(row, fetcher, schema, options.with_ids))
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    tracing::debug!("Extracted {} cast entries for {}", entries.len(), id);
    Ok(entries)
}

fn parse_cast_rows(markup: &str, schema: &dyn SiteSchema) -> Result<Vec<CastRow>, LookupError> {
    let document = Html::parse_document(markup);
    let table_sel = selector(schema.cast_table())?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;
    let link_sel = selector("a")?;
    let columns = schema.cast_columns();

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| LookupError::SelectorMissing(schema.cast_table().to_string()))?;

    let rows = table
        .select(&row_sel)
        .skip(1) // header
        .filter_map(|row| {
            let cells: Vec<_> = row.select(&cell_sel).collect();
            let link = cells.get(columns.actor)?.select(&link_sel).next()?;
            let href = link.value().attr("href")?.to_string();
            let character = cells.get(columns.character)?.text().collect::<String>();
            Some(CastRow {
                actor: clean_text(&link.text().collect::<String>()),
                href,
                character: clean_text(&character),
            })
        })
        .collect();
    Ok(rows)
}

/// Drop uncredited rows unless asked for, stopping once the limit is reached.
fn accept_rows(rows: Vec<CastRow>, options: &CastOptions) -> Vec<CastRow> {
    let mut accepted = Vec::new();
    for row in rows {
        if !options.all && accepted.len() >= options.limit {
            break;
        }
        if !options.include_uncredited && row.character.contains("uncredited") {
            continue;
        }
        accepted.push(row);
    }
    accepted
}

async fn cast_entry(
    row: CastRow,
    fetcher: &dyn DocumentFetcher,
    schema: &dyn SiteSchema,
    with_ids: bool,
) -> CastEntry {
    let url = schema.absolute_url(&row.href);
    let image_url = match fetcher.fetch(&url).await {
        Ok(markup) => portrait(&markup, schema),
        Err(e) => Err(e),
    };
    let image_url = image_url
        .inspect_err(|e| tracing::warn!("No portrait for {}: {}", row.actor, e))
        .ok();

    let id = with_ids
        .then(|| schema.person_id(&row.href).map(str::to_string))
        .flatten();

    CastEntry {
        actor: row.actor,
        url,
        image_url,
        character: row.character,
        id,
    }
}

/// Portrait URL from an actor page's structured data.
fn portrait(markup: &str, schema: &dyn SiteSchema) -> Result<String, LookupError> {
    let document = Html::parse_document(markup);
    let structured = script_json(&document, schema.structured_data_script())?;
    structured
        .get("image")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| LookupError::FieldMissing("/image".to_string()))
}
