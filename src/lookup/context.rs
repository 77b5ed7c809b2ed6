//! Resolution context: everything known about one title after its page has
//! been fetched.
//!
//! A [`TitleContext`] is built once per resolution and never mutated. Facet
//! accessors (see `fields`, `people` and `info`) read from it, so looking up
//! several facets of the same title costs one page fetch.

use std::sync::Arc;

use super::details::DetailsRecord;
use super::domain::{Identifier, LookupError};
use super::fetcher::DocumentFetcher;
use super::schema::SiteSchema;

pub struct TitleContext {
    id: Identifier,
    record: DetailsRecord,
    page: String,
    schema: Arc<dyn SiteSchema>,
}

impl TitleContext {
    /// Fetch the title page for `id` and build its details record.
    pub async fn load(
        id: Identifier,
        fetcher: &dyn DocumentFetcher,
        schema: Arc<dyn SiteSchema>,
    ) -> Result<Self, LookupError> {
        let page = fetcher.fetch(&schema.title_url(&id)).await?;
        Self::from_page(id, page, schema)
    }

    /// Build a context from already-fetched title page markup.
    pub fn from_page(
        id: Identifier,
        page: String,
        schema: Arc<dyn SiteSchema>,
    ) -> Result<Self, LookupError> {
        let record = DetailsRecord::from_page(&page, schema.as_ref())?;
        tracing::debug!("Loaded details for {} ({})", id, schema.version());
        Ok(Self {
            id,
            record,
            page,
            schema,
        })
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn record(&self) -> &DetailsRecord {
        &self.record
    }

    /// Raw title page markup, for DOM queries outside the JSON blocks.
    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn schema(&self) -> &dyn SiteSchema {
        self.schema.as_ref()
    }
}

impl std::fmt::Debug for TitleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleContext")
            .field("id", &self.id)
            .field("schema", &self.schema.version())
            .finish_non_exhaustive()
    }
}
