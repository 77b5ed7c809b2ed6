//! Title service - the per-facet lookup surface.
//!
//! Every facet accessor takes a query (free text or canonical identifier),
//! resolves it, loads a fresh [`TitleContext`] and projects one facet out of
//! it. Callers that need several facets of one title should call
//! [`TitleService::open`] once and use the context's accessors directly.

use std::sync::Arc;

use serde::Serialize;

use super::cast::extract_cast;
use super::context::TitleContext;
use super::domain::{
    CastEntry, CastOptions, Identifier, InfoCategory, Listing, LookupError, Person, Relation,
    Render,
};
use super::fetcher::{DocumentFetcher, HttpFetcher};
use super::resolver;
use super::schema::{ImdbIpcSchema, SiteSchema};

/// Service for looking up title facets
pub struct TitleService {
    fetcher: Arc<dyn DocumentFetcher>,
    schema: Arc<dyn SiteSchema>,
}

impl TitleService {
    /// Create a service that talks HTTP to `base_url`.
    pub fn connect(base_url: &str, user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self::with_parts(
            Arc::new(HttpFetcher::new(user_agent)?),
            Arc::new(ImdbIpcSchema::new(base_url)),
        ))
    }

    /// Create a service from an explicit fetcher and schema.
    pub fn with_parts(fetcher: Arc<dyn DocumentFetcher>, schema: Arc<dyn SiteSchema>) -> Self {
        Self { fetcher, schema }
    }

    /// Resolve a query to its canonical identifier.
    pub async fn resolve(&self, query: &str) -> Result<Identifier, LookupError> {
        resolver::resolve(query, self.fetcher.as_ref(), self.schema.as_ref()).await
    }

    /// Resolve a query and load its title page into a context.
    pub async fn open(&self, query: &str) -> Result<TitleContext, LookupError> {
        let id = self.resolve(query).await?;
        TitleContext::load(id, self.fetcher.as_ref(), Arc::clone(&self.schema)).await
    }

    pub async fn title(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::title).await
    }

    pub async fn release_year(&self, query: &str) -> Result<i32, LookupError> {
        self.with_context(query, TitleContext::release_year).await
    }

    pub async fn directors(
        &self,
        query: &str,
        render: Render,
        with_ids: bool,
    ) -> Result<Listing<Person>, LookupError> {
        self.with_context(query, |ctx| ctx.people(Relation::Director, render, with_ids))
            .await
    }

    pub async fn creators(
        &self,
        query: &str,
        render: Render,
        with_ids: bool,
    ) -> Result<Listing<Person>, LookupError> {
        self.with_context(query, |ctx| ctx.people(Relation::Creator, render, with_ids))
            .await
    }

    pub async fn main_actors(
        &self,
        query: &str,
        render: Render,
        with_ids: bool,
    ) -> Result<Listing<Person>, LookupError> {
        self.with_context(query, |ctx| ctx.people(Relation::Actor, render, with_ids))
            .await
    }

    pub async fn countries(&self, query: &str, render: Render) -> Result<Listing<String>, LookupError> {
        self.info(query, InfoCategory::Country, render).await
    }

    pub async fn languages(&self, query: &str, render: Render) -> Result<Listing<String>, LookupError> {
        self.info(query, InfoCategory::Language, render).await
    }

    pub async fn companies(&self, query: &str, render: Render) -> Result<Listing<String>, LookupError> {
        self.info(query, InfoCategory::Company, render).await
    }

    pub async fn akas(&self, query: &str, render: Render) -> Result<Listing<String>, LookupError> {
        self.info(query, InfoCategory::Aka, render).await
    }

    pub async fn filming_locations(
        &self,
        query: &str,
        render: Render,
    ) -> Result<Listing<String>, LookupError> {
        self.info(query, InfoCategory::FilmingLocation, render).await
    }

    pub async fn genres(&self, query: &str) -> Result<Vec<String>, LookupError> {
        self.with_context(query, TitleContext::genres).await
    }

    pub async fn kind(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::kind).await
    }

    pub async fn runtime(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::runtime).await
    }

    pub async fn runtime_seconds(&self, query: &str) -> Result<u64, LookupError> {
        self.with_context(query, TitleContext::runtime_seconds).await
    }

    pub async fn release_date(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::release_date).await
    }

    pub async fn description(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::description).await
    }

    pub async fn content_rating(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::content_rating).await
    }

    pub async fn rating(&self, query: &str) -> Result<f64, LookupError> {
        self.with_context(query, TitleContext::rating).await
    }

    pub async fn poster_url(&self, query: &str) -> Result<String, LookupError> {
        self.with_context(query, TitleContext::poster_url).await
    }

    /// Cast from the full credits page. Only resolves the query; the title
    /// page itself is not fetched.
    pub async fn cast(
        &self,
        query: &str,
        options: CastOptions,
    ) -> Result<Vec<CastEntry>, LookupError> {
        let id = self.resolve(query).await?;
        self.cast_for(&id, options).await
    }

    /// Cast for an already-resolved identifier.
    pub async fn cast_for(
        &self,
        id: &Identifier,
        options: CastOptions,
    ) -> Result<Vec<CastEntry>, LookupError> {
        extract_cast(id, self.fetcher.as_ref(), self.schema.as_ref(), options).await
    }

    /// Every scalar and list facet of one title, from a single page fetch.
    pub async fn summary(&self, query: &str) -> Result<TitleSummary, LookupError> {
        let ctx = self.open(query).await?;
        Ok(TitleSummary::from_context(&ctx))
    }

    async fn info(
        &self,
        query: &str,
        category: InfoCategory,
        render: Render,
    ) -> Result<Listing<String>, LookupError> {
        self.with_context(query, |ctx| ctx.info(category, render)).await
    }

    async fn with_context<T>(
        &self,
        query: &str,
        project: impl FnOnce(&TitleContext) -> Result<T, LookupError>,
    ) -> Result<T, LookupError> {
        let ctx = self.open(query).await?;
        project(&ctx)
    }
}

/// All facets of a title that live on its main page.
///
/// Facets that couldn't be extracted are left empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TitleSummary {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub release_year: Option<i32>,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub runtime_seconds: Option<u64>,
    pub rating: Option<f64>,
    pub content_rating: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub genres: Vec<String>,
    pub directors: Vec<Person>,
    pub creators: Vec<Person>,
    pub main_actors: Vec<Person>,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
    pub companies: Vec<String>,
    pub akas: Vec<String>,
    pub filming_locations: Vec<String>,
}

impl TitleSummary {
    pub fn from_context(ctx: &TitleContext) -> Self {
        Self {
            id: ctx.id().to_string(),
            title: facet(ctx, "title", ctx.title()),
            kind: facet(ctx, "type", ctx.kind()),
            release_year: facet(ctx, "release year", ctx.release_year()),
            release_date: facet(ctx, "release date", ctx.release_date()),
            runtime: facet(ctx, "runtime", ctx.runtime()),
            runtime_seconds: facet(ctx, "runtime seconds", ctx.runtime_seconds()),
            rating: facet(ctx, "rating", ctx.rating()),
            content_rating: facet(ctx, "content rating", ctx.content_rating()),
            description: facet(ctx, "description", ctx.description()),
            poster_url: facet(ctx, "poster", ctx.poster_url()),
            genres: facet(ctx, "genres", ctx.genres()).unwrap_or_default(),
            directors: people(ctx, Relation::Director),
            creators: people(ctx, Relation::Creator),
            main_actors: people(ctx, Relation::Actor),
            countries: info(ctx, InfoCategory::Country),
            languages: info(ctx, InfoCategory::Language),
            companies: info(ctx, InfoCategory::Company),
            akas: info(ctx, InfoCategory::Aka),
            filming_locations: info(ctx, InfoCategory::FilmingLocation),
        }
    }
}

fn facet<T>(ctx: &TitleContext, name: &str, result: Result<T, LookupError>) -> Option<T> {
    result
        .inspect_err(|e| tracing::debug!("No {} for {}: {}", name, ctx.id(), e))
        .ok()
}

fn people(ctx: &TitleContext, relation: Relation) -> Vec<Person> {
    match ctx.people(relation, Render::List, true) {
        Ok(Listing::Items(people)) => people,
        _ => Vec::new(),
    }
}

fn info(ctx: &TitleContext, category: InfoCategory) -> Vec<String> {
    match ctx.info(category, Render::List) {
        Ok(Listing::Items(items)) => items,
        _ => Vec::new(),
    }
}
