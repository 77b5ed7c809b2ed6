//! Title lookup - resolves a query to a title and extracts its metadata.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - our types, including the single
//!   [`LookupError`] outcome every operation reports failures through
//! - **Schema** (`schema.rs`) - the only place that knows selectors, URL
//!   shapes and JSON paths of the upstream pages
//! - **Fetcher** (`fetcher.rs`) - the network seam, mockable in tests
//! - **Resolver** (`resolver.rs`) - query to canonical identifier
//! - **Context** (`context.rs`) - one fetched title page plus its merged
//!   details record, with the facet accessors in `fields.rs`, `people.rs`
//!   and `info.rs`
//! - **Cast** (`cast.rs`) - the full credits table, one extra fetch per row
//! - **Service** (`service.rs`) - the per-facet lookup surface
//!
//! # Usage
//!
//! ```ignore
//! use lookup::{TitleService, Render};
//!
//! let service = TitleService::connect("https://www.imdb.com", DEFAULT_USER_AGENT)?;
//!
//! // One facet per call
//! let year = service.release_year("the matrix").await?;
//!
//! // Several facets from one page fetch
//! let ctx = service.open("tt0133093").await?;
//! println!("{} ({})", ctx.title()?, ctx.runtime()?);
//! ```

pub mod cast;
pub mod context;
pub mod details;
pub mod domain;
pub mod fetcher;
pub mod fields;
pub mod info;
pub mod people;
pub mod resolver;
pub mod schema;
pub mod service;
pub mod text;

pub use context::TitleContext;
pub use domain::{
    CastEntry, CastOptions, FailureKind, Identifier, InfoCategory, Listing, LookupError, Person,
    Relation, Render,
};
pub use fetcher::{DEFAULT_USER_AGENT, DocumentFetcher, HttpFetcher};
pub use schema::{DEFAULT_BASE_URL, ImdbIpcSchema, SiteSchema};
pub use service::{TitleService, TitleSummary};
