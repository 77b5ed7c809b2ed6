//! Site schema adapter.
//!
//! This is the ONLY place that knows what the upstream pages look like:
//! URL shapes, CSS selectors, table column positions and JSON pointer paths
//! into the embedded data blocks. If the site changes its markup, only the
//! schema implementation needs to change - the extractors just ask it where
//! to look.

use scraper::Selector;

use super::domain::{Identifier, InfoCategory, LookupError, Relation};

/// Default host for [`ImdbIpcSchema`]
pub const DEFAULT_BASE_URL: &str = "https://www.imdb.com";

/// Scalar facets read from the details record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    ContentRating,
    /// Type tag (Movie, TVSeries, ...)
    Kind,
    Poster,
    Genre,
    Rating,
    /// ISO-8601 duration token
    Duration,
    DatePublished,
    ReleaseYear,
    RuntimeSeconds,
    /// Object with `year`, `month` and `day` parts
    ReleaseDate,
}

/// Column positions inside one cast table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastColumns {
    /// Cell holding the actor link
    pub actor: usize,
    /// Cell holding the character description
    pub character: usize,
}

/// Describes where each piece of data lives for one version of the site.
pub trait SiteSchema: Send + Sync {
    /// Short label for diagnostics.
    fn version(&self) -> &'static str;

    fn search_url(&self, query: &str) -> String;
    fn title_url(&self, id: &Identifier) -> String;
    fn credits_url(&self, id: &Identifier) -> String;

    /// Resolve a link found on a page against the site host.
    fn absolute_url(&self, href: &str) -> String;

    /// Selector for the link of the first search result.
    fn search_result_link(&self) -> &str;

    /// Pull the identifier segment out of a title link.
    fn identifier_from_href<'a>(&self, href: &'a str) -> Option<&'a str>;

    /// Pull the profile id out of a person link.
    fn person_id<'a>(&self, url: &'a str) -> Option<&'a str>;

    /// Selector for the structured-data (JSON-LD) script block.
    fn structured_data_script(&self) -> &str;

    /// Selector for the page-state script block.
    fn page_state_script(&self) -> &str;

    /// JSON pointer of a scalar facet inside the merged details record.
    fn field_path(&self, field: Field) -> &'static str;

    /// Key of the credit array for a relation.
    fn relation_key(&self, relation: Relation) -> &'static str;

    /// Selectors for an info category: anchor nodes first, plain text nodes
    /// as the fallback.
    fn info_selectors(&self, category: InfoCategory) -> (String, String);

    fn cast_table(&self) -> &str;
    fn cast_columns(&self) -> CastColumns;
}

/// Title pages built on the "ipc" component markup with a Next.js state blob.
#[derive(Debug, Clone)]
pub struct ImdbIpcSchema {
    base_url: String,
}

impl ImdbIpcSchema {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn info_test_id(category: InfoCategory) -> &'static str {
        match category {
            InfoCategory::Language => "title-details-languages",
            InfoCategory::Country => "title-details-origin",
            InfoCategory::Company => "title-details-companies",
            InfoCategory::Aka => "title-details-akas",
            InfoCategory::FilmingLocation => "title-details-filminglocations",
        }
    }
}

impl Default for ImdbIpcSchema {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SiteSchema for ImdbIpcSchema {
    fn version(&self) -> &'static str {
        "imdb-ipc"
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/find/?q={}", self.base_url, urlencoding::encode(query))
    }

    fn title_url(&self, id: &Identifier) -> String {
        format!("{}/title/{}/", self.base_url, id)
    }

    fn credits_url(&self, id: &Identifier) -> String {
        format!("{}/title/{}/fullcredits", self.base_url, id)
    }

    fn absolute_url(&self, href: &str) -> String {
        let href = href.trim();
        if href.starts_with("http") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }

    fn search_result_link(&self) -> &str {
        "div.ipc-metadata-list-summary-item__c div a"
    }

    fn identifier_from_href<'a>(&self, href: &'a str) -> Option<&'a str> {
        segment_after(href, "title")
    }

    fn person_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        segment_after(url, "name")
    }

    fn structured_data_script(&self) -> &str {
        r#"script[type="application/ld+json"]"#
    }

    fn page_state_script(&self) -> &str {
        r#"script[type="application/json"]"#
    }

    fn field_path(&self, field: Field) -> &'static str {
        match field {
            Field::Name => "/name",
            Field::Description => "/description",
            Field::ContentRating => "/contentRating",
            Field::Kind => "/@type",
            Field::Poster => "/image",
            Field::Genre => "/genre",
            Field::Rating => "/aggregateRating/ratingValue",
            Field::Duration => "/duration",
            Field::DatePublished => "/datePublished",
            Field::ReleaseYear => "/props/pageProps/aboveTheFoldData/releaseYear/year",
            Field::RuntimeSeconds => "/props/pageProps/aboveTheFoldData/runtime/seconds",
            Field::ReleaseDate => "/props/pageProps/aboveTheFoldData/releaseDate",
        }
    }

    fn relation_key(&self, relation: Relation) -> &'static str {
        match relation {
            Relation::Director => "director",
            Relation::Creator => "creator",
            Relation::Actor => "actor",
        }
    }

    fn info_selectors(&self, category: InfoCategory) -> (String, String) {
        let region = format!(
            r#"li[data-testid="{}"] div.ipc-metadata-list-item__content-container"#,
            Self::info_test_id(category)
        );
        (format!("{region} a"), format!("{region} span"))
    }

    fn cast_table(&self) -> &str {
        "table.cast_list"
    }

    fn cast_columns(&self) -> CastColumns {
        CastColumns {
            actor: 1,
            character: 3,
        }
    }
}

/// Parse a CSS selector, reporting a bad one as a parse failure.
pub(crate) fn selector(css: &str) -> Result<Selector, LookupError> {
    Selector::parse(css).map_err(|e| LookupError::parse(format!("selector `{css}`"), e))
}

/// Path segment following `marker` in a URL, ignoring query and fragment.
fn segment_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut segments = path.split('/');
    segments.find(|segment| *segment == marker)?;
    segments.next().filter(|segment| !segment.is_empty())
}
