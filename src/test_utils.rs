//! Test utilities and fixtures for title-scout tests.
//!
//! This module provides markup builders that mimic the pages the extractors
//! read, so pipeline tests can run against a [`MockFetcher`] without touching
//! the network.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{title_page, base_state};
//!
//! let page = title_page(&json!({ "name": "Heat" }), &base_state(), "");
//! let fetcher = MockFetcher::new().with_page(TITLE_URL, page);
//! ```
//!
//! [`MockFetcher`]: crate::lookup::fetcher::mocks::MockFetcher

use serde_json::{Value, json};

/// Identifier used by most fixtures.
pub const TITLE_ID: &str = "tt0133093";

/// Title page URL for [`TITLE_ID`] under the default schema.
pub const TITLE_URL: &str = "https://www.imdb.com/title/tt0133093/";

/// Full credits URL for [`TITLE_ID`] under the default schema.
pub const CREDITS_URL: &str = "https://www.imdb.com/title/tt0133093/fullcredits";

/// Build a title page carrying both embedded JSON blocks.
///
/// `body` is inserted verbatim before the page-state script.
pub fn title_page(structured: &Value, page_state: &Value, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<script type="application/ld+json">{structured}</script>
</head><body>
{body}
<script id="__NEXT_DATA__" type="application/json">{page_state}</script>
</body></html>"#
    )
}

/// A typical structured-data payload.
pub fn base_structured() -> Value {
    json!({
        "@type": "Movie",
        "name": "The Matrix",
        "description": "When a beautiful stranger leads computer hacker Neo to a forbidding underworld...",
        "image": "https://m.media-amazon.com/images/M/matrix.jpg",
        "contentRating": "R",
        "genre": ["Action", "Sci-Fi"],
        "duration": "PT2H16M",
        "datePublished": "1999-03-31",
        "aggregateRating": { "@type": "AggregateRating", "ratingValue": 8.7, "ratingCount": 2100000 },
        "director": [
            { "@type": "Person", "url": "/name/nm0905154/", "name": "Lana Wachowski" },
            { "@type": "Person", "url": "/name/nm0905152/", "name": "Lilly Wachowski" }
        ],
        "actor": [
            { "@type": "Person", "url": "/name/nm0000206/", "name": "Keanu Reeves" },
            { "@type": "Person", "url": "/name/nm0000401/", "name": "Laurence Fishburne" },
            { "@type": "Person", "url": "/name/nm0005251/", "name": "Carrie-Anne Moss" }
        ]
    })
}

/// A typical page-state payload.
pub fn base_state() -> Value {
    json!({
        "props": {
            "pageProps": {
                "aboveTheFoldData": {
                    "releaseYear": { "year": 1999 },
                    "runtime": { "seconds": 8160 },
                    "releaseDate": { "year": 1999, "month": 3, "day": 31 }
                }
            }
        }
    })
}

/// One info region with either anchor or plain-text items.
pub fn info_section(test_id: &str, anchors: &[&str], spans: &[&str]) -> String {
    let mut items = String::new();
    for anchor in anchors {
        items.push_str(&format!(r#"<li><a href="/search/?q={anchor}">{anchor}</a></li>"#));
    }
    for span in spans {
        items.push_str(&format!("<li><span>{span}</span></li>"));
    }
    format!(
        r#"<ul><li data-testid="{test_id}"><span>Label</span>
<div class="ipc-metadata-list-item__content-container"><ul>{items}</ul></div></li></ul>"#
    )
}

/// A search results page whose entries link to `hrefs`, in order.
pub fn search_page(hrefs: &[&str]) -> String {
    let mut entries = String::new();
    for href in hrefs {
        entries.push_str(&format!(
            r#"<li><div class="ipc-metadata-list-summary-item__c"><div><a href="{href}">Result</a></div></div></li>"#
        ));
    }
    format!("<html><body><ul>{entries}</ul></body></html>")
}

/// A full credits page. Each row is `(person id, actor name, character cell text)`.
pub fn credits_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from(
        r#"<tr><td colspan="4" class="castlist_label">Cast overview, first billed only:</td></tr>"#,
    );
    for (person_id, actor, character) in rows {
        body.push_str(&format!(
            r#"<tr class="odd">
<td class="primary_photo"><a href="/name/{person_id}/"><img alt="{actor}"></a></td>
<td><a href="/name/{person_id}/">
    {actor}
</a></td>
<td class="ellipsis">...</td>
<td class="character">
    {character}
</td>
</tr>"#
        ));
    }
    format!(r#"<html><body><table class="cast_list">{body}</table></body></html>"#)
}

/// URL of an actor page under the default schema.
pub fn person_url(person_id: &str) -> String {
    format!("https://www.imdb.com/name/{person_id}/")
}

/// An actor page with a portrait in its structured-data block.
pub fn person_page(image: &str) -> String {
    let structured = json!({ "@type": "Person", "image": image });
    format!(
        r#"<html><head><script type="application/ld+json">{structured}</script></head><body></body></html>"#
    )
}
