//! Info lists from the title page's details section (languages, countries,
//! companies, alternative titles, filming locations).

use scraper::Html;

use super::context::TitleContext;
use super::domain::{InfoCategory, Listing, LookupError, Render};
use super::schema::selector;
use super::text::{clean_text, list_to_text};

impl TitleContext {
    /// Items listed for `category`.
    ///
    /// Link texts in the category's region are used when there are any;
    /// otherwise plain text nodes from the same region.
    pub fn info(
        &self,
        category: InfoCategory,
        render: Render,
    ) -> Result<Listing<String>, LookupError> {
        let items = match self.info_items(category) {
            Ok(items) => items,
            Err(e) if render == Render::List => {
                tracing::debug!("No {:?} info for {}: {}", category, self.id(), e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(match render {
            Render::List => Listing::Items(items),
            Render::Prose => Listing::Prose(list_to_text(&items)),
        })
    }

    fn info_items(&self, category: InfoCategory) -> Result<Vec<String>, LookupError> {
        let (anchors, fallback) = self.schema().info_selectors(category);
        let document = Html::parse_document(self.page());

        let items = select_texts(&document, &anchors)?;
        if !items.is_empty() {
            return Ok(items);
        }
        select_texts(&document, &fallback)
    }
}

fn select_texts(document: &Html, css: &str) -> Result<Vec<String>, LookupError> {
    let sel = selector(css)?;
    Ok(document
        .select(&sel)
        .map(|node| clean_text(&node.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::context::fixtures::context;
    use crate::test_utils::{base_state, base_structured, info_section};

    fn details_body() -> String {
        [
            info_section("title-details-origin", &["United States", "Australia"], &[]),
            info_section("title-details-languages", &["English"], &[]),
            info_section(
                "title-details-companies",
                &["Warner Bros.", "Village Roadshow Pictures", "Groucho II Film Partnership"],
                &[],
            ),
            info_section("title-details-akas", &[], &["Matrix"]),
        ]
        .concat()
    }

    #[test]
    fn test_anchor_items() {
        let ctx = context(&base_structured(), &base_state(), &details_body());
        let countries = ctx.info(InfoCategory::Country, Render::List).unwrap();
        assert_eq!(
            countries,
            Listing::Items(vec!["United States".to_string(), "Australia".to_string()])
        );
    }

    #[test]
    fn test_prose_rendering() {
        let ctx = context(&base_structured(), &base_state(), &details_body());
        let companies = ctx.info(InfoCategory::Company, Render::Prose).unwrap();
        assert_eq!(
            companies,
            Listing::Prose(
                "Warner Bros., Village Roadshow Pictures and Groucho II Film Partnership"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_falls_back_to_text_nodes_without_anchors() {
        let ctx = context(&base_structured(), &base_state(), &details_body());
        let akas = ctx.info(InfoCategory::Aka, Render::List).unwrap();
        assert_eq!(akas, Listing::Items(vec!["Matrix".to_string()]));
    }

    #[test]
    fn test_anchors_take_precedence_over_text_nodes() {
        let body = info_section("title-details-languages", &["English"], &["(dubbed)"]);
        let ctx = context(&base_structured(), &base_state(), &body);
        let languages = ctx.info(InfoCategory::Language, Render::List).unwrap();
        assert_eq!(languages, Listing::Items(vec!["English".to_string()]));
    }

    #[test]
    fn test_missing_region_is_empty() {
        let ctx = context(&base_structured(), &base_state(), &details_body());
        let locations = ctx.info(InfoCategory::FilmingLocation, Render::List).unwrap();
        assert_eq!(locations, Listing::Items(vec![]));
    }
}
