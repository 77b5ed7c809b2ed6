//! Title lookup commands.

use tokio::runtime::Runtime;

use super::FacetArg;
use crate::error::ResultExt;
use crate::lookup::text::list_to_text;
use crate::lookup::{CastOptions, Listing, LookupError, Person, Render, TitleService};

/// Options for `cmd_cast`
pub struct CastArgs {
    pub options: CastOptions,
    pub json: bool,
}

/// Resolve a query and print its canonical id
pub fn cmd_resolve(rt: &Runtime, service: &TitleService, query: &str) -> anyhow::Result<()> {
    let id = rt
        .block_on(service.resolve(query))
        .with_context(format!("resolving {query:?}"))?;
    println!("{id}");
    Ok(())
}

/// Print a single facet
pub fn cmd_get(
    rt: &Runtime,
    service: &TitleService,
    query: &str,
    facet: FacetArg,
    prose: bool,
    ids: bool,
    seconds: bool,
) -> anyhow::Result<()> {
    let render = if prose { Render::Prose } else { Render::List };

    let lines = rt
        .block_on(async {
            let lines = match facet {
                FacetArg::Title => vec![service.title(query).await?],
                FacetArg::Year => vec![service.release_year(query).await?.to_string()],
                FacetArg::Directors => person_lines(service.directors(query, render, ids).await?),
                FacetArg::Creators => person_lines(service.creators(query, render, ids).await?),
                FacetArg::Actors => person_lines(service.main_actors(query, render, ids).await?),
                FacetArg::Countries => text_lines(service.countries(query, render).await?),
                FacetArg::Languages => text_lines(service.languages(query, render).await?),
                FacetArg::Companies => text_lines(service.companies(query, render).await?),
                FacetArg::Akas => text_lines(service.akas(query, render).await?),
                FacetArg::FilmingLocations => {
                    text_lines(service.filming_locations(query, render).await?)
                }
                FacetArg::Genres => {
                    let genres = service.genres(query).await?;
                    if prose {
                        vec![list_to_text(&genres)]
                    } else {
                        genres
                    }
                }
                FacetArg::Type => vec![service.kind(query).await?],
                FacetArg::Runtime if seconds => {
                    vec![service.runtime_seconds(query).await?.to_string()]
                }
                FacetArg::Runtime => vec![service.runtime(query).await?],
                FacetArg::ReleaseDate => vec![service.release_date(query).await?],
                FacetArg::Description => vec![service.description(query).await?],
                FacetArg::ContentRating => vec![service.content_rating(query).await?],
                FacetArg::Rating => vec![service.rating(query).await?.to_string()],
                FacetArg::Poster => vec![service.poster_url(query).await?],
            };
            Ok::<_, LookupError>(lines)
        })
        .with_context(format!("looking up {query:?}"))?;

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Print every facet from the title page
pub fn cmd_show(rt: &Runtime, service: &TitleService, query: &str, json: bool) -> anyhow::Result<()> {
    let summary = rt
        .block_on(service.summary(query))
        .with_context(format!("looking up {query:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("✓ {}", summary.id);
    println!();
    let scalars = [
        ("Title", summary.title),
        ("Type", summary.kind),
        ("Year", summary.release_year.map(|y| y.to_string())),
        ("Released", summary.release_date),
        ("Runtime", summary.runtime),
        ("Rating", summary.rating.map(|r| r.to_string())),
        ("Rated", summary.content_rating),
        ("Poster", summary.poster_url),
    ];
    for (label, value) in scalars {
        if let Some(value) = value {
            println!("  {label:<10} {value}");
        }
    }

    let lists = [
        ("Genres", summary.genres),
        ("Directors", names(&summary.directors)),
        ("Creators", names(&summary.creators)),
        ("Starring", names(&summary.main_actors)),
        ("Countries", summary.countries),
        ("Languages", summary.languages),
        ("Companies", summary.companies),
        ("Also known", summary.akas),
        ("Filmed at", summary.filming_locations),
    ];
    for (label, items) in lists {
        if !items.is_empty() {
            println!("  {label:<10} {}", list_to_text(&items));
        }
    }

    if let Some(description) = summary.description {
        println!();
        println!("  {description}");
    }
    Ok(())
}

/// Print the cast list
pub fn cmd_cast(
    rt: &Runtime,
    service: &TitleService,
    query: &str,
    args: CastArgs,
) -> anyhow::Result<()> {
    let cast = rt
        .block_on(service.cast(query, args.options))
        .with_context(format!("extracting cast for {query:?}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cast)?);
        return Ok(());
    }

    if cast.is_empty() {
        println!("No cast entries found.");
        return Ok(());
    }
    for entry in &cast {
        match &entry.id {
            Some(id) => println!("{} [{}] as {}", entry.actor, id, entry.character),
            None => println!("{} as {}", entry.actor, entry.character),
        }
    }
    Ok(())
}

fn names(people: &[Person]) -> Vec<String> {
    people.iter().map(|p| p.name.clone()).collect()
}

fn person_lines(listing: Listing<Person>) -> Vec<String> {
    match listing {
        Listing::Items(people) => people
            .into_iter()
            .map(|p| match p.id {
                Some(id) => format!("{} ({})", p.name, id),
                None => p.name,
            })
            .collect(),
        Listing::Prose(text) => vec![text],
    }
}

fn text_lines(listing: Listing<String>) -> Vec<String> {
    match listing {
        Listing::Items(items) => items,
        Listing::Prose(text) => vec![text],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_lines() {
        let people = Listing::Items(vec![
            Person {
                name: "Lana Wachowski".to_string(),
                role: "director".to_string(),
                id: Some("nm0905154".to_string()),
            },
            Person {
                name: "Lilly Wachowski".to_string(),
                role: "director".to_string(),
                id: None,
            },
        ]);
        assert_eq!(
            person_lines(people),
            vec!["Lana Wachowski (nm0905154)", "Lilly Wachowski"]
        );
    }

    #[test]
    fn test_prose_is_single_line() {
        let listing = Listing::Prose("English and Japanese".to_string());
        assert_eq!(text_lines(listing), vec!["English and Japanese"]);
    }
}
