//! Credited people (directors, creators, main actors).

use serde_json::Value;

use super::context::TitleContext;
use super::domain::{Listing, LookupError, Person, Relation, Render};
use super::text::list_to_text;

impl TitleContext {
    /// People listed under `relation` in the structured data.
    ///
    /// Entries without a name are dropped. With `with_ids` each person also
    /// carries the id parsed from their profile URL, and the result is always
    /// a list.
    ///
    /// A missing or malformed credit array yields an empty list in
    /// [`Render::List`] mode and an error in [`Render::Prose`] mode.
    pub fn people(
        &self,
        relation: Relation,
        render: Render,
        with_ids: bool,
    ) -> Result<Listing<Person>, LookupError> {
        let people = match self.credited(relation, with_ids) {
            Ok(people) => people,
            Err(e) if render == Render::List => {
                tracing::debug!("No {} credits for {}: {}", relation.label(), self.id(), e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        if render == Render::List || with_ids {
            Ok(Listing::Items(people))
        } else {
            let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
            Ok(Listing::Prose(list_to_text(&names)))
        }
    }

    fn credited(&self, relation: Relation, with_ids: bool) -> Result<Vec<Person>, LookupError> {
        let key = self.schema().relation_key(relation);
        let path = format!("/{key}");
        let entries = match self.record().require(&path)? {
            Value::Array(entries) => entries.as_slice(),
            // a single credit is sometimes given as a bare object
            single @ Value::Object(_) => std::slice::from_ref(single),
            _ => return Err(LookupError::parse(path, "expected a list of people")),
        };

        let people = entries
            .iter()
            .filter_map(|entry| {
                let name = entry.get("name")?.as_str()?;
                let id = if with_ids {
                    entry
                        .get("url")
                        .and_then(Value::as_str)
                        .and_then(|url| self.schema().person_id(url))
                        .map(str::to_string)
                } else {
                    None
                };
                Some(Person {
                    name: name.to_string(),
                    role: relation.label().to_string(),
                    id,
                })
            })
            .collect();
        Ok(people)
    }
}
