//! Scalar facet accessors.
//!
//! Each accessor reads one path out of the details record and applies the
//! formatting rule for that facet.

use serde_json::Value;

use super::context::TitleContext;
use super::domain::LookupError;
use super::schema::Field;

impl TitleContext {
    pub fn title(&self) -> Result<String, LookupError> {
        self.string_field(Field::Name)
    }

    pub fn description(&self) -> Result<String, LookupError> {
        self.string_field(Field::Description)
    }

    pub fn content_rating(&self) -> Result<String, LookupError> {
        self.string_field(Field::ContentRating)
    }

    /// Type tag, e.g. `Movie` or `TVSeries`.
    pub fn kind(&self) -> Result<String, LookupError> {
        self.string_field(Field::Kind)
    }

    pub fn poster_url(&self) -> Result<String, LookupError> {
        self.string_field(Field::Poster)
    }

    /// Genres; a single genre string is returned as a one-item list.
    pub fn genres(&self) -> Result<Vec<String>, LookupError> {
        let path = self.schema().field_path(Field::Genre);
        match self.record().require(path)? {
            Value::String(genre) => Ok(vec![genre.clone()]),
            Value::Array(genres) => Ok(genres
                .iter()
                .filter_map(|g| g.as_str().map(str::to_string))
                .collect()),
            _ => Err(LookupError::parse(path, "expected a string or list")),
        }
    }

    pub fn release_year(&self) -> Result<i32, LookupError> {
        let path = self.schema().field_path(Field::ReleaseYear);
        let value = self.record().require(path)?;
        as_i64(value)
            .and_then(|year| i32::try_from(year).ok())
            .ok_or_else(|| LookupError::parse(path, "expected a year"))
    }

    /// Aggregate user rating (0-10).
    pub fn rating(&self) -> Result<f64, LookupError> {
        let path = self.schema().field_path(Field::Rating);
        let value = self.record().require(path)?;
        as_f64(value).ok_or_else(|| LookupError::parse(path, "expected a number"))
    }

    /// Runtime in seconds, read from the page-state payload.
    pub fn runtime_seconds(&self) -> Result<u64, LookupError> {
        let path = self.schema().field_path(Field::RuntimeSeconds);
        let value = self.record().require(path)?;
        as_i64(value)
            .and_then(|secs| u64::try_from(secs).ok())
            .ok_or_else(|| LookupError::parse(path, "expected a number of seconds"))
    }

    /// Human-readable runtime such as `2h16`.
    pub fn runtime(&self) -> Result<String, LookupError> {
        let token = self.string_field(Field::Duration)?;
        format_runtime(&token).ok_or_else(|| {
            LookupError::parse(
                self.schema().field_path(Field::Duration),
                format!("unrecognised duration {token:?}"),
            )
        })
    }

    /// Release date as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
    ///
    /// The published date from the structured data wins when present;
    /// otherwise the date is assembled from the page-state parts.
    pub fn release_date(&self) -> Result<String, LookupError> {
        let published = self
            .record()
            .get(self.schema().field_path(Field::DatePublished))
            .and_then(Value::as_str)
            .filter(|date| !date.is_empty());
        if let Some(date) = published {
            return Ok(date.to_string());
        }

        let path = self.schema().field_path(Field::ReleaseDate);
        let parts = self.record().require(path)?;
        let year = parts
            .get("year")
            .and_then(as_i64)
            .ok_or_else(|| LookupError::FieldMissing(format!("{path}/year")))?;
        let month = parts.get("month").and_then(as_i64);
        let day = parts.get("day").and_then(as_i64);
        Ok(assemble_release_date(year, month, day))
    }

    fn string_field(&self, field: Field) -> Result<String, LookupError> {
        let path = self.schema().field_path(field);
        match self.record().require(path)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(LookupError::parse(path, "expected a string")),
        }
    }
}

/// Format an ISO-8601 duration token (`PT1H30M`) as `<h>h<mm>`.
///
/// Returns `None` for tokens that aren't hour/minute durations.
pub fn format_runtime(token: &str) -> Option<String> {
    let body = token.strip_prefix("PT")?;
    let (hours, rest) = match body.split_once('H') {
        Some((hours, rest)) => (hours.parse::<u32>().ok()?, rest),
        None => (0, body),
    };
    let (minutes, rest) = match rest.split_once('M') {
        Some((minutes, rest)) => (minutes.parse::<u32>().ok()?, rest),
        None => (0, rest),
    };
    // seconds are dropped
    if !rest.is_empty() && !rest.ends_with('S') {
        return None;
    }
    Some(format!("{hours}h{minutes:02}"))
}

/// Build a date string, truncating to year-month or year when parts are
/// missing. Zero counts as missing; a day without a month is ignored.
pub fn assemble_release_date(year: i64, month: Option<i64>, day: Option<i64>) -> String {
    let mut date = year.to_string();
    if let Some(month) = month.filter(|m| *m > 0) {
        date.push_str(&format!("-{month:02}"));
        if let Some(day) = day.filter(|d| *d > 0) {
            date.push_str(&format!("-{day:02}"));
        }
    }
    date
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::context::fixtures::context;
    use crate::test_utils::{base_state, base_structured};
    use serde_json::json;

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime("PT1H30M").as_deref(), Some("1h30"));
        assert_eq!(format_runtime("PT45M").as_deref(), Some("0h45"));
        assert_eq!(format_runtime("PT1H5M").as_deref(), Some("1h05"));
        assert_eq!(format_runtime("PT5M").as_deref(), Some("0h05"));
        assert_eq!(format_runtime("PT2H").as_deref(), Some("2h00"));
        assert_eq!(format_runtime("PT10H2M").as_deref(), Some("10h02"));
        assert_eq!(format_runtime("PT1H30M15S").as_deref(), Some("1h30"));
    }

    #[test]
    fn test_format_runtime_rejects_garbage() {
        assert_eq!(format_runtime("90 min"), None);
        assert_eq!(format_runtime("PTxH"), None);
        assert_eq!(format_runtime("PT1H30X"), None);
    }

    #[test]
    fn test_assemble_release_date() {
        assert_eq!(assemble_release_date(2020, Some(3), Some(7)), "2020-03-07");
        assert_eq!(assemble_release_date(2020, Some(3), None), "2020-03");
        assert_eq!(assemble_release_date(2020, None, None), "2020");
        assert_eq!(assemble_release_date(2020, None, Some(7)), "2020");
        assert_eq!(assemble_release_date(2020, Some(11), Some(0)), "2020-11");
        assert_eq!(assemble_release_date(1999, Some(12), Some(25)), "1999-12-25");
    }

    #[test]
    fn test_passthrough_fields() {
        let ctx = context(&base_structured(), &base_state(), "");
        assert_eq!(ctx.title().unwrap(), "The Matrix");
        assert_eq!(ctx.kind().unwrap(), "Movie");
        assert_eq!(ctx.content_rating().unwrap(), "R");
        assert!(ctx.description().unwrap().starts_with("When a beautiful stranger"));
        assert_eq!(
            ctx.poster_url().unwrap(),
            "https://m.media-amazon.com/images/M/matrix.jpg"
        );
        assert_eq!(ctx.genres().unwrap(), vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_single_genre_string() {
        let ctx = context(&json!({ "genre": "Drama" }), &json!({}), "");
        assert_eq!(ctx.genres().unwrap(), vec!["Drama"]);
    }

    #[test]
    fn test_nested_fields() {
        let ctx = context(&base_structured(), &base_state(), "");
        assert_eq!(ctx.release_year().unwrap(), 1999);
        assert_eq!(ctx.rating().unwrap(), 8.7);
        assert_eq!(ctx.runtime_seconds().unwrap(), 8160);
        assert_eq!(ctx.runtime().unwrap(), "2h16");
    }

    #[test]
    fn test_release_date_prefers_published() {
        let ctx = context(&base_structured(), &base_state(), "");
        assert_eq!(ctx.release_date().unwrap(), "1999-03-31");
    }

    #[test]
    fn test_release_date_from_parts() {
        let state = json!({
            "props": { "pageProps": { "aboveTheFoldData": {
                "releaseDate": { "year": 2020, "month": 3, "day": null }
            } } }
        });
        let ctx = context(&json!({ "name": "X" }), &state, "");
        assert_eq!(ctx.release_date().unwrap(), "2020-03");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let ctx = context(&json!({ "name": "X" }), &json!({}), "");
        assert!(matches!(ctx.rating(), Err(LookupError::FieldMissing(_))));
        assert!(matches!(ctx.release_year(), Err(LookupError::FieldMissing(_))));
        assert!(matches!(ctx.release_date(), Err(LookupError::FieldMissing(_))));
    }

    #[test]
    fn test_malformed_duration_is_parse_failure() {
        let ctx = context(&json!({ "duration": "two hours" }), &json!({}), "");
        assert!(matches!(ctx.runtime(), Err(LookupError::ParseFailed { .. })));
    }
}
