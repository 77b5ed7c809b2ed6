//! Text helpers shared by the extractors.

/// Join items into prose: `["A", "B", "C"]` becomes `"A, B and C"`.
pub fn list_to_text<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Drop line breaks and tabs, trim, and collapse runs of whitespace.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
