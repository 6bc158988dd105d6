//! Content model structs for entries and search results.

use crate::markup;
use serde::{Deserialize, Serialize};

/// A single encyclopedia entry as read from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title, also the storage key stem
    pub title: String,

    /// Raw markup content
    pub content: String,
}

impl Entry {
    /// Render the content to an HTML fragment
    pub fn to_html(&self) -> String {
        markup::render(&self.content)
    }
}

/// Outcome of a title search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "titles", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A stored title equals the query ignoring case
    ExactMatch(String),
    /// Titles containing the query ignoring case, in listing order
    Candidates(Vec<String>),
    NoMatch,
}

impl SearchOutcome {
    /// All titles carried by this outcome
    pub fn titles(&self) -> Vec<&str> {
        match self {
            SearchOutcome::ExactMatch(title) => vec![title.as_str()],
            SearchOutcome::Candidates(titles) => titles.iter().map(String::as_str).collect(),
            SearchOutcome::NoMatch => Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, SearchOutcome::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_to_html() {
        let entry = Entry {
            title: "CSS".into(),
            content: "# CSS\n".into(),
        };
        assert_eq!(entry.to_html(), "<h1>CSS</h1>");
    }

    #[test]
    fn test_outcome_titles() {
        assert_eq!(SearchOutcome::ExactMatch("Git".into()).titles(), vec!["Git"]);
        assert_eq!(
            SearchOutcome::Candidates(vec!["CSS".into(), "HTML".into()]).titles(),
            vec!["CSS", "HTML"]
        );
        assert!(SearchOutcome::NoMatch.titles().is_empty());
        assert!(!SearchOutcome::NoMatch.is_match());
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(SearchOutcome::ExactMatch("Python".into())).unwrap();
        assert_eq!(json["kind"], "exact_match");
        assert_eq!(json["titles"], "Python");

        let json = serde_json::to_value(SearchOutcome::NoMatch).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "no_match" }));
    }
}
