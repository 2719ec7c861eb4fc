use std::collections::BTreeSet;

use serde::Deserialize;

/// Case ids returned by one scoring call. Created fresh per question and
/// replaced wholesale by the next one; never merged across questions.
pub type RetrievedIdSet = BTreeSet<String>;

#[derive(Debug, Deserialize)]
struct RawScoringResponse {
    #[serde(default)]
    ids: Vec<String>,
}

/// Parses a scoring response body into the retrieved-id set.
///
/// A missing `ids` field is an empty retrieval, not an error; duplicate
/// ids in the response collapse into the set.
pub(super) fn parse_scoring_response(body: &str) -> serde_json::Result<RetrievedIdSet> {
    let raw: RawScoringResponse = serde_json::from_str(body)?;
    Ok(raw.ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_into_a_set() {
        let ids = parse_scoring_response(r#"{"ids":["615468","1127907"]}"#).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("615468"));
        assert!(ids.contains("1127907"));
    }

    #[test]
    fn collapses_duplicate_ids() {
        let ids = parse_scoring_response(r#"{"ids":["615468","615468","615468"]}"#).unwrap();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn missing_ids_field_is_an_empty_retrieval() {
        let ids = parse_scoring_response(r#"{"answer":"no ids here"}"#).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn empty_ids_array_is_an_empty_retrieval() {
        let ids = parse_scoring_response(r#"{"ids":[]}"#).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(parse_scoring_response("<html>502 Bad Gateway</html>").is_err());
    }
}
