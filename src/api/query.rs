// Query string parsing for API requests

use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` parameters
///
/// The first occurrence of a key wins and empty values count as absent, so
/// `?date=` and a missing `date` behave the same.
#[derive(Debug, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut params = HashMap::new();
        if let Some(query) = query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                if value.is_empty() {
                    continue;
                }
                params
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_and_first_wins() {
        let q = QueryParams::parse(Some("action=get-file&path=20240101%2Fjane%2Fmy+clip.mp4&action=x"));
        assert_eq!(q.get("action"), Some("get-file"));
        assert_eq!(q.get("path"), Some("20240101/jane/my clip.mp4"));
    }

    #[test]
    fn test_blank_and_missing() {
        let q = QueryParams::parse(Some("action=list-stories&date="));
        assert_eq!(q.get("date"), None);
        assert_eq!(QueryParams::parse(None).get("action"), None);
    }
}
