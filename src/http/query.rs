//! Query string parsing
//!
//! Decodes `application/x-www-form-urlencoded` query strings into an ordered
//! list of key/value pairs.

/// Decoded query parameters of a request, in the order they appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse the raw query string (without leading `?`)
    ///
    /// A bare key such as `?model` decodes to `("model", "")`.
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Value of the first parameter named exactly `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none() {
        assert_eq!(QueryParams::parse(None), QueryParams::default());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(QueryParams::parse(Some("")), QueryParams::default());
    }

    #[test]
    fn test_parse_pairs() {
        let params = QueryParams::parse(Some("model=abc&not-model=def"));
        assert_eq!(params.get("model"), Some("abc"));
        assert_eq!(params.get("not-model"), Some("def"));
        assert_eq!(params.get("Model"), None);
    }

    #[test]
    fn test_parse_decodes() {
        let params = QueryParams::parse(Some("model=a%20b+c%2C%7Bd%7D"));
        assert_eq!(params.get("model"), Some("a b c,{d}"));
    }

    #[test]
    fn test_bare_and_empty_keys() {
        assert_eq!(QueryParams::parse(Some("model")).get("model"), Some(""));
        assert_eq!(QueryParams::parse(Some("model=")).get("model"), Some(""));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse(Some("model=first&model=second"));
        assert_eq!(params.get("model"), Some("first"));
    }
}
