//! API likelihood heuristic.
//!
//! Scores response headers and the probed URL against signals that usually
//! mark an API endpoint rather than a web page. The result is a hint for
//! prioritising manual review, nothing more.

use reqwest::header::{HeaderMap, CONTENT_TYPE};

/// Scoring rules for the API classifier.
///
/// `Default` holds the standard rules: an API-ish content type scores 2, each
/// API-ish header scores 1, an API-ish URL scores 1, and a total of 2 or more
/// means "likely API". All markers are matched case-insensitively and should
/// be given in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHeuristics {
    /// Substrings of `Content-Type` that indicate machine-readable output
    pub content_type_markers: Vec<String>,
    /// Points for a matching content type (counted once)
    pub content_type_weight: u32,
    /// Header names typical of APIs
    pub api_headers: Vec<String>,
    /// Points per matching header present
    pub header_weight: u32,
    /// Substrings of the URL typical of APIs
    pub url_markers: Vec<String>,
    /// Points for a matching URL (counted once)
    pub url_weight: u32,
    /// Minimum score for a likely API
    pub threshold: u32,
}

impl Default for ApiHeuristics {
    fn default() -> Self {
        Self {
            content_type_markers: to_strings(&["json", "xml", "api"]),
            content_type_weight: 2,
            api_headers: to_strings(&[
                "x-api-version",
                "x-ratelimit-limit",
                "access-control-allow-origin",
            ]),
            header_weight: 1,
            url_markers: to_strings(&["api", "rest", "graphql", "endpoint"]),
            url_weight: 1,
            threshold: 2,
        }
    }
}

impl ApiHeuristics {
    /// Cumulative score for a response.
    pub fn score(&self, headers: &HeaderMap, url: &str) -> u32 {
        let mut score = 0;

        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();
        if contains_any(&content_type, &self.content_type_markers) {
            score += self.content_type_weight;
        }

        // HeaderMap names are stored lowercase, lookups are case-insensitive
        let matching_headers = self
            .api_headers
            .iter()
            .filter(|name| headers.contains_key(name.as_str()))
            .count() as u32;
        score += matching_headers * self.header_weight;

        if contains_any(&url.to_lowercase(), &self.url_markers) {
            score += self.url_weight;
        }

        score
    }

    /// True when the score reaches the threshold.
    pub fn is_likely_api(&self, headers: &HeaderMap, url: &str) -> bool {
        self.score(headers, url) >= self.threshold
    }
}

/// Classifies a response with the default rules.
pub fn analyze_api_indicators(headers: &HeaderMap, url: &str) -> bool {
    ApiHeuristics::default().is_likely_api(headers, url)
}

fn contains_any(haystack: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker.as_str()))
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).expect("valid header name"),
                HeaderValue::from_str(value).expect("valid header value"),
            );
        }
        map
    }

    #[test]
    fn test_json_content_type_alone_is_api() {
        let h = headers(&[("Content-Type", "application/json")]);
        assert_eq!(ApiHeuristics::default().score(&h, "https://www.example.com"), 2);
        assert!(analyze_api_indicators(&h, "https://www.example.com"));
    }

    #[test]
    fn test_single_header_is_not_api() {
        let h = headers(&[("X-RateLimit-Limit", "100")]);
        assert_eq!(ApiHeuristics::default().score(&h, "https://foo.example.com"), 1);
        assert!(!analyze_api_indicators(&h, "https://foo.example.com"));
    }

    #[test]
    fn test_two_headers_are_api() {
        let h = headers(&[
            ("X-RateLimit-Limit", "100"),
            ("Access-Control-Allow-Origin", "*"),
        ]);
        assert_eq!(ApiHeuristics::default().score(&h, "https://foo.example.com"), 2);
        assert!(analyze_api_indicators(&h, "https://foo.example.com"));
    }

    #[test]
    fn test_header_weights_are_cumulative() {
        let h = headers(&[
            ("x-api-version", "3"),
            ("x-ratelimit-limit", "100"),
            ("access-control-allow-origin", "*"),
        ]);
        assert_eq!(ApiHeuristics::default().score(&h, "https://foo.example.com"), 3);
    }

    #[test]
    fn test_header_plus_url_is_api() {
        let h = headers(&[("Access-Control-Allow-Origin", "*")]);
        assert!(analyze_api_indicators(&h, "https://GraphQL.example.com"));
    }

    #[test]
    fn test_url_alone_is_not_api() {
        let h = headers(&[("Content-Type", "text/html; charset=utf-8")]);
        assert_eq!(ApiHeuristics::default().score(&h, "https://api.example.com"), 1);
        assert!(!analyze_api_indicators(&h, "https://api.example.com"));
    }

    #[test]
    fn test_content_type_is_case_insensitive() {
        let h = headers(&[("content-type", "Application/XML")]);
        assert!(analyze_api_indicators(&h, "http://example.com"));
    }

    #[test]
    fn test_content_type_counts_once() {
        // "api" and "json" both match, still a single +2
        let h = headers(&[("Content-Type", "application/vnd.api+json")]);
        assert_eq!(ApiHeuristics::default().score(&h, "http://example.com"), 2);
    }

    #[test]
    fn test_empty_response_scores_zero() {
        assert_eq!(
            ApiHeuristics::default().score(&HeaderMap::new(), "http://www.example.com"),
            0
        );
    }

    #[test]
    fn test_custom_threshold() {
        let strict = ApiHeuristics {
            threshold: 3,
            ..Default::default()
        };
        let h = headers(&[("Content-Type", "application/json")]);
        assert!(!strict.is_likely_api(&h, "https://www.example.com"));
        assert!(strict.is_likely_api(&h, "https://api.example.com"));
    }
}
