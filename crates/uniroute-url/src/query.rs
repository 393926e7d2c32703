//! Query string parsing and serialization

use crate::page::PageOptions;
use crate::params::{ParamValue, Params};

/// Split a URL into its path and query parameters.
///
/// The path is everything before the first `?`. The remainder is split on
/// `&`, and each pair on its first `=`:
/// - a pair without `=` maps the key to an empty string
/// - empty segments and empty keys are skipped
/// - a repeated key keeps its last value
pub fn get_url_info(url: &str) -> PageOptions {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let mut params = Params::new();
    for pair in query.into_iter().flat_map(|q| q.split('&')) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() {
            continue;
        }
        params.insert(key.to_string(), ParamValue::Text(value.to_string()));
    }

    PageOptions::new(path, params)
}

/// Serialize parameters as `?k1=v1&k2=v2`. An empty mapping yields `""`.
pub fn query_params(params: &Params) -> String {
    let mut res = String::new();
    for (key, value) in params {
        res.push(if res.is_empty() { '?' } else { '&' });
        res.push_str(key);
        res.push('=');
        res.push_str(&value.to_string());
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ParamValue {
        ParamValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_path_and_params() {
        let info = get_url_info("/pages/a?x=1&name=bob");
        assert_eq!(info.path, "/pages/a");
        assert_eq!(info.params.len(), 2);
        assert_eq!(info.params.get("x"), Some(&text("1")));
        assert_eq!(info.params.get("name"), Some(&text("bob")));
    }

    #[test]
    fn test_parse_without_query() {
        let info = get_url_info("/pages/index");
        assert_eq!(info.path, "/pages/index");
        assert!(info.params.is_empty());

        let info = get_url_info("/pages/index?");
        assert_eq!(info.path, "/pages/index");
        assert!(info.params.is_empty());
    }

    #[test]
    fn test_parse_is_verbatim() {
        let info = get_url_info("/search?q=a%20b&tag=c+d");
        assert_eq!(info.params.get("q"), Some(&text("a%20b")));
        assert_eq!(info.params.get("tag"), Some(&text("c+d")));
    }

    #[test]
    fn test_parse_edge_cases() {
        // Last duplicate wins
        let info = get_url_info("/a?x=1&x=2");
        assert_eq!(info.params.get("x"), Some(&text("2")));

        // Missing `=` gives an empty value
        let info = get_url_info("/a?flag&x=1");
        assert_eq!(info.params.get("flag"), Some(&text("")));

        // Empty segments and empty keys are dropped
        let info = get_url_info("/a?&x=1&&=orphan&");
        assert_eq!(info.params.len(), 1);

        // Only the first `=` separates key from value
        let info = get_url_info("/a?token=abc==");
        assert_eq!(info.params.get("token"), Some(&text("abc==")));

        // Only the first `?` separates path from query
        let info = get_url_info("/a?next=/b?c=1");
        assert_eq!(info.path, "/a");
        assert_eq!(info.params.get("next"), Some(&text("/b?c=1")));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(query_params(&Params::new()), "");

        let mut params = Params::new();
        params.insert("x".to_string(), text("1"));
        assert_eq!(query_params(&params), "?x=1");

        params.insert("y".to_string(), ParamValue::Number(2.0));
        params.insert("empty".to_string(), text(""));
        assert_eq!(query_params(&params), "?empty=&x=1&y=2");
    }

    #[test]
    fn test_round_trip() {
        let mut params = Params::new();
        params.insert("id".to_string(), text("42"));
        params.insert("from".to_string(), text("/pages/home"));
        params.insert("blank".to_string(), text(""));

        let url = format!("/pages/detail{}", query_params(&params));
        let info = get_url_info(&url);
        assert_eq!(info.path, "/pages/detail");
        assert_eq!(info.params, params);
    }

    #[test]
    fn test_round_trip_stringifies_numbers() {
        let mut params = Params::new();
        params.insert("page".to_string(), ParamValue::Number(3.0));

        let info = get_url_info(&format!("/list{}", query_params(&params)));
        assert_eq!(info.params.get("page"), Some(&text("3")));
    }
}
