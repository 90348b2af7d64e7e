//! Request options and URL construction shared by both dialects.

use url::Url;

use crate::Dialect;

/// Query parameters, extra headers and body for a single request.
///
/// Parameters and headers keep insertion order. Headers are applied after the
/// standard ones, so a caller header replaces a standard header of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add `key=value` unless `value` is empty.
    #[must_use]
    pub fn param_nonempty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.param(key, value)
        }
    }

    /// Add `key=value` unless `value` is zero.
    #[must_use]
    pub fn param_nonzero(self, key: &str, value: u64) -> Self {
        if value == 0 {
            self
        } else {
            self.param(key, value.to_string())
        }
    }

    /// Add `key=true` when the flag is set.
    #[must_use]
    pub fn param_flag(self, key: &str, value: bool) -> Self {
        if value { self.param(key, "true") } else { self }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Join `path` onto `base` with exactly one separating slash and replace the
/// query with `params`, applying the dialect's list expansion.
pub(crate) fn resolve_url(
    base: &Url,
    path: &str,
    params: &[(String, String)],
    dialect: Dialect,
) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);

    if !params.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in params {
            if dialect.expands_comma_lists() {
                for item in value.split(',') {
                    query.append_pair(key, item);
                }
            } else {
                query.append_pair(key, value);
            }
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn join_uses_exactly_one_slash() {
        for base in [
            "https://api.twitch.tv/kraken",
            "https://api.twitch.tv/kraken/",
            "https://api.twitch.tv/kraken///",
        ] {
            for path in ["users/1", "/users/1", "///users/1"] {
                let url = resolve_url(&Url::parse(base).unwrap(), path, &[], Dialect::Kraken);
                assert_eq!(
                    url.as_str(),
                    "https://api.twitch.tv/kraken/users/1",
                    "base={base} path={path}"
                );
            }
        }
    }

    #[test]
    fn join_onto_bare_host() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let url = resolve_url(&base, "/ingests", &[], Dialect::Kraken);
        assert_eq!(url.as_str(), "http://localhost:8080/ingests");
    }

    #[test]
    fn kraken_expands_comma_lists_in_order() {
        let base = Url::parse(crate::config::KRAKEN_ENDPOINT).unwrap();
        let params = vec![
            ("channel".to_string(), "23161357,44322889,9".to_string()),
            ("game".to_string(), "Fortnite".to_string()),
        ];
        let url = resolve_url(&base, "streams", &params, Dialect::Kraken);

        assert_eq!(
            pairs(&url),
            vec![
                ("channel".to_string(), "23161357".to_string()),
                ("channel".to_string(), "44322889".to_string()),
                ("channel".to_string(), "9".to_string()),
                ("game".to_string(), "Fortnite".to_string()),
            ]
        );
        assert!(!url.query().unwrap().contains("%2C"));
    }

    #[test]
    fn helix_passes_values_through() {
        let base = Url::parse(crate::config::HELIX_ENDPOINT).unwrap();
        let params = vec![("name".to_string(), "a,b".to_string())];
        let url = resolve_url(&base, "games", &params, Dialect::Helix);
        assert_eq!(
            pairs(&url),
            vec![("name".to_string(), "a,b".to_string())]
        );
    }

    #[test]
    fn no_params_leaves_no_query() {
        let base = Url::parse("https://api.twitch.tv/helix/?stale=1").unwrap();
        let url = resolve_url(&base, "games", &[], Dialect::Helix);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn zero_and_empty_filters_are_omitted() {
        let options = RequestOptions::new()
            .param_nonempty("game", "")
            .param_nonzero("limit", 0)
            .param_flag("trending", false)
            .param_nonempty("language", "en")
            .param_nonzero("offset", 25);
        assert_eq!(
            options.params,
            vec![
                ("language".to_string(), "en".to_string()),
                ("offset".to_string(), "25".to_string()),
            ]
        );
    }
}
