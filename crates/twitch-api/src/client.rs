//! Dialect-parameterised HTTP client: builds requests, dispatches them and
//! classifies the response status.

use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    USER_AGENT,
};
use reqwest::{Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::request::{RequestOptions, resolve_url};
use crate::{Config, Dialect, ErrorDetail, TwitchError, config, decode, form};

const CLIENT_ID_HEADER: HeaderName = HeaderName::from_static("client-id");
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Status codes treated as success. Anything else, 2xx included, is an error.
pub const ACCEPTED_STATUSES: [u16; 6] = [200, 201, 202, 204, 205, 206];

/// HTTP client bound to one endpoint, one set of credentials and one dialect.
#[derive(Debug, Clone)]
pub struct Client {
    dialect: Dialect,
    base: Url,
    access_token: String,
    client_id: String,
    http: reqwest::Client,
}

impl Client {
    /// Validate `config` and bind it to `dialect`.
    ///
    /// Fails with [`TwitchError::AuthRequired`] when no access token is set
    /// and with [`TwitchError::InvalidUrl`] when the endpoint does not parse.
    pub fn new(config: Config, dialect: Dialect) -> Result<Self, TwitchError> {
        if config.access_token.is_empty() {
            return Err(TwitchError::AuthRequired);
        }

        let endpoint = config
            .endpoint
            .as_deref()
            .unwrap_or_else(|| dialect.default_endpoint());
        let base = Url::parse(endpoint)?;

        Ok(Self {
            dialect,
            base,
            access_token: config.access_token,
            client_id: config.client_id,
            http: config.http.unwrap_or_default(),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Construct the request for `method` on `path` without sending it.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Request, TwitchError> {
        let url = resolve_url(&self.base, path, &options.params, self.dialect);

        let mut headers = HeaderMap::new();
        if !self.access_token.is_empty() {
            let auth = format!("{} {}", self.dialect.auth_scheme(), self.access_token);
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&auth)?);
        }
        if let Some(accept) = self.dialect.accept() {
            headers.insert(ACCEPT, HeaderValue::from_static(accept));
        }
        if !self.client_id.is_empty() {
            headers.insert(CLIENT_ID_HEADER, HeaderValue::from_str(&self.client_id)?);
        }
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            headers.insert(name, HeaderValue::from_str(value)?);
        }

        let mut request = Request::new(method, url);
        if let Some(body) = options.body {
            // Set explicitly; form bodies are handed over as plain bytes.
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
            *request.body_mut() = Some(body.into());
        }
        *request.headers_mut() = headers;

        Ok(request)
    }

    /// Dispatch a built request and reject statuses outside [`ACCEPTED_STATUSES`].
    pub async fn send(&self, request: Request) -> Result<Response, TwitchError> {
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "Sending Twitch API request"
        );
        let resp = self.http.execute(request).await?;
        check_response(resp).await
    }

    /// Build and dispatch a request.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, TwitchError> {
        let request = self.build(method, path, options)?;
        self.send(request).await
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Response, TwitchError> {
        self.request(Method::GET, path, options).await
    }

    pub async fn head(&self, path: &str, options: RequestOptions) -> Result<Response, TwitchError> {
        self.request(Method::HEAD, path, options).await
    }

    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Response, TwitchError> {
        self.request(Method::POST, path, options).await
    }

    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<Response, TwitchError> {
        self.request(Method::PUT, path, options).await
    }

    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, TwitchError> {
        self.request(Method::DELETE, path, options).await
    }

    /// Send `body` form-encoded (see [`crate::form`]) with `method`.
    pub async fn request_form<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
        options: RequestOptions,
    ) -> Result<Response, TwitchError> {
        let encoded = form::to_string(body)?;
        let options = options
            .header(CONTENT_TYPE.as_str(), FORM_CONTENT_TYPE)
            .body(encoded);
        self.request(method, path, options).await
    }

    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        options: RequestOptions,
    ) -> Result<Response, TwitchError> {
        self.request_form(Method::POST, path, body, options).await
    }

    pub async fn put_form<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        options: RequestOptions,
    ) -> Result<Response, TwitchError> {
        self.request_form(Method::PUT, path, body, options).await
    }

    /// GET `path` and decode the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, TwitchError> {
        let resp = self.get(path, options).await?;
        decode::from_response(resp).await
    }
}

async fn check_response(resp: Response) -> Result<Response, TwitchError> {
    let status = resp.status().as_u16();
    if ACCEPTED_STATUSES.contains(&status) {
        return Ok(resp);
    }

    let body = resp.text().await?;
    tracing::warn!(status, "Twitch API returned an error status");

    let detail = decode::from_slice::<ErrorDetail>(body.as_bytes()).ok();
    let message = detail
        .as_ref()
        .map(|d| d.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or(body);

    Err(TwitchError::HttpStatus {
        status,
        message,
        detail,
    })
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use reqwest::Method;

    use super::*;

    fn client(dialect: Dialect, endpoint: &str) -> Client {
        let config = Config::new("tok123", "cid456").with_endpoint(endpoint);
        Client::new(config, dialect).unwrap()
    }

    #[test]
    fn new_rejects_unparsable_endpoint() {
        let config = Config::new("tok", "").with_endpoint("not a url");
        let err = Client::new(config, Dialect::Kraken).unwrap_err();
        assert!(matches!(err, TwitchError::InvalidUrl(_)));
    }

    #[test]
    fn new_requires_access_token() {
        let err = Client::new(Config::default(), Dialect::Helix).unwrap_err();
        assert!(matches!(err, TwitchError::AuthRequired));
    }

    #[test]
    fn new_defaults_to_dialect_endpoint() {
        let c = Client::new(Config::new("tok", ""), Dialect::Helix).unwrap();
        assert_eq!(c.base_url().as_str(), config::HELIX_ENDPOINT);
    }

    #[test]
    fn kraken_headers() {
        let c = client(Dialect::Kraken, config::KRAKEN_ENDPOINT);
        let req = c.build(Method::GET, "/user", RequestOptions::new()).unwrap();
        let h = req.headers();

        assert_eq!(h[AUTHORIZATION], "OAuth tok123");
        assert_eq!(h["Client-ID"], "cid456");
        assert_eq!(h[ACCEPT], "application/vnd.twitchtv.v5+json");
        assert_eq!(h[USER_AGENT], config::USER_AGENT);
        assert!(h.get(CONTENT_LENGTH).is_none());
        assert_eq!(req.url().as_str(), "https://api.twitch.tv/kraken/user");
    }

    #[test]
    fn helix_headers() {
        let c = client(Dialect::Helix, config::HELIX_ENDPOINT);
        let req = c.build(Method::GET, "games", RequestOptions::new()).unwrap();
        let h = req.headers();

        assert_eq!(h[AUTHORIZATION], "Bearer tok123");
        assert_eq!(h["client-id"], "cid456");
        assert!(h.get(ACCEPT).is_none());
    }

    #[test]
    fn client_id_header_omitted_when_unset() {
        let c = Client::new(Config::new("tok", ""), Dialect::Helix).unwrap();
        let req = c.build(Method::GET, "games", RequestOptions::new()).unwrap();
        assert!(req.headers().get("client-id").is_none());
    }

    #[test]
    fn custom_headers_override_standard_ones() {
        let c = client(Dialect::Kraken, config::KRAKEN_ENDPOINT);
        let options = RequestOptions::new()
            .header("Accept", "application/json")
            .header("X-Trace", "abc");
        let req = c.build(Method::GET, "ingests", options).unwrap();

        assert_eq!(req.headers()[ACCEPT], "application/json");
        assert_eq!(req.headers().get_all(ACCEPT).iter().count(), 1);
        assert_eq!(req.headers()["x-trace"], "abc");
    }

    #[test]
    fn body_sets_content_length() {
        let c = client(Dialect::Kraken, config::KRAKEN_ENDPOINT);
        let options = RequestOptions::new().body("status=hello");
        let req = c.build(Method::PUT, "channels/1", options).unwrap();

        assert_eq!(req.headers()[CONTENT_LENGTH], "12");
        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(bytes, b"status=hello");
    }

    #[test]
    fn invalid_custom_header_is_an_error() {
        let c = client(Dialect::Helix, config::HELIX_ENDPOINT);
        let options = RequestOptions::new().header("bad header", "x");
        let err = c.build(Method::GET, "games", options).unwrap_err();
        assert!(matches!(err, TwitchError::InvalidHeaderName(_)));
    }

    #[tokio::test]
    async fn forbidden_status_is_structured_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/kraken/user");
            then.status(403)
                .header("content-type", "application/json")
                .body(r#"{"error":"Forbidden","status":403,"message":"Missing required scope"}"#);
        });

        let c = client(Dialect::Kraken, &server.url("/kraken/"));
        let err = c.get("user", RequestOptions::new()).await.unwrap_err();

        mock.assert();
        match err {
            TwitchError::HttpStatus {
                status,
                message,
                detail,
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Missing required scope");
                assert_eq!(detail.unwrap().error, "Forbidden");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_with_plain_body_keeps_body_as_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/helix/games");
            then.status(500).body("upstream exploded");
        });

        let c = client(Dialect::Helix, &server.url("/helix"));
        let err = c.get("games", RequestOptions::new()).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[tokio::test]
    async fn no_content_is_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/kraken/users/1/follows/channels/2");
            then.status(204);
        });

        let c = client(Dialect::Kraken, &server.url("/kraken"));
        let resp = c
            .delete("users/1/follows/channels/2", RequestOptions::new())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(resp.status().as_u16(), 204);
        assert!(resp.bytes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unlisted_success_code_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/helix/games");
            then.status(203).body("{}");
        });

        let c = client(Dialect::Helix, &server.url("/helix"));
        let err = c.get("games", RequestOptions::new()).await.unwrap_err();
        assert_eq!(err.status(), Some(203));
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        // Nothing listens on port 9 of the loopback interface.
        let c = client(Dialect::Helix, "http://127.0.0.1:9/helix");
        let err = c.get("games", RequestOptions::new()).await.unwrap_err();
        assert!(matches!(err, TwitchError::Transport(_)));
    }

    #[tokio::test]
    async fn put_form_sends_encoded_body() {
        #[derive(Serialize)]
        struct Body {
            status: String,
            delay: u32,
        }

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/kraken/channels/7")
                .header("content-type", "application/x-www-form-urlencoded");
            then.status(200).body("{}");
        });

        let c = client(Dialect::Kraken, &server.url("/kraken"));
        let body = Body {
            status: "hello world".into(),
            delay: 0,
        };
        c.put_form("channels/7", &body, RequestOptions::new())
            .await
            .unwrap();
        mock.assert();
    }
}
