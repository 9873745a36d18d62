//! GraphQL-over-HTTP configuration client.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use vitrine_render::RequestContext;

use crate::error::FetchError;
use crate::types::{Envelope, GET_STORE_CONFIG, StoreConfigPayload};

/// The seam between the bootstrap pass and the network.
///
/// The bootstrap pass only ever talks to a `ConfigSource`, so tests swap the
/// HTTP client for a counting or failing stub.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetches remote store configuration under the inbound request's
    /// session (cookies/authorization are forwarded).
    ///
    /// # Errors
    ///
    /// Any [`FetchError`] fails the whole request; there is no degraded
    /// render with missing configuration.
    async fn fetch_store_config(
        &self,
        ctx: &RequestContext,
    ) -> Result<StoreConfigPayload, FetchError>;
}

/// HTTP client for the store-configuration GraphQL endpoint.
#[derive(Clone)]
pub struct HttpConfigClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConfigClient {
    /// Creates a client for the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Builds the outbound header set, forwarding session headers from the
    /// inbound request so the endpoint evaluates the query as the caller.
    fn headers(ctx: &RequestContext) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(cookies) = ctx.cookies() {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(cookies)
                    .map_err(|err| FetchError::Header(format!("cookie: {err}")))?,
            );
        }
        if let Some(authorization) = ctx.authorization() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(authorization)
                    .map_err(|err| FetchError::Header(format!("authorization: {err}")))?,
            );
        }

        Ok(headers)
    }

    /// Decodes a successful response body into the payload.
    fn decode(body: &str) -> Result<StoreConfigPayload, FetchError> {
        let envelope: Envelope = serde_json::from_str(body)?;
        envelope.into_payload()
    }
}

#[async_trait]
impl ConfigSource for HttpConfigClient {
    async fn fetch_store_config(
        &self,
        ctx: &RequestContext,
    ) -> Result<StoreConfigPayload, FetchError> {
        let headers = Self::headers(ctx)?;
        let body = serde_json::json!({
            "operationName": "getStoreConfig",
            "query": GET_STORE_CONFIG,
        });

        tracing::debug!(endpoint = %self.endpoint, "fetching store configuration");

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|err| FetchError::Http(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Http(err.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Endpoint {
                status: status.as_u16(),
                message: body,
            });
        }

        Self::decode(&body)
    }
}

impl core::fmt::Debug for HttpConfigClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HttpConfigClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_forward_cookie_and_authorization() {
        let ctx = RequestContext::from_headers([
            ("cookie", "session=abc"),
            ("authorization", "Bearer tok"),
            ("x-unrelated", "ignored"),
        ]);

        let headers = HttpConfigClient::headers(&ctx).unwrap();
        assert_eq!(headers.get(COOKIE).unwrap(), "session=abc");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
        assert_eq!(headers.len(), 3); // content-type + the two forwarded
    }

    #[test]
    fn headers_without_session_are_just_content_type() {
        let headers = HttpConfigClient::headers(&RequestContext::empty()).unwrap();
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn invalid_cookie_value_is_rejected() {
        let ctx = RequestContext::from_headers([("cookie", "bad\nvalue")]);
        assert!(matches!(
            HttpConfigClient::headers(&ctx),
            Err(FetchError::Header(_))
        ));
    }

    #[test]
    fn undecodable_body_is_a_json_error() {
        // An HTML error page slipping through with a 200 status, for example.
        let result = HttpConfigClient::decode("<html>maintenance</html>");
        assert!(matches!(result, Err(FetchError::Json(_))));
    }

    #[test]
    fn well_formed_body_decodes_to_a_payload() {
        let body = r#"{ "data": { "storeConfig": { "id": 3, "code": "default" } } }"#;
        let payload = HttpConfigClient::decode(body).unwrap();
        assert_eq!(payload.store_config.id, Some(3));
    }
}
