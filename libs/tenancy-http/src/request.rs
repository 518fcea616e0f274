use crate::client::{ClientService, ClientShared};
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::response::HttpResponse;
use bytes::Bytes;
use http::Request;
use http::header::{CONTENT_TYPE, HeaderValue};
use http_body_util::Full;
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceExt;

/// Body type for the request builder
#[derive(Clone, Debug)]
enum BodyKind {
    Empty,
    /// JSON-serialized body (stored as bytes after serialization)
    Json(Bytes),
}

/// HTTP request builder with fluent API
///
/// Created by [`HttpClient::get`](crate::HttpClient::get),
/// [`HttpClient::post`](crate::HttpClient::post) and
/// [`HttpClient::delete`](crate::HttpClient::delete). Requests carry the
/// client's default headers; there are no per-request headers.
#[must_use = "RequestBuilder does nothing until .send() is called"]
pub struct RequestBuilder {
    service: ClientService,
    shared: Arc<ClientShared>,
    method: http::Method,
    url: String,
    body: BodyKind,
}

impl RequestBuilder {
    pub(crate) fn new(
        service: ClientService,
        shared: Arc<ClientShared>,
        method: http::Method,
        url: String,
    ) -> Self {
        Self {
            service,
            shared,
            method,
            url,
            body: BodyKind::Empty,
        }
    }

    /// Set request body as JSON
    ///
    /// Sets `Content-Type: application/json` unless the client's default
    /// headers already carry a content type.
    ///
    /// # Errors
    ///
    /// Returns `Err(HttpError::Json)` if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        let json_bytes = serde_json::to_vec(body)?;
        self.body = BodyKind::Json(Bytes::from(json_bytes));
        Ok(self)
    }

    fn validate_url(&self) -> Result<http::Uri, HttpError> {
        let uri: http::Uri =
            self.url
                .parse()
                .map_err(|e: http::uri::InvalidUri| HttpError::InvalidUri {
                    url: self.url.clone(),
                    kind: InvalidUriKind::ParseError,
                    reason: e.to_string(),
                })?;

        if uri.authority().is_none() {
            return Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingAuthority,
                reason: "missing host/authority".to_owned(),
            });
        }

        match uri.scheme_str() {
            Some("https") => Ok(uri),
            Some("http") => match self.shared.transport_security {
                TransportSecurity::AllowInsecureHttp => Ok(uri),
                TransportSecurity::TlsOnly => Err(HttpError::InvalidScheme {
                    scheme: "http".to_owned(),
                    reason: "HTTPS required (transport security is TlsOnly)".to_owned(),
                }),
            },
            Some(scheme) => Err(HttpError::InvalidScheme {
                scheme: scheme.to_owned(),
                reason: "only http:// and https:// schemes are supported".to_owned(),
            }),
            None => Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingScheme,
                reason: "missing scheme".to_owned(),
            }),
        }
    }

    /// Send the request and return the response
    ///
    /// Any HTTP status is returned as `Ok`; use
    /// [`HttpResponse::error_for_status`] or the checked body readers to turn
    /// non-2xx into an error.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if:
    /// - the URL is invalid
    /// - the URL scheme is not allowed by the transport security mode
    /// - the connection fails or the request times out
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let uri = self.validate_url()?;

        let mut headers = self.shared.default_headers.clone();
        if matches!(self.body, BodyKind::Json(_)) && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let body_bytes = match self.body {
            BodyKind::Empty => Bytes::new(),
            BodyKind::Json(b) => b,
        };

        let mut request = Request::builder()
            .method(self.method)
            .uri(uri)
            .body(Full::new(body_bytes))?;
        *request.headers_mut() = headers;

        tracing::trace!(
            method = %request.method(),
            uri = %request.uri(),
            "sending HTTP request"
        );

        let inner = self.service.oneshot(request).await?;

        Ok(HttpResponse {
            inner,
            max_body_size: self.shared.max_body_size,
        })
    }
}
