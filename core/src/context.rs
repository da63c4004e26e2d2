//! `RequestContext` — one intercepted network request.
//!
//! Ephemeral: created per request by the interception layer, consumed by
//! [`Detector::process`](crate::Detector::process), and discarded.

/// The raw material for one detection attempt.
///
/// The `token` is an opaque caller-supplied correlation value (a tab
/// identifier, a request id, ...). The engine never inspects it; it is
/// handed back to the sink untouched so callers can key their storage.
///
/// # Example
///
/// ```
/// use pixhound::RequestContext;
///
/// let ctx = RequestContext::new("https://tracker.test/collect?en=view", "POST")
///     .with_body(r#"{"en":"purchase"}"#)
///     .with_token(42u32);
///
/// assert_eq!(ctx.method(), "POST");
/// assert_eq!(ctx.token(), &42);
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext<T = ()> {
    url: String,
    method: String,
    body: Option<String>,
    token: T,
}

impl RequestContext<()> {
    /// Create a context with no body and the unit token.
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            body: None,
            token: (),
        }
    }
}

impl<T> RequestContext<T> {
    /// Attach decoded request-body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a raw body buffer, decoding it as UTF-8 (lossily).
    ///
    /// Compressed or otherwise non-textual bodies simply fail to parse
    /// downstream; the engine never attempts to decode them.
    #[must_use]
    pub fn with_body_bytes(mut self, bytes: &[u8]) -> Self {
        self.body = Some(String::from_utf8_lossy(bytes).into_owned());
        self
    }

    /// Attach a correlation token, replacing the current one.
    #[must_use]
    pub fn with_token<U>(self, token: U) -> RequestContext<U> {
        RequestContext {
            url: self.url,
            method: self.method,
            body: self.body,
            token,
        }
    }

    /// The request URL as observed on the wire.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The decoded body text, if any was captured.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The caller's correlation token.
    #[must_use]
    pub fn token(&self) -> &T {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_bytes_are_decoded_lossily() {
        let ctx = RequestContext::new("https://t/x", "POST").with_body_bytes(b"a=1&b=2");
        assert_eq!(ctx.body(), Some("a=1&b=2"));

        let ctx = RequestContext::new("https://t/x", "POST").with_body_bytes(&[0xff, 0xfe]);
        assert!(ctx.body().is_some()); // replacement characters, not an error
    }

    #[test]
    fn token_replacement_keeps_request_fields() {
        let ctx = RequestContext::new("https://t/x", "GET")
            .with_body("b")
            .with_token("tab-7");
        assert_eq!(ctx.url(), "https://t/x");
        assert_eq!(ctx.body(), Some("b"));
        assert_eq!(*ctx.token(), "tab-7");
    }
}
