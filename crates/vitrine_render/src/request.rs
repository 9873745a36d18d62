//! Inbound request context and device classification.

use hashbrown::HashMap;

/// Header carrying the client's device classification.
pub const DEVICE_HEADER: &str = "x-device-type";

// ─────────────────────────────────────────────────────────────────────────────
// DeviceType
// ─────────────────────────────────────────────────────────────────────────────

/// Coarse client-type label derived from the [`DEVICE_HEADER`] header.
///
/// The value is free-form: recognized and unrecognized strings are both
/// accepted verbatim. Only a missing header falls back to the canonical
/// desktop value `"PC"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceType(String);

impl DeviceType {
    /// The canonical desktop classification.
    #[must_use]
    pub fn pc() -> Self {
        Self("PC".to_string())
    }

    /// Returns the classification string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DeviceType {
    fn default() -> Self {
        Self::pc()
    }
}

impl From<&str> for DeviceType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl core::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RequestContext
// ─────────────────────────────────────────────────────────────────────────────

/// Per-request context: inbound headers plus the device classification
/// computed once from them.
///
/// Header names are lowercased on construction so lookups are
/// case-insensitive, matching HTTP semantics.
///
/// # Example
///
/// ```
/// use vitrine_render::RequestContext;
///
/// let ctx = RequestContext::from_headers([("X-Device-Type", "Mobile")]);
/// assert_eq!(ctx.device().as_str(), "Mobile");
///
/// let ctx = RequestContext::empty();
/// assert_eq!(ctx.device().as_str(), "PC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HashMap<String, String>,
    device: DeviceType,
}

impl RequestContext {
    /// Creates a context with no headers (device defaults to `"PC"`).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a context from inbound request headers.
    pub fn from_headers<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers: HashMap<String, String> = headers
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();

        let device = headers
            .get(DEVICE_HEADER)
            .map_or_else(DeviceType::pc, |value| DeviceType::from(value.as_str()));

        Self { headers, device }
    }

    /// Returns a header value by (case-insensitive) name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the inbound `cookie` header, if any.
    #[must_use]
    pub fn cookies(&self) -> Option<&str> {
        self.header("cookie")
    }

    /// Returns the inbound `authorization` header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.header("authorization")
    }

    /// Returns the device classification (computed once per request).
    #[must_use]
    pub fn device(&self) -> &DeviceType {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_defaults_to_pc() {
        let ctx = RequestContext::empty();
        assert_eq!(ctx.device(), &DeviceType::pc());
    }

    #[test]
    fn device_header_is_taken_verbatim() {
        let ctx = RequestContext::from_headers([(DEVICE_HEADER, "Mobile")]);
        assert_eq!(ctx.device().as_str(), "Mobile");
    }

    #[test]
    fn unrecognized_device_values_are_accepted() {
        let ctx = RequestContext::from_headers([(DEVICE_HEADER, "fridge")]);
        assert_eq!(ctx.device().as_str(), "fridge");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let ctx = RequestContext::from_headers([("Cookie", "session=abc")]);
        assert_eq!(ctx.cookies(), Some("session=abc"));
        assert_eq!(ctx.header("COOKIE"), Some("session=abc"));
    }
}
