/// Pulls the session token out of request headers
pub struct SessionTokenExtractor;

impl SessionTokenExtractor {
    /// Extract the token stored in `cookie_name` from a `Cookie` header.
    ///
    /// Signed cookies (`<token>.<signature>`, possibly percent-encoded) yield
    /// the `<token>` part. Returns `None` when the cookie is absent or empty.
    pub fn from_cookie_header(header: &str, cookie_name: &str) -> Option<String> {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == cookie_name)
            .map(|(_, value)| Self::strip_signature(value.trim().trim_matches('"')))
            .filter(|token| !token.is_empty())
    }

    /// Extract a bearer token from an `Authorization` header.
    pub fn from_authorization_header(header: &str) -> Option<String> {
        let (scheme, token) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self::strip_signature(token))
        }
    }

    fn strip_signature(value: &str) -> String {
        let decoded = value.replace("%2E", ".").replace("%2e", ".");
        match decoded.split_once('.') {
            Some((token, _signature)) => token.to_string(),
            None => decoded,
        }
    }
}
