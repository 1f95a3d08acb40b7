use axum::http::HeaderMap;

pub const AUTHN_HEADER: &str = "authorization";
pub const AUTHZ_HEADER: &str = "x-authz";

/// Caller-supplied authentication and authorization signals.
///
/// These are carried through to resolvers as-is. Nothing checks them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSignals {
    pub authn: Option<String>,
    pub authz: Option<String>,
}

impl RequestSignals {
    pub fn new(authn: impl Into<String>, authz: impl Into<String>) -> Self {
        Self {
            authn: Some(authn.into()),
            authz: Some(authz.into()),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?;
    value.to_str().ok().map(str::to_string)
}

pub fn extract_signals_from_headers(headers: &HeaderMap) -> RequestSignals {
    RequestSignals {
        authn: header_value(headers, AUTHN_HEADER),
        authz: header_value(headers, AUTHZ_HEADER),
    }
}
