//! Session cookie handling for private ESPN leagues

use crate::{Result, S2_ENV_VAR, SWID_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use std::fmt;

/// The `espn_s2` / `SWID` cookie pair ESPN uses to authorize private leagues.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    espn_s2: String,
    swid: String,
}

impl Credentials {
    pub fn new(espn_s2: impl Into<String>, swid: impl Into<String>) -> Self {
        Self {
            espn_s2: espn_s2.into(),
            swid: swid.into(),
        }
    }

    /// Read credentials from `ESPN_S2` and `ESPN_SWID`, if present.
    ///
    /// Returns `None` when either env var is missing (public leagues).
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from any key lookup using the env var names as keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let swid = lookup(SWID_ENV_VAR);
        let s2 = lookup(S2_ENV_VAR);
        match (s2, swid) {
            (Some(s2), Some(swid)) => Some(Self::new(s2, swid)),
            _ => None,
        }
    }

    pub fn espn_s2(&self) -> &str {
        &self.espn_s2
    }

    pub fn swid(&self) -> &str {
        &self.swid
    }

    pub fn cookie_header_value(&self) -> Result<HeaderValue> {
        let cookie = format!("SWID={}; espn_s2={}", self.swid, self.espn_s2);
        Ok(HeaderValue::from_str(&cookie)?)
    }
}

// Cookies are secrets; keep them out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

/// Default headers for every ESPN request: JSON accept plus cookies when supplied.
pub fn default_headers(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        h.insert(COOKIE, creds.cookie_header_value()?);
    }
    Ok(h)
}
