use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::{
    rules::Predicate,
    utils::{bounds::Bounds, coercion::scalar_text, pattern::compile_pattern},
};

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("email pattern is valid")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[a-z][a-z0-9+.\-]*://(?:[^\s:@/?#]+(?::[^\s@/?#]*)?@)?(?:\[[0-9a-f:.]+\]|[a-z0-9](?:[a-z0-9\-_]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9\-_]*[a-z0-9])?)*)(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .expect("url pattern is valid")
});

static MAIL_OR_NEWS_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:mailto|news):\S+$").expect("uri pattern is valid"));

pub struct IsEmail;

impl Predicate for IsEmail {
    fn name(&self) -> &'static str {
        "isEmail"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        let Some(text) = scalar_text(value) else {
            return false;
        };
        let local_len = text.split('@').next().map_or(0, str::len);
        text.len() <= MAX_EMAIL_LEN && local_len <= MAX_LOCAL_PART_LEN && EMAIL.is_match(&text)
    }
}

pub struct IsUrl;

impl Predicate for IsUrl {
    fn name(&self) -> &'static str {
        "isUrl"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        scalar_text(value).is_some_and(|text| URL.is_match(&text) || MAIL_OR_NEWS_URI.is_match(&text))
    }
}

/// Matches the text form against the pattern given as argument.
pub struct IsMatch;

impl Predicate for IsMatch {
    fn name(&self) -> &'static str {
        "isMatch"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        let Some(pattern) = argument else {
            warn!(rule = self.name(), "missing pattern argument");
            return false;
        };
        let re = match compile_pattern(pattern) {
            Ok(re) => re,
            Err(e) => {
                warn!(rule = self.name(), pattern, error = %e, "invalid pattern");
                return false;
            }
        };
        scalar_text(value).is_some_and(|text| re.is_match(&text))
    }
}

/// Character length of the text form within `min` or `min,max`.
pub struct Length;

impl Predicate for Length {
    fn name(&self) -> &'static str {
        "length"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        let Some(bounds) = argument.and_then(Bounds::parse) else {
            warn!(rule = self.name(), argument, "malformed length bounds");
            return false;
        };
        scalar_text(value).is_some_and(|text| bounds.contains(text.chars().count() as f64))
    }
}

/// Case-insensitive equality of the text forms.
pub struct IsSameCi;

impl Predicate for IsSameCi {
    fn name(&self) -> &'static str {
        "isSameCi"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        scalar_text(value)
            .is_some_and(|text| text.to_lowercase() == argument.unwrap_or("").to_lowercase())
    }
}

/// IPv4 or IPv6 address.
pub struct IsIp;

impl Predicate for IsIp {
    fn name(&self) -> &'static str {
        "isIp"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        scalar_text(value).is_some_and(|text| text.parse::<IpAddr>().is_ok())
    }
}
