use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::LookupSettings;

const PLAY_LISTING_URL: &str = "https://play.google.com/store/apps/details";
const PLAY_TITLE_SUFFIX: &str = " - Apps on Google Play";

/// Display metadata for a package: the Play listing title and icon, or
/// the raw identifier when the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMeta {
    pub display_name: String,
    pub icon_url: Option<String>,
}

impl AppMeta {
    fn fallback(package: &str) -> Self {
        Self {
            display_name: package.to_string(),
            icon_url: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum MetadataError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("listing page has no og:title tag")]
    MissingTitle,
}

/// Resolves package identifiers against their Play store listing.
///
/// `resolve` is total: every failure path (network, HTTP status, page
/// without the expected tags) degrades to the identifier itself and
/// nothing propagates to the caller. Results are memoized per
/// identifier for the process lifetime; distinct identifiers seen in
/// practice are bounded by installed-app counts, so the map never needs
/// eviction.
pub struct MetadataResolver {
    client: reqwest::Client,
    endpoint: String,
    cache: Mutex<HashMap<String, AppMeta>>,
    remote_attempts: AtomicU64,
}

impl MetadataResolver {
    pub fn new() -> Self {
        Self::with_endpoint(PLAY_LISTING_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            cache: Mutex::new(HashMap::new()),
            remote_attempts: AtomicU64::new(0),
        }
    }

    /// Process-wide resolver shared by all commands, so the cache
    /// survives across renders.
    pub fn shared() -> &'static MetadataResolver {
        static RESOLVER: OnceLock<MetadataResolver> = OnceLock::new();
        RESOLVER.get_or_init(MetadataResolver::new)
    }

    pub async fn resolve(&self, package: &str, locale: &LookupSettings) -> AppMeta {
        if let Some(hit) = self
            .cache
            .lock()
            .ok()
            .and_then(|cache| cache.get(package).cloned())
        {
            return hit;
        }

        let meta = match self.fetch(package, locale).await {
            Ok(meta) => meta,
            Err(e) => {
                log::debug!("Metadata lookup failed for {}: {}", package, e);
                AppMeta::fallback(package)
            }
        };

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(package.to_string(), meta.clone());
        }

        meta
    }

    /// Remote fetches attempted so far (cache misses only).
    #[allow(dead_code)]
    pub fn remote_attempts(&self) -> u64 {
        self.remote_attempts.load(Ordering::Relaxed)
    }

    async fn fetch(&self, package: &str, locale: &LookupSettings) -> Result<AppMeta, MetadataError> {
        self.remote_attempts.fetch_add(1, Ordering::Relaxed);

        let url = format!(
            "{}?id={}&hl={}&gl={}",
            self.endpoint, package, locale.language, locale.country
        );
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_listing(&body)
    }
}

fn parse_listing(body: &str) -> Result<AppMeta, MetadataError> {
    let title = og_content(body, "og:title").ok_or(MetadataError::MissingTitle)?;
    let display_name = unescape_html(title.trim_end_matches(PLAY_TITLE_SUFFIX).trim());
    let icon_url = og_content(body, "og:image").map(|c| unescape_html(&c));

    Ok(AppMeta {
        display_name,
        icon_url,
    })
}

fn og_content(body: &str, property: &str) -> Option<String> {
    let pattern = format!(r#"<meta\s+property="{}"\s+content="([^"]*)""#, property);
    let re = Regex::new(&pattern).ok()?;
    re.captures(body).map(|caps| caps[1].to_string())
}

fn unescape_html(value: &str) -> String {
    // &amp; last, otherwise "&amp;lt;" would unescape twice
    value
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
