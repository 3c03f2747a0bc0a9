use crate::models::ClassifiedLinks;
use crate::scanner::{MarkupEvent, MarkupVisitor};
use crate::tag::attribute;
use url::{ParseError, Url};

/// Links with these schemes are dropped before classification
const EXCLUDED_SCHEMES: &[&str] = &["mailto", "tel", "javascript"];

/// Host of `url` as used for internal/external comparison: the host name
/// plus the port when it is not the scheme's default
pub fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Collects `href`s of `<a>` and `<link>` tags and sorts them into internal
/// and external links relative to the origin host.
///
/// Only the first `<base href>` is considered. When it holds an absolute URL
/// it resolves the relative links that follow it; otherwise no base is used.
#[derive(Debug)]
pub struct LinkExtractor {
    origin_host: String,
    base_seen: bool,
    base_url: Option<Url>,
    links: ClassifiedLinks,
}

impl LinkExtractor {
    pub fn new(origin_host: &str) -> Self {
        Self {
            origin_host: origin_host.to_string(),
            base_seen: false,
            base_url: None,
            links: ClassifiedLinks::default(),
        }
    }

    pub fn into_links(self) -> ClassifiedLinks {
        self.links
    }

    fn record_base(&mut self, href: &str) {
        if self.base_seen {
            return;
        }
        self.base_seen = true;

        match Url::parse(href) {
            Ok(base) => self.base_url = Some(base),
            Err(e) => tracing::debug!(href = %href, error = %e, "Ignoring unusable base URL"),
        }
    }

    fn record_link(&mut self, href: &str) {
        let (link, host) = match Url::parse(href) {
            Ok(url) => {
                if EXCLUDED_SCHEMES.contains(&url.scheme()) {
                    return;
                }
                (href.to_string(), host_with_port(&url))
            }
            Err(ParseError::RelativeUrlWithoutBase) => self.resolve_relative(href),
            Err(e) => {
                tracing::debug!(href = %href, error = %e, "Dropping malformed link");
                return;
            }
        };

        if self.is_internal(host.as_deref()) {
            self.links.internal.push(link);
        } else {
            self.links.external.push(link);
        }
    }

    /// Resolves a relative reference against the base URL when there is one.
    /// Without a base the literal text is kept and only a protocol-relative
    /// reference (`//host/path`) carries a host.
    fn resolve_relative(&self, href: &str) -> (String, Option<String>) {
        if let Some(base) = &self.base_url {
            match base.join(href) {
                Ok(resolved) => {
                    let host = host_with_port(&resolved);
                    return (resolved.to_string(), host);
                }
                Err(e) => {
                    tracing::debug!(base = %base, href = %href, error = %e, "Failed to resolve link against base");
                }
            }
        }

        let trimmed = href.trim();
        let host = if trimmed.starts_with("//") {
            Url::parse(&format!("http:{}", trimmed))
                .ok()
                .and_then(|url| host_with_port(&url))
        } else {
            None
        };

        (href.to_string(), host)
    }

    /// Links without a host are internal; otherwise the host has to match
    /// the origin exactly, ignoring case. Subdomains count as external.
    fn is_internal(&self, host: Option<&str>) -> bool {
        match host {
            None => true,
            Some(host) => host.eq_ignore_ascii_case(&self.origin_host),
        }
    }
}

impl MarkupVisitor for LinkExtractor {
    fn visit(&mut self, event: &MarkupEvent<'_>) {
        let Some(tag) = event.opening_tag() else {
            return;
        };
        let Some(href) = attribute(tag, "href") else {
            return;
        };

        match &*tag.name {
            "base" => self.record_base(href),
            "a" | "link" => self.record_link(href),
            _ => {}
        }
    }
}
