//! Link destination classification.
//!
//! Shared by configuration validation (shape checks) and the content audit
//! (existence checks).

/// How a configured or authored link destination should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Absolute internal route (`/guide/introduction`).
    Internal,

    /// Relative internal link (`../guide/introduction.md`, `./sibling`).
    Relative,

    /// Absolute external URL (`https://…`) or protocol-relative `//…`.
    External,

    /// Same-page fragment (`#usage`).
    Anchor,

    /// Non-navigational scheme (`mailto:`, `tel:`, `javascript:`).
    Scheme,
}

/// Classify a raw link destination.
pub fn classify(link: &str) -> LinkKind {
    if link.starts_with('#') {
        return LinkKind::Anchor;
    }
    if link.starts_with("//") {
        return LinkKind::External;
    }
    if link.starts_with('/') {
        return LinkKind::Internal;
    }
    if let Some(colon) = link.find(':') {
        // Only a colon before the first path separator marks a scheme.
        if !link[..colon].contains('/') {
            let scheme = &link[..colon];
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
                return LinkKind::External;
            }
            return LinkKind::Scheme;
        }
    }
    LinkKind::Relative
}

/// Strip a fragment (`#…`) and query (`?…`) from a link destination.
pub fn strip_extras(link: &str) -> &str {
    let end = link.find(|c| c == '#' || c == '?').unwrap_or(link.len());
    &link[..end]
}
