//! Site URLs under the deployment base path.
//!
//! The base comes from `PUBLIC_URL` at compile time (for example `/tiers` when
//! the site is served from a sub-path) so pre-rendered pages and the hydrated
//! client build identical links.

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Root-anchored URL for a page path or static file.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_base(), relative)
}

/// Basename handed to the router, `None` when the site is served from `/`.
#[must_use]
pub fn router_base() -> Option<String> {
    normalized_base(public_base()).map(str::to_string)
}

/// Portrait for a character id. Any id yields a path; nothing checks the file exists.
#[must_use]
pub fn character_image_path(character: &str) -> String {
    asset_path(&format!("characters/{character}.png"))
}

fn normalized_base(base: &str) -> Option<&str> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then_some(base)
}

fn join_base(base: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    match normalized_base(base) {
        Some(base) => format!("{base}/{relative}"),
        None => format!("/{relative}"),
    }
}
