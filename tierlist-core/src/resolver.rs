//! Static route enumeration and per-page data resolution.

use serde::Serialize;
use thiserror::Error;

use crate::dataset::{TierList, TierListData};

/// Parameters for one statically generated route.
///
/// `version: None` is the default route, which shows the latest version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteParams {
    pub version: Option<String>,
}

impl RouteParams {
    #[must_use]
    pub const fn latest() -> Self {
        Self { version: None }
    }

    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }

    /// Path segments as handed to [`resolve_page`].
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.version.as_deref().into_iter().collect()
    }

    #[must_use]
    pub const fn is_latest(&self) -> bool {
        self.version.is_none()
    }

    /// URL path of the route relative to the site root.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.version {
            Some(version) => format!("/{version}"),
            None => "/".to_string(),
        }
    }

    /// File the route is written to, relative to the output directory.
    #[must_use]
    pub fn output_path(&self) -> String {
        match &self.version {
            Some(version) => format!("{version}/index.html"),
            None => "index.html".to_string(),
        }
    }
}

/// Everything needed to render one tier list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderBundle {
    pub version: String,
    pub tier_list: TierList,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no tier list exists for version {0:?}")]
    NotFound(String),
    #[error("tier list data contains no versions")]
    EmptyDataset,
}

/// Every route to pre-generate: one per version in dataset order, then the
/// default route. No other route resolves.
#[must_use]
pub fn enumerate_routes(data: &TierListData) -> Vec<RouteParams> {
    data.versions()
        .map(RouteParams::for_version)
        .chain(std::iter::once(RouteParams::latest()))
        .collect()
}

/// Resolve the render bundle for a route's path segments.
///
/// The first segment names the version; with no segments the latest version
/// is used. Any further segments are ignored.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when the version is not in the dataset.
pub fn resolve_page<S>(data: &TierListData, segments: &[S]) -> Result<RenderBundle, ResolveError>
where
    S: AsRef<str>,
{
    let version = match segments.first() {
        Some(segment) => segment.as_ref(),
        None => data.latest().ok_or(ResolveError::EmptyDataset)?,
    };

    let index = data
        .position(version)
        .ok_or_else(|| ResolveError::NotFound(version.to_string()))?;
    let tier_list = data
        .get(version)
        .ok_or_else(|| ResolveError::NotFound(version.to_string()))?;

    let previous = index
        .checked_sub(1)
        .and_then(|i| data.version_at(i))
        .map(str::to_string);
    let next = data.version_at(index + 1).map(str::to_string);

    log::debug!(
        "resolved version {version} (previous: {previous:?}, next: {next:?})"
    );

    Ok(RenderBundle {
        version: version.to_string(),
        tier_list: tier_list.clone(),
        previous,
        next,
    })
}

/// Resolve the bundle for a [`RouteParams`] entry.
///
/// # Errors
///
/// Same as [`resolve_page`].
pub fn resolve_route(data: &TierListData, route: &RouteParams) -> Result<RenderBundle, ResolveError> {
    resolve_page(data, &route.segments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Tier;

    fn sample() -> TierListData {
        TierListData::from_json(
            r#"{
                "1.0": {"S": ["mario"]},
                "1.1": {"S": ["mario", "link"], "A": ["kirby"]},
                "2.0": {"A": ["mario"], "S": ["link"]}
            }"#,
        )
        .expect("sample dataset")
    }

    #[test]
    fn resolves_middle_version_with_both_neighbours() {
        let bundle = resolve_page(&sample(), &["1.1"]).expect("1.1 resolves");
        assert_eq!(bundle.version, "1.1");
        assert_eq!(bundle.previous.as_deref(), Some("1.0"));
        assert_eq!(bundle.next.as_deref(), Some("2.0"));
        assert_eq!(
            bundle.tier_list.tiers(),
            [Tier::new("S", ["mario", "link"]), Tier::new("A", ["kirby"])]
        );
    }

    #[test]
    fn default_route_matches_latest_version() {
        let data = sample();
        let none: [&str; 0] = [];
        let default = resolve_page(&data, &none).expect("default resolves");
        let latest = resolve_page(&data, &["2.0"]).expect("2.0 resolves");
        assert_eq!(default, latest);
        assert_eq!(default.version, "2.0");
        assert_eq!(default.previous.as_deref(), Some("1.1"));
        assert_eq!(default.next, None);
    }

    #[test]
    fn first_version_has_no_previous() {
        let bundle = resolve_page(&sample(), &["1.0"]).expect("1.0 resolves");
        assert_eq!(bundle.previous, None);
        assert_eq!(bundle.next.as_deref(), Some("1.1"));
    }

    #[test]
    fn unknown_version_is_not_found() {
        assert_eq!(
            resolve_page(&sample(), &["unknown-version"]),
            Err(ResolveError::NotFound("unknown-version".into()))
        );
    }

    #[test]
    fn extra_segments_are_ignored() {
        let data = sample();
        assert_eq!(
            resolve_page(&data, &["1.0", "extra"]),
            resolve_page(&data, &["1.0"])
        );
    }

    #[test]
    fn every_version_resolves_to_itself_with_adjacent_pointers() {
        let data = sample();
        let versions: Vec<_> = data.versions().collect();
        for (i, version) in versions.iter().enumerate() {
            let bundle = resolve_page(&data, &[*version]).expect("known version");
            assert_eq!(bundle.version, *version);
            let expected_prev = i.checked_sub(1).map(|p| versions[p].to_string());
            assert_eq!(bundle.previous, expected_prev);
            assert_eq!(bundle.next, versions.get(i + 1).map(|n| n.to_string()));
        }
    }

    #[test]
    fn enumerates_one_route_per_version_plus_default() {
        let data = sample();
        let routes = enumerate_routes(&data);
        assert_eq!(routes.len(), data.len() + 1);
        assert_eq!(
            routes,
            [
                RouteParams::for_version("1.0"),
                RouteParams::for_version("1.1"),
                RouteParams::for_version("2.0"),
                RouteParams::latest(),
            ]
        );
        for route in &routes {
            assert!(resolve_route(&data, route).is_ok());
        }
    }

    #[test]
    fn route_paths_and_output_files() {
        let latest = RouteParams::latest();
        assert!(latest.is_latest());
        assert_eq!(latest.path(), "/");
        assert_eq!(latest.output_path(), "index.html");
        assert!(latest.segments().is_empty());

        let versioned = RouteParams::for_version("13.0.1");
        assert_eq!(versioned.path(), "/13.0.1");
        assert_eq!(versioned.output_path(), "13.0.1/index.html");
        assert_eq!(versioned.segments(), ["13.0.1"]);
    }
}
