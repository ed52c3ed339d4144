use tierlist_core::RouteParams;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Latest,
    #[at("/:version")]
    Version { version: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn from_params(params: &RouteParams) -> Self {
        match &params.version {
            Some(version) => Self::Version {
                version: version.clone(),
            },
            None => Self::Latest,
        }
    }

    /// Path segments to resolve for this route; `None` when it can never resolve.
    #[must_use]
    pub fn segments(&self) -> Option<Vec<&str>> {
        match self {
            Self::Latest => Some(Vec::new()),
            Self::Version { version } => Some(vec![version.as_str()]),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_params_map_onto_routes() {
        assert_eq!(Route::from_params(&RouteParams::latest()), Route::Latest);
        assert_eq!(
            Route::from_params(&RouteParams::for_version("9.0.0")),
            Route::Version {
                version: "9.0.0".into()
            }
        );
    }

    #[test]
    fn routes_render_the_same_paths_as_their_params() {
        for params in [RouteParams::latest(), RouteParams::for_version("10.1.0")] {
            assert_eq!(Route::from_params(&params).to_path(), params.path());
        }
    }

    #[test]
    fn recognizes_version_paths_and_rejects_nested_ones() {
        assert_eq!(Route::recognize("/"), Some(Route::Latest));
        assert_eq!(
            Route::recognize("/1.1"),
            Some(Route::Version {
                version: "1.1".into()
            })
        );
        assert_eq!(Route::recognize("/1.1/extra"), Some(Route::NotFound));
    }

    #[test]
    fn not_found_has_no_segments() {
        assert_eq!(Route::NotFound.segments(), None);
        assert_eq!(Route::Latest.segments(), Some(Vec::new()));
        assert_eq!(
            Route::Version {
                version: "2.0".into()
            }
            .segments(),
            Some(vec!["2.0"])
        );
    }
}
