use std::fs;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tierlist_core::{ResolveError, RouteParams, TierListData, resolve_route};
use tierlist_web::app::{App, AppProps};
use tierlist_web::pages::not_found::NOT_FOUND_TITLE;
use tierlist_web::pages::tier_list::page_title;
use tierlist_web::paths::asset_path;
use tierlist_web::shell::{ShellConfig, render_document};
use yew::{AttrValue, LocalServerRenderer};

pub const NOT_FOUND_FILE: &str = "404.html";
pub const MANIFEST_FILE: &str = "routes.json";
const NOT_FOUND_PATH: &str = "/404";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("refusing to write {0:?} outside the output directory")]
    OutsideOutput(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One generated page, as listed in the route manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub path: String,
    pub version: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generated_at: DateTime<Utc>,
    pub out_dir: PathBuf,
    pub pages: Vec<PageRecord>,
    pub failures: Vec<RouteFailure>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl BuildReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

#[derive(Debug, Serialize)]
struct RouteManifest<'a> {
    generated_at: DateTime<Utc>,
    routes: &'a [PageRecord],
    not_found: &'static str,
}

/// Renders routes of a dataset into an output directory.
pub struct SiteBuilder {
    data: Rc<TierListData>,
    shell: ShellConfig,
    out_dir: PathBuf,
}

impl SiteBuilder {
    pub fn new(data: Rc<TierListData>, shell: ShellConfig, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data,
            shell,
            out_dir: out_dir.into(),
        }
    }

    /// Generate every route, the not-found page and the manifest.
    ///
    /// A route that fails is recorded in the report and does not stop the
    /// others from being written.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory, the not-found page or the
    /// manifest cannot be written.
    pub async fn build(&self, routes: &[RouteParams]) -> Result<BuildReport> {
        let started = Instant::now();
        let generated_at = Utc::now();
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create {}", self.out_dir.display()))?;

        let mut pages = Vec::with_capacity(routes.len());
        let mut failures = Vec::new();
        for route in routes {
            match self.build_route(route).await {
                Ok(record) => {
                    log::info!("generated {} -> {}", record.path, record.file);
                    pages.push(record);
                }
                Err(err) => {
                    log::error!("route {} failed: {err}", route.path());
                    failures.push(RouteFailure {
                        path: route.path(),
                        error: err.to_string(),
                    });
                }
            }
        }

        self.build_not_found()
            .await
            .context("failed to generate the not-found page")?;
        self.write_manifest(generated_at, &pages)?;

        Ok(BuildReport {
            generated_at,
            out_dir: self.out_dir.clone(),
            pages,
            failures,
            elapsed: started.elapsed(),
        })
    }

    async fn build_route(&self, route: &RouteParams) -> Result<PageRecord, RouteError> {
        let bundle = resolve_route(&self.data, route)?;
        let body = self.render_app(&asset_path(&route.path())).await;
        let document = render_document(&self.shell, &page_title(&bundle.version), &body);
        let file = route.output_path();
        self.write_file(&file, &document)?;

        Ok(PageRecord {
            path: route.path(),
            version: bundle.version,
            previous: bundle.previous,
            next: bundle.next,
            file,
        })
    }

    async fn build_not_found(&self) -> Result<(), RouteError> {
        let body = self.render_app(&asset_path(NOT_FOUND_PATH)).await;
        let document = render_document(&self.shell, NOT_FOUND_TITLE, &body);
        self.write_file(NOT_FOUND_FILE, &document)
    }

    fn write_manifest(&self, generated_at: DateTime<Utc>, pages: &[PageRecord]) -> Result<()> {
        let manifest = RouteManifest {
            generated_at,
            routes: pages,
            not_found: NOT_FOUND_FILE,
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        self.write_file(MANIFEST_FILE, &json)?;
        Ok(())
    }

    async fn render_app(&self, url: &str) -> String {
        let props = AppProps {
            url: Some(AttrValue::from(url.to_string())),
            data: Some(Rc::clone(&self.data)),
        };
        LocalServerRenderer::<App>::with_props(props).render().await
    }

    fn write_file(&self, relative: &str, contents: &str) -> Result<(), RouteError> {
        if !stays_inside(Path::new(relative)) {
            return Err(RouteError::OutsideOutput(relative.to_string()));
        }
        let path = self.out_dir.join(relative);
        write_with_parents(&path, contents).map_err(|source| RouteError::Write {
            path: path.clone(),
            source,
        })
    }
}

fn stays_inside(relative: &Path) -> bool {
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}

fn write_with_parents(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierlist_core::{RESERVED_VERSIONS, enumerate_routes};

    fn sample() -> TierListData {
        TierListData::from_json(
            r#"{
                "1.0": {"S": ["mario"], "A": ["link"]},
                "1.1": {"S": ["mario", "link"], "A": ["kirby"]},
                "2.0": {"A": ["mario"], "S": ["link"]}
            }"#,
        )
        .expect("sample dataset")
    }

    fn build(data: &TierListData, routes: &[RouteParams], out: &Path) -> BuildReport {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let builder = SiteBuilder::new(Rc::new(data.clone()), ShellConfig::default(), out);
        runtime
            .block_on(builder.build(routes))
            .expect("build succeeds")
    }

    #[test]
    fn writes_one_page_per_route_plus_not_found_and_manifest() {
        let data = sample();
        let dir = tempfile::tempdir().expect("tempdir");
        let report = build(&data, &enumerate_routes(&data), dir.path());

        assert!(report.passed());
        assert_eq!(report.pages.len(), data.len() + 1);
        for file in ["1.0/index.html", "1.1/index.html", "2.0/index.html", "index.html"] {
            assert!(dir.path().join(file).is_file(), "{file} written");
        }
        assert!(dir.path().join(NOT_FOUND_FILE).is_file());

        let manifest: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join(MANIFEST_FILE)).expect("manifest"),
        )
        .expect("manifest json");
        assert_eq!(manifest["routes"].as_array().map(Vec::len), Some(4));
        assert_eq!(manifest["routes"][1]["previous"], "1.0");
        assert_eq!(manifest["routes"][1]["next"], "2.0");
        assert_eq!(manifest["not_found"], NOT_FOUND_FILE);
    }

    #[test]
    fn page_documents_carry_title_and_stylesheet() {
        let data = sample();
        let dir = tempfile::tempdir().expect("tempdir");
        build(&data, &enumerate_routes(&data), dir.path());

        let index = fs::read_to_string(dir.path().join("index.html")).expect("index");
        assert!(index.contains("<title>Official Smash Ultimate 2.0 Tier List</title>"));
        assert!(index.contains("href=\"/static/tailwind.css\""));
        assert!(index.contains("Smash Ultimate Version 2.0 Tier List"));

        let not_found = fs::read_to_string(dir.path().join(NOT_FOUND_FILE)).expect("404");
        assert!(not_found.contains(NOT_FOUND_TITLE));
    }

    #[test]
    fn every_page_shows_its_own_version_inside_the_output_dir() {
        let data = sample();
        let dir = tempfile::tempdir().expect("tempdir");
        let report = build(&data, &enumerate_routes(&data), dir.path());

        for page in &report.pages {
            let path = dir.path().join(&page.file);
            assert!(stays_inside(Path::new(&page.file)), "{} is relative", page.file);
            assert!(path.starts_with(dir.path()));
            let html = fs::read_to_string(&path).expect("page written");
            let heading = format!("Smash Ultimate Version {} Tier List", page.version);
            assert!(html.contains(&heading), "{} shows {}", page.file, page.version);
            assert!(!html.contains(NOT_FOUND_TITLE), "{} is not the 404 page", page.file);
        }
    }

    #[test]
    fn refuses_to_write_outside_the_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("site");
        let builder = SiteBuilder::new(Rc::new(sample()), ShellConfig::default(), &out);
        for relative in ["../index.html", "/etc/index.html", "./index.html"] {
            assert!(matches!(
                builder.write_file(relative, "x"),
                Err(RouteError::OutsideOutput(ref r)) if r == relative
            ));
        }
        assert!(!dir.path().join("index.html").exists());
        builder.write_file("1.0/index.html", "x").expect("nested write");
        assert!(out.join("1.0/index.html").is_file());
    }

    #[test]
    fn generated_file_names_cannot_be_versions() {
        for name in [NOT_FOUND_FILE, MANIFEST_FILE, NOT_FOUND_PATH.trim_start_matches('/')] {
            assert!(RESERVED_VERSIONS.contains(&name), "{name} is reserved");
            assert!(TierListData::from_json(&format!(r#"{{"{name}": {{}}}}"#)).is_err());
        }
    }

    #[test]
    fn a_failing_route_does_not_stop_the_others() {
        let data = sample();
        let dir = tempfile::tempdir().expect("tempdir");
        let routes = [
            RouteParams::for_version("1.0"),
            RouteParams::for_version("missing"),
            RouteParams::latest(),
        ];
        let report = build(&data, &routes, dir.path());

        assert!(!report.passed());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "/missing");
        assert_eq!(report.pages.len(), 2);
        assert!(dir.path().join("1.0/index.html").is_file());
        assert!(dir.path().join("index.html").is_file());
        assert!(!dir.path().join("missing").exists());
    }
}
