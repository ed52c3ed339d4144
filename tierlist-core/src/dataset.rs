//! Versioned tier list dataset.
//!
//! Both levels of the dataset are JSON objects whose key order carries meaning:
//! version keys are chronological and tier keys are display order. The types in
//! this module keep entries in document order instead of going through a hash
//! or sorted map.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use once_cell::sync::OnceCell;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::palette;

const BUNDLED_DATA: &str = include_str!("../data/tierlists.json");

static BUNDLED: OnceCell<TierListData> = OnceCell::new();

/// Characters that would change how a version key is read as a URL segment.
const FORBIDDEN_VERSION_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Keys that would shadow the not-found route or the site's generated files.
pub const RESERVED_VERSIONS: [&str; 3] = ["404", "404.html", "routes.json"];

/// Errors raised while loading or validating tier list data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("tier list data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tier list data contains no versions")]
    Empty,
    #[error("version identifier {0:?} cannot be used as a route segment")]
    InvalidVersion(String),
    #[error("version identifier {0:?} is reserved by the site")]
    ReservedVersion(String),
    #[error("version {0:?} appears more than once")]
    DuplicateVersion(String),
    #[error("tier {tier:?} appears more than once in version {version:?}")]
    DuplicateTier { version: String, tier: String },
}

/// JSON object read as a list of entries in document order.
struct OrderedEntries<T>(Vec<(String, T)>);

impl<'de, T> Deserialize<'de> for OrderedEntries<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EntriesVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// One named tier and the characters ranked in it, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub name: String,
    pub characters: Vec<String>,
}

impl Tier {
    pub fn new<N, I, C>(name: N, characters: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            characters: characters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Tiers of a single version, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierList {
    tiers: Vec<Tier>,
}

impl TierList {
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tier> {
        self.tiers.iter()
    }

    /// Characters of the named tier, if the tier exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.tiers
            .iter()
            .find(|tier| tier.name == name)
            .map(|tier| tier.characters.as_slice())
    }

    /// Name of the tier holding `character`, if any.
    #[must_use]
    pub fn tier_of(&self, character: &str) -> Option<&str> {
        self.tiers
            .iter()
            .find(|tier| tier.characters.iter().any(|c| c == character))
            .map(|tier| tier.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    fn first_duplicate_tier(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.tiers
            .iter()
            .map(|tier| tier.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}

impl FromIterator<Tier> for TierList {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TierList {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for TierList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedEntries(entries) = OrderedEntries::<Vec<String>>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|(name, characters)| Tier { name, characters })
            .collect())
    }
}

impl Serialize for TierList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.tiers.len()))?;
        for tier in &self.tiers {
            map.serialize_entry(&tier.name, &tier.characters)?;
        }
        map.end()
    }
}

/// Every published version of the tier list in chronological order.
///
/// A validated dataset always holds at least one version and no version repeats
/// a tier. Each version key is unique, is not one of [`RESERVED_VERSIONS`], and
/// reads as a single literal URL segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierListData {
    versions: Vec<(String, TierList)>,
}

impl TierListData {
    /// Parse and validate a dataset from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or breaks a dataset invariant.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let OrderedEntries(entries) = serde_json::from_str::<OrderedEntries<TierList>>(raw)?;
        Self::from_versions(entries)
    }

    /// Build a dataset from `(version, tier list)` pairs given oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, a version key is repeated,
    /// reserved or unusable as a route segment, or a version repeats a tier
    /// name.
    pub fn from_versions<I, V>(versions: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (V, TierList)>,
        V: Into<String>,
    {
        let versions: Vec<(String, TierList)> = versions
            .into_iter()
            .map(|(version, list)| (version.into(), list))
            .collect();
        if versions.is_empty() {
            return Err(DatasetError::Empty);
        }

        validate_versions(&versions)?;
        Ok(Self { versions })
    }

    /// The dataset compiled into the crate, parsed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON fails validation.
    pub fn bundled() -> Result<&'static Self, DatasetError> {
        BUNDLED.get_or_try_init(|| {
            let data = Self::from_json(BUNDLED_DATA)?;
            log::debug!("loaded bundled tier list data with {} versions", data.len());
            Ok(data)
        })
    }

    /// Version identifiers, oldest first.
    pub fn versions(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.versions.iter().map(|(version, _)| version.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &TierList)> + '_ {
        self.versions
            .iter()
            .map(|(version, list)| (version.as_str(), list))
    }

    #[must_use]
    pub fn get(&self, version: &str) -> Option<&TierList> {
        self.versions
            .iter()
            .find(|(key, _)| key == version)
            .map(|(_, list)| list)
    }

    /// Position of `version` in chronological order.
    #[must_use]
    pub fn position(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|(key, _)| key == version)
    }

    #[must_use]
    pub fn version_at(&self, index: usize) -> Option<&str> {
        self.versions.get(index).map(|(version, _)| version.as_str())
    }

    /// The latest version, defined as the last key in document order.
    ///
    /// The dataset must be authored oldest first; no timestamp or version
    /// number comparison is applied.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(|(version, _)| version.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// `(version, tier)` pairs whose tier name has no palette color.
    #[must_use]
    pub fn unrecognized_tiers(&self) -> Vec<(&str, &str)> {
        self.iter()
            .flat_map(|(version, list)| {
                list.iter()
                    .filter(|tier| !palette::is_known_tier(&tier.name))
                    .map(move |tier| (version, tier.name.as_str()))
            })
            .collect()
    }
}

fn validate_versions(versions: &[(String, TierList)]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for (version, list) in versions {
        if !is_route_segment(version) {
            return Err(DatasetError::InvalidVersion(version.clone()));
        }
        if RESERVED_VERSIONS.contains(&version.as_str()) {
            return Err(DatasetError::ReservedVersion(version.clone()));
        }
        if !seen.insert(version.as_str()) {
            return Err(DatasetError::DuplicateVersion(version.clone()));
        }
        if let Some(tier) = list.first_duplicate_tier() {
            return Err(DatasetError::DuplicateTier {
                version: version.clone(),
                tier: tier.to_string(),
            });
        }
    }
    Ok(())
}

/// A version key must stay one literal path segment, both in URLs and as an
/// output directory name.
fn is_route_segment(version: &str) -> bool {
    !version.is_empty()
        && version != "."
        && version != ".."
        && !version.contains(FORBIDDEN_VERSION_CHARS)
}

impl<'de> Deserialize<'de> for TierListData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedEntries(entries) = OrderedEntries::<TierList>::deserialize(deserializer)?;
        Self::from_versions(entries).map_err(de::Error::custom)
    }
}

impl Serialize for TierListData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.versions.len()))?;
        for (version, list) in &self.versions {
            map.serialize_entry(version, list)?;
        }
        map.end()
    }
}
