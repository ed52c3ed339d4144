//! Tierlist core
//!
//! Platform-agnostic data layer for the versioned tier list site: the ordered
//! dataset, the tier color palette and static page resolution. This crate has
//! no UI or platform-specific dependencies.

pub mod dataset;
pub mod palette;
pub mod resolver;

pub use dataset::{DatasetError, RESERVED_VERSIONS, Tier, TierList, TierListData};
pub use palette::{FALLBACK_TIER_COLOR, TIER_COLORS, tier_color, tier_color_or_fallback};
pub use resolver::{
    RenderBundle, ResolveError, RouteParams, enumerate_routes, resolve_page, resolve_route,
};
