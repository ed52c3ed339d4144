pub mod character_icon;
pub mod tier_group;
pub mod version_nav;

pub use character_icon::CharacterIcon;
pub use tier_group::TierGroup;
pub use version_nav::VersionNav;
