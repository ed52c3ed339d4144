pub mod not_found;
pub mod tier_list;

pub use not_found::NotFound;
pub use tier_list::TierListPage;
