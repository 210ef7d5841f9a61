use serde::{Deserialize, Serialize};

/// Sentinel contact number for ads posted without one.
pub const NO_CONTACT: &str = "N/A";

/// The deduplicated ad list of one fetch cycle. Persisted as-is and read
/// back as the "previous" input of the next cycle.
pub type Snapshot = Vec<AdRecord>;

/// One classified ad extracted from the listing page. Field names match the
/// persisted snapshot format, so serde gives the wire shape directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdRecord {
    pub title: String,
    pub price: String,
    /// Discounted price; empty when the ad has none.
    pub new_price: String,
    pub text: String,
    /// `N/A` when the ad was posted without a contact number.
    pub contact_number: String,
    pub date: String,
}
