//! Acknowledgements returned by bulk inserts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw acknowledgement of one bulk insert.
///
/// `inserted_ids` maps the zero-based position of each input record to the
/// storage identity the store assigned it. Positions serialise as JSON object
/// keys.
///
/// # Examples
/// ```
/// use postfeed::domain::InsertReceipt;
///
/// let receipt = InsertReceipt::acknowledged(["a", "b"].map(String::from));
/// assert_eq!(receipt.inserted_count, 2);
/// assert_eq!(receipt.inserted_ids.get(&1).map(String::as_str), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Number of records written.
    pub inserted_count: u64,
    /// Storage identity per input position.
    pub inserted_ids: BTreeMap<usize, String>,
}

impl InsertReceipt {
    /// Build an acknowledged receipt from storage identities in input order.
    pub fn acknowledged(ids: impl IntoIterator<Item = String>) -> Self {
        let inserted_ids: BTreeMap<usize, String> = ids.into_iter().enumerate().collect();
        Self {
            acknowledged: true,
            inserted_count: inserted_ids.len() as u64,
            inserted_ids,
        }
    }
}

/// Acknowledgements for a complete example data seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReceipt {
    /// Users insert acknowledgement.
    pub users: InsertReceipt,
    /// Posts insert acknowledgement.
    pub posts: InsertReceipt,
}
