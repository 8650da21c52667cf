//! Wire types for the bridge hierarchy service.
//!
//! Field names match the upstream JSON (camelCase). The service is loose
//! about optional fields, so `hierarchy` slots and `user` are nullable
//! and default to empty/absent on sparse bodies.

use serde::{Deserialize, Serialize};

/// `status` value meaning the queried account exists in the namespace.
/// Any other value is a valid "no usable account" response, not an error.
pub const STATUS_ACCOUNT_EXISTS: i64 = 0;

/// Which account namespace to query. The same username can exist in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Agent,
    Player,
}

impl AccountKind {
    /// Value of the `isAgent` query flag for this namespace.
    pub fn is_agent(self) -> bool {
        matches!(self, AccountKind::Agent)
    }

    /// Role label shown for the queried account at the foot of the chart.
    pub fn role_label(self) -> &'static str {
        match self {
            AccountKind::Agent => "Agent",
            AccountKind::Player => "Player",
        }
    }
}

/// One person in an organizational chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: i64,
    pub client_id: i64,
    pub username: String,
    #[serde(default)]
    pub parent_client_id: Option<i64>,
}

/// Result of one account-namespace lookup.
///
/// `hierarchy` is the ordered ancestor chain from the organizational root
/// down to (and including) the queried account; array order IS the
/// hierarchy path, no structural links beyond it. The upstream has been
/// observed to emit null slots inside the array, hence `Option` elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(default)]
    pub hierarchy: Vec<Option<HierarchyNode>>,
    #[serde(default)]
    pub user: Option<HierarchyNode>,
    pub status: i64,
    #[serde(default)]
    pub message: String,
}

impl UserResponse {
    /// Whether this lookup found a usable account.
    pub fn account_exists(&self) -> bool {
        self.status == STATUS_ACCOUNT_EXISTS
    }
}
