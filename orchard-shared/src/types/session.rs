use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The authenticated user on whose behalf rows are created.
///
/// Every row inserted through a store is stamped with `user_id`; ownership is
/// "whoever created the row" and later writes simply overwrite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
