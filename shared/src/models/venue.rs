//! Venue Model

use serde::{Deserialize, Serialize};

/// Venue entity
///
/// The tenant a staff user operates on behalf of. A user may have no
/// venue bound at all; that is a valid state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}
