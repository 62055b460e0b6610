//! User Model

use serde::{Deserialize, Serialize};

/// Authenticated staff user
///
/// Returned by `POST /user/login` and `GET /user/me`. The access token
/// is the bearer credential for every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub access_token: String,
}
