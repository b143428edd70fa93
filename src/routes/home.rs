//! Home page handler.

use crate::config::HOME_GREETING;

/// Handler for `GET /`.
pub async fn index() -> &'static str {
    HOME_GREETING
}
