//! One-way password hashing for seeded users.

use crate::error::SeedError;

/// bcrypt work factor used for every seeded password.
pub const HASH_COST: u32 = 10;

/// Hashes `password` with a fresh salt.
///
/// bcrypt is deliberately slow, so the work runs on the blocking pool
/// instead of the async worker threads.
pub async fn hash_password(password: &str) -> Result<String, SeedError> {
    let password = password.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;
    Ok(hash)
}
