//! In-memory user registry.
//!
//! # Responsibilities
//! - Store username → obfuscated-password pairs
//! - Enforce username uniqueness (register never overwrites)
//! - Sanitize usernames identically on registration and authentication
//! - Count successful authorizations
//!
//! # Design Decisions
//! - DashMap's entry API serializes register/authenticate per username
//!   without a global lock
//! - The authorization counter is a relaxed atomic: a best-effort running
//!   count with no ordering guarantee across concurrent requests
//! - Passwords are stored ROT47-obfuscated, never in plaintext

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::Rng;
use thiserror::Error;

use crate::auth::cipher::rot47;

/// Characters stripped from usernames before any registry operation.
const DISALLOWED: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Errors produced by registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Username or password missing, or empty after sanitization.
    #[error("insufficient arguments")]
    InvalidInput,

    /// Registration hit an already-registered username.
    #[error("user already exists")]
    AlreadyExists,

    /// Authentication against an unknown username.
    #[error("unknown user")]
    NotFound,

    /// Supplied password does not match the stored one.
    #[error("authorization failed")]
    Unauthorized,
}

/// Thread-safe username → obfuscated-password store.
#[derive(Default)]
pub struct UserRegistry {
    users: DashMap<String, String>,
    auth_count: AtomicU64,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// Returns the sanitized username actually stored, so callers can echo
    /// it back to the client.
    pub fn register(&self, username: &str, password: &str) -> Result<String, RegistryError> {
        let username = sanitize(username);
        if username.is_empty() || password.is_empty() {
            return Err(RegistryError::InvalidInput);
        }

        match self.users.entry(username.clone()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(rot47(password));
                Ok(username)
            }
        }
    }

    /// Authenticate an existing user.
    ///
    /// On success returns the running authorization count (including this
    /// request). The count is best-effort under concurrency.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<u64, RegistryError> {
        let username = sanitize(username);
        if username.is_empty() || password.is_empty() {
            return Err(RegistryError::InvalidInput);
        }

        let stored = self
            .users
            .get(&username)
            .ok_or(RegistryError::NotFound)?;
        if *stored != rot47(password) {
            return Err(RegistryError::Unauthorized);
        }

        Ok(self.auth_count.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Populate the registry with `count` randomly generated users so
    /// authentication benchmarks run against a realistically sized map.
    ///
    /// Credentials are random alphabetic words of 6-11 characters;
    /// username collisions are retried until `count` users exist.
    pub fn seed(&self, count: usize) {
        let mut rng = rand::thread_rng();
        let mut created = 0;
        while created < count {
            let username = random_word(&mut rng);
            let password = random_word(&mut rng);
            if self.register(&username, &password).is_ok() {
                created += 1;
            }
        }
        tracing::info!(users = count, "Registry seeded");
    }
}

fn sanitize(username: &str) -> String {
    username.chars().filter(|c| !DISALLOWED.contains(c)).collect()
}

fn random_word(rng: &mut impl Rng) -> String {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let len = rng.gen_range(6..12);
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}
