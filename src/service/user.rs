//! User account service.
//!
//! The one service with a pre-persist transform: the password field arrives
//! as plaintext and leaves the pipeline as a salted bcrypt digest, so
//! plaintext never reaches the store.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Role, User};
use crate::error::{Error, Result};
use crate::port::UserStore;
use crate::validation::user_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to user accounts.
pub struct UserService<S> {
    inner: EntityService<User, S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("User", store, user_rules())
                .with_pre_persist(hash_password),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, user_id: i32) -> Result<Option<User>> {
        guard::positive("user_id", user_id)?;
        self.inner.store().get_by_id(user_id).await
    }

    pub async fn by_username(&self, username: &str) -> Result<Option<User>> {
        guard::non_blank("username", username)?;
        self.inner.store().by_username(username).await
    }

    pub async fn by_password_hash(&self, password_hash: &str) -> Result<Option<User>> {
        guard::non_blank("password_hash", password_hash)?;
        self.inner.store().by_password_hash(password_hash).await
    }

    pub async fn by_role(&self, role: Role) -> Result<Vec<User>> {
        self.inner.store().by_role(role).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<User>> {
        guard::non_blank("email", email)?;
        self.inner.store().by_email(email).await
    }

    pub async fn by_first_name(&self, first_name: &str) -> Result<Vec<User>> {
        guard::non_blank("first_name", first_name)?;
        self.inner.store().by_first_name(first_name).await
    }

    pub async fn by_last_name(&self, last_name: &str) -> Result<Vec<User>> {
        guard::non_blank("last_name", last_name)?;
        self.inner.store().by_last_name(last_name).await
    }

    pub async fn created_at(&self, created_at: DateTime<Utc>) -> Result<Vec<User>> {
        self.inner.store().created_at(created_at).await
    }
}

fn hash_password(user: &mut User) -> Result<()> {
    if user.password_hash.trim().is_empty() {
        return Err(Error::invalid_argument("password", "must not be empty"));
    }
    user.password_hash = bcrypt::hash(&user.password_hash, bcrypt::DEFAULT_COST)
        .map_err(|err| Error::Hash(err.to_string()))?;
    Ok(())
}

impl<S> Deref for UserService<S> {
    type Target = EntityService<User, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders::user;

    #[test]
    fn hashing_salts_each_digest() {
        let mut a = user(1);
        let mut b = user(2);
        b.password_hash = a.password_hash.clone();
        let plain = a.password_hash.clone();

        hash_password(&mut a).unwrap();
        hash_password(&mut b).unwrap();

        assert!(a.password_hash.starts_with("$2"));
        assert_ne!(a.password_hash, b.password_hash);
        assert_ne!(a.password_hash, plain);
        assert!(bcrypt::verify(&plain, &a.password_hash).unwrap());
    }

    #[test]
    fn blank_password_is_rejected_before_hashing() {
        let mut u = user(1);
        u.password_hash = "   ".into();
        assert!(hash_password(&mut u).is_err());
    }
}
