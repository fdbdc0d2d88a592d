//! In-memory account registry.
//!
//! Secrets are stored and compared in plaintext; this registry backs a demo,
//! not a real identity provider.

use pod_core::entities::{Account, AccountProfile};
use pod_core::enums::Role;
use pod_core::ids::{PREFIX_ACCOUNT, generate_unique_id};

use crate::error::AuthError;
use crate::seed;

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub display_name: String,
    pub email: String,
    pub secret: String,
    pub role: Role,
}

impl NewAccount {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            secret: secret.into(),
            role,
        }
    }

    fn validate(&self) -> Result<(), AuthError> {
        let missing: Vec<&str> = [
            ("username", &self.display_name),
            ("email", &self.email),
            ("password", &self.secret),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(missing.join(", ")))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    accounts: Vec<Account>,
}

impl IdentityRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the three demo accounts.
    #[must_use]
    pub fn with_demo_accounts() -> Self {
        Self {
            accounts: seed::demo_accounts(),
        }
    }

    /// Find the account matching `email` and `secret`, and `role` when given.
    ///
    /// No match is `None`; a failed login is not an error.
    #[must_use]
    pub fn login(&self, email: &str, secret: &str, role: Option<Role>) -> Option<AccountProfile> {
        let found = self.accounts.iter().find(|a| {
            a.email == email && a.secret == secret && role.is_none_or(|r| a.role == r)
        });
        match found {
            Some(account) => {
                tracing::debug!(account_id = %account.id, "credentials matched");
                Some(account.profile())
            }
            None => {
                tracing::debug!(%email, ?role, "no account matched credentials");
                None
            }
        }
    }

    /// Add a new account with a fresh ID.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` for blank fields, `AuthError::EmailTaken` for a
    /// duplicate email. The registry is unchanged on error.
    pub fn register(&mut self, new: NewAccount) -> Result<AccountProfile, AuthError> {
        new.validate()?;
        if self.contains_email(&new.email) {
            return Err(AuthError::EmailTaken(new.email));
        }

        let id = generate_unique_id(PREFIX_ACCOUNT, |id| self.find_by_id(id).is_some())?;
        let account = Account {
            id,
            display_name: new.display_name,
            email: new.email,
            secret: new.secret,
            role: new.role,
        };
        let profile = account.profile();
        tracing::info!(account_id = %profile.id, role = %profile.role, "account registered");
        self.accounts.push(account);
        Ok(profile)
    }

    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.email == email)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<AccountProfile> {
        self.accounts.iter().find(|a| a.id == id).map(Account::profile)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<AccountProfile> {
        self.accounts
            .iter()
            .find(|a| a.email == email)
            .map(Account::profile)
    }

    /// All accounts in registration order, secrets stripped.
    #[must_use]
    pub fn profiles(&self) -> Vec<AccountProfile> {
        self.accounts.iter().map(Account::profile).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
