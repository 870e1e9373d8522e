use crate::model::user::SessionUser;

pub const SEED_USER_ID: &str = "1";
pub const SEED_USER_EMAIL: &str = "user@example.com";
pub const SEED_USER_NAME: &str = "Test User";
pub const SEED_USER_PASSWORD: &str = "password123";

#[derive(Clone, Debug, PartialEq)]
struct Account {
    user: SessionUser,
    password: String,
}

/// In-memory user accounts backing mock authentication.
///
/// Starts with a single seed account. Accounts registered at runtime live as long as
/// the directory does and are never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![Account {
                user: SessionUser {
                    id: SEED_USER_ID.to_string(),
                    email: SEED_USER_EMAIL.to_string(),
                    name: SEED_USER_NAME.to_string(),
                },
                password: SEED_USER_PASSWORD.to_string(),
            }],
        }
    }
}

impl UserDirectory {
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|account| account.user.email == email)
    }

    /// Returns the user owning `email` when `password` matches.
    pub fn verify(&self, email: &str, password: &str) -> Option<SessionUser> {
        self.accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
            .map(|account| account.user.clone())
    }

    /// Adds an account, `None` when the email is already taken.
    ///
    /// The new account's ID is the directory size after insertion.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Option<SessionUser> {
        if self.contains_email(email) {
            return None;
        }

        let user = SessionUser {
            id: (self.accounts.len() + 1).to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };

        self.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });

        Some(user)
    }
}
