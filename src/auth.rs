use argon2::PasswordHash;
use log::{info, warn};
use thiserror::Error;

use crate::hasher::Hasher;
use crate::session::Session;

#[derive(Debug, Error)]
pub enum AuthError {
    /// One message for every kind of mismatch, so responses never reveal
    /// whether the username or the password was wrong.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Checks submitted credentials against the one configured pair. The
/// plaintext from the config is hashed once at startup and dropped.
pub struct Authenticator {
    username: String,
    password_hash: String,
    hasher: Box<dyn Hasher>,
}

impl Authenticator {
    pub fn new(username: &str, password: &str, hasher: Box<dyn Hasher>) -> Authenticator {
        let password_hash = hasher.generate_hash(password);
        Authenticator {
            username: username.to_owned(),
            password_hash,
            hasher,
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        // The hash check runs regardless of the username comparison.
        let password_ok = match PasswordHash::new(&self.password_hash) {
            Ok(hash) => self.hasher.check_hash(hash, password),
            Err(_) => false,
        };
        if password_ok && username == self.username {
            info!("logged user \"{username}\" in");
            Ok(Session::new(username))
        } else {
            warn!("invalid credentials for user \"{username}\"");
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hasher_config::HasherConfigData;
    use crate::hasher::{ProductionHasher, ProductionHasherConfig};

    fn authenticator() -> Authenticator {
        let config = ProductionHasherConfig::try_from(&HasherConfigData {
            m_cost: 1024,
            t_cost: 1,
            p_cost: 1,
        })
        .expect("valid params");
        Authenticator::new("admin", "admin123", Box::new(ProductionHasher::new(config)))
    }

    #[test]
    fn correct_pair_logs_in() {
        let session = authenticator().login("admin", "admin123").expect("login");
        assert_eq!(session.username, "admin");
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let authenticator = authenticator();
        let wrong_password = authenticator.login("admin", "wrongpass").expect_err("rejected");
        let unknown_user = authenticator.login("root", "admin123").expect_err("rejected");
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid username or password.");
    }
}
