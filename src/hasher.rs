use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, Version};

use crate::bin_constants::DEFAULT_ARGON2_OUTPUT_LEN;
use crate::config::hasher_config::HasherConfigData;

pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> String;
    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl TryFrom<&HasherConfigData> for ProductionHasherConfig {
    type Error = argon2::Error;

    fn try_from(data: &HasherConfigData) -> Result<Self, argon2::Error> {
        Ok(ProductionHasherConfig {
            argon2_params: argon2::Params::new(
                data.m_cost,
                data.t_cost,
                data.p_cost,
                DEFAULT_ARGON2_OUTPUT_LEN,
            )?,
        })
    }
}

pub struct ProductionHasher {
    config: ProductionHasherConfig,
}

impl ProductionHasher {
    pub fn new(config: ProductionHasherConfig) -> ProductionHasher {
        ProductionHasher { config }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.config.argon2_params.clone(),
        )
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .expect("password hashing failed")
            .serialize()
            .to_string()
    }

    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool {
        hash.verify_password(&[&self.get_hasher()], password).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> ProductionHasher {
        let config = ProductionHasherConfig::try_from(&HasherConfigData {
            m_cost: 1024,
            t_cost: 1,
            p_cost: 1,
        })
        .expect("valid params");
        ProductionHasher::new(config)
    }

    #[test]
    fn generated_hash_verifies() {
        let hasher = hasher();
        let serialized = hasher.generate_hash("admin123");
        let hash = PasswordHash::new(&serialized).expect("parseable hash");
        assert!(hasher.check_hash(hash, "admin123"));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hasher = hasher();
        let serialized = hasher.generate_hash("admin123");
        let hash = PasswordHash::new(&serialized).expect("parseable hash");
        assert!(!hasher.check_hash(hash, "admin124"));
    }
}
