use keyring::Entry;
use thiserror::Error;
use tracing::debug;

pub const KEYRING_SERVICE: &str = "m365";

#[derive(Debug, Error)]
pub enum KeyringError {
    #[error("keyring error: {0}")]
    KeyringAccessError(#[from] keyring::Error),
}

/// Thin wrapper over the OS credential store, one entry per key.
pub struct Keyring {
    service: String,
}

impl Default for Keyring {
    fn default() -> Keyring {
        Keyring {
            service: KEYRING_SERVICE.to_string(),
        }
    }
}

impl Keyring {
    pub fn get(&self, key: &str) -> Result<Option<String>, KeyringError> {
        let entry = Entry::new(&self.service, key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(KeyringError::from(e)),
        }
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), KeyringError> {
        let entry = Entry::new(&self.service, key)?;
        entry.set_password(value)?;
        debug!("Stored keyring entry {}:{}", self.service, key);
        Ok(())
    }

    /// Removes the entry; a missing entry is not an error.
    pub fn delete(&self, key: &str) -> Result<(), KeyringError> {
        let entry = Entry::new(&self.service, key)?;
        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeyringError::from(e)),
        }
    }
}
