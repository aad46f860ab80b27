use crate::errors::Error;
use crate::storage;
use crate::types::PlatformConfig;
use soroban_sdk::{Address, Env};

/// Authenticate `admin` and check it against the stored admin.
pub fn require_admin(env: &Env, admin: &Address) -> Result<PlatformConfig, Error> {
    admin.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

/// Load the config for a lifecycle call that must not run while paused.
pub fn require_open(env: &Env) -> Result<PlatformConfig, Error> {
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.is_paused {
        return Err(Error::PlatformPaused);
    }
    Ok(config)
}
