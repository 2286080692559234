//! # Circuit Keeper
//!
//! Message server and queries of the circuit-breaker module.
//!
//! ## Permission rules
//!
//! - Authorize: the granter must hold `SuperAdmin` or be the authority.
//! - Trip/Reset, per type URL: the signer must hold `SuperAdmin` or
//!   `AllMsgs`, be the authority, or hold `SomeMsgs` listing that URL.
//!
//! A missing permission record counts as no permission wherever it is only
//! checked. Trip and Reset validate every URL before writing any, so a
//! rejected message leaves the disabled set untouched.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::config::CircuitConfig;
use crate::domain::{
    Address, CircuitMsg, CircuitResponse, GenesisAccountPermissions, GenesisState,
    MsgAuthorizeCircuitBreaker, MsgAuthorizeCircuitBreakerResponse, MsgResetCircuitBreaker,
    MsgResetCircuitBreakerResponse, MsgTripCircuitBreaker, MsgTripCircuitBreakerResponse,
    PermissionLevel, Permissions,
};
use crate::error::CircuitError;
use crate::ports::{AddressCodec, CircuitStore};

/// Circuit-breaker keeper.
pub struct CircuitKeeper<S: CircuitStore, C: AddressCodec> {
    store: S,
    codec: C,
    authority: Address,
}

impl<S: CircuitStore, C: AddressCodec> CircuitKeeper<S, C> {
    /// Create a keeper, decoding the configured authority with `codec`.
    pub fn new(store: S, codec: C, config: &CircuitConfig) -> Result<Self, CircuitError> {
        config.validate()?;
        let authority = codec
            .string_to_bytes(&config.authority)
            .map_err(|e| CircuitError::InvalidConfig(format!("authority: {e}")))?;

        Ok(Self {
            store,
            codec,
            authority,
        })
    }

    /// Module authority address bytes.
    pub fn authority(&self) -> &[u8] {
        &self.authority
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // MESSAGES
    // =========================================================================

    /// Overwrite the grantee's permissions.
    pub fn authorize_circuit_breaker(
        &self,
        msg: &MsgAuthorizeCircuitBreaker,
    ) -> Result<MsgAuthorizeCircuitBreakerResponse, CircuitError> {
        let granter = self.codec.string_to_bytes(&msg.granter)?;

        if granter != self.authority {
            let level = self.store.get_permissions(&granter)?.map(|p| p.level);
            if level != Some(PermissionLevel::SuperAdmin) {
                warn!(granter = %msg.granter, "Rejected authorization from non super admin");
                return Err(CircuitError::Unauthorized(
                    "only super admins can authorize users".to_string(),
                ));
            }
        }

        let grantee = self.codec.string_to_bytes(&msg.grantee)?;

        let permissions = msg.permissions.clone().ok_or_else(|| {
            CircuitError::InvalidRequest("permissions cannot be nil".to_string())
        })?;

        let level = permissions.level;
        self.store.set_permissions(&grantee, permissions)?;

        info!(
            granter = %msg.granter,
            grantee = %msg.grantee,
            ?level,
            "Circuit breaker permissions granted"
        );
        Ok(MsgAuthorizeCircuitBreakerResponse { success: true })
    }

    /// Disable the listed message types.
    pub fn trip_circuit_breaker(
        &self,
        msg: &MsgTripCircuitBreaker,
    ) -> Result<MsgTripCircuitBreakerResponse, CircuitError> {
        let address = self.codec.string_to_bytes(&msg.authority)?;
        let perms = self.store.get_permissions(&address)?.unwrap_or_default();

        let mut staged: BTreeSet<&str> = BTreeSet::new();
        for url in &msg.msg_type_urls {
            if staged.contains(url.as_str()) || self.store.is_disabled(url)? {
                return Err(CircuitError::AlreadyDisabled(url.clone()));
            }
            self.check_permission(&address, &perms, url, "trip")?;
            staged.insert(url.as_str());
        }

        self.write_all(&msg.msg_type_urls, S::disable, S::enable)?;

        info!(authority = %msg.authority, urls = ?msg.msg_type_urls, "Circuit breaker tripped");
        Ok(MsgTripCircuitBreakerResponse { success: true })
    }

    /// Re-enable the listed message types.
    pub fn reset_circuit_breaker(
        &self,
        msg: &MsgResetCircuitBreaker,
    ) -> Result<MsgResetCircuitBreakerResponse, CircuitError> {
        let address = self.codec.string_to_bytes(&msg.authority)?;
        let perms = self.store.get_permissions(&address)?.unwrap_or_default();

        let mut staged: BTreeSet<&str> = BTreeSet::new();
        for url in &msg.msg_type_urls {
            if staged.contains(url.as_str()) || !self.store.is_disabled(url)? {
                return Err(CircuitError::NotDisabled(url.clone()));
            }
            self.check_permission(&address, &perms, url, "reset")?;
            staged.insert(url.as_str());
        }

        self.write_all(&msg.msg_type_urls, S::enable, S::disable)?;

        info!(authority = %msg.authority, urls = ?msg.msg_type_urls, "Circuit breaker reset");
        Ok(MsgResetCircuitBreakerResponse { success: true })
    }

    /// Dispatch any circuit-breaker message.
    pub fn execute(&self, msg: &CircuitMsg) -> Result<CircuitResponse, CircuitError> {
        debug!(
            type_url = msg.type_url(),
            signer = msg.signer(),
            "Executing circuit message"
        );
        match msg {
            CircuitMsg::Authorize(m) => self
                .authorize_circuit_breaker(m)
                .map(CircuitResponse::Authorize),
            CircuitMsg::Trip(m) => self.trip_circuit_breaker(m).map(CircuitResponse::Trip),
            CircuitMsg::Reset(m) => self.reset_circuit_breaker(m).map(CircuitResponse::Reset),
        }
    }

    /// Apply `write` to every URL. On a store failure the URLs already
    /// written are reverted with `undo`, newest first.
    fn write_all(
        &self,
        urls: &[String],
        write: fn(&S, &str) -> Result<(), CircuitError>,
        undo: fn(&S, &str) -> Result<(), CircuitError>,
    ) -> Result<(), CircuitError> {
        for (written, url) in urls.iter().enumerate() {
            if let Err(e) = write(&self.store, url) {
                for done in urls[..written].iter().rev() {
                    if let Err(undo_err) = undo(&self.store, done) {
                        warn!(url = %done, error = %undo_err, "Failed to revert circuit write");
                    }
                }
                warn!(url = %url, error = %e, "Circuit write failed, earlier writes reverted");
                return Err(e);
            }
        }
        Ok(())
    }

    fn check_permission(
        &self,
        address: &[u8],
        perms: &Permissions,
        url: &str,
        action: &str,
    ) -> Result<(), CircuitError> {
        if perms.level.covers_all_msgs() || address == self.authority.as_slice() {
            return Ok(());
        }

        if perms.level == PermissionLevel::SomeMsgs {
            if perms.lists(url) {
                return Ok(());
            }
            warn!(
                url,
                action,
                "Rejected circuit breaker change outside allow-list"
            );
            return Err(CircuitError::Unauthorized(format!(
                "account does not have permission to {action} circuit breaker for message {url}"
            )));
        }

        warn!(
            url,
            action,
            "Rejected circuit breaker change without permission"
        );
        Err(CircuitError::Unauthorized(format!(
            "account does not have permission to {action} circuit breaker"
        )))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Permissions of `address`. Fails with `NotFound` when none were granted.
    pub fn account(&self, address: &str) -> Result<Permissions, CircuitError> {
        let bytes = self.codec.string_to_bytes(address)?;
        self.store
            .get_permissions(&bytes)?
            .ok_or(CircuitError::NotFound)
    }

    /// All grants, ordered by address bytes.
    pub fn accounts(&self) -> Result<Vec<GenesisAccountPermissions>, CircuitError> {
        let mut accounts = Vec::new();
        for (address, permissions) in self.store.list_permissions()? {
            accounts.push(GenesisAccountPermissions {
                address: self.codec.bytes_to_string(&address)?,
                permissions,
            });
        }
        Ok(accounts)
    }

    /// Disabled type URLs, sorted.
    pub fn disabled_list(&self) -> Result<Vec<String>, CircuitError> {
        self.store.list_disabled()
    }

    /// Whether `msg_type_url` may execute.
    pub fn is_allowed(&self, msg_type_url: &str) -> Result<bool, CircuitError> {
        Ok(!self.store.is_disabled(msg_type_url)?)
    }

    /// Admission gate: fails on the first disabled type URL.
    pub fn ensure_allowed<T: AsRef<str>>(&self, msg_type_urls: &[T]) -> Result<(), CircuitError> {
        for url in msg_type_urls {
            let url = url.as_ref();
            if !self.is_allowed(url)? {
                debug!(url, "Message blocked by circuit breaker");
                return Err(CircuitError::MessageDisabled(url.to_string()));
            }
        }
        Ok(())
    }

    // =========================================================================
    // GENESIS
    // =========================================================================

    /// Load grants and disabled type URLs.
    pub fn init_genesis(&self, genesis: &GenesisState) -> Result<(), CircuitError> {
        for account in &genesis.account_permissions {
            let address = self.codec.string_to_bytes(&account.address)?;
            self.store
                .set_permissions(&address, account.permissions.clone())?;
        }
        for url in &genesis.disabled_type_urls {
            self.store.disable(url)?;
        }

        info!(
            accounts = genesis.account_permissions.len(),
            disabled = genesis.disabled_type_urls.len(),
            "Circuit genesis loaded"
        );
        Ok(())
    }

    /// Snapshot grants and disabled type URLs.
    pub fn export_genesis(&self) -> Result<GenesisState, CircuitError> {
        Ok(GenesisState {
            account_permissions: self.accounts()?,
            disabled_type_urls: self.disabled_list()?,
        })
    }
}
