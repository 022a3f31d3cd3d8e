multiversx_sc::imports!();

use common_errors::{ERROR_MISSING_ADMIN_CAPABILITY, ERROR_MISSING_POOL_CREATOR_CAPABILITY};
use common_structs::Capability;

use crate::{storage, validation};

/// Capability based access control.
///
/// Every account holds an explicit set of capabilities. `Admin` accounts grant and revoke
/// capabilities (their own included), `PoolCreator` accounts create pools.
#[multiversx_sc::module]
pub trait AccessModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Grants `capability` to `account`.
    ///
    /// # Arguments
    /// - `account`: Address receiving the capability.
    /// - `capability`: Capability granted.
    ///
    /// # Errors
    /// - `ERROR_MISSING_ADMIN_CAPABILITY`: If the caller is not an administrator.
    /// - `ERROR_ADDRESS_IS_ZERO`: If `account` is the zero address.
    #[endpoint(grantCapability)]
    fn grant_capability(&self, account: ManagedAddress, capability: Capability) {
        let caller = self.require_capability(Capability::Admin);
        self.require_non_zero_address(&account);

        if self.capabilities(&account).insert(capability) {
            self.capability_granted_event(&account, capability, &caller);
        }
    }

    /// Revokes `capability` from `account`. Revoking a capability that is not held is a no-op.
    #[endpoint(revokeCapability)]
    fn revoke_capability(&self, account: ManagedAddress, capability: Capability) {
        let caller = self.require_capability(Capability::Admin);

        if self.capabilities(&account).swap_remove(&capability) {
            self.capability_revoked_event(&account, capability, &caller);
        }
    }

    #[view(hasCapability)]
    fn has_capability(&self, account: ManagedAddress, capability: Capability) -> bool {
        self.capabilities(&account).contains(&capability)
    }

    /// Ensures the caller holds `capability`.
    ///
    /// # Returns
    /// - `ManagedAddress`: The caller.
    fn require_capability(&self, capability: Capability) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let granted = self.capabilities(&caller).contains(&capability);

        match capability {
            Capability::Admin => require!(granted, ERROR_MISSING_ADMIN_CAPABILITY),
            Capability::PoolCreator => require!(granted, ERROR_MISSING_POOL_CREATOR_CAPABILITY),
        }

        caller
    }
}
