multiversx_sc::imports!();

use common_errors::{ERROR_CALLER_NOT_OWNER, ERROR_FROM_IS_NOT_OWNER, ERROR_NOT_OWNER_NOR_APPROVED};
use common_proxies::proxy_flash_pool;

use crate::{storage, validation};

/// Ownership tokens: one non-fungible token per pool, identified by the pool address.
///
/// The holder sets the pool fee and collects the owner share of every loan fee. Transfers settle
/// the fees accrued under the previous holder before reassigning the token.
#[multiversx_sc::module]
pub trait OwnershipModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Transfers the ownership token of `pool` from `from` to `to`.
    ///
    /// **Process**:
    /// 1. Checks that the caller is the holder or the approved operator, and that `from` is the holder.
    /// 2. Calls the pool's `ownerWithdraw`, paying every accrued owner fee to `from`.
    /// 3. Reassigns the token, updates the reverse lookup and clears the approval.
    ///
    /// # Errors
    /// - `ERROR_UNKNOWN_POOL`: If `pool` was not deployed by this registry.
    /// - `ERROR_NOT_OWNER_NOR_APPROVED`: If the caller may not move the token.
    /// - `ERROR_FROM_IS_NOT_OWNER`: If `from` does not hold the token.
    /// - `ERROR_ADDRESS_IS_ZERO`: If `to` is the zero address.
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, from: ManagedAddress, to: ManagedAddress, pool: ManagedAddress) {
        self.require_known_pool(&pool);

        let caller = self.blockchain().get_caller();
        let holder = self.pool_owner(&pool).get();
        let approval = self.pool_owner_approval(&pool);
        let is_approved = !approval.is_empty() && approval.get() == caller;
        require!(caller == holder || is_approved, ERROR_NOT_OWNER_NOR_APPROVED);
        require!(from == holder, ERROR_FROM_IS_NOT_OWNER);
        self.require_non_zero_address(&to);

        // Fees earned under the previous holder go to the previous holder
        self.tx()
            .to(&pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .owner_withdraw()
            .sync_call();

        approval.clear();
        self.owned_pools(&from).swap_remove(&pool);
        self.assign_ownership(&pool, &to);

        self.ownership_transferred_event(&pool, &from, &to);
    }

    /// Approves `operator` to transfer the ownership token of `pool`. Replaces any earlier approval.
    #[endpoint(approveOwnership)]
    fn approve_ownership(&self, pool: ManagedAddress, operator: ManagedAddress) {
        self.require_known_pool(&pool);

        let caller = self.blockchain().get_caller();
        require!(
            caller == self.pool_owner(&pool).get(),
            ERROR_CALLER_NOT_OWNER
        );

        self.pool_owner_approval(&pool).set(&operator);

        self.ownership_approved_event(&pool, &caller, &operator);
    }

    /// Records `holder` as the holder of the ownership token of `pool`.
    fn assign_ownership(&self, pool: &ManagedAddress, holder: &ManagedAddress) {
        self.pool_owner(pool).set(holder);
        self.owned_pools(holder).insert(pool.clone());
    }
}
