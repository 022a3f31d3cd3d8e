multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_constants::{DEVELOPER_STORAGE_KEY, POOL_OWNER_STORAGE_KEY};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_CALLER_NOT_OWNER, ERROR_FLASHLOAN_ONGOING,
    ERROR_INVALID_ASSET,
};
use multiversx_sc::storage::StorageKey;

/// The `UtilsModule` trait provides a collection of helper functions supporting core pool operations.
///
/// **Scope**: Offers utilities for standardized asset transfers, payment retrieval and validation,
/// guards, and reads of the registry state the pool depends on.
///
/// **Goal**: To encapsulate common, reusable logic, promoting clarity and consistency within the pool contract.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Current holder of this pool's ownership token, stored by the registry.
    ///
    /// Read straight from the registry's storage; both contracts live in the same shard.
    fn registry_pool_owner(
        &self,
        registry: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress> {
        let mut key = StorageKey::new(POOL_OWNER_STORAGE_KEY);
        key.append_item(&self.blockchain().get_sc_address());

        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(registry, key)
    }

    /// Developer address configured on the registry.
    fn registry_developer(
        &self,
        registry: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress> {
        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(
            registry,
            StorageKey::new(DEVELOPER_STORAGE_KEY),
        )
    }

    /// Transfers the pool asset to a specified address.
    ///
    /// **Scope**: Facilitates asset transfers from the contract to a recipient.
    ///
    /// # Arguments
    /// - `cache`: Reference to the pool state (`Cache<Self>`), providing the asset.
    /// - `amount`: Amount to transfer.
    /// - `to`: Recipient address (`ManagedAddress`).
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: Payment object representing the transfer.
    ///
    /// **Security Tip**: Uses `transfer_if_not_empty` to avoid empty transfers.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(cache.pool_asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Retrieves and validates the payment amount from a transaction.
    ///
    /// **Scope**: Extracts the payment amount (EGLD or ESDT) and ensures it matches the pool's asset.
    ///
    /// # Returns
    /// - `BigUint`: Validated, non-zero payment amount.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        self.require_amount_greater_than_zero(&amount);

        amount
    }

    /// Ensures an amount is greater than zero.
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// Rejects ledger changes while a receiver callback is running.
    fn reentrancy_guard(&self) {
        require!(!self.loan_ongoing().get(), ERROR_FLASHLOAN_ONGOING);
    }

    /// Ensures the caller holds this pool's ownership token.
    fn require_pool_owner(&self, cache: &Cache<Self>) {
        let owner = self.registry_pool_owner(cache.registry.clone()).get();
        require!(
            self.blockchain().get_caller() == owner,
            ERROR_CALLER_NOT_OWNER
        );
    }

    /// Pays every accrued owner fee to the current ownership token holder.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: The payment sent, zero when nothing accrued.
    fn settle_owner_fees(&self, cache: &mut Cache<Self>) -> EgldOrEsdtTokenPayment<Self::Api> {
        let owner = self.registry_pool_owner(cache.registry.clone()).get();
        let amount = core::mem::replace(&mut cache.owner_fees, BigUint::zero());

        self.owner_fees_withdrawn_event(&owner, &amount);
        self.send_asset(cache, &amount, &owner)
    }

    /// Pays every accrued developer fee to the developer configured on the registry.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: The payment sent, zero when nothing accrued.
    fn settle_developer_fees(
        &self,
        cache: &mut Cache<Self>,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let developer = self.registry_developer(cache.registry.clone()).get();
        let amount = core::mem::replace(&mut cache.developer_fees, BigUint::zero());

        self.developer_fees_withdrawn_event(&developer, &amount);
        self.send_asset(cache, &amount, &developer)
    }
}
