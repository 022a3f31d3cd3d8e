multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the core state variables of the flash loan pool.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the pool asset identifier.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenIdentifier`: The asset lent by this pool.
    #[view(getPoolAsset)]
    #[storage_mapper("pool_asset")]
    fn pool_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Returns the registry that deployed this pool.
    ///
    /// Only this address may name a loan initiator other than itself.
    #[view(getRegistry)]
    #[storage_mapper("registry_address")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Retrieves the current loan fee, WAD scaled.
    #[view(getFee)]
    #[storage_mapper("fee")]
    fn fee(&self) -> SingleValueMapper<BigUint>;

    /// Retrieves the sum of every depositor's shares.
    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    /// Retrieves the shares held by a depositor.
    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(&self, depositor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Retrieves the loan fees owed to the current pool owner.
    #[view(getOwnerFees)]
    #[storage_mapper("owner_fees")]
    fn owner_fees(&self) -> SingleValueMapper<BigUint>;

    /// Retrieves the loan fees owed to the protocol developer.
    #[view(getDeveloperFees)]
    #[storage_mapper("developer_fees")]
    fn developer_fees(&self) -> SingleValueMapper<BigUint>;

    /// Set while a receiver callback runs.
    #[view(isLoanOngoing)]
    #[storage_mapper("loan_ongoing")]
    fn loan_ongoing(&self) -> SingleValueMapper<bool>;
}
