#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_CALLER_IS_FEE_EXEMPT, ERROR_MUST_PROVIDE_MULTIPLE_ASSETS, ERROR_WRONG_FEE_PAID,
};
use common_proxies::proxy_registry;

/// Public entry point for pool creation.
///
/// Holds the `PoolCreator` capability on the registry and charges an EGLD fee per pool, waived
/// for exempt accounts. The caller becomes the holder of every ownership token it pays for.
#[multiversx_sc::contract]
pub trait PoolCreator: common_events::EventsModule {
    #[init]
    fn init(&self, registry: ManagedAddress, single_fee: BigUint, bulk_fee: BigUint) {
        self.registry_address().set(&registry);
        self.single_creation_fee().set(&single_fee);
        self.bulk_creation_fee().set(&bulk_fee);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Creates the pool of `asset`, paying exactly the single creation fee.
    ///
    /// # Errors
    /// - `ERROR_WRONG_FEE_PAID`: If the EGLD attached differs from the fee (zero for exempt callers).
    #[payable("EGLD")]
    #[endpoint(createPool)]
    fn create_pool(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let paid = self.call_value().egld().clone_value();

        let expected = if self.fee_exempt(&caller).get() {
            BigUint::zero()
        } else {
            self.single_creation_fee().get()
        };
        require!(paid == expected, ERROR_WRONG_FEE_PAID);

        self.create_for(asset, &caller)
    }

    /// Creates the pools of several assets at once, paying the bulk fee for each.
    ///
    /// # Errors
    /// - `ERROR_MUST_PROVIDE_MULTIPLE_ASSETS`: If fewer than two assets are given.
    /// - `ERROR_CALLER_IS_FEE_EXEMPT`: If an exempt caller attaches EGLD.
    /// - `ERROR_WRONG_FEE_PAID`: If the EGLD attached differs from `bulk_fee * assets`.
    #[payable("EGLD")]
    #[endpoint(createPools)]
    fn create_pools(
        &self,
        assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> MultiValueEncoded<ManagedAddress> {
        let caller = self.blockchain().get_caller();
        let paid = self.call_value().egld().clone_value();
        let count = assets.len();

        require!(count > 1, ERROR_MUST_PROVIDE_MULTIPLE_ASSETS);

        if self.fee_exempt(&caller).get() {
            require!(paid == 0u64, ERROR_CALLER_IS_FEE_EXEMPT);
        } else {
            let expected = self.bulk_creation_fee().get() * BigUint::from(count);
            require!(paid == expected, ERROR_WRONG_FEE_PAID);
        }

        let mut pools = MultiValueEncoded::new();
        for asset in assets {
            pools.push(self.create_for(asset, &caller));
        }

        pools
    }

    #[only_owner]
    #[endpoint(setFees)]
    fn set_fees(&self, single_fee: BigUint, bulk_fee: BigUint) {
        self.single_creation_fee().set(&single_fee);
        self.bulk_creation_fee().set(&bulk_fee);

        self.fees_changed_event(&single_fee, &bulk_fee);
    }

    #[only_owner]
    #[endpoint(setFeeExemption)]
    fn set_fee_exemption(&self, account: ManagedAddress, exempt: bool) {
        self.fee_exempt(&account).set(exempt);

        self.fee_exemption_set_event(&account, exempt);
    }

    /// Sends every collected creation fee to the contract owner. Anyone may trigger it.
    #[endpoint(withdraw)]
    fn withdraw(&self) -> BigUint {
        let owner = self.blockchain().get_owner_address();
        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        self.tx().to(&owner).egld(&amount).transfer_if_not_empty();

        amount
    }

    fn create_for(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
    ) -> ManagedAddress {
        self.tx()
            .to(self.registry_address().get())
            .typed(proxy_registry::RegistryProxy)
            .create_pool(asset, OptionalValue::Some(owner.clone()))
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getRegistry)]
    #[storage_mapper("registry_address")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSingleCreationFee)]
    #[storage_mapper("single_creation_fee")]
    fn single_creation_fee(&self) -> SingleValueMapper<BigUint>;

    #[view(getBulkCreationFee)]
    #[storage_mapper("bulk_creation_fee")]
    fn bulk_creation_fee(&self) -> SingleValueMapper<BigUint>;

    #[view(isFeeExempt)]
    #[storage_mapper("fee_exempt")]
    fn fee_exempt(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;
}
