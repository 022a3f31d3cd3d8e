#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod access;
pub mod factory;
pub mod ownership;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Registry:
    access::AccessModule
    + factory::FactoryModule
    + ownership::OwnershipModule
    + storage::Storage
    + validation::ValidationModule
    + views::ViewsModule
    + common_events::EventsModule
{
    /// Initializes the registry.
    ///
    /// # Arguments
    /// - `pool_template`: Deployed flash pool whose code every new pool copies.
    /// - `developer`: Address receiving the developer share of every loan fee.
    ///
    /// The deployer is granted the `Admin` capability.
    #[init]
    fn init(&self, pool_template: &ManagedAddress, developer: &ManagedAddress) {
        self.require_non_zero_address(pool_template);
        self.require_non_zero_address(developer);

        self.pool_template_address().set(pool_template);
        self.developer().set(developer);

        let deployer = self.blockchain().get_caller();
        self.capabilities(&deployer).insert(Capability::Admin);
        self.capability_granted_event(&deployer, Capability::Admin, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Creates the flash pool of an asset and mints its ownership token.
    ///
    /// # Arguments
    /// - `asset`: Token identifier (EGLD or ESDT) lent by the pool.
    /// - `opt_owner`: Holder of the ownership token, the caller when omitted.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the newly created pool.
    ///
    /// # Errors
    /// - `ERROR_MISSING_POOL_CREATOR_CAPABILITY`: If the caller may not create pools.
    /// - `ERROR_POOL_ALREADY_EXISTS`: If the asset already has a pool.
    /// - `ERROR_INVALID_TICKER`: If the asset identifier is invalid.
    /// - `ERROR_TEMPLATE_EMPTY`: If no pool template is configured.
    #[endpoint(createPool)]
    fn create_pool(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        opt_owner: OptionalValue<ManagedAddress>,
    ) -> ManagedAddress {
        let caller = self.require_capability(Capability::PoolCreator);

        require!(self.pools_map(&asset).is_empty(), ERROR_POOL_ALREADY_EXISTS);
        require!(asset.is_valid(), ERROR_INVALID_TICKER);

        let owner = match opt_owner {
            OptionalValue::Some(owner) => owner,
            OptionalValue::None => caller,
        };
        self.require_non_zero_address(&owner);

        let pool = self.deploy_pool(&asset);
        self.require_non_zero_address(&pool);

        self.pools_map(&asset).set(&pool);
        self.pools().insert(pool.clone());
        self.assign_ownership(&pool, &owner);

        self.pool_created_event(&asset, &pool, &owner);

        pool
    }

    /// Takes a flash loan from the pool of `asset`, with the caller as initiator.
    ///
    /// # Returns
    /// - `BigUint`: The fee charged by the pool.
    ///
    /// # Errors
    /// - `ERROR_POOL_DOES_NOT_EXIST`: If no pool was created for the asset.
    #[endpoint(initiateTransaction)]
    fn initiate_transaction(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        principal: BigUint,
        receiver: ManagedAddress,
        data: ManagedBuffer,
    ) -> BigUint {
        let pool = self.require_pool_exists(&asset);
        let initiator = self.blockchain().get_caller();

        self.tx()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .initiate_transaction_with_initiator(initiator, principal, receiver, data)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Sets the developer receiving the developer share of loan fees. Fees already accrued in a
    /// pool are paid to whoever is the developer when they are withdrawn.
    #[endpoint(setDeveloper)]
    fn set_developer(&self, developer: ManagedAddress) {
        self.require_capability(Capability::Admin);
        self.require_non_zero_address(&developer);

        self.developer().set(&developer);
        self.developer_changed_event(&developer);
    }

    /// Sets the template contract future pools are deployed from.
    #[endpoint(setPoolTemplate)]
    fn set_pool_template(&self, pool_template: ManagedAddress) {
        self.require_capability(Capability::Admin);
        self.require_non_zero_address(&pool_template);

        self.pool_template_address().set(&pool_template);
    }

    /// Upgrades the pool of `asset` to the current template code.
    #[endpoint(upgradePool)]
    fn upgrade_pool_endpoint(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.require_capability(Capability::Admin);
        let pool = self.require_pool_exists(&asset);

        self.upgrade_pool(pool);
    }
}
