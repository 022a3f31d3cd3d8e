use crate::constants::*;

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, ManagedAddress,
        ManagedBuffer, MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult,
        TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsLogs, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

use registry::{
    proxy_flash_mock, proxy_flash_pool, proxy_pool_creator, proxy_registry, Capability, PoolInfo,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(REGISTRY_PATH, registry::ContractBuilder);
    blockchain.register_contract(FLASH_POOL_PATH, flash_pool::ContractBuilder);
    blockchain.register_contract(FLASH_MOCK_PATH, flash_mock::ContractBuilder);
    blockchain.register_contract(POOL_CREATOR_PATH, pool_creator::ContractBuilder);

    blockchain
}

pub fn asset_id(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

/// Whole tokens expressed in the smallest unit of an 18 decimals asset.
pub fn tokens(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

pub struct FlashLoanTestState {
    pub world: ScenarioWorld,
    pub registry_sc: ManagedAddress<StaticApi>,
    pub template_address_flash_pool: ManagedAddress<StaticApi>,
    pub flash_mock: ManagedAddress<StaticApi>,
}

impl FlashLoanTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);

        let template_address_flash_pool = setup_template_flash_pool(&mut world);
        let registry_sc = setup_registry(&mut world, &template_address_flash_pool);

        let flash_mock = setup_flash_mock(&mut world);
        setup_flasher(&mut world, flash_mock.clone());

        let mut state = Self {
            world,
            registry_sc,
            template_address_flash_pool,
            flash_mock,
        };

        state.grant_capability(
            &OWNER_ADDRESS,
            CREATOR_ADDRESS.to_managed_address(),
            Capability::PoolCreator,
        );

        state
    }

    /// Fresh state with the USDC pool created by `CREATOR_ADDRESS`.
    pub fn with_usdc_pool() -> (Self, ManagedAddress<StaticApi>) {
        let mut state = Self::new();
        let pool = state.create_pool(&CREATOR_ADDRESS, USDC_TOKEN, OptionalValue::None);

        (state, pool)
    }

    // Registry operations
    pub fn create_pool(
        &mut self,
        from: &TestAddress,
        asset: TestTokenIdentifier,
        opt_owner: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .create_pool(asset_id(asset), opt_owner)
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_egld_pool(&mut self, from: &TestAddress) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .create_pool(
                EgldOrEsdtTokenIdentifier::<StaticApi>::egld(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_pool_error(
        &mut self,
        from: &TestAddress,
        asset: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .create_pool(asset_id(asset), OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn grant_capability(
        &mut self,
        from: &TestAddress,
        account: ManagedAddress<StaticApi>,
        capability: Capability,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .grant_capability(account, capability)
            .run();
    }

    pub fn grant_capability_error(
        &mut self,
        from: &TestAddress,
        account: ManagedAddress<StaticApi>,
        capability: Capability,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .grant_capability(account, capability)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn revoke_capability(
        &mut self,
        from: &TestAddress,
        account: ManagedAddress<StaticApi>,
        capability: Capability,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .revoke_capability(account, capability)
            .run();
    }

    pub fn set_developer(&mut self, from: &TestAddress, developer: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .set_developer(developer)
            .run();
    }

    pub fn set_developer_error(
        &mut self,
        from: &TestAddress,
        developer: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .set_developer(developer)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_pool_template(&mut self, from: &TestAddress, template: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .set_pool_template(template)
            .run();
    }

    pub fn set_pool_template_error(
        &mut self,
        from: &TestAddress,
        template: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .set_pool_template(template)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn upgrade_pool(&mut self, from: &TestAddress, asset: TestTokenIdentifier) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .upgrade_pool(asset_id(asset))
            .run();
    }

    pub fn upgrade_pool_error(
        &mut self,
        from: &TestAddress,
        asset: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .upgrade_pool(asset_id(asset))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn transfer_ownership(
        &mut self,
        from: &TestAddress,
        owner: &TestAddress,
        to: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .transfer_ownership(*owner, *to, pool)
            .run();
    }

    pub fn transfer_ownership_error(
        &mut self,
        from: &TestAddress,
        owner: &TestAddress,
        to: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .transfer_ownership(*owner, *to, pool)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn approve_ownership(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        operator: &TestAddress,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .approve_ownership(pool, *operator)
            .run();
    }

    pub fn approve_ownership_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        operator: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .approve_ownership(pool, *operator)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn registry_flash_loan(
        &mut self,
        from: &TestAddress,
        asset: TestTokenIdentifier,
        principal: BigUint<StaticApi>,
        data: &[u8],
    ) -> BigUint<StaticApi> {
        let receiver = self.flash_mock.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .initiate_transaction(asset_id(asset), principal, receiver, ManagedBuffer::from(data))
            .returns(ReturnsResult)
            .run()
    }

    pub fn registry_flash_loan_error(
        &mut self,
        from: &TestAddress,
        asset: TestTokenIdentifier,
        principal: BigUint<StaticApi>,
        data: &[u8],
        error_message: &[u8],
    ) {
        let receiver = self.flash_mock.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .initiate_transaction(asset_id(asset), principal, receiver, ManagedBuffer::from(data))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Pool operations
    pub fn deposit(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .deposit()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .deposit()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deposit_egld(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .deposit()
            .egld(amount)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .withdraw(amount)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .withdraw(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn flash_loan(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        principal: BigUint<StaticApi>,
        data: &[u8],
    ) -> BigUint<StaticApi> {
        let receiver = self.flash_mock.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .initiate_transaction(principal, receiver, ManagedBuffer::from(data))
            .returns(ReturnsResult)
            .run()
    }

    pub fn flash_loan_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        principal: BigUint<StaticApi>,
        data: &[u8],
        error_message: &[u8],
    ) {
        let receiver = self.flash_mock.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .initiate_transaction(principal, receiver, ManagedBuffer::from(data))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn flash_loan_with_initiator_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        initiator: &TestAddress,
        principal: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let receiver = self.flash_mock.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .initiate_transaction_with_initiator(
                *initiator,
                principal,
                receiver,
                ManagedBuffer::new(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_fee(&mut self, from: &TestAddress, pool: &ManagedAddress<StaticApi>, rate: u128) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .set_fee(BigUint::from(rate))
            .run();
    }

    pub fn set_fee_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        rate: u128,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .set_fee(BigUint::from(rate))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn owner_withdraw(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
    ) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .owner_withdraw()
            .returns(ReturnsResult)
            .run()
    }

    pub fn developer_withdraw(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
    ) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .developer_withdraw()
            .returns(ReturnsResult)
            .run()
    }

    // Pool views
    pub fn total_shares(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .total_shares()
            .returns(ReturnsResult)
            .run()
    }

    pub fn shares(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        depositor: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .shares(*depositor)
            .returns(ReturnsResult)
            .run()
    }

    pub fn owner_fees(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .owner_fees()
            .returns(ReturnsResult)
            .run()
    }

    pub fn developer_fees(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .developer_fees()
            .returns(ReturnsResult)
            .run()
    }

    pub fn provider_fees(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_provider_fees()
            .returns(ReturnsResult)
            .run()
    }

    pub fn backing(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_backing()
            .returns(ReturnsResult)
            .run()
    }

    pub fn redeemable_value(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        depositor: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_redeemable_value(*depositor)
            .returns(ReturnsResult)
            .run()
    }

    pub fn fee(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .fee()
            .returns(ReturnsResult)
            .run()
    }

    pub fn flash_fee(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        principal: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .flash_fee(principal)
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_flash_loan(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .max_flash_loan()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_view_owner(&mut self, pool: &ManagedAddress<StaticApi>) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_owner()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_view_developer(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_developer()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_registry(&mut self, pool: &ManagedAddress<StaticApi>) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .registry_address()
            .returns(ReturnsResult)
            .run()
    }

    // Registry views
    pub fn pool_owner(&mut self, pool: &ManagedAddress<StaticApi>) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .pool_owner(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn owned_pools(&mut self, holder: &TestAddress) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .owned_pools(*holder)
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn pool_address(&mut self, asset: TestTokenIdentifier) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .pools_map(asset_id(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_info(&mut self, asset: TestTokenIdentifier) -> PoolInfo<StaticApi> {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .get_pool_info(asset_id(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_template(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .pool_template_address()
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_capability(&mut self, account: &TestAddress, capability: Capability) -> bool {
        self.world
            .query()
            .to(&self.registry_sc)
            .typed(proxy_registry::RegistryProxy)
            .has_capability(*account, capability)
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_initiator(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.flash_mock)
            .typed(proxy_flash_mock::FlashMockProxy)
            .last_initiator()
            .returns(ReturnsResult)
            .run()
    }

    // Pool creator
    pub fn deploy_pool_creator(&mut self) -> ManagedAddress<StaticApi> {
        let registry = self.registry_sc.clone();
        let pool_creator = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .init(
                registry,
                tokens(SINGLE_CREATION_FEE),
                tokens(BULK_CREATION_FEE),
            )
            .code(POOL_CREATOR_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.grant_capability(&OWNER_ADDRESS, pool_creator.clone(), Capability::PoolCreator);

        pool_creator
    }

    pub fn creator_create_pool(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        payment: BigUint<StaticApi>,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .create_pool(asset_id(asset))
            .egld(payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn creator_create_pool_error(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .create_pool(asset_id(asset))
            .egld(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn creator_create_pools(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        assets: &[TestTokenIdentifier],
        payment: BigUint<StaticApi>,
    ) -> Vec<ManagedAddress<StaticApi>> {
        let mut encoded = MultiValueEncoded::new();
        for asset in assets {
            encoded.push(asset_id(asset.clone()));
        }

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .create_pools(encoded)
            .egld(payment)
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn creator_create_pools_error(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        assets: &[TestTokenIdentifier],
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let mut encoded = MultiValueEncoded::new();
        for asset in assets {
            encoded.push(asset_id(asset.clone()));
        }

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .create_pools(encoded)
            .egld(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn creator_withdraw(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .withdraw()
            .returns(ReturnsResult)
            .run()
    }

    /// Sets both creation fees and reports whether `fees_changed` was logged.
    pub fn creator_set_fees(
        &mut self,
        pool_creator: &ManagedAddress<StaticApi>,
        single_fee: BigUint<StaticApi>,
        bulk_fee: BigUint<StaticApi>,
    ) -> bool {
        let logs = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .set_fees(single_fee, bulk_fee)
            .returns(ReturnsLogs)
            .run();

        logs.iter().any(|log| {
            log.topics.first().map(|topic| topic.as_slice()) == Some(b"fees_changed".as_slice())
        })
    }

    pub fn creator_set_fees_error(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        single_fee: BigUint<StaticApi>,
        bulk_fee: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .set_fees(single_fee, bulk_fee)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn creator_set_fee_exemption_error(
        &mut self,
        from: &TestAddress,
        pool_creator: &ManagedAddress<StaticApi>,
        account: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .set_fee_exemption(*account, true)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn single_creation_fee(
        &mut self,
        pool_creator: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .single_creation_fee()
            .returns(ReturnsResult)
            .run()
    }

    pub fn bulk_creation_fee(
        &mut self,
        pool_creator: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .bulk_creation_fee()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_fee_exempt(
        &mut self,
        pool_creator: &ManagedAddress<StaticApi>,
        account: &TestAddress,
    ) -> bool {
        self.world
            .query()
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .fee_exempt(*account)
            .returns(ReturnsResult)
            .run()
    }

    pub fn creator_set_fee_exemption(
        &mut self,
        pool_creator: &ManagedAddress<StaticApi>,
        account: &TestAddress,
        exempt: bool,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pool_creator)
            .typed(proxy_pool_creator::PoolCreatorProxy)
            .set_fee_exemption(*account, exempt)
            .run();
    }
}

pub fn setup_template_flash_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_flash_pool::FlashPoolProxy)
        .init(asset_id(USDC_TOKEN))
        .code(FLASH_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_registry(
    world: &mut ScenarioWorld,
    template_address_flash_pool: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_registry::RegistryProxy)
        .init(template_address_flash_pool, DEVELOPER_ADDRESS)
        .code(REGISTRY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_flash_mock(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_flash_mock::FlashMockProxy)
        .init()
        .code(FLASH_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .balance(tokens(ACCOUNT_EGLD));
    world.account(DEVELOPER_ADDRESS).nonce(1);
    world
        .account(CREATOR_ADDRESS)
        .nonce(1)
        .balance(tokens(ACCOUNT_EGLD));
    world.account(NEW_OWNER_ADDRESS).nonce(1);
    world.account(OPERATOR_ADDRESS).nonce(1);

    for depositor in [DEPOSITOR_A, DEPOSITOR_B, BORROWER_ADDRESS] {
        world
            .account(depositor)
            .nonce(1)
            .balance(tokens(ACCOUNT_EGLD))
            .esdt_balance(USDC_TOKEN, tokens(ACCOUNT_TOKENS))
            .esdt_balance(XOXNO_TOKEN, tokens(ACCOUNT_TOKENS));
    }
}

pub fn setup_flasher(world: &mut ScenarioWorld, flash: ManagedAddress<StaticApi>) {
    world.set_esdt_balance(flash, USDC_TOKEN.as_bytes(), tokens(ACCOUNT_TOKENS));
}
