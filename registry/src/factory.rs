use crate::storage;
use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_flash_pool;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a new flash pool for `asset` from the pool template.
    ///
    /// The pool records the registry (the deploying caller) as its factory.
    /// `PAYABLE_BY_SC` lets loan receivers repay with a plain transfer.
    fn deploy_pool(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        require!(
            !self.pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        let new_address = self
            .tx()
            .typed(proxy_flash_pool::FlashPoolProxy)
            .init(asset)
            .from_source(self.pool_template_address().get())
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        new_address
    }

    /// Replaces the code of `pool_address` with the current template, keeping its storage.
    fn upgrade_pool(&self, pool_address: ManagedAddress) {
        require!(
            !self.pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );
        self.tx()
            .to(pool_address)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .upgrade()
            .from_source(self.pool_template_address().get())
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .upgrade_async_call_and_exit();
    }
}
