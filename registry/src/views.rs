multiversx_sc::imports!();

use common_proxies::proxy_flash_pool;
use common_structs::PoolInfo;

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage + validation::ValidationModule {
    /// Retrieves a snapshot of the pool of `asset`.
    ///
    /// Reads the ledger from the pool's storage and asks the pool for its liquidity.
    ///
    /// # Arguments
    /// - `asset`: Asset lent by the pool.
    ///
    /// # Returns
    /// - `PoolInfo<Self::Api>`: Address, owner, fee, share supply, liquidity and accrued fees.
    #[view(getPoolInfo)]
    fn get_pool_info(&self, asset: EgldOrEsdtTokenIdentifier) -> PoolInfo<Self::Api> {
        let pool = self.require_pool_exists(&asset);

        let liquidity = self
            .tx()
            .to(&pool)
            .typed(proxy_flash_pool::FlashPoolProxy)
            .get_available_liquidity()
            .returns(ReturnsResult)
            .sync_call_readonly();

        PoolInfo {
            owner: self.pool_owner(&pool).get(),
            fee: self.get_pool_fee(pool.clone()),
            total_shares: self.get_pool_total_shares(pool.clone()),
            liquidity,
            owner_fees: self.get_pool_owner_fees(pool.clone()),
            developer_fees: self.get_pool_developer_fees(pool.clone()),
            asset,
            pool,
        }
    }
}
