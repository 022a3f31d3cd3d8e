multiversx_sc::imports!();

use common_constants::{
    DEVELOPER_FEES_STORAGE_KEY, FEE_STORAGE_KEY, OWNER_FEES_STORAGE_KEY, TOTAL_SHARES_STORAGE_KEY,
};
use common_errors::{ERROR_ADDRESS_IS_ZERO, ERROR_POOL_DOES_NOT_EXIST, ERROR_UNKNOWN_POOL};
use multiversx_sc::storage::StorageKey;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Reads a `BigUint` value from a pool's storage.
    ///
    /// # Arguments
    /// - `pool`: Address of the flash pool.
    /// - `key`: Storage key of the value inside the pool.
    ///
    /// # Returns
    /// - `SingleValueMapper`: The value, tied to the pool address.
    fn get_pool_value(
        &self,
        pool: ManagedAddress,
        key: &[u8],
    ) -> SingleValueMapper<BigUint, ManagedAddress> {
        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(pool, StorageKey::new(key))
    }

    fn get_pool_fee(&self, pool: ManagedAddress) -> BigUint {
        self.get_pool_value(pool, FEE_STORAGE_KEY).get()
    }

    fn get_pool_total_shares(&self, pool: ManagedAddress) -> BigUint {
        self.get_pool_value(pool, TOTAL_SHARES_STORAGE_KEY).get()
    }

    fn get_pool_owner_fees(&self, pool: ManagedAddress) -> BigUint {
        self.get_pool_value(pool, OWNER_FEES_STORAGE_KEY).get()
    }

    fn get_pool_developer_fees(&self, pool: ManagedAddress) -> BigUint {
        self.get_pool_value(pool, DEVELOPER_FEES_STORAGE_KEY).get()
    }

    /// Ensures a pool exists for `asset`.
    ///
    /// # Returns
    /// - `ManagedAddress`: The pool address.
    ///
    /// # Errors
    /// - `ERROR_POOL_DOES_NOT_EXIST`: If no pool was created for the asset.
    fn require_pool_exists(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let map = self.pools_map(asset);
        require!(!map.is_empty(), ERROR_POOL_DOES_NOT_EXIST);
        map.get()
    }

    /// Ensures `pool` was deployed by this registry.
    fn require_known_pool(&self, pool: &ManagedAddress) {
        require!(self.pools().contains(pool), ERROR_UNKNOWN_POOL);
    }

    /// Ensures an address is not the zero address.
    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }
}
