multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the pool's ledger, cached from on-chain storage for efficient access and updates.
///
/// **Scope**: Holds the share supply, the accrued owner/developer fees and the pool configuration.
///
/// **Goal**: Let each endpoint work on an in-memory view and commit once, when the cache is dropped.
///
/// The asset balance is never cached: every value derived from it (`backing`, `liquidity`) reads
/// the live balance, so a loan callback can not leave a stale ratio behind.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    sc_ref: &'a C,
    /// The asset lent by the pool.
    pub pool_asset: EgldOrEsdtTokenIdentifier<C::Api>,
    /// The registry that deployed the pool.
    pub registry: ManagedAddress<C::Api>,
    /// The loan fee, WAD scaled.
    pub fee: BigUint<C::Api>,
    /// The sum of every depositor's shares.
    pub total_shares: BigUint<C::Api>,
    /// Fees owed to the ownership token holder.
    pub owner_fees: BigUint<C::Api>,
    /// Fees owed to the protocol developer.
    pub developer_fees: BigUint<C::Api>,
    /// Zero value used for comparisons.
    pub zero: BigUint<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Constructs a new Cache by reading the current state from on-chain storage.
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            pool_asset: sc_ref.pool_asset().get(),
            registry: sc_ref.registry_address().get(),
            fee: sc_ref.fee().get(),
            total_shares: sc_ref.total_shares().get(),
            owner_fees: sc_ref.owner_fees().get(),
            developer_fees: sc_ref.developer_fees().get(),
            zero: BigUint::zero(),
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Commits changes to mutable fields back to on-chain storage when the Cache is dropped.
    ///
    /// **Fields Updated**: `fee`, `total_shares`, `owner_fees`, `developer_fees`.
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.fee().set(&self.fee);
        self.sc_ref.total_shares().set(&self.total_shares);
        self.sc_ref.owner_fees().set(&self.owner_fees);
        self.sc_ref.developer_fees().set(&self.developer_fees);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Current balance of the pool asset held by the contract.
    pub fn get_balance(&self) -> BigUint<C::Api> {
        self.sc_ref
            .blockchain()
            .get_sc_balance(&self.pool_asset, 0)
    }

    /// Assets owned by depositors: the live balance minus owner and developer fees.
    pub fn get_backing(&self) -> BigUint<C::Api> {
        self.sc_ref
            .backing_of(&self.get_balance(), &self.owner_fees, &self.developer_fees)
    }

    /// Depositor-owned assets before an incoming `payment` that is already part of the balance.
    pub fn get_backing_before(&self, payment: &BigUint<C::Api>) -> BigUint<C::Api> {
        let backing = self.get_backing();

        if backing > *payment {
            backing - payment
        } else {
            self.zero.clone()
        }
    }

    /// Liquidity a loan can draw from. Identical to the backing: fees owed to the owner and the
    /// developer are never lent out.
    pub fn get_liquidity(&self) -> BigUint<C::Api> {
        self.get_backing()
    }

    /// Checks if the pool can lend `amount`.
    pub fn has_liquidity(&self, amount: &BigUint<C::Api>) -> bool {
        self.get_liquidity() >= *amount
    }

    /// Checks if the given asset matches the pool's asset.
    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.pool_asset == *asset
    }
}
