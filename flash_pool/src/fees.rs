multiversx_sc::imports!();

use common_constants::{MAX_FEE, MIN_FEE};
use common_errors::{ERROR_FEE_ABOVE_MAXIMUM, ERROR_FEE_BELOW_MINIMUM};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait FeesModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Pays the accrued owner fees to the current ownership token holder.
    ///
    /// Callable by anyone; the registry calls it before every ownership transfer so that fees
    /// earned under a holder are paid to that holder.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: The payment sent.
    #[endpoint(ownerWithdraw)]
    fn owner_withdraw(&self) -> EgldOrEsdtTokenPayment<Self::Api> {
        let mut cache = Cache::new(self);

        self.settle_owner_fees(&mut cache)
    }

    /// Pays the accrued developer fees to the developer configured on the registry.
    #[endpoint(developerWithdraw)]
    fn developer_withdraw(&self) -> EgldOrEsdtTokenPayment<Self::Api> {
        let mut cache = Cache::new(self);

        self.settle_developer_fees(&mut cache)
    }

    /// Updates the loan fee rate.
    ///
    /// # Arguments
    /// - `rate`: New fee, WAD scaled, within `[MIN_FEE, MAX_FEE]`.
    ///
    /// **Security Considerations**: Restricted to the holder of the pool's ownership token.
    #[endpoint(setFee)]
    fn set_fee(&self, rate: BigUint) {
        let mut cache = Cache::new(self);
        self.require_pool_owner(&cache);

        require!(rate <= BigUint::from(MAX_FEE), ERROR_FEE_ABOVE_MAXIMUM);
        require!(rate >= BigUint::from(MIN_FEE), ERROR_FEE_BELOW_MINIMUM);

        self.fee_changed_event(&rate);
        cache.fee = rate;
    }
}
