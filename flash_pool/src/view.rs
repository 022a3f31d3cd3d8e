multiversx_sc::imports!();

use common_constants::MIN_LOAN_AMOUNT;

use crate::{storage, utils};

/// The ViewModule provides read-only endpoints for the pool's derived metrics.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Assets owned by depositors: the live balance minus the owner and developer fees.
    ///
    /// # Returns
    /// - `BigUint`: The backing of all shares.
    #[view(getBacking)]
    fn get_backing(&self) -> BigUint {
        let balance = self
            .blockchain()
            .get_sc_balance(&self.pool_asset().get(), 0);

        self.backing_of(
            &balance,
            &self.owner_fees().get(),
            &self.developer_fees().get(),
        )
    }

    /// Provider fees accrued in the share pool and not yet redeemed.
    #[view(getProviderFees)]
    fn get_provider_fees(&self) -> BigUint {
        let backing = self.get_backing();
        let total_shares = self.total_shares().get();

        if backing > total_shares {
            backing - total_shares
        } else {
            BigUint::zero()
        }
    }

    /// Liquidity a loan can draw from.
    #[view(getAvailableLiquidity)]
    fn get_available_liquidity(&self) -> BigUint {
        self.get_backing()
    }

    /// Amount `withdraw` would pay today for every share held by `depositor`.
    ///
    /// # Arguments
    /// - `depositor`: The share holder.
    ///
    /// # Returns
    /// - `BigUint`: Floor of `shares * backing / total_shares`.
    #[view(getRedeemableValue)]
    fn get_redeemable_value(&self, depositor: &ManagedAddress) -> BigUint {
        self.amount_for_shares(
            &self.shares(depositor).get(),
            &self.total_shares().get(),
            &self.get_backing(),
        )
    }

    /// Largest principal the pool can lend right now, zero below the minimum loan.
    #[view(maxFlashLoan)]
    fn max_flash_loan(&self) -> BigUint {
        let liquidity = self.get_backing();

        if liquidity >= BigUint::from(MIN_LOAN_AMOUNT) {
            liquidity
        } else {
            BigUint::zero()
        }
    }

    /// Fee charged for a loan of `principal` at the current rate.
    #[view(flashFee)]
    fn flash_fee(&self, principal: BigUint) -> BigUint {
        self.mul_wad_floor(&principal, &self.fee().get())
    }

    /// Current holder of the pool's ownership token.
    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.registry_pool_owner(self.registry_address().get())
            .get()
    }

    /// Developer receiving the developer share of every fee.
    #[view(getDeveloper)]
    fn get_developer(&self) -> ManagedAddress {
        self.registry_developer(self.registry_address().get())
            .get()
    }
}
