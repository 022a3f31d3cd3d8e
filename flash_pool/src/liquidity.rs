multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_AMOUNT_EXCEEDS_DEPOSIT, ERROR_DEPOSIT_TOO_SMALL};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Deposits the pool asset and credits shares to the caller.
    ///
    /// **Purpose**: Adds liquidity that flash loans can draw from; the depositor earns the provider
    /// part of every loan fee through the appreciation of its shares.
    ///
    /// **Process**:
    /// 1. Validates the payment (pool asset, non-zero amount).
    /// 2. Computes the depositor-owned assets before the payment from the live balance.
    /// 3. Credits `amount * total_shares / backing` shares (1:1 while no share exists).
    /// 4. Reports as `excess` the part of the payment that buys into fees already accrued.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The credited shares and the excess.
    ///
    /// **Security Considerations**: Share count rounds down, so the remainder stays in the pool.
    /// Rejected while a loan callback runs.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) -> MultiValue2<BigUint, BigUint> {
        self.reentrancy_guard();
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);
        let caller = self.blockchain().get_caller();

        let backing = cache.get_backing_before(&amount);
        let credited = self.shares_for_amount(&amount, &cache.total_shares, &backing);
        require!(credited > 0u64, ERROR_DEPOSIT_TOO_SMALL);

        let excess = &amount - &credited;

        cache.total_shares += &credited;
        self.shares(&caller).update(|shares| *shares += &credited);

        self.deposit_event(&caller, &credited, &excess);

        (credited, excess).into()
    }

    /// Burns shares of the caller and pays out their current value.
    ///
    /// **Purpose**: Lets depositors exit with their principal plus the provider fees accrued on it.
    ///
    /// **Process**:
    /// 1. Verifies the caller holds at least `amount` shares.
    /// 2. Converts the shares at the live `backing / total_shares` ratio, rounded down.
    /// 3. Burns the shares and transfers the payout.
    ///
    /// # Arguments
    /// - `amount`: Shares to redeem, in the deposit units reported by `deposit`.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The shares burned and the excess paid on top of them.
    ///
    /// **Security Considerations**: Payout rounds down so a depositor never extracts more than the
    /// pool holds. Rejected while a loan callback runs.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) -> MultiValue2<BigUint, BigUint> {
        self.reentrancy_guard();
        self.require_amount_greater_than_zero(&amount);

        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let shares_mapper = self.shares(&caller);
        let shares = shares_mapper.get();

        require!(amount <= shares, ERROR_AMOUNT_EXCEEDS_DEPOSIT);

        let payout = self.amount_for_shares(&amount, &cache.total_shares, &cache.get_backing());
        let excess = if payout > amount {
            &payout - &amount
        } else {
            BigUint::zero()
        };

        cache.total_shares -= &amount;
        shares_mapper.set(shares - &amount);

        self.send_asset(&cache, &payout, &caller);

        self.withdraw_event(&caller, &amount, &excess);

        (amount, excess).into()
    }
}
