#![no_std]

use common_constants::{DEVELOPER_FEE, OWNER_FEE, WAD};
use common_structs::FeeSplit;

multiversx_sc::imports!();

/// Integer helpers shared by the pool and the registry.
///
/// Every division here truncates. Callers rely on that: truncation always
/// leaves the remainder inside the pool, never with the depositor.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / c`, rounded down.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        (a * b) / c
    }

    /// Applies a WAD-scaled rate to `amount`, rounded down.
    fn mul_wad_floor(&self, amount: &BigUint, rate: &BigUint) -> BigUint {
        self.mul_div_floor(amount, rate, &self.wad())
    }

    /// Shares minted for `amount` when the depositor-owned assets are
    /// `backing` and `total_shares` shares are outstanding.
    fn shares_for_amount(
        &self,
        amount: &BigUint,
        total_shares: &BigUint,
        backing: &BigUint,
    ) -> BigUint {
        if total_shares == &BigUint::zero() || backing == &BigUint::zero() {
            return amount.clone();
        }

        self.mul_div_floor(amount, total_shares, backing)
    }

    /// Assets redeemed by burning `shares` out of `total_shares`.
    fn amount_for_shares(
        &self,
        shares: &BigUint,
        total_shares: &BigUint,
        backing: &BigUint,
    ) -> BigUint {
        if total_shares == &BigUint::zero() {
            return BigUint::zero();
        }

        self.mul_div_floor(shares, backing, total_shares)
    }

    /// Splits a loan fee into provider, owner and developer parts.
    fn split_fee(&self, fee: &BigUint) -> FeeSplit<Self::Api> {
        let owner = self.mul_wad_floor(fee, &BigUint::from(OWNER_FEE));
        let developer = self.mul_wad_floor(fee, &BigUint::from(DEVELOPER_FEE));
        let provider = fee - &owner - &developer;

        FeeSplit {
            total: fee.clone(),
            provider,
            owner,
            developer,
        }
    }

    fn wad(&self) -> BigUint {
        BigUint::from(WAD)
    }

    /// Part of `balance` owned by depositors once the owner and developer fees are set aside.
    ///
    /// Saturates at zero: a fee withdrawal made from inside a loan callback can leave the balance
    /// below the reserved fees until the loan is repaid.
    fn backing_of(
        &self,
        balance: &BigUint,
        owner_fees: &BigUint,
        developer_fees: &BigUint,
    ) -> BigUint {
        let reserved = owner_fees + developer_fees;

        if balance > &reserved {
            balance - &reserved
        } else {
            BigUint::zero()
        }
    }
}
