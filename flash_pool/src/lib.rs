#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod fees;
pub mod liquidity;
pub mod loan;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_constants::MIN_FEE;

#[multiversx_sc::contract]
pub trait FlashPool:
    storage::Storage
    + common_events::EventsModule
    + liquidity::LiquidityModule
    + loan::LoanModule
    + fees::FeesModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Initializes the flash loan pool for a specific asset.
    ///
    /// **Purpose**: Binds the pool to its asset and to the registry that deployed it, and starts
    /// the loan fee at the protocol minimum.
    ///
    /// **Process**:
    /// 1. Stores the pool's asset identifier.
    /// 2. Records the caller (the registry deploying from its template) as the immutable registry.
    /// 3. Sets the loan fee to `MIN_FEE` and zeroes the share ledger and accrued fees.
    ///
    /// ### Parameters
    /// - `asset`: The asset identifier (`EgldOrEsdtTokenIdentifier`) lent by this pool.
    ///
    /// **Security Considerations**:
    /// - Every storage value read later is initialized here, so no endpoint decodes empty storage.
    #[init]
    fn init(&self, asset: &EgldOrEsdtTokenIdentifier) {
        self.pool_asset().set(asset);
        self.registry_address()
            .set(self.blockchain().get_caller());
        self.fee().set(BigUint::from(MIN_FEE));
        self.total_shares().set(BigUint::zero());
        self.owner_fees().set(BigUint::zero());
        self.developer_fees().set(BigUint::zero());
        self.loan_ongoing().set(false);
    }

    /// Code upgrades keep the ledger untouched; the registry drives them from its template.
    #[upgrade]
    fn upgrade(&self) {}
}
