multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::MIN_LOAN_AMOUNT;
use common_errors::{
    ERROR_CALLER_NOT_FACTORY, ERROR_FLASHLOAN_CALLBACK_FAILED, ERROR_INSUFFICIENT_LIQUIDITY,
    ERROR_LOAN_TOO_SMALL, ERROR_REPAYMENT_SHORTFALL,
};
use common_proxies::proxy_flash_receiver;

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LoanModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lends `principal` to `receiver` for the duration of one callback, the caller being the initiator.
    ///
    /// # Arguments
    /// - `principal`: Amount lent.
    /// - `receiver`: Contract implementing `onFlashLoan`.
    /// - `data`: Opaque bytes forwarded to the receiver.
    ///
    /// # Returns
    /// - `BigUint`: The fee charged on the loan.
    #[endpoint(initiateTransaction)]
    fn initiate_transaction(
        &self,
        principal: BigUint,
        receiver: ManagedAddress,
        data: ManagedBuffer,
    ) -> BigUint {
        let initiator = self.blockchain().get_caller();

        self.process_loan(initiator, principal, receiver, data)
    }

    /// Same as `initiateTransaction`, with the initiator named by the registry.
    ///
    /// **Security Considerations**: Only the registry that deployed the pool is trusted to vouch for
    /// an initiator other than the direct caller.
    #[endpoint(initiateTransactionWithInitiator)]
    fn initiate_transaction_with_initiator(
        &self,
        initiator: ManagedAddress,
        principal: BigUint,
        receiver: ManagedAddress,
        data: ManagedBuffer,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.registry_address().get(),
            ERROR_CALLER_NOT_FACTORY
        );

        self.process_loan(initiator, principal, receiver, data)
    }

    /// Executes a flash loan: disburse, call back, verify, commit.
    ///
    /// **Process**:
    /// 1. Validates liquidity and the minimum loan size, and computes the fee.
    /// 2. Raises the `loan_ongoing` flag and drops the cache before the external call.
    /// 3. Calls `onFlashLoan` on the receiver with the principal attached.
    /// 4. Requires the live balance to have grown by at least the fee.
    /// 5. Splits the fee: owner and developer parts are reserved, the provider part stays in the backing.
    ///
    /// **Security Considerations**: Any failure reverts the whole call, the disbursement included.
    /// Deposits, withdrawals and nested loans are rejected while the callback runs.
    fn process_loan(
        &self,
        initiator: ManagedAddress,
        principal: BigUint,
        receiver: ManagedAddress,
        data: ManagedBuffer,
    ) -> BigUint {
        self.reentrancy_guard();

        let cache = Cache::new(self);
        require!(
            cache.has_liquidity(&principal),
            ERROR_INSUFFICIENT_LIQUIDITY
        );
        require!(
            principal >= BigUint::from(MIN_LOAN_AMOUNT),
            ERROR_LOAN_TOO_SMALL
        );

        let fee = self.mul_wad_floor(&principal, &cache.fee);
        let balance_before = cache.get_balance();
        let asset = cache.pool_asset.clone();

        self.loan_ongoing().set(true);
        // Prevent re entry with a stale ledger
        drop(cache);

        let accepted = self
            .tx()
            .to(&receiver)
            .typed(proxy_flash_receiver::FlashReceiverProxy)
            .on_flash_loan(&initiator, &asset, &principal, &fee, data)
            .egld_or_single_esdt(&asset, 0, &principal)
            .returns(ReturnsResult)
            .sync_call();

        require!(accepted, ERROR_FLASHLOAN_CALLBACK_FAILED);

        let mut cache = Cache::new(self);
        require!(
            cache.get_balance() >= balance_before + &fee,
            ERROR_REPAYMENT_SHORTFALL
        );

        let split = self.split_fee(&fee);
        cache.owner_fees += &split.owner;
        cache.developer_fees += &split.developer;

        self.loan_ongoing().set(false);

        self.loan_event(&initiator, &receiver, &principal, &fee);

        fee
    }
}
