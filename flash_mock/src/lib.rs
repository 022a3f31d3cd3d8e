#![no_std]

multiversx_sc::imports!();

use common_proxies::proxy_flash_pool;

/// Flash loan receiver used by the scenario tests.
///
/// `data` selects the behaviour: empty repays `principal + fee`, `short` repays one unit less,
/// `none` keeps the loan, `false` repays but rejects the loan, `reenter` tries to repay through
/// a deposit into the calling pool.
#[multiversx_sc::contract]
pub trait FlashMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(onFlashLoan)]
    fn on_flash_loan(
        &self,
        initiator: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        principal: BigUint,
        fee: BigUint,
        data: ManagedBuffer,
    ) -> bool {
        let pool = self.blockchain().get_caller();
        let owed = &principal + &fee;

        self.last_initiator().set(&initiator);
        self.last_fee().set(&fee);
        sc_print!("onFlashLoan: principal {}, fee {}", principal, fee);

        if data == ManagedBuffer::from(b"none") {
            return true;
        }

        if data == ManagedBuffer::from(b"short") {
            self.tx()
                .to(&pool)
                .egld_or_single_esdt(&asset, 0, &(owed - BigUint::from(1u64)))
                .transfer();
            return true;
        }

        if data == ManagedBuffer::from(b"reenter") {
            self.tx()
                .to(&pool)
                .typed(proxy_flash_pool::FlashPoolProxy)
                .deposit()
                .egld_or_single_esdt(&asset, 0, &owed)
                .sync_call();
            return true;
        }

        self.tx()
            .to(&pool)
            .egld_or_single_esdt(&asset, 0, &owed)
            .transfer();

        data != ManagedBuffer::from(b"false")
    }

    #[view(getLastInitiator)]
    #[storage_mapper("last_initiator")]
    fn last_initiator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLastFee)]
    #[storage_mapper("last_fee")]
    fn last_fee(&self) -> SingleValueMapper<BigUint>;
}
