#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("pool_created")]
    fn pool_created_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] pool: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
    );

    // `credited` is the number of shares minted, `excess` the part of the
    // payment that bought into fees already accrued by earlier depositors.
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] credited: &BigUint,
        #[indexed] excess: &BigUint,
    );

    // `amount` is the number of shares burned, `excess` the provider fees
    // paid on top of it.
    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] excess: &BigUint,
    );

    #[event("loan")]
    fn loan_event(
        &self,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] fee: &BigUint,
    );

    #[event("fee_changed")]
    fn fee_changed_event(&self, #[indexed] new_fee: &BigUint);

    #[event("owner_fees_withdrawn")]
    fn owner_fees_withdrawn_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("developer_fees_withdrawn")]
    fn developer_fees_withdrawn_event(
        &self,
        #[indexed] developer: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("ownership_transferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    #[event("ownership_approved")]
    fn ownership_approved_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
        #[indexed] operator: &ManagedAddress,
    );

    #[event("developer_changed")]
    fn developer_changed_event(&self, #[indexed] developer: &ManagedAddress);

    #[event("capability_granted")]
    fn capability_granted_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] capability: Capability,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("capability_revoked")]
    fn capability_revoked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] capability: Capability,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("fees_changed")]
    fn fees_changed_event(&self, #[indexed] single_fee: &BigUint, #[indexed] bulk_fee: &BigUint);

    #[event("fee_exemption_set")]
    fn fee_exemption_set_event(&self, #[indexed] account: &ManagedAddress, #[indexed] exempt: bool);
}
