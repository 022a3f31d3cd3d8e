#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Capabilities the registry hands out to principals.
///
/// `Admin` gates every configuration endpoint (granting and revoking
/// capabilities included), `PoolCreator` gates pool creation.
#[type_abi]
#[derive(
    NestedEncode,
    NestedDecode,
    TopEncode,
    TopDecode,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    ManagedVecItem,
)]
pub enum Capability {
    Admin,
    PoolCreator,
}

/// Split of a single loan fee between the three beneficiaries.
///
/// The provider share absorbs every rounding remainder so that
/// `provider + owner + developer == total` always holds.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct FeeSplit<M: ManagedTypeApi> {
    pub total: BigUint<M>,
    pub provider: BigUint<M>,
    pub owner: BigUint<M>,
    pub developer: BigUint<M>,
}

/// Snapshot of a pool returned by the registry's `getPoolInfo` view.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PoolInfo<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub pool: ManagedAddress<M>,
    pub owner: ManagedAddress<M>,
    pub fee: BigUint<M>,
    pub total_shares: BigUint<M>,
    pub liquidity: BigUint<M>,
    pub owner_fees: BigUint<M>,
    pub developer_fees: BigUint<M>,
}
