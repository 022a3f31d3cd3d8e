use common_structs::Capability;
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the set of created pools
    /// This storage mapper holds the address of every pool deployed by the registry.
    #[view(getPools)]
    #[storage_mapper("pools")]
    fn pools(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the pool address for a given asset
    /// At most one pool per asset; an entry is never replaced.
    #[view(getPoolAddress)]
    #[storage_mapper("pools_map")]
    fn pools_map(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Get the template contract new pools are deployed from
    #[view(getPoolTemplate)]
    #[storage_mapper("pool_template_address")]
    fn pool_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the developer address
    /// Pools read it directly to pay out the developer share of their fees.
    #[view(getDeveloper)]
    #[storage_mapper("developer")]
    fn developer(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the holder of a pool's ownership token
    /// Pools read it directly to authorize `setFee` and to pay owner fees.
    #[view(getPoolOwner)]
    #[storage_mapper("pool_owner")]
    fn pool_owner(&self, pool: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    /// Get the pools whose ownership token a holder owns
    #[view(getOwnedPools)]
    #[storage_mapper("owned_pools")]
    fn owned_pools(&self, holder: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the operator approved to transfer a pool's ownership token
    #[view(getApproved)]
    #[storage_mapper("pool_owner_approval")]
    fn pool_owner_approval(&self, pool: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    /// Get the capabilities granted to an account
    #[view(getCapabilities)]
    #[storage_mapper("capabilities")]
    fn capabilities(&self, account: &ManagedAddress) -> UnorderedSetMapper<Capability>;
}
