#![no_std]

/// 1.0 in the fixed-point precision used for every fee rate (1e18).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Lowest loan fee a pool owner can configure (0.05%). New pools start here.
pub const MIN_FEE: u128 = 500_000_000_000_000;

/// Highest loan fee a pool owner can configure (1%).
pub const MAX_FEE: u128 = 10_000_000_000_000_000;

/// Share of every loan fee owed to the pool owner (10%).
pub const OWNER_FEE: u128 = 100_000_000_000_000_000;

/// Share of every loan fee owed to the protocol developer (5%).
pub const DEVELOPER_FEE: u128 = 50_000_000_000_000_000;

/// Smallest principal for which the developer share of a minimum fee is still
/// at least one unit of the asset.
pub const MIN_LOAN_AMOUNT: u128 = (WAD / MIN_FEE) * (WAD / DEVELOPER_FEE);

// Registry storage read by pools through `new_from_address`.
pub const POOL_OWNER_STORAGE_KEY: &[u8] = b"pool_owner";
pub const DEVELOPER_STORAGE_KEY: &[u8] = b"developer";

// Pool storage read by the registry for `getPoolInfo`.
pub const FEE_STORAGE_KEY: &[u8] = b"fee";
pub const TOTAL_SHARES_STORAGE_KEY: &[u8] = b"total_shares";
pub const OWNER_FEES_STORAGE_KEY: &[u8] = b"owner_fees";
pub const DEVELOPER_FEES_STORAGE_KEY: &[u8] = b"developer_fees";
