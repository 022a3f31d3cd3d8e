#![no_std]

pub static ERROR_MISSING_ADMIN_CAPABILITY: &[u8] =
    b"Access denied: caller is missing the ADMIN capability.";

pub static ERROR_MISSING_POOL_CREATOR_CAPABILITY: &[u8] =
    b"Access denied: caller is missing the POOL_CREATOR capability.";

pub static ERROR_POOL_ALREADY_EXISTS: &[u8] = b"Pool already exists.";

pub static ERROR_POOL_DOES_NOT_EXIST: &[u8] = b"Pool does not exist.";

pub static ERROR_UNKNOWN_POOL: &[u8] = b"Address is not a pool of this registry.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Flash pool contract template is empty.";

pub static ERROR_INVALID_TICKER: &[u8] = b"Invalid ticker provided.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_DEPOSIT_TOO_SMALL: &[u8] = b"Deposit too small to mint any share.";

pub static ERROR_AMOUNT_EXCEEDS_DEPOSIT: &[u8] = b"Amount over deposit.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity.";

pub static ERROR_LOAN_TOO_SMALL: &[u8] = b"Loan too small.";

pub static ERROR_CALLER_NOT_FACTORY: &[u8] = b"Caller not factory.";

pub static ERROR_CALLER_NOT_OWNER: &[u8] = b"Caller not owner.";

pub static ERROR_FEE_ABOVE_MAXIMUM: &[u8] = b"Fee above maximum.";

pub static ERROR_FEE_BELOW_MINIMUM: &[u8] = b"Fee below minimum.";

pub static ERROR_REPAYMENT_SHORTFALL: &[u8] = b"Invalid flashloan re-payment.";

pub static ERROR_FLASHLOAN_ONGOING: &[u8] = b"Flash loan ongoing.";

pub static ERROR_FLASHLOAN_CALLBACK_FAILED: &[u8] = b"Flash loan receiver callback failed.";

pub static ERROR_NOT_OWNER_NOR_APPROVED: &[u8] = b"Caller is not pool owner nor approved.";

pub static ERROR_FROM_IS_NOT_OWNER: &[u8] = b"Transfer from incorrect owner.";

pub static ERROR_WRONG_FEE_PAID: &[u8] = b"Invalid creation fee paid.";

pub static ERROR_CALLER_IS_FEE_EXEMPT: &[u8] = b"Caller is fee exempt.";

pub static ERROR_MUST_PROVIDE_MULTIPLE_ASSETS: &[u8] = b"Must provide multiple assets.";
