use multiversx_sc_scenario::imports::{MxscPath, TestAddress, TestTokenIdentifier};

pub const REGISTRY_PATH: MxscPath = MxscPath::new("output/registry.mxsc.json");
pub const FLASH_POOL_PATH: MxscPath = MxscPath::new("../flash_pool/output/flash-pool.mxsc.json");
pub const FLASH_MOCK_PATH: MxscPath = MxscPath::new("../flash_mock/output/flash-mock.mxsc.json");
pub const POOL_CREATOR_PATH: MxscPath =
    MxscPath::new("../pool_creator/output/pool-creator.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const DEVELOPER_ADDRESS: TestAddress = TestAddress::new("developer");
pub const CREATOR_ADDRESS: TestAddress = TestAddress::new("creator");
pub const DEPOSITOR_A: TestAddress = TestAddress::new("depositor-a");
pub const DEPOSITOR_B: TestAddress = TestAddress::new("depositor-b");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const NEW_OWNER_ADDRESS: TestAddress = TestAddress::new("new-owner");
pub const OPERATOR_ADDRESS: TestAddress = TestAddress::new("operator");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const XOXNO_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XOXNO-123456");
pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-123456");
pub const USDC_DECIMALS: usize = 18;

// Funding per test account, in whole tokens
pub const ACCOUNT_TOKENS: u64 = 1_000_000;
pub const ACCOUNT_EGLD: u64 = 10_000;

// Pool creator fees, in whole EGLD
pub const SINGLE_CREATION_FEE: u64 = 2;
pub const BULK_CREATION_FEE: u64 = 1;

// Raised by the framework for `#[only_owner]` endpoints
pub const ONLY_OWNER_ERROR: &[u8] = b"Endpoint can only be called by owner";
