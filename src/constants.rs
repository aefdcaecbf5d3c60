//! Program identifiers, protocol limits, seed literals, and the
//! discriminator and error-code tables.
//!
//! Everything in this module is read-only, compile-time data. Lookups on
//! unknown keys return `None`; nothing here can fail.

use crate::pubkey::Pubkey;

/// Canonical base58 form of the PoolSwap program id.
pub const PROGRAM_ID_STR: &str = "3AMM53MsJZy2Jvf7PeHHga3bsGjWV4TSaYz29WUtcdje";

/// The PoolSwap program id, decoded.
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    32, 28, 155, 65, 31, 4, 196, 101, 155, 48, 199, 207, 164, 63, 151, 131, 72, 30, 240, 16, 170,
    240, 145, 176, 53, 207, 60, 226, 18, 242, 64, 129,
]);

/// SPL Token program id (`TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`).
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// SPL Token-2022 program id (`TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`).
pub const TOKEN_2022_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218, 182, 26, 252, 77,
    131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
]);

// Protocol limits

/// Lowest accepted amplification coefficient.
pub const MIN_AMP: u64 = 1;
/// Highest accepted amplification coefficient.
pub const MAX_AMP: u64 = 100_000;
/// Default trade fee in basis points.
pub const DEFAULT_FEE_BPS: u64 = 30;
/// Share of the trade fee routed to the admin, in percent.
pub const ADMIN_FEE_PCT: u64 = 50;
/// Smallest swap input the program accepts.
pub const MIN_SWAP_AMOUNT: u64 = 100_000;
/// Smallest initial deposit the program accepts.
pub const MIN_DEPOSIT: u64 = 100_000_000;
/// Iteration cap shared by the invariant and output-balance solvers.
pub const MAX_NEWTON_ITERATIONS: u32 = 255;
/// Minimum duration of an amp ramp, in seconds.
pub const MIN_RAMP_DURATION: i64 = 86_400;
/// Delay between committing a new amp and applying it, in seconds.
pub const AMP_COMMIT_DELAY: i64 = 3_600;
/// Fee charged on pool migration, in basis points.
pub const MIGRATION_FEE_BPS: u64 = 1_337;
/// Maximum token count of an N-token pool.
pub const MAX_TOKENS: usize = 8;
/// Byte size of the per-pool trader bloom filter.
pub const BLOOM_SIZE: usize = 128;
/// Number of hourly candles a pool retains.
pub const HOURLY_CANDLES: usize = 24;
/// Number of daily candles a pool retains.
pub const DAILY_CANDLES: usize = 7;
/// Slots per hourly candle window.
pub const SLOTS_PER_HOUR: u64 = 9_000;
/// Slots per daily candle window.
pub const SLOTS_PER_DAY: u64 = 216_000;
/// Size of a two-token pool account blob.
pub const POOL_ACCOUNT_SIZE: usize = 1_024;
/// Size of an N-token pool account blob.
pub const NPOOL_ACCOUNT_SIZE: usize = 2_048;
/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

// PDA seeds

pub const POOL_SEED: &[u8] = b"pool";
pub const VAULT_SEED: &[u8] = b"vault";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";
pub const FARM_SEED: &[u8] = b"farm";
pub const USER_FARM_SEED: &[u8] = b"user_farm";
pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const LOTTERY_ENTRY_SEED: &[u8] = b"lottery_entry";
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const ML_BRAIN_SEED: &[u8] = b"ml_brain";
pub const GOV_PROPOSAL_SEED: &[u8] = b"gov_proposal";
pub const GOV_VOTE_SEED: &[u8] = b"gov_vote";
pub const CL_POOL_SEED: &[u8] = b"cl_pool";
pub const CL_POSITION_SEED: &[u8] = b"cl_position";
pub const ORDERBOOK_SEED: &[u8] = b"orderbook";

// Instruction discriminators (anchor sighash: sha256("global:<name>")[0..8])

pub const IX_CREATE_POOL: [u8; 8] = [233, 146, 209, 142, 207, 104, 64, 188];
pub const IX_SWAP_T0_T1: [u8; 8] = [223, 186, 76, 166, 19, 133, 192, 102];
pub const IX_SWAP_T1_T0: [u8; 8] = [219, 197, 77, 169, 154, 220, 148, 150];
pub const IX_SWAP: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];
pub const IX_ADD_LIQUIDITY: [u8; 8] = [181, 157, 89, 67, 143, 182, 52, 72];
pub const IX_ADD_LIQUIDITY_SINGLE: [u8; 8] = [247, 21, 240, 145, 37, 101, 229, 181];
pub const IX_REMOVE_LIQUIDITY: [u8; 8] = [80, 85, 209, 72, 24, 206, 177, 108];
pub const IX_REMOVE_LIQUIDITY_SINGLE: [u8; 8] = [216, 47, 132, 215, 169, 108, 188, 17];
pub const IX_COLLECT_ADMIN_FEES: [u8; 8] = [159, 21, 23, 198, 210, 68, 40, 219];
pub const IX_SET_PAUSE: [u8; 8] = [63, 32, 154, 2, 56, 103, 79, 45];
pub const IX_UPDATE_FEE: [u8; 8] = [232, 253, 195, 247, 148, 212, 73, 222];
pub const IX_UPDATE_ADMIN_FEE: [u8; 8] = [177, 221, 123, 45, 141, 37, 53, 253];
pub const IX_COMMIT_AMP: [u8; 8] = [208, 1, 51, 213, 106, 76, 235, 171];
pub const IX_APPLY_AMP: [u8; 8] = [19, 96, 115, 158, 14, 110, 6, 59];
pub const IX_RAMP_AMP: [u8; 8] = [13, 197, 68, 251, 53, 108, 155, 10];
pub const IX_STOP_RAMP: [u8; 8] = [251, 114, 21, 182, 96, 21, 236, 113];
pub const IX_TRANSFER_AUTHORITY: [u8; 8] = [48, 169, 76, 72, 229, 180, 55, 161];
pub const IX_ACCEPT_AUTHORITY: [u8; 8] = [107, 86, 198, 91, 33, 12, 107, 160];
pub const IX_CREATE_NPOOL: [u8; 8] = [29, 25, 64, 157, 119, 136, 249, 210];
pub const IX_SWAP_N: [u8; 8] = [171, 255, 125, 226, 55, 214, 11, 89];
pub const IX_ADD_LIQUIDITY_N: [u8; 8] = [6, 27, 17, 213, 159, 77, 165, 174];
pub const IX_REMOVE_LIQUIDITY_N: [u8; 8] = [150, 30, 242, 114, 210, 109, 87, 214];
pub const IX_CREATE_FARM: [u8; 8] = [74, 59, 128, 160, 87, 174, 153, 194];
pub const IX_STAKE: [u8; 8] = [206, 176, 202, 18, 200, 209, 179, 108];
pub const IX_UNSTAKE: [u8; 8] = [90, 95, 107, 42, 205, 124, 50, 225];
pub const IX_CLAIM_REWARDS: [u8; 8] = [4, 144, 132, 71, 116, 23, 151, 80];
pub const IX_LOCK: [u8; 8] = [21, 19, 208, 43, 237, 62, 255, 87];
pub const IX_UNLOCK: [u8; 8] = [101, 155, 40, 21, 158, 189, 56, 203];
pub const IX_CLOSE_FARM: [u8; 8] = [61, 55, 75, 84, 186, 30, 173, 159];
pub const IX_CREATE_LOTTERY: [u8; 8] = [242, 165, 247, 119, 17, 203, 21, 42];
pub const IX_ENTER_LOTTERY: [u8; 8] = [252, 72, 239, 78, 58, 56, 149, 231];
pub const IX_DRAW_LOTTERY: [u8; 8] = [17, 188, 124, 77, 90, 34, 97, 19];
pub const IX_CLAIM_PRIZE: [u8; 8] = [157, 233, 139, 121, 246, 62, 234, 235];
pub const IX_CLOSE_LOTTERY: [u8; 8] = [253, 97, 216, 187, 251, 189, 113, 22];
pub const IX_CREATE_REGISTRY: [u8; 8] = [210, 219, 233, 49, 251, 19, 135, 13];
pub const IX_REGISTER_POOL: [u8; 8] = [85, 229, 114, 47, 75, 145, 166, 100];
pub const IX_UNREGISTER_POOL: [u8; 8] = [10, 168, 80, 155, 162, 107, 90, 120];
pub const IX_CREATE_ML_BRAIN: [u8; 8] = [42, 254, 170, 201, 11, 32, 162, 187];
pub const IX_UPDATE_ML_BRAIN: [u8; 8] = [209, 78, 250, 204, 114, 228, 11, 4];
pub const IX_PREDICT: [u8; 8] = [254, 114, 112, 244, 37, 49, 32, 128];
pub const IX_CREATE_GOV_PROPOSAL: [u8; 8] = [133, 182, 57, 37, 195, 121, 224, 165];
pub const IX_VOTE_GOV_PROPOSAL: [u8; 8] = [41, 113, 92, 208, 51, 12, 33, 132];
pub const IX_EXECUTE_GOV_PROPOSAL: [u8; 8] = [89, 43, 76, 162, 61, 65, 116, 121];
pub const IX_CANCEL_GOV_PROPOSAL: [u8; 8] = [69, 155, 71, 4, 48, 42, 200, 224];
pub const IX_CREATE_CL_POOL: [u8; 8] = [81, 31, 181, 194, 195, 144, 123, 254];
pub const IX_OPEN_CL_POSITION: [u8; 8] = [176, 197, 59, 160, 171, 113, 71, 44];
pub const IX_CLOSE_CL_POSITION: [u8; 8] = [195, 151, 204, 98, 211, 16, 8, 105];
pub const IX_COLLECT_CL_FEES: [u8; 8] = [109, 197, 177, 155, 238, 142, 77, 18];
pub const IX_CREATE_ORDERBOOK: [u8; 8] = [103, 86, 215, 172, 216, 255, 114, 218];
pub const IX_PLACE_ORDER: [u8; 8] = [51, 194, 155, 175, 109, 130, 96, 106];
pub const IX_CANCEL_ORDER: [u8; 8] = [95, 129, 237, 240, 8, 49, 223, 132];
pub const IX_FILL_ORDER: [u8; 8] = [232, 122, 115, 25, 199, 143, 136, 162];
pub const IX_FLASH_LOAN: [u8; 8] = [239, 246, 59, 224, 139, 20, 175, 14];
pub const IX_REPAY_FLASH_LOAN: [u8; 8] = [119, 239, 18, 45, 194, 107, 31, 238];
pub const IX_SET_ORACLE: [u8; 8] = [186, 128, 81, 104, 74, 79, 18, 224];
pub const IX_UPDATE_TWAP: [u8; 8] = [208, 240, 203, 120, 123, 76, 222, 188];
pub const IX_SNAPSHOT_CANDLE: [u8; 8] = [129, 183, 137, 154, 123, 193, 206, 7];
pub const IX_MIGRATE_POOL: [u8; 8] = [55, 170, 171, 123, 210, 69, 39, 172];
pub const IX_SET_CIRCUIT_BREAKER: [u8; 8] = [135, 207, 46, 31, 152, 94, 123, 247];
pub const IX_RESET_VOLUME: [u8; 8] = [230, 32, 165, 176, 243, 234, 4, 78];

/// Instruction name to discriminator, one entry per program instruction.
pub const INSTRUCTION_DISCRIMINATORS: &[(&str, [u8; 8])] = &[
    ("create_pool", IX_CREATE_POOL),
    ("swap_t0_t1", IX_SWAP_T0_T1),
    ("swap_t1_t0", IX_SWAP_T1_T0),
    ("swap", IX_SWAP),
    ("add_liquidity", IX_ADD_LIQUIDITY),
    ("add_liquidity_single", IX_ADD_LIQUIDITY_SINGLE),
    ("remove_liquidity", IX_REMOVE_LIQUIDITY),
    ("remove_liquidity_single", IX_REMOVE_LIQUIDITY_SINGLE),
    ("collect_admin_fees", IX_COLLECT_ADMIN_FEES),
    ("set_pause", IX_SET_PAUSE),
    ("update_fee", IX_UPDATE_FEE),
    ("update_admin_fee", IX_UPDATE_ADMIN_FEE),
    ("commit_amp", IX_COMMIT_AMP),
    ("apply_amp", IX_APPLY_AMP),
    ("ramp_amp", IX_RAMP_AMP),
    ("stop_ramp", IX_STOP_RAMP),
    ("transfer_authority", IX_TRANSFER_AUTHORITY),
    ("accept_authority", IX_ACCEPT_AUTHORITY),
    ("create_npool", IX_CREATE_NPOOL),
    ("swap_n", IX_SWAP_N),
    ("add_liquidity_n", IX_ADD_LIQUIDITY_N),
    ("remove_liquidity_n", IX_REMOVE_LIQUIDITY_N),
    ("create_farm", IX_CREATE_FARM),
    ("stake", IX_STAKE),
    ("unstake", IX_UNSTAKE),
    ("claim_rewards", IX_CLAIM_REWARDS),
    ("lock", IX_LOCK),
    ("unlock", IX_UNLOCK),
    ("close_farm", IX_CLOSE_FARM),
    ("create_lottery", IX_CREATE_LOTTERY),
    ("enter_lottery", IX_ENTER_LOTTERY),
    ("draw_lottery", IX_DRAW_LOTTERY),
    ("claim_prize", IX_CLAIM_PRIZE),
    ("close_lottery", IX_CLOSE_LOTTERY),
    ("create_registry", IX_CREATE_REGISTRY),
    ("register_pool", IX_REGISTER_POOL),
    ("unregister_pool", IX_UNREGISTER_POOL),
    ("create_ml_brain", IX_CREATE_ML_BRAIN),
    ("update_ml_brain", IX_UPDATE_ML_BRAIN),
    ("predict", IX_PREDICT),
    ("create_gov_proposal", IX_CREATE_GOV_PROPOSAL),
    ("vote_gov_proposal", IX_VOTE_GOV_PROPOSAL),
    ("execute_gov_proposal", IX_EXECUTE_GOV_PROPOSAL),
    ("cancel_gov_proposal", IX_CANCEL_GOV_PROPOSAL),
    ("create_cl_pool", IX_CREATE_CL_POOL),
    ("open_cl_position", IX_OPEN_CL_POSITION),
    ("close_cl_position", IX_CLOSE_CL_POSITION),
    ("collect_cl_fees", IX_COLLECT_CL_FEES),
    ("create_orderbook", IX_CREATE_ORDERBOOK),
    ("place_order", IX_PLACE_ORDER),
    ("cancel_order", IX_CANCEL_ORDER),
    ("fill_order", IX_FILL_ORDER),
    ("flash_loan", IX_FLASH_LOAN),
    ("repay_flash_loan", IX_REPAY_FLASH_LOAN),
    ("set_oracle", IX_SET_ORACLE),
    ("update_twap", IX_UPDATE_TWAP),
    ("snapshot_candle", IX_SNAPSHOT_CANDLE),
    ("migrate_pool", IX_MIGRATE_POOL),
    ("set_circuit_breaker", IX_SET_CIRCUIT_BREAKER),
    ("reset_volume", IX_RESET_VOLUME),
];

/// Look up an instruction discriminator by name.
pub fn instruction_discriminator(name: &str) -> Option<[u8; 8]> {
    INSTRUCTION_DISCRIMINATORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

// Account discriminators (8-byte ASCII tags)

pub const ACCOUNT_POOL: [u8; 8] = *b"POOLSWAP";
pub const ACCOUNT_NPOOL: [u8; 8] = *b"NPOOLSWA";
pub const ACCOUNT_FARM: [u8; 8] = *b"FARMSWAP";
pub const ACCOUNT_USER_FARM: [u8; 8] = *b"UFARMSWA";
pub const ACCOUNT_LOTTERY: [u8; 8] = *b"LOTTERY!";
pub const ACCOUNT_LOTTERY_ENTRY: [u8; 8] = *b"LOTENTRY";
pub const ACCOUNT_REGISTRY: [u8; 8] = *b"REGISTRY";

/// Account-kind name to 8-byte ASCII discriminator.
pub const ACCOUNT_DISCRIMINATORS: &[(&str, [u8; 8])] = &[
    ("pool", ACCOUNT_POOL),
    ("npool", ACCOUNT_NPOOL),
    ("farm", ACCOUNT_FARM),
    ("user_farm", ACCOUNT_USER_FARM),
    ("lottery", ACCOUNT_LOTTERY),
    ("lottery_entry", ACCOUNT_LOTTERY_ENTRY),
    ("registry", ACCOUNT_REGISTRY),
];

/// Look up an account discriminator by kind name.
pub fn account_discriminator(name: &str) -> Option<[u8; 8]> {
    ACCOUNT_DISCRIMINATORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

/// On-chain error codes and their short names, 6000..=6030.
pub const ERROR_CODES: &[(u32, &str)] = &[
    (6000, "paused"),
    (6001, "invalid_amp"),
    (6002, "math_overflow"),
    (6003, "zero_amount"),
    (6004, "slippage_exceeded"),
    (6005, "invalid_invariant"),
    (6006, "insufficient_liquidity"),
    (6007, "vault_mismatch"),
    (6008, "expired"),
    (6009, "already_initialized"),
    (6010, "unauthorized"),
    (6011, "ramp_constraint"),
    (6012, "locked"),
    (6013, "farming_error"),
    (6014, "invalid_owner"),
    (6015, "invalid_discriminator"),
    (6016, "cpi_failed"),
    (6017, "full"),
    (6018, "circuit_breaker"),
    (6019, "oracle_error"),
    (6020, "rate_limit"),
    (6021, "governance_error"),
    (6022, "order_error"),
    (6023, "tick_error"),
    (6024, "range_error"),
    (6025, "flash_error"),
    (6026, "cooldown"),
    (6027, "mev_protection"),
    (6028, "stale_data"),
    (6029, "bias_error"),
    (6030, "duration_error"),
];

/// Translate an on-chain error code to its short name.
pub fn error_message(code: u32) -> Option<&'static str> {
    ERROR_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| *msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_id_matches_text_form() {
        assert_eq!(PROGRAM_ID.to_base58(), PROGRAM_ID_STR);
        assert_eq!(Pubkey::from_base58(PROGRAM_ID_STR).unwrap(), PROGRAM_ID);
    }

    #[test]
    fn test_token_program_ids() {
        assert_eq!(
            TOKEN_PROGRAM_ID.to_base58(),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(
            TOKEN_2022_PROGRAM_ID.to_base58(),
            "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"
        );
    }

    #[test]
    fn test_instruction_table_lookup() {
        assert_eq!(instruction_discriminator("swap"), Some(IX_SWAP));
        assert_eq!(
            instruction_discriminator("create_pool"),
            Some(IX_CREATE_POOL)
        );
        assert_eq!(instruction_discriminator("no_such_instruction"), None);
        assert_eq!(INSTRUCTION_DISCRIMINATORS.len(), 60);
    }

    #[test]
    fn test_instruction_discriminators_unique() {
        for (i, (_, a)) in INSTRUCTION_DISCRIMINATORS.iter().enumerate() {
            for (_, b) in &INSTRUCTION_DISCRIMINATORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_account_table_lookup() {
        assert_eq!(account_discriminator("pool"), Some(*b"POOLSWAP"));
        assert_eq!(account_discriminator("lottery"), Some(*b"LOTTERY!"));
        assert_eq!(account_discriminator("oracle"), None);
    }

    #[test]
    fn test_error_table_bounds() {
        assert_eq!(error_message(6000), Some("paused"));
        assert_eq!(error_message(6004), Some("slippage_exceeded"));
        assert_eq!(error_message(6030), Some("duration_error"));
        assert_eq!(error_message(6031), None);
        assert_eq!(error_message(5999), None);
        assert_eq!(ERROR_CODES.len(), 31);
    }
}
