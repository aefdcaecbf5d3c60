//! PoolSwap AMM SDK
//!
//! A standalone client SDK for the PoolSwap hybrid AMM program.
//! This SDK provides the core functionality for:
//! - Quoting swaps and liquidity operations off-chain, bit-faithfully
//!   with the on-chain StableSwap solver
//! - Parsing pool, farm, lottery and registry account blobs
//! - Building instruction payloads
//! - Deriving the program's addresses
//!
//! The SDK is purely off-chain and stateless: it holds no RPC client, no
//! signer, and no caches. Fetching account data and submitting
//! transactions belong to the caller's transport layer.

pub mod codec;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod pubkey;
pub mod state;

// Re-export main types for easy access
pub use constants::{account_discriminator, error_message, instruction_discriminator, PROGRAM_ID, PROGRAM_ID_STR};
pub use error::{CodecError, DeriveError, MathError, PubkeyError};
pub use instructions::*;
pub use math::{
    calc_d, calc_d_n, calc_lp_tokens, calc_price_impact, calc_spot_price, calc_virtual_price,
    calc_withdraw_amounts, calc_y, calc_y_n, compute_twap, get_current_amp, isqrt, simulate_swap,
    simulate_swap_n, swap_quote, SwapQuote,
};
pub use pda::*;
pub use pubkey::Pubkey;
pub use state::{
    bloom_contains, bloom_insert, Candle, Farm, Lottery, LotteryEntry, NPool, Pool, Registry,
    TwapSample, UserFarm,
};

/// Any account the program owns, parsed by discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Pool(Box<Pool>),
    NPool(Box<NPool>),
    Farm(Farm),
    UserFarm(UserFarm),
    Lottery(Lottery),
    LotteryEntry(LotteryEntry),
    Registry(Registry),
}

/// Parse an account blob of unknown kind by dispatching on its
/// discriminator.
pub fn parse_account(data: &[u8]) -> Result<Account, CodecError> {
    if data.len() < 8 {
        return Err(CodecError::InsufficientData);
    }
    let discriminator = &data[..8];

    if discriminator == Pool::DISCRIMINATOR {
        Ok(Account::Pool(Box::new(Pool::unpack(data)?)))
    } else if discriminator == NPool::DISCRIMINATOR {
        Ok(Account::NPool(Box::new(NPool::unpack(data)?)))
    } else if discriminator == Farm::DISCRIMINATOR {
        Ok(Account::Farm(Farm::unpack(data)?))
    } else if discriminator == UserFarm::DISCRIMINATOR {
        Ok(Account::UserFarm(UserFarm::unpack(data)?))
    } else if discriminator == Lottery::DISCRIMINATOR {
        Ok(Account::Lottery(Lottery::unpack(data)?))
    } else if discriminator == LotteryEntry::DISCRIMINATOR {
        Ok(Account::LotteryEntry(LotteryEntry::unpack(data)?))
    } else if discriminator == Registry::DISCRIMINATOR {
        Ok(Account::Registry(Registry::unpack(data)?))
    } else {
        Err(CodecError::InvalidDiscriminator)
    }
}
