//! Labelled derivations for the program-controlled addresses.
//!
//! Each wrapper fixes the seed prefix and ordering for one account
//! family. The short forms derive under the canonical program id; every
//! family also has a `_with_program` form for forks and test
//! deployments.

use crate::constants::{
    CL_POOL_SEED, CL_POSITION_SEED, FARM_SEED, GOV_PROPOSAL_SEED, GOV_VOTE_SEED, LOTTERY_ENTRY_SEED,
    LOTTERY_SEED, LP_MINT_SEED, ML_BRAIN_SEED, ORDERBOOK_SEED, POOL_SEED, PROGRAM_ID,
    REGISTRY_SEED, USER_FARM_SEED, VAULT_SEED,
};
use crate::error::DeriveError;
use crate::pubkey::Pubkey;

/// Pool address for an ordered mint pair.
pub fn derive_pool(mint_0: &Pubkey, mint_1: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_pool_with_program(&PROGRAM_ID, mint_0, mint_1)
}

pub fn derive_pool_with_program(
    program_id: &Pubkey,
    mint_0: &Pubkey,
    mint_1: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(
        &[POOL_SEED, mint_0.as_ref(), mint_1.as_ref()],
        program_id,
    )
}

/// Token vault held by a pool for one of its mints.
pub fn derive_vault(pool: &Pubkey, mint: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_vault_with_program(&PROGRAM_ID, pool, mint)
}

pub fn derive_vault_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[VAULT_SEED, pool.as_ref(), mint.as_ref()], program_id)
}

/// LP mint of a pool.
pub fn derive_lp_mint(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_lp_mint_with_program(&PROGRAM_ID, pool)
}

pub fn derive_lp_mint_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[LP_MINT_SEED, pool.as_ref()], program_id)
}

/// Staking farm attached to a pool.
pub fn derive_farm(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_farm_with_program(&PROGRAM_ID, pool)
}

pub fn derive_farm_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[FARM_SEED, pool.as_ref()], program_id)
}

/// A user's position account in a farm.
pub fn derive_user_farm(farm: &Pubkey, user: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_user_farm_with_program(&PROGRAM_ID, farm, user)
}

pub fn derive_user_farm_with_program(
    program_id: &Pubkey,
    farm: &Pubkey,
    user: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[USER_FARM_SEED, farm.as_ref(), user.as_ref()], program_id)
}

/// Lottery attached to a pool.
pub fn derive_lottery(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_lottery_with_program(&PROGRAM_ID, pool)
}

pub fn derive_lottery_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[LOTTERY_SEED, pool.as_ref()], program_id)
}

/// A user's entry account in a lottery.
pub fn derive_lottery_entry(
    lottery: &Pubkey,
    user: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    derive_lottery_entry_with_program(&PROGRAM_ID, lottery, user)
}

pub fn derive_lottery_entry_with_program(
    program_id: &Pubkey,
    lottery: &Pubkey,
    user: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(
        &[LOTTERY_ENTRY_SEED, lottery.as_ref(), user.as_ref()],
        program_id,
    )
}

/// The singleton pool registry.
pub fn derive_registry() -> Result<(Pubkey, u8), DeriveError> {
    derive_registry_with_program(&PROGRAM_ID)
}

pub fn derive_registry_with_program(program_id: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[REGISTRY_SEED], program_id)
}

/// ML brain account attached to a pool.
pub fn derive_ml_brain(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_ml_brain_with_program(&PROGRAM_ID, pool)
}

pub fn derive_ml_brain_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[ML_BRAIN_SEED, pool.as_ref()], program_id)
}

/// Governance proposal `proposal_id` for a pool.
pub fn derive_gov_proposal(
    pool: &Pubkey,
    proposal_id: u64,
) -> Result<(Pubkey, u8), DeriveError> {
    derive_gov_proposal_with_program(&PROGRAM_ID, pool, proposal_id)
}

pub fn derive_gov_proposal_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
    proposal_id: u64,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(
        &[GOV_PROPOSAL_SEED, pool.as_ref(), &proposal_id.to_le_bytes()],
        program_id,
    )
}

/// A voter's ballot on a proposal.
pub fn derive_gov_vote(proposal: &Pubkey, voter: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_gov_vote_with_program(&PROGRAM_ID, proposal, voter)
}

pub fn derive_gov_vote_with_program(
    program_id: &Pubkey,
    proposal: &Pubkey,
    voter: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(
        &[GOV_VOTE_SEED, proposal.as_ref(), voter.as_ref()],
        program_id,
    )
}

/// Concentrated-liquidity sibling of a pool.
pub fn derive_cl_pool(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_cl_pool_with_program(&PROGRAM_ID, pool)
}

pub fn derive_cl_pool_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[CL_POOL_SEED, pool.as_ref()], program_id)
}

/// Position `position_id` in a concentrated-liquidity pool.
pub fn derive_cl_position(
    cl_pool: &Pubkey,
    position_id: u64,
) -> Result<(Pubkey, u8), DeriveError> {
    derive_cl_position_with_program(&PROGRAM_ID, cl_pool, position_id)
}

pub fn derive_cl_position_with_program(
    program_id: &Pubkey,
    cl_pool: &Pubkey,
    position_id: u64,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(
        &[CL_POSITION_SEED, cl_pool.as_ref(), &position_id.to_le_bytes()],
        program_id,
    )
}

/// Orderbook sibling of a pool.
pub fn derive_orderbook(pool: &Pubkey) -> Result<(Pubkey, u8), DeriveError> {
    derive_orderbook_with_program(&PROGRAM_ID, pool)
}

pub fn derive_orderbook_with_program(
    program_id: &Pubkey,
    pool: &Pubkey,
) -> Result<(Pubkey, u8), DeriveError> {
    Pubkey::find_program_address(&[ORDERBOOK_SEED, pool.as_ref()], program_id)
}
