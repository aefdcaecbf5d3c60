//! Instruction payload builders.
//!
//! Each builder is a pure function producing `discriminator ‖ args` with
//! the widths and order the program declares. Account metas, signing and
//! submission belong to the caller's transport layer.

use crate::codec::ByteWriter;
use crate::constants::{
    IX_ADD_LIQUIDITY, IX_ADD_LIQUIDITY_N, IX_ADD_LIQUIDITY_SINGLE, IX_COMMIT_AMP,
    IX_CREATE_FARM, IX_CREATE_GOV_PROPOSAL, IX_CREATE_LOTTERY, IX_CREATE_POOL, IX_DRAW_LOTTERY,
    IX_ENTER_LOTTERY, IX_LOCK, IX_RAMP_AMP, IX_REMOVE_LIQUIDITY, IX_SET_PAUSE, IX_STAKE,
    IX_SWAP_N, IX_SWAP_T0_T1, IX_SWAP_T1_T0, IX_UPDATE_FEE, IX_VOTE_GOV_PROPOSAL,
};

/// Byte width of the governance proposal description field.
pub const GOV_DESCRIPTION_LEN: usize = 64;

fn with_discriminator(discriminator: [u8; 8], capacity: usize) -> ByteWriter {
    let mut writer = ByteWriter::with_capacity(capacity);
    writer.write_bytes(&discriminator);
    writer
}

/// `create_pool(amp, pool_bump)` — 17 bytes.
pub fn build_create_pool(amp: u64, pool_bump: u8) -> Vec<u8> {
    let mut writer = with_discriminator(IX_CREATE_POOL, 17);
    writer.write_u64(amp);
    writer.write_u8(pool_bump);
    writer.into_inner()
}

/// `swap_t0_t1(amount_in, min_out)` — 24 bytes.
pub fn build_swap_t0_t1(amount_in: u64, min_out: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_SWAP_T0_T1, 24);
    writer.write_u64(amount_in);
    writer.write_u64(min_out);
    writer.into_inner()
}

/// `swap_t1_t0(amount_in, min_out)` — 24 bytes.
pub fn build_swap_t1_t0(amount_in: u64, min_out: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_SWAP_T1_T0, 24);
    writer.write_u64(amount_in);
    writer.write_u64(min_out);
    writer.into_inner()
}

/// Indexed N-pool swap `swap_n(from, to, amount_in, min_out, deadline)` —
/// 34 bytes. `deadline` is the last slot at which the order may fill.
pub fn build_swap_n(from: u8, to: u8, amount_in: u64, min_out: u64, deadline: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_SWAP_N, 34);
    writer.write_u8(from);
    writer.write_u8(to);
    writer.write_u64(amount_in);
    writer.write_u64(min_out);
    writer.write_u64(deadline);
    writer.into_inner()
}

/// Balanced deposit `add_liquidity(amount_0, amount_1, min_lp)` — 32 bytes.
pub fn build_add_liquidity(amount_0: u64, amount_1: u64, min_lp: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_ADD_LIQUIDITY, 32);
    writer.write_u64(amount_0);
    writer.write_u64(amount_1);
    writer.write_u64(min_lp);
    writer.into_inner()
}

/// Single-sided deposit `add_liquidity_single(token_index, amount,
/// min_lp)` — 25 bytes.
pub fn build_add_liquidity_single(token_index: u8, amount: u64, min_lp: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_ADD_LIQUIDITY_SINGLE, 25);
    writer.write_u8(token_index);
    writer.write_u64(amount);
    writer.write_u64(min_lp);
    writer.into_inner()
}

/// Balanced withdrawal `remove_liquidity(lp_amount, min_0, min_1)` — 32
/// bytes.
pub fn build_remove_liquidity(lp_amount: u64, min_0: u64, min_1: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_REMOVE_LIQUIDITY, 32);
    writer.write_u64(lp_amount);
    writer.write_u64(min_0);
    writer.write_u64(min_1);
    writer.into_inner()
}

/// Variable-length N-pool deposit `add_liquidity_n(amounts, min_lp)` —
/// `17 + 8·n` bytes, one u64 per pool slot.
pub fn build_add_liquidity_n(amounts: &[u64], min_lp: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_ADD_LIQUIDITY_N, 17 + amounts.len() * 8);
    writer.write_u8(amounts.len() as u8);
    for amount in amounts {
        writer.write_u64(*amount);
    }
    writer.write_u64(min_lp);
    writer.into_inner()
}

/// `set_pause(paused)` — 9 bytes.
pub fn build_set_pause(paused: bool) -> Vec<u8> {
    let mut writer = with_discriminator(IX_SET_PAUSE, 9);
    writer.write_u8(paused as u8);
    writer.into_inner()
}

/// `update_fee(fee_bps)` — 16 bytes.
pub fn build_update_fee(fee_bps: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_UPDATE_FEE, 16);
    writer.write_u64(fee_bps);
    writer.into_inner()
}

/// `commit_amp(amp)` — 16 bytes. The committed value becomes applicable
/// after the protocol's commit delay.
pub fn build_commit_amp(amp: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_COMMIT_AMP, 16);
    writer.write_u64(amp);
    writer.into_inner()
}

/// `ramp_amp(target_amp, ramp_stop)` — 24 bytes.
pub fn build_ramp_amp(target_amp: u64, ramp_stop: i64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_RAMP_AMP, 24);
    writer.write_u64(target_amp);
    writer.write_i64(ramp_stop);
    writer.into_inner()
}

/// `create_farm(reward_rate, lock_duration)` — 24 bytes.
pub fn build_create_farm(reward_rate: u64, lock_duration: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_CREATE_FARM, 24);
    writer.write_u64(reward_rate);
    writer.write_u64(lock_duration);
    writer.into_inner()
}

/// `stake(amount)` — 16 bytes.
pub fn build_stake(amount: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_STAKE, 16);
    writer.write_u64(amount);
    writer.into_inner()
}

/// `lock(duration)` — 16 bytes.
pub fn build_lock(duration: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_LOCK, 16);
    writer.write_u64(duration);
    writer.into_inner()
}

/// `create_lottery(ticket_price, draw_slot)` — 24 bytes.
pub fn build_create_lottery(ticket_price: u64, draw_slot: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_CREATE_LOTTERY, 24);
    writer.write_u64(ticket_price);
    writer.write_u64(draw_slot);
    writer.into_inner()
}

/// `enter_lottery(tickets)` — 16 bytes.
pub fn build_enter_lottery(tickets: u64) -> Vec<u8> {
    let mut writer = with_discriminator(IX_ENTER_LOTTERY, 16);
    writer.write_u64(tickets);
    writer.into_inner()
}

/// `draw_lottery()` — 8 bytes, no args.
pub fn build_draw_lottery() -> Vec<u8> {
    IX_DRAW_LOTTERY.to_vec()
}

/// `create_gov_proposal(proposal_id, description)` — 80 bytes. The
/// description is truncated to 64 bytes and right-padded with NUL.
pub fn build_create_gov_proposal(proposal_id: u64, description: &str) -> Vec<u8> {
    let mut writer = with_discriminator(IX_CREATE_GOV_PROPOSAL, 80);
    writer.write_u64(proposal_id);

    let raw = description.as_bytes();
    let len = raw.len().min(GOV_DESCRIPTION_LEN);
    writer.write_bytes(&raw[..len]);
    writer.pad(GOV_DESCRIPTION_LEN - len);
    writer.into_inner()
}

/// `vote_gov_proposal(proposal_id, approve)` — 17 bytes.
pub fn build_vote_gov_proposal(proposal_id: u64, approve: bool) -> Vec<u8> {
    let mut writer = with_discriminator(IX_VOTE_GOV_PROPOSAL, 17);
    writer.write_u64(proposal_id);
    writer.write_u8(approve as u8);
    writer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_payload_golden_bytes() {
        let data = build_swap_t0_t1(1000, 990);
        assert_eq!(data.len(), 24);
        assert_eq!(&data[..8], &IX_SWAP_T0_T1);
        assert_eq!(&data[8..16], &1000u64.to_le_bytes());
        assert_eq!(&data[16..24], &990u64.to_le_bytes());
    }

    #[test]
    fn test_payload_lengths() {
        assert_eq!(build_create_pool(100, 255).len(), 17);
        assert_eq!(build_swap_t0_t1(1, 1).len(), 24);
        assert_eq!(build_swap_t1_t0(1, 1).len(), 24);
        assert_eq!(build_swap_n(0, 1, 1, 1, 1).len(), 34);
        assert_eq!(build_add_liquidity(1, 1, 1).len(), 32);
        assert_eq!(build_add_liquidity_single(0, 1, 1).len(), 25);
        assert_eq!(build_remove_liquidity(1, 1, 1).len(), 32);
        assert_eq!(build_set_pause(true).len(), 9);
        assert_eq!(build_update_fee(30).len(), 16);
        assert_eq!(build_commit_amp(500).len(), 16);
        assert_eq!(build_ramp_amp(500, 1_700_000_000).len(), 24);
        assert_eq!(build_create_farm(1, 1).len(), 24);
        assert_eq!(build_stake(1).len(), 16);
        assert_eq!(build_lock(1).len(), 16);
        assert_eq!(build_create_lottery(1, 1).len(), 24);
        assert_eq!(build_enter_lottery(1).len(), 16);
        assert_eq!(build_draw_lottery().len(), 8);
        assert_eq!(build_create_gov_proposal(1, "x").len(), 80);
        assert_eq!(build_vote_gov_proposal(1, true).len(), 17);
        assert_eq!(build_add_liquidity_n(&[1, 2, 3], 1).len(), 17 + 24);
    }

    #[test]
    fn test_swap_n_field_order() {
        let data = build_swap_n(2, 5, 7_777, 7_000, 260_000_123);
        assert_eq!(&data[..8], &IX_SWAP_N);
        assert_eq!(data[8], 2);
        assert_eq!(data[9], 5);
        assert_eq!(&data[10..18], &7_777u64.to_le_bytes());
        assert_eq!(&data[18..26], &7_000u64.to_le_bytes());
        assert_eq!(&data[26..34], &260_000_123u64.to_le_bytes());
    }

    #[test]
    fn test_set_pause_flag_byte() {
        assert_eq!(build_set_pause(true)[8], 1);
        assert_eq!(build_set_pause(false)[8], 0);
    }

    #[test]
    fn test_gov_description_nul_padding() {
        let data = build_create_gov_proposal(7, "raise fee to 40 bps");
        assert_eq!(&data[8..16], &7u64.to_le_bytes());
        assert_eq!(&data[16..35], b"raise fee to 40 bps");
        assert!(data[35..80].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_gov_description_truncated() {
        let long = "x".repeat(200);
        let data = build_create_gov_proposal(1, &long);
        assert_eq!(data.len(), 80);
        assert!(data[16..80].iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_add_liquidity_n_variable_length() {
        let data = build_add_liquidity_n(&[10, 20], 5);
        assert_eq!(data.len(), 33);
        assert_eq!(data[8], 2);
        assert_eq!(&data[9..17], &10u64.to_le_bytes());
        assert_eq!(&data[17..25], &20u64.to_le_bytes());
        assert_eq!(&data[25..33], &5u64.to_le_bytes());
    }
}
