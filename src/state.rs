//! Typed views over the program's account blobs.
//!
//! Every account kind starts with an 8-byte ASCII discriminator and is
//! laid out at fixed offsets, little-endian throughout. `unpack` applies
//! the shared error ladder: a blob shorter than 8 bytes is
//! `InsufficientData`, a wrong tag is `InvalidDiscriminator`, and a blob
//! shorter than the kind's declared size is `InvalidFormat`. Longer blobs
//! parse fine with the tail ignored. `pack` emits the full declared size
//! with all padding and reserved bytes zeroed.

use sha2::{Digest, Sha256};

use crate::codec::{ByteReader, ByteWriter};
use crate::constants::{
    ACCOUNT_FARM, ACCOUNT_LOTTERY, ACCOUNT_LOTTERY_ENTRY, ACCOUNT_NPOOL, ACCOUNT_POOL,
    ACCOUNT_REGISTRY, ACCOUNT_USER_FARM, BLOOM_SIZE, DAILY_CANDLES, HOURLY_CANDLES,
    MAX_TOKENS, NPOOL_ACCOUNT_SIZE, POOL_ACCOUNT_SIZE,
};
use crate::error::CodecError;
use crate::pubkey::Pubkey;

fn check_account(
    data: &[u8],
    discriminator: &[u8; 8],
    declared_size: usize,
) -> Result<(), CodecError> {
    if data.len() < 8 {
        return Err(CodecError::InsufficientData);
    }
    if data[..8] != discriminator[..] {
        return Err(CodecError::InvalidDiscriminator);
    }
    if data.len() < declared_size {
        return Err(CodecError::InvalidFormat);
    }
    Ok(())
}

/// Delta-encoded OHLCV record, 12 bytes on the wire.
///
/// Prices are integer-scaled by 10^6, volumes by 10^9. A zero `open`
/// marks an unwritten slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Candle {
    pub open: u32,
    pub high_delta: u16,
    pub low_delta: u16,
    pub close_delta: i16,
    pub volume: u16,
}

impl Candle {
    /// Wire size of one candle.
    pub const SIZE: usize = 12;

    /// Decoded high price.
    pub fn high(&self) -> u32 {
        self.open.saturating_add(self.high_delta as u32)
    }

    /// Decoded low price.
    pub fn low(&self) -> u32 {
        self.open.saturating_sub(self.low_delta as u32)
    }

    /// Decoded close price.
    pub fn close(&self) -> u32 {
        (self.open as i64 + self.close_delta as i64).clamp(0, u32::MAX as i64) as u32
    }

    pub(crate) fn read(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            open: reader.read_u32()?,
            high_delta: reader.read_u16()?,
            low_delta: reader.read_u16()?,
            close_delta: reader.read_i16()?,
            volume: reader.read_u16()?,
        })
    }

    pub(crate) fn write(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.open);
        writer.write_u16(self.high_delta);
        writer.write_u16(self.low_delta);
        writer.write_i16(self.close_delta);
        writer.write_u16(self.volume);
    }
}

/// A TWAP reading packed into a single u64.
///
/// Bits 0..32 hold the price (×10^6), bits 32..48 the sample count, and
/// bits 48..64 the confidence (percent ×100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwapSample {
    pub price: u32,
    pub samples: u16,
    pub confidence: u16,
}

impl TwapSample {
    /// Pack into the wire u64.
    pub fn pack(&self) -> u64 {
        self.price as u64 | (self.samples as u64) << 32 | (self.confidence as u64) << 48
    }

    /// Unpack from the wire u64.
    pub fn unpack(raw: u64) -> Self {
        Self {
            price: raw as u32,
            samples: (raw >> 32) as u16,
            confidence: (raw >> 48) as u16,
        }
    }
}

/// Number of bits in the trader bloom filter.
const BLOOM_BITS: usize = BLOOM_SIZE * 8;

fn bloom_bit_indices(key: &Pubkey) -> [usize; 3] {
    let digest: [u8; 32] = Sha256::digest(key.as_ref()).into();
    let mut indices = [0usize; 3];
    for (probe, index) in indices.iter_mut().enumerate() {
        let offset = probe * 2;
        *index =
            u16::from_le_bytes([digest[offset], digest[offset + 1]]) as usize % BLOOM_BITS;
    }
    indices
}

/// Test whether `key` may have been recorded in a pool's trader filter.
/// False positives are possible, false negatives are not.
pub fn bloom_contains(filter: &[u8; BLOOM_SIZE], key: &Pubkey) -> bool {
    bloom_bit_indices(key)
        .iter()
        .all(|&bit| filter[bit / 8] & (1 << (bit % 8)) != 0)
}

/// Record `key` in a filter. The SDK only uses this for fixtures; the
/// chain owns the live filter.
pub fn bloom_insert(filter: &mut [u8; BLOOM_SIZE], key: &Pubkey) {
    for bit in bloom_bit_indices(key) {
        filter[bit / 8] |= 1 << (bit % 8);
    }
}

/// Two-token hybrid pool, 1024 bytes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub authority: Pubkey,
    pub token_0_mint: Pubkey,
    pub token_1_mint: Pubkey,
    pub vault_0: Pubkey,
    pub vault_1: Pubkey,
    pub lp_mint: Pubkey,
    /// Effective amplification coefficient.
    pub amp: u64,
    pub init_amp: u64,
    pub target_amp: u64,
    pub ramp_start: i64,
    pub ramp_stop: i64,
    pub fee_bps: u64,
    pub admin_fee_pct: u64,
    pub balance_0: u64,
    pub balance_1: u64,
    pub lp_supply: u64,
    pub admin_fee_0: u64,
    pub admin_fee_1: u64,
    pub volume_0: u64,
    pub volume_1: u64,
    pub paused: bool,
    pub pool_bump: u8,
    pub vault_0_bump: u8,
    pub vault_1_bump: u8,
    pub lp_mint_bump: u8,
    pub authority_bump: u8,
    pub pending_authority: Pubkey,
    pub pending_authority_ts: i64,
    pub pending_amp: u64,
    pub pending_amp_ts: i64,
    pub trade_count: u64,
    pub trade_sum: u64,
    pub max_price: u32,
    pub min_price: u32,
    pub hour_anchor_slot: u32,
    pub day_anchor_slot: u32,
    /// Rolling index into `hourly_candles`, always < 24.
    pub hour_index: u8,
    /// Rolling index into `daily_candles`, always < 7.
    pub day_index: u8,
    pub trader_bloom: [u8; BLOOM_SIZE],
    pub hourly_candles: [Candle; HOURLY_CANDLES],
    pub daily_candles: [Candle; DAILY_CANDLES],
}

impl Default for Pool {
    fn default() -> Self {
        Self {
            authority: Pubkey::default(),
            token_0_mint: Pubkey::default(),
            token_1_mint: Pubkey::default(),
            vault_0: Pubkey::default(),
            vault_1: Pubkey::default(),
            lp_mint: Pubkey::default(),
            amp: 0,
            init_amp: 0,
            target_amp: 0,
            ramp_start: 0,
            ramp_stop: 0,
            fee_bps: 0,
            admin_fee_pct: 0,
            balance_0: 0,
            balance_1: 0,
            lp_supply: 0,
            admin_fee_0: 0,
            admin_fee_1: 0,
            volume_0: 0,
            volume_1: 0,
            paused: false,
            pool_bump: 0,
            vault_0_bump: 0,
            vault_1_bump: 0,
            lp_mint_bump: 0,
            authority_bump: 0,
            pending_authority: Pubkey::default(),
            pending_authority_ts: 0,
            pending_amp: 0,
            pending_amp_ts: 0,
            trade_count: 0,
            trade_sum: 0,
            max_price: 0,
            min_price: 0,
            hour_anchor_slot: 0,
            day_anchor_slot: 0,
            hour_index: 0,
            day_index: 0,
            trader_bloom: [0; BLOOM_SIZE],
            hourly_candles: [Candle::default(); HOURLY_CANDLES],
            daily_candles: [Candle::default(); DAILY_CANDLES],
        }
    }
}

impl Pool {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_POOL;
    pub const SIZE: usize = POOL_ACCOUNT_SIZE;

    /// Parse a pool account blob.
    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);

        let authority = reader.read_key()?;
        let token_0_mint = reader.read_key()?;
        let token_1_mint = reader.read_key()?;
        let vault_0 = reader.read_key()?;
        let vault_1 = reader.read_key()?;
        let lp_mint = reader.read_key()?;
        let amp = reader.read_u64()?;
        let init_amp = reader.read_u64()?;
        let target_amp = reader.read_u64()?;
        let ramp_start = reader.read_i64()?;
        let ramp_stop = reader.read_i64()?;
        let fee_bps = reader.read_u64()?;
        let admin_fee_pct = reader.read_u64()?;
        let balance_0 = reader.read_u64()?;
        let balance_1 = reader.read_u64()?;
        let lp_supply = reader.read_u64()?;
        let admin_fee_0 = reader.read_u64()?;
        let admin_fee_1 = reader.read_u64()?;
        let volume_0 = reader.read_u64()?;
        let volume_1 = reader.read_u64()?;
        let paused = reader.read_u8()? != 0;
        let pool_bump = reader.read_u8()?;
        let vault_0_bump = reader.read_u8()?;
        let vault_1_bump = reader.read_u8()?;
        let lp_mint_bump = reader.read_u8()?;
        let authority_bump = reader.read_u8()?;
        reader.skip(3)?;
        let pending_authority = reader.read_key()?;
        let pending_authority_ts = reader.read_i64()?;
        let pending_amp = reader.read_u64()?;
        let pending_amp_ts = reader.read_i64()?;
        let trade_count = reader.read_u64()?;
        let trade_sum = reader.read_u64()?;
        let max_price = reader.read_u32()?;
        let min_price = reader.read_u32()?;
        let hour_anchor_slot = reader.read_u32()?;
        let day_anchor_slot = reader.read_u32()?;
        let hour_index = reader.read_u8()?;
        let day_index = reader.read_u8()?;
        reader.skip(6)?;
        let trader_bloom = reader.read_bytes::<BLOOM_SIZE>()?;

        let mut hourly_candles = [Candle::default(); HOURLY_CANDLES];
        for candle in hourly_candles.iter_mut() {
            *candle = Candle::read(&mut reader)?;
        }
        let mut daily_candles = [Candle::default(); DAILY_CANDLES];
        for candle in daily_candles.iter_mut() {
            *candle = Candle::read(&mut reader)?;
        }

        Ok(Self {
            authority,
            token_0_mint,
            token_1_mint,
            vault_0,
            vault_1,
            lp_mint,
            amp,
            init_amp,
            target_amp,
            ramp_start,
            ramp_stop,
            fee_bps,
            admin_fee_pct,
            balance_0,
            balance_1,
            lp_supply,
            admin_fee_0,
            admin_fee_1,
            volume_0,
            volume_1,
            paused,
            pool_bump,
            vault_0_bump,
            vault_1_bump,
            lp_mint_bump,
            authority_bump,
            pending_authority,
            pending_authority_ts,
            pending_amp,
            pending_amp_ts,
            trade_count,
            trade_sum,
            max_price,
            min_price,
            hour_anchor_slot,
            day_anchor_slot,
            hour_index,
            day_index,
            trader_bloom,
            hourly_candles,
            daily_candles,
        })
    }

    /// Serialize to a full 1024-byte blob.
    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.authority);
        writer.write_key(&self.token_0_mint);
        writer.write_key(&self.token_1_mint);
        writer.write_key(&self.vault_0);
        writer.write_key(&self.vault_1);
        writer.write_key(&self.lp_mint);
        writer.write_u64(self.amp);
        writer.write_u64(self.init_amp);
        writer.write_u64(self.target_amp);
        writer.write_i64(self.ramp_start);
        writer.write_i64(self.ramp_stop);
        writer.write_u64(self.fee_bps);
        writer.write_u64(self.admin_fee_pct);
        writer.write_u64(self.balance_0);
        writer.write_u64(self.balance_1);
        writer.write_u64(self.lp_supply);
        writer.write_u64(self.admin_fee_0);
        writer.write_u64(self.admin_fee_1);
        writer.write_u64(self.volume_0);
        writer.write_u64(self.volume_1);
        writer.write_u8(self.paused as u8);
        writer.write_u8(self.pool_bump);
        writer.write_u8(self.vault_0_bump);
        writer.write_u8(self.vault_1_bump);
        writer.write_u8(self.lp_mint_bump);
        writer.write_u8(self.authority_bump);
        writer.pad(3);
        writer.write_key(&self.pending_authority);
        writer.write_i64(self.pending_authority_ts);
        writer.write_u64(self.pending_amp);
        writer.write_i64(self.pending_amp_ts);
        writer.write_u64(self.trade_count);
        writer.write_u64(self.trade_sum);
        writer.write_u32(self.max_price);
        writer.write_u32(self.min_price);
        writer.write_u32(self.hour_anchor_slot);
        writer.write_u32(self.day_anchor_slot);
        writer.write_u8(self.hour_index);
        writer.write_u8(self.day_index);
        writer.pad(6);
        writer.write_bytes(&self.trader_bloom);
        for candle in &self.hourly_candles {
            candle.write(&mut writer);
        }
        for candle in &self.daily_candles {
            candle.write(&mut writer);
        }
        writer.pad(Self::SIZE - writer.len());
        writer.into_inner()
    }
}

/// Generalized pool over 2..=8 tokens, 2048 bytes on the wire.
///
/// Mint, vault, balance and fee slots past `n_tokens` are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NPool {
    pub authority: Pubkey,
    pub n_tokens: u8,
    pub paused: bool,
    pub bump: u8,
    pub amp: u64,
    pub fee_bps: u64,
    pub admin_fee_pct: u64,
    pub lp_supply: u64,
    pub mints: [Pubkey; MAX_TOKENS],
    pub vaults: [Pubkey; MAX_TOKENS],
    pub lp_mint: Pubkey,
    pub balances: [u64; MAX_TOKENS],
    pub admin_fees: [u64; MAX_TOKENS],
    pub total_volume: u64,
    pub trade_count: u64,
    pub last_trade_slot: u64,
}

impl Default for NPool {
    fn default() -> Self {
        Self {
            authority: Pubkey::default(),
            n_tokens: 0,
            paused: false,
            bump: 0,
            amp: 0,
            fee_bps: 0,
            admin_fee_pct: 0,
            lp_supply: 0,
            mints: [Pubkey::default(); MAX_TOKENS],
            vaults: [Pubkey::default(); MAX_TOKENS],
            lp_mint: Pubkey::default(),
            balances: [0; MAX_TOKENS],
            admin_fees: [0; MAX_TOKENS],
            total_volume: 0,
            trade_count: 0,
            last_trade_slot: 0,
        }
    }
}

impl NPool {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_NPOOL;
    pub const SIZE: usize = NPOOL_ACCOUNT_SIZE;

    /// Parse an N-pool account blob.
    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);

        let authority = reader.read_key()?;
        let n_tokens = reader.read_u8()?;
        let paused = reader.read_u8()? != 0;
        let bump = reader.read_u8()?;
        reader.skip(5)?;
        let amp = reader.read_u64()?;
        let fee_bps = reader.read_u64()?;
        let admin_fee_pct = reader.read_u64()?;
        let lp_supply = reader.read_u64()?;

        let mut mints = [Pubkey::default(); MAX_TOKENS];
        for mint in mints.iter_mut() {
            *mint = reader.read_key()?;
        }
        let mut vaults = [Pubkey::default(); MAX_TOKENS];
        for vault in vaults.iter_mut() {
            *vault = reader.read_key()?;
        }
        let lp_mint = reader.read_key()?;

        let mut balances = [0u64; MAX_TOKENS];
        for balance in balances.iter_mut() {
            *balance = reader.read_u64()?;
        }
        let mut admin_fees = [0u64; MAX_TOKENS];
        for fee in admin_fees.iter_mut() {
            *fee = reader.read_u64()?;
        }

        let total_volume = reader.read_u64()?;
        let trade_count = reader.read_u64()?;
        let last_trade_slot = reader.read_u64()?;

        Ok(Self {
            authority,
            n_tokens,
            paused,
            bump,
            amp,
            fee_bps,
            admin_fee_pct,
            lp_supply,
            mints,
            vaults,
            lp_mint,
            balances,
            admin_fees,
            total_volume,
            trade_count,
            last_trade_slot,
        })
    }

    /// Serialize to a full 2048-byte blob.
    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.authority);
        writer.write_u8(self.n_tokens);
        writer.write_u8(self.paused as u8);
        writer.write_u8(self.bump);
        writer.pad(5);
        writer.write_u64(self.amp);
        writer.write_u64(self.fee_bps);
        writer.write_u64(self.admin_fee_pct);
        writer.write_u64(self.lp_supply);
        for mint in &self.mints {
            writer.write_key(mint);
        }
        for vault in &self.vaults {
            writer.write_key(vault);
        }
        writer.write_key(&self.lp_mint);
        for balance in &self.balances {
            writer.write_u64(*balance);
        }
        for fee in &self.admin_fees {
            writer.write_u64(*fee);
        }
        writer.write_u64(self.total_volume);
        writer.write_u64(self.trade_count);
        writer.write_u64(self.last_trade_slot);
        writer.pad(Self::SIZE - writer.len());
        writer.into_inner()
    }

    /// The balances actually in use, `n_tokens` entries.
    pub fn active_balances(&self) -> &[u64] {
        &self.balances[..(self.n_tokens as usize).min(MAX_TOKENS)]
    }
}

/// LP staking farm attached to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Farm {
    pub pool: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    /// Reward units emitted per slot.
    pub reward_rate: u64,
    pub total_staked: u64,
    /// Accumulated reward per staked unit, ×10^12.
    pub acc_reward_per_share: u64,
    pub last_update_slot: u64,
    pub lock_duration: u64,
    pub paused: bool,
    pub bump: u8,
}

impl Farm {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_FARM;
    pub const SIZE: usize = 184;

    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);
        Ok(Self {
            pool: reader.read_key()?,
            stake_mint: reader.read_key()?,
            reward_mint: reader.read_key()?,
            reward_vault: reader.read_key()?,
            reward_rate: reader.read_u64()?,
            total_staked: reader.read_u64()?,
            acc_reward_per_share: reader.read_u64()?,
            last_update_slot: reader.read_u64()?,
            lock_duration: reader.read_u64()?,
            paused: reader.read_u8()? != 0,
            bump: reader.read_u8()?,
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.pool);
        writer.write_key(&self.stake_mint);
        writer.write_key(&self.reward_mint);
        writer.write_key(&self.reward_vault);
        writer.write_u64(self.reward_rate);
        writer.write_u64(self.total_staked);
        writer.write_u64(self.acc_reward_per_share);
        writer.write_u64(self.last_update_slot);
        writer.write_u64(self.lock_duration);
        writer.write_u8(self.paused as u8);
        writer.write_u8(self.bump);
        writer.pad(6);
        writer.into_inner()
    }
}

/// A user's position in a farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserFarm {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub staked: u64,
    pub reward_debt: u64,
    pub pending_rewards: u64,
    pub lock_until: i64,
    pub bump: u8,
}

impl UserFarm {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_USER_FARM;
    pub const SIZE: usize = 112;

    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);
        Ok(Self {
            farm: reader.read_key()?,
            owner: reader.read_key()?,
            staked: reader.read_u64()?,
            reward_debt: reader.read_u64()?,
            pending_rewards: reader.read_u64()?,
            lock_until: reader.read_i64()?,
            bump: reader.read_u8()?,
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.farm);
        writer.write_key(&self.owner);
        writer.write_u64(self.staked);
        writer.write_u64(self.reward_debt);
        writer.write_u64(self.pending_rewards);
        writer.write_i64(self.lock_until);
        writer.write_u8(self.bump);
        writer.pad(7);
        writer.into_inner()
    }
}

/// Volume lottery attached to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lottery {
    pub pool: Pubkey,
    pub prize_mint: Pubkey,
    pub prize_vault: Pubkey,
    pub ticket_price: u64,
    pub prize_pool: u64,
    pub entries: u64,
    pub draw_slot: u64,
    /// All-zero until the draw happens.
    pub winner: Pubkey,
    pub drawn: bool,
    pub bump: u8,
}

impl Lottery {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_LOTTERY;
    pub const SIZE: usize = 176;

    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);
        Ok(Self {
            pool: reader.read_key()?,
            prize_mint: reader.read_key()?,
            prize_vault: reader.read_key()?,
            ticket_price: reader.read_u64()?,
            prize_pool: reader.read_u64()?,
            entries: reader.read_u64()?,
            draw_slot: reader.read_u64()?,
            winner: reader.read_key()?,
            drawn: reader.read_u8()? != 0,
            bump: reader.read_u8()?,
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.pool);
        writer.write_key(&self.prize_mint);
        writer.write_key(&self.prize_vault);
        writer.write_u64(self.ticket_price);
        writer.write_u64(self.prize_pool);
        writer.write_u64(self.entries);
        writer.write_u64(self.draw_slot);
        writer.write_key(&self.winner);
        writer.write_u8(self.drawn as u8);
        writer.write_u8(self.bump);
        writer.pad(6);
        writer.into_inner()
    }
}

/// One user's entry into a lottery round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LotteryEntry {
    pub lottery: Pubkey,
    pub owner: Pubkey,
    pub tickets: u64,
    pub entry_slot: u64,
    pub bump: u8,
}

impl LotteryEntry {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_LOTTERY_ENTRY;
    pub const SIZE: usize = 96;

    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);
        Ok(Self {
            lottery: reader.read_key()?,
            owner: reader.read_key()?,
            tickets: reader.read_u64()?,
            entry_slot: reader.read_u64()?,
            bump: reader.read_u8()?,
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.lottery);
        writer.write_key(&self.owner);
        writer.write_u64(self.tickets);
        writer.write_u64(self.entry_slot);
        writer.write_u8(self.bump);
        writer.pad(7);
        writer.into_inner()
    }
}

/// Global pool registry; the one variable-length account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    pub authority: Pubkey,
    pub bump: u8,
    pub pools: Vec<Pubkey>,
}

impl Registry {
    pub const DISCRIMINATOR: [u8; 8] = ACCOUNT_REGISTRY;
    /// Size of the fixed header before the pool key list.
    pub const HEADER_SIZE: usize = 56;

    pub fn unpack(data: &[u8]) -> Result<Self, CodecError> {
        check_account(data, &Self::DISCRIMINATOR, Self::HEADER_SIZE)?;
        let mut reader = ByteReader::new(&data[8..]);
        let authority = reader.read_key()?;
        let pool_count = reader.read_u64()?;
        let bump = reader.read_u8()?;
        reader.skip(7)?;

        if (reader.remaining() as u64) < pool_count.saturating_mul(32) {
            return Err(CodecError::InvalidFormat);
        }
        let mut pools = Vec::with_capacity(pool_count as usize);
        for _ in 0..pool_count {
            pools.push(reader.read_key()?);
        }

        Ok(Self {
            authority,
            bump,
            pools,
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer =
            ByteWriter::with_capacity(Self::HEADER_SIZE + self.pools.len() * 32);
        writer.write_bytes(&Self::DISCRIMINATOR);
        writer.write_key(&self.authority);
        writer.write_u64(self.pools.len() as u64);
        writer.write_u8(self.bump);
        writer.pad(7);
        for pool in &self.pools {
            writer.write_key(pool);
        }
        writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_decode() {
        let candle = Candle {
            open: 1_000_000,
            high_delta: 250,
            low_delta: 120,
            close_delta: -40,
            volume: 77,
        };
        assert_eq!(candle.high(), 1_000_250);
        assert_eq!(candle.low(), 999_880);
        assert_eq!(candle.close(), 999_960);
    }

    #[test]
    fn test_candle_decode_saturates() {
        let candle = Candle {
            open: 10,
            high_delta: 0,
            low_delta: 100,
            close_delta: -100,
            volume: 0,
        };
        assert_eq!(candle.low(), 0);
        assert_eq!(candle.close(), 0);
    }

    #[test]
    fn test_candle_wire_round_trip() {
        let candle = Candle {
            open: 0xAABBCCDD,
            high_delta: 0x1122,
            low_delta: 0x3344,
            close_delta: -2,
            volume: 0x5566,
        };
        let mut writer = ByteWriter::new();
        candle.write(&mut writer);
        let bytes = writer.into_inner();
        assert_eq!(bytes.len(), Candle::SIZE);
        assert_eq!(&bytes[..4], &[0xDD, 0xCC, 0xBB, 0xAA]);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(Candle::read(&mut reader).unwrap(), candle);
    }

    #[test]
    fn test_twap_sample_packing() {
        let sample = TwapSample {
            price: 1_234_567,
            samples: 24,
            confidence: 9_500,
        };
        let raw = sample.pack();
        assert_eq!(raw & 0xFFFF_FFFF, 1_234_567);
        assert_eq!((raw >> 32) & 0xFFFF, 24);
        assert_eq!(raw >> 48, 9_500);
        assert_eq!(TwapSample::unpack(raw), sample);
    }

    #[test]
    fn test_bloom_filter_probes() {
        let mut filter = [0u8; BLOOM_SIZE];
        let trader = Pubkey::new_from_array([42u8; 32]);
        let other = Pubkey::new_from_array([43u8; 32]);

        assert!(!bloom_contains(&filter, &trader));
        bloom_insert(&mut filter, &trader);
        assert!(bloom_contains(&filter, &trader));
        assert!(!bloom_contains(&filter, &other));

        // saturated filter reports everything
        let full = [0xFFu8; BLOOM_SIZE];
        assert!(bloom_contains(&full, &other));
    }

    #[test]
    fn test_farm_round_trip() {
        let farm = Farm {
            pool: Pubkey::new_from_array([1; 32]),
            stake_mint: Pubkey::new_from_array([2; 32]),
            reward_mint: Pubkey::new_from_array([3; 32]),
            reward_vault: Pubkey::new_from_array([4; 32]),
            reward_rate: 5_000,
            total_staked: 9_999_999,
            acc_reward_per_share: 123_456_789_012,
            last_update_slot: 250_000_000,
            lock_duration: 604_800,
            paused: true,
            bump: 254,
        };
        let bytes = farm.pack();
        assert_eq!(bytes.len(), Farm::SIZE);
        assert_eq!(Farm::unpack(&bytes).unwrap(), farm);
    }

    #[test]
    fn test_user_farm_round_trip() {
        let user = UserFarm {
            farm: Pubkey::new_from_array([9; 32]),
            owner: Pubkey::new_from_array([8; 32]),
            staked: 1_000_000,
            reward_debt: 42,
            pending_rewards: 77,
            lock_until: -1,
            bump: 250,
        };
        let bytes = user.pack();
        assert_eq!(bytes.len(), UserFarm::SIZE);
        assert_eq!(UserFarm::unpack(&bytes).unwrap(), user);
    }

    #[test]
    fn test_lottery_round_trip() {
        let lottery = Lottery {
            pool: Pubkey::new_from_array([5; 32]),
            prize_mint: Pubkey::new_from_array([6; 32]),
            prize_vault: Pubkey::new_from_array([7; 32]),
            ticket_price: 1_000_000,
            prize_pool: 50_000_000,
            entries: 321,
            draw_slot: 260_000_000,
            winner: Pubkey::default(),
            drawn: false,
            bump: 255,
        };
        let bytes = lottery.pack();
        assert_eq!(bytes.len(), Lottery::SIZE);
        assert_eq!(Lottery::unpack(&bytes).unwrap(), lottery);
    }

    #[test]
    fn test_lottery_entry_round_trip() {
        let entry = LotteryEntry {
            lottery: Pubkey::new_from_array([11; 32]),
            owner: Pubkey::new_from_array([12; 32]),
            tickets: 10,
            entry_slot: 259_999_000,
            bump: 253,
        };
        let bytes = entry.pack();
        assert_eq!(bytes.len(), LotteryEntry::SIZE);
        assert_eq!(LotteryEntry::unpack(&bytes).unwrap(), entry);
    }

    #[test]
    fn test_registry_round_trip() {
        let registry = Registry {
            authority: Pubkey::new_from_array([1; 32]),
            bump: 252,
            pools: vec![
                Pubkey::new_from_array([2; 32]),
                Pubkey::new_from_array([3; 32]),
                Pubkey::new_from_array([4; 32]),
            ],
        };
        let bytes = registry.pack();
        assert_eq!(bytes.len(), Registry::HEADER_SIZE + 3 * 32);
        assert_eq!(Registry::unpack(&bytes).unwrap(), registry);
    }

    #[test]
    fn test_registry_truncated_tail() {
        let registry = Registry {
            authority: Pubkey::new_from_array([1; 32]),
            bump: 252,
            pools: vec![Pubkey::new_from_array([2; 32]); 4],
        };
        let mut bytes = registry.pack();
        bytes.truncate(bytes.len() - 1);
        assert_eq!(Registry::unpack(&bytes), Err(CodecError::InvalidFormat));
    }

    #[test]
    fn test_error_ladder() {
        assert_eq!(Farm::unpack(b"FARM"), Err(CodecError::InsufficientData));
        assert_eq!(
            Farm::unpack(&[0u8; 184]),
            Err(CodecError::InvalidDiscriminator)
        );
        let mut short = Farm::default().pack();
        short.truncate(100);
        assert_eq!(Farm::unpack(&short), Err(CodecError::InvalidFormat));
    }
}
