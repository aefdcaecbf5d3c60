//! Integer StableSwap engine.
//!
//! Mirrors the on-chain solver bit-for-bit: all arithmetic is u128 with
//! truncating division, the iteration order and parenthesization follow
//! the program exactly, and convergence is `|Δ| ≤ 1` within a 255-round
//! cap. Note that `d_p = ((D·D)/(x·2))·D/(y·2)` is not algebraically
//! `D³/(4·x·y)` under integer division; the grouping is load-bearing.
//!
//! The only floating point lives in [`calc_spot_price`] and
//! [`calc_price_impact`], which are display helpers and must stay out of
//! anything that has to agree with the chain.

use crate::constants::{BPS_DENOMINATOR, MAX_NEWTON_ITERATIONS};
use crate::error::MathError;
use crate::state::{Candle, TwapSample};

/// Scale factor of a virtual price.
const VIRTUAL_PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

#[inline]
fn mul(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow)
}

#[inline]
fn add(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

/// Floor of the square root, by Newton iteration over integers.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    // ceil(n / 2), written to survive n = u128::MAX
    let mut y = (x >> 1) + (x & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Two-token StableSwap invariant `D`.
///
/// Returns `Ok(0)` when either balance is zero (an empty pool has no
/// invariant, not an error).
pub fn calc_d(bal_0: u64, bal_1: u64, amp: u64) -> Result<u128, MathError> {
    if bal_0 == 0 || bal_1 == 0 {
        return Ok(0);
    }
    let x = bal_0 as u128;
    let y = bal_1 as u128;
    let s = x + y;
    let ann = (amp as u128) * 4;
    if ann == 0 {
        return Err(MathError::ZeroAmp);
    }

    let mut d = s;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let d_p = mul(mul(d, d)? / (x * 2), d)? / (y * 2);
        let num = mul(add(mul(ann, s)?, mul(d_p, 2)?)?, d)?;
        let denom = add(mul(ann - 1, d)?, mul(d_p, 3)?)?;
        if denom == 0 {
            return Err(MathError::ZeroDenom);
        }
        let d_new = num / denom;
        if d_new.abs_diff(d) <= 1 {
            return Ok(d_new);
        }
        d = d_new;
    }
    Err(MathError::FailedToConverge)
}

/// New output-side balance `Y` for an input-side balance of `new_bal_in`,
/// holding the invariant `d` constant.
pub fn calc_y(new_bal_in: u128, d: u128, amp: u64) -> Result<u128, MathError> {
    if new_bal_in == 0 {
        return Err(MathError::ZeroInput);
    }
    let ann = (amp as u128) * 4;
    if ann == 0 {
        return Err(MathError::ZeroAmp);
    }

    let c = mul(mul(d, d)? / mul(new_bal_in, 2)?, d)? / (ann * 2);
    let b = add(new_bal_in, d / ann)?;

    let mut y = d;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let denom = add(mul(y, 2)?, b)?
            .checked_sub(d)
            .filter(|&v| v != 0)
            .ok_or(MathError::ZeroDenom)?;
        let y_new = add(mul(y, y)?, c)? / denom;
        if y_new.abs_diff(y) <= 1 {
            return Ok(y_new);
        }
        y = y_new;
    }
    Err(MathError::FailedToConverge)
}

/// Simulate an exact-in swap and return the post-fee output amount.
pub fn simulate_swap(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> Result<u64, MathError> {
    if amount_in == 0 || bal_in == 0 || bal_out == 0 {
        return Err(MathError::ZeroInput);
    }
    let d = calc_d(bal_in, bal_out, amp)?;
    let y = calc_y(bal_in as u128 + amount_in as u128, d, amp)?;
    let gross = (bal_out as u128).saturating_sub(y);
    let fee = mul(gross, fee_bps as u128)? / BPS_DENOMINATOR as u128;
    Ok(gross.saturating_sub(fee) as u64)
}

/// Full quote for an exact-in swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    /// Post-fee output amount.
    pub amount_out: u64,
    /// Fee withheld from the gross output.
    pub fee: u64,
    /// Deviation from the naive spot quote, display-only.
    pub price_impact: f64,
}

/// Simulate a swap and report output, fee, and price impact together.
pub fn swap_quote(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> Result<SwapQuote, MathError> {
    if amount_in == 0 || bal_in == 0 || bal_out == 0 {
        return Err(MathError::ZeroInput);
    }
    let d = calc_d(bal_in, bal_out, amp)?;
    let y = calc_y(bal_in as u128 + amount_in as u128, d, amp)?;
    let gross = (bal_out as u128).saturating_sub(y);
    let fee = mul(gross, fee_bps as u128)? / BPS_DENOMINATOR as u128;
    let amount_out = gross.saturating_sub(fee) as u64;

    Ok(SwapQuote {
        amount_out,
        fee: fee as u64,
        price_impact: calc_price_impact(bal_in, bal_out, amount_in, amount_out),
    })
}

/// LP tokens minted for a deposit.
///
/// The first deposit mints the geometric mean of the amounts; later
/// deposits mint pro rata to invariant growth.
pub fn calc_lp_tokens(
    bal_0: u64,
    bal_1: u64,
    amount_0: u64,
    amount_1: u64,
    lp_supply: u64,
    amp: u64,
) -> Result<u64, MathError> {
    if lp_supply == 0 {
        let minted = isqrt(mul(amount_0 as u128, amount_1 as u128)?);
        return Ok(minted as u64);
    }

    let d_0 = calc_d(bal_0, bal_1, amp)?;
    if d_0 == 0 {
        return Err(MathError::ZeroInvariant);
    }
    let new_0 = bal_0.checked_add(amount_0).ok_or(MathError::Overflow)?;
    let new_1 = bal_1.checked_add(amount_1).ok_or(MathError::Overflow)?;
    let d_1 = calc_d(new_0, new_1, amp)?;

    let minted = mul(lp_supply as u128, d_1.saturating_sub(d_0))? / d_0;
    u64::try_from(minted).map_err(|_| MathError::Overflow)
}

/// Token amounts returned for burning `lp_amount` LP tokens.
pub fn calc_withdraw_amounts(
    bal_0: u64,
    bal_1: u64,
    lp_amount: u64,
    lp_supply: u64,
) -> Result<(u64, u64), MathError> {
    if lp_supply == 0 {
        return Err(MathError::ZeroSupply);
    }
    let supply = lp_supply as u128;
    let amount_0 = mul(bal_0 as u128, lp_amount as u128)? / supply;
    let amount_1 = mul(bal_1 as u128, lp_amount as u128)? / supply;
    Ok((
        u64::try_from(amount_0).map_err(|_| MathError::Overflow)?,
        u64::try_from(amount_1).map_err(|_| MathError::Overflow)?,
    ))
}

/// Effective amp at `now` for a pool ramping from `amp` toward
/// `target_amp` over `[ramp_start, ramp_stop]`.
///
/// Linear interpolation, rounded toward `amp`; a finished or degenerate
/// ramp reports the target.
pub fn get_current_amp(
    amp: u64,
    target_amp: u64,
    ramp_start: i64,
    ramp_stop: i64,
    now: i64,
) -> u64 {
    if ramp_stop == ramp_start || now >= ramp_stop {
        return target_amp;
    }
    if now <= ramp_start {
        return amp;
    }
    let elapsed = (now - ramp_start) as u128;
    let window = (ramp_stop - ramp_start) as u128;
    if target_amp >= amp {
        amp + ((target_amp - amp) as u128 * elapsed / window) as u64
    } else {
        amp - ((amp - target_amp) as u128 * elapsed / window) as u64
    }
}

/// N-token StableSwap invariant, `2 ≤ n ≤ 8`.
pub fn calc_d_n(balances: &[u64], amp: u64) -> Result<u128, MathError> {
    if balances.len() < 2 {
        return Err(MathError::ZeroInput);
    }
    if balances.iter().any(|&b| b == 0) {
        return Ok(0);
    }
    let n = balances.len() as u128;
    let s: u128 = balances.iter().map(|&b| b as u128).sum();
    let n_pow_n = n
        .checked_pow(balances.len() as u32)
        .ok_or(MathError::Overflow)?;
    let ann = mul(amp as u128, n_pow_n)?;
    if ann == 0 {
        return Err(MathError::ZeroAmp);
    }

    let mut d = s;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let mut d_p = d;
        for &bal in balances {
            d_p = mul(d_p, d)? / (bal as u128 * n);
        }
        let num = mul(add(mul(ann, s)?, mul(d_p, n)?)?, d)?;
        let denom = add(mul(ann - 1, d)?, mul(n + 1, d_p)?)?;
        if denom == 0 {
            return Err(MathError::ZeroDenom);
        }
        let d_new = num / denom;
        if d_new.abs_diff(d) <= 1 {
            return Ok(d_new);
        }
        d = d_new;
    }
    Err(MathError::FailedToConverge)
}

/// New balance of slot `to`, holding the N-token invariant `d` constant
/// against the already-updated `balances`.
pub fn calc_y_n(balances: &[u128], to: usize, d: u128, amp: u64) -> Result<u128, MathError> {
    let len = balances.len();
    if to >= len {
        return Err(MathError::InvalidIndex);
    }
    let n = len as u128;
    let n_pow_n = n.checked_pow(len as u32).ok_or(MathError::Overflow)?;
    let ann = mul(amp as u128, n_pow_n)?;
    if ann == 0 {
        return Err(MathError::ZeroAmp);
    }

    let mut c = d;
    let mut s: u128 = 0;
    for (i, &bal) in balances.iter().enumerate() {
        if i == to {
            continue;
        }
        if bal == 0 {
            return Err(MathError::ZeroInput);
        }
        s = add(s, bal)?;
        c = mul(c, d)? / mul(bal, n)?;
    }
    let c = mul(c, d)? / mul(ann, n)?;
    let b = add(s, d / ann)?;

    let mut y = d;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let denom = add(mul(y, 2)?, b)?
            .checked_sub(d)
            .filter(|&v| v != 0)
            .ok_or(MathError::ZeroDenom)?;
        let y_new = add(mul(y, y)?, c)? / denom;
        if y_new.abs_diff(y) <= 1 {
            return Ok(y_new);
        }
        y = y_new;
    }
    Err(MathError::FailedToConverge)
}

/// Simulate an exact-in swap between two slots of an N-token pool.
pub fn simulate_swap_n(
    balances: &[u64],
    from: usize,
    to: usize,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> Result<u64, MathError> {
    let len = balances.len();
    if from >= len || to >= len || from == to {
        return Err(MathError::InvalidIndex);
    }
    if amount_in == 0 || balances[from] == 0 || balances[to] == 0 {
        return Err(MathError::ZeroInput);
    }

    let d = calc_d_n(balances, amp)?;
    if d == 0 {
        return Err(MathError::ZeroInvariant);
    }

    let mut updated: Vec<u128> = balances.iter().map(|&b| b as u128).collect();
    updated[from] += amount_in as u128;
    let y = calc_y_n(&updated, to, d, amp)?;

    let gross = (balances[to] as u128).saturating_sub(y);
    let fee = mul(gross, fee_bps as u128)? / BPS_DENOMINATOR as u128;
    Ok(gross.saturating_sub(fee) as u64)
}

/// Invariant value per LP token, scaled by 10^18.
pub fn calc_virtual_price(d: u128, lp_supply: u64) -> Result<u128, MathError> {
    if lp_supply == 0 {
        return Err(MathError::ZeroSupply);
    }
    Ok(mul(d, VIRTUAL_PRICE_SCALE)? / lp_supply as u128)
}

/// Fold a candle window into a TWAP sample.
///
/// Candles with a zero open are treated as unwritten slots; confidence is
/// the filled share of the window in hundredths of a percent.
pub fn compute_twap(candles: &[Candle]) -> Result<TwapSample, MathError> {
    let mut sum: u64 = 0;
    let mut samples: u64 = 0;
    for candle in candles {
        if candle.open != 0 {
            sum += candle.close() as u64;
            samples += 1;
        }
    }
    if samples == 0 {
        return Err(MathError::ZeroInput);
    }
    Ok(TwapSample {
        price: (sum / samples) as u32,
        samples: samples as u16,
        confidence: (samples * 10_000 / candles.len() as u64) as u16,
    })
}

/// Naive spot price of the input token in output units. Display-only.
pub fn calc_spot_price(bal_in: u64, bal_out: u64) -> f64 {
    if bal_in == 0 {
        return 0.0;
    }
    bal_out as f64 / bal_in as f64
}

/// Deviation of `amount_out` from the naive spot quote. Display-only.
pub fn calc_price_impact(bal_in: u64, bal_out: u64, amount_in: u64, amount_out: u64) -> f64 {
    if bal_in == 0 {
        return 0.0;
    }
    let expected = (amount_in as u128) * (bal_out as u128) / (bal_in as u128);
    if expected == 0 {
        return 0.0;
    }
    (expected as f64 - amount_out as f64) / expected as f64
}
