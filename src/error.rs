//! Error types for the SDK core.
//!
//! Every fallible entry point returns exactly one of these tagged kinds;
//! callers match on the variant to decide whether to recover or surface.

use thiserror::Error;

/// Account-data parsing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The blob is too short to even hold an 8-byte discriminator.
    #[error("account data too short to contain a discriminator")]
    InsufficientData,

    /// The leading 8 bytes do not match the expected account kind.
    #[error("account discriminator does not match the expected kind")]
    InvalidDiscriminator,

    /// The blob is shorter than the declared size for its kind.
    #[error("account data shorter than the declared account size")]
    InvalidFormat,
}

/// StableSwap math failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A required input amount or balance is zero.
    #[error("input amount or balance is zero")]
    ZeroInput,

    /// The amplification coefficient is zero.
    #[error("amplification coefficient is zero")]
    ZeroAmp,

    /// An iteration denominator collapsed to zero.
    #[error("iteration denominator is zero")]
    ZeroDenom,

    /// The pool invariant is zero where a nonzero value is required.
    #[error("pool invariant is zero")]
    ZeroInvariant,

    /// The LP token supply is zero.
    #[error("LP supply is zero")]
    ZeroSupply,

    /// The Newton iteration did not converge within the iteration cap.
    #[error("newton iteration failed to converge")]
    FailedToConverge,

    /// A token index is out of range or the two indices coincide.
    #[error("token index out of range")]
    InvalidIndex,

    /// An intermediate product cannot be represented in 128 bits.
    #[error("intermediate product exceeds 128 bits")]
    Overflow,
}

/// Program-derived-address failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// No bump in 255..=0 produced an off-curve hash output.
    #[error("no bump seed produced an off-curve address")]
    NoValidBump,

    /// The hash output for the given bump decodes to a valid curve point.
    #[error("derived address lies on the ed25519 curve")]
    OnCurve,
}

/// Public-key text codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PubkeyError {
    /// The decoded key is not exactly 32 bytes.
    #[error("decoded public key is not 32 bytes")]
    InvalidLength,

    /// The input contains characters outside the base58 alphabet.
    #[error("input is not valid base58")]
    InvalidBase58,
}
