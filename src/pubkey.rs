//! 32-byte public keys, base58 text codec, and program-derived-address
//! construction.
//!
//! A program-derived address is the SHA-256 of
//! `seed_0 ‖ … ‖ seed_k ‖ [bump] ‖ program_id ‖ "ProgramDerivedAddress"`
//! whose digest does not decode to a valid Ed25519 point. The point test
//! uses full curve decompression so that derivation agrees bit-for-bit
//! with the chain runtime.

use core::fmt;
use core::str::FromStr;

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

use crate::error::{DeriveError, PubkeyError};

/// Domain separator appended to every PDA hash input.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// A 32-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pubkey(pub(crate) [u8; 32]);

impl Pubkey {
    /// Wrap a raw 32-byte array.
    pub const fn new_from_array(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of the key.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Decode a base58 string, requiring exactly 32 bytes.
    pub fn from_base58(s: &str) -> Result<Self, PubkeyError> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|_| PubkeyError::InvalidBase58)?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| PubkeyError::InvalidLength)?;
        Ok(Self(bytes))
    }

    /// Encode the key as base58 text (Bitcoin alphabet).
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// True when the bytes decode to a valid Ed25519 point, i.e. the key
    /// could have a private key. Program-derived addresses must be
    /// off-curve.
    pub fn is_on_curve(&self) -> bool {
        CompressedEdwardsY(self.0).decompress().is_some()
    }

    /// Derive the address for `seeds` under `program_id` with a single
    /// bump. Fails with [`DeriveError::OnCurve`] when the hash output is
    /// a valid curve point.
    pub fn create_program_address(
        seeds: &[&[u8]],
        bump: u8,
        program_id: &Pubkey,
    ) -> Result<Pubkey, DeriveError> {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([bump]);
        hasher.update(program_id.0);
        hasher.update(PDA_MARKER);
        let digest: [u8; 32] = hasher.finalize().into();

        let candidate = Pubkey(digest);
        if candidate.is_on_curve() {
            return Err(DeriveError::OnCurve);
        }
        Ok(candidate)
    }

    /// Search bumps 255 down to 0 for the first off-curve address.
    pub fn find_program_address(
        seeds: &[&[u8]],
        program_id: &Pubkey,
    ) -> Result<(Pubkey, u8), DeriveError> {
        for bump in (0..=255u8).rev() {
            if let Ok(address) = Self::create_program_address(seeds, bump, program_id) {
                return Ok((address, bump));
            }
        }
        Err(DeriveError::NoValidBump)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Pubkey {
    type Err = PubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
