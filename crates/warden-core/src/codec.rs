//! The permission token codec.
//!
//! A permission set is an unsigned arbitrary-precision integer: bit `k`
//! set means rule `k + 1` is granted. The codec renders that integer as a
//! delimited string of fixed-width chunks and runs the grant/revoke/verify
//! algebra directly on the decoded value.
//!
//! The codec is stateless with respect to tokens: every operation takes a
//! token in and returns a fresh one. Registry access is passed in per call,
//! so a single call always sees one consistent registry snapshot.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::CodecConfig;
use crate::registry::RuleRegistry;
use crate::types::RuleId;

/// Separator between chunks. Reserved: it never appears in the digit
/// alphabet of any supported base.
pub const CHUNK_DELIMITER: char = '-';

/// Encodes, decodes, and manipulates permission tokens.
#[derive(Debug, Clone)]
pub struct PermissionCodec {
    config: CodecConfig,
}

impl PermissionCodec {
    /// Create a codec over a validated configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration in force.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a token into the permission bit-vector.
    ///
    /// An empty token is zero. Otherwise chunks are folded most-significant
    /// first: `acc = (acc << chunk_width) | chunk`. Parsing is best-effort
    /// and never fails: a chunk with digits outside the base decodes as
    /// zero, and a hand-crafted token with stray delimiters degrades to a
    /// well-typed wrong value rather than an error.
    ///
    /// The token carries no record of the configuration that produced it.
    /// Decoding under a different `chunk_width`/`base`/`digit_width` than
    /// the encoder used silently yields a different integer.
    pub fn decode(&self, token: &str) -> BigUint {
        if token.is_empty() {
            return BigUint::zero();
        }

        let mut value = BigUint::zero();
        for chunk in token.split(CHUNK_DELIMITER) {
            value <<= self.config.chunk_width;
            value |= self.parse_chunk(chunk);
        }
        value
    }

    /// Encode a permission bit-vector as a token.
    ///
    /// Zero encodes as the canonical single chunk of `pad_char` repeated
    /// `digit_width` times, with no delimiter. Anything else is split into
    /// `chunk_width`-bit chunks, each rendered in `base` (digits above 9
    /// are uppercase; decoding accepts either case) and left-padded to
    /// `digit_width`, most-significant chunk first.
    pub fn encode(&self, value: &BigUint) -> String {
        if value.is_zero() {
            return self.pad_char_string();
        }

        let mask = (BigUint::one() << self.config.chunk_width) - 1u32;
        let mut remaining = value.clone();
        let mut chunks = Vec::new();
        while !remaining.is_zero() {
            chunks.push(self.render_chunk(&(&remaining & &mask)));
            remaining >>= self.config.chunk_width;
        }
        chunks.reverse();

        let mut token = String::with_capacity(chunks.len() * (self.config.digit_width + 1));
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                token.push(CHUNK_DELIMITER);
            }
            token.push_str(chunk);
        }
        token
    }

    /// Whether the token grants the given rule.
    ///
    /// Bits beyond the token's width read as absent, and id 0 owns no bit,
    /// so both answer `false` rather than failing.
    pub fn verify(&self, token: &str, rule_id: RuleId) -> bool {
        match rule_id.bit_index() {
            Some(bit) => self.decode(token).bit(bit),
            None => false,
        }
    }

    /// Set the bits for every eligible candidate id and return the new token.
    ///
    /// A candidate is eligible iff it is at most the registry's max id and
    /// currently registered. Ineligible candidates are skipped without
    /// error and without affecting the rest of the call.
    pub fn grant(&self, token: &str, rule_ids: &[RuleId], registry: &RuleRegistry) -> String {
        let mut value = self.decode(token);
        for &id in rule_ids {
            if let Some(bit) = self.eligible_bit(id, registry) {
                value.set_bit(bit, true);
            }
        }
        self.encode(&value)
    }

    /// Clear the bits for every eligible candidate id and return the new token.
    ///
    /// Clearing the last set bit yields the canonical zero token; revoke
    /// never leaves residual empty high-order chunks behind.
    pub fn revoke(&self, token: &str, rule_ids: &[RuleId], registry: &RuleRegistry) -> String {
        let mut value = self.decode(token);
        for &id in rule_ids {
            if let Some(bit) = self.eligible_bit(id, registry) {
                value.set_bit(bit, false);
            }
        }
        self.encode(&value)
    }

    /// Build a token from scratch: grant applied to the empty token.
    pub fn generate(&self, rule_ids: &[RuleId], registry: &RuleRegistry) -> String {
        self.grant("", rule_ids, registry)
    }

    /// The bit position for an eligible candidate, or `None` if the id is
    /// out of range or unregistered.
    fn eligible_bit(&self, id: RuleId, registry: &RuleRegistry) -> Option<u64> {
        let bit = match id.bit_index() {
            Some(bit) => bit,
            None => {
                tracing::debug!(rule_id = %id, "skipping rule id without a bit position");
                return None;
            }
        };
        if id > registry.max_id() || !registry.contains(id) {
            tracing::debug!(rule_id = %id, "skipping ineligible rule id");
            return None;
        }
        Some(bit)
    }

    fn parse_chunk(&self, chunk: &str) -> BigUint {
        BigUint::parse_bytes(chunk.as_bytes(), self.config.base).unwrap_or_else(BigUint::zero)
    }

    fn render_chunk(&self, chunk: &BigUint) -> String {
        let digits = chunk.to_str_radix(self.config.base).to_uppercase();
        if digits.len() >= self.config.digit_width {
            return digits;
        }

        let mut rendered = String::with_capacity(self.config.digit_width);
        for _ in digits.len()..self.config.digit_width {
            rendered.push(self.config.pad_char);
        }
        rendered.push_str(&digits);
        rendered
    }

    fn pad_char_string(&self) -> String {
        std::iter::repeat(self.config.pad_char)
            .take(self.config.digit_width)
            .collect()
    }
}

impl Default for PermissionCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
