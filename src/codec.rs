//! Shared tagged-union dispatch.
//!
//! Every polymorphic value in the schema travels as a two-field envelope:
//!
//! ```json
//! { "type": "<DiscriminatorToken>", "<payloadKey>": { ... } }
//! ```
//!
//! The payload key varies by union family (`node` for tree nodes,
//! `predicate` for predicates, `settings` for transition effects, `value`
//! for dimension values). Decoding is discriminator-first: the `type` token
//! is read, looked up in the family's closed table, and exactly one payload
//! branch is decoded. A payload that fails to decode is an error — never a
//! signal to retry another branch.
//!
//! The per-family tables live in [`crate::tree`], [`crate::predicate`],
//! [`crate::values`] and [`crate::transition`], declared with the
//! `tagged_union!` macro. This module owns the mechanism those tables plug
//! into: the envelope reader, the depth guard, the error slot and the
//! entry points.
//!
//! # Error reporting
//!
//! serde erases structured errors to strings, so union impls record the
//! first codec-originated [`DecodeError`] in a thread-local slot as they
//! fail. The entry points ([`decode_str`], [`decode_slice`],
//! [`decode_value`]) drain that slot, which means the reported error is the
//! root cause — a child's `UnrecognizedDiscriminator` rather than the
//! ancestors' `PayloadMismatch` wrappers.

use std::cell::{Cell, RefCell};
use std::fmt;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;

/// Maximum number of nested tagged-union levels a single decode call will
/// follow before failing with [`DecodeError::RecursionLimitExceeded`].
///
/// The wire grammar places no bound on document depth; this limit is a
/// hardening addition, chosen to be far above any real layout document
/// (which rarely nests past a few dozen levels) while keeping worst-case
/// stack usage small. It matches the JSON parser's own nesting allowance:
/// decoding from text trips that parser limit first, and this bound covers
/// pre-built [`serde_json::Value`] trees, which the parser limit does not.
pub const MAX_DECODE_DEPTH: usize = 128;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static FIRST_ERROR: RefCell<Option<DecodeError>> = const { RefCell::new(None) };
}

// =============================================================================
// Entry points
// =============================================================================

/// Decode a schema value from a JSON string.
pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    reset();
    serde_json::from_str(json).map_err(classify)
}

/// Decode a schema value from JSON bytes.
pub fn decode_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T, DecodeError> {
    reset();
    serde_json::from_slice(json).map_err(classify)
}

/// Decode a schema value from a pre-built [`serde_json::Value`].
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    reset();
    serde_json::from_value(value).map_err(classify)
}

/// Encode a schema value to a JSON string.
///
/// Encoding has no codec-level failure modes: every in-memory value carries
/// its discriminator by construction. Non-finite floats serialize as `null`
/// (and are rejected on re-decode); any remaining serializer failure is
/// passed through.
pub fn encode_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Encode a schema value to a [`serde_json::Value`].
pub fn encode_value<T: Serialize>(value: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

fn reset() {
    DEPTH.with(|d| d.set(0));
    FIRST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Turn a serde_json failure into the recorded root cause, if there is one.
fn classify(err: serde_json::Error) -> DecodeError {
    if let Some(recorded) = FIRST_ERROR.with(|slot| slot.borrow_mut().take()) {
        return recorded;
    }
    // The text parser enforces its own nesting limit before the union depth
    // guard can see the document.
    if err.is_syntax() && err.to_string().contains("recursion limit exceeded") {
        return DecodeError::RecursionLimitExceeded { family: "document" };
    }
    DecodeError::Json(err)
}

// =============================================================================
// Error slot
// =============================================================================

/// Record `err` (first one wins) and return it as a serde error.
pub(crate) fn fail<E: de::Error>(err: DecodeError) -> E {
    let msg = err.to_string();
    FIRST_ERROR.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    });
    E::custom(msg)
}

pub(crate) fn unrecognized<E: de::Error>(family: &'static str, token: String) -> E {
    fail(DecodeError::UnrecognizedDiscriminator { family, token })
}

// =============================================================================
// Depth guard
// =============================================================================

/// RAII guard counting nested union decodes on the current thread.
///
/// Held across the payload decode so the count tracks tree depth, not
/// envelope nesting.
pub(crate) struct DepthGuard(());

impl DepthGuard {
    pub(crate) fn enter<E: de::Error>(family: &'static str) -> Result<Self, E> {
        let depth = DEPTH.with(|d| {
            let depth = d.get() + 1;
            d.set(depth);
            depth
        });
        if depth > MAX_DECODE_DEPTH {
            DEPTH.with(|d| d.set(d.get() - 1));
            return Err(fail(DecodeError::RecursionLimitExceeded { family }));
        }
        Ok(Self(()))
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

// =============================================================================
// Envelope reader
// =============================================================================

/// A tagged envelope with its discriminator extracted and the remaining
/// fields buffered.
pub(crate) struct Envelope {
    pub(crate) tag: String,
    pub(crate) fields: Vec<(String, Value)>,
}

/// Read `{ "type": ..., ... }` from `deserializer`.
///
/// An absent or non-string `type` is [`DecodeError::MissingDiscriminator`]
/// (the wire format never distinguishes the two). Unknown envelope keys are
/// buffered and ignored by the payload lookup.
pub(crate) fn read_envelope<'de, D>(
    family: &'static str,
    deserializer: D,
) -> Result<Envelope, D::Error>
where
    D: Deserializer<'de>,
{
    struct EnvelopeVisitor {
        family: &'static str,
    }

    impl<'de> Visitor<'de> for EnvelopeVisitor {
        type Value = Envelope;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a tagged {} object", self.family)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Envelope, A::Error> {
            let mut tag: Option<String> = None;
            let mut fields: Vec<(String, Value)> = Vec::with_capacity(1);
            while let Some(key) = map.next_key::<String>()? {
                if key == "type" {
                    match map.next_value::<Value>()? {
                        Value::String(token) => tag = Some(token),
                        _ => {
                            return Err(fail(DecodeError::MissingDiscriminator {
                                family: self.family,
                            }));
                        }
                    }
                } else {
                    fields.push((key, map.next_value()?));
                }
            }
            match tag {
                Some(tag) => Ok(Envelope { tag, fields }),
                None => Err(fail(DecodeError::MissingDiscriminator { family: self.family })),
            }
        }
    }

    deserializer.deserialize_map(EnvelopeVisitor { family })
}

// =============================================================================
// Payload decode / encode
// =============================================================================

/// Decode the payload for an already-matched discriminator.
///
/// The discriminator alone determines the target type: an absent or
/// ill-shaped payload is a hard [`DecodeError::PayloadMismatch`], never a
/// reason to try another branch. A deeper union failure inside the payload
/// keeps its own recorded kind (first error wins).
pub(crate) fn decode_payload<T, E>(
    family: &'static str,
    token: &'static str,
    payload_key: &'static str,
    mut fields: Vec<(String, Value)>,
) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    let Some(position) = fields.iter().position(|(key, _)| key == payload_key) else {
        return Err(fail(DecodeError::payload(
            family,
            token,
            format!("missing `{payload_key}` payload"),
        )));
    };
    let (_, payload) = fields.swap_remove(position);
    serde_json::from_value(payload)
        .map_err(|err| fail(DecodeError::payload(family, token, err.to_string())))
}

/// Encode `{ "type": token, payload_key: payload }`.
pub(crate) fn serialize_tagged<S, T>(
    serializer: S,
    token: &'static str,
    payload_key: &'static str,
    payload: &T,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", token)?;
    map.serialize_entry(payload_key, payload)?;
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_guard_balances() {
        let a = DepthGuard::enter::<serde_json::Error>("A").unwrap();
        assert_eq!(DEPTH.with(Cell::get), 1);
        {
            let _b = DepthGuard::enter::<serde_json::Error>("B").unwrap();
            assert_eq!(DEPTH.with(Cell::get), 2);
        }
        assert_eq!(DEPTH.with(Cell::get), 1);
        drop(a);
        assert_eq!(DEPTH.with(Cell::get), 0);
    }

    #[test]
    fn test_first_error_wins() {
        reset();
        let _: serde_json::Error =
            fail(DecodeError::MissingDiscriminator { family: "First" });
        let _: serde_json::Error =
            fail(DecodeError::MissingDiscriminator { family: "Second" });
        let recorded = FIRST_ERROR.with(|slot| slot.borrow_mut().take()).unwrap();
        assert!(matches!(
            recorded,
            DecodeError::MissingDiscriminator { family: "First" }
        ));
    }

    #[test]
    fn test_plain_json_error_passes_through() {
        let err = decode_str::<crate::values::DimensionWidthValue>("{ not json").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
