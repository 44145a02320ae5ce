//! # Reference Resolution
//!
//! Best-effort extraction of the target identifier from a reference
//! value. References arrive in arbitrary shapes from adversarial or
//! partial documents; anything that is not a well-formed keyed reference
//! resolves to nothing rather than raising.

use serde_json::Value;

/// Extract the target ID a reference points at, if one can be read.
///
/// The canonical shape is an object with a non-empty `keys` array whose
/// **last** entry carries the target in its `value` field. Every other
/// shape — null, scalars, bare arrays, objects without `keys`, a
/// trailing key that is not an object or has no string `value` — yields
/// `None`. Malformed references are unresolvable, not invalid, at this
/// layer; shape errors are the schema pass's job.
pub fn reference_target(reference: &Value) -> Option<&str> {
    let keys = reference.get("keys")?.as_array()?;
    let last = keys.last()?;
    last.get("value")?.as_str()
}
