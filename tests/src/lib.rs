//! Cross-crate checks: identity files on disk through to printed DUIDs.

mod derivation;
mod machine_id;
