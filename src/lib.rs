//! Typed decoder for Homebrew's `brew info --json` output.
//!
//! The whole crate is one transformation: a byte buffer holding a JSON array of
//! package-info objects goes in, a `Vec<Package>` comes out (or a
//! [`DecodeError`]). Container fields are never absent after decoding: a
//! missing or `null` list is an empty `Vec`, a missing or `null` map is an
//! empty `BTreeMap`, so callers can iterate without checking for presence.
//!
//! # Examples
//!
//! ```
//! let json = br#"[{"name": "git", "full_name": "git", "dependencies": null}]"#;
//! let packages = brewinfo::decode(json)?;
//!
//! assert_eq!(packages.len(), 1);
//! assert_eq!(packages[0].name, "git");
//! assert!(packages[0].dependencies.is_empty());
//! # Ok::<(), brewinfo::DecodeError>(())
//! ```

pub mod decode;
pub mod error;
pub mod package;
mod serde_helpers;

pub use decode::{Decoder, decode, decode_reader};
pub use error::{DecodeError, Result};
pub use package::{
    Bottle, BuildOption, File, InstalledVersion, Package, Requirement, RuntimeDependency,
    Versions,
};
