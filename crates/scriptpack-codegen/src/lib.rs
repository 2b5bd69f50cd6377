//! JavaScript text generation for scriptpack bundles.
//!
//! Everything here is pure string rendering: no file access and no parsing of
//! the bundled scripts. The output layout is fixed so that bundles stay
//! byte-for-byte stable between runs.

pub mod banner;
pub mod js;
pub mod shim;
pub mod wrapper;
