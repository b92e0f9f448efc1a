//! AssetRegistry port - the host pipeline's precompile and digest-whitelist lists
//!
//! Both lists are append-only. Appending the same pattern twice is allowed.

use crate::domain::value_objects::AssetPattern;

pub trait AssetRegistry: Send + Sync {
    /// Append to the list of assets the host precompiles
    fn append_precompile(&self, pattern: AssetPattern);

    /// Append to the list of assets also served under undigested names
    fn append_digest_whitelist(&self, pattern: AssetPattern);
}
