use std::collections::BTreeSet;

use crate::inventory::HostVars;

/// Source of hosts and their variables.
pub trait Inventory {
    /// Hosts whose resolved variables define `var`, in a stable order.
    fn hosts_containing(&self, var: &str) -> BTreeSet<String>;

    /// Resolved variables of `host`; empty when the host is unknown.
    ///
    /// Returns an owned copy, so callers may strip keys freely.
    fn host_vars(&self, host: &str) -> HostVars;
}
