//! The abstract stage-factory seam.
//!
//! The core is deliberately ignorant of *how* a factory was obtained —
//! dynamic loading, a build manifest, or (as here) static registration
//! are all just different ways of producing a [`StageFactory`] value.

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::stage::StageHandle;

/// Given a stage's bound input and output buffers and an opaque
/// configuration string, builds and starts that stage's worker.
///
/// A plain `fn` pointer rather than a boxed closure: every factory this
/// crate ships is a free function with no captured state (the
/// configuration string is how a factory receives per-instance data
/// instead).
pub type StageFactory = fn(Arc<Buffer>, Arc<Buffer>, &str) -> Result<StageHandle, String>;

/// A static lookup table from stage name to [`StageFactory`].
///
/// A function table stands in for a dynamic module loader here: the
/// set of names is fixed at compile time, so a linear scan over a
/// small `&'static` slice is simpler than and just as fast as a
/// `HashMap` for the handful of entries this crate registers.
pub struct Registry {
    entries: &'static [(&'static str, StageFactory)],
}

impl Registry {
    /// Builds a registry over a static table of `(name, factory)`
    /// pairs.
    pub const fn new(entries: &'static [(&'static str, StageFactory)]) -> Self {
        Registry { entries }
    }

    /// Looks up the factory registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<StageFactory> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, factory)| *factory)
    }

    /// The registered stage names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{always_succeeds, spawn_stage};

    fn noop_factory(input: Arc<Buffer>, output: Arc<Buffer>, _config: &str) -> Result<StageHandle, String> {
        spawn_stage("noop", input, output, always_succeeds(|b| b.to_vec()))
    }

    #[test]
    fn lookup_finds_registered_names_and_rejects_others() {
        static TABLE: &[(&str, StageFactory)] = &[("noop", noop_factory as StageFactory)];
        let registry = Registry::new(TABLE);

        assert!(registry.lookup("noop").is_some());
        assert!(registry.lookup("missing").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["noop"]);
    }
}
