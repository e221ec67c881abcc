//! The static stage-factory table for the six reserved transforms.

use std::sync::Arc;

use pipeline_core::{always_succeeds, spawn_stage, Buffer, Registry, StageFactory, StageHandle};

use crate::transforms;

macro_rules! factory_for {
    ($fn_name:ident, $transform:path) => {
        fn $fn_name(input: Arc<Buffer>, output: Arc<Buffer>, _config: &str) -> Result<StageHandle, String> {
            spawn_stage(
                stringify!($fn_name),
                input,
                output,
                always_succeeds($transform),
            )
        }
    };
}

factory_for!(upper, transforms::upper);
factory_for!(lower, transforms::lower);
factory_for!(reverse, transforms::reverse);
factory_for!(trim, transforms::trim);
factory_for!(prefix, transforms::prefix);
factory_for!(suffix, transforms::suffix);

static TABLE: &[(&str, StageFactory)] = &[
    ("upper", upper as StageFactory),
    ("lower", lower as StageFactory),
    ("reverse", reverse as StageFactory),
    ("trim", trim as StageFactory),
    ("prefix", prefix as StageFactory),
    ("suffix", suffix as StageFactory),
];

/// Builds the registry of the six reserved transforms, keyed by their
/// reserved names.
pub fn registry() -> Registry {
    Registry::new(TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_core::{Buffer, PopOutcome};

    #[test]
    fn every_reserved_name_resolves() {
        let registry = registry();
        for name in ["upper", "lower", "reverse", "trim", "prefix", "suffix"] {
            assert!(registry.lookup(name).is_some(), "missing factory for {name}");
        }
        assert!(registry.lookup("not-a-stage").is_none());
    }

    #[test]
    fn upper_factory_runs_end_to_end() {
        let registry = registry();
        let factory = registry.lookup("upper").unwrap();

        let input = Arc::new(Buffer::new(4));
        let output = Arc::new(Buffer::new(4));
        let handle = factory(Arc::clone(&input), Arc::clone(&output), "").unwrap();

        input.push(b"hello".to_vec());
        input.close();
        handle.join();

        assert_eq!(output.pop(), PopOutcome::Ok(b"HELLO".to_vec()));
        assert_eq!(output.pop(), PopOutcome::End);
    }
}
