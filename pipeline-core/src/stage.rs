//! One worker thread per stage: pop, transform, push, repeat.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::buffer::{Buffer, PopOutcome, PushOutcome};
use crate::item::Item;

/// A stage's transform. Returns `None` to signal a transform failure
/// for that one item (the item is dropped; the stage keeps running).
///
/// `FnMut` because a transform may hold private scratch state across
/// calls; `Send` because it runs on its own worker thread.
pub type Transform = Box<dyn FnMut(Item) -> Option<Item> + Send>;

/// Wraps an infallible `fn(&[u8]) -> Vec<u8>` transform — what every
/// one of the six reserved transforms in `pipeline-stages` is — as a
/// [`Transform`] that never reports failure.
pub fn always_succeeds<F>(mut f: F) -> Transform
where
    F: FnMut(&[u8]) -> Vec<u8> + Send + 'static,
{
    Box::new(move |item: Item| Some(f(&item)))
}

/// A running stage worker. Dropping the handle does not stop the
/// worker; call [`StageHandle::join`] (or close its input buffer from
/// outside) to bring it down.
pub struct StageHandle {
    name: String,
    dropped: Arc<AtomicU64>,
    thread: JoinHandle<()>,
}

impl StageHandle {
    /// The stage's name, as announced in startup diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many items this stage's transform has dropped (returned
    /// `None` for) so far. While the stage is still running this is
    /// only a snapshot; the authoritative count is the value
    /// [`StageHandle::join`] returns.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Blocks until the worker thread has terminated, then returns the
    /// final count of items its transform dropped.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread itself panicked. A panic inside a
    /// stage is not a recoverable condition this crate gives a
    /// contract for.
    pub fn join(self) -> u64 {
        self.thread.join().expect("stage worker panicked");
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Spawns a worker thread that repeatedly pops from `input`, applies
/// `transform`, and pushes the result to `output`.
///
/// - on input `End`, closes `output` and exits (the shutdown-propagation
///   rule that makes closure walk down the chain).
/// - on a transform returning `None`, drops that one item and continues
///   (not fatal to the stage).
/// - if `output.push` reports `Closed`, the stage has nothing more it
///   can do with that item; it releases the item and closes its own
///   input, signaling further upstream, before exiting (spec.md §4.3's
///   inversion for a downstream consumer that died early).
///
/// # Errors
///
/// Returns `Err` if the underlying OS thread could not be spawned. This
/// is the "thread spawn failed" case spec.md §7 treats as fatal to the
/// assembler, so the caller (typically [`crate::pipeline::Pipeline::build`])
/// can run its rollback path instead of this unwinding through a panic.
pub fn spawn_stage(
    name: impl Into<String>,
    input: Arc<Buffer>,
    output: Arc<Buffer>,
    mut transform: Transform,
) -> Result<StageHandle, String> {
    let name = name.into();
    let dropped = Arc::new(AtomicU64::new(0));
    let dropped_for_thread = Arc::clone(&dropped);

    let thread = thread::Builder::new()
        .name(name.clone())
        .spawn(move || loop {
            match input.pop() {
                PopOutcome::Ok(item) => match transform(item) {
                    Some(result) => {
                        if let PushOutcome::Closed(_dropped_on_exit) = output.push(result) {
                            // Downstream consumer is gone. Release the
                            // item, close our own input to signal
                            // further upstream, and exit.
                            input.close();
                            break;
                        }
                    }
                    None => {
                        dropped_for_thread.fetch_add(1, Ordering::Relaxed);
                    }
                },
                PopOutcome::End => {
                    output.close();
                    break;
                }
            }
        })
        .map_err(|e| format!("failed to spawn stage worker thread: {e}"))?;

    Ok(StageHandle {
        name,
        dropped,
        thread,
    })
}
