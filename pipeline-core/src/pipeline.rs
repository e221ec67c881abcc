//! The pipeline assembler: builds, starts, and dismantles the chain.

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::factory::Registry;
use crate::stage::StageHandle;

/// The assembled chain: N stage workers and N+1 buffers wired
/// `buffer[i]` → `stage[i]` → `buffer[i+1]`.
///
/// Owns every buffer and stage handle. Buffers are destroyed (i.e.
/// their last `Arc` reference is dropped) once every thread that
/// references them — the stage workers, plus whatever reader/writer
/// the caller attached to [`Pipeline::input`]/[`Pipeline::output`] —
/// has been joined; `Pipeline` itself never hands out a `Buffer`
/// reference that could outlive a join.
pub struct Pipeline {
    buffers: Vec<Arc<Buffer>>,
    stages: Vec<StageHandle>,
}

impl Pipeline {
    /// Builds and starts a pipeline of `names.len()` stages, each
    /// resolved against `registry`, connected by buffers of capacity
    /// `capacity`.
    ///
    /// On any failure (an unrecognized stage name, or a factory
    /// reporting its own construction failure) every buffer already
    /// allocated is closed, every stage already started is joined, and
    /// everything is released before the error is returned.
    pub fn build(names: &[String], registry: &Registry, capacity: usize) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::NoStages);
        }

        let buffers: Vec<Arc<Buffer>> = (0..=names.len())
            .map(|_| Arc::new(Buffer::new(capacity)))
            .collect();
        let mut stages = Vec::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            let factory = match registry.lookup(name) {
                Some(factory) => factory,
                None => {
                    rollback(&buffers, stages);
                    return Err(Error::UnknownStage(name.clone()));
                }
            };

            let input = Arc::clone(&buffers[index]);
            let output = Arc::clone(&buffers[index + 1]);

            match factory(input, output, "") {
                Ok(handle) => stages.push(handle),
                Err(cause) => {
                    rollback(&buffers, stages);
                    return Err(Error::StageConstruction {
                        index,
                        name: name.clone(),
                        cause,
                    });
                }
            }
        }

        Ok(Pipeline { buffers, stages })
    }

    /// The chain's entry buffer (buffer₀), for an external reader to
    /// push into and eventually close.
    pub fn input(&self) -> Arc<Buffer> {
        Arc::clone(&self.buffers[0])
    }

    /// The chain's exit buffer (bufferₙ), for an external writer to
    /// pop from until `End`.
    pub fn output(&self) -> Arc<Buffer> {
        Arc::clone(self.buffers.last().expect("at least one buffer"))
    }

    /// The names of the running stages, in chain order — used for the
    /// one-line-per-stage startup diagnostic.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name())
    }

    /// A snapshot of total items dropped by every stage's transform so
    /// far. While any stage is still running this may under-count; the
    /// authoritative total is [`Pipeline::join`]'s return value.
    pub fn dropped_count(&self) -> u64 {
        self.stages.iter().map(|s| s.dropped_count()).sum()
    }

    /// Joins every stage worker, in chain order, then drops every
    /// buffer, returning the total number of items dropped by every
    /// stage's transform. The caller is responsible for having already
    /// joined (or arranged for the termination of) whatever
    /// reader/writer it attached to [`Pipeline::input`]/[`Pipeline::output`];
    /// the usual order is reader, then stages (this call), then writer.
    pub fn join(self) -> u64 {
        let total_dropped = self.stages.into_iter().map(|stage| stage.join()).sum();
        // `self.buffers` drops here, releasing the assembler's last
        // references to each buffer.
        total_dropped
    }
}

fn rollback(buffers: &[Arc<Buffer>], stages: Vec<StageHandle>) {
    for buffer in buffers {
        buffer.close();
    }
    for stage in stages {
        stage.join();
    }
}
