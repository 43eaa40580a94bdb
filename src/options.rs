/// Options to tune how the butterfly stages are executed.
///
/// All schedules produce bit-identical results; they differ only in memory access pattern and
/// parallelism. Calling the transform without specifying options uses [`Options::default`];
/// a [`crate::Planner`] picks reasonable settings for its size via [`Options::guess_options`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub schedule: StageSchedule,
}

impl Options {
    /// Below this many bits the table-addressed schedule is used.
    const GATHER_LOG_N: usize = 12;
    /// At and above this many bits each stage is distributed over threads.
    const THREADS_LOG_N: usize = 16;

    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        let n: usize = input_size.max(1).ilog2() as usize;
        options.schedule = if n < Self::GATHER_LOG_N {
            StageSchedule::Permuted
        } else if n < Self::THREADS_LOG_N {
            StageSchedule::Gathered
        } else {
            StageSchedule::MultiThreaded
        };
        options
    }

    pub fn with_schedule(mut self, schedule: StageSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

/// How the scratch buffer is addressed while the stages run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StageSchedule {
    #[default]
    /// Every butterfly reads and writes the scratch buffer through the permutation table.
    Permuted,
    /// Gather into the output buffer in bit-reversed order once, run the stages over contiguous
    /// blocks, then scatter the final state back into the scratch buffer.
    ///
    /// This is faster once the buffers no longer fit into the cache.
    Gathered,
    /// [`StageSchedule::Gathered`], with the blocks of each stage distributed over threads.
    /// Stages are still executed one after another.
    ///
    /// Requires the `parallel` feature; without it this behaves like `Gathered`.
    MultiThreaded,
}
