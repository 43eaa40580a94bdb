//! Utilities for parallelism

/// Calls `op` on every `chunk_size`-long chunk of `data`.
///
/// The chunks are distributed over rayon's thread pool if and only if `parallel` is set to
/// `true` and the `parallel` feature is enabled. Returns once every chunk has been processed.
#[allow(unused_variables)] // when `parallel` feature is disabled, the variable is ignored
pub fn for_each_chunk_maybe_in_parallel<T, F>(
    parallel: bool,
    data: &mut [T],
    chunk_size: usize,
    op: F,
) where
    T: Send,
    F: Fn(&mut [T]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if parallel {
            data.par_chunks_exact_mut(chunk_size).for_each(op);
        } else {
            data.chunks_exact_mut(chunk_size).for_each(op);
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_exact_mut(chunk_size).for_each(op);
    }
}
