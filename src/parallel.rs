use rayon::prelude::*;

/// Dispatch a per-realization closure over `0..n_realizations`, optionally in
/// parallel.
///
/// Results come back in realization order, so any reduction over them is
/// independent of how rayon scheduled the work.
///
/// When `sequential` is true, realizations run on the current thread (no
/// rayon overhead, and handy when the caller already parallelizes at an
/// outer level).
pub fn par_over_realizations<T: Send>(
    n_realizations: usize,
    sequential: bool,
    body: impl Fn(usize) -> T + Send + Sync,
) -> Vec<T> {
    if sequential {
        (0..n_realizations).map(&body).collect()
    } else {
        (0..n_realizations).into_par_iter().map(&body).collect()
    }
}
