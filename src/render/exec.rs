use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::error::{EmocanvasError, EmocanvasResult};

/// Rows handed to one worker at a time; cancellation is polled at each band boundary.
pub(crate) const DEFAULT_BAND_ROWS: usize = 16;

/// Cooperative cancellation flag shared between the caller and a running render.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Workers stop at their next band boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> EmocanvasResult<()> {
        if self.is_cancelled() {
            return Err(EmocanvasError::Cancelled);
        }
        Ok(())
    }
}

/// Where and how pixel passes run for one render call.
pub(crate) struct RenderExec<'a> {
    pool: Option<&'a rayon::ThreadPool>,
    cancel: CancelToken,
    band_rows: usize,
}

impl<'a> RenderExec<'a> {
    pub(crate) fn new(pool: Option<&'a rayon::ThreadPool>, cancel: CancelToken) -> Self {
        Self {
            pool,
            cancel,
            band_rows: DEFAULT_BAND_ROWS,
        }
    }

    pub(crate) fn check(&self) -> EmocanvasResult<()> {
        self.cancel.check()
    }

    fn install<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    /// Run `f(y, row)` over every row of a tightly packed buffer, in parallel bands.
    ///
    /// Each band owns a disjoint slice of `buf`, so no locking is involved.
    pub(crate) fn for_each_row<F>(&self, buf: &mut [u8], stride: usize, f: F) -> EmocanvasResult<()>
    where
        F: Fn(u32, &mut [u8]) + Sync,
    {
        if stride == 0 || buf.is_empty() {
            return Ok(());
        }
        let band = self.band_rows.max(1);
        let cancel = &self.cancel;
        self.install(|| {
            buf.par_chunks_mut(stride * band)
                .enumerate()
                .try_for_each(|(band_idx, chunk)| -> EmocanvasResult<()> {
                    cancel.check()?;
                    let y0 = band_idx * band;
                    for (dy, row) in chunk.chunks_exact_mut(stride).enumerate() {
                        f((y0 + dy) as u32, row);
                    }
                    Ok(())
                })
        })
    }

    /// Parallel sum of `f(row)` over rows; used for whole-canvas statistics.
    pub(crate) fn sum_rows<F>(&self, buf: &[u8], stride: usize, f: F) -> EmocanvasResult<f64>
    where
        F: Fn(&[u8]) -> f64 + Sync,
    {
        if stride == 0 || buf.is_empty() {
            return Ok(0.0);
        }
        self.check()?;
        Ok(self.install(|| buf.par_chunks(stride).map(&f).sum::<f64>()))
    }
}

/// Dedicated pool for renders that pin a worker count.
pub(crate) fn build_thread_pool(threads: Option<usize>) -> EmocanvasResult<Option<rayon::ThreadPool>> {
    let Some(n) = threads else {
        return Ok(None);
    };
    if n == 0 {
        return Err(EmocanvasError::invalid_input(
            "render option 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build()
        .map(Some)
        .map_err(|e| EmocanvasError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/exec.rs"]
mod tests;
