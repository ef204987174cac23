use crate::{Error, Frame, MechanicData, Snapshot, TimelineIndex};
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Frame range and parallelism of an export.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExportOptions {
    pub start: Frame,
    /// Exclusive.
    pub end: Frame,
    pub workers: usize,
}

impl ExportOptions {
    /// `start..end` on as many workers as the machine reports.
    pub fn new(start: Frame, end: Frame) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { start, end, workers }
    }

    /// The whole mechanic, from frame 0 through its last event (or `duration_frames` if longer).
    pub fn whole(mechanic: &MechanicData) -> Self {
        let last = mechanic.duration_frames.max(mechanic.last_event_frame());
        Self::new(0, last.saturating_add(1))
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.start >= self.end {
            return Err(Error::InvalidFrameRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.workers == 0 {
            return Err(Error::InvalidWorkerCount {
                workers: self.workers,
            });
        }
        Ok(())
    }

    /// Contiguous, non-empty batches covering the range, at most one per worker.
    pub(crate) fn batches(&self) -> Vec<Range<Frame>> {
        let total = self.end - self.start;
        let workers = u32::try_from(self.workers).unwrap_or(u32::MAX).min(total);
        let size = total.div_ceil(workers.max(1));

        let mut out = Vec::with_capacity(workers as usize);
        let mut start = self.start;
        while start < self.end {
            let end = start.saturating_add(size).min(self.end);
            out.push(start..end);
            start = end;
        }
        out
    }
}

/// Resolves every frame of `options` in parallel and returns the snapshots in frame order.
///
/// The timeline is indexed once and shared read-only by all workers; each worker resolves one
/// contiguous batch. Setting `cancel` makes workers stop between frames, and the partial output is
/// discarded with [`Error::ExportCancelled`].
pub fn export_frames(
    mechanic: &MechanicData,
    options: ExportOptions,
    cancel: &AtomicBool,
) -> Result<Vec<Snapshot>, Error> {
    options.validate()?;

    let index = TimelineIndex::new(mechanic);
    let total = options.frame_count();
    let batches = options.batches();
    let completed = AtomicUsize::new(0);

    log::info!(
        "exporting frames {}..{} of '{}' on {} workers",
        options.start,
        options.end,
        mechanic.name,
        batches.len(),
    );

    let results: Vec<Option<Vec<Snapshot>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = batches
            .into_iter()
            .map(|batch| {
                let index = &index;
                let completed = &completed;
                scope.spawn(move || {
                    let mut out = Vec::with_capacity(batch.len());
                    for frame in batch {
                        if cancel.load(Ordering::Relaxed) {
                            return None;
                        }
                        out.push(index.resolve(frame));
                        completed.fetch_add(1, Ordering::Relaxed);
                    }
                    Some(out)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(batch) => batch,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let completed = completed.into_inner();
    if results.iter().any(Option::is_none) {
        log::info!("export cancelled after {completed}/{total} frames");
        return Err(Error::ExportCancelled { completed, total });
    }

    let mut snapshots = Vec::with_capacity(total);
    for batch in results.into_iter().flatten() {
        snapshots.extend(batch);
    }
    log::info!("exported {} frames", snapshots.len());
    Ok(snapshots)
}
