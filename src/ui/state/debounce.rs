// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timer.
//!
//! Arming returns a [`Task`] that sleeps and then yields a message carrying
//! the arm's generation. Re-arming or cancelling aborts the running task, and
//! [`Debounce::fire`] rejects any message that still slips through with an
//! outdated generation.

use iced::task::Handle;
use iced::Task;
use std::fmt;
use std::time::Duration;

#[derive(Default)]
pub struct Debounce {
    generation: u64,
    pending: Option<u64>,
    handle: Option<Handle>,
}

impl fmt::Debug for Debounce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Debounce {
    /// Starts a new countdown, replacing any pending one.
    pub fn arm<M>(
        &mut self,
        delay: Duration,
        on_elapsed: impl FnOnce(u64) -> M + Send + 'static,
    ) -> Task<M>
    where
        M: Send + 'static,
    {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.pending = Some(generation);

        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| on_elapsed(generation),
        )
        .abortable();
        // Dropping the handle aborts the sleeping task.
        self.handle = Some(handle.abort_on_drop());
        task
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.handle = None;
    }

    /// Consumes an elapsed countdown. Returns `true` only for the generation
    /// that is currently pending.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            self.handle = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the most recent arm.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
