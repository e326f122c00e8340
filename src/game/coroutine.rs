//! # Coroutine Runner
//!
//! Cooperative multi-frame tasks driven once per frame by [`CoroutineRunner::update`].
//!
//! A coroutine is any type implementing [`Coroutine`]. Each call to
//! [`Coroutine::resume`] runs it until its next suspension point and reports
//! what happened through a [`CoroutineStep`]:
//!
//! * `Yield` ends the coroutine's turn for this frame
//! * `Await(child)` suspends it until `child` completes; the child starts in the same frame
//! * `Done` finishes it and hands control back to whoever awaited it
//!
//! Every coroutine added to the runner gets its own stack of awaited children.
//! Additions and removals are queued and take effect at the next
//! [`update`](CoroutineRunner::update), so it is safe to add or remove while
//! reacting to a coroutine's side effects.

use std::collections::HashSet;

use log::trace;

/// Outcome of one [`Coroutine::resume`] call.
pub enum CoroutineStep {
    /// Suspended until the next frame
    Yield,
    /// Suspended until the given child coroutine is done
    Await(Box<dyn Coroutine>),
    /// Finished
    Done,
}

impl CoroutineStep {
    /// Awaits a [`WaitSeconds`] of `seconds`.
    pub fn wait_seconds(seconds: f32) -> Self {
        CoroutineStep::Await(Box::new(WaitSeconds::new(seconds)))
    }
}

/// A resumable task.
pub trait Coroutine {
    /// Runs until the next suspension point. `delta_time` is the frame time in seconds.
    fn resume(&mut self, delta_time: f32) -> CoroutineStep;
}

impl<F> Coroutine for F
where
    F: FnMut(f32) -> CoroutineStep,
{
    fn resume(&mut self, delta_time: f32) -> CoroutineStep {
        self(delta_time)
    }
}

/// Yields until at least `duration` seconds of frame time have been consumed.
#[derive(Debug, Clone, Copy)]
pub struct WaitSeconds {
    remaining: f32,
}

impl WaitSeconds {
    /// Creates a wait of `duration` seconds.
    pub fn new(duration: f32) -> Self {
        WaitSeconds {
            remaining: duration,
        }
    }

    /// Seconds left before the wait completes.
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

impl Coroutine for WaitSeconds {
    fn resume(&mut self, delta_time: f32) -> CoroutineStep {
        if self.remaining > 0.0 {
            self.remaining -= delta_time;
            CoroutineStep::Yield
        } else {
            CoroutineStep::Done
        }
    }
}

/// Handle returned by [`CoroutineRunner::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoroutineId(u64);

struct CoroutineStack {
    id: CoroutineId,
    frames: Vec<Box<dyn Coroutine>>,
}

/// Drives a set of coroutines, one step per frame.
#[derive(Default)]
pub struct CoroutineRunner {
    stacks: Vec<CoroutineStack>,
    add_queue: Vec<CoroutineStack>,
    remove_queue: HashSet<CoroutineId>,
    next_id: u64,
}

impl CoroutineRunner {
    /// Creates an idle runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `coroutine` to start on the next update.
    ///
    /// With a positive `delay` the coroutine first waits that many seconds.
    pub fn add(&mut self, coroutine: impl Coroutine + 'static, delay: f32) -> CoroutineId {
        let id = CoroutineId(self.next_id);
        self.next_id += 1;

        let mut frames: Vec<Box<dyn Coroutine>> = vec![Box::new(coroutine)];
        if delay > 0.0 {
            frames.push(Box::new(WaitSeconds::new(delay)));
        }
        self.add_queue.push(CoroutineStack { id, frames });
        id
    }

    /// Queues the removal of `id`. It is dropped at the start of the next update.
    pub fn remove(&mut self, id: CoroutineId) {
        self.remove_queue.insert(id);
    }

    /// Returns `true` while any coroutine is running or waiting to start.
    pub fn is_busy(&self) -> bool {
        !self.add_queue.is_empty() || !self.stacks.is_empty()
    }

    /// Number of coroutines currently running.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns `true` if no coroutine is running.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Advances every coroutine by one frame of `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.admit_queued();
        self.remove_queued();

        for stack in self.stacks.iter_mut() {
            while let Some(top) = stack.frames.last_mut() {
                match top.resume(delta_time) {
                    CoroutineStep::Yield => break,
                    CoroutineStep::Await(child) => stack.frames.push(child),
                    CoroutineStep::Done if stack.frames.len() == 1 => {
                        trace!("Coroutine {:?} finished", stack.id);
                        self.remove_queue.insert(stack.id);
                        break;
                    }
                    CoroutineStep::Done => {
                        stack.frames.pop();
                    }
                }
            }
        }

        self.remove_queued();
    }

    fn admit_queued(&mut self) {
        self.stacks.append(&mut self.add_queue);
    }

    fn remove_queued(&mut self) {
        if self.remove_queue.is_empty() {
            return;
        }
        let remove_queue = std::mem::take(&mut self.remove_queue);
        self.stacks.retain(|stack| !remove_queue.contains(&stack.id));
    }
}
