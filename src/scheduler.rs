//! Frame-paced replay of draw ops.
//!
//! A [`FrameScheduler`] owns at most one [`AnimationRun`]. Each run is keyed by a
//! [`FrameToken`]; a frame delivered with any other token is ignored, so a
//! callback that was already queued when its run got cancelled does nothing.

use std::collections::VecDeque;

use crate::draw::DrawOp;
use crate::surface::{RenderSurface, SurfaceResult};

/// Identifies one pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Source of animation frames (`requestAnimationFrame` in the browser).
pub trait FrameClock {
    /// Arrange for [`FrameScheduler::on_frame`] to be called once with `token`.
    /// On error no frame will be delivered for it.
    fn request_frame(&mut self, token: FrameToken) -> SurfaceResult<()>;

    /// Drop the pending request for `token`, if it has not fired yet.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Live state of one replay: the pending frame and the chunks not yet drawn.
#[derive(Debug)]
pub struct AnimationRun {
    token: FrameToken,
    chunks: VecDeque<Vec<DrawOp>>,
}

impl AnimationRun {
    fn new(ops: Vec<DrawOp>, ops_per_tick: usize, token: FrameToken) -> Self {
        let mut chunks = VecDeque::with_capacity(ops.len().div_ceil(ops_per_tick));
        let mut ops = ops.into_iter().peekable();
        while ops.peek().is_some() {
            chunks.push_back(ops.by_ref().take(ops_per_tick).collect());
        }
        Self { token, chunks }
    }

    pub fn token(&self) -> FrameToken {
        self.token
    }

    pub fn remaining_chunks(&self) -> usize {
        self.chunks.len()
    }
}

/// What a delivered frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The token did not belong to the active run.
    Stale,
    /// A chunk of this many ops was drawn and another frame was requested.
    Drew(usize),
    /// The run is over (last chunk drawn, or nothing left); the scheduler is idle.
    Finished(usize),
}

pub struct FrameScheduler<C: FrameClock> {
    clock: C,
    run: Option<AnimationRun>,
    next_token: u64,
}

impl<C: FrameClock> FrameScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            run: None,
            next_token: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    fn issue_token(&mut self) -> FrameToken {
        self.next_token += 1;
        FrameToken(self.next_token)
    }

    /// Replace any active run with `ops`, drawn `ops_per_tick` at a time (0 is treated as 1).
    /// If the first frame cannot be requested the scheduler stays idle.
    pub fn start(&mut self, ops: Vec<DrawOp>, ops_per_tick: usize) -> SurfaceResult<FrameToken> {
        self.cancel();
        let token = self.issue_token();
        self.clock.request_frame(token)?;
        self.run = Some(AnimationRun::new(ops, ops_per_tick.max(1), token));
        Ok(token)
    }

    /// Stop the active run. Safe to call when idle.
    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            self.clock.cancel_frame(run.token);
        }
    }

    /// Handle a delivered frame. A draw failure, or a failed request for the next
    /// frame, ends the run and is returned to the caller.
    pub fn on_frame<S: RenderSurface + ?Sized>(
        &mut self,
        token: FrameToken,
        surface: &mut S,
    ) -> SurfaceResult<FrameOutcome> {
        let Some(run) = self.run.as_mut() else {
            return Ok(FrameOutcome::Stale);
        };
        if run.token != token {
            return Ok(FrameOutcome::Stale);
        }
        let Some(chunk) = run.chunks.pop_front() else {
            self.run = None;
            return Ok(FrameOutcome::Finished(0));
        };
        if let Err(err) = surface.execute(&chunk) {
            self.run = None;
            return Err(err);
        }
        let drawn = chunk.len();
        if run.chunks.is_empty() {
            self.run = None;
            return Ok(FrameOutcome::Finished(drawn));
        }
        let next = self.issue_token();
        if let Some(run) = self.run.as_mut() {
            run.token = next;
        }
        if let Err(err) = self.clock.request_frame(next) {
            self.run = None;
            return Err(err);
        }
        Ok(FrameOutcome::Drew(drawn))
    }
}

#[cfg(test)]
#[path = "../tests/unit/scheduler.rs"]
mod tests;
