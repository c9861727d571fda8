//! Headless doubles for driving the render pipeline without a browser: a
//! surface that records calls and a clock whose frames are delivered by hand.

use crate::config::{FillStyle, WallStyle};
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect, SurfaceSize};
use crate::scheduler::{FrameClock, FrameToken};
use crate::surface::{RenderSurface, SurfaceResult};

/// Call recorded by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Resize(SurfaceSize),
    Clear,
    Line { from: Point, to: Point },
    Fill(Rect),
}

/// Surface that records every call. Can be told to fail after a number of draws.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<SurfaceCall>,
    fail_after: Option<usize>,
    draws: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls beyond the first `draws` fail with [`SurfaceError::Draw`].
    pub fn failing_after(draws: usize) -> Self {
        Self {
            fail_after: Some(draws),
            ..Self::default()
        }
    }

    pub fn fills(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Fill(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Line { .. }))
            .count()
    }

    fn draw(&mut self, call: SurfaceCall) -> SurfaceResult<()> {
        if self.fail_after.is_some_and(|limit| self.draws >= limit) {
            return Err(SurfaceError::Draw(format!("draw #{} rejected", self.draws + 1)));
        }
        self.draws += 1;
        self.calls.push(call);
        Ok(())
    }
}

impl RenderSurface for Recorder {
    fn resize(&mut self, size: SurfaceSize) -> SurfaceResult<()> {
        self.calls.push(SurfaceCall::Resize(size));
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<()> {
        self.calls.push(SurfaceCall::Clear);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, _style: &WallStyle) -> SurfaceResult<()> {
        self.draw(SurfaceCall::Line { from, to })
    }

    fn fill_rect(&mut self, rect: Rect, _style: &FillStyle) -> SurfaceResult<()> {
        self.draw(SurfaceCall::Fill(rect))
    }
}

/// Clock that only records requests; frames are delivered by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub requested: Vec<FrameToken>,
    pub cancelled: Vec<FrameToken>,
    refuse_after: Option<usize>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame requests beyond the first `accepted` fail with [`SurfaceError::FrameRequest`].
    pub fn refusing_after(accepted: usize) -> Self {
        Self {
            refuse_after: Some(accepted),
            ..Self::default()
        }
    }

    /// Most recent request that has not been cancelled.
    pub fn pending(&self) -> Option<FrameToken> {
        self.requested
            .last()
            .copied()
            .filter(|t| !self.cancelled.contains(t))
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self, token: FrameToken) -> SurfaceResult<()> {
        if self
            .refuse_after
            .is_some_and(|limit| self.requested.len() >= limit)
        {
            return Err(SurfaceError::FrameRequest(format!(
                "frame {} refused",
                token.0
            )));
        }
        self.requested.push(token);
        Ok(())
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.cancelled.push(token);
    }
}
