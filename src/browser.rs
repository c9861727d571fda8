//! Browser bindings: a `<canvas>` 2d surface, a `requestAnimationFrame` clock and
//! the animator that ties them to a [`FrameScheduler`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::{FillStyle, WallStyle};
use crate::draw::DrawOp;
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect, SurfaceSize};
use crate::scheduler::{FrameClock, FrameOutcome, FrameScheduler, FrameToken};
use crate::surface::{RedrawPlan, RenderSurface, SurfaceResult, render_maze};
use crate::util::{cerror, clog};

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn attach(canvas: HtmlCanvasElement) -> SurfaceResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::Unavailable(js_message(&e)))?
            .ok_or_else(|| SurfaceError::Unavailable("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable("context is not a 2d context".into()))?;
        Ok(Self { canvas, ctx })
    }

    fn ensure_connected(&self) -> SurfaceResult<()> {
        if self.canvas.is_connected() {
            Ok(())
        } else {
            Err(SurfaceError::Detached)
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn resize(&mut self, size: SurfaceSize) -> SurfaceResult<()> {
        self.ensure_connected()?;
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<()> {
        self.ensure_connected()?;
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &WallStyle) -> SurfaceResult<()> {
        self.ensure_connected()?;
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_stroke_style_str(style.stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) -> SurfaceResult<()> {
        self.ensure_connected()?;
        self.ctx.set_fill_style_str(style.fill);
        self.ctx
            .fill_rect(rect.origin.x, rect.origin.y, rect.width, rect.height);
        Ok(())
    }
}

type FrameCallback = Closure<dyn FnMut() -> Result<(), JsValue>>;

/// One persistent RAF callback re-registered per request; the token it delivers
/// is whatever was requested last.
pub struct RafClock {
    window: Window,
    raf_id: Option<i32>,
    pending: Rc<Cell<Option<FrameToken>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameClock for RafClock {
    fn request_frame(&mut self, token: FrameToken) -> SurfaceResult<()> {
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            return Err(SurfaceError::FrameRequest(
                "frame callback not installed".into(),
            ));
        };
        let id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::FrameRequest(js_message(&e)))?;
        self.raf_id = Some(id);
        self.pending.set(Some(token));
        Ok(())
    }

    fn cancel_frame(&mut self, _token: FrameToken) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.pending.set(None);
    }
}

impl Drop for RafClock {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

struct Animation {
    scheduler: FrameScheduler<RafClock>,
    surface: CanvasSurface,
}

fn deliver_frame(
    animation: &Weak<RefCell<Animation>>,
    pending: &Cell<Option<FrameToken>>,
) -> Result<(), JsValue> {
    let Some(animation) = animation.upgrade() else {
        return Ok(());
    };
    let Some(token) = pending.take() else {
        return Ok(());
    };
    let mut guard = animation.borrow_mut();
    let Animation { scheduler, surface } = &mut *guard;
    match scheduler.on_frame(token, surface) {
        Ok(FrameOutcome::Finished(n)) => {
            clog(&format!("solution animation finished (last frame drew {n})"));
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) => {
            cerror(&format!("solution animation aborted: {err}"));
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}

/// Owns the canvas surface and the single animation run drawing on it.
/// Dropping it cancels any pending frame.
pub struct CanvasAnimator {
    animation: Rc<RefCell<Animation>>,
}

impl CanvasAnimator {
    pub fn attach(canvas: HtmlCanvasElement) -> SurfaceResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| SurfaceError::Unavailable("no global `window` exists".into()))?;
        let surface = CanvasSurface::attach(canvas)?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let clock = RafClock {
            window,
            raf_id: None,
            pending: pending.clone(),
            callback: callback.clone(),
        };
        let animation = Rc::new(RefCell::new(Animation {
            scheduler: FrameScheduler::new(clock),
            surface,
        }));
        let weak = Rc::downgrade(&animation);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            deliver_frame(&weak, &pending)
        })
            as Box<dyn FnMut() -> Result<(), JsValue>>));
        Ok(Self { animation })
    }

    /// Stop any animation, then resize, clear and draw the maze walls.
    pub fn redraw(&self, plan: &RedrawPlan) -> SurfaceResult<()> {
        let mut guard = self.animation.borrow_mut();
        let Animation { scheduler, surface } = &mut *guard;
        scheduler.cancel();
        render_maze(surface, plan)
    }

    /// Replace the current animation with `ops`, `ops_per_tick` per frame.
    pub fn animate(&self, ops: Vec<DrawOp>, ops_per_tick: usize) -> SurfaceResult<FrameToken> {
        clog(&format!(
            "animating {} solution cells, {} per frame",
            ops.len(),
            ops_per_tick.max(1)
        ));
        self.animation.borrow_mut().scheduler.start(ops, ops_per_tick)
    }

    pub fn cancel(&self) {
        self.animation.borrow_mut().scheduler.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.animation.borrow().scheduler.is_running()
    }
}

/// `data:` URL offering `json` as a download.
pub fn json_download_href(json: &str) -> String {
    format!(
        "data:application/json;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(json))
    )
}
