use std::rc::Rc;

use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::browser::CanvasAnimator;
use crate::config::DISPLAY_SCALE;
use crate::draw::DrawOp;
use crate::surface::RedrawPlan;
use crate::util::cerror;

/// A full redraw, optionally followed by an animated solution. Bump `version` to apply.
#[derive(Clone, PartialEq)]
pub struct RenderRequest {
    pub version: u32,
    pub plan: Rc<RedrawPlan>,
    pub animation: Option<Rc<Vec<DrawOp>>>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct MazeViewProps {
    pub request: RenderRequest,
    pub ops_per_tick: usize,
    pub on_error: Callback<String>,
}

#[function_component(MazeView)]
pub fn maze_view(props: &MazeViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let animator = use_mut_ref(|| None::<CanvasAnimator>);

    // Mount: bind the animator to the canvas; unmount drops it, cancelling any frame.
    {
        let canvas_ref = canvas_ref.clone();
        let animator = animator.clone();
        let on_error = props.on_error.clone();
        use_effect_with((), move |_| {
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => match CanvasAnimator::attach(canvas) {
                    Ok(a) => *animator.borrow_mut() = Some(a),
                    Err(e) => on_error.emit(e.to_string()),
                },
                None => on_error.emit("maze canvas is not mounted".to_string()),
            }
            move || drop(animator.borrow_mut().take())
        });
    }
    // Each request: redraw walls, then start the solution replay if there is one.
    {
        let animator = animator.clone();
        let request = props.request.clone();
        let per_tick = props.ops_per_tick;
        let on_error = props.on_error.clone();
        use_effect_with(props.request.version, move |_| {
            if let Some(a) = animator.borrow().as_ref() {
                match a.redraw(&request.plan) {
                    Ok(()) => {
                        if let Some(ops) = &request.animation {
                            if let Err(e) = a.animate(ops.to_vec(), per_tick) {
                                cerror(&format!("solution animation not started: {e}"));
                                on_error.emit(e.to_string());
                            }
                        }
                    }
                    Err(e) => {
                        cerror(&format!("maze redraw failed: {e}"));
                        on_error.emit(e.to_string());
                    }
                }
            }
            || ()
        });
    }

    let size = props.request.plan.size;
    let style = format!(
        "display:block; width:{}px; height:{}px; image-rendering:pixelated; background:#ffffff; border:1px solid #30363d;",
        size.width.saturating_mul(DISPLAY_SCALE),
        size.height.saturating_mul(DISPLAY_SCALE)
    );
    html! { <canvas ref={canvas_ref} id="maze-canvas" style={style}></canvas> }
}
