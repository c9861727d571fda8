use std::rc::Rc;

use yew::prelude::*;

use super::{
    definition_panel::DefinitionPanel,
    maze_view::{MazeView, RenderRequest},
    result_panel::{ResultPanel, ResultStatus},
    settings_panel::SettingsPanel,
    solution_panel::SolutionPanel,
};
use crate::browser::json_download_href;
use crate::config::Settings;
use crate::draw::DrawOp;
use crate::engine::WallChecker;
use crate::session::{MazeSession, SOLUTION_VALID_MESSAGE, SolutionOutcome};
use crate::storage::{self, MAZE_KEY, SOLUTION_KEY};
use crate::surface::RedrawPlan;
use crate::util::{cerror, clog};

fn restore_session() -> MazeSession {
    let mut session = MazeSession::default();
    if let Some(raw) = storage::load_item(MAZE_KEY) {
        if let Err(e) = session.load_maze_text(&raw) {
            clog(&format!("ignoring stored maze: {e}"));
        }
    }
    session
}

fn next_request(
    prev: &RenderRequest,
    plan: RedrawPlan,
    animation: Option<Vec<DrawOp>>,
) -> RenderRequest {
    RenderRequest {
        version: prev.version.wrapping_add(1),
        plan: Rc::new(plan),
        animation: animation.map(Rc::new),
    }
}

fn status_for(outcome: &SolutionOutcome) -> ResultStatus {
    match outcome {
        SolutionOutcome::Animate(_) => ResultStatus::Valid(SOLUTION_VALID_MESSAGE.to_string()),
        SolutionOutcome::Rejected(reason) => ResultStatus::Invalid(reason.clone()),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_mut_ref(restore_session);
    let maze_text = use_state(|| session.borrow().maze_text());
    let solution_text = use_state(|| storage::load_item(SOLUTION_KEY).unwrap_or_default());
    let settings = use_state(storage::load_settings);
    let status = use_state(|| ResultStatus::NoSolution);
    let request = use_state(|| RenderRequest {
        version: 0,
        plan: Rc::new(session.borrow().redraw_plan()),
        animation: None,
    });

    let on_maze_input = {
        let maze_text = maze_text.clone();
        Callback::from(move |text: String| maze_text.set(text))
    };
    let on_solution_input = {
        let solution_text = solution_text.clone();
        Callback::from(move |text: String| solution_text.set(text))
    };

    // Update maze: parse, redraw immediately, forget the old result.
    let on_update_maze = {
        let session = session.clone();
        let maze_text = maze_text.clone();
        let status = status.clone();
        let request = request.clone();
        Callback::from(move |()| {
            let loaded = session.borrow_mut().load_maze_text(&maze_text);
            match loaded {
                Ok(plan) => {
                    let canonical = session.borrow().maze_text();
                    storage::save_item(MAZE_KEY, &canonical);
                    clog(&format!(
                        "maze loaded: {}x{} px, {} walls",
                        plan.size.width,
                        plan.size.height,
                        plan.walls.len()
                    ));
                    maze_text.set(canonical);
                    status.set(ResultStatus::NoSolution);
                    request.set(next_request(&request, plan, None));
                }
                Err(e) => status.set(ResultStatus::Invalid(e.to_string())),
            }
        })
    };

    // Test solution: a parse error only updates the message; a checked solution redraws.
    let on_test_solution = {
        let session = session.clone();
        let solution_text = solution_text.clone();
        let status = status.clone();
        let request = request.clone();
        Callback::from(move |()| {
            let submitted = session
                .borrow_mut()
                .submit_solution_text(&solution_text, &WallChecker);
            match submitted {
                Ok(outcome) => {
                    storage::save_item(SOLUTION_KEY, &solution_text);
                    status.set(status_for(&outcome));
                    let plan = session.borrow().redraw_plan();
                    let animation = match outcome {
                        SolutionOutcome::Animate(ops) => Some(ops),
                        SolutionOutcome::Rejected(reason) => {
                            clog(&format!("solution rejected: {reason}"));
                            None
                        }
                    };
                    request.set(next_request(&request, plan, animation));
                }
                Err(e) => status.set(ResultStatus::Invalid(e.to_string())),
            }
        })
    };

    let on_load_sample = {
        let session = session.clone();
        let maze_text = maze_text.clone();
        let solution_text = solution_text.clone();
        let status = status.clone();
        let request = request.clone();
        Callback::from(move |()| {
            let (plan, outcome) = session.borrow_mut().load_sample(&WallChecker);
            let (maze, solution) = {
                let s = session.borrow();
                (s.maze_text(), s.solution_text())
            };
            storage::save_item(MAZE_KEY, &maze);
            storage::save_item(SOLUTION_KEY, &solution);
            maze_text.set(maze);
            solution_text.set(solution);
            status.set(status_for(&outcome));
            let animation = match outcome {
                SolutionOutcome::Animate(ops) => Some(ops),
                SolutionOutcome::Rejected(_) => None,
            };
            request.set(next_request(&request, plan, animation));
        })
    };

    let on_change_ops_per_tick = {
        let settings = settings.clone();
        Callback::from(move |ops_per_tick: usize| {
            let next = Settings { ops_per_tick }.normalized();
            storage::save_settings(&next);
            settings.set(next);
        })
    };

    let on_render_error = {
        let status = status.clone();
        Callback::from(move |msg: String| {
            cerror(&format!("render failed: {msg}"));
            status.set(ResultStatus::Invalid(msg));
        })
    };

    let download_href = json_download_href(&session.borrow().maze_text());

    html! {<div style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif; padding:16px; box-sizing:border-box;">
        <h1 style="margin:0 0 12px 0; font-size:20px;">{"Maze Canvas"}</h1>
        <div style="display:flex; gap:20px; align-items:flex-start; flex-wrap:wrap;">
            <div style="display:flex; flex-direction:column; gap:14px; width:420px; max-width:100%;">
                <DefinitionPanel text={(*maze_text).clone()} download_href={download_href} on_input={on_maze_input} on_update={on_update_maze} />
                <SolutionPanel text={(*solution_text).clone()} on_input={on_solution_input} on_test={on_test_solution} on_load_sample={on_load_sample} />
                <ResultPanel status={(*status).clone()} />
                <SettingsPanel ops_per_tick={settings.ops_per_tick} on_change_ops_per_tick={on_change_ops_per_tick} />
            </div>
            <MazeView request={(*request).clone()} ops_per_tick={settings.ops_per_tick} on_error={on_render_error} />
        </div>
    </div>}
}
