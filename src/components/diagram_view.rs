use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, TouchEvent, Window};
use yew::prelude::*;

use super::{controls_panel::ControlsPanel, info_panel::InfoPanel};
use crate::config::EditorConfig;
use crate::info::{Metrics, Readout};
use crate::model::CircleColor;
use crate::render::{CanvasSurface, redraw};
use crate::state::Session;
use crate::util::touch_points;

#[derive(Properties, PartialEq, Clone)]
pub struct DiagramViewProps {
    pub config: Rc<EditorConfig>,
}

#[function_component(DiagramView)]
pub fn diagram_view(props: &DiagramViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(Session::new);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let readout = use_state(Readout::default);
    let rerender = use_force_update();

    // Canvas setup: sizing, touch listeners, and the redraw closure used by every handler.
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let draw_ref_setup = draw_ref.clone();
        let readout = readout.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let listeners = match (web_sys::window(), canvas_ref.cast::<HtmlCanvasElement>()) {
                (Some(window), Some(canvas)) => {
                    let height = config.canvas_height;
                    let sync: Rc<dyn Fn()> = {
                        let canvas = canvas.clone();
                        let session = session.clone();
                        Rc::new(move || {
                            let metrics = {
                                let s = session.borrow();
                                if let Some(ctx) = context_2d(&canvas) {
                                    let w = f64::from(canvas.width());
                                    let h = f64::from(canvas.height());
                                    redraw(&mut CanvasSurface::new(&ctx, w, h), &s.store, &config);
                                }
                                Metrics::from_store(&s.store)
                            };
                            readout.set(metrics.readout());
                        })
                    };
                    *draw_ref_setup.borrow_mut() = Some(sync.clone());
                    fit_canvas(&window, &canvas, height);
                    sync();
                    Some(CanvasListeners::attach(window, canvas, session, sync, height))
                }
                _ => {
                    log::warn!("diagram canvas not available; touch input disabled");
                    None
                }
            };
            move || drop(listeners)
        });
    }

    let refresh = {
        let draw_ref = draw_ref.clone();
        move || {
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        }
    };
    let on_select_color = {
        let session = session.clone();
        Callback::from(move |c: CircleColor| {
            session.borrow_mut().select_color(c);
            rerender.force_update();
        })
    };
    let on_undo = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            let changed = session.borrow_mut().undo();
            if changed {
                refresh();
            }
        })
    };
    let on_reset = {
        let session = session.clone();
        Callback::from(move |()| {
            let changed = session.borrow_mut().reset();
            if changed {
                refresh();
            }
        })
    };
    let (current, can_undo) = {
        let s = session.borrow();
        (s.color, !s.store.is_empty())
    };
    let canvas_style = format!(
        "display:block; box-sizing:border-box; width:100%; height:{}px; touch-action:none; \
         background:#ffffff; border:1px solid #30363d; border-radius:8px;",
        props.config.canvas_height
    );

    html! {
        <div style="display:flex; flex-direction:column; gap:12px; padding:12px;">
            <ControlsPanel {current} {can_undo} {on_select_color} {on_undo} {on_reset} />
            <canvas ref={canvas_ref} style={canvas_style}></canvas>
            <InfoPanel readout={(*readout).clone()} />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => {
                log::warn!("2d context has unexpected type");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("get_context failed: {e:?}");
            None
        }
    }
}

/// Bitmap size follows the displayed content box so one bitmap pixel is one CSS
/// pixel. Before layout the window width and the configured height stand in.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement, height: f64) {
    let width = Some(f64::from(canvas.client_width()))
        .filter(|w| *w > 0.0)
        .or_else(|| window.inner_width().unwrap_or_default().as_f64())
        .unwrap_or(800.0);
    let height = Some(f64::from(canvas.client_height())).filter(|h| *h > 0.0).unwrap_or(height);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

/// DOM listeners owned by the view; removed on drop.
struct CanvasListeners {
    window: Window,
    canvas: HtmlCanvasElement,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    resize: Closure<dyn FnMut(web_sys::Event)>,
}

impl CanvasListeners {
    fn attach(
        window: Window,
        canvas: HtmlCanvasElement,
        session: Rc<RefCell<Session>>,
        sync: Rc<dyn Fn()>,
        height: f64,
    ) -> Self {
        let touch_start = {
            let canvas = canvas.clone();
            let session = session.clone();
            let sync = sync.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let points = touch_points(&e, &canvas);
                let changed = session.borrow_mut().touch_start(&points);
                if changed {
                    sync();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touch_move = {
            let canvas = canvas.clone();
            let session = session.clone();
            let sync = sync.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                e.prevent_default();
                let points = touch_points(&e, &canvas);
                let changed = session.borrow_mut().touch_move(&points);
                if changed {
                    sync();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touch_end = {
            Closure::wrap(Box::new(move |e: TouchEvent| {
                session.borrow_mut().touch_end(e.touches().length() as usize);
            }) as Box<dyn FnMut(_)>)
        };
        let resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                fit_canvas(&window, &canvas, height);
                sync();
            }) as Box<dyn FnMut(_)>)
        };

        listen(&canvas, "touchstart", touch_start.as_ref());
        listen(&canvas, "touchmove", touch_move.as_ref());
        listen(&canvas, "touchend", touch_end.as_ref());
        listen(&canvas, "touchcancel", touch_end.as_ref());
        listen(&window, "resize", resize.as_ref());

        Self { window, canvas, touch_start, touch_move, touch_end, resize }
    }
}

impl Drop for CanvasListeners {
    fn drop(&mut self) {
        unlisten(&self.canvas, "touchstart", self.touch_start.as_ref());
        unlisten(&self.canvas, "touchmove", self.touch_move.as_ref());
        unlisten(&self.canvas, "touchend", self.touch_end.as_ref());
        unlisten(&self.canvas, "touchcancel", self.touch_end.as_ref());
        unlisten(&self.window, "resize", self.resize.as_ref());
    }
}

fn listen(target: &EventTarget, name: &str, cb: &JsValue) {
    if let Err(e) = target.add_event_listener_with_callback(name, cb.unchecked_ref()) {
        log::warn!("failed to attach {name} listener: {e:?}");
    }
}

fn unlisten(target: &EventTarget, name: &str, cb: &JsValue) {
    if let Err(e) = target.remove_event_listener_with_callback(name, cb.unchecked_ref()) {
        log::warn!("failed to detach {name} listener: {e:?}");
    }
}
