use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::scene::{Scene, SceneEvent};
use crate::state::{FrameClock, SceneHandle};

#[derive(Properties, PartialEq, Clone)]
pub struct GameCanvasProps {
    pub scene: SceneHandle,
    pub on_event: Callback<SceneEvent>,
}

fn draw_scene(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    let cfg = &scene.config;
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str(&cfg.background);
    ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

    ctx.set_line_width(2.0);
    ctx.set_font("bold 20px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for pipe in &scene.pipes {
        let b = &pipe.body;
        if b.height <= 0.0 {
            continue;
        }
        ctx.set_fill_style_str(&cfg.pipe_color);
        ctx.fill_rect(b.left(), b.top(), b.width, b.height);
        ctx.set_stroke_style_str("#000000");
        ctx.stroke_rect(b.left(), b.top(), b.width, b.height);
        ctx.set_fill_style_str("#000000");
        // label sits near the gap end of each pipe
        let label_y = if pipe.flipped { b.bottom() - 20.0 } else { b.top() + 20.0 };
        ctx.fill_text("P", b.x, label_y).ok();
    }

    let bird = &scene.bird;
    let b = &bird.body;
    ctx.save();
    ctx.translate(b.x, b.y).ok();
    ctx.rotate(bird.angle().to_radians()).ok();
    let fill = if bird.hit { &cfg.hit_color } else { &cfg.bird_color };
    ctx.set_fill_style_str(fill);
    ctx.fill_rect(-b.width / 2.0, -b.height / 2.0, b.width, b.height);
    ctx.set_stroke_style_str("#000000");
    ctx.stroke_rect(-b.width / 2.0, -b.height / 2.0, b.width, b.height);
    ctx.set_fill_style_str("#000000");
    ctx.fill_text("B", 0.0, 0.0).ok();
    ctx.restore();
}

fn is_flap_key(e: &web_sys::KeyboardEvent) -> bool {
    let code = e.code();
    code == "Space" || code == "ArrowUp" || e.key() == " "
}

#[function_component(GameCanvas)]
pub fn game_canvas(props: &GameCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let on_event_ref = use_mut_ref(|| props.on_event.clone());
    *on_event_ref.borrow_mut() = props.on_event.clone();

    {
        let canvas_ref = canvas_ref.clone();
        let scene = props.scene.clone();
        let on_event_ref = on_event_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let ctx: CanvasRenderingContext2d = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                .expect("2d context");

            // the world follows the viewport
            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let scene = scene.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(480.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    scene.borrow_mut().resize(width, height);
                }
            };
            apply_canvas_size();

            let clock = Rc::new(RefCell::new(FrameClock::new(scene.borrow().config.fixed_dt)));

            // RAF loop: fixed steps, forward events, draw
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_loop = raf_id.clone();
                let window_loop = window.clone();
                let cell_loop = closure_cell.clone();
                let scene = scene.clone();
                let clock = clock.clone();
                let on_event_ref = on_event_ref.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                    let events = {
                        let mut clock = clock.borrow_mut();
                        let steps = clock.advance(now_ms);
                        let mut sc = scene.borrow_mut();
                        for _ in 0..steps {
                            sc.tick(clock.dt());
                        }
                        draw_scene(&ctx, &sc);
                        sc.drain_events()
                    };
                    if !events.is_empty() {
                        let cb = on_event_ref.borrow().clone();
                        for ev in events {
                            cb.emit(ev);
                        }
                    }
                    if let Some(cb) = cell_loop.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut(f64)>));
            }
            if let Some(cb) = closure_cell.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            let pointerdown_cb = {
                let scene = scene.clone();
                Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
                    e.prevent_default();
                    scene.borrow_mut().flap();
                }) as Box<dyn FnMut(_)>)
            };
            if let Err(e) = canvas.add_event_listener_with_callback(
                "pointerdown",
                pointerdown_cb.as_ref().unchecked_ref(),
            ) {
                log::error!("pointerdown listener: {e:?}");
            }

            let keydown_cb = {
                let scene = scene.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if !is_flap_key(&e) {
                        return;
                    }
                    let mut sc = scene.borrow_mut();
                    // leave keys alone on the menus so the name field still types
                    if sc.alive && sc.physics_running {
                        e.prevent_default();
                        sc.flap();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Err(e) = window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
            {
                log::error!("keydown listener: {e:?}");
            }

            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                apply_canvas_size();
            }) as Box<dyn FnMut(_)>);
            if let Err(e) = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            {
                log::error!("resize listener: {e:?}");
            }

            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // break the closure's self-reference
                closure_cell.borrow_mut().take();
                drop(pointerdown_cb);
                drop(keydown_cb);
                drop(resize_cb);
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            id="game-canvas"
            style="position:absolute; inset:0; display:block; width:100%; height:100%; touch-action:none;"
        ></canvas>
    }
}
