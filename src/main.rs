// src/main.rs
use nannou::prelude::*;
use nannou::winit::event::{MouseScrollDelta, TouchPhase};

use driftvis::{
    animation::generate_trajectories,
    config::Config,
    controllers::{OscCommand, OscController, ScrollState},
    models::ModelBundle,
    utilities::color::parse_hex,
    views::{BackgroundManager, DrifterField, Overlay, Palette, Quote},
};

struct Model {
    // Core components:
    field: DrifterField,
    background: BackgroundManager,
    overlay: Overlay,
    scroll: ScrollState,

    // Comms components:
    osc_controller: OscController,

    // Scroll feel:
    wheel_line_height: f32,
    key_step: f32,
    tween_duration: f32,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create OSC controller
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");

    // Create window
    app.new_window()
        .title("driftvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .resized(window_resized)
        .build()
        .unwrap();

    let viewport = vec2(config.window.width as f32, config.window.height as f32);
    let scroll = ScrollState::new(config.scroll.document_height, viewport);

    let palette = Palette::from_hex(&config.palette.colors).expect("Failed to parse palette");
    let background = BackgroundManager::new(palette);

    let quotes = config
        .quotes
        .iter()
        .map(|q| Quote::new(q.text.clone(), q.doc_y, q.height))
        .collect();
    let mut overlay = Overlay::new(
        config.title.text.clone(),
        quotes,
        config.style.title_font_size,
        config.style.quote_font_size,
    );
    overlay.apply_scroll(scroll.scroll_y(), viewport.y);

    let drifter_color =
        parse_hex(&config.style.drifter_color).expect("Failed to parse drifter color");

    // Generate the path pool once, then populate the field from the bundle.
    // A bundle that fails to load leaves the field empty; rendering continues.
    let mut rng = rand::thread_rng();
    let trajectories = generate_trajectories(viewport, &mut rng);
    let field = match ModelBundle::load(config.resolve_bundle_path()) {
        Ok(bundle) => DrifterField::populate(
            &bundle,
            &trajectories,
            config.style.mesh_scale,
            drifter_color,
            &mut rng,
        ),
        Err(err) => {
            log::error!("failed to load model bundle: {}", err);
            DrifterField::empty(config.style.mesh_scale, drifter_color)
        }
    };

    Model {
        field,
        background,
        overlay,
        scroll,
        osc_controller,
        wheel_line_height: config.scroll.wheel_line_height,
        key_step: config.scroll.key_step,
        tween_duration: config.animation.tween_duration,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let page = model.scroll.viewport().y;
    let scrolled = match key {
        Key::Down => {
            model.scroll.scroll_by(model.key_step);
            true
        }
        Key::Up => {
            model.scroll.scroll_by(-model.key_step);
            true
        }
        Key::PageDown | Key::Space => {
            model.scroll.scroll_by(page);
            true
        }
        Key::PageUp => {
            model.scroll.scroll_by(-page);
            true
        }
        Key::Home => {
            model.scroll.scroll_to(0.0);
            true
        }
        Key::End => {
            model.scroll.scroll_to_percent(1.0);
            true
        }
        Key::Q => {
            app.quit();
            false
        }
        _ => false,
    };

    if scrolled {
        handle_scroll(app, model);
    }
}

fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let dy = match delta {
        // wheel up is positive in winit; the document scrolls the other way
        MouseScrollDelta::LineDelta(_, y) => -y * model.wheel_line_height,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    };
    model.scroll.scroll_by(dy);
    handle_scroll(app, model);
}

fn window_resized(app: &App, model: &mut Model, dim: Vec2) {
    model.scroll.set_viewport(dim);
    handle_scroll(app, model);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(app, model);

    /*********************  Per-frame tick **********************/
    model.field.update(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    model.background.draw(&draw);
    model.field.draw(&draw);
    model
        .overlay
        .draw(&draw, model.scroll.viewport(), model.scroll.scroll_y());

    draw.to_frame(app, &frame).unwrap();
}

// ******************************* Scroll Mapper *******************************

// Single owner of the scroll-to-scene mapping: one scalar in; tween
// retargets, background blend and overlay flags out.
fn handle_scroll(app: &App, model: &mut Model) {
    let percent = model.scroll.percent();

    model
        .overlay
        .apply_scroll(model.scroll.scroll_y(), model.scroll.viewport().y);
    model.background.set_scroll(percent);
    model.field.apply_scroll(percent, model.tween_duration, app.time);
}

// ******************************* OSC Launcher *******************************

fn launch_commands(app: &App, model: &mut Model) {
    let commands = model.osc_controller.take_commands();
    let scrolled = !commands.is_empty();

    for command in commands {
        match command {
            OscCommand::ScrollTo { y } => model.scroll.scroll_to(y),
            OscCommand::ScrollBy { dy } => model.scroll.scroll_by(dy),
            OscCommand::ScrollToPercent { percent } => model.scroll.scroll_to_percent(percent),
        }
    }

    if scrolled {
        handle_scroll(app, model);
    }
}
