// src/main.rs
use nannou::prelude::*;

use petalvis::{
    config::Config,
    controllers::session::{SessionCommand, SessionController, PETAL_COUNT_STEP, SIZE_STEP},
    draw::Turtle,
    models::DesignParams,
    render::render_flower,
    services::SnapshotWriter,
    views::MessageOverlay,
};

const WELCOME_DURATION: f32 = 2.0;
const CONFIRM_DURATION: f32 = 2.0;
const HELP_DURATION: f32 = 4.0;

const HELP_TEXT: &str = "Controls:
1-4: change color scheme
a-d: change petal pattern
+/-: change size
. and ,: change petal count
g: toggle glitter
s: save snapshot
q: quit";

struct Model {
    // Core components:
    session: SessionController,
    turtle: Turtle,
    overlay: MessageOverlay,

    // Services:
    snapshots: SnapshotWriter,
    random: rand::rngs::ThreadRng,

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let params =
        DesignParams::from_config(&config.design).expect("Invalid design section in config file");

    // Create window
    let window_id = app
        .new_window()
        .title("petalvis 0.1.0")
        .size(config.window.width, config.window.height)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([
            config.rendering.texture_width,
            config.rendering.texture_height,
        ])
        // The texture is the RENDER_ATTACHMENT for the `Draw` render pass
        // and is SAMPLED when reshaping to the window.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture.sample_count(),
        texture.sample_type(),
        window.msaa_samples(),
        Frame::TEXTURE_FORMAT,
    );

    let snapshots = SnapshotWriter::new(config.resolve_output_dir(), &config.output.prefix);

    let mut overlay = MessageOverlay::new();
    overlay.show(
        "Welcome to petalvis! Press 'h' for help",
        WELCOME_DURATION,
        app.time,
    );

    Model {
        session: SessionController::new(params),
        turtle: Turtle::new(),
        overlay,
        snapshots,
        random: rand::thread_rng(),

        texture,
        draw,
        draw_renderer,
        texture_reshaper,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let command = match key {
        Key::Key1 => Some(SessionCommand::SetColorScheme(0)),
        Key::Key2 => Some(SessionCommand::SetColorScheme(1)),
        Key::Key3 => Some(SessionCommand::SetColorScheme(2)),
        Key::Key4 => Some(SessionCommand::SetColorScheme(3)),

        Key::A => Some(SessionCommand::SetPattern(0)),
        Key::B => Some(SessionCommand::SetPattern(1)),
        Key::C => Some(SessionCommand::SetPattern(2)),
        Key::D => Some(SessionCommand::SetPattern(3)),

        Key::Equals | Key::NumpadAdd => Some(SessionCommand::AdjustSize(SIZE_STEP)),
        Key::Minus | Key::NumpadSubtract => Some(SessionCommand::AdjustSize(-SIZE_STEP)),
        Key::Period => Some(SessionCommand::AdjustPetalCount(PETAL_COUNT_STEP)),
        Key::Comma => Some(SessionCommand::AdjustPetalCount(-PETAL_COUNT_STEP)),

        Key::G => Some(SessionCommand::ToggleEmbellish),
        Key::S => Some(SessionCommand::SaveSnapshot),
        Key::H => Some(SessionCommand::ShowHelp),
        Key::Q => Some(SessionCommand::Quit),
        _ => None,
    };

    if let Some(command) = command {
        model.session.queue_command(command);
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Apply queued control commands
    launch_commands(app, model);

    // Re-render the flower when parameters changed
    if model.session.take_dirty() {
        if let Err(e) = render_flower(&mut model.turtle, model.session.params(), &mut model.random)
        {
            eprintln!("Render failed: {}", e);
        }
    }

    // Replay the drawing and the overlay into the frame
    model.draw.background().color(BLACK);
    for stroke in model.turtle.strokes() {
        stroke.draw(&model.draw);
    }
    model.overlay.draw(&model.draw, app.time);

    render_to_texture(app, model);
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    // resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Command Launcher *******************************

fn launch_commands(app: &App, model: &mut Model) {
    for command in model.session.take_commands() {
        match command {
            SessionCommand::SetColorScheme(index) => model.session.set_color_scheme(index),
            SessionCommand::SetPattern(index) => model.session.set_pattern(index),
            SessionCommand::AdjustSize(delta) => model.session.adjust_size(delta),
            SessionCommand::AdjustPetalCount(delta) => model.session.adjust_petal_count(delta),
            SessionCommand::ToggleEmbellish => model.session.toggle_embellish(),
            SessionCommand::SaveSnapshot => {
                let path = model.snapshots.save(&app.main_window());
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                model.overlay.show(
                    format!("Design saved as {}", name),
                    CONFIRM_DURATION,
                    app.time,
                );
            }
            SessionCommand::ShowHelp => model.overlay.show(HELP_TEXT, HELP_DURATION, app.time),
            SessionCommand::Quit => app.quit(),
        }
    }
}

// ******************************* Rendering *******************************

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        2.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
}
