use std::time::Instant;

use clap::Parser;
use fourier_core::{action_for_key, DemoManager, KeyAction, Point, PointerInput, Readout};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod cli;
mod renderer;
mod tessellate;

use renderer::GpuState;

fn window_title(manager: &DemoManager) -> String {
    let readouts: Vec<String> = manager
        .readouts()
        .iter()
        .map(|Readout { id, value }| format!("{id}: {value}"))
        .collect();
    format!("{} | {}", manager.active().title(), readouts.join("  "))
}

/// Winit key to the names `action_for_key` understands.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Named(NamedKey::Space) => Some(" "),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::Args::parse();
    let initial = args.initial_demo();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(initial.title())
        .with_inner_size(LogicalSize::new(args.width, args.height))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut manager = DemoManager::new(renderer::logical_viewport(&window), initial);
    for control in args.startup_controls() {
        if !manager.apply(control) {
            log::warn!("[cli] {} ignores {:?}", initial, control);
        }
    }

    let mut last_frame = Instant::now();
    let mut cursor = Point::ZERO;
    let mut title = String::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                let viewport = state.resize_physical(size);
                manager.resize(viewport);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f64>(state.window.scale_factor());
                cursor = Point::new(p.x, p.y);
                manager.pointer(PointerInput::Move(cursor));
            }
            WindowEvent::CursorLeft { .. } => manager.pointer(PointerInput::Leave),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => manager.pointer(PointerInput::Down(cursor)),
                ElementState::Released => manager.pointer(PointerInput::Up),
            },
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                    return;
                }
                match key_name(&event.logical_key).and_then(action_for_key) {
                    Some(KeyAction::SelectDemo(kind)) => {
                        manager.switch_to(kind);
                    }
                    Some(KeyAction::Apply(control)) => {
                        manager.apply(control);
                    }
                    None => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f64();
            last_frame = now;
            match manager.frame(dt_sec, &mut state) {
                Ok(()) => state.window.request_redraw(),
                Err(e) => {
                    log::error!("[frame] {}", e);
                    elwt.exit();
                }
            }
            let next = window_title(&manager);
            if next != title {
                state.window.set_title(&next);
                title = next;
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourier_core::{DemoKind, Viewport};

    #[test]
    fn space_and_characters_have_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::Space)), Some(" "));
        assert_eq!(key_name(&Key::Character("r".into())), Some("r"));
        assert_eq!(key_name(&Key::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn title_lists_the_active_readouts() {
        let manager = DemoManager::new(Viewport::new(800.0, 600.0), DemoKind::Square);
        let title = window_title(&manager);
        assert!(title.starts_with("Square Wave | "), "{title}");
        assert!(title.contains("sq-count: 5"), "{title}");
    }
}
