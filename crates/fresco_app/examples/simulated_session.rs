//! Drives a sketch with synthetic input, no windowing backend required.
//!
//! Run with: cargo run -p fresco_app --example simulated_session

use fresco_app::prelude::*;

struct Scribble {
    stroke: Vec<Point>,
}

impl SketchHooks for Scribble {
    fn setup(&mut self, state: &mut SketchState) {
        println!("canvas is {}x{}", state.width(), state.height());
    }

    fn draw(&mut self, state: &mut SketchState) {
        println!(
            "frame {:>2}: mouse at ({:>5.1}, {:>5.1}), {} stroke points",
            state.frame_count(),
            state.mouse().x,
            state.mouse().y,
            self.stroke.len()
        );
    }

    fn mouse_pressed(&mut self, state: &mut SketchState) {
        self.stroke.clear();
        self.stroke.push(state.mouse());
    }

    fn mouse_dragged(&mut self, state: &mut SketchState) {
        self.stroke.push(state.mouse());
    }

    fn mouse_released(&mut self, state: &mut SketchState) {
        println!("stroke finished with {} points", self.stroke.len());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let sketch = Sketch::with_config(
        Scribble { stroke: Vec::new() },
        SketchConfig::new("Scribble").size(400.0, 300.0),
    );
    let mut runner = Runner::new(Box::new(sketch));

    let frame = AppEvent::new(ContextHolder::empty(), Size::new(400.0, 300.0), 1.0);
    let mods = Modifiers::default();

    // A short synthetic session: press, drag across a few frames, release.
    for i in 0..10u32 {
        match i {
            2 => runner.handle_input(&InputEvent::from(MouseEvent::down(
                Point::new(50.0, 50.0),
                MouseButton::Left,
                mods,
            ))),
            3..=6 => {
                let t = i as f32;
                runner.handle_input(&InputEvent::from(MouseEvent::drag(
                    Point::new(50.0 + t * 20.0, 50.0 + t * 10.0),
                    MouseButton::Left,
                    mods,
                )));
            }
            7 => runner.handle_input(&InputEvent::from(MouseEvent::up(
                Point::new(190.0, 120.0),
                MouseButton::Left,
                mods,
            ))),
            _ => {}
        }
        runner.update(&frame);
        runner.draw(&frame);
    }

    runner.exit(&AppEvent::default());
}
