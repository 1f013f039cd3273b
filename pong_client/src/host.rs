use glam::{UVec2, Vec2};
use pong_core::{InputEvent, Mode, RenderError};

/// Drives a mode from browser callbacks
pub struct ModeHost {
    mode: Box<dyn Mode>,
    window_size: UVec2,
    last_timestamp_ms: Option<f64>,
}

impl ModeHost {
    pub fn new(mode: Box<dyn Mode>, window_size: UVec2) -> Self {
        Self {
            mode,
            window_size,
            last_timestamp_ms: None,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = UVec2::new(width, height);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let event = InputEvent::PointerMotion {
            pos: Vec2::new(x, y),
        };
        self.mode.handle_event(&event, self.window_size);
    }

    /// One animation frame. Recoverable surface errors skip the frame.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), RenderError> {
        let elapsed = self.elapsed_seconds(timestamp_ms);
        if !self.mode.is_complete() {
            self.mode.update(elapsed);
        }
        match self.mode.draw(self.window_size) {
            Err(RenderError::SurfaceLost | RenderError::SurfaceOutdated | RenderError::Timeout) => {
                log::warn!("skipped frame");
                Ok(())
            }
            other => other,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.mode.is_complete()
    }

    fn elapsed_seconds(&mut self, timestamp_ms: f64) -> f32 {
        let elapsed = match self.last_timestamp_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        updates: Vec<f32>,
        draws: Vec<UVec2>,
        pointer: Option<Vec2>,
    }

    /// Mode double that records calls and fails draws on demand
    struct StubMode {
        calls: Rc<RefCell<Calls>>,
        complete: bool,
        draw_error: DrawError,
    }

    impl Mode for StubMode {
        fn handle_event(&mut self, event: &InputEvent, _window_size: UVec2) -> bool {
            if let InputEvent::PointerMotion { pos } = event {
                self.calls.borrow_mut().pointer = Some(*pos);
            }
            false
        }

        fn update(&mut self, elapsed: f32) {
            self.calls.borrow_mut().updates.push(elapsed);
        }

        fn draw(&mut self, drawable_size: UVec2) -> Result<(), RenderError> {
            self.calls.borrow_mut().draws.push(drawable_size);
            match self.draw_error {
                Some(make) => Err(make()),
                None => Ok(()),
            }
        }

        fn is_complete(&self) -> bool {
            self.complete
        }
    }

    type DrawError = Option<fn() -> RenderError>;

    fn stub_host(complete: bool, draw_error: DrawError) -> (ModeHost, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mode = StubMode {
            calls: calls.clone(),
            complete,
            draw_error,
        };
        (ModeHost::new(Box::new(mode), UVec2::new(800, 600)), calls)
    }

    #[test]
    fn test_first_frame_has_zero_elapsed() {
        let (mut host, calls) = stub_host(false, None);
        host.frame(1234.0).unwrap();
        assert_eq!(calls.borrow().updates, vec![0.0]);
    }

    #[test]
    fn test_elapsed_is_timestamp_delta_in_seconds() {
        let (mut host, calls) = stub_host(false, None);
        host.frame(1000.0).unwrap();
        host.frame(1016.0).unwrap();
        let updates = calls.borrow().updates.clone();
        assert_eq!(updates.len(), 2);
        assert!((updates[1] - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let (mut host, calls) = stub_host(false, None);
        host.frame(2000.0).unwrap();
        host.frame(1500.0).unwrap();
        host.frame(1516.0).unwrap();
        let updates = calls.borrow().updates.clone();
        assert_eq!(updates[1], 0.0);
        assert!((updates[2] - 0.016).abs() < 1e-6, "delta measured from the last frame");
    }

    #[test]
    fn test_complete_mode_is_drawn_but_not_updated() {
        let (mut host, calls) = stub_host(true, None);
        host.frame(0.0).unwrap();
        host.frame(16.0).unwrap();
        assert!(host.is_complete());
        assert!(calls.borrow().updates.is_empty());
        assert_eq!(calls.borrow().draws.len(), 2);
    }

    #[test]
    fn test_recoverable_draw_errors_skip_the_frame() {
        let recoverable: [fn() -> RenderError; 3] = [
            || RenderError::SurfaceLost,
            || RenderError::SurfaceOutdated,
            || RenderError::Timeout,
        ];
        for make in recoverable {
            let (mut host, calls) = stub_host(false, Some(make));
            assert!(host.frame(0.0).is_ok());
            assert_eq!(calls.borrow().draws.len(), 1);
        }
    }

    #[test]
    fn test_fatal_draw_errors_propagate() {
        let out_of_memory: fn() -> RenderError = || RenderError::OutOfMemory;
        let (mut host, _calls) = stub_host(false, Some(out_of_memory));
        assert!(matches!(host.frame(0.0), Err(RenderError::OutOfMemory)));

        let other: fn() -> RenderError = || RenderError::Other("device gone".into());
        let (mut host, _calls) = stub_host(false, Some(other));
        assert!(matches!(host.frame(0.0), Err(RenderError::Other(_))));
    }

    #[test]
    fn test_resize_changes_drawable_size() {
        let (mut host, calls) = stub_host(false, None);
        host.resize(1024, 768);
        host.pointer_moved(10.0, 20.0);
        host.frame(0.0).unwrap();
        assert_eq!(calls.borrow().draws, vec![UVec2::new(1024, 768)]);
        assert_eq!(calls.borrow().pointer, Some(Vec2::new(10.0, 20.0)));
    }
}
