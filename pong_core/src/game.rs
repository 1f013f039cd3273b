use crate::draw::{build_vertices, clear_color};
use crate::{
    create_paddles, is_match_over, step, AiState, Config, CourtView, Events, Frame, GameRng,
    InputEvent, Mode, Paddle, RenderError, Renderer, Side, Snapshot, Spawner, Time,
};
use glam::UVec2;
use hecs::{Entity, World};

/// Single-player multi-ball Pong against a dodging AI
pub struct KillerPongMode<R: Renderer> {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub ai: AiState,
    pub spawner: Spawner,
    pub events: Events,
    pub rng: GameRng,
    pub view: CourtView,
    left_paddle: Entity,
    renderer: R,
}

impl<R: Renderer> KillerPongMode<R> {
    pub fn new(renderer: R, seed: u64) -> Self {
        Self::with_config(renderer, Config::new(), seed)
    }

    pub fn with_config(renderer: R, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let (left_paddle, _right) = create_paddles(&mut world, &config);

        Self {
            world,
            time: Time::default(),
            config,
            ai: AiState::new(),
            spawner: Spawner::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            view: CourtView::default(),
            left_paddle,
            renderer,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.ai, &self.time)
    }

    /// Move the player's paddle; clamped on the next update
    pub fn set_left_paddle_y(&mut self, y: f32) {
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.left_paddle) {
            paddle.pos.y = y;
        }
    }

    /// Winner once the match is over
    pub fn winner(&self) -> Option<Side> {
        if !self.is_complete() {
            return None;
        }
        let snapshot = self.snapshot();
        if snapshot.hp(Side::Left) == 0 {
            Some(Side::Right)
        } else {
            Some(Side::Left)
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: Renderer> Mode for KillerPongMode<R> {
    fn handle_event(&mut self, event: &InputEvent, window_size: UVec2) -> bool {
        if self.is_complete() {
            return false;
        }
        if let InputEvent::PointerMotion { pos } = event {
            let court = self.view.window_to_court(*pos, window_size);
            self.set_left_paddle_y(court.y);
        }
        // Observed, never claimed
        false
    }

    fn update(&mut self, elapsed: f32) {
        if self.is_complete() {
            return;
        }
        self.time.dt = elapsed;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.ai,
            &mut self.spawner,
            &mut self.events,
            &mut self.rng,
        );
    }

    fn draw(&mut self, drawable_size: UVec2) -> Result<(), RenderError> {
        self.view = CourtView::fit(self.config.court_radius, drawable_size);
        let vertices = build_vertices(&self.snapshot(), &self.config);
        self.renderer.submit(&Frame {
            clear_color: clear_color(),
            court_to_clip: self.view.court_to_clip,
            drawable_size,
            vertices: &vertices,
        })
    }

    fn is_complete(&self) -> bool {
        is_match_over(&self.world)
    }
}
