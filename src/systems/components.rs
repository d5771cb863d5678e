use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::{IVec2, UVec2};
use rand::rngs::SmallRng;

use crate::constants::{physics, SCREEN_HEIGHT};

/// An axis-aligned rectangle in canvas pixels, anchored at its top-left corner.
///
/// Edges follow the half-open convention: `right` and `bottom` are one past the
/// last covered pixel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub position: IVec2,
    pub size: UVec2,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }

    /// Creates bounds of the given size centered on `center` (rounding toward the top-left).
    pub fn from_center(center: IVec2, size: UVec2) -> Self {
        Self {
            position: center - (size / 2).as_ivec2(),
            size,
        }
    }

    pub fn width(&self) -> i32 {
        self.size.x as i32
    }

    pub fn height(&self) -> i32 {
        self.size.y as i32
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.width()
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.height()
    }

    pub fn center(&self) -> IVec2 {
        self.position + (self.size / 2).as_ivec2()
    }

    pub fn set_top(&mut self, top: i32) {
        self.position.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.position.y = bottom - self.height();
    }

    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right() && other.left() < self.right() && self.top() < other.bottom() && other.top() < self.bottom()
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

/// The image (and therefore the collision mask) an entity is drawn with.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Bird,
    SmallBird,
    Obstacle,
    PowerUp,
    Missile,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 5] = [
        SpriteKind::Bird,
        SpriteKind::SmallBird,
        SpriteKind::Obstacle,
        SpriteKind::PowerUp,
        SpriteKind::Missile,
    ];

    pub fn size(&self) -> UVec2 {
        match self {
            SpriteKind::Bird => physics::BIRD_SIZE,
            SpriteKind::SmallBird => physics::SMALL_BIRD_SIZE,
            SpriteKind::Obstacle => physics::OBSTACLE_SIZE,
            SpriteKind::PowerUp => physics::POWERUP_SIZE,
            SpriteKind::Missile => physics::MISSILE_SIZE,
        }
    }
}

/// The bird's current size and, while shrunk, when the shrink began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdSize {
    Normal,
    Shrunk { since_ms: u64 },
}

/// The player-controlled bird.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Vertical velocity in pixels per frame; negative is upward.
    pub velocity: f32,
    pub size: BirdSize,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            velocity: 0.0,
            size: BirdSize::Normal,
        }
    }
}

impl Bird {
    /// Where a freshly spawned bird sits.
    pub fn spawn_bounds() -> Bounds {
        Bounds::from_center(physics::BIRD_START_CENTER, physics::BIRD_SIZE)
    }

    pub fn is_shrunk(&self) -> bool {
        matches!(self.size, BirdSize::Shrunk { .. })
    }

    pub fn sprite(&self) -> SpriteKind {
        match self.size {
            BirdSize::Normal => SpriteKind::Bird,
            BirdSize::Shrunk { .. } => SpriteKind::SmallBird,
        }
    }

    /// Replaces the vertical velocity with an upward kick.
    pub fn jump(&mut self) {
        self.velocity = -physics::JUMP_STRENGTH;
    }

    /// Advances the bird by one frame.
    ///
    /// An expired shrink is reverted before moving, so the clamp always applies
    /// to the size the bird ends the frame with. Returns true if the bird hit
    /// the ceiling or the floor.
    pub fn update(&mut self, bounds: &mut Bounds, now_ms: u64) -> bool {
        if let BirdSize::Shrunk { since_ms } = self.size {
            if now_ms.saturating_sub(since_ms) >= physics::SHRINK_DURATION_MS {
                self.reset_size(bounds);
            }
        }

        self.velocity += physics::GRAVITY;
        bounds.position.y += self.velocity as i32;

        if bounds.top() < 0 {
            bounds.set_top(0);
            self.velocity = 0.0;
            true
        } else if bounds.bottom() > SCREEN_HEIGHT {
            bounds.set_bottom(SCREEN_HEIGHT);
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    /// Switches to the small sprite around the current center and (re)starts the shrink timer.
    pub fn shrink(&mut self, bounds: &mut Bounds, now_ms: u64) {
        *bounds = Bounds::from_center(bounds.center(), physics::SMALL_BIRD_SIZE);
        self.size = BirdSize::Shrunk { since_ms: now_ms };
    }

    fn reset_size(&mut self, bounds: &mut Bounds) {
        *bounds = Bounds::from_center(bounds.center(), physics::BIRD_SIZE);
        self.size = BirdSize::Normal;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleRole {
    Top,
    Bottom,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub role: ObstacleRole,
}

/// A collectible that shrinks the bird.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PowerUp;

/// A fast-moving hazard. Nothing spawns missiles on a timer; see `Game::spawn_missile`.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Missile;

/// Marks entities whose collision with the bird ends the run.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Hazard;

/// Constant leftward movement, in pixels per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub speed: i32,
}

impl Scroll {
    /// Moves the bounds one frame to the left.
    ///
    /// Returns true once the entity has fully left the screen.
    pub fn apply(&self, bounds: &mut Bounds) -> bool {
        bounds.position.x -= self.speed;
        bounds.right() < 0
    }
}

#[derive(Bundle)]
pub struct BirdBundle {
    pub bird: Bird,
    pub bounds: Bounds,
}

impl Default for BirdBundle {
    fn default() -> Self {
        Self {
            bird: Bird::default(),
            bounds: Bird::spawn_bounds(),
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    pub obstacle: Obstacle,
    pub bounds: Bounds,
    pub sprite: SpriteKind,
    pub scroll: Scroll,
    pub hazard: Hazard,
}

impl ObstacleBundle {
    pub fn new(role: ObstacleRole, bounds: Bounds) -> Self {
        Self {
            obstacle: Obstacle { role },
            bounds,
            sprite: SpriteKind::Obstacle,
            scroll: Scroll {
                speed: physics::SCROLL_SPEED,
            },
            hazard: Hazard,
        }
    }
}

#[derive(Bundle)]
pub struct PowerUpBundle {
    pub power_up: PowerUp,
    pub bounds: Bounds,
    pub sprite: SpriteKind,
    pub scroll: Scroll,
}

impl PowerUpBundle {
    pub fn at(position: IVec2) -> Self {
        Self {
            power_up: PowerUp,
            bounds: Bounds {
                position,
                size: physics::POWERUP_SIZE,
            },
            sprite: SpriteKind::PowerUp,
            scroll: Scroll {
                speed: physics::SCROLL_SPEED,
            },
        }
    }
}

#[derive(Bundle)]
pub struct MissileBundle {
    pub missile: Missile,
    pub bounds: Bounds,
    pub sprite: SpriteKind,
    pub scroll: Scroll,
    pub hazard: Hazard,
}

impl MissileBundle {
    pub fn at(position: IVec2) -> Self {
        Self {
            missile: Missile,
            bounds: Bounds {
                position,
                size: physics::MISSILE_SIZE,
            },
            sprite: SpriteKind::Missile,
            scroll: Scroll {
                speed: physics::MISSILE_SPEED,
            },
            hazard: Hazard,
        }
    }
}

/// Wall-clock time elapsed since the previous frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime {
    pub millis: u64,
}

/// Milliseconds elapsed since the run started, advanced once per frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GameClock {
    pub now_ms: u64,
}

/// The difficulty tier of the current run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedMultiplier(pub u32);

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Resource)]
pub struct GameRng(pub SmallRng);

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The bird hit a hazard.
    Collided,
    /// The score reached the level-up threshold.
    LevelUp,
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct RunState {
    pub outcome: Option<RunOutcome>,
}
