//! The per-run simulation.
//!
//! Components, resources and the systems that advance them one frame at a time.
//! Nothing in here touches SDL except through [`audio::AudioResource`].

pub mod audio;
pub mod collision;
pub mod components;
pub mod control;
pub mod movement;
pub mod score;
pub mod spawner;

pub use self::audio::*;
pub use self::collision::*;
pub use self::components::*;
pub use self::control::*;
pub use self::movement::*;
pub use self::score::*;
pub use self::spawner::*;
