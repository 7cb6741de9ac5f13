//! Platform-neutral game logic. Nothing in here touches the DOM, so it builds
//! and tests on the host as well as on wasm32.

pub mod challenge;
pub mod collision;
pub mod constants;
pub mod entity;
pub mod game;
pub mod obstacles;
pub mod speech;

pub use challenge::{Challenge, ChallengeTiming, Hue, Mode, Phase};
pub use collision::Collision;
pub use entity::{Entity, Obstacle, Rect};
pub use game::{Controls, GameConfig, GameState, Status};
pub use speech::{NoSpeech, SpeechError, SpeechEvent, SpeechInput};
