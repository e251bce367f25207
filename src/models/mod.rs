pub mod card;
pub mod game_state;
pub mod scenario;
