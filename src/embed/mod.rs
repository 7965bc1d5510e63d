pub mod encode;
pub mod player;
