pub mod client;
pub mod dto;
pub mod normalize;
