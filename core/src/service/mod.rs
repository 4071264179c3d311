pub mod dto;
pub mod renderer;
pub mod shaper;
