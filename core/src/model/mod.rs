pub mod palette;
pub mod record;
