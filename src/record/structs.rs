pub mod timestamp;
pub mod record;
