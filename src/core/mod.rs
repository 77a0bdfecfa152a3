pub mod compute;
pub mod distance;
