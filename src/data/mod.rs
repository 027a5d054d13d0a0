// Mentor data: loading the mentor table and exporting recommendations.

pub mod export;
pub mod loader;
