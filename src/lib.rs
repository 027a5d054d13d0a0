// Gyeol: rule-based mentor recommendation
//
// This is the library root. Each module corresponds to a major subsystem
// of the recommendation flow: raw profiles are normalized, scored against
// the mentee, ranked, and rendered or exported.

pub mod config;
pub mod data;
pub mod matching;
pub mod output;
pub mod profile;
pub mod status;
