// Profile handling: typed records, token normalization, form vocabularies.

pub mod models;
pub mod normalize;
pub mod vocab;
