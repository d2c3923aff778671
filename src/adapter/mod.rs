mod inference;

pub use inference::{InferenceAdapter, MODEL_ID};
