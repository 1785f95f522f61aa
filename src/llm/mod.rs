mod client;
mod shape;
mod types;

#[cfg(test)]
pub use client::MockInferenceClient;
pub use client::{HttpInferenceClient, InferenceClient, create_inference_client};
pub use types::*;
