pub mod annotation;
pub mod pipeline;
pub mod recognition;
pub mod shared;
