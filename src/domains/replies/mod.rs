pub mod classifier;

pub use classifier::{classify, route_text, Reply};
