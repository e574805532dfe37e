mod client;

pub use client::{SpoonacularClient, SpoonacularError};
