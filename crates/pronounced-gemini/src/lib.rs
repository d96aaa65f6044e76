#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// GeminiClient is generic over a crate-private HTTP backend; callers use
// the DefaultGeminiClient alias through SentenceGeneratorPort.
#![allow(private_bounds, private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod prompt;

pub use client::{DefaultGeminiClient, GeminiClient};
pub use config::{API_KEY_ENV, DEFAULT_BASE_URL, GeminiConfig};
pub use error::{GeminiError, GeminiResult};
pub use prompt::sentence_prompt;

