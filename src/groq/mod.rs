//! Groq API integration.

pub mod client;

pub use client::{Client, GROQ_API_URL, Message, Role};
