// src/handlers/mod.rs

pub mod questions;
pub mod quiz;
pub mod secret_key;
