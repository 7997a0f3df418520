// src/utils/mod.rs

pub mod auth;
pub mod hash;
