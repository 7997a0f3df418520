// src/models/mod.rs

pub mod question;
pub mod quiz_result;
pub mod secret_key;
