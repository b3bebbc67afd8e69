#![allow(dead_code)]

pub mod config;
pub mod mock_sarvam;
pub mod server;
