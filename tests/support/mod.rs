#![allow(dead_code)]

pub mod config_env;
#[path = "../../src/mock_service.rs"]
pub mod mock_service;
