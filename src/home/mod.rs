// src/home/mod.rs

pub mod home_page;
pub mod home_router;
