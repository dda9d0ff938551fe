mod vk_api;

pub use vk_api::*;
