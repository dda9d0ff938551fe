mod vk_api_fake;
mod vk_api_reqwest;
#[cfg(test)]
mod vk_api_stub;

pub use vk_api_fake::*;
pub use vk_api_reqwest::*;
#[cfg(test)]
pub use vk_api_stub::*;
