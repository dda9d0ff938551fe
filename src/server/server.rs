use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_vk::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;

pub struct Server {
    pub identity_resolver: Arc<dyn IdentityResolver>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let vk_api: Arc<dyn VkApi> = match settings.vk.backend.as_str() {
            "fake" => Arc::new(FakeVkApi::new()),
            "real" => Arc::new(ReqwestVkApi::new(
                &settings.vk.base_url,
                settings.vk.timeout(),
            )?),
            other => return Err(anyhow::anyhow!("Unknown vk backend: {}", other)),
        };
        info!(backend = %settings.vk.backend, "vk api ready");

        Ok(Self::with_vk_api(vk_api))
    }

    pub fn with_vk_api(vk_api: Arc<dyn VkApi>) -> Self {
        Self {
            identity_resolver: Arc::new(RealIdentityResolver::new(vk_api)),
        }
    }
}
