//! Controllers behind the Pazarin admin dashboard.
//!
//! Pages talk to two services: the CMS ([`backend::CmsBackend`]) and the
//! session relay ([`relay::SessionRelay`]). Both are injected through
//! [`Services`], so tests can swap in fakes.

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod product_form;
pub mod products;
pub mod relay;
pub mod shop;
pub mod snackbar;
pub mod theme;

use std::sync::Arc;

use pazarin_cms::CmsClient;

use crate::auth::Auth;
use crate::backend::CmsBackend;
use crate::config::DashboardConfig;
use crate::products::ProductPage;
use crate::relay::{HttpSessionRelay, RelayError, SessionRelay};
use crate::shop::ShopProfile;
use crate::snackbar::Snackbar;
use crate::theme::ThemeService;

/// Shared handles every controller receives.
#[derive(Clone)]
pub struct Services {
    pub cms: Arc<dyn CmsBackend>,
    pub relay: Arc<dyn SessionRelay>,
    pub snackbar: Snackbar,
}

impl Services {
    pub fn new(cms: Arc<dyn CmsBackend>, relay: Arc<dyn SessionRelay>) -> Self {
        Self {
            cms,
            relay,
            snackbar: Snackbar::new(),
        }
    }

    /// Real HTTP clients for the configured CMS and relay.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        let cms = CmsClient::with_client(http, config.cms_base_url.clone());
        let relay = HttpSessionRelay::new(config.relay_base_url.clone(), config.http_timeout())?;
        Ok(Self::new(Arc::new(cms), Arc::new(relay)))
    }
}

/// One signed-in dashboard session: app-wide state plus page controllers.
pub struct Dashboard {
    pub services: Services,
    pub auth: Auth,
    pub theme: ThemeService,
}

impl Dashboard {
    pub fn new(services: Services) -> Self {
        let auth = Auth::new(services.clone());
        Self {
            services,
            auth,
            theme: ThemeService::default(),
        }
    }

    /// Build from `.env`/environment and load the current user.
    pub async fn from_env() -> Result<Self, RelayError> {
        let config = DashboardConfig::load();
        tracing::info!(cms = %config.cms_base_url, relay = %config.relay_base_url, "Dashboard configured");

        let dashboard = Self::new(Services::from_config(&config)?);
        dashboard.auth.refetch_detail_user().await;
        Ok(dashboard)
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.services.snackbar
    }

    pub fn product_page(&self) -> ProductPage {
        ProductPage::new(self.services.clone(), self.auth.clone())
    }

    pub fn shop_profile(&self) -> ShopProfile {
        ShopProfile::new(self.services.clone(), self.auth.clone())
    }
}
