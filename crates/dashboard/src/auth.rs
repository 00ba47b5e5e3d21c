//! Who is signed in.
//!
//! The token lives in the relay's cookie; [`Auth`] asks the relay for it,
//! fetches the matching CMS profile and publishes the result on a watch
//! channel. Any failure along the way reads as "signed out".

use std::sync::Arc;

use pazarin_core::gate::LOGIN_PATH;
use pazarin_core::user::UserDetail;
use tokio::sync::watch;

use crate::error::DashboardError;
use crate::Services;

#[derive(Clone)]
pub struct Auth {
    services: Services,
    user: Arc<watch::Sender<UserDetail>>,
}

impl Auth {
    /// Starts out anonymous; call [`Auth::refetch_detail_user`] to load.
    pub fn new(services: Services) -> Self {
        let (tx, _rx) = watch::channel(UserDetail::anonymous());
        Self {
            services,
            user: Arc::new(tx),
        }
    }

    /// Reload the user from the relay token and the CMS profile.
    pub async fn refetch_detail_user(&self) -> UserDetail {
        let user = self.fetch_user().await;
        tracing::debug!(
            user_id = user.id,
            authenticated = user.is_authenticated(),
            "Refetched user"
        );
        self.user.send_replace(user.clone());
        user
    }

    async fn fetch_user(&self) -> UserDetail {
        let session = match self.services.relay.get_jwt().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session from relay");
                return UserDetail::anonymous();
            }
        };
        if session.jwt.is_empty() {
            return UserDetail::anonymous();
        }

        match self.services.cms.me(&session.jwt).await {
            Ok(user) => user.with_jwt(session.jwt),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load user profile");
                UserDetail::anonymous()
            }
        }
    }

    pub fn detail_user(&self) -> UserDetail {
        self.user.borrow().clone()
    }

    /// Bearer token for CMS calls; empty when signed out.
    pub fn token(&self) -> String {
        self.user.borrow().jwt.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<UserDetail> {
        self.user.subscribe()
    }

    /// Sign in with username/email and password, store the token in the
    /// relay cookie and load the profile.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<UserDetail, DashboardError> {
        match self.try_login(identifier, password).await {
            Ok(message) => {
                self.services.snackbar.success(message);
                Ok(self.refetch_detail_user().await)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.services.snackbar.error(e.user_message());
                Err(e)
            }
        }
    }

    async fn try_login(&self, identifier: &str, password: &str) -> Result<String, DashboardError> {
        let login = self.services.cms.login(identifier, password).await?;
        let ack = self
            .services
            .relay
            .set_jwt(&login.jwt, Some(login.user.id))
            .await?;
        tracing::info!(user_id = login.user.id, "Signed in");
        Ok(ack.message)
    }

    /// Clear the session and return the page to navigate to.
    pub async fn logout(&self) -> Result<&'static str, DashboardError> {
        match self.services.relay.logout().await {
            Ok(ack) => {
                tracing::info!("Signed out");
                self.services.snackbar.success(ack.message);
                self.refetch_detail_user().await;
                Ok(LOGIN_PATH)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logout failed");
                self.services.snackbar.error(e.user_message());
                Err(e.into())
            }
        }
    }
}
