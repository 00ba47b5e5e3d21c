#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pazarin_cms::{CmsError, LoginResponse};
use pazarin_core::entity::{Entity, ListMeta, ListResponse, Pagination, SingleResponse};
use pazarin_core::product::{unique_name, ProductAttributes, ProductEntity, ProductPayload};
use pazarin_core::query::ListQuery;
use pazarin_core::relay::{JwtCookieResponse, RelayAck, LOGIN_SUCCESS_MESSAGE, LOGOUT_SUCCESS_MESSAGE};
use pazarin_core::shop::{ShopAttributes, ShopEntity, ShopPayload};
use pazarin_core::types::DbId;
use pazarin_core::upload::ImageUpload;
use pazarin_core::user::UserDetail;
use pazarin_dashboard::auth::Auth;
use pazarin_dashboard::backend::CmsBackend;
use pazarin_dashboard::relay::{RelayError, SessionRelay};
use pazarin_dashboard::Services;

pub const TOKEN: &str = "tok-1";
pub const USER_ID: DbId = 1;
pub const CMS_BASE: &str = "http://cms.test/api";

/// One recorded CMS call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Me(String),
    List(ListQuery),
    Delete(DbId),
    Create {
        payload: ProductPayload,
        image: Option<String>,
    },
    Update {
        id: DbId,
        payload: ProductPayload,
        image: Option<String>,
    },
    FindShop(DbId),
    UpdateShop {
        id: DbId,
        payload: ShopPayload,
        photo: Option<String>,
    },
}

/// In-memory CMS that records every call.
#[derive(Default)]
pub struct FakeCms {
    pub products: Mutex<Vec<ProductEntity>>,
    pub shops: Mutex<Vec<(DbId, ShopEntity)>>,
    pub calls: Mutex<Vec<Call>>,
    /// Artificial latency of list calls, by requested page.
    pub list_delays: Mutex<HashMap<u32, Duration>>,
    /// `(status, message)` returned by the next matching call.
    pub fail_list: Mutex<Option<(u16, String)>>,
    pub fail_delete: Mutex<Option<(u16, String)>>,
    pub fail_save: Mutex<Option<(u16, String)>>,
}

impl FakeCms {
    pub fn with_products(products: Vec<ProductEntity>) -> Arc<Self> {
        let cms = Self::default();
        *cms.products.lock().unwrap() = products;
        Arc::new(cms)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<ListQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub fn delete_calls(&self) -> Vec<DbId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_token(token: &str) -> Result<(), CmsError> {
        if token == TOKEN {
            Ok(())
        } else {
            Err(CmsError::Api {
                status: 401,
                message: "Missing or invalid credentials".into(),
            })
        }
    }

    fn take_failure(slot: &Mutex<Option<(u16, String)>>) -> Result<(), CmsError> {
        match slot.lock().unwrap().take() {
            Some((status, message)) => Err(CmsError::Api { status, message }),
            None => Ok(()),
        }
    }
}

fn attributes_from(payload: &ProductPayload) -> ProductAttributes {
    ProductAttributes {
        name: payload.name.clone(),
        price: Some(payload.price.clone()),
        base_price: Some(payload.base_price.clone()),
        unit: payload.unit.clone(),
        stock: payload.stock,
        product_id: Some(payload.product_id.clone()),
        unique_name: payload.unique_name.clone(),
        ..ProductAttributes::default()
    }
}

#[async_trait]
impl CmsBackend for FakeCms {
    fn base_url(&self) -> &str {
        CMS_BASE
    }

    async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, CmsError> {
        self.record(Call::Login(identifier.to_string()));
        if identifier == "admin" && password == "secret" {
            Ok(LoginResponse {
                jwt: TOKEN.into(),
                user: user(),
            })
        } else {
            Err(CmsError::Api {
                status: 400,
                message: "Invalid identifier or password".into(),
            })
        }
    }

    async fn me(&self, token: &str) -> Result<UserDetail, CmsError> {
        self.record(Call::Me(token.to_string()));
        Self::check_token(token)?;
        Ok(user())
    }

    async fn list_products(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<ListResponse<ProductAttributes>, CmsError> {
        self.record(Call::List(query.clone()));
        let delay = self.list_delays.lock().unwrap().get(&query.page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Self::take_failure(&self.fail_list)?;
        Self::check_token(token)?;

        let needle = query.search.as_deref().unwrap_or("").to_lowercase();
        let matching: Vec<ProductEntity> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.attributes.unique_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let page_size = query.page_size.max(1);
        let page_count = (matching.len() as u32).div_ceil(page_size).max(1);
        let start = (u64::from(query.page - 1) * u64::from(page_size)) as usize;
        let data = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(ListResponse {
            data,
            meta: ListMeta {
                pagination: Pagination {
                    page: query.page,
                    page_size,
                    page_count,
                    total,
                },
            },
        })
    }

    async fn delete_product(
        &self,
        token: &str,
        id: DbId,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        self.record(Call::Delete(id));
        Self::take_failure(&self.fail_delete)?;
        Self::check_token(token)?;

        let mut products = self.products.lock().unwrap();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CmsError::Api {
                status: 404,
                message: "Not Found".into(),
            })?;
        Ok(SingleResponse {
            data: products.remove(index),
        })
    }

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        self.record(Call::Create {
            payload: payload.clone(),
            image: image.map(|i| i.file_name.clone()),
        });
        Self::take_failure(&self.fail_save)?;
        Self::check_token(token)?;

        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let entity = Entity {
            id,
            attributes: attributes_from(payload),
        };
        products.push(entity.clone());
        Ok(SingleResponse { data: entity })
    }

    async fn update_product(
        &self,
        token: &str,
        id: DbId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        self.record(Call::Update {
            id,
            payload: payload.clone(),
            image: image.map(|i| i.file_name.clone()),
        });
        Self::take_failure(&self.fail_save)?;
        Self::check_token(token)?;

        let entity = Entity {
            id,
            attributes: attributes_from(payload),
        };
        let mut products = self.products.lock().unwrap();
        if let Some(existing) = products.iter_mut().find(|p| p.id == id) {
            *existing = entity.clone();
        }
        Ok(SingleResponse { data: entity })
    }

    async fn find_shop(
        &self,
        token: &str,
        owner_id: DbId,
    ) -> Result<Option<ShopEntity>, CmsError> {
        self.record(Call::FindShop(owner_id));
        Self::check_token(token)?;
        Ok(self
            .shops
            .lock()
            .unwrap()
            .iter()
            .find(|(owner, _)| *owner == owner_id)
            .map(|(_, shop)| shop.clone()))
    }

    async fn update_shop(
        &self,
        token: &str,
        id: DbId,
        payload: &ShopPayload,
        photo: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ShopAttributes>, CmsError> {
        self.record(Call::UpdateShop {
            id,
            payload: payload.clone(),
            photo: photo.map(|p| p.file_name.clone()),
        });
        Self::take_failure(&self.fail_save)?;
        Self::check_token(token)?;

        Ok(SingleResponse {
            data: Entity {
                id,
                attributes: ShopAttributes {
                    name: payload.name.clone(),
                    address: payload.address.clone(),
                    ..ShopAttributes::default()
                },
            },
        })
    }
}

/// In-memory relay holding one session, like the browser's cookie jar.
#[derive(Default)]
pub struct FakeRelay {
    pub session: Mutex<Option<(String, Option<DbId>)>>,
    pub fail: Mutex<bool>,
}

impl FakeRelay {
    pub fn signed_in() -> Arc<Self> {
        let relay = Self::default();
        *relay.session.lock().unwrap() = Some((TOKEN.into(), Some(USER_ID)));
        Arc::new(relay)
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn stored_token(&self) -> Option<String> {
        self.session.lock().unwrap().as_ref().map(|(jwt, _)| jwt.clone())
    }

    fn check(&self) -> Result<(), RelayError> {
        if *self.fail.lock().unwrap() {
            Err(RelayError::Api {
                status: 500,
                message: "Relay unavailable".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionRelay for FakeRelay {
    async fn get_jwt(&self) -> Result<JwtCookieResponse, RelayError> {
        self.check()?;
        let session = self.session.lock().unwrap().clone();
        Ok(JwtCookieResponse {
            success: true,
            jwt: session.as_ref().map(|(jwt, _)| jwt.clone()).unwrap_or_default(),
            user_id: session.and_then(|(_, id)| id),
        })
    }

    async fn set_jwt(&self, jwt: &str, user_id: Option<DbId>) -> Result<RelayAck, RelayError> {
        self.check()?;
        *self.session.lock().unwrap() = Some((jwt.to_string(), user_id));
        Ok(RelayAck {
            success: true,
            message: LOGIN_SUCCESS_MESSAGE.into(),
        })
    }

    async fn logout(&self) -> Result<RelayAck, RelayError> {
        self.check()?;
        *self.session.lock().unwrap() = None;
        Ok(RelayAck {
            success: true,
            message: LOGOUT_SUCCESS_MESSAGE.into(),
        })
    }
}

pub fn user() -> UserDetail {
    UserDetail {
        id: USER_ID,
        username: "admin".into(),
        email: "admin@pazarin.test".into(),
        provider: "local".into(),
        confirmed: true,
        ..UserDetail::default()
    }
}

pub fn product(id: DbId, name: &str, unit: &str, price: &str) -> ProductEntity {
    Entity {
        id,
        attributes: ProductAttributes {
            name: name.into(),
            price: Some(price.into()),
            base_price: Some("1000".into()),
            unit: unit.into(),
            stock: Some(10),
            unique_name: unique_name(name, unit),
            ..ProductAttributes::default()
        },
    }
}

/// `count` products named `Item N`.
pub fn numbered_products(count: DbId) -> Vec<ProductEntity> {
    (1..=count)
        .map(|id| product(id, &format!("Item {id}"), "pcs", "5000"))
        .collect()
}

pub fn services(cms: Arc<FakeCms>, relay: Arc<FakeRelay>) -> Services {
    Services::new(cms, relay)
}

/// Services plus an [`Auth`] that has already loaded the signed-in user.
pub async fn signed_in(cms: Arc<FakeCms>) -> (Services, Auth) {
    let services = services(cms, FakeRelay::signed_in());
    let auth = Auth::new(services.clone());
    auth.refetch_detail_user().await;
    (services, auth)
}
