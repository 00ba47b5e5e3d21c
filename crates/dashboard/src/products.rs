//! The product list page: server-side pagination, search, delete with
//! confirmation and the add/edit dialog.
//!
//! Every list request takes a generation number. Only the response to the
//! most recent request may touch the page state; older ones are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use pazarin_core::entity::Pagination;
use pazarin_core::format::format_rupiah;
use pazarin_core::image::resolve_image_url;
use pazarin_core::modal::ModalState;
use pazarin_core::product::ProductEntity;
use pazarin_core::query::{ListQuery, DEFAULT_PAGE_SIZE};
use pazarin_core::types::DbId;
use tokio::sync::Mutex;

use crate::auth::Auth;
use crate::error::DashboardError;
use crate::product_form::ProductEditor;
use crate::Services;

/// A page/page-size change reported by the grid. `page` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationChange {
    pub page: u32,
    pub page_size: u32,
    /// Why the grid changed the model; changes without one are the grid
    /// syncing its own state and are ignored.
    pub reason: Option<String>,
}

/// What happened to a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued meanwhile; the response was discarded.
    Superseded,
    /// The request failed; the error went to the snackbar.
    Failed,
}

/// Row awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: DbId,
    pub unique_name: String,
}

/// A product as the grid renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: DbId,
    pub stock: Option<i64>,
    pub unique_name: String,
    pub image_url: String,
    pub price: String,
    pub base_price: String,
}

#[derive(Debug, Clone)]
pub struct ProductListState {
    pub rows: Vec<ProductEntity>,
    pub pagination: Pagination,
    /// Text in the search box, submitted or not.
    pub search: String,
    /// Search of the list currently on screen.
    pub applied_search: String,
    pub loading: bool,
    pub deleting: bool,
    pub modal: ModalState<ProductEntity>,
    pub pending_delete: Option<PendingDelete>,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::empty(DEFAULT_PAGE_SIZE),
            search: String::new(),
            applied_search: String::new(),
            loading: false,
            deleting: false,
            modal: ModalState::Closed,
            pending_delete: None,
        }
    }
}

fn list_query(page: u32, page_size: u32, search: &str) -> ListQuery {
    let query = ListQuery::page(page, page_size);
    match search.trim() {
        "" => query,
        search => query.with_search(search),
    }
}

impl ProductListState {
    /// Query for `page`/`page_size` carrying the search box text.
    fn query(&self, page: u32, page_size: u32) -> ListQuery {
        list_query(page, page_size, &self.search)
    }

    /// Query for `page`/`page_size` of the list on screen.
    fn applied_query(&self, page: u32, page_size: u32) -> ListQuery {
        list_query(page, page_size, &self.applied_search)
    }
}

pub struct ProductPage {
    services: Services,
    auth: Auth,
    state: Mutex<ProductListState>,
    generation: AtomicU64,
}

impl ProductPage {
    pub fn new(services: Services, auth: Auth) -> Self {
        Self {
            services,
            auth,
            state: Mutex::new(ProductListState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> ProductListState {
        self.state.lock().await.clone()
    }

    /// Rows formatted for the grid.
    pub async fn rows(&self) -> Vec<ProductRow> {
        let base_url = self.services.cms.base_url();
        self.state
            .lock()
            .await
            .rows
            .iter()
            .map(|product| {
                let attrs = &product.attributes;
                ProductRow {
                    id: product.id,
                    stock: attrs.stock,
                    unique_name: attrs.unique_name.clone(),
                    image_url: attrs
                        .image
                        .url()
                        .map(|url| resolve_image_url(base_url, url))
                        .unwrap_or_default(),
                    price: format_rupiah(attrs.price.as_deref()),
                    base_price: format_rupiah(attrs.base_price.as_deref()),
                }
            })
            .collect()
    }

    /// First page, default page size, no filter. A failure leaves an empty
    /// grid.
    pub async fn load(&self) -> FetchOutcome {
        self.fetch(ListQuery::page(1, DEFAULT_PAGE_SIZE), true).await
    }

    pub async fn on_pagination_model_change(&self, change: PaginationChange) -> Option<FetchOutcome> {
        if change.reason.is_none() {
            return None;
        }
        let query = self
            .state
            .lock()
            .await
            .query(change.page.saturating_add(1), change.page_size);
        Some(self.fetch(query, false).await)
    }

    pub async fn set_search(&self, text: impl Into<String>) {
        self.state.lock().await.search = text.into();
    }

    /// Apply the search box to the current page.
    pub async fn on_search_enter(&self) -> FetchOutcome {
        let query = {
            let state = self.state.lock().await;
            state.query(state.pagination.page, state.pagination.page_size)
        };
        self.fetch(query, false).await
    }

    /// Reload the list on screen; unsubmitted search text is left alone.
    pub async fn refetch(&self) -> FetchOutcome {
        let query = {
            let state = self.state.lock().await;
            state.applied_query(state.pagination.page, state.pagination.page_size)
        };
        self.fetch(query, false).await
    }

    async fn fetch(&self, query: ListQuery, reset_on_error: bool) -> FetchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().await.loading = true;
        tracing::debug!(generation, page = query.page, page_size = query.page_size, search = ?query.search, "Fetching products");

        let token = self.auth.token();
        let result = self.services.cms.list_products(&token, &query).await;

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding superseded product list");
            return FetchOutcome::Superseded;
        }
        state.loading = false;

        match result {
            Ok(list) => {
                state.rows = list.data;
                state.pagination = list.meta.pagination;
                state.applied_search = query.search.unwrap_or_default();
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetching products failed");
                self.services.snackbar.error(e.user_message());
                if reset_on_error {
                    state.rows.clear();
                    state.pagination = Pagination::empty(DEFAULT_PAGE_SIZE);
                    state.applied_search.clear();
                }
                FetchOutcome::Failed
            }
        }
    }

    pub async fn request_delete(&self, id: DbId, unique_name: impl Into<String>) {
        self.state.lock().await.pending_delete = Some(PendingDelete {
            id,
            unique_name: unique_name.into(),
        });
    }

    pub async fn cancel_delete(&self) {
        self.state.lock().await.pending_delete = None;
    }

    /// Delete the product awaiting confirmation, then reload the list once.
    ///
    /// Removing the only row of the last page reloads the page before it.
    pub async fn confirm_delete(&self) -> Result<FetchOutcome, DashboardError> {
        let (pending, target_query) = {
            let mut state = self.state.lock().await;
            let Some(pending) = state.pending_delete.take() else {
                return Err(DashboardError::Validation(
                    "No product selected for deletion".into(),
                ));
            };
            state.deleting = true;

            let pagination = state.pagination;
            let page = if state.rows.len() == 1 && pagination.page > 1 && pagination.is_last_page()
            {
                pagination.page - 1
            } else {
                pagination.page
            };
            (pending, state.applied_query(page, pagination.page_size))
        };

        let token = self.auth.token();
        let result = self.services.cms.delete_product(&token, pending.id).await;
        self.state.lock().await.deleting = false;

        match result {
            Ok(deleted) => {
                let name = match deleted.data.attributes.unique_name.as_str() {
                    "" => pending.unique_name.as_str(),
                    name => name,
                };
                tracing::info!(product_id = pending.id, "Product deleted");
                self.services
                    .snackbar
                    .success(format!("Product \"{name}\" deleted"));
                Ok(self.fetch(target_query, false).await)
            }
            Err(e) => {
                tracing::warn!(product_id = pending.id, error = %e, "Deleting product failed");
                self.services.snackbar.error(e.user_message());
                Err(e.into())
            }
        }
    }

    pub async fn open_create(&self) {
        self.state.lock().await.modal.open_create();
    }

    pub async fn open_edit(&self, product: ProductEntity) {
        self.state.lock().await.modal.open_edit(product);
    }

    pub async fn close_modal(&self) {
        self.state.lock().await.modal.close();
    }

    pub async fn modal(&self) -> ModalState<ProductEntity> {
        self.state.lock().await.modal.clone()
    }

    /// Editor for the open dialog, or `None` when it is closed.
    pub async fn editor(&self) -> Option<ProductEditor> {
        let target = match &self.state.lock().await.modal {
            ModalState::Closed => return None,
            ModalState::CreatingNew => None,
            ModalState::Editing(product) => Some(product.clone()),
        };
        Some(ProductEditor::new(
            self.services.clone(),
            self.auth.clone(),
            target,
        ))
    }

    pub async fn on_create_or_edit_success(&self) -> FetchOutcome {
        self.close_modal().await;
        self.refetch().await
    }

    /// Save the dialog; on success close it and reload the current page.
    /// A failed save keeps the dialog open.
    pub async fn submit_editor(
        &self,
        editor: &mut ProductEditor,
    ) -> Result<ProductEntity, DashboardError> {
        let saved = editor.submit().await?;
        self.on_create_or_edit_success().await;
        Ok(saved)
    }
}
