//! # Admin Commands
//!
//! Moderation queue: list pending products, approve or reject them.

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use market_core::validation::validate_product_id;
use market_core::{Product, ProtectedView};
use market_store::KeyValueStore;

use crate::api::ProductSource;
use crate::error::{ApiError, ApiResult};
use crate::notice::Notice;
use crate::state::SessionStore;

/// Outcome of a moderation action. The UI drops `id` from its list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResponse {
    pub id: String,
    pub notice: Notice,
}

/// Lists products awaiting approval.
pub async fn pending_products<S: KeyValueStore>(
    session: &SessionStore<S>,
    source: &dyn ProductSource,
) -> ApiResult<Vec<Product>> {
    let token = session.require(ProtectedView::AdminDashboard)?;
    debug!("pending_products command");

    source.pending_products(token).await.map_err(|e| {
        warn!(error = %e, "Failed to load pending products");
        ApiError::from(e).with_notice(Notice::error(
            "Failed to load pending products. Please try again.",
        ))
    })
}

/// Publishes a pending product.
pub async fn approve_product<S: KeyValueStore>(
    session: &SessionStore<S>,
    source: &dyn ProductSource,
    id: &str,
) -> ApiResult<ModerationResponse> {
    let token = session.require(ProtectedView::AdminDashboard)?;
    validate_product_id(id)?;
    debug!(product_id = %id, "approve_product command");

    source.approve_product(token, id).await?;
    info!(product_id = %id, "Product approved");

    Ok(ModerationResponse {
        id: id.to_string(),
        notice: Notice::product_approved(),
    })
}

/// Rejects a pending product. The backend deletes it.
pub async fn reject_product<S: KeyValueStore>(
    session: &SessionStore<S>,
    source: &dyn ProductSource,
    id: &str,
) -> ApiResult<ModerationResponse> {
    let token = session.require(ProtectedView::AdminDashboard)?;
    validate_product_id(id)?;
    debug!(product_id = %id, "reject_product command");

    source.reject_product(token, id).await?;
    info!(product_id = %id, "Product rejected");

    Ok(ModerationResponse {
        id: id.to_string(),
        notice: Notice::product_rejected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeSource;
    use crate::error::ErrorCode;
    use market_core::{Identity, ProductStatus, Role};
    use market_store::MemoryStore;

    fn session(role: Role) -> SessionStore<MemoryStore> {
        let mut session = SessionStore::init(MemoryStore::new());
        session.login("tok", Identity::new("x1", "someone@shop.io", role));
        session
    }

    fn pending() -> Vec<Product> {
        let mut products = market_core::catalog::demo_products();
        for product in &mut products {
            product.status = ProductStatus::Pending;
        }
        products
    }

    #[tokio::test]
    async fn test_pending_products() {
        let source = FakeSource::with_products(pending());
        let products = pending_products(&session(Role::Admin), &source).await.unwrap();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(Product::is_pending));
    }

    #[tokio::test]
    async fn test_pending_failure_notice() {
        let err = pending_products(&session(Role::Admin), &FakeSource::offline())
            .await
            .unwrap_err();
        assert_eq!(
            err.notice.description,
            "Failed to load pending products. Please try again."
        );
    }

    #[tokio::test]
    async fn test_approve_and_reject() {
        let source = FakeSource::with_products(pending());
        let admin = session(Role::Admin);

        let approved = approve_product(&admin, &source, "1").await.unwrap();
        assert_eq!(approved.id, "1");
        assert_eq!(approved.notice, Notice::product_approved());

        let rejected = reject_product(&admin, &source, "2").await.unwrap();
        assert_eq!(rejected.notice, Notice::product_rejected());

        assert_eq!(source.moderated(), vec!["approve:1", "reject:2"]);
    }

    #[tokio::test]
    async fn test_moderation_requires_admin() {
        let source = FakeSource::with_products(pending());

        for role in [Role::User, Role::Vendor] {
            let err = approve_product(&session(role), &source, "1").await.unwrap_err();
            assert_eq!(err.code, ErrorCode::Forbidden);
        }
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_id_rejected_before_network() {
        let source = FakeSource::with_products(pending());
        let err = reject_product(&session(Role::Admin), &source, "  ")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_backend_message_reaches_notice() {
        let source = FakeSource::failing_with(404, "Product not found");
        let err = approve_product(&session(Role::Admin), &source, "9")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.notice.description, "Product not found");
    }
}
