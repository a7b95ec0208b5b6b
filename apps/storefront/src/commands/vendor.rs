//! # Vendor Commands
//!
//! Vendor dashboard and product submission. Both check the caller's role
//! before touching the network.

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use market_core::validation::validate_submission;
use market_core::{Product, ProductSubmission, ProtectedView, ValidationError, VendorSummary};
use market_store::KeyValueStore;

use crate::api::ProductSource;
use crate::error::{ApiError, ApiResult};
use crate::notice::Notice;
use crate::state::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VendorDashboard {
    pub products: Vec<Product>,
    pub summary: VendorSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub product: Product,
    pub notice: Notice,
}

/// Loads the vendor's product list and headline numbers.
///
/// ## Errors
/// - `UNAUTHENTICATED` / `FORBIDDEN` for anyone but a vendor
/// - backend failures, with "Failed to load your products."
pub async fn vendor_dashboard<S: KeyValueStore>(
    session: &SessionStore<S>,
    source: &dyn ProductSource,
) -> ApiResult<VendorDashboard> {
    let token = session.require(ProtectedView::VendorDashboard)?;
    debug!("vendor_dashboard command");

    let products = source.pending_products(token).await.map_err(|e| {
        warn!(error = %e, "Failed to load vendor products");
        ApiError::from(e).with_notice(Notice::error(
            "Failed to load your products. Please try again.",
        ))
    })?;

    Ok(VendorDashboard {
        summary: VendorSummary::from_products(&products),
        products,
    })
}

/// Submits a product for admin approval.
///
/// ## Validation
/// ```text
/// name / description missing ──► "Missing Information"
/// price <= 0                  ──► "Invalid Price"
/// ```
pub async fn submit_product<S: KeyValueStore>(
    session: &SessionStore<S>,
    source: &dyn ProductSource,
    submission: ProductSubmission,
) -> ApiResult<SubmitResponse> {
    let token = session.require(ProtectedView::AddProduct)?;
    debug!(name = %submission.name, price = %submission.price, "submit_product command");

    validate_submission(&submission).map_err(submission_error)?;

    let product = source.add_product(token, &submission).await?;
    info!(product_id = %product.id, "Product submitted for approval");

    Ok(SubmitResponse {
        product,
        notice: Notice::product_submitted(),
    })
}

fn submission_error(err: ValidationError) -> ApiError {
    let notice = match &err {
        ValidationError::Required { .. } => Notice::missing_information(),
        ValidationError::MustBePositive { field } if field == "price" => Notice::invalid_price(),
        _ => Notice::destructive("Invalid Product", err.to_string()),
    };
    ApiError::from(err).with_notice(notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeSource;
    use crate::error::ErrorCode;
    use market_core::{Identity, Money, ProductStatus, Role};
    use market_store::MemoryStore;

    fn vendor_session() -> SessionStore<MemoryStore> {
        let mut session = SessionStore::init(MemoryStore::new());
        session.login("vendor-token", Identity::new("v1", "vendor@shop.io", Role::Vendor));
        session
    }

    fn submission(name: &str, cents: i64) -> ProductSubmission {
        ProductSubmission {
            name: name.into(),
            description: "Hand-thrown stoneware".into(),
            price: Money::from_cents(cents),
            image: None,
            category: Some("Home & Garden".into()),
        }
    }

    #[tokio::test]
    async fn test_dashboard_summary() {
        let mut products = market_core::catalog::demo_products();
        products[0].status = ProductStatus::Pending;
        let source = FakeSource::with_products(products);

        let dashboard = vendor_dashboard(&vendor_session(), &source).await.unwrap();
        assert_eq!(dashboard.summary.total, 6);
        assert_eq!(dashboard.summary.pending, 1);
        assert_eq!(dashboard.summary.approved, 5);
        assert_eq!(source.last_token().as_deref(), Some("vendor-token"));
    }

    #[tokio::test]
    async fn test_dashboard_requires_vendor() {
        let source = FakeSource::with_products(Vec::new());
        let anon = SessionStore::init(MemoryStore::new());

        let err = vendor_dashboard(&anon, &source).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_dashboard_failure_notice() {
        let err = vendor_dashboard(&vendor_session(), &FakeSource::offline())
            .await
            .unwrap_err();
        assert_eq!(
            err.notice.description,
            "Failed to load your products. Please try again."
        );
    }

    #[tokio::test]
    async fn test_submit_product() {
        let source = FakeSource::with_products(Vec::new());
        let response = submit_product(&vendor_session(), &source, submission("Mug", 1800))
            .await
            .unwrap();

        assert_eq!(response.product.name, "Mug");
        assert_eq!(response.product.status, ProductStatus::Pending);
        assert_eq!(response.notice, Notice::product_submitted());
    }

    #[tokio::test]
    async fn test_submit_validation_notices() {
        let source = FakeSource::with_products(Vec::new());
        let session = vendor_session();

        let err = submit_product(&session, &source, submission("", 1800))
            .await
            .unwrap_err();
        assert_eq!(err.notice, Notice::missing_information());

        let err = submit_product(&session, &source, submission("Mug", 0))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.notice, Notice::invalid_price());

        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_rejected_for_admin() {
        let mut session = SessionStore::init(MemoryStore::new());
        session.login("admin-token", Identity::new("a1", "root@shop.io", Role::Admin));

        let source = FakeSource::with_products(Vec::new());
        let err = submit_product(&session, &source, submission("Mug", 1800))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
