//! # Access Control
//!
//! Role gating for protected views, navigation links and product-card
//! actions. Everything here is a pure function of the current identity.
//!
//! ## Gate Decision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  authorize(identity, allowed)                                           │
//! │       │                                                                 │
//! │       ├── identity is None?        → Denied(Unauthenticated)            │
//! │       │                                                                 │
//! │       ├── role not in allowed?     → Denied(Forbidden { role })         │
//! │       │                                                                 │
//! │       └── otherwise                → Granted                            │
//! │                                                                         │
//! │  A denied caller is sent away from the view; where to is up to the UI.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Identity, Product, ProductStatus, Role};

// =============================================================================
// Protected Views
// =============================================================================

/// Views that require a specific role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ProtectedView {
    VendorDashboard,
    AddProduct,
    AdminDashboard,
}

impl ProtectedView {
    pub const ALL: [ProtectedView; 3] = [
        ProtectedView::VendorDashboard,
        ProtectedView::AddProduct,
        ProtectedView::AdminDashboard,
    ];

    /// Route path of the view.
    pub const fn path(&self) -> &'static str {
        match self {
            ProtectedView::VendorDashboard => "/vendor",
            ProtectedView::AddProduct => "/vendor/add",
            ProtectedView::AdminDashboard => "/admin",
        }
    }

    /// Roles admitted to the view.
    pub const fn allowed_roles(&self) -> &'static [Role] {
        match self {
            ProtectedView::VendorDashboard | ProtectedView::AddProduct => &[Role::Vendor],
            ProtectedView::AdminDashboard => &[Role::Admin],
        }
    }

    /// Looks a view up by its route path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.path() == path)
    }
}

// =============================================================================
// Access Decision
// =============================================================================

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Denial {
    Unauthenticated,
    Forbidden { role: Role },
}

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "access", content = "denial", rename_all = "camelCase")]
pub enum Access {
    Granted,
    Denied(Denial),
}

impl Access {
    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    /// Converts a denial into the matching [`CoreError`].
    pub fn into_result(self, view: &str) -> CoreResult<()> {
        match self {
            Access::Granted => Ok(()),
            Access::Denied(Denial::Unauthenticated) => Err(CoreError::Unauthenticated),
            Access::Denied(Denial::Forbidden { role }) => Err(CoreError::Forbidden {
                role,
                view: view.to_string(),
            }),
        }
    }
}

/// Decides whether `identity` may enter a view admitting `allowed`.
///
/// ## Example
/// ```rust
/// use market_core::access::{authorize, Access, Denial};
/// use market_core::types::{Identity, Role};
///
/// let admin = Identity::new("a1", "root@shop.io", Role::Admin);
/// assert_eq!(authorize(Some(&admin), &[Role::Admin]), Access::Granted);
/// assert_eq!(authorize(None, &[Role::Admin]), Access::Denied(Denial::Unauthenticated));
/// ```
pub fn authorize(identity: Option<&Identity>, allowed: &[Role]) -> Access {
    match identity {
        None => Access::Denied(Denial::Unauthenticated),
        Some(identity) if allowed.contains(&identity.role) => Access::Granted,
        Some(identity) => Access::Denied(Denial::Forbidden {
            role: identity.role,
        }),
    }
}

/// [`authorize`] against a [`ProtectedView`].
pub fn authorize_view(identity: Option<&Identity>, view: ProtectedView) -> Access {
    authorize(identity, view.allowed_roles())
}

// =============================================================================
// Navigation
// =============================================================================

/// A navigation entry visible to the current caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        NavLink { label, path }
    }
}

/// Links shown in the navigation bar.
///
/// Home is always present. Dashboards follow the role; login and register
/// only appear for anonymous visitors.
pub fn nav_links(identity: Option<&Identity>) -> Vec<NavLink> {
    let mut links = vec![NavLink::new("Home", "/")];

    match identity.map(|i| i.role) {
        Some(Role::Vendor) => links.push(NavLink::new(
            "Vendor Dashboard",
            ProtectedView::VendorDashboard.path(),
        )),
        Some(Role::Admin) => links.push(NavLink::new(
            "Admin Dashboard",
            ProtectedView::AdminDashboard.path(),
        )),
        Some(Role::User) => {}
        None => {
            links.push(NavLink::new("Login", "/login"));
            links.push(NavLink::new("Register", "/register"));
        }
    }

    links
}

// =============================================================================
// Product Card Actions
// =============================================================================

/// Buttons a product card offers to the current caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductActions {
    pub add_to_cart: bool,
    pub edit: bool,
    pub approve: bool,
    pub reject: bool,
}

/// Shoppers can buy approved products, vendors can edit their own, and
/// admins moderate pending ones.
pub fn product_actions(identity: Option<&Identity>, product: &Product) -> ProductActions {
    let Some(identity) = identity else {
        return ProductActions::default();
    };

    let moderating = identity.is_admin() && product.status == ProductStatus::Pending;
    ProductActions {
        add_to_cart: identity.role == Role::User && product.is_approved(),
        edit: product.is_owned_by(identity),
        approve: moderating,
        reject: moderating,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn identity(role: Role) -> Identity {
        Identity::new("u1", "someone@shop.io", role)
    }

    fn product(status: ProductStatus, vendor: Option<&str>) -> Product {
        Product {
            id: "p1".into(),
            name: "Widget".into(),
            description: String::new(),
            price: Money::from_cents(500),
            status,
            image: None,
            category: None,
            vendor_id: vendor.map(str::to_string),
            cloudinary_public_id: None,
        }
    }

    #[test]
    fn test_authorize_matrix() {
        for view in ProtectedView::ALL {
            assert_eq!(
                authorize_view(None, view),
                Access::Denied(Denial::Unauthenticated)
            );
            for role in Role::ALL {
                let access = authorize_view(Some(&identity(role)), view);
                let expected = view.allowed_roles().contains(&role);
                assert_eq!(access.is_granted(), expected, "{role} on {}", view.path());
            }
        }
    }

    #[test]
    fn test_wrong_role_reports_role() {
        let user = identity(Role::User);
        assert_eq!(
            authorize_view(Some(&user), ProtectedView::AdminDashboard),
            Access::Denied(Denial::Forbidden { role: Role::User })
        );
    }

    #[test]
    fn test_into_result() {
        assert!(Access::Granted.into_result("/admin").is_ok());
        assert_eq!(
            Access::Denied(Denial::Unauthenticated).into_result("/admin"),
            Err(CoreError::Unauthenticated)
        );
        assert_eq!(
            Access::Denied(Denial::Forbidden { role: Role::Vendor }).into_result("/admin"),
            Err(CoreError::Forbidden {
                role: Role::Vendor,
                view: "/admin".into()
            })
        );
    }

    #[test]
    fn test_view_paths_round_trip() {
        for view in ProtectedView::ALL {
            assert_eq!(ProtectedView::from_path(view.path()), Some(view));
        }
        assert_eq!(ProtectedView::from_path("/cart"), None);
    }

    #[test]
    fn test_nav_links() {
        let labels = |identity: Option<&Identity>| -> Vec<&str> {
            nav_links(identity).iter().map(|l| l.label).collect()
        };

        assert_eq!(labels(None), ["Home", "Login", "Register"]);
        assert_eq!(labels(Some(&identity(Role::User))), ["Home"]);
        assert_eq!(
            labels(Some(&identity(Role::Vendor))),
            ["Home", "Vendor Dashboard"]
        );
        assert_eq!(
            labels(Some(&identity(Role::Admin))),
            ["Home", "Admin Dashboard"]
        );
    }

    #[test]
    fn test_product_actions() {
        let approved = product(ProductStatus::Approved, Some("u1"));
        let pending = product(ProductStatus::Pending, Some("v9"));

        assert_eq!(product_actions(None, &approved), ProductActions::default());

        let shopper = product_actions(Some(&identity(Role::User)), &approved);
        assert!(shopper.add_to_cart && !shopper.edit);
        assert!(!product_actions(Some(&identity(Role::User)), &pending).add_to_cart);

        let vendor = product_actions(Some(&identity(Role::Vendor)), &approved);
        assert!(vendor.edit && !vendor.add_to_cart);

        let admin = product_actions(Some(&identity(Role::Admin)), &pending);
        assert!(admin.approve && admin.reject && !admin.add_to_cart);
        assert!(!product_actions(Some(&identity(Role::Admin)), &approved).approve);
    }
}
