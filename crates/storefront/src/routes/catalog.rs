//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use techstore_core::{ALL_CATEGORIES, Category, Page, Product, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Fallback image for products without one.
pub(crate) const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Resolve a product's image, falling back to the placeholder.
///
/// Image paths are opaque to the cart engine; whether they resolve is
/// purely a presentation concern, handled here.
pub(crate) fn product_image(product: &Product) -> String {
    if product.image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        product.image.clone()
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.label().to_string(),
            image: product_image(product),
            description: product.description.clone(),
        }
    }
}

/// Category filter chip display data.
#[derive(Clone)]
pub struct FilterChipView {
    pub slug: String,
    pub label: String,
    pub active: bool,
}

/// Build the filter chip row: "All" first, then every category.
fn filter_chips(selected: &str) -> Vec<FilterChipView> {
    let mut chips = vec![FilterChipView {
        slug: ALL_CATEGORIES.to_string(),
        label: "All".to_string(),
        active: selected.eq_ignore_ascii_case(ALL_CATEGORIES),
    }];
    chips.extend(Category::ALL.iter().map(|category| FilterChipView {
        slug: category.slug().to_string(),
        label: category.label().to_string(),
        active: selected.eq_ignore_ascii_case(category.slug()),
    }));
    chips
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub products: Vec<ProductCardView>,
    pub chips: Vec<FilterChipView>,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Display the catalog, optionally filtered by category.
///
/// A missing parameter and the "all" pseudo-category both show every
/// product. Unknown categories render an empty grid rather than an error.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<CatalogTemplate, AppError> {
    let selected = query.category.unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let products = state
        .catalog()
        .filter(&selected)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    Ok(CatalogTemplate {
        products,
        chips: filter_chips(&selected),
        nav: Page::NAV,
        cart_count: super::cart::badge_count(&session).await?,
    })
}
