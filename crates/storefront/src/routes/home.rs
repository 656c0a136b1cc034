//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use techstore_core::Page;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::cart::badge_count;
use super::catalog::ProductCardView;

/// Hero banner configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Technology for every day".to_string(),
            subtitle: "Smartphones, laptops, and accessories with fast delivery and honest prices."
                .to_string(),
            button_text: "Browse the catalog".to_string(),
            button_url: "/catalog".to_string(),
        }
    }
}

/// A highlight card shown under the hero.
#[derive(Clone)]
pub struct FeatureCardView {
    pub title: String,
    pub body: String,
}

/// Static highlight cards for the home page.
fn get_feature_cards() -> Vec<FeatureCardView> {
    vec![
        FeatureCardView {
            title: "Fast delivery".to_string(),
            body: "Courier delivery within 1-2 business days, free for orders over $50."
                .to_string(),
        },
        FeatureCardView {
            title: "Quality guarantee".to_string(),
            body: "Official two-year warranty on every product in the catalog.".to_string(),
        },
        FeatureCardView {
            title: "Easy payment".to_string(),
            body: "Pay online, on delivery, or in installments. No hidden fees.".to_string(),
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero banner configuration.
    pub hero: HeroConfig,
    /// Highlight cards under the hero.
    pub features: Vec<FeatureCardView>,
    /// Products featured on the home page.
    pub featured: Vec<ProductCardView>,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<HomeTemplate, AppError> {
    let featured = state
        .catalog()
        .list()
        .iter()
        .take(FEATURED_COUNT)
        .map(ProductCardView::from)
        .collect();

    Ok(HomeTemplate {
        hero: HeroConfig::default(),
        features: get_feature_cards(),
        featured,
        nav: Page::NAV,
        cart_count: badge_count(&session).await?,
    })
}
