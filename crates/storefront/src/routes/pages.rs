//! Static page route handlers: contacts, delivery, and reviews.
//!
//! These pages render seeded content only. The forms they show are
//! inert by design; submitting feedback is outside the demo.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use techstore_core::Page;

use crate::content::{Review, ServiceOption, StoreInfo};
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::cart::badge_count;

/// Review display data for templates.
#[derive(Clone)]
pub struct ReviewCardView {
    pub author: String,
    pub stars: String,
    pub body: String,
    pub date: String,
}

impl From<&Review> for ReviewCardView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            stars: "★".repeat(usize::from(review.rating)),
            body: review.body.clone(),
            date: review.date.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Contacts page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contacts.html")]
pub struct ContactsTemplate {
    pub info: StoreInfo,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Delivery and payment page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/delivery.html")]
pub struct DeliveryTemplate {
    pub delivery_options: Vec<ServiceOption>,
    pub payment_options: Vec<ServiceOption>,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Reviews page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/reviews.html")]
pub struct ReviewsTemplate {
    pub reviews: Vec<ReviewCardView>,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Display the contacts page.
#[instrument(skip(state, session))]
pub async fn contacts(
    State(state): State<AppState>,
    session: Session,
) -> Result<ContactsTemplate, AppError> {
    Ok(ContactsTemplate {
        info: state.content().info().clone(),
        nav: Page::NAV,
        cart_count: badge_count(&session).await?,
    })
}

/// Display the delivery and payment page.
#[instrument(skip(state, session))]
pub async fn delivery(
    State(state): State<AppState>,
    session: Session,
) -> Result<DeliveryTemplate, AppError> {
    Ok(DeliveryTemplate {
        delivery_options: state.content().delivery_options().to_vec(),
        payment_options: state.content().payment_options().to_vec(),
        nav: Page::NAV,
        cart_count: badge_count(&session).await?,
    })
}

/// Display the reviews page.
#[instrument(skip(state, session))]
pub async fn reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<ReviewsTemplate, AppError> {
    let reviews = state
        .content()
        .reviews()
        .iter()
        .map(ReviewCardView::from)
        .collect();

    Ok(ReviewsTemplate {
        reviews,
        nav: Page::NAV,
        cart_count: badge_count(&session).await?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn review_card_renders_one_star_per_rating_point() {
        let review = Review {
            author: "Maria K.".to_string(),
            rating: 4,
            body: "Solid laptop.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
        };

        let card = ReviewCardView::from(&review);
        assert_eq!(card.stars.chars().count(), 4);
        assert_eq!(card.date, "July 3, 2025");
    }
}
