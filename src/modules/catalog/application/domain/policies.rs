//! Validation rules for catalog writes.
use rust_decimal::Decimal;

pub const PRODUCT_NAME_MAX_LEN: usize = 255;
pub const PRICE_MAX_SCALE: u32 = 2;
pub const PRODUCT_RATING_MAX: f64 = 5.0;
pub const REVIEW_RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogPolicyError {
    #[error("Price must be greater than zero")]
    NonPositivePrice,

    #[error("Price must have at most 2 decimal places")]
    TooManyDecimals,

    #[error("Rating must be between 0 and 5")]
    ProductRatingOutOfRange,

    #[error("Review rating must be between 1 and 5")]
    ReviewRatingOutOfRange,
}

pub fn check_price(price: Decimal) -> Result<Decimal, CatalogPolicyError> {
    if price <= Decimal::ZERO {
        return Err(CatalogPolicyError::NonPositivePrice);
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Err(CatalogPolicyError::TooManyDecimals);
    }
    Ok(price)
}

pub fn check_product_rating(rating: f64) -> Result<f64, CatalogPolicyError> {
    if !rating.is_finite() || !(0.0..=PRODUCT_RATING_MAX).contains(&rating) {
        return Err(CatalogPolicyError::ProductRatingOutOfRange);
    }
    Ok(rating)
}

pub fn check_review_rating(rating: i64) -> Result<i16, CatalogPolicyError> {
    if !REVIEW_RATING_RANGE.contains(&rating) {
        return Err(CatalogPolicyError::ReviewRatingOutOfRange);
    }
    Ok(rating as i16)
}
