use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

pub const PROMO_DISCOUNT20: &str = "DISCOUNT20";
const ORDER_SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_SUFFIX_LEN: usize = 8;

/// 20% off the subtotal.
fn discount_rate() -> Decimal {
    Decimal::new(20, 2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Prices a list of `(unit_price, quantity)` lines. Unknown promo codes are ignored.
pub fn quote<I>(lines: I, promo_code: Option<&str>) -> Quote
where
    I: IntoIterator<Item = (Decimal, i32)>,
{
    let subtotal: Decimal = lines
        .into_iter()
        .map(|(price, quantity)| price * Decimal::from(quantity))
        .sum();

    let discount = match promo_code {
        Some(PROMO_DISCOUNT20) => (subtotal * discount_rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        _ => Decimal::ZERO,
    };

    Quote {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

/// `ORD-YYYYMMDD-XXXXXXXX` with an uppercase alphanumeric suffix.
pub fn order_number(placed_at: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_SUFFIX_LEN)
        .map(|_| ORDER_SUFFIX_ALPHABET[rng.gen_range(0..ORDER_SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!("ORD-{}-{}", placed_at.format("%Y%m%d"), suffix)
}
