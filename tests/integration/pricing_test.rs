//! Integration tests for the pricing calculator

use rust_decimal_macros::dec;
use shelf_pricer::pricing::{compute_price, DemandLevel};

#[test]
fn test_documented_example() {
    // base 50, High demand, 30 in stock, one day to expiry
    let price = compute_price(dec!(50), DemandLevel::High, 30, 1).unwrap();
    assert_eq!(price, dec!(47.03));
}

#[test]
fn test_price_stays_inside_envelope() {
    // For any combination of factor inputs the price lands in
    // [base × 0.7695, base × 1.1]
    let bases = [dec!(1), dec!(19.99), dec!(250), dec!(1000)];
    for base in bases {
        for demand in [DemandLevel::Low, DemandLevel::Medium, DemandLevel::High] {
            for inventory in [0u32, 1, 20, 21, 1000] {
                for days_left in [-30i64, -1, 0, 1, 2, 3, 365] {
                    let price = compute_price(base, demand, inventory, days_left).unwrap();
                    assert!(
                        price >= (base * dec!(0.7695)).round_dp(2),
                        "price {price} below floor for base {base}"
                    );
                    assert!(
                        price <= (base * dec!(1.1)).round_dp(2),
                        "price {price} above ceiling for base {base}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_expiry_window_boundary() {
    let at_window = compute_price(dec!(100), DemandLevel::Medium, 10, 2).unwrap();
    let outside = compute_price(dec!(100), DemandLevel::Medium, 10, 3).unwrap();
    assert_eq!(at_window, dec!(95.00));
    assert_eq!(outside, dec!(100.00));
}

#[test]
fn test_inventory_threshold_boundary() {
    let at_threshold = compute_price(dec!(100), DemandLevel::Medium, 20, 10).unwrap();
    let above = compute_price(dec!(100), DemandLevel::Medium, 21, 10).unwrap();
    assert_eq!(at_threshold, dec!(100.00));
    assert_eq!(above, dec!(90.00));
}

#[test]
fn test_expired_stock_gets_expiry_discount() {
    // Negative days-left is not special-cased; the discount still applies
    let expired = compute_price(dec!(100), DemandLevel::Medium, 10, -4).unwrap();
    assert_eq!(expired, dec!(95.00));
}

#[test]
fn test_pure_function_no_state_drift() {
    let first = compute_price(dec!(64.35), DemandLevel::Low, 21, 2).unwrap();
    for _ in 0..10 {
        assert_eq!(
            compute_price(dec!(64.35), DemandLevel::Low, 21, 2).unwrap(),
            first
        );
    }
}
