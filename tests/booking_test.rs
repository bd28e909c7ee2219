//! Ticket-quantity clamp and order totals.

use eventhub_frontend::booking::{
    clamp_ticket_quantity, order_total_cents, MAX_TICKETS_PER_ORDER, MIN_TICKETS_PER_ORDER,
};

#[test]
fn clamp_never_drops_below_one_ticket() {
    assert_eq!(clamp_ticket_quantity(1, -5), 1);
    assert_eq!(clamp_ticket_quantity(1, -1), 1);
    assert_eq!(clamp_ticket_quantity(2, -1), 1);
}

#[test]
fn clamp_never_exceeds_the_order_cap() {
    assert_eq!(clamp_ticket_quantity(10, 5), 10);
    assert_eq!(clamp_ticket_quantity(10, 1), 10);
    assert_eq!(clamp_ticket_quantity(9, 3), 10);
}

#[test]
fn clamp_applies_plain_steps_in_range() {
    assert_eq!(clamp_ticket_quantity(3, 1), 4);
    assert_eq!(clamp_ticket_quantity(5, -2), 3);
    assert_eq!(clamp_ticket_quantity(5, 0), 5);
}

#[test]
fn clamp_recovers_out_of_range_current_values() {
    // Out-of-range inputs are clamped, never rejected.
    assert_eq!(clamp_ticket_quantity(0, 0), MIN_TICKETS_PER_ORDER);
    assert_eq!(clamp_ticket_quantity(25, 0), MAX_TICKETS_PER_ORDER);
}

#[test]
fn order_total_scales_with_quantity() {
    assert_eq!(order_total_cents(29_900, 1), 29_900);
    assert_eq!(order_total_cents(29_900, 2), 59_800);
    assert_eq!(order_total_cents(0, 10), 0);
}
