use crate::fare_class::FareClass::{Comfort, First, Standard};
use crate::fares::tests::utils::{add_ticket, ids};
use crate::fares::view::{ClassFilter, SortKey, derive};
use crate::ticket::Ticket;

fn sample() -> Vec<Ticket> {
    let mut tickets = Vec::new();
    add_ticket(&mut tickets, "A", "16:15", 150, 60, Standard, true);
    add_ticket(&mut tickets, "B", "06:15", 95, 45, Comfort, true);
    add_ticket(&mut tickets, "C", "09:45", 179, 80, First, false);
    add_ticket(&mut tickets, "D", "21:00", 120, 45, Standard, true);
    add_ticket(&mut tickets, "E", "11:20", 90, 72, Comfort, true);
    tickets
}

#[test]
fn test_sort_by_price_is_stable() {
    let tickets = sample();
    let view = derive(&tickets, SortKey::Price, ClassFilter::All);
    assert_eq!(vec!["B", "D", "A", "E", "C"], ids(&view));
}

#[test]
fn test_sort_by_departure() {
    let tickets = sample();
    let view = derive(&tickets, SortKey::Departure, ClassFilter::All);
    assert_eq!(vec!["B", "C", "E", "A", "D"], ids(&view));
}

#[test]
fn test_sort_by_duration() {
    let tickets = sample();
    let view = derive(&tickets, SortKey::Duration, ClassFilter::All);
    assert_eq!(vec!["E", "B", "D", "A", "C"], ids(&view));
}

#[test]
fn test_filter_after_sort_keeps_order() {
    let tickets = sample();
    let view = derive(&tickets, SortKey::Departure, ClassFilter::Only(Comfort));
    assert_eq!(vec!["B", "E"], ids(&view));

    let view = derive(&tickets, SortKey::Price, ClassFilter::Only(Standard));
    assert_eq!(vec!["D", "A"], ids(&view));
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let mut tickets = Vec::new();
    add_ticket(&mut tickets, "A", "06:15", 100, 30, Standard, true);
    assert!(derive(&tickets, SortKey::Price, ClassFilter::Only(First)).is_empty());
}

#[test]
fn test_derive_leaves_batch_untouched() {
    let tickets = sample();
    let before = tickets.clone();
    let _ = derive(&tickets, SortKey::Duration, ClassFilter::Only(Standard));
    assert_eq!(before, tickets);
}

#[test]
fn test_parse_selectors() {
    assert_eq!(SortKey::Departure, "departure".parse::<SortKey>().unwrap());
    assert_eq!(SortKey::Duration, " Duration ".parse::<SortKey>().unwrap());
    assert!("arrival".parse::<SortKey>().is_err());

    assert_eq!(ClassFilter::All, "ALL".parse::<ClassFilter>().unwrap());
    assert_eq!(ClassFilter::Only(First), "first".parse::<ClassFilter>().unwrap());
    assert!("business".parse::<ClassFilter>().is_err());
}
