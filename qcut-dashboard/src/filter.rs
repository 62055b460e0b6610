//! Filter model
//!
//! Pure filtering and ordering of the History and Menu collections.
//! No I/O: both views run these over whatever collection they hold.
//! Results are sorted most-recently-updated first; ties keep their
//! relative input order (stable sort).

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use shared::{Drink, DrinkFilter, Order, OrderFilter};

/// Apply an order filter, newest update first
///
/// The date window is `[from, to)` over the order's creation time in
/// the local timezone; `to` is an exclusive start-of-day bound, so a
/// `to` of day D+1 makes the range inclusive of day D. The text part
/// passes when no name/id filter is set, the customer name contains
/// the name filter case-insensitively, or the order number equals the
/// id filter parsed as an integer.
pub fn filter_orders<'a>(orders: &'a [Order], filter: &OrderFilter) -> Vec<&'a Order> {
    let mut result: Vec<&Order> = orders
        .iter()
        .filter(|order| {
            in_day_window(order.created_at, filter.from, filter.to) && text_pass(order, filter)
        })
        .collect();

    result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    result
}

fn in_day_window(ts: DateTime<Utc>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let day = ts.with_timezone(&Local).date_naive();
    from.is_none_or(|f| day >= f) && to.is_none_or(|t| day < t)
}

fn text_pass(order: &Order, filter: &OrderFilter) -> bool {
    if filter.name.is_empty() && filter.order_id.is_empty() {
        return true;
    }

    if !filter.name.is_empty()
        && order
            .customer
            .name
            .to_lowercase()
            .contains(&filter.name.to_lowercase())
    {
        return true;
    }

    filter
        .order_id
        .parse::<i64>()
        .is_ok_and(|id| id == order.order_id)
}

/// Apply a drink filter, newest update first
///
/// Soft-deleted drinks never pass. A remaining drink passes when no
/// filter is active, its category is in the active set, or its name
/// contains the search string case-insensitively.
pub fn filter_drinks<'a>(drinks: &'a [Drink], filter: &DrinkFilter) -> Vec<&'a Drink> {
    let search = filter.search.to_lowercase();

    let mut result: Vec<&Drink> = drinks
        .iter()
        .filter(|drink| !drink.deleted)
        .filter(|drink| {
            if !filter.is_active() {
                return true;
            }
            if !filter.category.is_empty() && filter.category.contains(&drink.category) {
                return true;
            }
            !search.is_empty() && drink.name.to_lowercase().contains(&search)
        })
        .collect();

    result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    result
}

/// The `[from, to)` pair covering one local calendar day
///
/// `days_ago = 0` is today. Used by the History quick-range buttons.
pub fn day_range(days_ago: u64) -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    let from = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
    let to = from.checked_add_days(Days::new(1)).unwrap_or(from);
    (from, to)
}
