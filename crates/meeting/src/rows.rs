//! Copy-on-write helpers for the ordered row collections of a meeting.
//!
//! Every helper takes the current rows by reference and returns a new
//! vector; the input is never modified. Out-of-range indices leave the rows
//! unchanged and log a warning.

use ecodash_domain::entities::{EditableRow, StatusRow};
use ecodash_domain::enums::Toggle;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Replaces one text field of the row at `index`.
#[must_use]
pub fn update_row<R>(rows: &[R], index: usize, field: R::Field, value: impl Into<String>) -> Vec<R>
where
    R: EditableRow + Clone,
{
    let mut next = rows.to_vec();
    match next.get_mut(index) {
        Some(row) => row.set_field(field, value.into()),
        None => warn!(index, len = rows.len(), "row index out of range, update ignored"),
    }
    next
}

/// Appends `template` to the rows.
#[must_use]
pub fn add_row<R: Clone>(rows: &[R], template: R) -> Vec<R> {
    let mut next = Vec::with_capacity(rows.len() + 1);
    next.extend_from_slice(rows);
    next.push(template);
    next
}

/// Removes the row at `index`.
#[must_use]
pub fn remove_row<R: Clone>(rows: &[R], index: usize) -> Vec<R> {
    if index >= rows.len() {
        warn!(index, len = rows.len(), "row index out of range, removal ignored");
        return rows.to_vec();
    }
    rows.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, row)| row.clone())
        .collect()
}

/// Returns a copy of `row` with its status flipped.
#[must_use]
pub fn toggle_status<R: StatusRow + Clone>(row: &R) -> R {
    let mut next = row.clone();
    next.set_status(row.status().toggled());
    next
}

/// Flips the status of the row at `index`.
#[must_use]
pub fn toggle_row_status<R: StatusRow + Clone>(rows: &[R], index: usize) -> Vec<R> {
    if index >= rows.len() {
        warn!(index, len = rows.len(), "row index out of range, toggle ignored");
        return rows.to_vec();
    }
    rows.iter()
        .enumerate()
        .map(|(i, row)| if i == index { toggle_status(row) } else { row.clone() })
        .collect()
}

/// Mean of the ratings that have been given.
///
/// Zero (and negative) entries mean "not rated yet" and are left out. With
/// no rated entries the average is zero.
#[must_use]
pub fn average_rating(ratings: impl IntoIterator<Item = Decimal>) -> Decimal {
    let (sum, count) = ratings
        .into_iter()
        .filter(|v| *v > Decimal::ZERO)
        .fold((Decimal::ZERO, 0u32), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return Decimal::ZERO;
    }
    sum / Decimal::from(count)
}

/// Average rating as shown on the meeting sheet: one decimal place.
#[must_use]
pub fn format_rating(average: Decimal) -> String {
    format!(
        "{:.1}",
        average.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecodash_domain::entities::{KpiField, KpiRow, TodoField, TodoRow};
    use ecodash_domain::enums::{TodoStatus, TrackStatus};
    use rust_decimal_macros::dec;

    fn table() -> Vec<KpiRow> {
        vec![KpiRow::new("Omset", "Rp 285 Jt"), KpiRow::new("Retur", "< 2%")]
    }

    #[test]
    fn test_update_row_leaves_input_untouched() {
        let rows = table();
        let next = update_row(&rows, 1, KpiField::Realisasi, "1.8%");
        assert_eq!(next[1].realisasi, "1.8%");
        assert_eq!(rows[1].realisasi, "...");
        assert_eq!(next[0], rows[0]);
    }

    #[test]
    fn test_update_row_out_of_range_is_noop() {
        let rows = table();
        assert_eq!(update_row(&rows, 5, KpiField::Kpi, "x"), rows);
    }

    #[test]
    fn test_add_row_appends_template() {
        let rows = vec![TodoRow::new("Ship it", "Dev")];
        let next = add_row(&rows, TodoRow::template());
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].status, TodoStatus::Not);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_remove_row() {
        let rows = vec![TodoRow::new("a", "x"), TodoRow::new("b", "y"), TodoRow::new("c", "z")];
        let next = remove_row(&rows, 1);
        let tasks: Vec<_> = next.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, ["a", "c"]);
        assert_eq!(remove_row(&rows, 3), rows);
    }

    #[test]
    fn test_toggle_status_twice_restores() {
        let row = KpiRow::new("Omset", "Rp 285 Jt");
        let once = toggle_status(&row);
        assert_eq!(once.status, TrackStatus::Off);
        assert_eq!(toggle_status(&once), row);

        let todo = TodoRow::new("a", "x");
        assert_eq!(toggle_status(&todo).status, TodoStatus::Done);
        assert_eq!(toggle_status(&toggle_status(&todo)), todo);
    }

    #[test]
    fn test_toggle_row_status_targets_one_row() {
        let rows = table();
        let next = toggle_row_status(&rows, 0);
        assert_eq!(next[0].status, TrackStatus::Off);
        assert_eq!(next[1].status, TrackStatus::On);
        assert_eq!(toggle_row_status(&rows, 9), rows);
    }

    #[test]
    fn test_update_todo_field() {
        let rows = vec![TodoRow::new("a", "x")];
        let next = update_row(&rows, 0, TodoField::Owner, "Finance");
        assert_eq!(next[0].owner, "Finance");
    }

    #[test]
    fn test_format_rating_one_decimal() {
        assert_eq!(format_rating(average_rating([dec!(7), dec!(8), dec!(10)])), "8.3");
        assert_eq!(format_rating(dec!(8.25)), "8.3");
        assert_eq!(format_rating(dec!(9)), "9.0");
        assert_eq!(format_rating(Decimal::ZERO), "0.0");
    }

    #[test]
    fn test_average_rating_skips_unrated() {
        assert_eq!(average_rating([dec!(8), dec!(0), dec!(9), dec!(0)]), dec!(8.5));
        assert_eq!(average_rating([dec!(0), dec!(0)]), Decimal::ZERO);
        assert_eq!(average_rating(Vec::<Decimal>::new()), Decimal::ZERO);
        assert_eq!(average_rating([dec!(7), dec!(8), dec!(10)]), dec!(25) / dec!(3));
    }
}
