//! Pure state transitions for the meeting record.

use crate::action::MeetingAction;
use crate::rows::{add_row, remove_row, toggle_row_status, update_row};
use ecodash_domain::entities::{KpiRow, MeetingRecord, RockRow, TodoRow};
use ecodash_domain::enums::{Division, TrackStatus};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Placeholder text of a newly added discussion issue.
pub const NEW_ISSUE: &str = "Isu baru...";

/// Highest accepted division rating.
pub const MAX_RATING: Decimal = Decimal::TEN;

/// Applies `action` to `state` and returns the resulting record.
///
/// `state` itself is never modified. Actions that point at a missing row or
/// carry an out-of-range rating produce an unchanged copy.
#[must_use]
pub fn reduce(state: &MeetingRecord, action: MeetingAction) -> MeetingRecord {
    debug!(?action, "reducing meeting record");
    let mut next = state.clone();

    match action {
        MeetingAction::SetDate(date) => next.date = date,
        MeetingAction::SetText(field, text) => *next.text_mut(field) = text,
        MeetingAction::ToggleAttendance(index) => match next.attendance.get_mut(index) {
            Some(attendee) => attendee.present = !attendee.present,
            None => warn!(index, "attendee index out of range, toggle ignored"),
        },
        MeetingAction::UpdateKpi {
            division,
            index,
            field,
            value,
        } => {
            *next.kpi_table_mut(division) =
                update_row(state.kpi_table(division), index, field, value);
        }
        MeetingAction::AddKpiRow(division) => {
            *next.kpi_table_mut(division) = add_row(state.kpi_table(division), KpiRow::template());
        }
        MeetingAction::ToggleKpiStatus { division, index } => {
            *next.kpi_table_mut(division) = toggle_row_status(state.kpi_table(division), index);
        }
        MeetingAction::UpdateRock { index, field, value } => {
            next.rocks_table = update_row(&state.rocks_table, index, field, value);
        }
        MeetingAction::AddRock => {
            next.rocks_table = add_row(&state.rocks_table, RockRow::template());
        }
        MeetingAction::ToggleRockStatus(index) => {
            next.rocks_table = toggle_row_status(&state.rocks_table, index);
        }
        MeetingAction::UpdateTodo { index, field, value } => {
            next.todo_table = update_row(&state.todo_table, index, field, value);
        }
        MeetingAction::AddTodo => {
            next.todo_table = add_row(&state.todo_table, TodoRow::template());
        }
        MeetingAction::ToggleTodo(index) => {
            next.todo_table = toggle_row_status(&state.todo_table, index);
        }
        MeetingAction::RemoveTodo(index) => {
            next.todo_table = remove_row(&state.todo_table, index);
        }
        MeetingAction::PullOffTrackIssues => {
            next.idt_issues = pull_off_track_issues(state);
        }
        MeetingAction::AddIssue => {
            next.idt_issues = add_row(&state.idt_issues, NEW_ISSUE.to_string());
        }
        MeetingAction::RemoveIssue(index) => {
            next.idt_issues = remove_row(&state.idt_issues, index);
        }
        MeetingAction::SetRating { division, value } => {
            if (Decimal::ZERO..=MAX_RATING).contains(&value) {
                next.ratings.set(division, value);
            } else {
                warn!(%division, %value, "rating outside 0-10, ignored");
            }
        }
    }

    next
}

/// Existing issues followed by one issue per off-track KPI row and rock.
///
/// KPI issues are tagged with the division key (`"[ecomm] Total Omset"`),
/// rock issues with `[ROCK]`. Duplicates are dropped, keeping the first
/// occurrence, so pulling twice adds nothing new.
#[must_use]
pub fn pull_off_track_issues(record: &MeetingRecord) -> Vec<String> {
    let kpi_issues = Division::ALL.into_iter().flat_map(|division| {
        record
            .kpi_table(division)
            .iter()
            .filter(|row| row.status == TrackStatus::Off)
            .map(move |row| format!("[{}] {}", division.key(), row.kpi))
    });
    let rock_issues = record
        .rocks_table
        .iter()
        .filter(|rock| rock.status == TrackStatus::Off)
        .map(|rock| format!("[ROCK] {}", rock.goal));

    let mut seen = HashSet::new();
    record
        .idt_issues
        .iter()
        .cloned()
        .chain(kpi_issues)
        .chain(rock_issues)
        .filter(|issue| seen.insert(issue.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecodash_domain::entities::{KpiField, RockField, TextField, TodoField};
    use ecodash_domain::enums::TodoStatus;
    use rust_decimal_macros::dec;

    fn record() -> MeetingRecord {
        MeetingRecord {
            date: "Monday, 3 March 2025".to_string(),
            ..MeetingRecord::default()
        }
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = record();
        let snapshot = state.clone();
        let next = reduce(&state, MeetingAction::SetDate("Tuesday".to_string()));
        assert_eq!(state, snapshot);
        assert_eq!(next.date, "Tuesday");
    }

    #[test]
    fn test_set_text() {
        let next = reduce(
            &record(),
            MeetingAction::SetText(TextField::ActionItems, "- Fix ads (Rina/Fri)".to_string()),
        );
        assert_eq!(next.action_items, "- Fix ads (Rina/Fri)");
    }

    #[test]
    fn test_toggle_attendance() {
        let next = reduce(&record(), MeetingAction::ToggleAttendance(2));
        assert!(!next.attendance[2].present);
        assert_eq!(next.present_count(), 7);

        let unchanged = reduce(&record(), MeetingAction::ToggleAttendance(99));
        assert_eq!(unchanged, record());
    }

    #[test]
    fn test_kpi_edits_target_one_division() {
        let state = record();
        let next = reduce(
            &state,
            MeetingAction::UpdateKpi {
                division: Division::Live,
                index: 0,
                field: KpiField::Realisasi,
                value: "Rp 27 Jt".to_string(),
            },
        );
        assert_eq!(next.live_table[0].realisasi, "Rp 27 Jt");
        assert_eq!(next.ecomm_table, state.ecomm_table);

        let next = reduce(&next, MeetingAction::AddKpiRow(Division::Live));
        assert_eq!(next.live_table.len(), 2);
        assert_eq!(next.live_table[1].kpi, "New KPI");
        assert_eq!(next.live_table[1].status, TrackStatus::On);

        let next = reduce(
            &next,
            MeetingAction::ToggleKpiStatus {
                division: Division::Live,
                index: 1,
            },
        );
        assert_eq!(next.live_table[1].status, TrackStatus::Off);
    }

    #[test]
    fn test_out_of_range_kpi_update_is_noop() {
        let state = record();
        let next = reduce(
            &state,
            MeetingAction::UpdateKpi {
                division: Division::Prod,
                index: 3,
                field: KpiField::Kpi,
                value: "x".to_string(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_rock_actions() {
        let next = reduce(&record(), MeetingAction::AddRock);
        assert_eq!(next.rocks_table.len(), 2);
        assert_eq!(next.rocks_table[1].owner, "CEO");

        let next = reduce(
            &next,
            MeetingAction::UpdateRock {
                index: 1,
                field: RockField::Goal,
                value: "Open second warehouse".to_string(),
            },
        );
        let next = reduce(&next, MeetingAction::ToggleRockStatus(1));
        assert_eq!(next.rocks_table[1].goal, "Open second warehouse");
        assert_eq!(next.rocks_table[1].status, TrackStatus::Off);
    }

    #[test]
    fn test_todo_actions() {
        let next = reduce(&record(), MeetingAction::AddTodo);
        let next = reduce(
            &next,
            MeetingAction::UpdateTodo {
                index: 1,
                field: TodoField::Task,
                value: "Call supplier".to_string(),
            },
        );
        let next = reduce(&next, MeetingAction::ToggleTodo(1));
        assert_eq!(next.todo_table[1].task, "Call supplier");
        assert_eq!(next.todo_table[1].status, TodoStatus::Done);

        let next = reduce(&next, MeetingAction::RemoveTodo(0));
        assert_eq!(next.todo_table.len(), 1);
        assert_eq!(next.todo_table[0].task, "Call supplier");
    }

    #[test]
    fn test_pull_off_track_issues() {
        let state = reduce(
            &record(),
            MeetingAction::ToggleKpiStatus {
                division: Division::Hcga,
                index: 0,
            },
        );
        let state = reduce(&state, MeetingAction::ToggleRockStatus(0));
        let state = reduce(&state, MeetingAction::AddIssue);

        let next = reduce(&state, MeetingAction::PullOffTrackIssues);
        assert_eq!(
            next.idt_issues,
            vec![
                NEW_ISSUE.to_string(),
                "[hcga] Kesehatan Keuangan".to_string(),
                "[ROCK] Launch Dashboard Ecosystem".to_string(),
            ]
        );

        let again = reduce(&next, MeetingAction::PullOffTrackIssues);
        assert_eq!(again.idt_issues, next.idt_issues);
    }

    #[test]
    fn test_pull_keeps_division_order() {
        let mut state = record();
        state.warehouse_table[0].status = TrackStatus::Off;
        state.ecomm_table[0].status = TrackStatus::Off;
        let issues = pull_off_track_issues(&state);
        assert_eq!(issues, ["[ecomm] Total Omset", "[warehouse] SL Pengiriman"]);
    }

    #[test]
    fn test_issue_removal() {
        let state = reduce(&record(), MeetingAction::AddIssue);
        assert_eq!(state.idt_issues, ["Isu baru..."]);
        let next = reduce(&state, MeetingAction::RemoveIssue(0));
        assert!(next.idt_issues.is_empty());
    }

    #[test]
    fn test_rating_bounds() {
        let rate = |value| MeetingAction::SetRating {
            division: Division::Sales,
            value,
        };
        assert_eq!(reduce(&record(), rate(dec!(8.5))).ratings.sales, dec!(8.5));
        assert_eq!(reduce(&record(), rate(dec!(10))).ratings.sales, dec!(10));
        assert_eq!(reduce(&record(), rate(dec!(0))).ratings.sales, dec!(0));
        assert_eq!(reduce(&record(), rate(dec!(11))), record());
        assert_eq!(reduce(&record(), rate(dec!(-1))), record());
    }
}
