use ecodash_domain::entities::{KpiField, RockField, TextField, TodoField};
use ecodash_domain::enums::Division;
use rust_decimal::Decimal;

/// One edit to a meeting record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingAction {
    /// Replace the meeting date label.
    SetDate(String),
    /// Replace one free-text section.
    SetText(TextField, String),
    /// Flip the presence flag of one attendee.
    ToggleAttendance(usize),
    UpdateKpi {
        division: Division,
        index: usize,
        field: KpiField,
        value: String,
    },
    AddKpiRow(Division),
    ToggleKpiStatus {
        division: Division,
        index: usize,
    },
    UpdateRock {
        index: usize,
        field: RockField,
        value: String,
    },
    AddRock,
    ToggleRockStatus(usize),
    UpdateTodo {
        index: usize,
        field: TodoField,
        value: String,
    },
    AddTodo,
    ToggleTodo(usize),
    RemoveTodo(usize),
    /// Queue every off-track KPI and rock as a discussion issue.
    PullOffTrackIssues,
    AddIssue,
    RemoveIssue(usize),
    /// Score a division; only values from 0 to 10 are accepted.
    SetRating {
        division: Division,
        value: Decimal,
    },
}
