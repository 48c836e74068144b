//! Weekly meeting record.
//!
//! The whole record is read and written as one JSON document. Field names
//! follow the stored camelCase shape; anything missing from an older
//! document falls back to its default.

use crate::enums::{Division, TodoStatus, TrackStatus, lenient_tag};
use crate::error::ParseError;
use crate::numeric::lenient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A row whose text fields can be edited by name.
pub trait EditableRow {
    /// Names of the editable text fields.
    type Field: Copy;

    /// Replaces one text field.
    fn set_field(&mut self, field: Self::Field, value: String);
}

/// A row carrying a two-state status tag.
pub trait StatusRow {
    /// The status tag type.
    type Status: crate::enums::Toggle;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// Attendance entry for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub present: bool,
}

impl Attendee {
    #[must_use]
    pub fn present(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            present: true,
        }
    }
}

/// KPI line of a division table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiRow {
    #[serde(default)]
    pub kpi: String,
    #[serde(default)]
    pub target: String,
    /// Achieved value, free text.
    #[serde(default)]
    pub realisasi: String,
    #[serde(default, deserialize_with = "lenient_tag::deserialize")]
    pub status: TrackStatus,
}

impl KpiRow {
    #[must_use]
    pub fn new(kpi: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kpi: kpi.into(),
            target: target.into(),
            realisasi: "...".to_string(),
            status: TrackStatus::On,
        }
    }

    /// Placeholder appended by "add row".
    #[must_use]
    pub fn template() -> Self {
        Self::new("New KPI", "...")
    }
}

/// Editable text columns of a [`KpiRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiField {
    Kpi,
    Target,
    Realisasi,
}

impl FromStr for KpiField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kpi" => Ok(Self::Kpi),
            "target" => Ok(Self::Target),
            "realisasi" | "actual" => Ok(Self::Realisasi),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

impl EditableRow for KpiRow {
    type Field = KpiField;

    fn set_field(&mut self, field: KpiField, value: String) {
        match field {
            KpiField::Kpi => self.kpi = value,
            KpiField::Target => self.target = value,
            KpiField::Realisasi => self.realisasi = value,
        }
    }
}

impl StatusRow for KpiRow {
    type Status = TrackStatus;

    fn status(&self) -> TrackStatus {
        self.status
    }

    fn set_status(&mut self, status: TrackStatus) {
        self.status = status;
    }
}

/// Quarterly priority ("rock") with an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockRow {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default, deserialize_with = "lenient_tag::deserialize")]
    pub status: TrackStatus,
}

impl RockRow {
    #[must_use]
    pub fn template() -> Self {
        Self {
            owner: "CEO".to_string(),
            goal: "Define new objective...".to_string(),
            status: TrackStatus::On,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockField {
    Owner,
    Goal,
}

impl FromStr for RockField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "goal" => Ok(Self::Goal),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

impl EditableRow for RockRow {
    type Field = RockField;

    fn set_field(&mut self, field: RockField, value: String) {
        match field {
            RockField::Owner => self.owner = value,
            RockField::Goal => self.goal = value,
        }
    }
}

impl StatusRow for RockRow {
    type Status = TrackStatus;

    fn status(&self) -> TrackStatus {
        self.status
    }

    fn set_status(&mut self, status: TrackStatus) {
        self.status = status;
    }
}

/// Action item carried over between meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRow {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient_tag::deserialize")]
    pub status: TodoStatus,
}

impl TodoRow {
    #[must_use]
    pub fn new(task: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            owner: owner.into(),
            status: TodoStatus::Not,
        }
    }

    #[must_use]
    pub fn template() -> Self {
        Self::new("New task...", "Owner")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Task,
    Owner,
}

impl FromStr for TodoField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "task" => Ok(Self::Task),
            "owner" => Ok(Self::Owner),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

impl EditableRow for TodoRow {
    type Field = TodoField;

    fn set_field(&mut self, field: TodoField, value: String) {
        match field {
            TodoField::Task => self.task = value,
            TodoField::Owner => self.owner = value,
        }
    }
}

impl StatusRow for TodoRow {
    type Status = TodoStatus;

    fn status(&self) -> TodoStatus {
        self.status
    }

    fn set_status(&mut self, status: TodoStatus) {
        self.status = status;
    }
}

/// Free-text sections of the meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    GoodNewsBusiness,
    GoodNewsPersonal,
    DiscussionNotes,
    ActionItems,
    CustomerHeadlines,
    InternalHeadlines,
}

impl FromStr for TextField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match wanted.as_str() {
            "goodnewsbusiness" => Ok(Self::GoodNewsBusiness),
            "goodnewspersonal" => Ok(Self::GoodNewsPersonal),
            "discussionnotes" => Ok(Self::DiscussionNotes),
            "actionitems" => Ok(Self::ActionItems),
            "customerheadlines" => Ok(Self::CustomerHeadlines),
            "internalheadlines" => Ok(Self::InternalHeadlines),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

/// Per-division meeting scores, 0 to 10. Zero means "not rated yet".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default, with = "lenient")]
    pub ecomm: Decimal,
    #[serde(default, with = "lenient")]
    pub hcga: Decimal,
    #[serde(default, with = "lenient")]
    pub live: Decimal,
    #[serde(default, with = "lenient")]
    pub sales: Decimal,
    #[serde(default, with = "lenient")]
    pub creative: Decimal,
    #[serde(default, with = "lenient")]
    pub prod: Decimal,
    #[serde(default, with = "lenient")]
    pub warehouse: Decimal,
}

impl Ratings {
    #[must_use]
    pub fn get(&self, division: Division) -> Decimal {
        match division {
            Division::Ecomm => self.ecomm,
            Division::Hcga => self.hcga,
            Division::Live => self.live,
            Division::Sales => self.sales,
            Division::Creative => self.creative,
            Division::Prod => self.prod,
            Division::Warehouse => self.warehouse,
        }
    }

    pub fn set(&mut self, division: Division, value: Decimal) {
        let slot = match division {
            Division::Ecomm => &mut self.ecomm,
            Division::Hcga => &mut self.hcga,
            Division::Live => &mut self.live,
            Division::Sales => &mut self.sales,
            Division::Creative => &mut self.creative,
            Division::Prod => &mut self.prod,
            Division::Warehouse => &mut self.warehouse,
        };
        *slot = value;
    }

    /// `(division, score)` pairs in meeting order.
    pub fn iter(&self) -> impl Iterator<Item = (Division, Decimal)> + '_ {
        Division::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// The aggregate edited during a weekly meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingRecord {
    pub date: String,
    pub attendance: Vec<Attendee>,
    pub good_news_business: String,
    pub good_news_personal: String,
    pub ecomm_table: Vec<KpiRow>,
    pub hcga_table: Vec<KpiRow>,
    pub live_table: Vec<KpiRow>,
    pub sales_table: Vec<KpiRow>,
    pub creative_table: Vec<KpiRow>,
    pub prod_table: Vec<KpiRow>,
    pub warehouse_table: Vec<KpiRow>,
    pub rocks_table: Vec<RockRow>,
    pub todo_table: Vec<TodoRow>,
    /// Issues queued for the identify-discuss-solve session.
    pub idt_issues: Vec<String>,
    pub discussion_notes: String,
    pub action_items: String,
    pub customer_headlines: String,
    pub internal_headlines: String,
    pub ratings: Ratings,
}

impl Default for MeetingRecord {
    fn default() -> Self {
        let roles = [
            "Div E-Comm",
            "Div HCGA/Fin",
            "Div Live",
            "Div Sales",
            "Div Creative",
            "Div Prod",
            "Div Whs/Log",
            "Notulen",
        ];
        Self {
            date: chrono::Local::now().format("%A, %-d %B %Y").to_string(),
            attendance: roles.into_iter().map(Attendee::present).collect(),
            good_news_business: String::new(),
            good_news_personal: String::new(),
            ecomm_table: vec![KpiRow::new("Total Omset", "Rp 285 Jt")],
            hcga_table: vec![KpiRow::new("Kesehatan Keuangan", "Positif")],
            live_table: vec![KpiRow::new("Total Omset Live", "Rp 30 Jt")],
            sales_table: vec![KpiRow::new("Respon Chat", "> 80%")],
            creative_table: vec![KpiRow::new("Konsistensi Posting", "100/mgg")],
            prod_table: vec![KpiRow::new("Kualitas (Reject)", "< 0.5%")],
            warehouse_table: vec![KpiRow::new("SL Pengiriman", "100%")],
            rocks_table: vec![RockRow {
                owner: "CEO".to_string(),
                goal: "Launch Dashboard Ecosystem".to_string(),
                status: TrackStatus::On,
            }],
            todo_table: vec![TodoRow::new("Final UI/UX Fidelity Check", "Dev")],
            idt_issues: Vec::new(),
            discussion_notes: String::new(),
            action_items: String::new(),
            customer_headlines: String::new(),
            internal_headlines: String::new(),
            ratings: Ratings::default(),
        }
    }
}

impl MeetingRecord {
    /// KPI table of one division.
    #[must_use]
    pub fn kpi_table(&self, division: Division) -> &Vec<KpiRow> {
        match division {
            Division::Ecomm => &self.ecomm_table,
            Division::Hcga => &self.hcga_table,
            Division::Live => &self.live_table,
            Division::Sales => &self.sales_table,
            Division::Creative => &self.creative_table,
            Division::Prod => &self.prod_table,
            Division::Warehouse => &self.warehouse_table,
        }
    }

    pub fn kpi_table_mut(&mut self, division: Division) -> &mut Vec<KpiRow> {
        match division {
            Division::Ecomm => &mut self.ecomm_table,
            Division::Hcga => &mut self.hcga_table,
            Division::Live => &mut self.live_table,
            Division::Sales => &mut self.sales_table,
            Division::Creative => &mut self.creative_table,
            Division::Prod => &mut self.prod_table,
            Division::Warehouse => &mut self.warehouse_table,
        }
    }

    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::GoodNewsBusiness => &self.good_news_business,
            TextField::GoodNewsPersonal => &self.good_news_personal,
            TextField::DiscussionNotes => &self.discussion_notes,
            TextField::ActionItems => &self.action_items,
            TextField::CustomerHeadlines => &self.customer_headlines,
            TextField::InternalHeadlines => &self.internal_headlines,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::GoodNewsBusiness => &mut self.good_news_business,
            TextField::GoodNewsPersonal => &mut self.good_news_personal,
            TextField::DiscussionNotes => &mut self.discussion_notes,
            TextField::ActionItems => &mut self.action_items,
            TextField::CustomerHeadlines => &mut self.customer_headlines,
            TextField::InternalHeadlines => &mut self.internal_headlines,
        }
    }

    /// Number of attendees marked present.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.attendance.iter().filter(|a| a.present).count()
    }
}
