//! Typed vocabulary for enumerated endpoint parameters and the wider
//! request payloads.
//!
//! Only closed, stable value sets documented by the service become enums;
//! open-ended codes (object type, resource) stay plain integers and the
//! service remains the sole validator.

use std::fmt;

use chrono::NaiveTime;

/// Grouping interval for meter history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Hour,
    Day,
    Month,
}

impl Group {
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Hour => "hour",
            Group::Day => "day",
            Group::Month => "month",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crane / relay control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterCommand {
    Activate,
    Deactivate,
}

impl MeterCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            MeterCommand::Activate => "activate",
            MeterCommand::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for MeterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery channel for reading-transmission schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    Email,
    Push,
    Sms,
    Telegram,
    MosRu,
    Mosobleirc,
}

impl ScheduleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleKind::Email => "email",
            ScheduleKind::Push => "push",
            ScheduleKind::Sms => "sms",
            ScheduleKind::Telegram => "telegram",
            ScheduleKind::MosRu => "mos_ru",
            ScheduleKind::Mosobleirc => "mosobleirc",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which events a notification covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Notification,
    Error,
    /// Both notifications and errors; wire value `notice+error`.
    NoticeAndError,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Notification => "notification",
            NoticeKind::Error => "error",
            NoticeKind::NoticeAndError => "notice+error",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery channel for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Email,
    Push,
    Sms,
    Telegram,
}

impl Dispatch {
    pub fn as_str(self) -> &'static str {
        match self {
            Dispatch::Email => "email",
            Dispatch::Push => "push",
            Dispatch::Sms => "sms",
            Dispatch::Telegram => "telegram",
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One controller input slot to bind during the second step of sensor
/// addition.
#[derive(Debug, Clone)]
pub struct SensorInput {
    /// Slot position reported by the discovery step. Becomes the
    /// `<n>_name` / `<n>_sn` field-name prefix on the wire.
    pub entrance_number: u32,
    /// Display name for the meter on this input, e.g. "Hot water meter".
    pub name: String,
    /// Serial number of the meter on this input.
    pub sn: String,
}

/// Payload for `object/add`.
#[derive(Debug, Clone, Default)]
pub struct NewObject {
    pub city: String,
    pub street: String,
    /// House number.
    pub building: String,
    /// Timezone offset, -12..=12.
    pub utc: i32,
    /// Object number / display name.
    pub number: Option<String>,
    /// Object type code, 0..=22 (1 apartment, 2 cottage, 22 house, ...).
    /// Sent under the wire key `type`.
    pub object_type: Option<u8>,
    /// TIN of the installation company.
    pub install_inn: Option<u64>,
    /// TIN of the management company.
    pub management_inn: Option<u64>,
    /// Personal account in the management company.
    pub personal_account: Option<String>,
    /// Installation company id.
    pub account_id: Option<String>,
}

/// Payload for schedule setup on `object/schedule`.
///
/// One endpoint serves three intents; the service infers which from the
/// fields supplied: `object_id` targets creation, `id` an edit, `delete`
/// a removal. The client forwards whatever combination the caller built
/// and leaves legality to the service.
#[derive(Debug, Clone)]
pub struct ScheduleSetup {
    /// Delivery channel. Sent under the wire key `type`.
    pub kind: ScheduleKind,
    /// Day of month; 0 for every day, 32 for the last day of the month.
    pub day: u8,
    /// Time of day the readings are sent.
    pub time: NaiveTime,
    /// Personal account, used by the mos_ru / mosobleirc channels.
    pub personal_account: String,
    /// Transmit readings with the fractional part (wire `1`/`0`).
    pub fraction: bool,
    /// Recipient: email address, username, or +7XXXXXXXXXX phone number,
    /// depending on the channel.
    pub receiver: String,
    /// Resource type code to transmit.
    pub resource: i64,
    /// Id of the object the schedule belongs to.
    pub object_id: i64,
    /// Existing schedule id, when editing.
    pub id: Option<i64>,
    /// Message signature.
    pub signature: Option<String>,
    /// Id of the schedule to delete.
    pub delete: Option<i64>,
}

/// Payload for notification setup on `object/notice`.
///
/// Create/edit/delete disambiguation works as for [`ScheduleSetup`].
#[derive(Debug, Clone)]
pub struct NoticeSetup {
    /// What to be notified about. Sent under the wire key `type`.
    pub kind: NoticeKind,
    /// Delivery channel.
    pub dispatch: Dispatch,
    /// Recipient: email address, username, or +7XXXXXXXXXX phone number,
    /// depending on the channel.
    pub receiver: String,
    /// Existing notification id, when editing.
    pub id: Option<i64>,
    /// Id of the object to create the notification in.
    pub object_id: Option<i64>,
    /// Id of the notification to delete.
    pub delete: Option<i64>,
}
