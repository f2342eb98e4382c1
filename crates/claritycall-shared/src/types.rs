//! Domain model structs as they appear on the wire.
//!
//! The backend speaks camelCase JSON and uses `_id` for record identifiers,
//! so every struct maps field names explicitly. All records are owned by
//! the remote service; the client holds them only as read-through caches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SLOT_DURATION_MINUTES;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Server-assigned slot identifier. Opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SlotId(pub String);

/// Server-assigned booking identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BookingId(pub String);

/// Server-assigned user identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

/// Server-assigned chat conversation identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ConversationId(pub String);

/// Server-assigned notification identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotificationId(pub String);

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for BookingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Which side of the marketplace the caller is acting as.
///
/// The same account can hold both roles; the role selects which booking
/// list endpoint is queried and which counterpart the server embeds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Seeker,
    Mentor,
}

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// A bookable interval offered by a mentor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "id", alias = "_id")]
    pub id: SlotId,
    pub owner_id: Option<UserId>,
    /// Absolute start instant of the interval.
    pub start: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    /// Price in the platform currency; 0 means free.
    #[serde(default)]
    pub price: f64,
    /// Optional free-text annotation shown with the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_SLOT_DURATION_MINUTES
}

impl Slot {
    /// Whether the slot is free of charge.
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// Lifecycle state of a booking. Transitions are monotonic in practice:
/// pending/confirmed move to completed or cancelled, never backward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking can still change state.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A seeker's reservation of a [`Slot`].
///
/// The server returns bookings with the referenced slot and both user
/// summaries embedded in place of their ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "id", alias = "_id")]
    pub id: BookingId,
    #[serde(rename = "slotId")]
    pub slot: Slot,
    #[serde(rename = "userId")]
    pub seeker: UserSummary,
    #[serde(rename = "mentorId")]
    pub mentor: UserSummary,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set by the mentor on confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// The user on the other side of the booking from the caller's role.
    pub fn counterpart(&self, role: Role) -> &UserSummary {
        match role {
            Role::Seeker => &self.mentor,
            Role::Mentor => &self.seeker,
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Public fields of a user as embedded in bookings and conversations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "id", alias = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserSummary {
    /// First and last name joined, falling back to the email address.
    pub fn display_name(&self) -> String {
        display_name(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
        )
    }

    /// One or two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        initials(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
        )
    }
}

/// The authenticated account as returned by the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "id", alias = "_id")]
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl SessionUser {
    /// First and last name joined, falling back to the email address.
    pub fn display_name(&self) -> String {
        display_name(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            Some(&self.email),
        )
    }

    /// One or two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        initials(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            Some(&self.email),
        )
    }
}

fn display_name(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> String {
    match (first, last) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(f), None) => f.to_string(),
        _ => email.unwrap_or("User").to_string(),
    }
}

fn initials(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> String {
    let lead = first
        .or(email)
        .and_then(|s| s.chars().next())
        .unwrap_or('U');
    let mut out: String = lead.to_uppercase().collect();
    if let Some(c) = last.and_then(|s| s.chars().next()) {
        out.extend(c.to_uppercase());
    }
    out
}

// ---------------------------------------------------------------------------
// Mentor directory
// ---------------------------------------------------------------------------

/// A mentor's publicly visible record from the directory listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    #[serde(rename = "id", alias = "_id")]
    pub id: UserId,
    /// Pre-joined display name, when the backend provides one.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Professional field, e.g. "Backend Engineering".
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl MentorProfile {
    /// Pre-joined name if present, otherwise first and last name.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let joined = joined.trim();
        if joined.is_empty() {
            "Mentor".to_string()
        } else {
            joined.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Notification category. The backend adds categories over time, so
/// unknown values collapse to [`NotificationKind::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ChatMessage,
    BookingUpdate,
    #[default]
    #[serde(other)]
    Other,
}

/// Structured payload attached to a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
}

/// A notification delivered to the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "id", alias = "_id")]
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub data: Option<NotificationData>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A chat thread between a seeker and a mentor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(rename = "id", alias = "_id")]
    pub id: ConversationId,
    /// The seeker side of the thread.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// The mentor side of the thread.
    #[serde(default)]
    pub mentor_id: Option<UserId>,
    #[serde(default)]
    pub counterpart_name: Option<String>,
    #[serde(default)]
    pub counterpart: Option<UserSummary>,
    #[serde(default)]
    pub last_message_text: Option<String>,
    #[serde(default)]
    pub last_message_at: Option<DateTime<Utc>>,
}

/// A file attached to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub url: String,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
}
