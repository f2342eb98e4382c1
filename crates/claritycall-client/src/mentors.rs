//! The public mentor directory and a mentor's bookable slot board.

use tracing::{info, warn};

use claritycall_api::ApiClient;
use claritycall_shared::types::{Booking, MentorProfile, SessionUser, Slot, SlotId, UserId};

use crate::error::Result;

/// One card in the directory grid, mapped from the raw profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorCard {
    pub id: UserId,
    pub name: String,
    /// Professional field shown under the name.
    pub field: String,
    pub rating: f64,
    pub reviews: u32,
    pub expertise: Vec<String>,
    /// Absolute image URL, empty when the mentor has none.
    pub image: String,
}

impl MentorCard {
    fn from_profile(profile: &MentorProfile, api: &ApiClient) -> Self {
        // Profiles without expertise tags fall back to the bio as a
        // single tag, matching the directory's card layout.
        let expertise = if profile.expertise.is_empty() {
            profile.bio.clone().map(|b| vec![b]).unwrap_or_default()
        } else {
            profile.expertise.clone()
        };

        Self {
            id: profile.id.clone(),
            name: profile.display_name(),
            field: profile
                .field
                .clone()
                .unwrap_or_else(|| "Mentor".to_string()),
            rating: profile.rating.unwrap_or(4.8),
            reviews: profile.reviews.unwrap_or(0),
            expertise,
            image: profile
                .profile_image
                .as_deref()
                .map(|p| api.resolve_file_url(p))
                .unwrap_or_default(),
        }
    }
}

/// Whether a directory entry is the current user's own profile.
///
/// Matches by id or by case-insensitive email, since the directory and
/// the session endpoint do not always agree on which fields they return.
fn is_self(profile: &MentorProfile, current: &SessionUser) -> bool {
    if profile.id == current.id {
        return true;
    }
    match profile.email.as_deref() {
        Some(email) => email.eq_ignore_ascii_case(&current.email),
        None => false,
    }
}

/// The browsable list of mentors, excluding the current user.
#[derive(Debug)]
pub struct MentorDirectory {
    api: ApiClient,
    mentors: Vec<MentorCard>,
}

impl MentorDirectory {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            mentors: Vec::new(),
        }
    }

    /// The cached cards, in server order.
    pub fn mentors(&self) -> &[MentorCard] {
        &self.mentors
    }

    /// Re-fetch the directory, dropping the current user's own entry.
    pub async fn refresh(&mut self, current: Option<&SessionUser>) -> Result<()> {
        let profiles = self.api.list_mentors().await?;
        self.mentors = profiles
            .iter()
            .filter(|p| current.map_or(true, |me| !is_self(p, me)))
            .map(|p| MentorCard::from_profile(p, &self.api))
            .collect();
        Ok(())
    }

    /// Fetch one mentor's profile, falling back to a directory scan when
    /// the by-id endpoint is unavailable.
    pub async fn profile(&self, id: &UserId) -> Result<Option<MentorProfile>> {
        match self.api.get_mentor(id).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(mentor = %id, error = %e, "By-id fetch failed, scanning directory");
                let list = self.api.list_mentors().await?;
                Ok(list.into_iter().find(|m| &m.id == id))
            }
        }
    }
}

/// A mentor's publicly bookable slots as seen by a seeker.
///
/// Availability after a booking is server-authoritative (the client has
/// no capacity model), so a successful booking invalidates and reloads
/// the whole board instead of removing the slot locally.
#[derive(Debug)]
pub struct PublicSlotBoard {
    api: ApiClient,
    mentor_id: UserId,
    /// `None` until the first load completes.
    slots: Option<Vec<Slot>>,
}

impl PublicSlotBoard {
    pub fn new(api: ApiClient, mentor_id: UserId) -> Self {
        Self {
            api,
            mentor_id,
            slots: None,
        }
    }

    /// Whether an initial load has completed.
    pub fn loaded(&self) -> bool {
        self.slots.is_some()
    }

    /// The loaded slots, or `None` before the first load.
    pub fn slots(&self) -> Option<&[Slot]> {
        self.slots.as_deref()
    }

    /// Drop the loaded state so the next render shows "loading" until
    /// [`refresh`](Self::refresh) completes.
    pub fn invalidate(&mut self) {
        self.slots = None;
    }

    /// Re-fetch the public slots. A failed fetch renders as an empty
    /// board rather than an error; the listing is best-effort.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.list_public_slots(&self.mentor_id).await {
            Ok(slots) => self.slots = Some(slots),
            Err(e) => {
                warn!(mentor = %self.mentor_id, error = %e, "Could not load public slots");
                self.slots = Some(Vec::new());
            }
        }
        Ok(())
    }

    /// Book a slot on this board, then reload the whole board.
    pub async fn book(&mut self, slot_id: &SlotId, notes: Option<&str>) -> Result<Booking> {
        let booking = self.api.create_booking(slot_id, notes).await?;
        info!(booking = %booking.id, slot = %slot_id, "Booking created");

        self.invalidate();
        self.refresh().await?;
        Ok(booking)
    }
}
