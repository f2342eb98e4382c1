//! Public mentor directory reads.

use claritycall_shared::types::{MentorProfile, UserId};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// List all publicly visible mentors.
    pub async fn list_mentors(&self) -> Result<Vec<MentorProfile>> {
        self.get_json("/api/mentors").await
    }

    /// Fetch a single mentor's public profile.
    pub async fn get_mentor(&self, id: &UserId) -> Result<MentorProfile> {
        self.get_json(&format!("/api/mentors/{id}")).await
    }
}
