use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ActivityEntry, PlatformRole, StaffMember};

/// Staff list filter as driven by the search box and role select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StaffFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl StaffFilter {
    pub fn matches(&self, member: &StaffMember) -> bool {
        if !self.include_inactive && !member.active {
            return false;
        }
        if let Some(role) = &self.role {
            if member.role != *role {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                member.name.to_lowercase().contains(&q) || member.email.to_lowercase().contains(&q)
            }
        }
    }
}

/// Staff members passing `filter`, in their original order.
pub fn filter_staff<'a>(staff: &'a [StaffMember], filter: &StaffFilter) -> Vec<&'a StaffMember> {
    staff.iter().filter(|m| filter.matches(m)).collect()
}

/// Newest entries first, at most `limit` of them.
pub fn recent_activity(entries: &[ActivityEntry], limit: usize) -> Vec<&ActivityEntry> {
    let mut sorted: Vec<&ActivityEntry> = entries.iter().collect();
    // stable sort keeps input order for equal timestamps
    sorted.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    sorted.truncate(limit);
    sorted
}

/// Headline numbers for the organization dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrgStats {
    pub total_staff: usize,
    pub active_staff: usize,
    pub admins: usize,
    pub activity_last_7_days: usize,
}

impl OrgStats {
    pub fn compute(staff: &[StaffMember], activity: &[ActivityEntry], now: DateTime<Utc>) -> Self {
        let window_start = now - Duration::days(7);
        Self {
            total_staff: staff.len(),
            active_staff: staff.iter().filter(|m| m.active).count(),
            admins: staff
                .iter()
                .filter(|m| PlatformRole::parse(&m.role) == Some(PlatformRole::OrgAdmin))
                .count(),
            activity_last_7_days: activity
                .iter()
                .filter(|e| e.occurred_at > window_start && e.occurred_at <= now)
                .count(),
        }
    }
}
