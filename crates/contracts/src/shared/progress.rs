//! Status history → vertical progress tracker stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendered state of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl StageStatus {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            StageStatus::Completed => "completed",
            StageStatus::InProgress => "in-progress",
            StageStatus::Upcoming => "upcoming",
        }
    }
}

/// A domain status that can be shown on a progress tracker.
pub trait TrackedStatus: Copy + Eq {
    /// Human label for the stage title.
    fn label(&self) -> &'static str;

    /// Stage status of the latest history entry while it is current.
    fn current_stage(&self) -> StageStatus;

    /// Message of the synthetic trailing stage; `None` for terminal statuses.
    fn next_stage_message(&self) -> Option<&'static str>;

    fn is_terminal(&self) -> bool {
        self.next_stage_message().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserRef {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// One status change of a contract or order. Created by the API only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<S> {
    pub id: String,
    pub status: S,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStage {
    pub id: String,
    pub status: StageStatus,
    pub title: String,
    /// Formatted date for real entries, the waiting message for the synthetic one.
    pub subtitle: String,
    pub user: Option<String>,
    pub note: Option<String>,
    pub synthetic: bool,
}

pub const NEXT_STAGE_ID: &str = "next";
pub const NEXT_STAGE_TITLE: &str = "Próximo paso";

/// Project `history` (oldest first) into tracker stages.
///
/// The last entry takes its stage status from the status table, every earlier
/// entry is completed. A non-terminal `current` status appends one upcoming
/// stage carrying its waiting message. With no history at all only that
/// trailing stage is produced.
pub fn project_stages<S: TrackedStatus>(current: S, history: &[HistoryEntry<S>]) -> Vec<ProgressStage> {
    let last = history.len().checked_sub(1);
    let mut stages: Vec<ProgressStage> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let status = if Some(i) == last {
                entry.status.current_stage()
            } else {
                StageStatus::Completed
            };
            ProgressStage {
                id: entry.id.clone(),
                status,
                title: entry.status.label().to_string(),
                subtitle: entry.created_on.format("%d/%m/%Y %H:%M").to_string(),
                user: entry.user.as_ref().map(UserRef::display_name),
                note: entry.note.clone().filter(|n| !n.trim().is_empty()),
                synthetic: false,
            }
        })
        .collect();

    if let Some(message) = current.next_stage_message() {
        stages.push(ProgressStage {
            id: NEXT_STAGE_ID.to_string(),
            status: StageStatus::Upcoming,
            title: NEXT_STAGE_TITLE.to_string(),
            subtitle: format!("Fecha a determinar. {}", message),
            user: None,
            note: None,
            synthetic: true,
        });
    }

    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_internal_order::InternalOrderStatus;
    use chrono::TimeZone;

    fn entry(id: &str, status: InternalOrderStatus) -> HistoryEntry<InternalOrderStatus> {
        HistoryEntry {
            id: id.to_string(),
            status,
            user: Some(UserRef {
                id: "1".into(),
                email: "deposito@empresa.com".into(),
                first_name: "Laura".into(),
                last_name: "Gómez".into(),
            }),
            note: None,
            created_on: Utc.with_ymd_and_hms(2024, 5, 2, 10, 30, 0).unwrap(),
        }
    }

    fn statuses(stages: &[ProgressStage]) -> Vec<StageStatus> {
        stages.iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_in_progress_order_gets_trailing_stage() {
        use InternalOrderStatus::*;
        let history = vec![entry("1", Pending), entry("2", InProgress), entry("3", InProgress)];
        let stages = project_stages(InProgress, &history);
        assert_eq!(
            statuses(&stages),
            vec![
                StageStatus::Completed,
                StageStatus::Completed,
                StageStatus::InProgress,
                StageStatus::Upcoming
            ]
        );
        let next = stages.last().unwrap();
        assert!(next.synthetic);
        assert!(next.subtitle.contains("Esperando completar"));
        assert_eq!(stages[0].user.as_deref(), Some("Laura Gómez"));
        assert_eq!(stages[0].subtitle, "02/05/2024 10:30");
    }

    #[test]
    fn test_terminal_single_entry() {
        let history = vec![entry("1", InternalOrderStatus::Completed)];
        let stages = project_stages(InternalOrderStatus::Completed, &history);
        assert_eq!(statuses(&stages), vec![StageStatus::Completed]);
        assert!(stages.iter().all(|s| !s.synthetic));
    }

    #[test]
    fn test_pending_single_entry_is_upcoming() {
        let history = vec![entry("1", InternalOrderStatus::Pending)];
        let stages = project_stages(InternalOrderStatus::Pending, &history);
        assert_eq!(statuses(&stages), vec![StageStatus::Upcoming, StageStatus::Upcoming]);
        assert!(stages[1].subtitle.contains("Esperando iniciar"));
    }

    #[test]
    fn test_stage_count_invariant() {
        use InternalOrderStatus::*;
        for n in 1..5 {
            let history: Vec<_> = (0..n).map(|i| entry(&i.to_string(), InProgress)).collect();
            assert_eq!(project_stages(InProgress, &history).len(), n + 1);
            let mut done = history.clone();
            done.push(entry("last", Canceled));
            assert_eq!(project_stages(Canceled, &done).len(), n + 1);
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            statuses(&project_stages(InternalOrderStatus::Pending, &[])),
            vec![StageStatus::Upcoming]
        );
        assert!(project_stages(InternalOrderStatus::Completed, &[]).is_empty());
    }

    #[test]
    fn test_blank_notes_dropped() {
        let mut e = entry("1", InternalOrderStatus::Completed);
        e.note = Some("  ".into());
        assert_eq!(project_stages(InternalOrderStatus::Completed, &[e])[0].note, None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserRef {
            id: "2".into(),
            email: "a@b.com".into(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "a@b.com");
    }
}
