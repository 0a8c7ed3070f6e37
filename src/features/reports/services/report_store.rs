use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::features::reports::models::{Report, ReportDraft, ReportFilter, ReportStatus};
use crate::shared::clock::Clock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("report {0} not found")]
    NotFound(i64),

    #[error("report write did not complete: {0}")]
    Interrupted(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

struct Entry {
    /// Insertion sequence, breaks `submitted_at` ties in listings
    seq: u64,
    report: Report,
}

#[derive(Default)]
struct State {
    entries: Vec<Entry>,
    /// id -> position in `entries`; entries are never removed
    index: HashMap<i64, usize>,
    next_id: i64,
    next_seq: u64,
}

impl State {
    fn push(&mut self, report: Report) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(report.id, self.entries.len());
        self.entries.push(Entry { seq, report });
    }

    fn entry_mut(&mut self, id: i64) -> Option<&mut Entry> {
        let pos = *self.index.get(&id)?;
        self.entries.get_mut(pos)
    }
}

/// Authoritative in-memory collection of reports.
///
/// Writers are serialized by a single `RwLock`; id assignment plus insertion,
/// and lookup plus replacement, each happen under one write guard with no
/// await point inside, so readers never see a partial update. Writes run on
/// a detached task: once `create` or `update_status` has been called, the
/// mutation completes even if the caller stops waiting.
pub struct ReportStore {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock>,
    simulated_latency: Duration,
}

impl ReportStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_reports(Vec::new(), clock)
    }

    /// Pre-seeded store. Ids continue from the highest seeded id; reports
    /// later in `reports` count as inserted later.
    pub fn with_reports(reports: Vec<Report>, clock: Arc<dyn Clock>) -> Self {
        let mut state = State::default();

        for report in reports {
            if state.index.contains_key(&report.id) {
                tracing::warn!("Skipping seeded report with duplicate id {}", report.id);
                continue;
            }
            state.push(report);
        }
        state.next_id = state.index.keys().max().map_or(1, |max| max + 1);

        Self {
            state: Arc::new(RwLock::new(state)),
            clock,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Delay `create` and `update_status` to mimic a remote backend
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Sleep for the simulated latency, then apply `op` under the write
    /// guard with the time read after the guard was taken.
    async fn spawn_write<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&mut State, DateTime<Utc>) -> T + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(&self.state);
        let clock = Arc::clone(&self.clock);
        let latency = self.simulated_latency;

        tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let mut guard = state.write().await;
            let now = clock.now();
            op(&mut *guard, now)
        })
        .await
        .map_err(|e| {
            tracing::error!("Report store write task failed: {}", e);
            StoreError::Interrupted(e.to_string())
        })
    }

    /// All reports, most recently submitted first
    pub async fn list(&self) -> Vec<Report> {
        self.list_filtered(&ReportFilter::default()).await
    }

    /// Reports matching `filter`, in `list` order
    pub async fn list_filtered(&self, filter: &ReportFilter) -> Vec<Report> {
        let state = self.state.read().await;

        let mut matching: Vec<&Entry> = state
            .entries
            .iter()
            .filter(|entry| filter.matches(&entry.report))
            .collect();

        matching.sort_by(|a, b| {
            b.report
                .submitted_at
                .cmp(&a.report.submitted_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        matching
            .into_iter()
            .map(|entry| entry.report.clone())
            .collect()
    }

    pub async fn get(&self, id: i64) -> Option<Report> {
        let state = self.state.read().await;
        let pos = *state.index.get(&id)?;
        state.entries.get(pos).map(|entry| entry.report.clone())
    }

    /// Store a new report as `Submitted`, stamped with the current time
    pub async fn create(&self, draft: ReportDraft) -> StoreResult<Report> {
        self.spawn_write(move |state, now| {
            let id = state.next_id;
            state.next_id += 1;

            let report = Report {
                id,
                title: draft.title,
                description: draft.description,
                category: draft.category,
                priority: draft.priority,
                status: ReportStatus::Submitted,
                location: draft.location,
                image_url: draft.image_url,
                submitted_at: now,
                resolved_at: None,
                submitted_by: draft.submitted_by,
            };
            state.push(report.clone());

            tracing::info!(
                "Created report: {} (category: {}, priority: {})",
                report.id,
                report.category,
                report.priority
            );

            report
        })
        .await
    }

    /// Replace the report's status. `resolved_at` is stamped when moving to
    /// `Resolved` and cleared for any other status.
    pub async fn update_status(&self, id: i64, status: ReportStatus) -> StoreResult<Report> {
        self.spawn_write(move |state, now| -> StoreResult<Report> {
            let entry = state.entry_mut(id).ok_or(StoreError::NotFound(id))?;

            let resolved_at =
                (status == ReportStatus::Resolved).then(|| now.max(entry.report.submitted_at));
            let updated = Report {
                status,
                resolved_at,
                ..entry.report.clone()
            };
            entry.report = updated.clone();

            tracing::info!("Updated report {} status to {}", id, status);

            Ok(updated)
        })
        .await?
    }
}
