// ============================================================
// OPTIMISTIC STATUS UPDATES
// ============================================================
// Accept/reject applications and mark interview attendance/selection:
// flip the local value first, persist second, roll back and reconcile
// against server truth when the backend says no.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::error::{AppError, Result};
use crate::domain::recruitment::{Application, Interview, StatusChange};
use crate::infrastructure::api::RecruitApi;

/// A funnel entity whose status fields can be toggled from a list view.
#[async_trait]
pub trait StatusEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    /// Apply the change locally; Err when the change targets a field this
    /// entity does not have.
    fn apply(&mut self, change: &StatusChange) -> Result<()>;

    async fn persist(api: &dyn RecruitApi, id: i64, change: &StatusChange) -> Result<()>;

    /// Fresh copy of the whole list, used to reconcile after a rejected
    /// update.
    async fn refetch(api: &dyn RecruitApi) -> Result<Vec<Self>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Change applied and confirmed by the backend
    Applied,
    /// An update for this entity is already awaiting a response; the
    /// repeat trigger was dropped
    IgnoredInFlight,
}

struct BoardState<T> {
    items: Vec<T>,
    in_flight: HashSet<i64>,
}

/// One list view's worth of entities plus the in-flight identifier set
/// preventing duplicate submissions.
pub struct StatusBoard<T: StatusEntity> {
    state: Mutex<BoardState<T>>,
}

impl<T: StatusEntity> StatusBoard<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            state: Mutex::new(BoardState {
                items,
                in_flight: HashSet::new(),
            }),
        }
    }

    /// Snapshot of the displayed list.
    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }

    pub async fn is_in_flight(&self, id: i64) -> bool {
        self.state.lock().await.in_flight.contains(&id)
    }

    /// Replace the list with a fresh fetch (initial load or manual refresh).
    pub async fn reload(&self, api: &dyn RecruitApi) -> Result<()> {
        let fresh = T::refetch(api).await?;
        self.state.lock().await.items = fresh;
        Ok(())
    }

    /// Toggle a status field optimistically and persist it.
    ///
    /// Only one mutation per entity may be in flight; repeat triggers are
    /// ignored while one is pending. Different entities update
    /// independently. On backend failure the field is rolled back, the
    /// list is refetched to reconcile, and the error is returned for a
    /// blocking notification.
    pub async fn update(
        &self,
        id: i64,
        change: StatusChange,
        api: &dyn RecruitApi,
    ) -> Result<UpdateOutcome> {
        // optimistic phase, lock released before the network call
        let prior = {
            let mut state = self.state.lock().await;
            if state.in_flight.contains(&id) {
                return Ok(UpdateOutcome::IgnoredInFlight);
            }
            let pos = state
                .items
                .iter()
                .position(|item| item.id() == id)
                .ok_or_else(|| AppError::NotFound(format!("No entity with id {}", id)))?;

            let prior = state.items[pos].clone();
            state.items[pos].apply(&change)?;
            state.in_flight.insert(id);
            prior
        };

        match T::persist(api, id, &change).await {
            Ok(()) => {
                self.state.lock().await.in_flight.remove(&id);
                Ok(UpdateOutcome::Applied)
            }
            Err(err) => {
                {
                    let mut state = self.state.lock().await;
                    state.in_flight.remove(&id);
                    if let Some(item) = state.items.iter_mut().find(|item| item.id() == id) {
                        *item = prior;
                    }
                }
                // reconcile against server truth; the rolled-back value
                // stands if the refetch fails too
                match T::refetch(api).await {
                    Ok(fresh) => self.state.lock().await.items = fresh,
                    Err(refetch_err) => {
                        warn!(error = %refetch_err, "Reconciling refetch failed after rollback")
                    }
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl StatusEntity for Application {
    fn id(&self) -> i64 {
        self.id
    }

    fn apply(&mut self, change: &StatusChange) -> Result<()> {
        match change {
            StatusChange::Application(status) => {
                self.status = *status;
                Ok(())
            }
            _ => Err(AppError::Validation(
                "Applications only carry an accept/reject status".to_string(),
            )),
        }
    }

    async fn persist(api: &dyn RecruitApi, id: i64, change: &StatusChange) -> Result<()> {
        match change {
            StatusChange::Application(status) => api.update_application_status(id, *status).await,
            _ => Err(AppError::Validation(
                "Applications only carry an accept/reject status".to_string(),
            )),
        }
    }

    async fn refetch(api: &dyn RecruitApi) -> Result<Vec<Self>> {
        api.list_applications(None).await
    }
}

#[async_trait]
impl StatusEntity for Interview {
    fn id(&self) -> i64 {
        self.id
    }

    fn apply(&mut self, change: &StatusChange) -> Result<()> {
        match change {
            StatusChange::Attendance(attended) => {
                self.attended = Some(*attended);
                Ok(())
            }
            StatusChange::Selection(selected) => {
                self.selected = Some(*selected);
                Ok(())
            }
            StatusChange::Application(_) => Err(AppError::Validation(
                "Interviews carry attendance and selection flags only".to_string(),
            )),
        }
    }

    async fn persist(api: &dyn RecruitApi, id: i64, change: &StatusChange) -> Result<()> {
        match change {
            StatusChange::Attendance(attended) => {
                api.set_interview_attendance(id, *attended).await
            }
            StatusChange::Selection(selected) => api.set_interview_selection(id, *selected).await,
            StatusChange::Application(_) => Err(AppError::Validation(
                "Interviews carry attendance and selection flags only".to_string(),
            )),
        }
    }

    async fn refetch(api: &dyn RecruitApi) -> Result<Vec<Self>> {
        api.list_interviews().await
    }
}
