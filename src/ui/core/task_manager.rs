use super::actions::{Action, DialogType};
use crate::backend::SessionBackend;
use crate::constants::{ERROR_LINE_ITEMS_LOAD_FAILED, ERROR_SESSIONS_LOAD_FAILED};
use crate::entities::Session;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs backend requests off the UI loop and reports results as [`Action`]s.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    backend: Arc<dyn SessionBackend>,
}

impl TaskManager {
    pub fn new(backend: Arc<dyn SessionBackend>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                backend,
            },
            rx,
        )
    }

    /// Spawn `future` and send the action it resolves to
    fn spawn<Fut>(&mut self, description: String, future: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        log::debug!("Task {}: {}", task_id, description);

        let handle = tokio::spawn(async move {
            let action = future.await;
            // The receiver is gone only when the app is shutting down.
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    pub fn spawn_load_sessions(&mut self) -> TaskId {
        let backend = Arc::clone(&self.backend);
        self.spawn("Loading sessions".to_string(), async move {
            match backend.list_sessions().await {
                Ok(sessions) => Action::SessionsLoaded(sessions),
                Err(e) => Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_SESSIONS_LOAD_FAILED, e))),
            }
        })
    }

    /// Delete one session. Always answers with `DeleteSettled`, success or not.
    pub fn spawn_delete(&mut self, session: Session) -> TaskId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Delete session '{}'", session.name);
        self.spawn(description, async move {
            let outcome = backend.delete_session(session.id).await.map_err(|e| e.to_string());
            Action::DeleteSettled {
                session_id: session.id,
                outcome,
            }
        })
    }

    pub fn spawn_bulk_delete(&mut self, sessions: Vec<Session>) -> TaskId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Delete {} sessions", sessions.len());
        self.spawn(description, async move {
            let mut deleted = 0;
            let mut failures = Vec::new();
            for session in sessions {
                match backend.delete_session(session.id).await {
                    Ok(()) => deleted += 1,
                    Err(e) => failures.push(format!("{}: {}", session.name, e)),
                }
            }
            Action::BulkDeleteSettled { deleted, failures }
        })
    }

    pub fn spawn_close_all(&mut self, sessions: Vec<Session>, closure_reason: String) -> TaskId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Close {} sessions", sessions.len());
        self.spawn(description, async move {
            let ids: Vec<Uuid> = sessions.iter().map(|session| session.id).collect();
            let outcome = backend
                .close_sessions(&ids, &closure_reason)
                .await
                .map(|()| ids.len())
                .map_err(|e| e.to_string());
            Action::CloseAllSettled(outcome)
        })
    }

    pub fn spawn_export(&mut self, ids: Vec<Uuid>) -> TaskId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Export {} sessions", ids.len());
        self.spawn(description, async move {
            Action::ExportSettled(backend.export_sessions(&ids).await.map_err(|e| e.to_string()))
        })
    }

    pub fn spawn_line_items(&mut self, session: Session) -> TaskId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Load line items for '{}'", session.name);
        self.spawn(description, async move {
            match backend.line_items(session.id).await {
                Ok(items) => Action::LineItemsLoaded { session, items },
                Err(e) => Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_LINE_ITEMS_LOAD_FAILED, e))),
            }
        })
    }

    /// Drop bookkeeping for finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .values()
            .filter(|task| task.handle.is_finished())
            .map(|task| task.id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Task {} finished after {:?}: {}",
                    task.id,
                    task.started_at.elapsed(),
                    task.description
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
