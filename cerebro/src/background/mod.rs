pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks running network tasks by id
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    next_mutation: u64,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_mutation: 0,
        }
    }

    /// Spawn a read-only load, aborting any still-running task with the same id
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        if let Some(handle) = self.tasks.remove(&task_id) {
            tracing::debug!("Aborting previous task {}", task_id);
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Spawn a task that writes to the server. Each one gets its own id, so it
    /// runs to completion unless the whole manager is cancelled.
    pub fn spawn_mutation_task<F>(&mut self, label: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        self.next_mutation += 1;
        let task_id = format!("{}#{}", label, self.next_mutation);
        tracing::debug!("Starting mutation {}", task_id);

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    #[cfg(test)]
    fn is_running(&self, task_id: &str) -> bool {
        self.tasks
            .get(task_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel all running tasks (used on shutdown and logout)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn same_id_aborts_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = BackgroundTaskManager::new();

        let slow_tx = tx.clone();
        manager.spawn_load_task("refresh".to_string(), async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let _ = slow_tx.send("stale");
        });
        manager.spawn_load_task("refresh".to_string(), async move {
            let _ = tx.send("fresh");
        });

        assert_eq!(rx.recv().await, Some("fresh"));
        // Both senders are gone once the aborted task is dropped
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn mutations_with_the_same_label_all_finish() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = BackgroundTaskManager::new();

        for n in 0..3 {
            let tx = tx.clone();
            manager.spawn_mutation_task("delete_section_COMIDA", async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let _ = tx.send(n);
            });
        }
        drop(tx);

        let mut finished = Vec::new();
        while let Some(n) = rx.recv().await {
            finished.push(n);
        }
        finished.sort();
        assert_eq!(finished, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn cancel_all_stops_everything() {
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_load_task("a".to_string(), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        assert!(manager.is_running("a"));
        manager.cancel_all();
        assert!(!manager.is_running("a"));
    }
}
