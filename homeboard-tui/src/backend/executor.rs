//! Command 执行器

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::future::join_all;
use homeboard_app::AppState;
use homeboard_core::CoreResult;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::ExternalPlayer;
use crate::message::{Command, DataMessage, WidgetCommand};
use crate::model::ZoneId;

pub struct Backend {
    state: Arc<AppState>,
    player: Arc<ExternalPlayer>,
    tx: UnboundedSender<DataMessage>,
    runtime: Handle,
    /// 退出前必须等完的写操作（任务提交、选择持久化）
    writes: Mutex<Vec<JoinHandle<()>>>,
}

impl Backend {
    pub fn new(
        state: Arc<AppState>,
        player: Arc<ExternalPlayer>,
        tx: UnboundedSender<DataMessage>,
        runtime: Handle,
    ) -> Self {
        Self {
            state,
            player,
            tx,
            runtime,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Wait up to `limit` for writes still in flight, so quitting does not cancel them.
    pub async fn finish_writes(&self, limit: Duration) {
        let pending: Vec<_> = std::mem::take(
            &mut *self.writes.lock().unwrap_or_else(PoisonError::into_inner),
        )
        .into_iter()
        .filter(|h| !h.is_finished())
        .collect();
        if pending.is_empty() {
            return;
        }

        log::info!("Waiting for {} pending write(s)", pending.len());
        if tokio::time::timeout(limit, join_all(pending)).await.is_err() {
            log::warn!("Gave up on pending writes after {limit:?}");
        }
    }

    pub fn execute(&self, command: Command) {
        log::debug!("Executing {command:?}");
        match command {
            Command::Widget(widget) => self.execute_widget(widget),
            Command::RefreshAll => {
                let state = Arc::clone(&self.state);
                self.spawn(async move {
                    state.invalidate_all().await;
                    DataMessage::CacheInvalidated
                });
            }
            Command::SignOut => {
                let state = Arc::clone(&self.state);
                let player = Arc::clone(&self.player);
                self.spawn(async move {
                    player.stop().await;
                    let result = state.token_manager.sign_out().await;
                    report("sign out", &result);
                    DataMessage::SignedOut(result)
                });
            }
            Command::RestoreSelections => self.restore_selections(),
        }
    }

    fn execute_widget(&self, command: WidgetCommand) {
        let state = Arc::clone(&self.state);
        match command {
            WidgetCommand::LoadSubmenu(zone) => match zone {
                ZoneId::Tasks => self.spawn(async move {
                    let result = state.tasks.task_lists().await;
                    report("task lists", &result);
                    DataMessage::TaskLists(result)
                }),
                ZoneId::Photos => self.spawn(async move {
                    let result = state.media.photo_folders().await;
                    report("photo folders", &result);
                    DataMessage::PhotoFolders(result)
                }),
                ZoneId::Music => self.spawn(async move {
                    let result = state.media.playlists().await;
                    report("playlists", &result);
                    DataMessage::Playlists(result)
                }),
                other => log::debug!("{other:?} has no submenu"),
            },
            WidgetCommand::LoadContent { zone, id } => match zone {
                ZoneId::Tasks => self.spawn(async move {
                    let result = state.tasks.tasks(&id).await;
                    report("tasks", &result);
                    DataMessage::Tasks {
                        list_id: id,
                        result,
                    }
                }),
                ZoneId::Photos => self.spawn(async move {
                    let result = state.media.photos(&id).await;
                    report("photos", &result);
                    DataMessage::Photos {
                        folder_id: id,
                        result,
                    }
                }),
                ZoneId::Music => self.spawn(async move {
                    let result = state.media.playlist_items(&id).await;
                    report("playlist items", &result);
                    DataMessage::PlaylistItems {
                        playlist_id: id,
                        result,
                    }
                }),
                other => log::debug!("{other:?} has no content list"),
            },
            WidgetCommand::LoadZone(zone) => match zone {
                ZoneId::Calendar => self.spawn(async move {
                    let result = state.calendar.upcoming_events().await;
                    report("calendar events", &result);
                    DataMessage::Events(result)
                }),
                ZoneId::Weather => self.spawn(async move {
                    let result = state.info.weather().await;
                    report("weather", &result);
                    DataMessage::Weather(result)
                }),
                ZoneId::Astronomy => self.spawn(async move {
                    let result = state.info.astronomy_picture().await;
                    report("astronomy picture", &result);
                    DataMessage::Astronomy(result)
                }),
                other => log::debug!("{other:?} loads through its submenu"),
            },
            WidgetCommand::PersistSelection { key, selection } => self.spawn_write(async move {
                match state.selections().set(key, &selection).await {
                    Ok(()) => DataMessage::Status(format!("Selected {}", selection.name)),
                    Err(e) => {
                        log::error!("Failed to persist {key:?} selection: {e}");
                        DataMessage::Status("Could not save selection".to_string())
                    }
                }
            }),
            WidgetCommand::CommitTasks(refs) => self.spawn_write(async move {
                let result = state.tasks.commit_completions(refs).await;
                report("task commit", &result);
                DataMessage::TasksCommitted(result)
            }),
            WidgetCommand::Play { title, url } => {
                let player = Arc::clone(&self.player);
                self.spawn(async move {
                    match player.play(&url).await {
                        Ok(()) => DataMessage::PlayerStarted { title },
                        Err(e) => {
                            log::warn!("Player failed to start {title}: {e}");
                            DataMessage::PlayerFailed(format!("Could not play {title}: {e}"))
                        }
                    }
                });
            }
            WidgetCommand::TogglePause => {
                let player = Arc::clone(&self.player);
                self.spawn(async move {
                    match player.toggle_pause().await {
                        Ok(true) => DataMessage::Status("Paused".to_string()),
                        Ok(false) => DataMessage::Status("Resumed".to_string()),
                        Err(e) => DataMessage::PlayerFailed(e.to_string()),
                    }
                });
            }
        }
    }

    /// Read every persisted selection concurrently; each one found is sent separately.
    fn restore_selections(&self) {
        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let zones = ZoneId::ALL
                .into_iter()
                .filter_map(|zone| zone.selection_key().map(|key| (zone, key)));
            let lookups = zones.map(|(zone, key)| {
                let state = Arc::clone(&state);
                async move { (zone, state.selections().get(key).await) }
            });

            for (zone, result) in join_all(lookups).await {
                match result {
                    Ok(Some(selection)) => {
                        log::info!("Restored {zone:?} selection {}", selection.id);
                        send(&tx, DataMessage::SelectionRestored { zone, selection });
                    }
                    Ok(None) => {}
                    Err(e) => log::error!("Failed to read {zone:?} selection: {e}"),
                }
            }
        });
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = DataMessage> + Send + 'static,
    {
        drop(self.spawn_reply(task));
    }

    /// Like `spawn`, but `finish_writes` waits for it.
    fn spawn_write<F>(&self, task: F)
    where
        F: Future<Output = DataMessage> + Send + 'static,
    {
        let handle = self.spawn_reply(task);
        let mut writes = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        writes.retain(|h| !h.is_finished());
        writes.push(handle);
    }

    fn spawn_reply<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = DataMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            send(&tx, task.await);
        })
    }
}

fn send(tx: &UnboundedSender<DataMessage>, msg: DataMessage) {
    if tx.send(msg).is_err() {
        log::debug!("UI loop is gone, dropping result");
    }
}

/// Log a failed call at the level its error deserves.
fn report<T>(what: &str, result: &CoreResult<T>) {
    if let Err(e) = result {
        if e.is_expected() {
            log::warn!("Loading {what} failed: {e}");
        } else {
            log::error!("Loading {what} failed: {e}");
        }
    }
}
