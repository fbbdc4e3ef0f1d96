//! 外部播放器
//!
//! 曲目交给 `player.command <url>`（默认 mpv）播放。首次播放前用
//! `<command> --version` 探测播放器是否可用，探测经 `ReadyGuard` 只执行一次，
//! 并发的首次播放会等待同一次探测。

use std::process::Stdio;

use homeboard_core::error::{CoreError, CoreResult};
use homeboard_core::services::ReadyGuard;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

pub struct ExternalPlayer {
    command: String,
    ready: ReadyGuard<String>,
    current: Mutex<Option<Child>>,
    paused: Mutex<bool>,
}

impl ExternalPlayer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ready: ReadyGuard::new(),
            current: Mutex::new(None),
            paused: Mutex::new(false),
        }
    }

    /// Version line reported by the player, probing it on first use.
    pub async fn ensure_ready(&self) -> CoreResult<&str> {
        self.ready
            .ensure_ready(|| player_version(self.command.clone()))
            .await
            .map(String::as_str)
    }

    /// Stop whatever is playing and start `url`.
    pub async fn play(&self, url: &str) -> CoreResult<()> {
        self.ensure_ready().await?;

        let mut current = self.current.lock().await;
        if let Some(mut child) = current.take() {
            if let Err(e) = child.kill().await {
                log::debug!("Previous player process already gone: {e}");
            }
        }

        let child = Command::new(&self.command)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CoreError::NotReady(format!("{}: {e}", self.command)))?;

        log::info!("Started {} (pid {:?})", self.command, child.id());
        *current = Some(child);
        *self.paused.lock().await = false;
        Ok(())
    }

    /// Pause or resume the running player. Returns whether it is paused afterwards.
    pub async fn toggle_pause(&self) -> CoreResult<bool> {
        let mut current = self.current.lock().await;
        let Some(child) = current.as_mut() else {
            return Err(CoreError::NotReady("Nothing is playing".to_string()));
        };
        if let Ok(Some(status)) = child.try_wait() {
            log::info!("Player exited with {status}");
            *current = None;
            return Err(CoreError::NotReady("Player has exited".to_string()));
        }
        let Some(pid) = child.id() else {
            *current = None;
            return Err(CoreError::NotReady("Player has exited".to_string()));
        };

        let mut paused = self.paused.lock().await;
        signal(pid, !*paused).await?;
        *paused = !*paused;
        Ok(*paused)
    }

    pub async fn stop(&self) {
        if let Some(mut child) = self.current.lock().await.take() {
            if let Err(e) = child.kill().await {
                log::debug!("Player process already gone: {e}");
            }
        }
        *self.paused.lock().await = false;
    }
}

async fn player_version(command: String) -> CoreResult<String> {
    let output = Command::new(&command)
        .arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| CoreError::NotReady(format!("{command}: {e}")))?;

    if !output.status.success() {
        return Err(CoreError::NotReady(format!(
            "{command} --version exited with {}",
            output.status
        )));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    log::info!("Player ready: {version}");
    Ok(version)
}

#[cfg(unix)]
async fn signal(pid: u32, pause: bool) -> CoreResult<()> {
    let flag = if pause { "-STOP" } else { "-CONT" };
    let status = Command::new("kill")
        .arg(flag)
        .arg(pid.to_string())
        .status()
        .await
        .map_err(|e| CoreError::NotReady(format!("kill: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(CoreError::NotReady(format!("kill {flag} {pid} failed")))
    }
}

#[cfg(not(unix))]
async fn signal(_pid: u32, _pause: bool) -> CoreResult<()> {
    Err(CoreError::NotReady(
        "Pausing the player is not supported on this platform".to_string(),
    ))
}
