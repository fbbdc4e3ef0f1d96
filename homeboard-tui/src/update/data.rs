//! 后台结果写回

use homeboard_core::CoreError;

use crate::message::{Command, DataMessage, WidgetCommand};
use crate::model::{App, ZoneId};

/// Apply a backend result to the model.
pub(super) fn apply(app: &mut App, msg: DataMessage) -> Vec<Command> {
    let commands = match msg {
        DataMessage::SelectionRestored { zone, selection } => match zone {
            ZoneId::Tasks => app.tasks.picker.restore(selection),
            ZoneId::Photos => app.photos.picker.restore(selection),
            ZoneId::Music => app.music.picker.restore(selection),
            _ => Vec::new(),
        },
        DataMessage::TaskLists(result) => {
            note_error(app, result.as_ref().err());
            app.tasks.picker.set_menu(result);
            Vec::new()
        }
        DataMessage::Tasks { list_id, result } => {
            note_error(app, result.as_ref().err());
            app.tasks.picker.set_content(&list_id, result);
            Vec::new()
        }
        DataMessage::PhotoFolders(result) => {
            note_error(app, result.as_ref().err());
            app.photos.picker.set_menu(result);
            Vec::new()
        }
        DataMessage::Photos { folder_id, result } => {
            note_error(app, result.as_ref().err());
            // Google Photos 尚未选图：提示用户去 Picker 页面
            if let Err(CoreError::NotReady(message)) = &result {
                app.set_status(message.clone());
            }
            if app.photos.picker.set_content(&folder_id, result) {
                app.photos.content_changed();
            }
            Vec::new()
        }
        DataMessage::Playlists(result) => {
            note_error(app, result.as_ref().err());
            app.music.picker.set_menu(result);
            Vec::new()
        }
        DataMessage::PlaylistItems {
            playlist_id,
            result,
        } => {
            note_error(app, result.as_ref().err());
            app.music.picker.set_content(&playlist_id, result);
            Vec::new()
        }
        DataMessage::Events(result) => {
            note_error(app, result.as_ref().err());
            app.calendar.set_events(result);
            Vec::new()
        }
        DataMessage::Weather(result) => {
            note_error(app, result.as_ref().err());
            app.weather.set_report(result);
            Vec::new()
        }
        DataMessage::Astronomy(result) => {
            note_error(app, result.as_ref().err());
            app.astronomy.set_picture(result);
            Vec::new()
        }
        DataMessage::TasksCommitted(result) => {
            note_error(app, result.as_ref().err());
            let status = match result {
                Ok(report) => app.tasks.apply_commit(&report),
                Err(_) => Some(app.tasks.commit_failed()),
            };
            if let Some(status) = status {
                app.set_status(status);
            }
            Vec::new()
        }
        DataMessage::CacheInvalidated => {
            app.set_status("Refreshed");
            reload_all(app)
        }
        DataMessage::SignedOut(result) => {
            match result {
                Ok(()) => {
                    app.auth_required = true;
                    app.focus.deactivate();
                    app.set_status("Signed out");
                }
                Err(e) => app.set_status(format!("Sign out failed: {e}")),
            }
            Vec::new()
        }
        DataMessage::PlayerStarted { title } => {
            app.set_status(format!("Playing {title}"));
            app.now_playing = Some(title);
            Vec::new()
        }
        DataMessage::PlayerFailed(message) => {
            app.music.stop();
            app.now_playing = None;
            app.set_status(message);
            Vec::new()
        }
        DataMessage::Status(message) => {
            app.set_status(message);
            Vec::new()
        }
    };

    commands.into_iter().map(Command::from).collect()
}

/// Initial loads of the zones that have no submenu.
pub fn initial_loads(app: &mut App) -> Vec<WidgetCommand> {
    let mut commands = app.calendar.load();
    commands.extend(app.weather.load());
    commands.extend(app.astronomy.load());
    commands
}

fn reload_all(app: &mut App) -> Vec<WidgetCommand> {
    let mut commands = initial_loads(app);
    commands.extend(app.tasks.picker.reload());
    commands.extend(app.photos.picker.reload());
    commands.extend(app.music.picker.reload());
    commands
}

/// Switch to the sign-in banner when a fetch says the session is gone.
fn note_error(app: &mut App, error: Option<&CoreError>) {
    let Some(error) = error else {
        return;
    };
    let unauthorized = match error {
        CoreError::Api(api) => api.is_unauthorized(),
        other => other.is_auth_required(),
    };
    if unauthorized && !app.auth_required {
        log::warn!("Session is no longer valid, sign-in required");
        app.auth_required = true;
        if let Some(zone) = app.active_zone() {
            app.focus.deactivate();
            // 退出钩子产生的命令都是远程请求，此时丢弃
            for command in app.widget_mut(zone).on_deactivate() {
                discard(app, &command);
            }
        }
    }
}

/// Undo the optimistic state of a command that will not be executed.
pub(super) fn discard(app: &mut App, command: &WidgetCommand) {
    if let WidgetCommand::CommitTasks(refs) = command {
        log::warn!("Dropping commit of {} task(s), sign-in required", refs.len());
        app.tasks.abandon(refs);
    }
}
