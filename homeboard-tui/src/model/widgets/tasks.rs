//! Tasks 分区
//!
//! 在任务上按 Enter 只是把它加入（或移出）待完成队列；
//! 分区退出激活时才一次性提交。

use homeboard_core::services::{CommitReport, PendingCompletions, TaskRef};
use homeboard_core::types::{SelectionKey, Task, TaskList};

use super::{Picker, PickerEvent, ZoneWidget};
use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::ZoneId;

#[derive(Debug)]
pub struct TasksWidget {
    pub picker: Picker<TaskList, Task>,
    pending: PendingCompletions,
    /// 已提交、尚未收到结果的任务
    committing: Vec<TaskRef>,
}

impl Default for TasksWidget {
    fn default() -> Self {
        Self {
            picker: Picker::new(ZoneId::Tasks, SelectionKey::TaskList),
            pending: PendingCompletions::new(),
            committing: Vec::new(),
        }
    }
}

impl TasksWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `task` of the selected list is shown as checked.
    pub fn is_checked(&self, task: &Task) -> bool {
        let Some(list) = self.picker.selected() else {
            return false;
        };
        let task_ref = TaskRef::new(&list.id, &task.id);
        self.pending.is_queued(&task_ref) || self.committing.contains(&task_ref)
    }

    fn toggle(&mut self, index: usize) {
        let Some(list) = self.picker.selected() else {
            return;
        };
        let Some(task) = self.picker.content().data().and_then(|tasks| tasks.get(index)) else {
            return;
        };
        let task_ref = TaskRef::new(&list.id, &task.id);
        if self.committing.contains(&task_ref) {
            return;
        }
        self.pending.toggle(task_ref);
    }

    /// Apply a commit report: committed tasks leave the list, failed ones show unchecked
    /// again. Returns the status line to show when something failed.
    pub fn apply_commit(&mut self, report: &CommitReport) -> Option<String> {
        let list_id = self.picker.selected().map(|s| s.id.clone());
        if let (Some(list_id), Some(tasks)) = (list_id, self.picker.content_mut()) {
            tasks.retain(|task| {
                !report
                    .committed
                    .iter()
                    .any(|r| r.list_id == list_id && r.task_id == task.id)
            });
        }
        self.picker.sync_content_len();

        self.committing.retain(|r| {
            !report.committed.contains(r) && !report.failed.iter().any(|(f, _)| f == r)
        });

        if report.all_committed() {
            None
        } else {
            Some(format!("Could not complete {} task(s)", report.failed.len()))
        }
    }

    /// The whole commit failed; every task in flight shows unchecked again.
    pub fn commit_failed(&mut self) -> String {
        let count = self.committing.len();
        self.committing.clear();
        format!("Could not complete {count} task(s)")
    }

    /// A commit that will never be sent: its tasks show unchecked again.
    pub fn abandon(&mut self, refs: &[TaskRef]) {
        self.committing.retain(|r| !refs.contains(r));
    }
}

impl ZoneWidget for TasksWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        self.picker.activate();
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        self.picker.deactivate();
        if self.pending.is_empty() {
            return Vec::new();
        }
        let refs = self.pending.take_all();
        self.committing.extend(refs.iter().cloned());
        vec![WidgetCommand::CommitTasks(refs)]
    }

    fn captures_escape(&self) -> bool {
        self.picker.is_menu_open()
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand> {
        match self.picker.handle_key(key) {
            PickerEvent::Handled(commands) => commands,
            PickerEvent::ContentEnter(index) => {
                self.toggle(index);
                Vec::new()
            }
            PickerEvent::Unhandled => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_core::types::{Selection, TaskStatus};

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            status: TaskStatus::NeedsAction,
            due: None,
            notes: None,
        }
    }

    fn loaded() -> TasksWidget {
        let mut widget = TasksWidget::new();
        widget.on_activate();
        widget.picker.restore(Selection::new("l1", "Groceries"));
        widget
            .picker
            .set_content("l1", Ok(vec![task("milk"), task("eggs"), task("bread")]));
        widget
    }

    /// Move to content row `index` and press Enter.
    fn check(widget: &mut TasksWidget, index: usize) {
        widget.handle_key(NavKey::Escape);
        while widget.picker.cursor().cursor() != Some(0) {
            widget.handle_key(NavKey::Up);
        }
        for _ in 0..=index {
            widget.handle_key(NavKey::Down);
        }
        widget.handle_key(NavKey::Enter);
    }

    #[test]
    fn enter_toggles_without_committing() {
        let mut widget = loaded();
        check(&mut widget, 0);
        assert!(widget.is_checked(&task("milk")));
        assert_eq!(widget.pending.len(), 1);

        check(&mut widget, 0);
        assert!(!widget.is_checked(&task("milk")));
        assert_eq!(widget.pending.len(), 0);
    }

    #[test]
    fn deactivation_commits_queue() {
        let mut widget = loaded();
        check(&mut widget, 0);
        check(&mut widget, 2);

        let commands = widget.on_deactivate();
        assert_eq!(
            commands,
            vec![WidgetCommand::CommitTasks(vec![
                TaskRef::new("l1", "milk"),
                TaskRef::new("l1", "bread"),
            ])]
        );
        assert_eq!(widget.pending.len(), 0);
        assert!(widget.is_checked(&task("bread")));
        assert!(widget.on_deactivate().is_empty());
    }

    #[test]
    fn partial_failure_reverts_failed_tasks() {
        let mut widget = loaded();
        check(&mut widget, 0);
        check(&mut widget, 1);
        widget.on_deactivate();

        let status = widget.apply_commit(&CommitReport {
            committed: vec![TaskRef::new("l1", "milk")],
            failed: vec![(TaskRef::new("l1", "eggs"), "500".into())],
        });

        assert_eq!(status.as_deref(), Some("Could not complete 1 task(s)"));
        let titles: Vec<&str> = widget
            .picker
            .content()
            .data()
            .map(|tasks| tasks.iter().map(|t| t.title.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(titles, vec!["eggs", "bread"]);
        assert!(!widget.is_checked(&task("eggs")));
        assert_eq!(widget.picker.cursor().total(), 3);
    }

    #[test]
    fn whole_commit_failure_unchecks_everything() {
        let mut widget = loaded();
        check(&mut widget, 1);
        widget.on_deactivate();

        assert_eq!(widget.commit_failed(), "Could not complete 1 task(s)");
        assert!(!widget.is_checked(&task("eggs")));
    }

    #[test]
    fn escape_is_captured_only_with_menu_open() {
        let mut widget = loaded();
        assert!(!widget.captures_escape());
        widget.picker.toggle_menu();
        assert!(widget.captures_escape());
    }

    #[test]
    fn abandoned_commit_unchecks_only_its_tasks() {
        let mut widget = loaded();
        check(&mut widget, 0);
        let first = widget.on_deactivate();
        widget.on_activate();
        check(&mut widget, 2);
        widget.on_deactivate();

        let WidgetCommand::CommitTasks(refs) = &first[0] else {
            panic!("expected a commit, got {first:?}");
        };
        widget.abandon(refs);
        assert!(!widget.is_checked(&task("milk")));
        assert!(widget.is_checked(&task("bread")));
    }
}
