//! 分段行光标
//!
//! 一个分区内的行按顺序排列为：
//!     Header          // 恰好一行
//!     Submenu(0..m)   // 仅在子菜单展开时存在
//!     Content(0..k)
//!
//! 光标是线性下标，始终落在 [0, total - 1] 内；分区未激活时为 None。

/// What the cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Header,
    Submenu(usize),
    Content(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedRowCursor {
    cursor: Option<usize>,
    menu_open: bool,
    submenu_len: usize,
    content_len: usize,
}

impl SegmentedRowCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Number of rows, header included.
    pub fn total(&self) -> usize {
        1 + if self.menu_open { self.submenu_len } else { 0 } + self.content_len
    }

    /// Row under the cursor.
    pub fn row(&self) -> Option<Row> {
        self.cursor.map(|c| self.row_at(c))
    }

    /// Row at linear position `index`.
    pub fn row_at(&self, index: usize) -> Row {
        if index == 0 {
            return Row::Header;
        }
        let submenu = if self.menu_open { self.submenu_len } else { 0 };
        if index <= submenu {
            Row::Submenu(index - 1)
        } else {
            Row::Content(index - 1 - submenu)
        }
    }

    pub fn move_up(&mut self) {
        if let Some(c) = self.cursor {
            self.cursor = Some(c.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(c) = self.cursor {
            self.cursor = Some((c + 1).min(self.total() - 1));
        }
    }

    pub fn set_submenu_len(&mut self, len: usize) {
        self.submenu_len = len;
        self.clamp();
    }

    pub fn set_content_len(&mut self, len: usize) {
        self.content_len = len;
        self.clamp();
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.clamp();
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.clamp();
    }

    /// Put the cursor on the header.
    pub fn home(&mut self) {
        if self.cursor.is_some() {
            self.cursor = Some(0);
        }
    }

    pub fn activate(&mut self) {
        self.cursor = Some(0);
    }

    pub fn deactivate(&mut self) {
        self.menu_open = false;
        self.cursor = None;
    }

    fn clamp(&mut self) {
        let last = self.total() - 1;
        if let Some(c) = self.cursor {
            self.cursor = Some(c.min(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rows_follow_segment_order() {
        let mut cursor = SegmentedRowCursor::new();
        cursor.set_submenu_len(2);
        cursor.set_content_len(3);
        assert_eq!(cursor.total(), 4);
        assert_eq!(cursor.row_at(1), Row::Content(0));

        cursor.open_menu();
        assert_eq!(cursor.total(), 6);
        assert_eq!(cursor.row_at(0), Row::Header);
        assert_eq!(cursor.row_at(2), Row::Submenu(1));
        assert_eq!(cursor.row_at(3), Row::Content(0));
        assert_eq!(cursor.row_at(5), Row::Content(2));
    }

    #[test]
    fn moves_clamp_without_wrapping() {
        let mut cursor = SegmentedRowCursor::new();
        cursor.set_content_len(2);
        cursor.activate();

        cursor.move_up();
        assert_eq!(cursor.cursor(), Some(0));
        for _ in 0..5 {
            cursor.move_down();
        }
        assert_eq!(cursor.cursor(), Some(2));
        assert_eq!(cursor.row(), Some(Row::Content(1)));
    }

    #[test]
    fn inactive_cursor_does_not_move() {
        let mut cursor = SegmentedRowCursor::new();
        cursor.set_content_len(4);
        cursor.move_down();
        assert_eq!(cursor.cursor(), None);
        assert_eq!(cursor.row(), None);
    }

    #[test]
    fn closing_menu_clamps_cursor() {
        let mut cursor = SegmentedRowCursor::new();
        cursor.set_submenu_len(5);
        cursor.activate();
        cursor.open_menu();
        for _ in 0..5 {
            cursor.move_down();
        }
        assert_eq!(cursor.row(), Some(Row::Submenu(4)));

        cursor.close_menu();
        assert_eq!(cursor.cursor(), Some(0));
    }

    #[test]
    fn deactivate_closes_menu() {
        let mut cursor = SegmentedRowCursor::new();
        cursor.activate();
        cursor.open_menu();
        cursor.deactivate();
        assert!(!cursor.is_menu_open());
        assert_eq!(cursor.cursor(), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Up,
        Down,
        SubmenuLen(usize),
        ContentLen(usize),
        Open,
        Close,
        Activate,
        Deactivate,
        Home,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Up),
            Just(Op::Down),
            (0usize..8).prop_map(Op::SubmenuLen),
            (0usize..12).prop_map(Op::ContentLen),
            Just(Op::Open),
            Just(Op::Close),
            Just(Op::Activate),
            Just(Op::Deactivate),
            Just(Op::Home),
        ]
    }

    fn apply(cursor: &mut SegmentedRowCursor, op: &Op) {
        match *op {
            Op::Up => cursor.move_up(),
            Op::Down => cursor.move_down(),
            Op::SubmenuLen(len) => cursor.set_submenu_len(len),
            Op::ContentLen(len) => cursor.set_content_len(len),
            Op::Open => cursor.open_menu(),
            Op::Close => cursor.close_menu(),
            Op::Activate => cursor.activate(),
            Op::Deactivate => cursor.deactivate(),
            Op::Home => cursor.home(),
        }
    }

    proptest! {
        #[test]
        fn cursor_stays_in_range_after_any_operations(ops in proptest::collection::vec(op(), 0..200)) {
            let mut cursor = SegmentedRowCursor::new();
            for op in &ops {
                apply(&mut cursor, op);

                let total = cursor.total();
                prop_assert!(total >= 1);
                if let Some(c) = cursor.cursor() {
                    prop_assert!(c < total, "cursor {} outside 0..{} after {:?}", c, total, op);
                }
                if !cursor.is_menu_open() {
                    prop_assert!(!matches!(cursor.row(), Some(Row::Submenu(_))));
                }
            }
        }
    }
}
