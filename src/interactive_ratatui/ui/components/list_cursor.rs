use crate::interactive_ratatui::constants::PAGE_SIZE;

/// Selection over a list of `len` items. Every move reports whether the
/// selection changed.
#[derive(Debug, Default, Clone)]
pub struct ListCursor {
    selected: usize,
    len: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resize the list, keeping the selection in range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.len.saturating_sub(1));
    }

    fn move_to(&mut self, index: usize) -> bool {
        let index = index.min(self.len.saturating_sub(1));
        if index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn move_up(&mut self) -> bool {
        self.move_to(self.selected.saturating_sub(1))
    }

    pub fn move_down(&mut self) -> bool {
        self.move_to(self.selected + 1)
    }

    pub fn move_by(&mut self, delta: isize) -> bool {
        let target = self.selected.saturating_add_signed(delta);
        self.move_to(target)
    }

    pub fn page_up(&mut self) -> bool {
        self.move_to(self.selected.saturating_sub(PAGE_SIZE))
    }

    pub fn page_down(&mut self) -> bool {
        self.move_to(self.selected + PAGE_SIZE)
    }

    pub fn move_to_start(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn move_to_end(&mut self) -> bool {
        self.move_to(self.len.saturating_sub(1))
    }
}
