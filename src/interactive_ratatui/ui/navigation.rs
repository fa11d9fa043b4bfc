use crate::query::PageLocation;

/// Back/forward history of visited search locations
pub struct LocationHistory {
    history: Vec<PageLocation>,
    current_index: Option<usize>, // None until the first push
    max_history: usize,
}

impl LocationHistory {
    pub fn new(max_history: usize) -> Self {
        Self {
            history: Vec::new(),
            current_index: None,
            max_history: max_history.max(1),
        }
    }

    /// Push a new location, dropping any forward entries
    pub fn push(&mut self, location: PageLocation) {
        if let Some(idx) = self.current_index {
            self.history.truncate(idx + 1);
        }

        self.history.push(location);

        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        self.current_index = Some(self.history.len() - 1);
    }

    pub fn go_back(&mut self) -> Option<PageLocation> {
        match self.current_index {
            Some(idx) if idx > 0 => {
                self.current_index = Some(idx - 1);
                self.history.get(idx - 1).cloned()
            }
            _ => None,
        }
    }

    pub fn go_forward(&mut self) -> Option<PageLocation> {
        match self.current_index {
            Some(idx) if idx + 1 < self.history.len() => {
                self.current_index = Some(idx + 1);
                self.history.get(idx + 1).cloned()
            }
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.current_index, Some(idx) if idx > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.current_index, Some(idx) if idx + 1 < self.history.len())
    }

    pub fn current(&self) -> Option<&PageLocation> {
        self.current_index.and_then(|idx| self.history.get(idx))
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
