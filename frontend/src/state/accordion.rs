#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn from_open_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        Self {
            expanded: flags.into_iter().position(|open| open),
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        let was_open = self.is_expanded(index);
        self.expanded = None;
        if !was_open {
            self.expanded = Some(index);
        }
        self.expanded
    }
}
