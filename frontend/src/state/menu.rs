pub const ICON_CLOSED: &str = "fa-bars";
pub const ICON_OPEN: &str = "fa-times";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn icon_classes(self) -> (&'static str, &'static str) {
        if self.open {
            (ICON_OPEN, ICON_CLOSED)
        } else {
            (ICON_CLOSED, ICON_OPEN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_icon() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon_classes(), ("fa-bars", "fa-times"));
        assert!(menu.toggle());
        assert_eq!(menu.icon_classes(), ("fa-times", "fa-bars"));
        assert!(!menu.toggle());
    }

    #[test]
    fn close_reports_change_once() {
        let mut menu = MobileMenu::new(true);
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
