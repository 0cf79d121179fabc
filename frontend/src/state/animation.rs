#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimationFlags {
    done: Vec<bool>,
}

impl AnimationFlags {
    pub fn new(len: usize) -> Self {
        Self {
            done: vec![false; len],
        }
    }

    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        Self {
            done: flags.into_iter().collect(),
        }
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.done.get(index).copied().unwrap_or(false)
    }

    pub fn trigger(&mut self, index: usize) -> bool {
        match self.done.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_once_per_element() {
        let mut flags = AnimationFlags::new(2);
        assert!(flags.trigger(0));
        assert!(!flags.trigger(0));
        assert!(!flags.trigger(0));
        assert!(flags.trigger(1));
        assert!(flags.is_done(0) && flags.is_done(1));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut flags = AnimationFlags::new(1);
        assert!(!flags.trigger(5));
        assert!(!flags.is_done(5));
    }

    #[test]
    fn preset_flags_block_animation() {
        let mut flags = AnimationFlags::from_flags([true, false]);
        assert!(!flags.trigger(0));
        assert!(flags.trigger(1));
    }
}
