// "+1.2.3K" reads as 1.2
pub fn parse_target(text: &str) -> Option<f64> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = kept.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    let mut frac_len = 0;
    if kept.as_bytes().get(int_len) == Some(&b'.') {
        frac_len = kept[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if frac_len > 0 || int_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }

    if int_len == 0 && frac_len == 0 {
        return None;
    }
    kept[..end].trim_end_matches('.').parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterTick {
    Running(f64),
    Finished(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            step: target / ticks,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterTick {
        self.current += self.step;
        if self.current >= self.target {
            CounterTick::Finished(self.target)
        } else {
            CounterTick::Running(self.current.floor())
        }
    }
}
