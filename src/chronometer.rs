use std::time::Instant;

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> String {
        let elapsed = self.start.elapsed().as_micros();
        format!("{}.{:03}ms", elapsed / 1000, elapsed % 1000)
    }
}
