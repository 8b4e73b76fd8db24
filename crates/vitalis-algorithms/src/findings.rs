/// Maximum key risk factors reported per disease.
pub const MAX_KEY_FACTORS: usize = 5;
/// Maximum recommendations reported per disease.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// An insertion-ordered, duplicate-free list with a fixed capacity.
///
/// Calculators push candidates in priority order; once the list is full,
/// later candidates are dropped.
#[derive(Debug, Clone)]
pub struct Findings {
    items: Vec<String>,
    cap: usize,
}

impl Findings {
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn key_factors() -> Self {
        Self::new(MAX_KEY_FACTORS)
    }

    pub fn recommendations() -> Self {
        Self::new(MAX_RECOMMENDATIONS)
    }

    pub fn push(&mut self, item: impl Into<String>) {
        let item = item.into();
        if self.items.len() < self.cap && !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    pub fn push_if(&mut self, condition: bool, item: impl Into<String>) {
        if condition {
            self.push(item);
        }
    }

    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.push(item);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
