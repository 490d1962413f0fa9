use std::collections::HashMap;

pub struct FrequencyCounter {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyCounter {
    pub fn new() -> FrequencyCounter {
        FrequencyCounter {
            counts: HashMap::new(),
            first_seen: Vec::new(),
        }
    }

    pub fn add(&mut self, key: &str) {
        if !self.counts.contains_key(key) {
            self.first_seen.push(key.to_string());
        }

        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Key with the highest count. Ties go to the key that was added
    /// first; an empty counter yields the empty string.
    pub fn top(&self) -> String {
        let mut top_key = "";
        let mut top_count = 0;

        for key in &self.first_seen {
            let count = self.counts[key];

            if count > top_count {
                top_count = count;
                top_key = key;
            }
        }

        top_key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top() {
        let mut counter = FrequencyCounter::new();
        counter.add("1.1.1.1");
        counter.add("2.2.2.2");
        counter.add("1.1.1.1");

        assert_eq!(counter.top(), "1.1.1.1");
    }

    #[test]
    fn test_top_tie_goes_to_first_seen() {
        let mut counter = FrequencyCounter::new();
        counter.add("/b");
        counter.add("/a");
        counter.add("/a");
        counter.add("/b");

        assert_eq!(counter.top(), "/b");
    }

    #[test]
    fn test_top_empty() {
        let counter = FrequencyCounter::new();

        assert_eq!(counter.top(), "");
    }
}
