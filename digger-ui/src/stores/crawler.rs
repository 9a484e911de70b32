//! Crawl form state

/// Batch sizes the crawl form offers.
pub const NUM_CRAWLS_CHOICES: [u32; 5] = [1, 5, 10, 25, 50];
/// Highest artist id the crawler accepts as a starting point.
pub const MAX_START_ID: u64 = 20_000;

const DEFAULT_NUM_CRAWLS: u32 = 5;

/// A crawl the form is ready to issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrawlRequest {
    pub start_id: u64,
    pub num_crawls: u32,
}

/// State of the crawl form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrawlerState {
    start_id: Option<u64>,
    num_crawls: u32,
}

impl Default for CrawlerState {
    fn default() -> Self {
        Self {
            start_id: None,
            num_crawls: DEFAULT_NUM_CRAWLS,
        }
    }
}

impl CrawlerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_id(&self) -> Option<u64> {
        self.start_id
    }

    pub fn num_crawls(&self) -> u32 {
        self.num_crawls
    }

    /// Set the starting artist id; out-of-range values clear the field.
    pub fn set_start_id(&mut self, start_id: u64) {
        self.start_id = (start_id <= MAX_START_ID).then_some(start_id);
    }

    pub fn clear_start_id(&mut self) {
        self.start_id = None;
    }

    /// Pick a batch size; values outside the choice list are ignored.
    pub fn set_num_crawls(&mut self, num_crawls: u32) {
        if NUM_CRAWLS_CHOICES.contains(&num_crawls) {
            self.num_crawls = num_crawls;
        }
    }

    /// The request to issue, once a start id has been entered.
    pub fn request(&self) -> Option<CrawlRequest> {
        Some(CrawlRequest {
            start_id: self.start_id?,
            num_crawls: self.num_crawls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_request_until_start_id_set() {
        let mut form = CrawlerState::new();
        assert!(form.request().is_none());
        form.set_start_id(100);
        assert_eq!(
            form.request(),
            Some(CrawlRequest {
                start_id: 100,
                num_crawls: 5
            })
        );
    }

    #[test]
    fn out_of_range_start_id_clears_the_field() {
        let mut form = CrawlerState::new();
        form.set_start_id(100);
        form.set_start_id(MAX_START_ID + 1);
        assert!(form.request().is_none());
    }

    #[test]
    fn num_crawls_restricted_to_choices() {
        let mut form = CrawlerState::new();
        form.set_num_crawls(25);
        assert_eq!(form.num_crawls(), 25);
        form.set_num_crawls(7);
        assert_eq!(form.num_crawls(), 25);
    }
}
