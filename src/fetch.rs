use super::*;

pub(crate) trait Fetch {
  async fn fetch_page(&self, page: usize) -> Result<Page>;
}
