use super::*;

pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  const API_BASE_URL: &str = "https://jsonmock.hackerrank.com/api/articles";

  const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

  pub(crate) fn new() -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Self::REQUEST_TIMEOUT)
      .build()
      .context("failed to build http client")?;

    Ok(Self { client })
  }
}

impl Fetch for Client {
  async fn fetch_page(&self, page: usize) -> Result<Page> {
    let response = self
      .client
      .get(format!("{}?page={page}", Self::API_BASE_URL))
      .send()
      .await
      .with_context(|| format!("failed to fetch page {page}"))?;

    response
      .json::<Page>()
      .await
      .with_context(|| format!("malformed response for page {page}"))
  }
}
