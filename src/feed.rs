use super::*;

pub(crate) async fn fetch_all<F: Fetch>(fetcher: &F) -> Result<Vec<Article>> {
  let first = fetcher.fetch_page(1).await?;

  let total_pages = first.total_pages;

  // The page count comes from an initial fetch of page 1, which the loop
  // below fetches again, so page 1 articles appear twice in the result.
  let mut articles = first.data;

  let progress = indicatif::ProgressBar::new(total_pages as u64)
    .with_style(
      indicatif::ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")?
        .progress_chars("=> "),
    )
    .with_message("Fetching articles");

  for page in 1..=total_pages {
    let response = fetcher.fetch_page(page).await?;

    articles.extend(response.data);

    progress.inc(1);
  }

  progress.finish();

  Ok(articles)
}
