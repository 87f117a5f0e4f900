use super::*;

#[derive(Debug, Parser)]
#[command(about = "Fetch top articles and optionally download CSV", version)]
pub(crate) struct Arguments {
  /// Write the ranked articles to top_articles.csv instead of listing them
  #[arg(long)]
  pub(crate) csv: bool,
}
