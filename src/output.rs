use super::*;

pub(crate) fn csv(articles: &[Article]) -> Result<String> {
  let mut buffer = Vec::new();

  let mut writer = ::csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(&mut buffer);

  writer
    .write_record(Article::FIELD_NAMES)
    .context("failed to write csv header")?;

  for article in articles {
    writer
      .serialize(article)
      .context("failed to encode article as csv")?;
  }

  writer.flush().context("failed to flush csv output")?;

  drop(writer);

  String::from_utf8(buffer).context("csv output was not valid utf-8")
}

pub(crate) fn listing(articles: &[Article]) -> String {
  articles
    .iter()
    .enumerate()
    .map(|(index, article)| {
      format!(
        "{:<5} {:<80}  #{:<20}\n",
        index + 1,
        prefix(article.display_title(), 80),
        article.num_comments.unwrap_or_default(),
      )
    })
    .collect()
}

fn prefix(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}
