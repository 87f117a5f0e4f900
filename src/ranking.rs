use super::*;

pub(crate) fn top(articles: Vec<Article>, count: usize) -> Vec<Article> {
  let mut ranked = articles
    .into_iter()
    .filter(Article::is_rankable)
    .collect::<Vec<_>>();

  // sort_by is stable: articles with equal counts keep their fetch order.
  ranked.sort_by(|a, b| b.num_comments.cmp(&a.num_comments));

  ranked.truncate(count);

  ranked
}
