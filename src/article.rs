use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Article {
  pub(crate) author: Option<String>,
  pub(crate) num_comments: Option<u64>,
  pub(crate) story_id: Option<u64>,
  pub(crate) story_title: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Article {
  pub(crate) const FIELD_NAMES: [&str; 6] = [
    "author",
    "num_comments",
    "story_id",
    "story_title",
    "title",
    "url",
  ];

  pub(crate) fn display_title(&self) -> &str {
    self
      .title
      .as_deref()
      .filter(|title| !title.is_empty())
      .or(self.story_title.as_deref())
      .unwrap_or_default()
  }

  pub(crate) fn is_rankable(&self) -> bool {
    !self.display_title().is_empty()
      && self.num_comments.is_some_and(|count| count != 0)
  }
}
