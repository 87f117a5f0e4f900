use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Page {
  pub(crate) data: Vec<Article>,
  pub(crate) total_pages: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_an_api_response_body() {
    let page = serde_json::from_str::<Page>(
      r#"{
        "page": 2,
        "per_page": 10,
        "total": 45,
        "total_pages": 5,
        "data": [
          {
            "title": "A",
            "url": "https://example.com/a",
            "author": "alice",
            "num_comments": 3,
            "story_id": null,
            "story_title": null
          },
          {
            "title": null,
            "url": null,
            "author": "bob",
            "num_comments": null,
            "story_id": 11,
            "story_title": "B"
          }
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(page.total_pages, 5);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].title.as_deref(), Some("A"));
    assert_eq!(page.data[1].story_id, Some(11));
    assert_eq!(page.data[1].num_comments, None);
  }

  #[test]
  fn decodes_an_empty_data_array() {
    let page =
      serde_json::from_str::<Page>(r#"{"total_pages": 1, "data": []}"#)
        .unwrap();

    assert_eq!(page.total_pages, 1);
    assert!(page.data.is_empty());
  }
}
