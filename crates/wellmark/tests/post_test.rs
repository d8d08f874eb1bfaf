//! Loading posts from disk.

mod common;

use std::fs;

use common::init_logger;
use wellmark::{Block, Inline, Post, Renderer, WellmarkError};

#[test]
fn loads_post_from_file() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spring-retreat.md");
    fs::write(
        &path,
        "---\n\
         title: Spring Retreat\n\
         author: Maya\n\
         location: Lake House\n\
         ---\n\
         # Spring Retreat\n\
         Three days of **rest**.\n",
    )
    .unwrap();

    let post = Post::from_path(&path).unwrap();
    assert_eq!(post.title(), Some("Spring Retreat"));
    assert_eq!(post.front_matter.author.as_deref(), Some("Maya"));
    assert_eq!(
        post.front_matter.extra.get("location"),
        Some(&serde_yaml::Value::String("Lake House".to_string()))
    );
    assert_eq!(post.path.as_deref(), Some(path.as_path()));
    assert_eq!(
        post.blocks()[1],
        Block::Paragraph(vec![
            Inline::text("Three days of "),
            Inline::strong("rest"),
            Inline::text("."),
        ])
    );

    let rendered = Renderer::new().render_post(&post);
    assert_eq!(rendered.excerpt, "Three days of rest.");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");

    let err = Post::from_path(&path).unwrap_err();
    assert!(matches!(err, WellmarkError::Io { .. }));
    assert!(err.to_string().contains("missing.md"));
}
