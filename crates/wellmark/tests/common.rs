#![allow(dead_code)]

use wellmark::{Block, Inline, ListItem};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn text(value: &str) -> Vec<Inline> {
    vec![Inline::text(value)]
}

pub fn list(items: &[&str]) -> Block {
    Block::List {
        items: items.iter().map(|i| ListItem::new(text(i))).collect(),
    }
}
