//! Dotted-key resolution against configured template trees.

use activity_text::config::ActivityConfig;
use activity_text::templating::{TemplateTree, resolve};
use activity_text::test_utils::{init_test_logging, sample_tree};
use anyhow::Result;

#[test]
fn test_present_keys_resolve_to_their_leaf() {
    init_test_logging(None);
    let tree = sample_tree();

    for key in tree.keys() {
        assert!(tree.resolve(&key).is_some(), "key '{}' should resolve", key);
    }
    assert_eq!(tree.resolve("article.destroy"), Some("Someone deleted the article!"));
}

#[test]
fn test_absent_keys_do_not_resolve() {
    init_test_logging(None);
    let tree = sample_tree();

    for key in [
        "",
        "article",
        "article.archive",
        "article.create.extra",
        "comment.reply",
        "comment.reply.create.",
        "ARTICLE.CREATE",
        "user.sign_in",
    ] {
        assert_eq!(tree.resolve(key), None, "key '{}' should not resolve", key);
    }
}

#[test]
fn test_absent_tree_resolves_nothing() {
    for key in ["", "article.create", "anything"] {
        assert_eq!(resolve(None, key), None);
    }
}

#[test]
fn test_resolution_from_yaml_document() -> Result<()> {
    init_test_logging(None);
    let config = ActivityConfig::from_yaml_str(
        r#"
activity:
  article:
    create: "New <%= trackable.name %> article has been created"
    update: 'Someone modified the article'
  user:
    sign_in: "{{ trackable.name }} signed in"
"#,
    )?;

    let tree: &TemplateTree = &config.activity;
    assert_eq!(tree.resolve("user.sign_in"), Some("{{ trackable.name }} signed in"));
    assert_eq!(tree.resolve("user.sign_out"), None);
    assert_eq!(tree.keys(), vec!["article.create", "article.update", "user.sign_in"]);
    Ok(())
}
