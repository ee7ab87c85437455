//! Parameter merging and interpolation through the public entry points.

use activity_text::activity::{Activity, EntityRef};
use activity_text::config::ActivityConfig;
use activity_text::templating::{Parameters, TemplateRenderer, TemplateTree};
use activity_text::test_utils::{init_test_logging, sample_tree};
use anyhow::Result;

#[test]
fn test_end_to_end_article_create() {
    init_test_logging(None);
    let tree = TemplateTree::new().with("article.create", "New article '{{title}}' created");
    let renderer = TemplateRenderer::from(tree);
    let overrides = Parameters::new().with("title", "Launch Day");

    assert_eq!(
        renderer.text("article.create", &Parameters::new(), &overrides),
        "New article 'Launch Day' created"
    );
    assert_eq!(
        renderer.text("article.update", &Parameters::new(), &overrides),
        "Template not defined"
    );
}

#[test]
fn test_override_beats_stored_parameter() {
    let renderer = TemplateRenderer::from(sample_tree());
    let activity = Activity::new("article.create").with_parameter("title", "A");

    let text = activity.text(&renderer, &Parameters::new().with("title", "B"));
    assert_eq!(text, "New article 'B' created");
}

#[test]
fn test_stored_and_override_parameters_combine() {
    let renderer = TemplateRenderer::from(sample_tree());
    let activity = Activity::new("comment.reply.create").with_parameter("author", "alice");

    let text = activity.text(&renderer, &Parameters::new().with("title", "Launch Day"));
    assert_eq!(text, "alice replied to Launch Day");
}

#[test]
fn test_entities_in_parameters() -> Result<()> {
    init_test_logging(None);
    let renderer = TemplateRenderer::from(sample_tree());

    let article = EntityRef::new("Article", 42).with_attribute("name", "Rails 3.0.5 released!");
    let author = EntityRef::new("User", 7).with_attribute("name", "alice");

    let mut parameters = Parameters::new();
    parameters.insert("trackable", &article)?;
    parameters.insert("owner", &author)?;

    let activity = Activity::new("article.publish")
        .with_trackable(article)
        .with_owner(author)
        .with_parameters(parameters);

    assert_eq!(
        activity.text(&renderer, &Parameters::new()),
        "Rails 3.0.5 released! published by alice"
    );
    Ok(())
}

#[test]
fn test_activity_from_json_record() -> Result<()> {
    let renderer = TemplateRenderer::from_config(ActivityConfig::from_yaml_str(
        "activity:\n  article:\n    update: \"{{ editor }} edited {{ title }} ({{ revision }})\"\n",
    )?);

    let activity: Activity = serde_json::from_str(
        r#"{
            "key": "article.update",
            "trackable": { "type": "Article", "id": 1 },
            "parameters": { "title": "Launch Day", "revision": 3 }
        }"#,
    )?;

    let overrides = Parameters::new().with("editor", "bob");
    assert_eq!(activity.text(&renderer, &overrides), "bob edited Launch Day (3)");

    // Overrides are call-scoped
    assert!(!activity.parameters.contains("editor"));
    Ok(())
}

#[test]
fn test_static_template_ignores_parameters() {
    let renderer = TemplateRenderer::from(sample_tree());
    let base = Parameters::new().with("unused", "value");
    assert_eq!(
        renderer.text("article.update", &base, &Parameters::new()),
        "Someone modified the article"
    );
}
