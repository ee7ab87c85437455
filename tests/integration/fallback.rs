//! Every path that ends in the fallback text.

use activity_text::activity::Activity;
use activity_text::constants::FALLBACK_TEXT;
use activity_text::templating::{
    FallbackCause, Parameters, TemplateError, TemplateRenderer, TemplateTree,
};
use activity_text::test_utils::{init_test_logging, sample_tree};

fn renderer() -> TemplateRenderer {
    TemplateRenderer::from(
        sample_tree()
            .with("broken.syntax", "Hello {{ name")
            .with("broken.filter", "{{ title | definitely_not_a_filter }}")
            .with("broken.math", "{{ title + 1 }}"),
    )
}

#[test]
fn test_unknown_key() {
    init_test_logging(None);
    let outcome = renderer().render_key("article.archive", &Parameters::new(), &Parameters::new());
    assert_eq!(outcome.cause(), Some(&FallbackCause::KeyNotFound));
    assert_eq!(outcome.into_text(), FALLBACK_TEXT);
}

#[test]
fn test_unknown_key_regardless_of_parameters() {
    let base = Parameters::new().with("title", "A").with("name", "B");
    let overrides = Parameters::new().with("title", "C");
    for key in ["", "article", "nope.nope"] {
        assert_eq!(renderer().text(key, &base, &overrides), FALLBACK_TEXT);
    }
}

#[test]
fn test_no_templates_attached() {
    let activity = Activity::new("article.create").with_parameter("title", "Launch Day");
    assert_eq!(activity.text(&TemplateRenderer::detached(), &Parameters::new()), FALLBACK_TEXT);
}

#[test]
fn test_empty_tree() {
    let renderer = TemplateRenderer::from(TemplateTree::new());
    assert_eq!(renderer.text("article.create", &Parameters::new(), &Parameters::new()), FALLBACK_TEXT);
}

#[test]
fn test_unbound_variable() {
    init_test_logging(None);
    let outcome = renderer().render_key("article.create", &Parameters::new(), &Parameters::new());
    match outcome.cause() {
        Some(FallbackCause::RenderFailure(TemplateError::VariableNotFound {
            variable,
            ..
        })) => assert_eq!(variable, "title"),
        other => panic!("unexpected cause: {other:?}"),
    }
    assert_eq!(outcome.to_string(), FALLBACK_TEXT);
}

#[test]
fn test_broken_templates() {
    init_test_logging(None);
    let base = Parameters::new().with("name", "A").with("title", "Launch Day");
    for key in ["broken.syntax", "broken.filter", "broken.math"] {
        let outcome = renderer().render_key(key, &base, &Parameters::new());
        assert!(outcome.is_fallback(), "'{}' should fall back", key);
        assert_eq!(outcome.as_str(), FALLBACK_TEXT);
    }
}

#[test]
fn test_causes_are_distinguishable_but_text_is_not() {
    let renderer = renderer();
    let missing = renderer.render_key("article.archive", &Parameters::new(), &Parameters::new());
    let crashed = renderer.render_key("article.create", &Parameters::new(), &Parameters::new());

    assert_ne!(missing.cause(), crashed.cause());
    assert_eq!(missing.into_text(), crashed.into_text());
}

#[test]
fn test_loop_bound_from_parameters_is_capped() {
    init_test_logging(None);
    let renderer = TemplateRenderer::from(
        TemplateTree::new().with("feed.digest", "{% for i in range(end=count) %}.{% endfor %}{{ count }} items"),
    );

    let small = Parameters::new().with("count", 3);
    assert_eq!(renderer.text("feed.digest", &small, &Parameters::new()), "...3 items");

    let huge = Parameters::new().with("count", 1_000_000_000u64);
    assert_eq!(renderer.text("feed.digest", &Parameters::new(), &huge), FALLBACK_TEXT);

    let zero_step = TemplateRenderer::from(
        TemplateTree::new().with("feed.digest", "{% for i in range(end=1, step_by=step) %}{% endfor %}"),
    );
    let activity = Activity::new("feed.digest").with_parameter("step", 0);
    assert_eq!(activity.text(&zero_step, &Parameters::new()), FALLBACK_TEXT);
}
