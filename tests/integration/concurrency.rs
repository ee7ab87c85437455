//! One shared template tree serving many threads.

use std::sync::Arc;
use std::thread;

use activity_text::templating::{Parameters, TemplateRenderer};
use activity_text::test_utils::sample_tree;

#[test]
fn test_shared_tree_across_threads() {
    let tree = Arc::new(sample_tree());
    let renderer = TemplateRenderer::new(Arc::clone(&tree));

    thread::scope(|scope| {
        for i in 0..8 {
            let renderer = renderer.clone();
            scope.spawn(move || {
                for j in 0..50 {
                    let title = format!("Post {i}-{j}");
                    let overrides = Parameters::new().with("title", title.clone());
                    let text = renderer.text("article.create", &Parameters::new(), &overrides);
                    assert_eq!(text, format!("New article '{title}' created"));
                }
            });
        }
    });

    // The tree is still the one that was shared
    assert_eq!(renderer.templates(), Some(tree.as_ref()));
    assert_eq!(Arc::strong_count(&tree), 2);
}
