//! Template functions registered on the per-render engine.
//!
//! Tera's built-in `range` accepts `step_by=0` (which never terminates) and
//! any `end`, so a single template could stall the renderer. It is replaced
//! by [`create_range_function`], which rejects a zero step and draws every
//! produced item from a budget shared by all `range` calls of one render.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tera::Value;

/// Create a `range` function that produces at most `max_items` items in total.
///
/// Arguments match Tera's built-in: `end` (required), `start` (default 0) and
/// `step_by` (default 1), all non-negative integers. Register a fresh instance
/// for every render so the budget is per render.
///
/// # Errors
///
/// The returned function fails when `end` is missing, an argument is not a
/// non-negative integer, `step_by` is 0, `start` exceeds `end`, or the call
/// would take the render past `max_items`.
///
/// # Examples
///
/// ```rust,no_run
/// use activity_text::templating::functions::create_range_function;
///
/// let mut tera = tera::Tera::default();
/// tera.register_function("range", create_range_function(100));
/// ```
pub fn create_range_function(max_items: usize) -> impl tera::Function + 'static {
    let remaining = AtomicUsize::new(max_items);

    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let start = usize_arg(args, "start")?.unwrap_or(0);
        let end = usize_arg(args, "end")?
            .ok_or_else(|| tera::Error::msg("`range` requires an `end` argument"))?;
        let step_by = usize_arg(args, "step_by")?.unwrap_or(1);

        if step_by == 0 {
            return Err(tera::Error::msg("`range` was called with step_by=0"));
        }
        if start > end {
            return Err(tera::Error::msg(format!(
                "`range` was called with start={} greater than end={}",
                start, end
            )));
        }

        let count = (end - start).div_ceil(step_by);
        remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(count))
            .map_err(|_| {
                tera::Error::msg(format!(
                    "`range` would produce {} items, more than the {} allowed per render",
                    count, max_items
                ))
            })?;

        Ok(Value::Array((start..end).step_by(step_by).map(Value::from).collect()))
    }
}

fn usize_arg(args: &HashMap<String, Value>, name: &str) -> tera::Result<Option<usize>> {
    match args.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                tera::Error::msg(format!(
                    "`range` argument `{}` must be a non-negative integer, got {}",
                    name, value
                ))
            }),
    }
}
