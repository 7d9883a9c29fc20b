//! Template loading and rendering using Tera.
//!
//! User-facing listings and menus are rendered from templates. A directory of
//! `.tera` files may override them; anything it lacks falls back to the
//! embedded defaults.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use tera::{Context, Tera};

/// The numbered task listing.
pub const TASK_LIST: &str = "messages/task_list.tera";
/// The main menu.
pub const MENU: &str = "messages/menu.tera";
/// The list of priority levels shown before asking for one.
pub const PRIORITY_PROMPT: &str = "messages/priority_prompt.tera";

/// Embedded default templates for fallback when files don't exist.
static EMBEDDED_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(TASK_LIST, include_str!("../templates/messages/task_list.tera"));
    m.insert(MENU, include_str!("../templates/messages/menu.tera"));
    m.insert(PRIORITY_PROMPT, include_str!("../templates/messages/priority_prompt.tera"));
    m
});

/// Global template engine with caching.
static TERA: Lazy<RwLock<Option<Tera>>> = Lazy::new(|| RwLock::new(None));

/// Initialize the template engine, optionally loading overrides from a directory.
///
/// With `None`, or a directory that does not exist, only the embedded
/// defaults are used.
///
/// # Errors
///
/// Returns an error if the templates directory exists but contains invalid templates.
pub fn init_templates(templates_dir: Option<&Path>) -> Result<()> {
    let mut tera = Tera::default();

    if let Some(dir) = templates_dir.filter(|d| d.exists()) {
        let glob_pattern = format!("{}/**/*.tera", dir.display());
        tera = Tera::new(&glob_pattern).map_err(|e| {
            Error::Template(format!("Failed to load templates from {}: {e}", dir.display()))
        })?;
    }

    for (name, content) in EMBEDDED_TEMPLATES.iter() {
        if tera.get_template(name).is_err() {
            tera.add_raw_template(name, content)
                .map_err(|e| Error::Template(format!("Invalid embedded template {name}: {e}")))?;
        }
    }

    *TERA.write().map_err(|e| Error::Template(e.to_string()))? = Some(tera);

    Ok(())
}

/// Render a template with the given context.
///
/// The engine is initialized with the embedded defaults on first use if
/// [`init_templates`] has not been called.
///
/// # Errors
///
/// Returns an error if the template doesn't exist or rendering fails.
pub fn render(name: &str, context: &Context) -> Result<String> {
    let needs_init = TERA.read().map_err(|e| Error::Template(e.to_string()))?.is_none();

    if needs_init {
        init_templates(None)?;
    }

    let guard = TERA.read().map_err(|e| Error::Template(e.to_string()))?;
    let tera = guard.as_ref().ok_or_else(|| Error::Template("Templates not initialized".into()))?;
    let rendered = tera
        .render(name, context)
        .map_err(|e| Error::Template(format!("Failed to render template {name}: {e}")))?;
    drop(guard);

    Ok(rendered)
}

/// Reset the template cache, forcing re-initialization on next use.
///
/// # Errors
///
/// Returns an error if the write lock cannot be acquired.
pub fn reset_cache() -> Result<()> {
    *TERA.write().map_err(|e| Error::Template(e.to_string()))? = None;
    Ok(())
}

/// Get the list of all embedded template names.
#[must_use]
pub fn embedded_template_names() -> Vec<&'static str> {
    EMBEDDED_TEMPLATES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn sample_context() -> Context {
        let mut ctx = Context::new();
        ctx.insert(
            "tasks",
            &json!([
                {"index": 1, "name": "Pay bills", "priority": "High", "status": "Not Done"},
                {"index": 2, "name": "Walk dog", "priority": "Low", "status": "Done"},
            ]),
        );
        ctx.insert("priorities", &json!([{"label": "High", "name": "HIGH"}]));
        ctx
    }

    #[test]
    #[serial_test::serial]
    fn test_all_embedded_templates_render() {
        reset_cache().unwrap();
        init_templates(None).unwrap();
        for name in embedded_template_names() {
            render(name, &sample_context()).unwrap();
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_task_list_rendering() {
        reset_cache().unwrap();
        let out = render(TASK_LIST, &sample_context()).unwrap();
        assert_eq!(
            out,
            "To-Do List:\n\
             1. Pay bills | Priority: High | Status: Not Done\n\
             2. Walk dog | Priority: Low | Status: Done\n"
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_empty_task_list_rendering() {
        reset_cache().unwrap();
        let mut ctx = Context::new();
        ctx.insert("tasks", &Vec::<serde_json::Value>::new());
        let out = render(TASK_LIST, &ctx).unwrap();
        assert_eq!(out, "Your to-do list is empty.\n");
    }

    #[test]
    #[serial_test::serial]
    fn test_priority_prompt_capitalizes_name() {
        reset_cache().unwrap();
        let out = render(PRIORITY_PROMPT, &sample_context()).unwrap();
        assert!(out.contains("High: High"), "Output was: {out}");
    }

    #[test]
    #[serial_test::serial]
    fn test_filesystem_templates_override_embedded() {
        reset_cache().unwrap();

        let dir = TempDir::new().unwrap();
        let template_dir = dir.path().join("messages");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("menu.tera"), "CUSTOM MENU").unwrap();

        init_templates(Some(dir.path())).unwrap();

        assert_eq!(render(MENU, &Context::new()).unwrap(), "CUSTOM MENU");
        // Templates the directory lacks still come from the embedded set.
        assert!(render(TASK_LIST, &sample_context()).unwrap().starts_with("To-Do List:"));

        reset_cache().unwrap();
    }

    #[test]
    #[serial_test::serial]
    fn test_render_missing_template_fails() {
        reset_cache().unwrap();
        init_templates(Some(Path::new("/nonexistent"))).unwrap();

        let result = render("nonexistent/template.tera", &Context::new());
        assert!(result.is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_init_with_invalid_templates_fails() {
        reset_cache().unwrap();

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("invalid.tera"), "{% if foo %}unclosed if tag without endif")
            .unwrap();

        let result = init_templates(Some(dir.path()));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to load templates"), "Error was: {err}");
    }

    #[test]
    fn test_embedded_template_count() {
        assert_eq!(embedded_template_names().len(), 3);
    }
}
