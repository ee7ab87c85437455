//! Render diagnostics.
//!
//! A failed render never reaches the caller as an error; it becomes the fallback
//! text. The [`TemplateError`] built here is what gets logged instead, so the
//! cause of a fallback stays visible to whoever reads the logs.

use regex::Regex;
use strsim::levenshtein;

use crate::constants::{KEY_SEPARATOR, MAX_SUGGESTIONS, SIMILARITY_THRESHOLD_PERCENT};

use super::params::Parameters;

/// Name the engine gives to templates rendered from a string.
const ONE_OFF_TEMPLATE_NAME: &str = "__tera_one_off";

/// Why a template failed to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template references a name that is not among the merged parameters
    VariableNotFound {
        variable: String,
        available_variables: Vec<String>,
        suggestions: Vec<String>,
    },

    /// The template source could not be parsed
    SyntaxError {
        message: String,
        line: Option<usize>,
    },

    /// The template parsed but evaluating an expression failed
    /// (unknown filter, type mismatch, ...)
    RenderError {
        message: String,
    },

    /// The merged parameters could not be bound as template variables
    ContextError {
        message: String,
    },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::VariableNotFound {
                variable,
                ..
            } => write!(f, "Template variable not found: '{}'", variable),
            TemplateError::SyntaxError {
                message,
                ..
            } => write!(f, "Template syntax error: {}", message),
            TemplateError::RenderError {
                message,
            } => write!(f, "Template rendering failed: {}", message),
            TemplateError::ContextError {
                message,
            } => write!(f, "Template context error: {}", message),
        }
    }
}

impl std::error::Error for TemplateError {}

impl TemplateError {
    /// Classify an engine error, using `params` to suggest near-miss names.
    pub fn from_tera(error: &tera::Error, params: &Parameters) -> Self {
        let messages = collect_messages(error);

        if let Some(variable) = messages.iter().find_map(|msg| extract_variable_name(msg)) {
            let available_variables = params.names();
            let head = variable.split(KEY_SEPARATOR).next().unwrap_or(&variable);
            let suggestions = find_similar(head, &available_variables);
            return TemplateError::VariableNotFound {
                variable,
                available_variables,
                suggestions,
            };
        }

        let message = clean_messages(&messages);
        let is_parse_error = messages.iter().any(|msg| msg.starts_with("Failed to parse"));
        if is_parse_error {
            TemplateError::SyntaxError {
                line: messages.iter().find_map(|msg| extract_line(msg)),
                message,
            }
        } else {
            TemplateError::RenderError {
                message,
            }
        }
    }

    /// Multi-line report suitable for a log entry.
    pub fn format_with_context(&self) -> String {
        match self {
            TemplateError::VariableNotFound {
                variable,
                available_variables,
                suggestions,
            } => {
                let mut msg = format!("Template variable not found: {}\n", variable);
                if !suggestions.is_empty() {
                    msg.push_str("Did you mean one of these?\n");
                    for suggestion in suggestions {
                        msg.push_str(&format!("  - {}\n", suggestion));
                    }
                }
                if available_variables.is_empty() {
                    msg.push_str("No parameters were supplied\n");
                } else {
                    msg.push_str(&format!(
                        "Available parameters: {}\n",
                        available_variables.join(", ")
                    ));
                }
                msg
            }
            TemplateError::SyntaxError {
                message,
                line,
            } => {
                let mut msg = format!("Template syntax error: {}\n", message);
                if let Some(line) = line {
                    msg.push_str(&format!("Line: {}\n", line));
                }
                msg.push_str("Check for unclosed {{ }} or {% %} delimiters\n");
                msg
            }
            TemplateError::RenderError {
                message,
            } => format!("Template rendering failed: {}\n", message),
            TemplateError::ContextError {
                message,
            } => format!("Template context error: {}\n", message),
        }
    }
}

/// Up to [`MAX_SUGGESTIONS`] entries of `available` close to `target`, closest first.
pub(crate) fn find_similar(target: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<_> = available
        .iter()
        .map(|candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .collect();
    scored.sort_by_key(|(_, distance)| *distance);
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(candidate, _)| candidate.clone()).collect()
}

fn collect_messages(error: &tera::Error) -> Vec<String> {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }
    messages
}

fn clean_messages(messages: &[String]) -> String {
    let one_off = format!("'{}'", ONE_OFF_TEMPLATE_NAME);
    let cleaned: Vec<String> = messages
        .iter()
        .map(|msg| {
            msg.replace(&format!("while rendering {}", one_off), "")
                .replace(&format!("Failed to render {}", one_off), "")
                .replace(&format!("Failed to parse {}", one_off), "")
                .replace(&one_off, "template")
                .trim()
                .to_string()
        })
        .filter(|msg| !msg.is_empty())
        .collect();

    if cleaned.is_empty() {
        "unknown template error".to_string()
    } else {
        cleaned.join(" -> ")
    }
}

/// Extract the name from "Variable `foo` not found ..."
fn extract_variable_name(message: &str) -> Option<String> {
    let re = Regex::new(r"Variable `([^`]+)` not found").ok()?;
    re.captures(message).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

/// Extract the line from the parser's " --> 1:7" marker
fn extract_line(message: &str) -> Option<usize> {
    let re = Regex::new(r"-->\s*(\d+):(\d+)").ok()?;
    re.captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok())
}
