//! Angular I18n CLI
//!
//! Loads a translated-template fixture, applies the translation and reports
//! the resulting structure.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use angular_core::render3::i18n::{
    render_text_node, BindingSlots, BindingValue, I18nMessage, I18nTemplate, Translation,
    TranslationCache,
};
use angular_core::render3::instructions::CreateInstruction;
use angular_core::I18nConfig;

/// A translated message together with the template that renders it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(flatten)]
    pub message: I18nMessage,
    pub create: Vec<CreateInstruction>,
    #[serde(default)]
    pub bindings: Vec<BindingValue>,
}

impl Fixture {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("invalid i18n fixture")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read fixture {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub key: String,
    pub translated: bool,
    pub translation: Option<Translation>,
    /// Rendered content of each translated text node, by logical index.
    pub texts: Vec<(usize, String)>,
    pub html: String,
}

/// Creates one view of the fixture's template and reports on it.
pub fn run(fixture: &Fixture, config: &I18nConfig) -> Result<Report> {
    let template =
        I18nTemplate::new(fixture.message.clone(), fixture.create.clone()).with_config(config.clone());
    let mut cache = TranslationCache::new();
    let view = template
        .create_view(&mut cache, &fixture.bindings)
        .context("cannot apply translation")?;

    let tokens = fixture.message.token_stream();
    let mut slots = BindingSlots::new();
    slots.update(&fixture.bindings);
    let texts = view
        .translation()
        .map(|translation| {
            translation
                .text_nodes
                .iter()
                .map(|(index, def)| (*index, render_text_node(def, &tokens, &slots)))
                .collect()
        })
        .unwrap_or_default();

    Ok(Report {
        key: format!("{:016x}", fixture.message.key().0),
        translated: view.is_translated(),
        translation: view.translation().cloned(),
        texts,
        html: view.to_html(),
    })
}

/// Human readable form of a report.
pub fn format_report(report: &Report) -> String {
    let mut out = format!("key: {}\n", report.key);
    match &report.translation {
        Some(translation) => {
            out.push_str("child map:\n");
            for (parent, children) in &translation.child_map {
                out.push_str(&format!("  {}: {:?}\n", parent, children));
            }
            let detached: Vec<_> = translation.detached.iter().collect();
            out.push_str(&format!("detached: {:?}\n", detached));
            out.push_str("text nodes:\n");
            for (index, text) in &report.texts {
                out.push_str(&format!("  {}: {:?}\n", index, text));
            }
        }
        None => out.push_str("translation not applied (untranslated fallback)\n"),
    }
    out.push_str(&format!("html: {}\n", report.html));
    out
}
