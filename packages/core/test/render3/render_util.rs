//! Render Utilities for Tests
//!
//! Template fixture rendering a translated template the way a component
//! would: the first render creates the view, later renders only update it.

use angular_core::render3::i18n::{
    BindingValue, ElementPlaceholders, ExpressionPlaceholders, I18nMessage, I18nTemplate,
    TemplateView, TranslationCache,
};
use angular_core::render3::instructions::CreateInstruction;

pub struct TemplateFixture {
    pub template: I18nTemplate,
    pub cache: TranslationCache,
    pub view: Option<TemplateView>,
}

impl TemplateFixture {
    pub fn new(
        create: Vec<CreateInstruction>,
        tokens: &[&str],
        element_placeholders: &[(&str, Vec<usize>)],
        expression_placeholders: &[(&str, usize)],
    ) -> Self {
        let elements: ElementPlaceholders = element_placeholders.iter().cloned().collect();
        let expressions: ExpressionPlaceholders = expression_placeholders.iter().cloned().collect();
        let message = I18nMessage::new(tokens.iter().copied(), elements, expressions);
        TemplateFixture {
            template: I18nTemplate::new(message, create),
            cache: TranslationCache::new(),
            view: None,
        }
    }

    /// Renders with `ctx` and returns the host's HTML.
    pub fn render_to_html(&mut self, ctx: &[BindingValue]) -> String {
        match self.view.as_mut() {
            Some(view) => {
                self.template
                    .update_view(view, ctx)
                    .expect("update pass failed");
            }
            None => {
                let view = self
                    .template
                    .create_view(&mut self.cache, ctx)
                    .expect("creation pass failed");
                self.view = Some(view);
            }
        }
        self.view.as_ref().map(TemplateView::to_html).unwrap_or_default()
    }
}

pub fn values(values: &[&str]) -> Vec<BindingValue> {
    values.iter().map(|v| BindingValue::from(*v)).collect()
}
