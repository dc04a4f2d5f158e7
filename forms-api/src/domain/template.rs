//! Reply templates, keyed by the `form_name` a site form posts.

use std::{borrow::Cow, collections::HashMap};

use super::models::FormSubmission;

const NAME_PLACEHOLDER: &str = "{{name}}";

/// How submitter-supplied values are written into HTML bodies.
///
/// `Raw` reproduces the historical output byte for byte, which means a
/// submitter can inject markup into mail we send. `EscapeHtml` closes that
/// hole at the cost of changing what recipients see for names containing
/// `<`, `&` and the like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    #[default]
    Raw,
    EscapeHtml,
}

impl Interpolation {
    pub fn html<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(value),
            Self::EscapeHtml => Cow::Owned(ammonia::clean_text(value)),
        }
    }
}

impl From<bool> for Interpolation {
    fn from(escape_html: bool) -> Self {
        if escape_html {
            Self::EscapeHtml
        } else {
            Self::Raw
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailTemplate {
    pub fn new(
        subject: impl Into<String>,
        text: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            text: text.into(),
            html: html.into(),
        }
    }

    /// Fills `{{name}}` in all three parts.
    pub fn render(&self, name: &str, interpolation: Interpolation) -> EmailTemplate {
        EmailTemplate {
            subject: self.subject.replace(NAME_PLACEHOLDER, name),
            text: self.text.replace(NAME_PLACEHOLDER, name),
            html: self
                .html
                .replace(NAME_PLACEHOLDER, &interpolation.html(name)),
        }
    }
}

/// Immutable lookup of reply templates. Always holds a default.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    templates: HashMap<String, EmailTemplate>,
    default: EmailTemplate,
}

impl TemplateTable {
    pub fn new(default: EmailTemplate) -> Self {
        Self {
            templates: HashMap::new(),
            default,
        }
    }

    pub fn with_template(mut self, form_name: impl Into<String>, template: EmailTemplate) -> Self {
        self.templates.insert(form_name.into(), template);
        self
    }

    /// The templates shipped with the site.
    pub fn builtin() -> Self {
        Self::new(EmailTemplate::new(
            "Thank You for Contacting Perfect AIm Marketing",
            "Hi {{name}},\n\nThank you for reaching out to Perfect AIm Marketing. We've received your message and will get back to you within 24 hours.\n\nBest regards,\nThe Perfect AIm Team",
            include_str!("../../templates/default.html"),
        ))
        .with_template(
            "medcor-contact",
            EmailTemplate::new(
                "Thank You for Contacting MedCor AI",
                "Dear {{name}},\n\nThank you for your interest in MedCor AI. We've received your request and our team will contact you within 24 hours to discuss how we can help transform your practice.\n\nBest regards,\nThe MedCor AI Team",
                include_str!("../../templates/medcor-contact.html"),
            ),
        )
        .with_template(
            "aireceptionist-contact",
            EmailTemplate::new(
                "Your 24/7 AI Receptionist is Almost Ready!",
                "Hi {{name}},\n\nThank you for choosing our 24/7 AI Receptionist service. We'll have your virtual receptionist ready within 48 hours!\n\nOur team will call you within 24 hours to finalize the setup.\n\nBest regards,\nThe AI Receptionist Team",
                include_str!("../../templates/aireceptionist-contact.html"),
            ),
        )
    }

    /// Exact-match lookup; anything unregistered gets the default.
    pub fn get(&self, form_name: Option<&str>) -> &EmailTemplate {
        form_name
            .and_then(|key| self.templates.get(key))
            .unwrap_or(&self.default)
    }

    /// Picks the template for `form_name` and renders it for the submitter.
    pub fn select_template(
        &self,
        form_name: Option<&str>,
        submission: &FormSubmission,
        interpolation: Interpolation,
    ) -> EmailTemplate {
        let name = submission.name().unwrap_or_default();
        self.get(form_name).render(&name, interpolation)
    }
}
