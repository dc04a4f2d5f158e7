use serde::Deserialize;

use super::FieldMap;

/// A contact form as submitted by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(FieldMap);

impl FormSubmission {
    pub fn name(&self) -> Option<String> {
        self.0.text("name")
    }

    pub fn email(&self) -> Option<String> {
        self.0.text("email")
    }

    pub fn phone(&self) -> Option<String> {
        self.0.text("phone")
    }

    pub fn company(&self) -> Option<String> {
        self.0.text("company")
    }

    /// Identifier of the form on the site, used to pick the reply template.
    pub fn form_name(&self) -> Option<String> {
        self.0.text("form_name")
    }
}

impl<K: Into<String>, V: Into<serde_json::Value>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
