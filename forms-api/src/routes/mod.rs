pub(crate) mod consent;
pub(crate) mod error;
pub(crate) mod form_submission;
#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use error::ApiError;
