use crate::error::{MossyError, Result};

/// Result of an operation whose primary effect succeeded, plus an optional
/// warning from a best-effort trailing step.
///
/// The warning never undoes the primary effect. Callers that only want one
/// error message can use [`Outcome::into_result`].
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<MossyError>,
}

impl<T> Outcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn with_warning(value: T, warning: MossyError) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }

    pub fn into_result(self) -> Result<T> {
        match self.warning {
            Some(warning) => Err(warning),
            None => Ok(self.value),
        }
    }
}
