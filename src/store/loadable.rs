//! Remote-data lifecycle shared by every domain store slice.

/// Last-known-good data plus the loading/error lifecycle around it.
///
/// `is_loading` and a present `error_message` are mutually exclusive:
/// entering the loading state clears the error, and a terminal event clears
/// the loading flag. `data` keeps its previous value across a failed reload
/// unless the owning slice decides otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub data: T,
}

impl<T: Default> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error_message: None,
            data: T::default(),
        }
    }
}

impl<T> Loadable<T> {
    /// Enter the loading state, keeping current data visible.
    pub fn begin_loading(self) -> Self {
        Self {
            is_loading: true,
            error_message: None,
            data: self.data,
        }
    }

    /// Terminal success: replace data, clear any previous error.
    pub fn succeed(self, data: T) -> Self {
        Self {
            is_loading: false,
            error_message: None,
            data,
        }
    }

    /// Terminal failure: record the message, keep the stale data.
    pub fn fail(self, message: String) -> Self {
        Self {
            is_loading: false,
            error_message: Some(message),
            data: self.data,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
