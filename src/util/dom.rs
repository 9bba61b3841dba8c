//! Small DOM mutations that live outside the Leptos-rendered tree.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::error::FxError;

/// Set `document.body.style.overflow`; an empty value clears the lock.
pub fn set_body_overflow(value: &str) -> Result<(), FxError> {
    #[cfg(feature = "csr")]
    {
        let body = web_sys::window()
            .ok_or(FxError::MissingWindow)?
            .document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| FxError::MissingElement("body".to_owned()))?;
        let style = body.style();
        if value.is_empty() {
            style.remove_property("overflow")?;
        } else {
            style.set_property("overflow", value)?;
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
        Ok(())
    }
}

/// Apply `value` as the body overflow, logging instead of failing.
/// Returns whether the style was written.
pub fn apply_scroll_lock(value: &str) -> bool {
    match set_body_overflow(value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("body overflow {value:?} not applied: {e}");
            false
        }
    }
}

/// Show the completion notice for a finished action.
pub fn notify(message: &str) -> Result<(), FxError> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().ok_or(FxError::MissingWindow)?.alert_with_message(message)?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("{message}");
        Ok(())
    }
}
