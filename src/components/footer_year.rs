use web_sys::Element;

use crate::util::dom::{self, MountError};

/// Write the current calendar year into `#year`.
///
/// # Errors
///
/// Returns [`MountError`] when there is no document or `#year` is missing.
pub fn mount() -> Result<(), MountError> {
    let document = dom::document()?;
    let el = dom::by_id::<Element>(&document, "year")?;
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    Ok(())
}
