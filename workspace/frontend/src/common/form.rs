use web_sys::{FormData, HtmlFormElement};
use yew::NodeRef;

/// Snapshot of a `<form>`'s fields, read through `FormData`.
pub struct FormValues {
    data: FormData,
}

impl FormValues {
    pub fn read(form_ref: &NodeRef) -> Result<Self, String> {
        let form = form_ref
            .cast::<HtmlFormElement>()
            .ok_or_else(|| "Form element is not mounted".to_string())?;
        let data = FormData::new_with_form(&form)
            .map_err(|e| format!("Failed to read form data: {:?}", e))?;
        Ok(Self { data })
    }

    /// Text value of a field; missing fields read as empty.
    pub fn text(&self, name: &str) -> String {
        self.data.get(name).as_string().unwrap_or_default()
    }
}
