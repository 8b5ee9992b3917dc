use mcontas_common::{BillDraft, BillStatus, PaymentMethod, RawBillForm, Recurrence, StatusDate};
use web_sys::{HtmlFormElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::NOT_IMPLEMENTED_MESSAGE;
use crate::common::form::FormValues;
use crate::common::toast::{ToastContext, ToastType};
use crate::mock_data::CATEGORY_OPTIONS;
use crate::router::Route;

pub const SAVED_MESSAGE: &str = "OK!";
pub const SAVE_ERROR_MESSAGE: &str = "Error saving bill. Contact support!";

fn read_bill_form(form_ref: &NodeRef) -> Result<RawBillForm, String> {
    let values = FormValues::read(form_ref)?;
    Ok(RawBillForm {
        description: values.text("description"),
        id_category: values.text("id_category"),
        value: values.text("value"),
        due_date: values.text("due_date"),
        recurrence: values.text("recurrence"),
        status: values.text("status"),
        payment_method: values.text("payment_method"),
        payment_date: values.text("payment_date"),
        cancel_date: values.text("cancel_date"),
        scheduled_date: values.text("scheduled_date"),
        surcharge: values.text("surcharge"),
        discount: values.text("discount"),
        notes: values.text("notes"),
    })
}

/// Toast to show for a submitted form. Saving only logs the accepted draft.
pub fn submit_feedback(raw: &RawBillForm) -> (ToastType, String) {
    let draft = BillDraft::from(raw);

    if let Err(e) = draft.validate() {
        log::warn!("Bill rejected: {}", e);
        return (ToastType::Warning, e.to_string());
    }

    match serde_json::to_string(&draft) {
        Ok(json) => {
            log::info!("Bill accepted: {}", json);
            (ToastType::Success, SAVED_MESSAGE.to_string())
        }
        Err(e) => {
            log::error!("Failed to save bill: {}", e);
            (ToastType::Error, SAVE_ERROR_MESSAGE.to_string())
        }
    }
}

/// Deleting is not wired to anything, whatever the form holds.
pub fn delete_feedback() -> (ToastType, String) {
    (ToastType::Warning, NOT_IMPLEMENTED_MESSAGE.to_string())
}

fn date_field_style(status: BillStatus, field: StatusDate) -> &'static str {
    if status.required_date() == Some(field) {
        "display: block"
    } else {
        "display: none"
    }
}

#[function_component(BillFormPage)]
pub fn bill_form_page() -> Html {
    let form_ref = use_node_ref();
    let status = use_state(BillStatus::default);
    let toast_ctx = use_context::<ToastContext>();

    let Some(toast_ctx) = toast_ctx else {
        log::error!("BillFormPage rendered outside of a ToastProvider");
        return html! {};
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_ref = form_ref.clone();
            let toast_ctx = toast_ctx.clone();

            // Nothing is awaited yet; saving is local only.
            wasm_bindgen_futures::spawn_local(async move {
                let (toast_type, message) = match read_bill_form(&form_ref) {
                    Ok(raw) => submit_feedback(&raw),
                    Err(e) => {
                        log::error!("Failed to save bill: {}", e);
                        (ToastType::Error, SAVE_ERROR_MESSAGE.to_string())
                    }
                };
                toast_ctx.show(toast_type, message);
            });
        })
    };

    let on_delete = {
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Delete requested");
            let (toast_type, message) = delete_feedback();
            toast_ctx.show(toast_type, message);
        })
    };

    let on_new = {
        let form_ref = form_ref.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Starting a new bill");
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
            status.set(BillStatus::default());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let selected = BillStatus::from_code(&select.value());
            log::trace!("Status changed to {:?}", selected);
            status.set(selected);
        })
    };

    let current_status = *status;

    html! {
        <article>
            <div class="text-center">
                <h1 class="fw-bold">{"Bill to pay"}</h1>
                <p>{"Register a bill to pay"}</p>
            </div>
            <form ref={form_ref} action="#" class="card shadow-sm p-3" onsubmit={on_submit}>
                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <button type="button" class="btn btn-primary" onclick={on_new}>{"New"}</button>
                    <button type="submit" class="btn btn-success">{"Save"}</button>
                    <Link<Route> to={Route::Bills} classes="btn btn-dark">{"List"}</Link<Route>>
                    <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>

                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <div class="mb-3">
                        <label for="description" class="form-label">{"Description"}</label>
                        <input type="text" class="form-control" id="description" name="description" placeholder="Energy bill" />
                    </div>
                    <div class="mb-3">
                        <label for="id-category" class="form-label">{"Category"}</label>
                        <select id="id-category" name="id_category" class="form-control">
                            { for CATEGORY_OPTIONS.iter().map(|c| html! {
                                <option key={c.id} value={c.id.to_string()}>{c.name}</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <div class="mb-3">
                        <label for="value" class="form-label">{"Value"}</label>
                        <input type="number" step="0.01" min="0" class="form-control" id="value" name="value" placeholder="R$ 0,00" />
                    </div>
                    <div class="mb-3">
                        <label for="due-date" class="form-label">{"Due date"}</label>
                        <input type="date" class="form-control" id="due-date" name="due_date" />
                    </div>
                </div>

                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <div class="mb-3">
                        <label for="recurrence" class="form-label">{"Recurrence"}</label>
                        <select id="recurrence" name="recurrence" class="form-control">
                            { for Recurrence::ALL.iter().map(|r| html! {
                                <option key={r.code()} value={r.code()}>{r.label()}</option>
                            }) }
                        </select>
                    </div>
                    <div class="mb-3">
                        <label for="status" class="form-label">{"Status"}</label>
                        <select id="status" name="status" class="form-control" onchange={on_status_change}>
                            { for BillStatus::ALL.iter().map(|s| html! {
                                <option key={s.code()} value={s.code()} selected={*s == current_status}>{s.label()}</option>
                            }) }
                        </select>
                    </div>
                    <div class="mb-3">
                        <label for="payment-method" class="form-label">{"Payment method"}</label>
                        <select id="payment-method" name="payment_method" class="form-control">
                            { for PaymentMethod::ALL.iter().map(|m| html! {
                                <option key={m.code()} value={m.code()}>{m.label()}</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div>
                    <div class="mb-3" style={date_field_style(current_status, StatusDate::Payment)}>
                        <label for="payment-date" class="form-label">{"Payment date"}</label>
                        <input type="date" class="form-control" id="payment-date" name="payment_date" />
                    </div>
                    <div class="mb-3" style={date_field_style(current_status, StatusDate::Cancel)}>
                        <label for="cancel-date" class="form-label">{"Cancellation date"}</label>
                        <input type="date" class="form-control" id="cancel-date" name="cancel_date" />
                    </div>
                    <div class="mb-3" style={date_field_style(current_status, StatusDate::Scheduled)}>
                        <label for="scheduled-date" class="form-label">{"Scheduled date"}</label>
                        <input type="date" class="form-control" id="scheduled-date" name="scheduled_date" />
                    </div>
                </div>

                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <div class="mb-3">
                        <label for="surcharge" class="form-label">{"Surcharge"}</label>
                        <input type="number" step="0.01" class="form-control" id="surcharge" name="surcharge" placeholder="R$ 0,00" />
                    </div>
                    <div class="mb-3">
                        <label for="discount" class="form-label">{"Discount"}</label>
                        <input type="number" step="0.01" class="form-control" id="discount" name="discount" placeholder="R$ 0,00" />
                    </div>
                </div>

                <div class="mb-3">
                    <label for="notes" class="form-label">{"Notes"}</label>
                    <textarea id="notes" name="notes" class="form-control" placeholder="e.g. only pay after the 10th" />
                </div>
            </form>
        </article>
    }
}
