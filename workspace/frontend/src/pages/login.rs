use mcontas_common::LoginDraft;
use yew::prelude::*;

use super::{NOT_IMPLEMENTED_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use crate::common::form::FormValues;
use crate::common::toast::{ToastContext, ToastType};

pub fn login_feedback(draft: &LoginDraft) -> (ToastType, String) {
    match draft.validate() {
        Ok(()) => (ToastType::Info, NOT_IMPLEMENTED_MESSAGE.to_string()),
        Err(e) => (ToastType::Warning, e.to_string()),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>();

    let Some(toast_ctx) = toast_ctx else {
        log::error!("LoginPage rendered outside of a ToastProvider");
        return html! {};
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (toast_type, message) = match FormValues::read(&form_ref) {
                Ok(values) => login_feedback(&LoginDraft {
                    email: values.text("email"),
                    password: values.text("password"),
                }),
                Err(e) => {
                    log::error!("Failed to read login form: {}", e);
                    (ToastType::Error, UNEXPECTED_ERROR_MESSAGE.to_string())
                }
            };
            toast_ctx.show(toast_type, message);
        })
    };

    html! {
        <article>
            <div class="text-center">
                <h1 class="fw-bold">{"Login"}</h1>
                <p>{"Sign in to manage your bills"}</p>
            </div>
            <form ref={form_ref} action="#" class="card shadow-sm p-3" onsubmit={on_submit}>
                <div class="mb-3">
                    <label for="email" class="form-label">{"E-mail"}</label>
                    <input type="email" class="form-control" id="email" name="email" autocomplete="username" />
                </div>
                <div class="mb-3">
                    <label for="password" class="form-label">{"Password"}</label>
                    <input type="password" class="form-control" id="password" name="password" autocomplete="current-password" />
                </div>
                <button type="submit" class="btn btn-primary">{"Sign in"}</button>
            </form>
        </article>
    }
}
