use mcontas_common::RegisterDraft;
use yew::prelude::*;

use super::{NOT_IMPLEMENTED_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use crate::common::form::FormValues;
use crate::common::toast::{ToastContext, ToastType};

pub fn register_feedback(draft: &RegisterDraft) -> (ToastType, String) {
    match draft.validate() {
        Ok(()) => {
            log::info!("Registration accepted for {}", draft.email);
            (ToastType::Info, NOT_IMPLEMENTED_MESSAGE.to_string())
        }
        Err(e) => {
            log::warn!("Registration rejected: {}", e);
            (ToastType::Warning, e.to_string())
        }
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>();

    let Some(toast_ctx) = toast_ctx else {
        log::error!("RegisterPage rendered outside of a ToastProvider");
        return html! {};
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (toast_type, message) = match FormValues::read(&form_ref) {
                Ok(values) => register_feedback(&RegisterDraft {
                    name: values.text("name"),
                    email: values.text("email"),
                    password: values.text("password"),
                    password_confirmation: values.text("password_confirmation"),
                }),
                Err(e) => {
                    log::error!("Failed to read registration form: {}", e);
                    (ToastType::Error, UNEXPECTED_ERROR_MESSAGE.to_string())
                }
            };
            toast_ctx.show(toast_type, message);
        })
    };

    html! {
        <article>
            <div class="text-center">
                <h1 class="fw-bold">{"Register"}</h1>
                <p>{"Create your account"}</p>
            </div>
            <form ref={form_ref} action="#" class="card shadow-sm p-3" onsubmit={on_submit}>
                <div class="mb-3">
                    <label for="name" class="form-label">{"Name"}</label>
                    <input type="text" class="form-control" id="name" name="name" autocomplete="name" />
                </div>
                <div class="mb-3">
                    <label for="email" class="form-label">{"E-mail"}</label>
                    <input type="email" class="form-control" id="email" name="email" autocomplete="email" />
                </div>
                <div class="mb-3 d-flex flex-wrap justify-content-start gap-3">
                    <div class="mb-3">
                        <label for="password" class="form-label">{"Password"}</label>
                        <input type="password" class="form-control" id="password" name="password" autocomplete="new-password" />
                    </div>
                    <div class="mb-3">
                        <label for="password-confirmation" class="form-label">{"Confirm password"}</label>
                        <input type="password" class="form-control" id="password-confirmation" name="password_confirmation" autocomplete="new-password" />
                    </div>
                </div>
                <button type="submit" class="btn btn-success">{"Create account"}</button>
            </form>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RegisterDraft {
        RegisterDraft {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            password_confirmation: "secret".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_is_not_implemented() {
        assert_eq!(
            register_feedback(&draft()),
            (ToastType::Info, NOT_IMPLEMENTED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_mismatched_passwords_warn() {
        let draft = RegisterDraft {
            password_confirmation: "secreT".to_string(),
            ..draft()
        };
        assert_eq!(
            register_feedback(&draft),
            (ToastType::Warning, "Passwords do not match".to_string())
        );
    }
}
