use yew::prelude::*;

use crate::settings::{self, AppSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    pub(crate) fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-danger",
        }
    }

    pub(crate) fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "bi bi-info-circle-fill",
            ToastType::Success => "bi bi-check-circle-fill",
            ToastType::Warning => "bi bi-exclamation-triangle-fill",
            ToastType::Error => "bi bi-x-octagon-fill",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

/// Toasts currently on screen, in the order they were raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: usize,
    dismiss_after_ms: u32,
}

impl ToastStore {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            dismiss_after_ms,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.toast_duration_ms)
    }

    /// Adds a toast and returns the id used to dismiss it.
    pub fn push(&mut self, toast_type: ToastType, message: String) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            toast_type,
        });
        id
    }

    /// Returns false when the toast was already gone (closed before its timer fired).
    pub fn remove(&mut self, id: usize) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss_after_ms(&self) -> u32 {
        self.dismiss_after_ms
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
}

impl ToastContext {
    pub fn show(&self, toast_type: ToastType, message: String) {
        self.add_toast.emit((message, toast_type));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Dismiss timers outlive the render that created them.
    let store = use_mut_ref(|| ToastStore::from_settings(&settings::get_settings()));
    let force_update = use_force_update();

    let remove_toast = {
        let store = store.clone();
        let force_update = force_update.clone();

        Callback::from(move |id: usize| {
            if store.borrow_mut().remove(id) {
                force_update.force_update();
            }
        })
    };

    let add_toast = {
        let store = store.clone();
        let remove_toast = remove_toast.clone();

        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let (id, duration) = {
                let mut store = store.borrow_mut();
                let id = store.push(toast_type, message.clone());
                (id, store.dismiss_after_ms())
            };
            log::debug!("Toast #{} ({:?}): {}", id, toast_type, message);
            force_update.force_update();

            let remove_toast = remove_toast.clone();
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                remove_toast.emit(id);
            });
            timeout_handle.forget();
        })
    };

    let toasts = store.borrow().toasts().to_vec();
    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast-container position-fixed bottom-0 end-0 p-3">
                {for toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} role="alert" class={classes!("alert", toast.toast_type.alert_class(), "d-flex", "align-items-center", "gap-2", "shadow")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span class="me-auto">{&toast.message}</span>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
