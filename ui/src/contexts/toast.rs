use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

/// A button shown inside a toast, e.g. "Retry".
#[derive(Debug, Clone, PartialEq)]
pub struct ToastAction {
    pub label: AttrValue,
    pub on_click: Callback<()>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(5000),
            action: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }

    /// Attach a button; the toast stays until dismissed or clicked.
    pub fn with_action(
        mut self,
        label: impl Into<AttrValue>,
        on_click: Callback<()>,
    ) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            on_click,
        });
        self.duration = None;
        self
    }
}

/// Toasts in the order they were raised.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastMessage {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastMessage;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastMessage::Add(toast) => {
                // the same message twice in a row is shown once
                toasts.retain(|t| t.message != toast.message);
                toasts.push(toast);
            }
            ToastMessage::Remove(id) => {
                toasts.retain(|t| t.id != id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastMessage::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastMessage::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    /// An error the user can retry from the toast itself.
    pub fn error_with_retry(
        &self,
        message: impl Into<String>,
        retry: Callback<()>,
    ) {
        self.add(Toast::error(message.into()).with_action("Retry", retry));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastMessage::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}
