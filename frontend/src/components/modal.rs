// Overlay dialogs shared by every screen

use yew::prelude::*;

// ===== Success Modal =====

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    #[prop_or(AttrValue::Static("Success!"))]
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 flex justify-center items-center z-50 backdrop-blur-sm">
            <div class="bg-white p-8 rounded-2xl shadow-xl max-w-sm w-full text-center">
                <h2 class="text-2xl font-bold text-green-600 mb-4">{&props.title}</h2>
                <p class="text-gray-700 mb-6">{&props.message}</p>
                <button
                    {onclick}
                    class="bg-green-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-green-700"
                >
                    {"OK"}
                </button>
            </div>
        </div>
    }
}

// ===== Confirm Dialog =====

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Two-step confirmation gate; nothing happens until "Yes" is pressed.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_yes = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_no = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="fixed inset-0 flex items-center justify-center z-50">
            <div class="bg-white p-6 rounded shadow-lg w-full max-w-sm">
                <p class="text-center mb-4 text-gray-800">{&props.message}</p>
                <div class="flex justify-center gap-4">
                    <button
                        onclick={on_yes}
                        class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700"
                    >
                        {"Yes"}
                    </button>
                    <button
                        onclick={on_no}
                        class="bg-gray-300 px-4 py-2 rounded hover:bg-gray-400"
                    >
                        {"No"}
                    </button>
                </div>
            </div>
        </div>
    }
}

// ===== Message Modal =====

#[derive(Properties, PartialEq)]
pub struct MessageModalProps {
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

/// Blocking notice for validation and submit failures.
#[function_component(MessageModal)]
pub fn message_modal(props: &MessageModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 flex items-center justify-center z-50">
            <div class="bg-white p-6 rounded shadow-lg w-full max-w-sm">
                <p class="text-center text-gray-800 mb-4">{&props.message}</p>
                <div class="flex justify-center">
                    <button
                        {onclick}
                        class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700"
                    >
                        {"OK"}
                    </button>
                </div>
            </div>
        </div>
    }
}
