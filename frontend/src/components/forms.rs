// Labeled form controls shared by the master-data and invoice forms

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

// ===== Text / date / number input =====

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_input: Callback<String>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let class = if props.readonly {
        "border border-gray-300 rounded p-2 w-full bg-gray-100 cursor-not-allowed"
    } else {
        "border border-gray-300 rounded p-2 w-full"
    };

    html! {
        <div>
            <label class="block mb-1 text-gray-700">
                {&props.label}
                if props.required {
                    <span class="text-red-500">{"*"}</span>
                }
            </label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                readonly={props.readonly}
                placeholder={props.placeholder.clone()}
                {oninput}
                {class}
            />
            if let Some(error) = &props.error {
                <p class="text-red-600 text-sm mt-1">{error}</p>
            }
        </div>
    }
}

// ===== Select =====

#[derive(Properties, PartialEq)]
pub struct FormSelectProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// (value, label) pairs; an empty-valued placeholder row is prepended.
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or(AttrValue::Static("Select"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(FormSelect)]
pub fn form_select(props: &FormSelectProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div>
            <label class="block mb-1 text-gray-700">
                {&props.label}
                if props.required {
                    <span class="text-red-500">{"*"}</span>
                }
            </label>
            <select
                value={props.value.clone()}
                disabled={props.disabled}
                {onchange}
                class="border border-gray-300 rounded p-2 w-full"
            >
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                { for props.options.iter().map(|(value, label)| {
                    html! {
                        <option
                            value={value.clone()}
                            selected={*value == props.value}
                        >
                            {label}
                        </option>
                    }
                })}
            </select>
            if let Some(error) = &props.error {
                <p class="text-red-600 text-sm mt-1">{error}</p>
            }
        </div>
    }
}
