// Payment listing and recording

use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{FormField, FormSelect, Pagination, SuccessModal, page_count, page_slice};
use crate::pages::clients::nav_cb;
use crate::services;
use crate::storage::DocumentBridge;
use remit_shared::{Payment, PaymentMethod};

// ===== Payment Table =====

#[derive(Properties, PartialEq)]
pub struct PaymentsProps {
    pub invoice_no: Option<String>,
}

#[function_component(PaymentsPage)]
pub fn payments_page(props: &PaymentsProps) -> Html {
    let navigator = use_navigator().unwrap();
    let payments = use_state(|| None::<Vec<Payment>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1usize);

    {
        let payments = payments.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match services::payments::list().await {
                    Ok(list) => payments.set(Some(list)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch payments:", e.to_string());
                        error.set(Some("Failed to fetch payments.".to_string()));
                        payments.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    // Scope the table to one invoice when arriving from the invoice listing.
    let filtered: Vec<Payment> = payments
        .as_ref()
        .map(|list| match &props.invoice_no {
            Some(invoice_no) => list
                .iter()
                .filter(|p| p.invoice_no == *invoice_no)
                .cloned()
                .collect(),
            None => list.clone(),
        })
        .unwrap_or_default();
    let rows = page_slice(&filtered, *page);
    let total_pages = page_count(filtered.len());

    let add_route = match &props.invoice_no {
        Some(invoice_no) => Route::PaymentAddFor {
            invoice_no: invoice_no.clone(),
        },
        None => Route::PaymentAdd,
    };

    html! {
        <div class="min-h-screen bg-blue-300 p-6">
            <div class="max-w-4xl mx-auto flex justify-end mb-4 space-x-2">
                <button
                    onclick={nav_cb(&navigator, Route::Invoices)}
                    class="bg-green-500 text-white py-2 px-4 rounded-lg hover:bg-green-600"
                >
                    {"Invoice Table"}
                </button>
                <button
                    onclick={nav_cb(&navigator, add_route)}
                    class="bg-green-500 text-white py-2 px-4 rounded-lg hover:bg-green-600"
                >
                    {"Add New Payment"}
                </button>
            </div>

            <div class="max-w-4xl mx-auto bg-white rounded-lg shadow-lg p-8">
                if let Some(invoice_no) = &props.invoice_no {
                    <h2 class="text-2xl font-bold mb-6">
                        {format!("Payments for Invoice #{invoice_no}")}
                    </h2>
                }

                if payments.is_none() {
                    <p class="text-center">{"Loading..."}</p>
                } else if let Some(text) = (*error).clone() {
                    <p class="text-center text-red-500">{text}</p>
                } else if filtered.is_empty() {
                    <p class="text-center">{"No payments found."}</p>
                } else {
                    <>
                    <table class="w-full border-collapse">
                        <thead>
                            <tr class="bg-gray-100">
                                <th class="p-2 text-left">{"Invoice No"}</th>
                                <th class="p-2 text-left">{"Amount"}</th>
                                <th class="p-2 text-left">{"Date"}</th>
                                <th class="p-2 text-left">{"Method"}</th>
                                <th class="p-2 text-left">{"Ref No"}</th>
                                <th class="p-2 text-left">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|payment| {
                                let receipt = {
                                    let navigator = navigator.clone();
                                    let payment = payment.clone();
                                    Callback::from(move |_| {
                                        DocumentBridge::new().stash_payment(&payment);
                                        navigator.push(&Route::Receipt);
                                    })
                                };
                                let amount = payment
                                    .payment_amount
                                    .map(|a| format!("{a:.2}"))
                                    .unwrap_or_else(|| "N/A".to_string());
                                let method = PaymentMethod::all()
                                    .into_iter()
                                    .find(|m| m.as_str() == payment.payment_method)
                                    .map(|m| m.label().to_string())
                                    .unwrap_or_else(|| payment.payment_method.clone());
                                html! {
                                    <tr class="border-b">
                                        <td class="p-2">{&payment.invoice_no}</td>
                                        <td class="p-2">{amount}</td>
                                        <td class="p-2">{&payment.payment_date}</td>
                                        <td class="p-2">{method}</td>
                                        <td class="p-2">{&payment.reference_no}</td>
                                        <td class="p-2">
                                            <button
                                                onclick={receipt}
                                                class="text-blue-600 hover:underline"
                                            >
                                                {"Receipt"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                    <Pagination
                        current={*page}
                        total_pages={total_pages}
                        on_change={Callback::from({
                            let page = page.clone();
                            move |p| page.set(p)
                        })}
                    />
                    </>
                }
            </div>
        </div>
    }
}

// ===== Payment Add =====

#[derive(Properties, PartialEq)]
pub struct PaymentAddProps {
    pub invoice_no: Option<String>,
}

#[function_component(PaymentAddPage)]
pub fn payment_add_page(props: &PaymentAddProps) -> Html {
    let navigator = use_navigator().unwrap();
    let locked = props.invoice_no.is_some();

    let invoice_no = use_state(|| props.invoice_no.clone().unwrap_or_default());
    let amount = use_state(String::new);
    let date = use_state(String::new);
    let method = use_state(String::new);
    let reference_no = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);

    let method_options: Vec<(AttrValue, AttrValue)> = PaymentMethod::all()
        .into_iter()
        .map(|m| (AttrValue::from(m.as_str()), AttrValue::from(m.label())))
        .collect();

    let on_submit = {
        let invoice_no = invoice_no.clone();
        let amount = amount.clone();
        let date = date.clone();
        let method = method.clone();
        let reference_no = reference_no.clone();
        let loading = loading.clone();
        let error = error.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            if *loading {
                return;
            }
            let parsed_amount = Decimal::from_str_exact(amount.trim()).ok();
            if invoice_no.trim().is_empty()
                || parsed_amount.is_none()
                || date.is_empty()
                || method.is_empty()
                || reference_no.trim().is_empty()
            {
                error.set(Some(
                    "Please fill in all fields with a valid payment amount.".to_string(),
                ));
                return;
            }

            let payment = Payment {
                id: String::new(),
                invoice_no: invoice_no.trim().to_string(),
                payment_amount: parsed_amount,
                payment_date: (*date).clone(),
                payment_method: (*method).clone(),
                reference_no: reference_no.trim().to_string(),
            };

            error.set(None);
            loading.set(true);
            let loading = loading.clone();
            let error = error.clone();
            let saved = saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::payments::create(&payment).await {
                    Ok(()) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to add payment:", e.to_string());
                        error.set(Some("Failed to add payment. Please try again.".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_saved_close = {
        let navigator = navigator.clone();
        let invoice_no = invoice_no.clone();
        Callback::from(move |_| {
            navigator.push(&Route::PaymentsFor {
                invoice_no: (*invoice_no).clone(),
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4 relative">
            <div class="absolute top-4 right-4">
                <button
                    onclick={nav_cb(&navigator, Route::Home)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Home"}
                </button>
            </div>

            <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg">
                <h2 class="text-2xl font-bold text-center mb-6">{"Add Payment"}</h2>

                if let Some(text) = (*error).clone() {
                    <p class="text-red-500 text-center mb-4">{text}</p>
                }

                <div class="space-y-4">
                    <FormField
                        label="Invoice No"
                        required=true
                        readonly={locked}
                        placeholder="Enter invoice number"
                        value={(*invoice_no).clone()}
                        on_input={Callback::from({
                            let invoice_no = invoice_no.clone();
                            move |v| invoice_no.set(v)
                        })}
                    />
                    <FormField
                        label="Payment Amount"
                        required=true
                        input_type="number"
                        placeholder="Enter payment amount"
                        value={(*amount).clone()}
                        on_input={Callback::from({
                            let amount = amount.clone();
                            move |v| amount.set(v)
                        })}
                    />
                    <FormField
                        label="Payment Date"
                        required=true
                        input_type="date"
                        value={(*date).clone()}
                        on_input={Callback::from({
                            let date = date.clone();
                            move |v| date.set(v)
                        })}
                    />
                    <FormSelect
                        label="Payment Method"
                        required=true
                        value={(*method).clone()}
                        options={method_options}
                        placeholder="Select payment method"
                        on_change={Callback::from({
                            let method = method.clone();
                            move |v| method.set(v)
                        })}
                    />
                    <FormField
                        label="Reference No"
                        required=true
                        placeholder="Enter reference number"
                        value={(*reference_no).clone()}
                        on_input={Callback::from({
                            let reference_no = reference_no.clone();
                            move |v| reference_no.set(v)
                        })}
                    />
                    <button
                        onclick={on_submit}
                        disabled={*loading}
                        class="w-full py-3 rounded text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 disabled:cursor-not-allowed"
                    >
                        {if *loading { "Adding..." } else { "Add Payment" }}
                    </button>
                </div>
            </div>

            if *saved {
                <SuccessModal
                    message="Payment added successfully!"
                    on_close={on_saved_close}
                />
            }
        </div>
    }
}
