// Printable invoice document with print and email-PDF actions

use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::MessageModal;
use crate::pages::clients::nav_cb;
use crate::pdf;
use crate::services;
use crate::storage::DocumentBridge;
use remit_shared::{Invoice, issuer, money};

#[function_component(InvoiceViewPage)]
pub fn invoice_view_page() -> Html {
    let navigator = use_navigator().unwrap();
    let invoice = DocumentBridge::new().load_invoice();

    match invoice {
        Some(invoice) => html! { <InvoiceDocument {invoice} /> },
        None => html! {
            <div class="min-h-screen flex justify-center items-center bg-gray-200 px-4">
                <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="text-lg">{"Loading invoice data..."}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::Invoices)}
                        class="mt-4 px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                    >
                        {"Back to Invoice Table"}
                    </button>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct InvoiceDocumentProps {
    invoice: Invoice,
}

#[function_component(InvoiceDocument)]
fn invoice_document(props: &InvoiceDocumentProps) -> Html {
    let navigator = use_navigator().unwrap();
    let sending = use_state(|| false);
    let message = use_state(|| None::<String>);

    let invoice = &props.invoice;
    let currency = invoice.invoice_currency.as_str();
    let grand_total: Decimal = invoice.items.iter().map(|item| item.amount).sum();

    let on_print = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    let on_send = {
        let invoice = invoice.clone();
        let sending = sending.clone();
        let message = message.clone();
        Callback::from(move |_| {
            if *sending {
                return;
            }
            sending.set(true);
            let invoice = invoice.clone();
            let sending = sending.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match pdf::render_to_pdf(&invoice) {
                    Ok(bytes) => services::mail::send_invoice_pdf(&invoice.invoice_no, &bytes).await,
                    Err(e) => {
                        gloo::console::error!("PDF generation failed:", e.to_string());
                        Err(services::ApiError {
                            message: e.to_string(),
                            code: None,
                        })
                    }
                };
                match result {
                    Ok(()) => message.set(Some("PDF sent successfully!".to_string())),
                    Err(e) => {
                        gloo::console::error!("PDF generation/upload failed:", e.to_string());
                        message.set(Some("Something went wrong.".to_string()));
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex justify-center items-center bg-gray-200">
            <div class="absolute top-4 right-4 print-hidden">
                <button
                    onclick={nav_cb(&navigator, Route::Invoices)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Back"}
                </button>
            </div>

            <div class="print-document w-[850px] m-12 border-2 border-gray-300 bg-white p-8 shadow-lg">
                // Header
                <div class="grid grid-cols-2 items-start mb-8">
                    <div>
                        <h3 class="font-semibold mb-1">{issuer::NAME}</h3>
                        <p class="text-sm">{issuer::ADDRESS}</p>
                        <p class="text-sm">{issuer::CITY}</p>
                        <p class="text-sm">{issuer::EMAIL}</p>
                        <p class="text-sm">{issuer::WEBSITE}</p>
                    </div>
                    <div class="text-right">
                        <h2 class="text-5xl mt-8 tracking-wide">{"INVOICE"}</h2>
                        <p class="-mt-1">
                            {"Invoice# "}
                            <span class="font-semibold">{&invoice.invoice_no}</span>
                        </p>
                        <p class="text-[15px] mt-2">{"Balance Due"}</p>
                        <p class="-mt-1">{money::format(grand_total, currency)}</p>
                    </div>
                </div>

                // Bill To / Info
                <div class="grid grid-cols-2 gap-x-4 mb-8">
                    <div class="pt-6">
                        <p class="font-semibold text-sm mb-1">{"Bill To"}</p>
                        <p class="font-semibold text-sm">{&invoice.invoice_company_name}</p>
                        <p class="text-sm">{&invoice.invoice_company_address}</p>
                        if !invoice.invoice_country.is_empty() {
                            <p class="text-sm">{&invoice.invoice_country}</p>
                        }
                    </div>
                    <div class="flex flex-col justify-start text-right space-y-6 pt-6 text-sm">
                        <p>
                            {"Invoice Date: "}
                            <span class="font-medium">{&invoice.invoice_date}</span>
                        </p>
                        <p>
                            {"Terms: "}
                            <span class="font-medium">{&invoice.invoice_terms}</span>
                        </p>
                        <p>
                            {"Due Date: "}
                            <span class="font-medium">{&invoice.due_date}</span>
                        </p>
                    </div>
                </div>

                // Subject
                <p class="text-sm pt-2">{"Subject:"}</p>
                <div class="mb-8">
                    <p class="text-sm">{"Invoice for the company month"}</p>
                    <p class="text-sm">
                        {"Consultant Name: "}{&invoice.invoice_consultant_name}
                    </p>
                </div>

                // Items
                <table class="w-full mt-10 border-t border-b border-collapse table-fixed text-sm border-gray-300">
                    <thead class="bg-black text-white">
                        <tr>
                            <th class="text-left w-6 p-2">{"#"}</th>
                            <th class="text-left w-1/2 p-2">{"Item & Description"}</th>
                            <th class="text-right w-24 p-2">{"Qty"}</th>
                            <th class="text-right w-20 px-1 py-2">{"Rate"}</th>
                            <th class="text-right w-20 px-1 py-2">{"Amount"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for invoice.items.iter().enumerate().map(|(index, item)| {
                            let label = match item.description.as_deref() {
                                Some(desc) => format!("{} - {}", item.item_name, desc),
                                None => item.item_name.clone(),
                            };
                            html! {
                                <tr class="border-b h-12 border-gray-300">
                                    <td class="p-2">{index + 1}</td>
                                    <td class="p-2">{label}</td>
                                    <td class="px-1 text-right">{item.qty.to_string()}</td>
                                    <td class="px-1 text-right">{money::format(item.rate, currency)}</td>
                                    <td class="px-1 text-right">{money::format(item.amount, currency)}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>

                // Totals
                <div class="mt-6 flex flex-col items-end space-y-1">
                    <div class="grid grid-cols-2 gap-x-4 w-64 text-gray-500 font-medium">
                        <span>{"Sub Total"}</span>
                        <span class="text-right">{money::format(grand_total, currency)}</span>
                    </div>
                    <div class="grid grid-cols-2 gap-x-4 w-64 font-semibold">
                        <span>{"Total"}</span>
                        <span class="text-right">{money::format(grand_total, currency)}</span>
                    </div>
                    <div class="p-2 grid grid-cols-2 gap-x-4 w-64 bg-gray-100 font-semibold text-sm">
                        <span>{"Balance Due"}</span>
                        <span class="text-right">{money::format(grand_total, currency)}</span>
                    </div>
                </div>

                // Notes
                <div class="mt-6 text-sm">
                    <p class="font-semibold">{"Notes"}</p>
                    <p>{&invoice.thanks_note}</p>
                </div>

                <div class="mt-8 text-center print-hidden">
                    <button
                        onclick={on_print}
                        class="px-6 py-2 rounded bg-green-600 text-white hover:bg-green-700"
                    >
                        {"Print this Invoice"}
                    </button>
                </div>
                <div class="mt-4 text-center print-hidden">
                    <button
                        onclick={on_send}
                        disabled={*sending}
                        class="px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-400 disabled:cursor-not-allowed"
                    >
                        {if *sending { "Sending..." } else { "Send to Email" }}
                    </button>
                </div>
            </div>

            if let Some(text) = (*message).clone() {
                <MessageModal
                    message={text}
                    on_close={Callback::from({
                        let message = message.clone();
                        move |_| message.set(None)
                    })}
                />
            }
        </div>
    }
}
