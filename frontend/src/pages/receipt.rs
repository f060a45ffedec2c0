// Payment receipt - a presentational transform of one recorded payment

use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::pages::clients::nav_cb;
use crate::storage::DocumentBridge;
use remit_shared::{Payment, PaymentMethod, issuer};

fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| "N/A".to_string())
}

#[function_component(ReceiptPage)]
pub fn receipt_page() -> Html {
    let navigator = use_navigator().unwrap();
    let payment = DocumentBridge::new().load_payment();

    match payment {
        Some(payment) => html! { <ReceiptDocument {payment} /> },
        None => html! {
            <div class="min-h-screen flex justify-center items-center bg-gray-200 px-4">
                <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="text-red-500 text-lg font-medium">{"No payment data found."}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::Payments)}
                        class="mt-4 px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                    >
                        {"Back to Payments"}
                    </button>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ReceiptDocumentProps {
    payment: Payment,
}

#[function_component(ReceiptDocument)]
fn receipt_document(props: &ReceiptDocumentProps) -> Html {
    let navigator = use_navigator().unwrap();
    let payment = &props.payment;

    let formatted_date = display_date(&payment.payment_date);
    let amount = payment
        .payment_amount
        .map(|a| format!("{a:.2}"))
        .unwrap_or_else(|| "N/A".to_string());
    let method = PaymentMethod::all()
        .into_iter()
        .find(|m| m.as_str() == payment.payment_method)
        .map(|m| m.label().to_string())
        .unwrap_or_else(|| payment.payment_method.clone());

    let on_print = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    html! {
        <div class="min-h-screen flex justify-center items-center py-10 px-4 bg-gray-200">
            <div class="absolute top-4 right-4 print-hidden">
                <button
                    onclick={nav_cb(&navigator, Route::Invoices)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-700"
                >
                    {"Invoice Table"}
                </button>
            </div>

            <div class="print-document w-full max-w-4xl bg-white p-8 rounded-lg shadow-lg">
                // Header
                <div class="border-b pb-6 mb-6">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4 items-start w-full">
                        <h2 class="text-2xl font-bold text-gray-800">{"Remit"}</h2>
                        <div class="text-sm text-right">
                            <p class="font-semibold text-base">{issuer::NAME}</p>
                            <p>{issuer::CITY}</p>
                            <p>{issuer::EMAIL}</p>
                            <p>{issuer::WEBSITE}</p>
                        </div>
                    </div>
                </div>

                // Payment info and amount box
                <div class="grid grid-cols-4 gap-6 mt-16 mb-6">
                    <div class="col-span-3 space-y-4 text-sm">
                        <h2 class="text-center text-lg font-semibold underline mb-3">
                            {"PAYMENT RECEIPT"}
                        </h2>
                        <p class="flex items-center gap-2">
                            <span class="whitespace-nowrap">{"Payment Date:"}</span>
                            <span class="flex-1 text-center border-b border-black pb-1">
                                {formatted_date.clone()}
                            </span>
                        </p>
                        <p class="flex items-center gap-2">
                            <span class="whitespace-nowrap">{"Reference Number:"}</span>
                            <span class="flex-1 text-center border-b border-black pb-1">
                                {&payment.reference_no}
                            </span>
                        </p>
                        <p class="flex items-center gap-2">
                            <span class="whitespace-nowrap">{"Payment Mode:"}</span>
                            <span class="flex-1 text-center border-b border-black pb-1">
                                {method}
                            </span>
                        </p>
                    </div>
                    <div class="col-span-1 flex items-center justify-center">
                        <div class="h-52 w-full rounded-lg flex flex-col items-center justify-center text-center px-4 shadow-md bg-green-100 text-green-900">
                            <p class="text-lg font-bold">{"Amount Received:"}</p>
                            <p class="text-2xl font-bold text-black mt-1">{amount.clone()}</p>
                        </div>
                    </div>
                </div>

                // Payment For table: the one payment against its invoice
                <div class="mb-6 mt-16">
                    <h3 class="font-semibold mb-2 text-sm">{"Payment For"}</h3>
                    <div class="mt-5 overflow-x-auto">
                        <table class="w-full text-sm border-collapse">
                            <thead>
                                <tr class="text-left border-b h-14 border-gray-500 bg-gray-400 text-black">
                                    <th class="p-2 w-1/5">{"#"}</th>
                                    <th class="p-2 w-1/5">{"Invoice Number"}</th>
                                    <th class="p-2 w-1/5">{"Payment Date"}</th>
                                    <th class="p-2 w-1/5">{"Invoice Amount"}</th>
                                    <th class="p-2 w-1/5">{"Payment Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                <tr class="border-b h-14 border-gray-300">
                                    <td class="p-2">{"1"}</td>
                                    <td class="p-2">{&payment.invoice_no}</td>
                                    <td class="p-2">{formatted_date}</td>
                                    <td class="p-2">{amount.clone()}</td>
                                    <td class="p-2">{amount}</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="text-left mb-6">
                    <p class="text-sm italic">{"Thanks for your business."}</p>
                </div>

                <div class="mt-8 print-hidden">
                    <button
                        onclick={on_print}
                        class="px-6 py-2 bg-green-600 text-white rounded-md hover:bg-green-700"
                    >
                        {"Print Receipt"}
                    </button>
                </div>
            </div>
        </div>
    }
}
