// Invoice listing with derived amounts and payment status

use futures::future::join_all;
use gloo_timers::callback::Timeout;
use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{Pagination, page_count, page_slice};
use crate::pages::clients::nav_cb;
use crate::services;
use crate::storage::DocumentBridge;
use remit_shared::{Invoice, PaymentStatus, money, payment_status};

// Fetch the invoice collection, then enrich every active row with its amount
// summary. The per-row fetches run as independent futures; one failing row
// degrades to zeros instead of failing the page.
async fn fetch_enriched() -> Vec<Invoice> {
    let all = match services::invoices::list().await {
        Ok(list) => list,
        Err(e) => {
            gloo::console::error!("Failed to fetch invoices:", e.to_string());
            return Vec::new();
        }
    };

    let active: Vec<Invoice> = all.into_iter().filter(|inv| !inv.is_deleted()).collect();
    join_all(active.into_iter().map(|mut invoice| async move {
        match services::invoices::amounts(&invoice.id).await {
            Ok(summary) => {
                invoice.total_amount = Some(summary.total_amount);
                invoice.paid_amount = Some(summary.paid_amount);
                invoice.pending_amount = Some(summary.pending_amount);
            }
            Err(e) => {
                gloo::console::error!(
                    "Failed to fetch amounts for invoice",
                    invoice.id.clone(),
                    e.to_string()
                );
                invoice.total_amount = Some(Decimal::ZERO);
                invoice.paid_amount = Some(Decimal::ZERO);
                invoice.pending_amount = Some(Decimal::ZERO);
            }
        }
        invoice
    }))
    .await
}

fn status_badge(status: &str) -> Html {
    let class = match status {
        "Completed" | "Paid" => "px-2 py-1 rounded-full text-sm font-medium bg-green-200 text-green-800",
        "Overdue" => "px-2 py-1 rounded-full text-sm font-medium bg-red-200 text-red-800",
        "Unpaid" => "px-2 py-1 rounded-full text-sm font-medium bg-yellow-200 text-yellow-800",
        _ => "px-2 py-1 rounded-full text-sm font-medium bg-gray-200 text-blue-800",
    };
    let label = if status.is_empty() { "N/A" } else { status };
    html! { <span {class}>{label}</span> }
}

fn amount_cell(value: Option<Decimal>, currency: &str) -> String {
    value
        .map(|v| money::format(v, currency))
        .unwrap_or_else(|| "N/A".to_string())
}

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
    let navigator = use_navigator().unwrap();
    let invoices = use_state(|| None::<Vec<Invoice>>);
    let page = use_state(|| 1usize);
    let success = use_state(|| None::<String>);
    let open_dropdown = use_state(|| None::<String>);

    let refresh = {
        let invoices = invoices.clone();
        move || {
            let invoices = invoices.clone();
            wasm_bindgen_futures::spawn_local(async move {
                invoices.set(Some(fetch_enriched().await));
            });
        }
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh();
            || ()
        });
    }

    let handle_delete = {
        let invoices = invoices.clone();
        let success = success.clone();
        let page = page.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: String| {
            let invoices = invoices.clone();
            let success = success.clone();
            let page = page.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::invoices::soft_delete(&id).await {
                    Ok(()) => {
                        success.set(Some("Invoice marked as deleted successfully.".to_string()));
                        // Keep the row visible, dimmed, until the delayed refresh.
                        if let Some(list) = (*invoices).clone() {
                            let marked = list
                                .into_iter()
                                .map(|mut invoice| {
                                    if invoice.id == id {
                                        invoice.is_delete = Some("1".to_string());
                                    }
                                    invoice
                                })
                                .collect();
                            invoices.set(Some(marked));
                        }
                        let page = page.clone();
                        Timeout::new(2_000, move || {
                            refresh();
                            page.set(1);
                        })
                        .forget();
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete invoice:", e.to_string());
                        success.set(None);
                    }
                }
            });
        })
    };

    let stash_and_go = {
        let navigator = navigator.clone();
        move |invoice: &Invoice, route: Route| {
            let navigator = navigator.clone();
            let invoice = invoice.clone();
            Callback::from(move |_| {
                DocumentBridge::new().stash_invoice(&invoice);
                navigator.push(&route);
            })
        }
    };

    let rows = invoices
        .as_ref()
        .map(|list| page_slice(list, *page))
        .unwrap_or_default();
    let total_pages = invoices
        .as_ref()
        .map(|list| page_count(list.len()))
        .unwrap_or(1);

    if invoices.as_ref().is_some_and(|list| list.is_empty()) {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4">
                <div class="p-6 max-w-4xl w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="mb-4 text-lg">{"No invoice data found."}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::InvoiceAdd)}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Go Back to Form"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4 relative">
            <div class="absolute top-4 right-4">
                <button
                    onclick={nav_cb(&navigator, Route::Home)}
                    class="bg-green-600 text-white py-2 px-4 rounded hover:bg-green-700"
                >
                    {"Home"}
                </button>
            </div>

            <div class="p-6 max-w-7xl w-full bg-white rounded-lg shadow-lg space-y-6">
                <h1 class="text-3xl font-bold text-center">{"All Invoices"}</h1>

                if let Some(message) = (*success).clone() {
                    <div class="bg-green-100 text-green-800 p-4 rounded text-center">
                        {message}
                    </div>
                }

                <div class="text-right">
                    <button
                        onclick={nav_cb(&navigator, Route::InvoiceAdd)}
                        class="mb-4 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Add New Invoice"}
                    </button>
                </div>

                if invoices.is_none() {
                    <p class="text-center text-gray-500">{"Loading invoices..."}</p>
                } else {
                    <>
                    <table class="w-full border border-gray-300 text-center">
                        <thead class="bg-gray-200">
                            <tr>
                                <th class="p-3 border border-gray-300">{"Sl No."}</th>
                                <th class="p-3 border border-gray-300">{"Invoice No"}</th>
                                <th class="p-3 border border-gray-300">{"Invoice Date"}</th>
                                <th class="p-3 border border-gray-300">{"Company Name"}</th>
                                <th class="p-3 border border-gray-300">{"Due Date"}</th>
                                <th class="p-3 border border-gray-300">{"Status"}</th>
                                <th class="p-3 border border-gray-300">{"Invoice Amount"}</th>
                                <th class="p-3 border border-gray-300">{"Pending Amount"}</th>
                                <th class="p-3 border border-gray-300">{"Payment Amount"}</th>
                                <th class="p-3 border border-gray-300">{"Payment Status"}</th>
                                <th class="p-3 border border-gray-300">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().enumerate().map(|(index, invoice)| {
                                let row_class = if invoice.is_deleted() {
                                    "border-t border-gray-300 bg-red-100 opacity-75"
                                } else {
                                    "border-t border-gray-300"
                                };
                                let derived = payment_status(invoice.pending_amount);
                                let derived_class = if derived == PaymentStatus::Completed {
                                    "px-2 py-1 rounded-full text-sm font-medium bg-green-200 text-green-800"
                                } else {
                                    "px-2 py-1 rounded-full text-sm font-medium bg-red-200 text-red-800"
                                };

                                let toggle = {
                                    let open_dropdown = open_dropdown.clone();
                                    let id = invoice.id.clone();
                                    Callback::from(move |_| {
                                        let next = if open_dropdown.as_deref() == Some(id.as_str()) {
                                            None
                                        } else {
                                            Some(id.clone())
                                        };
                                        open_dropdown.set(next);
                                    })
                                };

                                let view = stash_and_go(invoice, Route::InvoiceView);
                                let edit = stash_and_go(
                                    invoice,
                                    Route::InvoiceEdit { id: invoice.id.clone() },
                                );
                                let delete = {
                                    let handle_delete = handle_delete.clone();
                                    let open_dropdown = open_dropdown.clone();
                                    let id = invoice.id.clone();
                                    Callback::from(move |_| {
                                        open_dropdown.set(None);
                                        handle_delete.emit(id.clone());
                                    })
                                };
                                let payment = {
                                    let navigator = navigator.clone();
                                    let invoice_no = invoice.invoice_no.clone();
                                    Callback::from(move |_| {
                                        navigator.push(&Route::PaymentsFor {
                                            invoice_no: invoice_no.clone(),
                                        });
                                    })
                                };

                                let currency = invoice.invoice_currency.as_str();

                                html! {
                                    <tr class={row_class}>
                                        <td class="p-2 border border-gray-300">
                                            {(*page - 1) * crate::components::PAGE_SIZE + index + 1}
                                        </td>
                                        <td class="p-2 border border-gray-300">
                                            {&invoice.invoice_no}
                                            if invoice.is_deleted() {
                                                <span class="ml-2 text-xs text-red-600 font-medium">
                                                    {"(Deleted)"}
                                                </span>
                                            }
                                        </td>
                                        <td class="p-2 border border-gray-300">{&invoice.invoice_date}</td>
                                        <td class="p-2 border border-gray-300">{&invoice.invoice_company_name}</td>
                                        <td class="p-2 border border-gray-300">{&invoice.due_date}</td>
                                        <td class="p-2 border border-gray-300">
                                            {status_badge(&invoice.invoice_status)}
                                        </td>
                                        <td class="p-2 border border-gray-300">
                                            {amount_cell(invoice.total_amount, currency)}
                                        </td>
                                        <td class="p-2 border border-gray-300">
                                            {amount_cell(invoice.pending_amount, currency)}
                                        </td>
                                        <td class="p-2 border border-gray-300">
                                            {amount_cell(invoice.paid_amount, currency)}
                                        </td>
                                        <td class="p-2 border border-gray-300">
                                            <span class={derived_class}>{derived.as_str()}</span>
                                        </td>
                                        <td class="p-2 border border-gray-300 relative">
                                            <button
                                                onclick={toggle}
                                                class="bg-blue-600 text-white px-3 py-1 rounded hover:bg-blue-700"
                                            >
                                                {"Actions"}
                                            </button>
                                            if open_dropdown.as_deref() == Some(invoice.id.as_str()) {
                                                <div class="absolute z-20 mt-2 w-48 bg-white border border-gray-300 rounded-lg shadow-lg right-0">
                                                    <button
                                                        onclick={view}
                                                        class="block w-full text-left px-4 py-2 text-indigo-600 hover:bg-indigo-100"
                                                    >
                                                        {"View / Print"}
                                                    </button>
                                                    if invoice.is_editable() {
                                                        <>
                                                        <button
                                                            onclick={edit}
                                                            class="block w-full text-left px-4 py-2 text-yellow-600 hover:bg-yellow-100"
                                                        >
                                                            {"Edit"}
                                                        </button>
                                                        <button
                                                            onclick={delete}
                                                            class="block w-full text-left px-4 py-2 text-red-600 hover:bg-red-100"
                                                        >
                                                            {"Delete"}
                                                        </button>
                                                        </>
                                                    }
                                                    <button
                                                        onclick={payment}
                                                        class="block w-full text-left px-4 py-2 text-blue-600 hover:bg-blue-100"
                                                    >
                                                        {"Payment"}
                                                    </button>
                                                </div>
                                            }
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
