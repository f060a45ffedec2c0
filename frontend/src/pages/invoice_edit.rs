// Invoice edit flow: only reachable while the invoice still has a pending
// balance and an open workflow status

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ConfirmDialog, FormField, FormSelect, MessageModal, SuccessModal};
use crate::pages::clients::nav_cb;
use crate::pages::invoice_add::{currency_options, status_options, term_options, today};
use crate::services;
use crate::storage::DocumentBridge;
use remit_shared::{
    CatalogItem, Client, Invoice,
    draft::{self, DraftErrors, DraftForm},
    ledger::{ItemErrors, ItemLedger},
    money, terms,
};

#[derive(Properties, PartialEq)]
pub struct InvoiceEditProps {
    pub id: String,
}

#[function_component(InvoiceEditPage)]
pub fn invoice_edit_page(props: &InvoiceEditProps) -> Html {
    let navigator = use_navigator().unwrap();

    // The listing stashes the selected invoice before navigating here. A
    // missing or mismatched id short-circuits before any network call.
    let stored = DocumentBridge::new()
        .load_invoice()
        .filter(|invoice| !props.id.is_empty() && invoice.id == props.id);

    match stored {
        Some(invoice) => html! { <InvoiceEditForm {invoice} /> },
        None => html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4">
                <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="text-red-600 mb-4">{"No valid invoice data provided for editing."}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::Invoices)}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Back to Invoice Table"}
                    </button>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct InvoiceEditFormProps {
    invoice: Invoice,
}

#[function_component(InvoiceEditForm)]
fn invoice_edit_form(props: &InvoiceEditFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let stored = props.invoice.clone();

    let form = use_state(|| DraftForm {
        invoice_date: if stored.invoice_date.is_empty() {
            today()
        } else {
            stored.invoice_date.clone()
        },
        due_date: stored.due_date.clone(),
        company_name: stored.invoice_company_name.clone(),
        term: stored.invoice_terms.clone(),
        status: stored.invoice_status.clone(),
        currency: if stored.invoice_currency.is_empty() {
            "USD".to_string()
        } else {
            stored.invoice_currency.clone()
        },
        thanks_note: if stored.thanks_note.trim().is_empty() {
            draft::DEFAULT_THANKS_NOTE.to_string()
        } else {
            stored.thanks_note.clone()
        },
    });
    let selected_company = use_state(|| None::<Client>);
    let clients = use_state(Vec::<Client>::new);
    let products = use_state(Vec::<CatalogItem>::new);

    let ledger = use_state(|| ItemLedger::from_items(stored.items.clone()));
    let item_name = use_state(String::new);
    let description = use_state(String::new);
    let qty = use_state(String::new);
    let rate = use_state(String::new);
    let editing_index = use_state(|| None::<usize>);
    let item_errors = use_state(ItemErrors::default);
    let draft_errors = use_state(DraftErrors::default);

    let confirm_delete_index = use_state(|| None::<usize>);
    let notice = use_state(|| None::<String>);
    let message = use_state(|| None::<String>);
    let api_error = use_state(|| None::<String>);
    let saved = use_state(|| false);

    // Recompute the due date whenever the invoice date or terms change. The
    // field itself stays editable here, but any change overwrites it.
    {
        let form = form.clone();
        use_effect_with(
            ((*form).invoice_date.clone(), (*form).term.clone()),
            move |(date, term)| {
                let derived = terms::due_date(date, term);
                if !derived.is_empty() && form.due_date != derived {
                    let mut next = (*form).clone();
                    next.due_date = derived;
                    form.set(next);
                }
                || ()
            },
        );
    }

    {
        let clients = clients.clone();
        let products = products.clone();
        let selected_company = selected_company.clone();
        let api_error = api_error.clone();
        let bill_to_name = stored.invoice_company_name.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let companies = services::companies::list().await;
                let catalog = services::items::list().await;
                match (companies, catalog) {
                    (Ok(companies), Ok(catalog)) => {
                        selected_company
                            .set(companies.iter().find(|c| c.company_name == bill_to_name).cloned());
                        clients.set(companies);
                        products.set(catalog);
                    }
                    (companies, catalog) => {
                        if let Err(e) = &companies {
                            gloo::console::error!("Failed to fetch companies:", e.to_string());
                        }
                        if let Err(e) = &catalog {
                            gloo::console::error!("Failed to fetch items:", e.to_string());
                        }
                        api_error.set(Some(
                            "Failed to load companies and items. Please try again.".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    let set_form = |apply: fn(&mut DraftForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_company = {
        let form = form.clone();
        let clients = clients.clone();
        let selected_company = selected_company.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.company_name = value.clone();
            form.set(next);
            selected_company.set(clients.iter().find(|c| c.company_name == value).cloned());
        })
    };

    let on_item_select = {
        let item_name = item_name.clone();
        let description = description.clone();
        let products = products.clone();
        Callback::from(move |value: String| {
            let product = products.iter().find(|p| p.item_name == value).cloned();
            description.set(product.map(|p| p.description).unwrap_or_default());
            item_name.set(value);
        })
    };

    let reset_item_fields = {
        let item_name = item_name.clone();
        let description = description.clone();
        let qty = qty.clone();
        let rate = rate.clone();
        let editing_index = editing_index.clone();
        let item_errors = item_errors.clone();
        move || {
            item_name.set(String::new());
            description.set(String::new());
            qty.set(String::new());
            rate.set(String::new());
            editing_index.set(None);
            item_errors.set(ItemErrors::default());
        }
    };

    let on_add_or_update = {
        let ledger = ledger.clone();
        let item_name = item_name.clone();
        let description = description.clone();
        let qty = qty.clone();
        let rate = rate.clone();
        let editing_index = editing_index.clone();
        let item_errors = item_errors.clone();
        let notice = notice.clone();
        let message = message.clone();
        let reset_item_fields = reset_item_fields.clone();
        Callback::from(move |_| {
            let mut next = (*ledger).clone();
            let result = match *editing_index {
                Some(index) => next
                    .update(index, &item_name, &description, &qty, &rate)
                    .map(|_| "Item updated successfully!"),
                None => next
                    .add(&item_name, &description, &qty, &rate)
                    .map(|_| "Item added successfully!"),
            };
            match result {
                Ok(text) => {
                    ledger.set(next);
                    notice.set(Some(text.to_string()));
                    reset_item_fields();
                }
                Err(errors) => {
                    item_errors.set(errors);
                    message.set(Some(
                        "Please fill in all item fields with valid values.".to_string(),
                    ));
                }
            }
        })
    };

    let on_edit_item = {
        let ledger = ledger.clone();
        let item_name = item_name.clone();
        let description = description.clone();
        let qty = qty.clone();
        let rate = rate.clone();
        let editing_index = editing_index.clone();
        Callback::from(move |index: usize| {
            if let Some(item) = ledger.get(index) {
                item_name.set(item.item_name.clone());
                description.set(item.description.clone().unwrap_or_default());
                qty.set(item.qty.to_string());
                rate.set(item.rate.to_string());
                editing_index.set(Some(index));
            }
        })
    };

    let on_confirm_delete = {
        let ledger = ledger.clone();
        let confirm_delete_index = confirm_delete_index.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            if let Some(index) = *confirm_delete_index {
                let mut next = (*ledger).clone();
                next.remove(index);
                ledger.set(next);
                confirm_delete_index.set(None);
                notice.set(Some("Item deleted successfully!".to_string()));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let selected_company = selected_company.clone();
        let clients = clients.clone();
        let ledger = ledger.clone();
        let draft_errors = draft_errors.clone();
        let message = message.clone();
        let saved = saved.clone();
        let stored = stored.clone();
        Callback::from(move |_| {
            if let Err(errors) = draft::validate(&form, None, ledger.len()) {
                draft_errors.set(errors);
                message.set(Some(draft::MSG_AGGREGATE_EDIT.to_string()));
                return;
            }
            draft_errors.set(DraftErrors::default());

            // Resynchronize the bill-to company if the selection was never
            // made explicit on this page.
            let bill_to = (*selected_company).clone().or_else(|| {
                clients
                    .iter()
                    .find(|c| c.company_name == form.company_name)
                    .cloned()
            });

            let mut updated = stored.clone();
            updated.invoice_date = form.invoice_date.clone();
            updated.invoice_terms = form.term.clone();
            updated.due_date = form.due_date.clone();
            updated.invoice_status = form.status.clone();
            updated.invoice_currency = form.currency.clone();
            updated.thanks_note = form.thanks_note.clone();
            updated.items = ledger.items().to_vec();
            if let Some(company) = bill_to {
                updated.invoice_company_name = company.company_name;
                updated.invoice_company_address = company.company_address;
                updated.invoice_country = company.company_country;
                updated.invoice_pin_code = company.company_pin_code;
                updated.invoice_email = company.company_email;
                updated.invoice_mobile_no = company.company_mobile_no;
                updated.invoice_consultant_name = company.contact_name;
            }
            // Derived amounts never travel back to the server.
            updated.total_amount = None;
            updated.paid_amount = None;
            updated.pending_amount = None;

            let id = stored.id.clone();
            let message = message.clone();
            let saved = saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::invoices::update(&id, &updated).await {
                    Ok(()) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to update invoice:", e.to_string());
                        message.set(Some("Failed to update invoice. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let client_options: Vec<(AttrValue, AttrValue)> = clients
        .iter()
        .map(|c| {
            (
                AttrValue::from(c.company_name.clone()),
                AttrValue::from(c.company_name.clone()),
            )
        })
        .collect();
    let product_options: Vec<(AttrValue, AttrValue)> = products
        .iter()
        .map(|p| {
            (
                AttrValue::from(p.item_name.clone()),
                AttrValue::from(p.item_name.clone()),
            )
        })
        .collect();

    let address_display = selected_company
        .as_ref()
        .map(|c| c.company_address.clone())
        .unwrap_or_else(|| stored.invoice_company_address.clone());
    let total = ledger.total();
    let currency = form.currency.clone();
    let update_label = if editing_index.is_some() {
        "Update Item"
    } else {
        "Add Item"
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
            <div class="absolute top-4 left-4">
                <button
                    onclick={nav_cb(&navigator, Route::Invoices)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Invoice Table"}
                </button>
            </div>

            <div class="p-6 max-w-4xl w-full bg-white rounded-lg shadow-lg space-y-6">
                <h1 class="text-3xl font-bold text-center text-gray-800">{"Invoice Edit Form"}</h1>

                if let Some(error) = (*api_error).clone() {
                    <p class="text-red-600 text-center">{error}</p>
                }
                if let Some(text) = (*notice).clone() {
                    <p class="text-center text-green-600">{text}</p>
                }

                <div class="grid grid-cols-2 gap-4">
                    <FormField
                        label="Invoice No"
                        required=true
                        readonly=true
                        value={stored.invoice_no.clone()}
                    />
                    <FormField
                        label="Invoice Date"
                        required=true
                        input_type="date"
                        value={form.invoice_date.clone()}
                        error={draft_errors.invoice_date.map(AttrValue::Static)}
                        on_input={set_form(|f, v| f.invoice_date = v)}
                    />
                    <FormField
                        label="Due Date"
                        required=true
                        input_type="date"
                        value={form.due_date.clone()}
                        error={draft_errors.due_date.map(AttrValue::Static)}
                        on_input={set_form(|f, v| f.due_date = v)}
                    />
                    <FormSelect
                        label="Company Name"
                        required=true
                        value={form.company_name.clone()}
                        options={client_options}
                        placeholder="Select Company"
                        error={draft_errors.company_name.map(AttrValue::Static)}
                        on_change={on_company}
                    />
                    <FormField
                        label="Company Address"
                        required=true
                        readonly=true
                        value={address_display}
                    />
                    <FormSelect
                        label="Terms"
                        required=true
                        value={form.term.clone()}
                        options={term_options()}
                        placeholder="Select Terms"
                        error={draft_errors.term.map(AttrValue::Static)}
                        on_change={set_form(|f, v| f.term = v)}
                    />
                    <FormSelect
                        label="Status"
                        required=true
                        value={form.status.clone()}
                        options={status_options()}
                        placeholder="Select Status"
                        error={draft_errors.status.map(AttrValue::Static)}
                        on_change={set_form(|f, v| f.status = v)}
                    />
                    <FormSelect
                        label="Currency"
                        required=true
                        value={form.currency.clone()}
                        options={currency_options()}
                        placeholder="Select Currency"
                        error={draft_errors.currency.map(AttrValue::Static)}
                        on_change={set_form(|f, v| f.currency = v)}
                    />
                </div>

                <div class="grid grid-cols-5 gap-2 items-end">
                    <div class="col-span-2">
                        <FormSelect
                            label="Item Name"
                            required=true
                            value={(*item_name).clone()}
                            options={product_options}
                            placeholder="Select Item"
                            error={item_errors.item_name.map(AttrValue::Static)}
                            on_change={on_item_select}
                        />
                    </div>
                    <FormField
                        label="Qty"
                        required=true
                        input_type="number"
                        value={(*qty).clone()}
                        error={item_errors.qty.map(AttrValue::Static)}
                        on_input={Callback::from({
                            let qty = qty.clone();
                            move |v| qty.set(v)
                        })}
                    />
                    <FormField
                        label="Rate"
                        required=true
                        input_type="number"
                        value={(*rate).clone()}
                        error={item_errors.rate.map(AttrValue::Static)}
                        on_input={Callback::from({
                            let rate = rate.clone();
                            move |v| rate.set(v)
                        })}
                    />
                    <button
                        onclick={on_add_or_update}
                        class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-700"
                    >
                        {update_label}
                    </button>
                </div>

                <table class="w-full mt-4 border border-gray-200 rounded overflow-hidden">
                    <thead class="bg-gray-200 text-gray-700">
                        <tr>
                            <th class="p-2">{"Item Name"}</th>
                            <th class="p-2">{"Description"}</th>
                            <th class="p-2">{"Qty"}</th>
                            <th class="p-2">{"Rate"}</th>
                            <th class="p-2">{"Amount"}</th>
                            <th class="p-2">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for ledger.items().iter().enumerate().map(|(index, item)| {
                            let edit = {
                                let on_edit_item = on_edit_item.clone();
                                Callback::from(move |_| on_edit_item.emit(index))
                            };
                            let ask_delete = {
                                let confirm_delete_index = confirm_delete_index.clone();
                                Callback::from(move |_| confirm_delete_index.set(Some(index)))
                            };
                            html! {
                                <tr class="text-center border-t">
                                    <td class="p-2">{&item.item_name}</td>
                                    <td class="p-2">{item.description.as_deref().unwrap_or("-")}</td>
                                    <td class="p-2">{item.qty.to_string()}</td>
                                    <td class="p-2">{money::format(item.rate, &currency)}</td>
                                    <td class="p-2">{money::format(item.amount, &currency)}</td>
                                    <td class="p-2">
                                        <div class="flex justify-center gap-2">
                                            <button onclick={edit} class="text-yellow-600 hover:underline">
                                                {"Edit"}
                                            </button>
                                            <button onclick={ask_delete} class="text-red-600 hover:underline">
                                                {"Delete"}
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>

                <div class="text-right text-lg font-semibold mt-2">
                    {format!("Total Amount: {}", money::format(total, &currency))}
                </div>

                <div class="flex justify-center gap-6 pt-4">
                    <button
                        onclick={on_submit}
                        class="bg-green-600 text-white px-6 py-2 rounded hover:bg-green-700"
                    >
                        {"Update Invoice"}
                    </button>
                    <button
                        onclick={nav_cb(&navigator, Route::Invoices)}
                        class="bg-gray-500 text-white px-6 py-2 rounded hover:bg-gray-600"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>

            if confirm_delete_index.is_some() {
                <ConfirmDialog
                    message="Are you sure you want to delete this item?"
                    on_confirm={on_confirm_delete}
                    on_cancel={Callback::from({
                        let confirm_delete_index = confirm_delete_index.clone();
                        move |_| confirm_delete_index.set(None)
                    })}
                />
            }

            if let Some(text) = (*message).clone() {
                <MessageModal
                    message={text}
                    on_close={Callback::from({
                        let message = message.clone();
                        move |_| message.set(None)
                    })}
                />
            }

            if *saved {
                <SuccessModal
                    message="Invoice updated successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Invoices)
                    })}
                />
            }
        </div>
    }
}
