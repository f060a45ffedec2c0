// Invoice create flow: draft form, line-item ledger, preview-number poll

use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ConfirmDialog, FormField, FormSelect, MessageModal};
use crate::pages::clients::nav_cb;
use crate::services;
use remit_shared::{
    CatalogItem, Client, Currency, InvoiceStatus, Term,
    draft::{self, DraftErrors, DraftForm},
    ledger::{ItemErrors, ItemLedger},
    money, terms,
};

const PREVIEW_POLL_MS: u32 = 2_000;

pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn fresh_form() -> DraftForm {
    DraftForm {
        invoice_date: today(),
        due_date: String::new(),
        company_name: String::new(),
        term: String::new(),
        status: InvoiceStatus::New.as_str().to_string(),
        currency: Currency::Usd.code().to_string(),
        thanks_note: draft::DEFAULT_THANKS_NOTE.to_string(),
    }
}

pub(crate) fn term_options() -> Vec<(AttrValue, AttrValue)> {
    Term::all()
        .into_iter()
        .map(|t| (AttrValue::from(t.as_str()), AttrValue::from(t.as_str())))
        .collect()
}

pub(crate) fn status_options() -> Vec<(AttrValue, AttrValue)> {
    InvoiceStatus::all()
        .into_iter()
        .map(|s| (AttrValue::from(s.as_str()), AttrValue::from(s.as_str())))
        .collect()
}

pub(crate) fn currency_options() -> Vec<(AttrValue, AttrValue)> {
    Currency::all()
        .into_iter()
        .map(|c| {
            let label = if c.symbol().is_empty() {
                format!("{} ({})", c.display_name(), c.code())
            } else {
                format!("{} ({})", c.display_name(), c.symbol())
            };
            (AttrValue::from(c.code()), AttrValue::from(label))
        })
        .collect()
}

#[function_component(InvoiceAddPage)]
pub fn invoice_add_page() -> Html {
    let navigator = use_navigator().unwrap();

    let invoice_no = use_state(String::new);
    let form = use_state(fresh_form);
    let selected_company = use_state(|| None::<Client>);
    let clients = use_state(Vec::<Client>::new);
    let products = use_state(Vec::<CatalogItem>::new);

    let ledger = use_state(ItemLedger::new);
    let item_name = use_state(String::new);
    let description = use_state(String::new);
    let qty = use_state(String::new);
    let rate = use_state(String::new);
    let item_errors = use_state(ItemErrors::default);
    let draft_errors = use_state(DraftErrors::default);

    let confirm_delete_index = use_state(|| None::<usize>);
    let notice = use_state(|| None::<String>);
    let message = use_state(|| None::<String>);
    let api_error = use_state(|| None::<String>);
    let success_invoice_no = use_state(|| None::<String>);

    // Due date always follows invoice date + terms; manual edits never stick.
    {
        let form = form.clone();
        use_effect_with(
            ((*form).invoice_date.clone(), (*form).term.clone()),
            move |(date, term)| {
                let derived = terms::due_date(date, term);
                if form.due_date != derived {
                    let mut next = (*form).clone();
                    next.due_date = derived;
                    form.set(next);
                }
                || ()
            },
        );
    }

    // Bill-to companies and catalog items
    {
        let clients = clients.clone();
        let products = products.clone();
        let api_error = api_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let companies = services::companies::list().await;
                let catalog = services::items::list().await;
                match (companies, catalog) {
                    (Ok(companies), Ok(catalog)) => {
                        let valid: Vec<Client> = companies
                            .into_iter()
                            .filter(|c| !c.company_address.trim().is_empty())
                            .collect();
                        if valid.is_empty() {
                            api_error
                                .set(Some("No companies with valid addresses found.".to_string()));
                        }
                        clients.set(valid);
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
                            "Failed to load clients and items. Please try again.".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    // Poll the preview invoice number while mounted. The number is a
    // non-reserved preview; the create response is authoritative.
    {
        let invoice_no = invoice_no.clone();
        use_effect_with((), move |_| {
            let fetch = {
                let invoice_no = invoice_no.clone();
                move || {
                    let invoice_no = invoice_no.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match services::invoices::preview_invoice_no().await {
                            Ok(preview) => invoice_no.set(preview),
                            Err(e) => {
                                gloo::console::warn!(
                                    "Failed to fetch preview invoice number:",
                                    e.to_string()
                                );
                            }
                        }
                    });
                }
            };
            fetch();
            let interval = Interval::new(PREVIEW_POLL_MS, fetch);
            move || drop(interval)
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
        let item_errors = item_errors.clone();
        move || {
            item_name.set(String::new());
            description.set(String::new());
            qty.set(String::new());
            rate.set(String::new());
            item_errors.set(ItemErrors::default());
        }
    };

    let on_add_item = {
        let ledger = ledger.clone();
        let item_name = item_name.clone();
        let description = description.clone();
        let qty = qty.clone();
        let rate = rate.clone();
        let item_errors = item_errors.clone();
        let notice = notice.clone();
        let message = message.clone();
        let reset_item_fields = reset_item_fields.clone();
        Callback::from(move |_| {
            let mut next = (*ledger).clone();
            match next.add(&item_name, &description, &qty, &rate) {
                Ok(_) => {
                    ledger.set(next);
                    notice.set(Some("Item added successfully!".to_string()));
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

    let reset_form = {
        let form = form.clone();
        let selected_company = selected_company.clone();
        let ledger = ledger.clone();
        let draft_errors = draft_errors.clone();
        let reset_item_fields = reset_item_fields.clone();
        move || {
            form.set(fresh_form());
            selected_company.set(None);
            ledger.set(ItemLedger::new());
            draft_errors.set(DraftErrors::default());
            reset_item_fields();
        }
    };

    let on_submit = {
        let form = form.clone();
        let selected_company = selected_company.clone();
        let ledger = ledger.clone();
        let draft_errors = draft_errors.clone();
        let message = message.clone();
        let success_invoice_no = success_invoice_no.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_| {
            let address = selected_company
                .as_ref()
                .map(|c| c.company_address.as_str())
                .unwrap_or("");
            if let Err(errors) = draft::validate(&form, Some(address), ledger.len()) {
                draft_errors.set(errors);
                message.set(Some(draft::MSG_AGGREGATE_CREATE.to_string()));
                return;
            }
            draft_errors.set(DraftErrors::default());

            let Some(bill_to) = (*selected_company).clone() else {
                message.set(Some(draft::MSG_AGGREGATE_CREATE.to_string()));
                return;
            };
            let invoice = draft::build_invoice(&form, &bill_to, ledger.items().to_vec());

            let message = message.clone();
            let success_invoice_no = success_invoice_no.clone();
            let reset_form = reset_form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::invoices::create(&invoice).await {
                    Ok(saved) => {
                        success_invoice_no.set(Some(saved.invoice_no));
                        reset_form();
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to submit invoice:", e.to_string());
                        message.set(Some("Failed to submit invoice. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_success_close = {
        let navigator = navigator.clone();
        let success_invoice_no = success_invoice_no.clone();
        Callback::from(move |_| {
            success_invoice_no.set(None);
            navigator.push(&Route::Invoices);
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

    let total = ledger.total();
    let currency = form.currency.clone();

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
                <h1 class="text-3xl font-bold text-center text-gray-800">{"Invoice Add Form"}</h1>

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
                        value={(*invoice_no).clone()}
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
                        readonly=true
                        value={form.due_date.clone()}
                        error={draft_errors.due_date.map(AttrValue::Static)}
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
                        value={selected_company
                            .as_ref()
                            .map(|c| c.company_address.clone())
                            .unwrap_or_default()}
                        error={draft_errors.company_address.map(AttrValue::Static)}
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
                    <FormField
                        label="Thanks Note"
                        required=true
                        value={form.thanks_note.clone()}
                        error={draft_errors.thanks_note.map(AttrValue::Static)}
                        on_input={set_form(|f, v| f.thanks_note = v)}
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
                        onclick={on_add_item}
                        class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-700"
                    >
                        {"Add Item"}
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
                            <th class="p-2">{"Delete"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for ledger.items().iter().enumerate().map(|(index, item)| {
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
                                        <button onclick={ask_delete} class="text-red-600 hover:underline">
                                            {"Delete"}
                                        </button>
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
                        {"Submit"}
                    </button>
                    <button
                        onclick={Callback::from({
                            let reset_form = reset_form.clone();
                            move |_| reset_form()
                        })}
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

            if let Some(number) = (*success_invoice_no).clone() {
                <MessageModal
                    message={format!(
                        "Invoice created successfully! Invoice Number: {number}"
                    )}
                    on_close={on_success_close}
                />
            }
        </div>
    }
}
