// Client master - companies that get invoiced

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    ConfirmDialog, FormField, Pagination, SuccessModal, page_count, page_slice,
};
use crate::services;
use remit_shared::Client;

fn empty_client() -> Client {
    Client {
        id: String::new(),
        company_name: String::new(),
        contact_name: String::new(),
        company_address: String::new(),
        company_country: String::new(),
        company_pin_code: String::new(),
        company_email: String::new(),
        company_mobile_no: String::new(),
        logo_url: String::new(),
    }
}

pub(crate) fn nav_cb(navigator: &Navigator, route: Route) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    Callback::from(move |_| navigator.push(&route))
}

// ===== Client List =====

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let navigator = use_navigator().unwrap();
    let clients = use_state(|| None::<Vec<Client>>);
    let page = use_state(|| 1usize);
    let confirm_delete = use_state(|| None::<Client>);
    let success = use_state(|| None::<String>);

    let refresh = {
        let clients = clients.clone();
        move || {
            let clients = clients.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::companies::list().await {
                    Ok(list) => clients.set(Some(list)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch clients:", e.to_string());
                        clients.set(Some(Vec::new()));
                    }
                }
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

    let on_confirm_delete = {
        let confirm_delete = confirm_delete.clone();
        let success = success.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let Some(client) = (*confirm_delete).clone() else {
                return;
            };
            confirm_delete.set(None);
            let success = success.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::companies::delete(&client.id).await {
                    Ok(()) => {
                        success.set(Some("Client deleted successfully.".to_string()));
                        refresh();
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete client:", e.to_string());
                    }
                }
            });
        })
    };

    let rows = clients
        .as_ref()
        .map(|list| page_slice(list, *page))
        .unwrap_or_default();
    let total_pages = clients
        .as_ref()
        .map(|list| page_count(list.len()))
        .unwrap_or(1);

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

            <div class="p-6 max-w-5xl w-full bg-white rounded-lg shadow-lg space-y-6">
                <h1 class="text-3xl font-bold text-center text-gray-800">{"Client List"}</h1>

                <div class="text-right">
                    <button
                        onclick={nav_cb(&navigator, Route::ClientAdd)}
                        class="mb-4 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Add New Client"}
                    </button>
                </div>

                if clients.is_none() {
                    <p class="text-center text-gray-500">{"Loading clients..."}</p>
                } else if rows.is_empty() {
                    <p class="text-center text-gray-500">{"No clients found."}</p>
                } else {
                    <>
                    <table class="w-full border border-gray-300 text-center">
                        <thead class="bg-gray-200">
                            <tr>
                                <th class="p-3 border border-gray-300">{"Company Name"}</th>
                                <th class="p-3 border border-gray-300">{"Contact"}</th>
                                <th class="p-3 border border-gray-300">{"Country"}</th>
                                <th class="p-3 border border-gray-300">{"Email"}</th>
                                <th class="p-3 border border-gray-300">{"Mobile"}</th>
                                <th class="p-3 border border-gray-300">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|client| {
                                let edit = {
                                    let navigator = navigator.clone();
                                    let id = client.id.clone();
                                    Callback::from(move |_| {
                                        navigator.push(&Route::ClientEdit { id: id.clone() })
                                    })
                                };
                                let ask_delete = {
                                    let confirm_delete = confirm_delete.clone();
                                    let client = client.clone();
                                    Callback::from(move |_| confirm_delete.set(Some(client.clone())))
                                };
                                html! {
                                    <tr class="border-t border-gray-300 hover:bg-gray-50">
                                        <td class="p-2 border border-gray-300">{&client.company_name}</td>
                                        <td class="p-2 border border-gray-300">{&client.contact_name}</td>
                                        <td class="p-2 border border-gray-300">{&client.company_country}</td>
                                        <td class="p-2 border border-gray-300">{&client.company_email}</td>
                                        <td class="p-2 border border-gray-300">{&client.company_mobile_no}</td>
                                        <td class="p-2 border border-gray-300">
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

            if confirm_delete.is_some() {
                <ConfirmDialog
                    message="Are you sure you want to delete this client?"
                    on_confirm={on_confirm_delete}
                    on_cancel={Callback::from({
                        let confirm_delete = confirm_delete.clone();
                        move |_| confirm_delete.set(None)
                    })}
                />
            }

            if let Some(message) = (*success).clone() {
                <SuccessModal
                    message={message}
                    on_close={Callback::from({
                        let success = success.clone();
                        move |_| success.set(None)
                    })}
                />
            }
        </div>
    }
}

// ===== Add / Edit =====

#[function_component(ClientAddPage)]
pub fn client_add_page() -> Html {
    let navigator = use_navigator().unwrap();
    let saved = use_state(|| false);

    let on_submit = {
        let saved = saved.clone();
        Callback::from(move |client: Client| {
            let saved = saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::companies::create(&client).await {
                    Ok(_) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to create client:", e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <>
            <ClientForm heading="Add Client" initial={empty_client()} {on_submit} />
            if *saved {
                <SuccessModal
                    message="Client added successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Clients)
                    })}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientEditProps {
    pub id: String,
}

#[function_component(ClientEditPage)]
pub fn client_edit_page(props: &ClientEditProps) -> Html {
    let navigator = use_navigator().unwrap();
    let client = use_state(|| None::<Client>);
    let saved = use_state(|| false);
    let load_error = use_state(|| None::<String>);

    {
        let client = client.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::companies::get(&id).await {
                    Ok(found) => client.set(Some(found)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch client:", e.to_string());
                        load_error
                            .set(Some("Failed to load client. Please try again.".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let saved = saved.clone();
        let id = props.id.clone();
        Callback::from(move |mut client: Client| {
            client.id = id.clone();
            let saved = saved.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::companies::update(&id, &client).await {
                    Ok(_) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to update client:", e.to_string());
                    }
                }
            });
        })
    };

    if let Some(message) = (*load_error).clone() {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4">
                <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="text-red-600 mb-4">{message}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::Clients)}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Back to Clients"}
                    </button>
                </div>
            </div>
        };
    }

    let Some(loaded) = (*client).clone() else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300">
                <p class="text-lg text-gray-700">{"Loading client..."}</p>
            </div>
        };
    };

    html! {
        <>
            <ClientForm heading="Edit Client" initial={loaded} {on_submit} />
            if *saved {
                <SuccessModal
                    message="Client updated successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Clients)
                    })}
                />
            }
        </>
    }
}

// ===== Shared form =====

#[derive(Properties, PartialEq)]
struct ClientFormProps {
    heading: AttrValue,
    initial: Client,
    on_submit: Callback<Client>,
}

#[function_component(ClientForm)]
fn client_form(props: &ClientFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let form = use_state(|| props.initial.clone());
    let submitted = use_state(|| false);
    let message = use_state(|| None::<&'static str>);

    // Field-level error, shown once a submit was attempted.
    let err = |value: &str| -> Option<AttrValue> {
        (*submitted && value.trim().is_empty()).then(|| AttrValue::from("Required."))
    };

    let set = |apply: fn(&mut Client, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_save = {
        let form = form.clone();
        let submitted = submitted.clone();
        let message = message.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            submitted.set(true);
            let client = (*form).clone();
            let complete = [
                &client.company_name,
                &client.contact_name,
                &client.company_address,
                &client.company_country,
                &client.company_pin_code,
                &client.company_email,
                &client.company_mobile_no,
            ]
            .iter()
            .all(|field| !field.trim().is_empty());

            if complete {
                message.set(None);
                on_submit.emit(client);
            } else {
                message.set(Some("Please fill in all required fields."));
            }
        })
    };

    html! {
        <div class="min-h-screen bg-blue-300 flex items-center justify-center p-4 relative">
            <div class="absolute top-4 right-4">
                <button
                    onclick={nav_cb(&navigator, Route::Clients)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Client List"}
                </button>
            </div>

            <div class="bg-white p-6 md:p-10 rounded-xl shadow-xl w-full max-w-2xl space-y-4">
                <h1 class="text-2xl font-bold mb-4">{&props.heading}</h1>

                if let Some(message) = *message {
                    <p class="text-red-600 text-center">{message}</p>
                }

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <FormField
                        label="Company Name"
                        required=true
                        value={form.company_name.clone()}
                        error={err(&form.company_name)}
                        on_input={set(|c, v| c.company_name = v)}
                    />
                    <FormField
                        label="Contact Name"
                        required=true
                        value={form.contact_name.clone()}
                        error={err(&form.contact_name)}
                        on_input={set(|c, v| c.contact_name = v)}
                    />
                    <FormField
                        label="Company Address"
                        required=true
                        value={form.company_address.clone()}
                        error={err(&form.company_address)}
                        on_input={set(|c, v| c.company_address = v)}
                    />
                    <FormField
                        label="Country"
                        required=true
                        value={form.company_country.clone()}
                        error={err(&form.company_country)}
                        on_input={set(|c, v| c.company_country = v)}
                    />
                    <FormField
                        label="Pin Code"
                        required=true
                        value={form.company_pin_code.clone()}
                        error={err(&form.company_pin_code)}
                        on_input={set(|c, v| c.company_pin_code = v)}
                    />
                    <FormField
                        label="Email"
                        required=true
                        input_type="email"
                        value={form.company_email.clone()}
                        error={err(&form.company_email)}
                        on_input={set(|c, v| c.company_email = v)}
                    />
                    <FormField
                        label="Mobile No"
                        required=true
                        value={form.company_mobile_no.clone()}
                        error={err(&form.company_mobile_no)}
                        on_input={set(|c, v| c.company_mobile_no = v)}
                    />
                    <FormField
                        label="Logo URL"
                        value={form.logo_url.clone()}
                        on_input={set(|c, v| c.logo_url = v)}
                    />
                </div>

                <div class="flex justify-center gap-6 pt-4">
                    <button
                        onclick={on_save}
                        class="bg-green-600 text-white px-6 py-2 rounded hover:bg-green-700"
                    >
                        {"Save"}
                    </button>
                    <button
                        onclick={nav_cb(&navigator, Route::Clients)}
                        class="bg-gray-500 text-white px-6 py-2 rounded hover:bg-gray-600"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
