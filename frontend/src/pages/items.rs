// Item master - billable catalog items

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    ConfirmDialog, FormField, Pagination, SuccessModal, page_count, page_slice,
};
use crate::pages::clients::nav_cb;
use crate::services;
use remit_shared::CatalogItem;

// ===== Item List =====

#[function_component(ItemsPage)]
pub fn items_page() -> Html {
    let navigator = use_navigator().unwrap();
    let items = use_state(|| None::<Vec<CatalogItem>>);
    let page = use_state(|| 1usize);
    let confirm_delete = use_state(|| None::<CatalogItem>);
    let success = use_state(|| None::<String>);

    let refresh = {
        let items = items.clone();
        move || {
            let items = items.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::list().await {
                    Ok(list) => items.set(Some(list)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch items:", e.to_string());
                        items.set(Some(Vec::new()));
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
            let Some(item) = (*confirm_delete).clone() else {
                return;
            };
            confirm_delete.set(None);
            let success = success.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::delete(&item.id).await {
                    Ok(()) => {
                        success.set(Some("Item deleted successfully.".to_string()));
                        refresh();
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete item:", e.to_string());
                    }
                }
            });
        })
    };

    let rows = items
        .as_ref()
        .map(|list| page_slice(list, *page))
        .unwrap_or_default();
    let total_pages = items
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

            <div class="p-6 max-w-4xl w-full bg-white rounded-lg shadow-lg space-y-6">
                <h1 class="text-3xl font-bold text-center text-gray-800">{"Item List"}</h1>

                <div class="text-right">
                    <button
                        onclick={nav_cb(&navigator, Route::ItemAdd)}
                        class="mb-4 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Add New Item"}
                    </button>
                </div>

                if items.is_none() {
                    <p class="text-center text-gray-500">{"Loading items..."}</p>
                } else if rows.is_empty() {
                    <p class="text-center text-gray-500">{"No items available."}</p>
                } else {
                    <>
                    <table class="w-full border border-gray-300">
                        <thead class="bg-gray-200">
                            <tr>
                                <th class="py-3 px-4 text-left">{"Item Name"}</th>
                                <th class="py-3 px-4 text-left">{"Description"}</th>
                                <th class="py-3 px-4 text-center">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|item| {
                                let edit = {
                                    let navigator = navigator.clone();
                                    let id = item.id.clone();
                                    Callback::from(move |_| {
                                        navigator.push(&Route::ItemEdit { id: id.clone() })
                                    })
                                };
                                let ask_delete = {
                                    let confirm_delete = confirm_delete.clone();
                                    let item = item.clone();
                                    Callback::from(move |_| confirm_delete.set(Some(item.clone())))
                                };
                                html! {
                                    <tr class="border-t hover:bg-gray-50">
                                        <td class="py-2 px-4">{&item.item_name}</td>
                                        <td class="py-2 px-4">{&item.description}</td>
                                        <td class="py-2 px-4 text-center">
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
                    message="Are you sure you want to delete this item?"
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

#[function_component(ItemAddPage)]
pub fn item_add_page() -> Html {
    let navigator = use_navigator().unwrap();
    let saved = use_state(|| false);

    let on_submit = {
        let saved = saved.clone();
        Callback::from(move |item: CatalogItem| {
            let saved = saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::create(&item).await {
                    Ok(()) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to create item:", e.to_string());
                    }
                }
            });
        })
    };

    let initial = CatalogItem {
        id: String::new(),
        item_name: String::new(),
        description: String::new(),
    };

    html! {
        <>
            <ItemForm heading="Add Item" {initial} {on_submit} />
            if *saved {
                <SuccessModal
                    message="Item added successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Items)
                    })}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemEditProps {
    pub id: String,
}

#[function_component(ItemEditPage)]
pub fn item_edit_page(props: &ItemEditProps) -> Html {
    let navigator = use_navigator().unwrap();
    let item = use_state(|| None::<CatalogItem>);
    let saved = use_state(|| false);
    let load_error = use_state(|| None::<String>);

    {
        let item = item.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::get(&id).await {
                    Ok(found) => item.set(Some(found)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch item:", e.to_string());
                        load_error.set(Some("Failed to load item. Please try again.".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let saved = saved.clone();
        let id = props.id.clone();
        Callback::from(move |mut item: CatalogItem| {
            item.id = id.clone();
            let saved = saved.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::update(&id, &item).await {
                    Ok(()) => saved.set(true),
                    Err(e) => {
                        gloo::console::error!("Failed to update item:", e.to_string());
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
                        onclick={nav_cb(&navigator, Route::Items)}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Back to Items"}
                    </button>
                </div>
            </div>
        };
    }

    let Some(loaded) = (*item).clone() else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300">
                <p class="text-lg text-gray-700">{"Loading item..."}</p>
            </div>
        };
    };

    html! {
        <>
            <ItemForm heading="Edit Item" initial={loaded} {on_submit} />
            if *saved {
                <SuccessModal
                    message="Item updated successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Items)
                    })}
                />
            }
        </>
    }
}

// ===== Shared form =====

#[derive(Properties, PartialEq)]
struct ItemFormProps {
    heading: AttrValue,
    initial: CatalogItem,
    on_submit: Callback<CatalogItem>,
}

#[function_component(ItemForm)]
fn item_form(props: &ItemFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let form = use_state(|| props.initial.clone());
    let submitted = use_state(|| false);

    let name_error = (*submitted && form.item_name.trim().is_empty())
        .then(|| AttrValue::from("Item name is required."));

    let on_name = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.item_name = value;
            form.set(next);
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.description = value;
            form.set(next);
        })
    };

    let on_save = {
        let form = form.clone();
        let submitted = submitted.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            submitted.set(true);
            if !form.item_name.trim().is_empty() {
                on_submit.emit((*form).clone());
            }
        })
    };

    html! {
        <div class="min-h-screen bg-blue-300 flex items-center justify-center p-4 relative">
            <div class="absolute top-4 right-4">
                <button
                    onclick={nav_cb(&navigator, Route::Items)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Item List"}
                </button>
            </div>

            <div class="bg-white p-6 md:p-10 rounded-xl shadow-xl w-full max-w-xl space-y-6">
                <h1 class="text-2xl font-bold mb-2">{&props.heading}</h1>

                <FormField
                    label="Item Name"
                    required=true
                    value={form.item_name.clone()}
                    placeholder="Enter item name"
                    error={name_error}
                    on_input={on_name}
                />
                <FormField
                    label="Description"
                    value={form.description.clone()}
                    placeholder="Enter description"
                    on_input={on_description}
                />

                <div class="flex justify-center gap-6 pt-2">
                    <button
                        onclick={on_save}
                        class="bg-green-600 text-white px-6 py-2 rounded hover:bg-green-700"
                    >
                        {"Save"}
                    </button>
                    <button
                        onclick={nav_cb(&navigator, Route::Items)}
                        class="bg-gray-500 text-white px-6 py-2 rounded hover:bg-gray-600"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
