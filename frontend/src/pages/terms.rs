// Term master - payment terms, kept only in browser storage

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    ConfirmDialog, FormField, Pagination, SuccessModal, page_count, page_slice,
};
use crate::pages::clients::nav_cb;
use crate::storage::TermStore;
use remit_shared::TermRecord;

// ===== Term List =====

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    let navigator = use_navigator().unwrap();
    let terms = use_state(|| TermStore::new().list());
    let page = use_state(|| 1usize);
    let confirm_delete = use_state(|| None::<TermRecord>);
    let success = use_state(|| None::<String>);

    let on_confirm_delete = {
        let terms = terms.clone();
        let confirm_delete = confirm_delete.clone();
        let success = success.clone();
        Callback::from(move |_| {
            let Some(record) = (*confirm_delete).clone() else {
                return;
            };
            let store = TermStore::new();
            store.delete(record.id);
            terms.set(store.list());
            confirm_delete.set(None);
            success.set(Some("Term deleted successfully.".to_string()));
        })
    };

    let rows = page_slice(&terms, *page);
    let total_pages = page_count(terms.len());

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
                <h1 class="text-2xl font-bold mb-6">{"Term List"}</h1>
                <button
                    onclick={nav_cb(&navigator, Route::TermAdd)}
                    class="mb-4 bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-700"
                >
                    {"Add New Term"}
                </button>

                if rows.is_empty() {
                    <p class="text-gray-500">{"No terms available."}</p>
                } else {
                    <>
                    <table class="min-w-full bg-white shadow-md rounded-lg overflow-hidden">
                        <thead>
                            <tr class="bg-gray-200 text-left">
                                <th class="py-3 px-4">{"Term"}</th>
                                <th class="py-3 px-4">{"Description"}</th>
                                <th class="py-3 px-4 text-center">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|record| {
                                let edit = {
                                    let navigator = navigator.clone();
                                    let id = record.id;
                                    Callback::from(move |_| {
                                        navigator.push(&Route::TermEdit { id })
                                    })
                                };
                                let ask_delete = {
                                    let confirm_delete = confirm_delete.clone();
                                    let record = record.clone();
                                    Callback::from(move |_| confirm_delete.set(Some(record.clone())))
                                };
                                html! {
                                    <tr class="border-t hover:bg-gray-50">
                                        <td class="py-2 px-4">{&record.term}</td>
                                        <td class="py-2 px-4">{&record.description}</td>
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
                    message="Are you sure you want to delete this term?"
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

#[function_component(TermAddPage)]
pub fn term_add_page() -> Html {
    let navigator = use_navigator().unwrap();
    let saved = use_state(|| false);

    let on_submit = {
        let saved = saved.clone();
        Callback::from(move |(term, description): (String, String)| {
            TermStore::new().add(&term, &description);
            saved.set(true);
        })
    };

    html! {
        <>
            <TermForm heading="Add Term" term="" description="" {on_submit} />
            if *saved {
                <SuccessModal
                    message="Term added successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Terms)
                    })}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TermEditProps {
    pub id: i64,
}

#[function_component(TermEditPage)]
pub fn term_edit_page(props: &TermEditProps) -> Html {
    let navigator = use_navigator().unwrap();
    let saved = use_state(|| false);
    let record = TermStore::new().get(props.id);

    let Some(record) = record else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300 p-4">
                <div class="p-6 max-w-md w-full bg-white rounded-lg shadow-lg text-center">
                    <p class="text-red-600 mb-4">{"Term not found."}</p>
                    <button
                        onclick={nav_cb(&navigator, Route::Terms)}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        {"Back to Terms"}
                    </button>
                </div>
            </div>
        };
    };

    let on_submit = {
        let saved = saved.clone();
        let id = props.id;
        Callback::from(move |(term, description): (String, String)| {
            if TermStore::new().update(id, &term, &description) {
                saved.set(true);
            }
        })
    };

    html! {
        <>
            <TermForm
                heading="Edit Term"
                term={record.term}
                description={record.description}
                {on_submit}
            />
            if *saved {
                <SuccessModal
                    message="Term updated successfully."
                    on_close={Callback::from({
                        let navigator = navigator.clone();
                        move |_| navigator.push(&Route::Terms)
                    })}
                />
            }
        </>
    }
}

// ===== Shared form =====

#[derive(Properties, PartialEq)]
struct TermFormProps {
    heading: AttrValue,
    term: AttrValue,
    description: AttrValue,
    on_submit: Callback<(String, String)>,
}

#[function_component(TermForm)]
fn term_form(props: &TermFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let term = use_state(|| props.term.to_string());
    let description = use_state(|| props.description.to_string());
    let submitted = use_state(|| false);

    let term_error =
        (*submitted && term.trim().is_empty()).then(|| AttrValue::from("Term is required."));

    let on_save = {
        let term = term.clone();
        let description = description.clone();
        let submitted = submitted.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            submitted.set(true);
            if !term.trim().is_empty() {
                on_submit.emit(((*term).clone(), (*description).clone()));
            }
        })
    };

    html! {
        <div class="min-h-screen bg-blue-400 flex items-center justify-center p-4 relative">
            <div class="absolute top-4 right-4">
                <button
                    onclick={nav_cb(&navigator, Route::Terms)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600"
                >
                    {"Term List"}
                </button>
            </div>

            <div class="bg-white p-6 md:p-10 rounded-xl shadow-xl w-full max-w-xl space-y-6">
                <h1 class="text-2xl font-bold mb-2">{&props.heading}</h1>

                <FormField
                    label="Term"
                    required=true
                    value={(*term).clone()}
                    placeholder="Enter term"
                    error={term_error}
                    on_input={Callback::from({
                        let term = term.clone();
                        move |v| term.set(v)
                    })}
                />
                <FormField
                    label="Description"
                    value={(*description).clone()}
                    placeholder="Enter description"
                    on_input={Callback::from({
                        let description = description.clone();
                        move |v| description.set(v)
                    })}
                />

                <button
                    onclick={on_save}
                    class="bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700"
                >
                    {"Save Term"}
                </button>
            </div>
        </div>
    }
}
