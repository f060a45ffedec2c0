// Landing page with section navigation

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use remit_shared::issuer;

struct Section {
    title: &'static str,
    blurb: &'static str,
    route: Route,
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().unwrap();

    let sections = [
        Section {
            title: "Clients",
            blurb: "Companies you invoice",
            route: Route::Clients,
        },
        Section {
            title: "Items",
            blurb: "Billable catalog items",
            route: Route::Items,
        },
        Section {
            title: "Terms",
            blurb: "Payment term master",
            route: Route::Terms,
        },
        Section {
            title: "Invoices",
            blurb: "Raise, edit and send invoices",
            route: Route::Invoices,
        },
        Section {
            title: "Payments",
            blurb: "Record payments and receipts",
            route: Route::Payments,
        },
    ];

    html! {
        <div class="min-h-screen bg-blue-300 p-8">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-10">
                    <h1 class="text-3xl font-bold text-gray-800">{"Remit"}</h1>
                    <p class="text-gray-700 mt-1">{issuer::NAME}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for sections.iter().map(|section| {
                        let navigator = navigator.clone();
                        let route = section.route.clone();
                        let onclick = Callback::from(move |_| navigator.push(&route));
                        html! {
                            <div
                                {onclick}
                                class="bg-white rounded-lg shadow-lg p-6 cursor-pointer hover:shadow-xl transition"
                            >
                                <h2 class="text-xl font-semibold text-gray-800">{section.title}</h2>
                                <p class="text-gray-600 mt-1">{section.blurb}</p>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
