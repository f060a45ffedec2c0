use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod pdf;
mod services;
mod storage;

use pages::{
    clients::{ClientAddPage, ClientEditPage, ClientsPage},
    home::HomePage,
    invoice_add::InvoiceAddPage,
    invoice_edit::InvoiceEditPage,
    invoice_view::InvoiceViewPage,
    invoices::InvoicesPage,
    items::{ItemAddPage, ItemEditPage, ItemsPage},
    payments::{PaymentAddPage, PaymentsPage},
    receipt::ReceiptPage,
    terms::{TermAddPage, TermEditPage, TermsPage},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/clients")]
    Clients,
    #[at("/clients/add")]
    ClientAdd,
    #[at("/clients/edit/:id")]
    ClientEdit { id: String },
    #[at("/items")]
    Items,
    #[at("/items/add")]
    ItemAdd,
    #[at("/items/edit/:id")]
    ItemEdit { id: String },
    #[at("/terms")]
    Terms,
    #[at("/terms/add")]
    TermAdd,
    #[at("/terms/edit/:id")]
    TermEdit { id: i64 },
    #[at("/invoices")]
    Invoices,
    #[at("/invoices/add")]
    InvoiceAdd,
    #[at("/invoices/edit/:id")]
    InvoiceEdit { id: String },
    #[at("/invoices/view")]
    InvoiceView,
    #[at("/payments")]
    Payments,
    #[at("/payments/invoice/:invoice_no")]
    PaymentsFor { invoice_no: String },
    #[at("/payments/add")]
    PaymentAdd,
    #[at("/payments/add/:invoice_no")]
    PaymentAddFor { invoice_no: String },
    #[at("/payments/receipt")]
    Receipt,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Clients => html! { <ClientsPage /> },
        Route::ClientAdd => html! { <ClientAddPage /> },
        Route::ClientEdit { id } => html! { <ClientEditPage {id} /> },
        Route::Items => html! { <ItemsPage /> },
        Route::ItemAdd => html! { <ItemAddPage /> },
        Route::ItemEdit { id } => html! { <ItemEditPage {id} /> },
        Route::Terms => html! { <TermsPage /> },
        Route::TermAdd => html! { <TermAddPage /> },
        Route::TermEdit { id } => html! { <TermEditPage {id} /> },
        Route::Invoices => html! { <InvoicesPage /> },
        Route::InvoiceAdd => html! { <InvoiceAddPage /> },
        Route::InvoiceEdit { id } => html! { <InvoiceEditPage {id} /> },
        Route::InvoiceView => html! { <InvoiceViewPage /> },
        Route::Payments => html! { <PaymentsPage invoice_no={None::<String>} /> },
        Route::PaymentsFor { invoice_no } => {
            html! { <PaymentsPage invoice_no={Some(invoice_no)} /> }
        }
        Route::PaymentAdd => html! { <PaymentAddPage invoice_no={None::<String>} /> },
        Route::PaymentAddFor { invoice_no } => {
            html! { <PaymentAddPage invoice_no={Some(invoice_no)} /> }
        }
        Route::Receipt => html! { <ReceiptPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-blue-300">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-gray-800">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-600">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

// Interactive controls carry `print-hidden`; printable documents normalize to
// A4 with page chrome stripped.
const PRINT_CSS: &str = "
@media print {
  body { margin: 0; padding: 0; background: #fff; }
  .print-hidden { display: none !important; }
  .print-document {
    box-shadow: none !important;
    border: none !important;
    margin: 0 !important;
    width: 100% !important;
    max-width: 210mm !important;
  }
  table { width: 100% !important; border-collapse: collapse !important; }
  thead tr {
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
  }
  @page { size: A4; margin: 0.5in; }
}
";

fn main() {
    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    // Load Tailwind CSS
    let tailwind = document.create_element("link").unwrap();
    tailwind
        .set_attribute(
            "href",
            "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css",
        )
        .unwrap();
    tailwind.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&tailwind).unwrap();

    // Print stylesheet
    let print_style = document.create_element("style").unwrap();
    print_style.set_text_content(Some(PRINT_CSS));
    head.append_child(&print_style).unwrap();

    yew::Renderer::<App>::new().render();
}
