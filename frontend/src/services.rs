// API service layer for communicating with the backend
use gloo_net::http::Request;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use wasm_bindgen::JsValue;
use web_sys::FormData;

const API_BASE_URL: &str = "/api";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn network_error(e: impl std::fmt::Display) -> ApiError {
    ApiError {
        message: e.to_string(),
        code: Some("NETWORK_ERROR".to_string()),
    }
}

fn parse_error(e: impl std::fmt::Display) -> ApiError {
    ApiError {
        message: e.to_string(),
        code: Some("PARSE_ERROR".to_string()),
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError {
        message: format!("{e:?}"),
        code: Some("SERIALIZE_ERROR".to_string()),
    }
}

async fn status_error(response: gloo_net::http::Response) -> ApiError {
    response.json::<ApiError>().await.unwrap_or(ApiError {
        message: format!("HTTP Error: {}", response.status()),
        code: Some(format!("HTTP_{}", response.status())),
    })
}

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    async fn request(method: &str, endpoint: &str) -> ApiResult<gloo_net::http::Response> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "GET" => Request::get(&url),
            "PATCH" => Request::patch(&url),
            "DELETE" => Request::delete(&url),
            _ => {
                return Err(ApiError {
                    message: "Invalid method".to_string(),
                    code: None,
                });
            }
        };

        let response = req.send().await.map_err(network_error)?;
        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }

    async fn request_with_body<B: Serialize>(
        method: &str,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<gloo_net::http::Response> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => {
                return Err(ApiError {
                    message: "Invalid method".to_string(),
                    code: None,
                });
            }
        };

        let response = req
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(network_error)?;

        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }

    // GET request returning JSON
    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let response = Self::request("GET", endpoint).await?;
        response.json::<T>().await.map_err(parse_error)
    }

    // GET request returning a plain string body
    pub async fn get_text(endpoint: &str) -> ApiResult<String> {
        let response = Self::request("GET", endpoint).await?;
        response.text().await.map_err(parse_error)
    }

    // POST request returning JSON
    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let response = Self::request_with_body("POST", endpoint, body).await?;
        response.json::<T>().await.map_err(parse_error)
    }

    // POST request where the response body is irrelevant
    pub async fn post_no_content<B: Serialize>(endpoint: &str, body: &B) -> ApiResult<()> {
        Self::request_with_body("POST", endpoint, body).await?;
        Ok(())
    }

    // PUT request returning JSON
    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let response = Self::request_with_body("PUT", endpoint, body).await?;
        response.json::<T>().await.map_err(parse_error)
    }

    // PUT request where the response body is irrelevant
    pub async fn put_no_content<B: Serialize>(endpoint: &str, body: &B) -> ApiResult<()> {
        Self::request_with_body("PUT", endpoint, body).await?;
        Ok(())
    }

    // Bodyless PATCH (flag toggles carried in the query string)
    pub async fn patch_no_content(endpoint: &str) -> ApiResult<()> {
        Self::request("PATCH", endpoint).await?;
        Ok(())
    }

    // DELETE request
    pub async fn delete(endpoint: &str) -> ApiResult<()> {
        Self::request("DELETE", endpoint).await?;
        Ok(())
    }

    // Multipart POST; the browser sets the multipart boundary header itself
    pub async fn post_form(endpoint: &str, form: FormData) -> ApiResult<()> {
        let url = format!("{}{}", API_BASE_URL, endpoint);
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(network_error)?;

        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

// ============================================
// COMPANIES SERVICE
// ============================================

pub mod companies {
    use super::*;
    use remit_shared::Client;

    pub async fn list() -> ApiResult<Vec<Client>> {
        ApiClient::get("/companies").await
    }

    pub async fn get(id: &str) -> ApiResult<Client> {
        ApiClient::get(&format!("/companies/{}", id)).await
    }

    pub async fn create(client: &Client) -> ApiResult<Client> {
        ApiClient::post("/companies", client).await
    }

    pub async fn update(id: &str, client: &Client) -> ApiResult<Client> {
        ApiClient::put(&format!("/companies/{}", id), client).await
    }

    pub async fn delete(id: &str) -> ApiResult<()> {
        ApiClient::delete(&format!("/companies/{}", id)).await
    }
}

// ============================================
// ITEM MASTER SERVICE
// ============================================

pub mod items {
    use super::*;
    use remit_shared::CatalogItem;

    pub async fn list() -> ApiResult<Vec<CatalogItem>> {
        ApiClient::get("/itemMaster").await
    }

    pub async fn get(id: &str) -> ApiResult<CatalogItem> {
        ApiClient::get(&format!("/itemMaster/{}", id)).await
    }

    pub async fn create(item: &CatalogItem) -> ApiResult<()> {
        ApiClient::post_no_content("/itemMaster", item).await
    }

    pub async fn update(id: &str, item: &CatalogItem) -> ApiResult<()> {
        ApiClient::put_no_content(&format!("/itemMaster/{}", id), item).await
    }

    pub async fn delete(id: &str) -> ApiResult<()> {
        ApiClient::delete(&format!("/itemMaster/{}", id)).await
    }
}

// ============================================
// INVOICES SERVICE
// ============================================

pub mod invoices {
    use super::*;
    use remit_shared::{AmountSummary, Invoice};

    pub async fn list() -> ApiResult<Vec<Invoice>> {
        ApiClient::get("/invoices").await
    }

    pub async fn create(invoice: &Invoice) -> ApiResult<Invoice> {
        ApiClient::post("/invoices", invoice).await
    }

    pub async fn update(id: &str, invoice: &Invoice) -> ApiResult<()> {
        ApiClient::put_no_content(&format!("/invoices/{}", id), invoice).await
    }

    // Soft delete: the row keeps existing with is_delete = "1".
    pub async fn soft_delete(id: &str) -> ApiResult<()> {
        ApiClient::patch_no_content(&format!("/invoices/{}/is-delete?isDelete=1", id)).await
    }

    pub async fn amounts(id: &str) -> ApiResult<AmountSummary> {
        ApiClient::get(&format!("/invoices/{}/with-amounts", id)).await
    }

    // Non-transactional preview; the committed number may differ.
    pub async fn preview_invoice_no() -> ApiResult<String> {
        ApiClient::get_text("/invoices/preview-invoice-no").await
    }
}

// ============================================
// PAYMENTS SERVICE
// ============================================

pub mod payments {
    use super::*;
    use remit_shared::Payment;

    pub async fn list() -> ApiResult<Vec<Payment>> {
        ApiClient::get("/payment").await
    }

    pub async fn create(payment: &Payment) -> ApiResult<()> {
        ApiClient::post_no_content("/payment", payment).await
    }
}

// ============================================
// MAIL SERVICE
// ============================================

pub mod mail {
    use super::*;
    use js_sys::{Array, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag};

    /// Package the rendered PDF and dispatch it by email to the invoice's
    /// billing contact (resolved server-side from the invoice number).
    pub async fn send_invoice_pdf(invoice_no: &str, pdf_bytes: &[u8]) -> ApiResult<()> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(pdf_bytes));
        let options = BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;

        let form = FormData::new().map_err(js_error)?;
        form.append_with_str("invoiceNo", invoice_no).map_err(js_error)?;
        form.append_with_blob_and_filename("pdf", &blob, "invoice.pdf")
            .map_err(js_error)?;

        ApiClient::post_form("/mail/send-email", form).await
    }
}
