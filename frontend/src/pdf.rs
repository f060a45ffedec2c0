// Invoice document export.
//
// Renders the invoice as a structured A4 PDF with the builtin Helvetica
// faces and returns the bytes in memory; the caller decides whether to mail
// them. The layout mirrors the printable invoice view: issuer block, bill-to
// block, line-item table, totals, thanks note.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use remit_shared::{Invoice, issuer, money};
use rust_decimal::Decimal;

const WIDTH: Mm = Mm(210.0);
const HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 18.0;
const LEFT: f32 = MARGIN;
const RIGHT: f32 = 210.0 - MARGIN;
const TOP: f32 = 297.0 - MARGIN;
const BOTTOM: f32 = MARGIN;

const ROW_HEIGHT: f32 = 9.0;
const ITEMS_PER_PAGE: usize = 20;

const FONT_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 9.0;
const TITLE_SIZE: f32 = 24.0;

// Column anchors for the item table.
const COL_NR: f32 = LEFT;
const COL_ITEM: f32 = LEFT + 10.0;
const COL_QTY_RIGHT: f32 = 120.0;
const COL_RATE_RIGHT: f32 = 155.0;
const COL_AMOUNT_RIGHT: f32 = RIGHT;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render `invoice` into PDF bytes. Long item lists continue onto further
/// pages with the table header repeated.
pub fn render_to_pdf(invoice: &Invoice) -> Result<Vec<u8>, printpdf::Error> {
    let title = if invoice.invoice_no.is_empty() {
        "Invoice".to_string()
    } else {
        format!("Invoice {}", invoice.invoice_no)
    };

    let (doc, page1, layer1) = PdfDocument::new(&title, WIDTH, HEIGHT, "invoice");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let first = doc.get_page(page1).get_layer(layer1);
    first.set_outline_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
    first.set_outline_thickness(0.4);

    let header_bottom = draw_header(invoice, &first, &fonts);

    let pages = invoice.items.chunks(ITEMS_PER_PAGE).count().max(1);
    for page_nr in 0..pages {
        let start = page_nr * ITEMS_PER_PAGE;
        let end = (start + ITEMS_PER_PAGE).min(invoice.items.len());
        let chunk = &invoice.items[start..end];

        let (layer, top) = if page_nr == 0 {
            (first.clone(), header_bottom)
        } else {
            let (page_idx, layer_idx) = doc.add_page(WIDTH, HEIGHT, format!("invoice{page_nr}"));
            let layer = doc.get_page(page_idx).get_layer(layer_idx);
            layer.set_outline_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
            layer.set_outline_thickness(0.4);
            (layer, TOP)
        };

        let after_table = draw_table(invoice, chunk, start, top, &layer, &fonts);
        if page_nr + 1 == pages {
            draw_totals(invoice, after_table, &layer, &fonts);
        }
    }

    doc.save_to_bytes()
}

// Issuer block, title, bill-to block and the date/terms column. Returns the
// y cursor where the table may start.
fn draw_header(invoice: &Invoice, layer: &PdfLayerReference, fonts: &Fonts) -> f32 {
    let mut y = TOP;

    layer.use_text(issuer::NAME, FONT_SIZE + 1.0, Mm(LEFT), Mm(y), &fonts.bold);
    y -= 5.0;
    for line in [issuer::ADDRESS, issuer::CITY, issuer::EMAIL, issuer::WEBSITE] {
        layer.use_text(line, SMALL_SIZE, Mm(LEFT), Mm(y), &fonts.regular);
        y -= 4.2;
    }

    text_right(layer, "INVOICE", TITLE_SIZE, COL_AMOUNT_RIGHT, TOP, &fonts.bold);
    let number_line = format!("Invoice# {}", invoice.invoice_no);
    text_right(
        layer,
        &number_line,
        FONT_SIZE,
        COL_AMOUNT_RIGHT,
        TOP - 10.0,
        &fonts.regular,
    );

    y -= 10.0;
    let block_top = y;
    layer.use_text("Bill To", FONT_SIZE, Mm(LEFT), Mm(y), &fonts.bold);
    y -= 5.0;
    layer.use_text(
        invoice.invoice_company_name.as_str(),
        FONT_SIZE,
        Mm(LEFT),
        Mm(y),
        &fonts.bold,
    );
    y -= 4.5;
    for line in [
        invoice.invoice_company_address.as_str(),
        invoice.invoice_country.as_str(),
        invoice.invoice_pin_code.as_str(),
    ] {
        if line.is_empty() {
            continue;
        }
        layer.use_text(line, SMALL_SIZE, Mm(LEFT), Mm(y), &fonts.regular);
        y -= 4.2;
    }

    let mut right_y = block_top;
    for (label, value) in [
        ("Invoice Date:", invoice.invoice_date.as_str()),
        ("Terms:", invoice.invoice_terms.as_str()),
        ("Due Date:", invoice.due_date.as_str()),
    ] {
        layer.use_text(label, SMALL_SIZE, Mm(130.0), Mm(right_y), &fonts.regular);
        text_right(layer, value, SMALL_SIZE, COL_AMOUNT_RIGHT, right_y, &fonts.regular);
        right_y -= 5.0;
    }

    y = y.min(right_y) - 6.0;
    if !invoice.invoice_consultant_name.is_empty() {
        layer.use_text(
            format!("Consultant Name: {}", invoice.invoice_consultant_name),
            SMALL_SIZE,
            Mm(LEFT),
            Mm(y),
            &fonts.regular,
        );
        y -= 6.0;
    }
    y
}

fn draw_table(
    invoice: &Invoice,
    chunk: &[remit_shared::LineItem],
    offset: usize,
    mut y: f32,
    layer: &PdfLayerReference,
    fonts: &Fonts,
) -> f32 {
    rule(layer, y + 3.0);
    layer.use_text("#", FONT_SIZE, Mm(COL_NR), Mm(y - 2.0), &fonts.bold);
    layer.use_text(
        "Item & Description",
        FONT_SIZE,
        Mm(COL_ITEM),
        Mm(y - 2.0),
        &fonts.bold,
    );
    text_right(layer, "Qty", FONT_SIZE, COL_QTY_RIGHT, y - 2.0, &fonts.bold);
    text_right(layer, "Rate", FONT_SIZE, COL_RATE_RIGHT, y - 2.0, &fonts.bold);
    text_right(layer, "Amount", FONT_SIZE, COL_AMOUNT_RIGHT, y - 2.0, &fonts.bold);
    y -= ROW_HEIGHT;
    rule(layer, y + 3.0);

    let currency = invoice.invoice_currency.as_str();
    for (i, item) in chunk.iter().enumerate() {
        let label = match &item.description {
            Some(desc) => format!("{} - {}", item.item_name, desc),
            None => item.item_name.clone(),
        };
        layer.use_text(
            (offset + i + 1).to_string(),
            SMALL_SIZE,
            Mm(COL_NR),
            Mm(y - 2.0),
            &fonts.regular,
        );
        layer.use_text(label, SMALL_SIZE, Mm(COL_ITEM), Mm(y - 2.0), &fonts.regular);
        text_right(
            layer,
            &item.qty.to_string(),
            SMALL_SIZE,
            COL_QTY_RIGHT,
            y - 2.0,
            &fonts.regular,
        );
        text_right(
            layer,
            &money::format(item.rate, currency),
            SMALL_SIZE,
            COL_RATE_RIGHT,
            y - 2.0,
            &fonts.regular,
        );
        text_right(
            layer,
            &money::format(item.amount, currency),
            SMALL_SIZE,
            COL_AMOUNT_RIGHT,
            y - 2.0,
            &fonts.regular,
        );
        y -= ROW_HEIGHT;
        rule(layer, y + 3.0);
    }
    y
}

fn draw_totals(invoice: &Invoice, mut y: f32, layer: &PdfLayerReference, fonts: &Fonts) {
    let total: Decimal = invoice.items.iter().map(|item| item.amount).sum();
    let formatted = money::format(total, &invoice.invoice_currency);

    y -= 4.0;
    for (label, font) in [("Sub Total", &fonts.regular), ("Total", &fonts.bold)] {
        layer.use_text(label, FONT_SIZE, Mm(COL_RATE_RIGHT - 25.0), Mm(y), font);
        text_right(layer, &formatted, FONT_SIZE, COL_AMOUNT_RIGHT, y, font);
        y -= 6.0;
    }
    layer.use_text(
        "Balance Due",
        FONT_SIZE,
        Mm(COL_RATE_RIGHT - 25.0),
        Mm(y),
        &fonts.bold,
    );
    text_right(layer, &formatted, FONT_SIZE, COL_AMOUNT_RIGHT, y, &fonts.bold);
    y -= 12.0;

    if y > BOTTOM + 10.0 {
        layer.use_text("Notes", FONT_SIZE, Mm(LEFT), Mm(y), &fonts.bold);
        y -= 5.0;
        layer.use_text(
            invoice.thanks_note.as_str(),
            SMALL_SIZE,
            Mm(LEFT),
            Mm(y),
            &fonts.regular,
        );
    }
}

fn rule(layer: &PdfLayerReference, y: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(LEFT), Mm(y)), false),
            (Point::new(Mm(RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

// Builtin fonts expose no metrics here; approximate Helvetica at half an em
// per character for right alignment. 1 pt = 0.3528 mm.
fn text_right(
    layer: &PdfLayerReference,
    text: &str,
    font_size: f32,
    right_edge: f32,
    y: f32,
    font: &IndirectFontRef,
) {
    let width = text.chars().count() as f32 * font_size * 0.5 * 0.3528;
    layer.use_text(text, font_size, Mm(right_edge - width), Mm(y), font);
}

#[cfg(test)]
mod tests {
    use super::*;
    use remit_shared::LineItem;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn invoice_with_items(count: usize) -> Invoice {
        let items = (0..count)
            .map(|i| LineItem {
                id: i as i64 + 1,
                item_name: format!("Line {}", i + 1),
                description: Some("consulting".to_string()),
                qty: dec("2"),
                rate: dec("50.00"),
                amount: dec("100.00"),
            })
            .collect();
        Invoice {
            id: "inv-1".to_string(),
            invoice_no: "INV-019".to_string(),
            invoice_date: "2024-01-01".to_string(),
            invoice_terms: "Net 30".to_string(),
            due_date: "2024-01-31".to_string(),
            invoice_company_name: "Acme Corp".to_string(),
            invoice_company_address: "1 Acme Way".to_string(),
            invoice_country: "USA".to_string(),
            invoice_pin_code: "10001".to_string(),
            invoice_email: "billing@acme.test".to_string(),
            invoice_mobile_no: "+1 555 0100".to_string(),
            invoice_consultant_name: "J. Smith".to_string(),
            invoice_currency: "USD".to_string(),
            invoice_status: "New".to_string(),
            company_name: issuer::NAME.to_string(),
            company_address: issuer::ADDRESS.to_string(),
            company_mobile_no: issuer::MOBILE.to_string(),
            company_email: issuer::EMAIL.to_string(),
            thanks_note: "Thank you for your business!".to_string(),
            items,
            is_delete: None,
            total_amount: None,
            paid_amount: None,
            pending_amount: None,
        }
    }

    #[test]
    fn renders_a_pdf_blob() {
        let bytes = render_to_pdf(&invoice_with_items(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn empty_item_list_still_renders() {
        let bytes = render_to_pdf(&invoice_with_items(0)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_item_lists_grow_the_document() {
        let one_page = render_to_pdf(&invoice_with_items(3)).unwrap();
        let two_pages = render_to_pdf(&invoice_with_items(ITEMS_PER_PAGE + 5)).unwrap();
        assert!(two_pages.len() > one_page.len());
    }
}
