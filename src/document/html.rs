//! HTML expansion of the document model.
//!
//! The invoice template is fixed, so instead of a templating engine the
//! document is assembled by a typed builder: every interpolated value goes
//! through [`escape`], conditional sections are plain `if`s, and the item
//! table is a loop. The output is one standalone page with an embedded
//! stylesheet and no external assets, so rasterizing it later is reproducible.
//!
//! Page geometry for print (A4, uniform 20px margins, backgrounds kept) is
//! part of the stylesheet, keeping the PDF engine free of layout knowledge.

use std::fmt::Write;

use super::DocumentModel;

/// Stylesheet embedded into every rendered invoice.
const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        @page {
            size: A4;
            margin: 20px;
        }

        body {
            font-family: 'Arial', sans-serif;
            font-size: 14px;
            line-height: 1.6;
            color: #333;
            background: white;
            direction: ltr;
        }

        .container {
            max-width: 800px;
            margin: 0 auto;
            padding: 40px;
        }

        .header {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            margin-bottom: 40px;
            border-bottom: 3px solid #3b82f6;
            padding-bottom: 20px;
        }

        .company-info {
            flex: 1;
        }

        .company-name {
            font-size: 28px;
            font-weight: bold;
            color: #1e3a8a;
            margin-bottom: 10px;
        }

        .company-details {
            color: #666;
            line-height: 1.4;
        }

        .invoice-title {
            text-align: right;
            flex: 1;
        }

        .invoice-title h2 {
            font-size: 36px;
            color: #1e3a8a;
            margin-bottom: 10px;
        }

        .invoice-number {
            font-size: 18px;
            color: #666;
            margin-bottom: 5px;
        }

        .invoice-info {
            display: flex;
            justify-content: space-between;
            margin-bottom: 40px;
        }

        .client-info, .invoice-details {
            flex: 1;
        }

        .client-info {
            margin-right: 40px;
        }

        .section-title {
            font-size: 16px;
            font-weight: bold;
            color: #1e3a8a;
            margin-bottom: 10px;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .client-details, .invoice-meta {
            background: #f8fafc;
            padding: 15px;
            border-radius: 8px;
            border-left: 4px solid #3b82f6;
        }

        .items-table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 30px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
            overflow: hidden;
        }

        .items-table th {
            background: #3b82f6;
            color: white;
            padding: 15px 10px;
            text-align: left;
            font-weight: bold;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .items-table td {
            padding: 12px 10px;
            border-bottom: 1px solid #e5e7eb;
        }

        .items-table tr:nth-child(even) {
            background: #f9fafb;
        }

        .text-right {
            text-align: right;
        }

        .text-center {
            text-align: center;
        }

        .totals {
            margin-left: auto;
            width: 300px;
        }

        .totals-table {
            width: 100%;
            border-collapse: collapse;
        }

        .totals-table td {
            padding: 8px 10px;
            border-bottom: 1px solid #e5e7eb;
        }

        .totals-table .label {
            font-weight: bold;
            text-align: right;
        }

        .totals-table .amount {
            text-align: right;
            width: 100px;
        }

        .total-row {
            background: #1e3a8a;
            color: white;
            font-weight: bold;
            font-size: 16px;
        }

        .total-row td {
            border-bottom: none;
        }

        .notes-section {
            margin-top: 40px;
        }

        .notes, .terms {
            background: #f8fafc;
            padding: 20px;
            border-radius: 8px;
            margin-bottom: 20px;
            border-left: 4px solid #10b981;
        }

        .terms {
            border-left-color: #f59e0b;
        }

        .footer {
            text-align: center;
            margin-top: 40px;
            padding-top: 20px;
            border-top: 2px solid #e5e7eb;
            color: #666;
            font-size: 12px;
        }

        .status-badge {
            display: inline-block;
            padding: 6px 12px;
            border-radius: 20px;
            font-size: 12px;
            font-weight: bold;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .status-draft { background: #f3f4f6; color: #374151; }
        .status-sent { background: #dbeafe; color: #1e40af; }
        .status-paid { background: #d1fae5; color: #065f46; }
        .status-overdue { background: #fee2e2; color: #991b1b; }
        .status-cancelled { background: #f3f4f6; color: #374151; }

        @media print {
            .container {
                padding: 20px;
            }

            body {
                -webkit-print-color-adjust: exact;
                print-color-adjust: exact;
            }
        }
"#;

/// Escape text for interpolation into HTML, so client-supplied strings
/// (names, notes, descriptions) cannot inject markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A field counts as present only when it holds a non-blank value.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Street / "city, state zip" / country lines shared by both address blocks.
fn push_address_lines(
    html: &mut String,
    address: &Option<String>,
    city: &Option<String>,
    state: &Option<String>,
    zip_code: &Option<String>,
    country: &Option<String>,
) {
    if let Some(address) = present(address) {
        let _ = writeln!(html, "                    {}<br>", escape(address));
    }
    if let Some(city) = present(city) {
        let mut line = escape(city);
        if let Some(state) = present(state) {
            line.push_str(", ");
            line.push_str(&escape(state));
        }
        if let Some(zip) = present(zip_code) {
            line.push(' ');
            line.push_str(&escape(zip));
        }
        let _ = writeln!(html, "                    {}<br>", line);
    }
    if let Some(country) = present(country) {
        let _ = writeln!(html, "                    {}<br>", escape(country));
    }
}

/// A `<strong>Label:</strong> value<br>` contact line.
fn push_labeled_line(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "                    <strong>{}:</strong> {}<br>",
        escape(label),
        escape(value)
    );
}

/// An optional text section: title plus a styled block, omitted entirely
/// when the value is empty or absent.
fn push_text_section(html: &mut String, title: &str, class: &str, value: &Option<String>) {
    if let Some(text) = present(value) {
        let _ = writeln!(
            html,
            "            <div class=\"section-title\">{}</div>",
            escape(title)
        );
        let _ = writeln!(
            html,
            "            <div class=\"{}\">{}</div>",
            class,
            escape(text)
        );
    }
}

/// Expand the document model into a complete standalone HTML page.
pub fn render(model: &DocumentModel) -> String {
    let invoice = model.invoice;
    let pd = model.personal_data;
    let client = &invoice.client;
    let t = model.labels;

    let mut html = String::with_capacity(16 * 1024);

    // Head
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", model.language.as_str());
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "    <meta charset=\"UTF-8\">");
    let _ = writeln!(
        html,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    );
    let _ = writeln!(
        html,
        "    <title>{} {}</title>",
        escape(t.invoice),
        escape(&invoice.invoice_number)
    );
    let _ = writeln!(html, "    <style>{}    </style>", STYLE);
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "    <div class=\"container\">");

    // Header: issuer block and invoice title
    let _ = writeln!(html, "        <div class=\"header\">");
    let _ = writeln!(html, "            <div class=\"company-info\">");
    let _ = writeln!(
        html,
        "                <div class=\"company-name\">{}</div>",
        escape(&pd.business_name)
    );
    let _ = writeln!(html, "                <div class=\"company-details\">");
    push_address_lines(
        &mut html,
        &pd.address,
        &pd.city,
        &pd.state,
        &pd.zip_code,
        &pd.country,
    );
    if let Some(phone) = present(&pd.phone) {
        push_labeled_line(&mut html, t.phone, phone);
    }
    push_labeled_line(&mut html, t.email, &pd.email);
    if let Some(website) = present(&pd.website) {
        push_labeled_line(&mut html, t.website, website);
    }
    if let Some(tax_id) = present(&pd.tax_id) {
        push_labeled_line(&mut html, t.tax_id, tax_id);
    }
    let _ = writeln!(html, "                </div>");
    let _ = writeln!(html, "            </div>");
    let _ = writeln!(html, "            <div class=\"invoice-title\">");
    let _ = writeln!(html, "                <h2>{}</h2>", escape(t.invoice));
    let _ = writeln!(
        html,
        "                <div class=\"invoice-number\"># {}</div>",
        escape(&invoice.invoice_number)
    );
    let _ = writeln!(html, "            </div>");
    let _ = writeln!(html, "        </div>");

    // Two-column bill-to / details block
    let _ = writeln!(html, "        <div class=\"invoice-info\">");
    let _ = writeln!(html, "            <div class=\"client-info\">");
    let _ = writeln!(
        html,
        "                <div class=\"section-title\">{}</div>",
        escape(t.bill_to)
    );
    let _ = writeln!(html, "                <div class=\"client-details\">");
    let _ = writeln!(
        html,
        "                    <strong>{}</strong><br>",
        escape(&client.name)
    );
    push_address_lines(
        &mut html,
        &client.address,
        &client.city,
        &client.state,
        &client.zip_code,
        &client.country,
    );
    if let Some(phone) = present(&client.phone) {
        push_labeled_line(&mut html, t.phone, phone);
    }
    push_labeled_line(&mut html, t.email, &client.email);
    if let Some(tax_id) = present(&client.tax_id) {
        push_labeled_line(&mut html, t.tax_id, tax_id);
    }
    let _ = writeln!(html, "                </div>");
    let _ = writeln!(html, "            </div>");

    let _ = writeln!(html, "            <div class=\"invoice-details\">");
    let _ = writeln!(
        html,
        "                <div class=\"section-title\">{}</div>",
        escape(t.details)
    );
    let _ = writeln!(html, "                <div class=\"invoice-meta\">");
    push_labeled_line(&mut html, t.issue_date, &model.issue_date_formatted);
    push_labeled_line(&mut html, t.due_date, &model.due_date_formatted);
    let _ = writeln!(
        html,
        "                    <span class=\"status-badge status-{}\">{}</span>",
        invoice.status.as_str(),
        escape(model.status_display)
    );
    let _ = writeln!(html, "                </div>");
    let _ = writeln!(html, "            </div>");
    let _ = writeln!(html, "        </div>");

    // Line items: the header always renders, rows only for supplied items
    let _ = writeln!(html, "        <table class=\"items-table\">");
    let _ = writeln!(html, "            <thead>");
    let _ = writeln!(html, "                <tr>");
    let _ = writeln!(
        html,
        "                    <th style=\"width: 50%;\">{}</th>",
        escape(t.description)
    );
    let _ = writeln!(
        html,
        "                    <th style=\"width: 15%;\" class=\"text-center\">{}</th>",
        escape(t.quantity)
    );
    let _ = writeln!(
        html,
        "                    <th style=\"width: 15%;\" class=\"text-right\">{}</th>",
        escape(t.unit_price)
    );
    let _ = writeln!(
        html,
        "                    <th style=\"width: 20%;\" class=\"text-right\">{}</th>",
        escape(t.total)
    );
    let _ = writeln!(html, "                </tr>");
    let _ = writeln!(html, "            </thead>");
    let _ = writeln!(html, "            <tbody>");
    for item in &model.items {
        let _ = writeln!(html, "                <tr>");
        let _ = writeln!(
            html,
            "                    <td>{}</td>",
            escape(item.description)
        );
        let _ = writeln!(
            html,
            "                    <td class=\"text-center\">{}</td>",
            escape(&item.quantity_display)
        );
        let _ = writeln!(
            html,
            "                    <td class=\"text-right\">{}</td>",
            escape(&item.unit_price_formatted)
        );
        let _ = writeln!(
            html,
            "                    <td class=\"text-right\">{}</td>",
            escape(&item.total_formatted)
        );
        let _ = writeln!(html, "                </tr>");
    }
    let _ = writeln!(html, "            </tbody>");
    let _ = writeln!(html, "        </table>");

    // Totals, with the tax row only when a tax rate applies
    let _ = writeln!(html, "        <div class=\"totals\">");
    let _ = writeln!(html, "            <table class=\"totals-table\">");
    let _ = writeln!(html, "                <tr>");
    let _ = writeln!(
        html,
        "                    <td class=\"label\">{}:</td>",
        escape(t.subtotal)
    );
    let _ = writeln!(
        html,
        "                    <td class=\"amount\">{}</td>",
        escape(&model.subtotal_formatted)
    );
    let _ = writeln!(html, "                </tr>");
    if invoice.tax_rate != 0.0 {
        let _ = writeln!(html, "                <tr>");
        let _ = writeln!(
            html,
            "                    <td class=\"label\">{} ({}%):</td>",
            escape(t.tax),
            escape(&model.tax_rate_display)
        );
        let _ = writeln!(
            html,
            "                    <td class=\"amount\">{}</td>",
            escape(&model.tax_amount_formatted)
        );
        let _ = writeln!(html, "                </tr>");
    }
    let _ = writeln!(html, "                <tr class=\"total-row\">");
    let _ = writeln!(
        html,
        "                    <td class=\"label\">{}:</td>",
        escape(t.total)
    );
    let _ = writeln!(
        html,
        "                    <td class=\"amount\">{}</td>",
        escape(&model.total_formatted)
    );
    let _ = writeln!(html, "                </tr>");
    let _ = writeln!(html, "            </table>");
    let _ = writeln!(html, "        </div>");

    // Optional trailing sections
    let _ = writeln!(html, "        <div class=\"notes-section\">");
    push_text_section(&mut html, t.notes, "notes", &invoice.notes);
    push_text_section(&mut html, t.terms_and_conditions, "terms", &invoice.terms);
    push_text_section(
        &mut html,
        t.payment_instructions,
        "notes",
        &pd.payment_instructions,
    );
    push_text_section(&mut html, t.bank_details, "notes", &pd.bank_details);
    let _ = writeln!(html, "        </div>");

    // Footer
    let _ = writeln!(html, "        <div class=\"footer\">");
    let _ = writeln!(
        html,
        "            <p>{} {}</p>",
        escape(t.generated_on),
        escape(&model.generated_date)
    );
    let _ = writeln!(html, "        </div>");

    let _ = writeln!(html, "    </div>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_replaces_markup_characters() {
        assert_eq!(
            escape("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape("Año fiscal: Señor Pérez"), "Año fiscal: Señor Pérez");
    }

    #[test]
    fn test_present_filters_blank_values() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("".to_string())), None);
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&Some(" x ".to_string())), Some("x"));
    }
}
