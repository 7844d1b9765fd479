//! Debtors page rendering - Full page endpoint

use crate::{active_badge, or_default, AppState};
use finweb_utils::escape_html;

pub async fn page_debtors(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let debtors = or_default(state.client.debtors().await, "/deudores/");

    let currency = &state.config.currency;

    let rows: String = if debtors.is_empty() {
        "<tr><td colspan='6' class='text-center text-muted py-4'>Sin deudores registrados</td></tr>"
            .to_string()
    } else {
        debtors
            .iter()
            .map(|debtor| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class='text-end fw-bold'>{}</td><td>{}</td></tr>",
                    escape_html(debtor.nombre.as_deref().unwrap_or("-")),
                    escape_html(debtor.documento.as_deref().unwrap_or("-")),
                    escape_html(debtor.telefono.as_deref().unwrap_or("-")),
                    escape_html(debtor.email.as_deref().unwrap_or("-")),
                    currency.format(debtor.total_deuda.value()),
                    active_badge(debtor.activo.unwrap_or(false)),
                )
            })
            .collect()
    };

    let inner_content = format!(
        r#"<div class='d-flex justify-content-between align-items-center mb-4'>
            <h2 class='fw-bold mb-0'>Deudores</h2>
            <span class='text-muted'>{} registros</span>
        </div>
        <div class='card'>
            <div class='table-responsive'>
                <table class='table table-hover align-middle mb-0'>
                    <thead><tr><th>Nombre</th><th>Documento</th><th>Teléfono</th><th>Email</th><th class='text-end'>Total Deuda</th><th>Estado</th></tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
        </div>"#,
        debtors.len(),
        rows,
    );

    axum::response::Html(crate::page_response(
        "Deudores - FinanzApp",
        "/deudores",
        &inner_content,
    ))
}
