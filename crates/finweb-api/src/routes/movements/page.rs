//! Movements page rendering - Full page endpoint

use crate::{or_default, AppState};
use finweb_client::model::Movement;
use finweb_config::CurrencyConfig;
use finweb_utils::escape_html;

pub async fn page_movements(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let movements = or_default(state.client.movements().await, "/movimientos/");

    let rows = render_movement_rows(&movements, &state.config.currency);

    let inner_content = format!(
        r#"<div class='d-flex justify-content-between align-items-center mb-4'>
            <h2 class='fw-bold mb-0'>Movimientos Financieros</h2>
            <span class='text-muted'>{} registros</span>
        </div>
        <div class='card'>
            <div class='table-responsive'>
                <table class='table table-hover align-middle mb-0'>
                    <thead><tr><th>Fecha</th><th>Tipo</th><th>Descripción</th><th>Categoría</th><th class='text-end'>Monto</th></tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
        </div>"#,
        movements.len(),
        rows,
    );

    axum::response::Html(crate::page_response(
        "Movimientos - FinanzApp",
        "/movimientos",
        &inner_content,
    ))
}

/// Render table rows for a list of movements
pub fn render_movement_rows(movements: &[Movement], currency: &CurrencyConfig) -> String {
    if movements.is_empty() {
        return "<tr><td colspan='5' class='text-center text-muted py-4'>Sin movimientos registrados</td></tr>"
            .to_string();
    }

    movements
        .iter()
        .map(|movement| {
            let tipo = movement.tipo.as_deref().unwrap_or("-");
            let amount_class = if tipo == "EGRESO" {
                "text-danger"
            } else {
                "text-success"
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class='text-end {}'>{}</td></tr>",
                escape_html(movement.fecha.as_deref().unwrap_or("-")),
                crate::tipo_badge(tipo),
                escape_html(movement.descripcion.as_deref().unwrap_or("-")),
                escape_html(movement.categoria_nombre.as_deref().unwrap_or("-")),
                amount_class,
                currency.format(movement.monto.value()),
            )
        })
        .collect()
}
