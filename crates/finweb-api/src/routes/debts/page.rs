//! Own debts page rendering - Full page endpoint

use crate::{or_default, AppState};
use finweb_utils::escape_html;

pub async fn page_debts(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    let debts = or_default(state.client.own_debts().await, "/mis-deudas/");

    let currency = &state.config.currency;

    let rows: String = if debts.is_empty() {
        "<tr><td colspan='7' class='text-center text-muted py-4'>Sin deudas registradas</td></tr>"
            .to_string()
    } else {
        debts
            .iter()
            .map(|debt| {
                let cuota = debt
                    .cuota_mensual
                    .as_ref()
                    .map(|amount| currency.format(amount.value()))
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td class='text-end fw-bold'>{}</td><td class='text-end'>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(debt.acreedor_nombre.as_deref().unwrap_or("-")),
                    escape_html(debt.concepto.as_deref().unwrap_or("-")),
                    escape_html(debt.tipo_deuda.as_deref().unwrap_or("-")),
                    currency.format(debt.saldo_pendiente.value()),
                    cuota,
                    escape_html(debt.fecha_vencimiento.as_deref().unwrap_or("-")),
                    estado_badge(debt.estado.as_deref().unwrap_or("-")),
                )
            })
            .collect()
    };

    let inner_content = format!(
        r#"<div class='d-flex justify-content-between align-items-center mb-4'>
            <h2 class='fw-bold mb-0'>Mis Deudas</h2>
            <span class='text-muted'>{} registros</span>
        </div>
        <div class='card'>
            <div class='table-responsive'>
                <table class='table table-hover align-middle mb-0'>
                    <thead><tr><th>Acreedor</th><th>Concepto</th><th>Tipo</th><th class='text-end'>Saldo Pendiente</th><th class='text-end'>Cuota Mensual</th><th>Vencimiento</th><th>Estado</th></tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
        </div>"#,
        debts.len(),
        rows,
    );

    axum::response::Html(crate::page_response(
        "Mis Deudas - FinanzApp",
        "/mis-deudas",
        &inner_content,
    ))
}

/// Badge for a debt state
fn estado_badge(estado: &str) -> String {
    let class = match estado {
        "PAGADA" => "badge bg-success",
        "PENDIENTE" => "badge bg-warning text-dark",
        "PARCIAL" => "badge bg-info text-dark",
        "VENCIDA" => "badge bg-danger",
        _ => "badge bg-secondary",
    };
    format!("<span class='{}'>{}</span>", class, escape_html(estado))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_badge_states() {
        assert!(estado_badge("PAGADA").contains("bg-success"));
        assert!(estado_badge("VENCIDA").contains("bg-danger"));
        assert!(estado_badge("PENDIENTE").contains("bg-warning"));
        assert!(estado_badge("REFINANCIADA").contains("bg-secondary"));
    }
}
