//! Wire models for the FinanzApp API
//!
//! Every field is optional or defaultable: the remote contract is consumed
//! as-is, and an absent field is a modeled case rather than a render-time
//! surprise. Field names follow the wire format.

use serde::{Deserialize, Serialize};

/// A monetary amount as the API sends it: either a JSON number or a
/// decimal string (`"1500.00"`). Both normalize to `f64` for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> f64 {
        match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.parse().unwrap_or(0.0),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(0.0)
    }
}

/// Aggregate dashboard figures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_deudores: Option<i64>,
    #[serde(default)]
    pub total_por_cobrar: Option<f64>,
    #[serde(default)]
    pub total_acreedores: Option<i64>,
    #[serde(default)]
    pub total_por_pagar: Option<f64>,
    #[serde(default)]
    pub ingresos_mes: Option<f64>,
    #[serde(default)]
    pub egresos_mes: Option<f64>,
    #[serde(default)]
    pub deudas_vencidas: Option<i64>,
    #[serde(default)]
    pub mis_deudas_vencidas: Option<i64>,
}

/// A person who owes money
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debtor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub documento: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub total_deuda: Amount,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// A debt the user owes to a creditor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnDebt {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub acreedor_nombre: Option<String>,
    #[serde(default)]
    pub concepto: Option<String>,
    #[serde(default)]
    pub tipo_deuda: Option<String>,
    #[serde(default)]
    pub monto_original: Amount,
    #[serde(default)]
    pub saldo_pendiente: Amount,
    #[serde(default)]
    pub cuota_mensual: Option<Amount>,
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
    #[serde(default)]
    pub prioridad: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// An income or expense record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub categoria_nombre: Option<String>,
    #[serde(default)]
    pub monto: Amount,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub metodo_pago: Option<String>,
}

/// A financial category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub naturaleza: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Chart payload for the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub ingresos_egresos_meses: Vec<MonthlyFlow>,
    #[serde(default)]
    pub gastos_por_categoria: Vec<CategorySpend>,
}

/// Income vs expense for one month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyFlow {
    #[serde(default)]
    pub mes: Option<String>,
    #[serde(default)]
    pub ingresos: Amount,
    #[serde(default)]
    pub egresos: Amount,
}

/// Spend aggregated per category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySpend {
    #[serde(default, rename = "categoria__nombre")]
    pub categoria_nombre: Option<String>,
    #[serde(default)]
    pub total: Amount,
}

/// Collection endpoints answer either with a bare array or with a
/// paginated envelope carrying a `results` field. Both decode to the
/// same list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results } => results,
            ListResponse::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_number_and_text() {
        let n: Amount = serde_json::from_str("1500.5").unwrap();
        assert_eq!(n.value(), 1500.5);

        let s: Amount = serde_json::from_str(r#""1500.00""#).unwrap();
        assert_eq!(s.value(), 1500.0);

        let garbage: Amount = serde_json::from_str(r#""n/a""#).unwrap();
        assert_eq!(garbage.value(), 0.0);

        assert_eq!(Amount::default().value(), 0.0);
    }

    #[test]
    fn test_stats_missing_fields_are_modeled() {
        let stats: DashboardStats = serde_json::from_str(r#"{"total_por_cobrar": 500}"#).unwrap();
        assert_eq!(stats.total_por_cobrar, Some(500.0));
        assert_eq!(stats.total_por_pagar, None);
        assert_eq!(stats.deudas_vencidas, None);
    }

    #[test]
    fn test_stats_ignores_unknown_fields() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"total_por_cobrar": 1, "extra": {"nested": true}}"#).unwrap();
        assert_eq!(stats.total_por_cobrar, Some(1.0));
    }

    #[test]
    fn test_list_response_both_shapes() {
        let plain: ListResponse<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_vec(), vec![1, 2, 3]);

        let paginated: ListResponse<i64> =
            serde_json::from_str(r#"{"count": 3, "next": null, "previous": null, "results": [1, 2, 3]}"#)
                .unwrap();
        assert_eq!(paginated.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_movement_with_string_amount() {
        let movement: Movement = serde_json::from_str(
            r#"{"tipo": "INGRESO", "descripcion": "Salario", "monto": "2500000.00", "fecha": "2025-07-01"}"#,
        )
        .unwrap();
        assert_eq!(movement.monto.value(), 2500000.0);
        assert_eq!(movement.tipo.as_deref(), Some("INGRESO"));
        assert_eq!(movement.categoria_nombre, None);
    }

    #[test]
    fn test_category_spend_wire_name() {
        let spend: CategorySpend =
            serde_json::from_str(r#"{"categoria__nombre": "Mercado", "total": 350000.0}"#).unwrap();
        assert_eq!(spend.categoria_nombre.as_deref(), Some("Mercado"));
        assert_eq!(spend.total.value(), 350000.0);
    }
}
