use crate::domain::a001_contact::ContactId;
use crate::domain::common::define_aggregate_id;
use crate::enums::SaleOrderStatus;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of a sale order
    SaleOrderId
);

/// Customer order as returned by `GET /sales/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: SaleOrderId,
    pub order_number: String,
    #[serde(default)]
    pub contact_id: Option<ContactId>,
    #[serde(default)]
    pub status: SaleOrderStatus,
    #[serde(default)]
    pub total: f64,
}

/// Payload for `POST /sales/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleOrderDto {
    pub order_number: String,
    pub contact_id: Option<ContactId>,
    pub status: SaleOrderStatus,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_model_shape() {
        let order: SaleOrder = serde_json::from_str(
            r#"{"id":7,"order_number":"SO-0007","contact_id":null,"status":"confirmed","total":150.25}"#,
        )
        .unwrap();
        assert_eq!(order.id, SaleOrderId(7));
        assert_eq!(order.contact_id, None);
        assert_eq!(order.status, SaleOrderStatus::Confirmed);
        assert_eq!(order.total, 150.25);
    }

    #[test]
    fn test_missing_status_and_total_default() {
        let order: SaleOrder = serde_json::from_str(r#"{"id":8,"order_number":"SO-0008"}"#).unwrap();
        assert_eq!(order.status, SaleOrderStatus::Draft);
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_dto_serializes_missing_contact_as_null() {
        let dto = SaleOrderDto {
            order_number: "SO-0009".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"order_number":"SO-0009","contact_id":null,"status":"draft","total":0.0})
        );
    }
}
