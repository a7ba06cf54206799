use crate::domain::a001_contact::ContactId;
use crate::domain::common::define_aggregate_id;
use crate::enums::DealStage;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of a deal
    DealId
);

/// Sales opportunity as returned by `GET /deals/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    /// The backend stores the stage as a nullable column
    #[serde(default)]
    pub stage: Option<DealStage>,
    #[serde(default)]
    pub contact_id: Option<ContactId>,
}

impl Deal {
    /// Stage to display; an unset stage reads as `new`
    pub fn effective_stage(&self) -> DealStage {
        self.stage.unwrap_or_default()
    }
}

/// Payload for `POST /deals/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealDto {
    pub title: String,
    pub amount: f64,
    pub stage: DealStage,
    pub contact_id: Option<ContactId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_stage_reads_as_new() {
        let deal: Deal =
            serde_json::from_str(r#"{"id":1,"title":"Big","amount":50000.0,"stage":null,"contact_id":2}"#)
                .unwrap();
        assert_eq!(deal.stage, None);
        assert_eq!(deal.effective_stage(), DealStage::New);
        assert_eq!(deal.contact_id, Some(ContactId(2)));
    }

    #[test]
    fn test_dto_wire_shape() {
        let dto = DealDto {
            title: "Big".into(),
            amount: 12.5,
            stage: DealStage::Proposal,
            contact_id: None,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"title":"Big","amount":12.5,"stage":"proposal","contact_id":null})
        );
    }
}
