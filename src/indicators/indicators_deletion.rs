//! Deletion handler guarding indicator types.

use std::sync::Arc;

use log::warn;

use crate::deletion::{
    DeletionCandidate, DeletionEvent, DeletionListener, ListenerResult, ObjectKind, VetoReason,
};

use super::IndicatorRepositoryTrait;

/// Vetoes deletion of an indicator type while indicators still use it.
pub struct IndicatorDeletionHandler {
    indicators: Arc<dyn IndicatorRepositoryTrait>,
}

impl IndicatorDeletionHandler {
    pub fn new(indicators: Arc<dyn IndicatorRepositoryTrait>) -> Self {
        Self { indicators }
    }
}

impl DeletionListener for IndicatorDeletionHandler {
    fn name(&self) -> &str {
        "IndicatorDeletionHandler"
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::IndicatorType
    }

    fn on_deletion_requested(&self, event: &DeletionEvent) -> ListenerResult {
        let DeletionCandidate::IndicatorType(indicator_type) = event.candidate() else {
            return Ok(());
        };

        let referencing = match self.indicators.get_indicators_by_type(&indicator_type.id) {
            Ok(indicators) => indicators.len(),
            Err(err) => {
                warn!(
                    "Failed to look up indicators for type {}: {}",
                    indicator_type.id, err
                );
                return Err(VetoReason::new(
                    self.name(),
                    ObjectKind::IndicatorType,
                    &indicator_type.name,
                    "its references could not be verified",
                ));
            }
        };

        if referencing > 0 {
            return Err(VetoReason::new(
                self.name(),
                ObjectKind::IndicatorType,
                &indicator_type.name,
                format!(
                    "it is still referenced by {} indicator{}",
                    referencing,
                    if referencing == 1 { "" } else { "s" }
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{InMemoryIndicatorRepository, IndicatorType, NewIndicator};
    use chrono::Utc;

    fn percent_type() -> IndicatorType {
        let now = Utc::now().naive_utc();
        IndicatorType {
            id: "it-1".to_string(),
            name: "Percent".to_string(),
            factor: 100,
            number: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_vetoes_when_indicators_use_type() {
        let indicators = Arc::new(InMemoryIndicatorRepository::new());
        for i in 0..2 {
            indicators
                .create_indicator(NewIndicator {
                    id: None,
                    name: format!("Coverage {i}"),
                    indicator_type_id: "it-1".to_string(),
                    numerator: "#{a}".to_string(),
                    denominator: "#{b}".to_string(),
                    annualized: false,
                })
                .await
                .unwrap();
        }

        let handler = IndicatorDeletionHandler::new(indicators);
        let veto = handler
            .on_deletion_requested(&DeletionEvent::new(percent_type()))
            .unwrap_err();

        assert_eq!(veto.kind, ObjectKind::IndicatorType);
        assert!(veto.message.contains("2 indicators"));
    }

    #[test]
    fn test_allows_when_type_is_unused() {
        let indicators = Arc::new(InMemoryIndicatorRepository::new());
        let handler = IndicatorDeletionHandler::new(indicators);

        assert!(handler
            .on_deletion_requested(&DeletionEvent::new(percent_type()))
            .is_ok());
    }
}
