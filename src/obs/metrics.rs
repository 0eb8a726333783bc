// self
use crate::obs::ActionOutcome;

/// Records a dispatch outcome via the global metrics recorder (when enabled).
pub fn record_action_outcome(action: &str, outcome: ActionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"security_client_action_total",
			"action" => action.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (action, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_action_outcome_noop_without_metrics() {
		record_action_outcome("clear_cache", ActionOutcome::Failure);
	}
}
