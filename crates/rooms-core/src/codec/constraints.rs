use rooms_model::{Constraint, ConstraintAction, LabelError, LabelResult, Labels, keys};

/// Read the auto-expiry rules. Absent or disabled block yields no rules.
pub(super) fn decode_constraints(labels: &Labels) -> LabelResult<Vec<Constraint>> {
    if labels.get(keys::CONSTRAINS) != Some(keys::ENABLED) {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();

    if let Some(raw) = labels.get(keys::CONSTRAINS_TTL_TIME) {
        out.push(Constraint::TimeToLive {
            seconds: parse_seconds(keys::CONSTRAINS_TTL_TIME, raw)?,
            action: action(labels, keys::CONSTRAINS_TTL_ACTION)?,
        });
    }

    if let Some(raw) = labels.get(keys::CONSTRAINS_EMPTY_THRESHOLD) {
        out.push(Constraint::EmptyRoom {
            threshold_seconds: parse_seconds(keys::CONSTRAINS_EMPTY_THRESHOLD, raw)?,
            action: action(labels, keys::CONSTRAINS_EMPTY_ACTION)?,
        });
    }

    Ok(out)
}

/// Write the auto-expiry rules. Nothing is written for an empty list.
///
/// At most one rule of each kind is stored; a later rule of the same kind wins.
pub(super) fn encode_constraints(constraints: &[Constraint], labels: &mut Labels) {
    if constraints.is_empty() {
        return;
    }

    labels.insert(keys::CONSTRAINS, keys::ENABLED);
    for constraint in constraints {
        match *constraint {
            Constraint::TimeToLive { seconds, action } => {
                labels
                    .insert(keys::CONSTRAINS_TTL_TIME, seconds.to_string())
                    .insert(keys::CONSTRAINS_TTL_ACTION, action.as_str());
            }
            Constraint::EmptyRoom {
                threshold_seconds,
                action,
            } => {
                labels
                    .insert(keys::CONSTRAINS_EMPTY_THRESHOLD, threshold_seconds.to_string())
                    .insert(keys::CONSTRAINS_EMPTY_ACTION, action.as_str());
            }
        }
    }
}

fn parse_seconds(key: &'static str, raw: &str) -> LabelResult<u64> {
    let invalid = |reason: String| LabelError::Parse {
        key,
        value: raw.to_string(),
        reason,
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits".to_string()));
    }
    raw.parse::<u64>().map_err(|e| invalid(e.to_string()))
}

fn action(labels: &Labels, key: &'static str) -> LabelResult<ConstraintAction> {
    labels
        .get(key)
        .map(str::parse::<ConstraintAction>)
        .transpose()
        .map(Option::unwrap_or_default)
}
