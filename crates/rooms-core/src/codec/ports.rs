use rooms_model::{LabelError, LabelResult, Labels, PortConfig, keys};

use super::required;

/// Read the port configuration: `mux` if present, otherwise the `epr.min` / `epr.max` pair.
///
/// A range with `min > max` is rejected.
pub fn decode_ports(labels: &Labels) -> LabelResult<PortConfig> {
    if let Some(raw) = labels.get(keys::MUX) {
        return Ok(PortConfig::single(parse_port(keys::MUX, raw)?));
    }

    let min = parse_port(keys::EPR_MIN, required(labels, keys::EPR_MIN)?)?;
    let max = parse_port(keys::EPR_MAX, required(labels, keys::EPR_MAX)?)?;
    PortConfig::range(min, max)
}

/// Write the port configuration; never emits both forms.
pub fn encode_ports(ports: &PortConfig, labels: &mut Labels) {
    match *ports {
        PortConfig::Single(port) => {
            labels.insert(keys::MUX, port.to_string());
        }
        PortConfig::Range { min, max } => {
            labels
                .insert(keys::EPR_MIN, min.to_string())
                .insert(keys::EPR_MAX, max.to_string());
        }
    }
}

/// Plain decimal digits only: no sign, no whitespace.
fn parse_port(key: &'static str, raw: &str) -> LabelResult<u16> {
    let invalid = |reason: String| LabelError::Parse {
        key,
        value: raw.to_string(),
        reason,
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits".to_string()));
    }
    raw.parse::<u16>().map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> Labels {
        pairs.iter().copied().collect()
    }

    #[test]
    fn range_requires_both_bounds() {
        let err = decode_ports(&labels(&[(keys::EPR_MAX, "10")])).unwrap_err();
        assert_eq!(err, LabelError::MissingField(keys::EPR_MIN));

        let err = decode_ports(&labels(&[(keys::EPR_MIN, "10")])).unwrap_err();
        assert_eq!(err, LabelError::MissingField(keys::EPR_MAX));
    }

    #[test]
    fn min_is_parsed_before_max_is_required() {
        let err = decode_ports(&labels(&[(keys::EPR_MIN, "x")])).unwrap_err();
        assert!(matches!(err, LabelError::Parse { key, .. } if key == keys::EPR_MIN));
    }

    #[test]
    fn rejects_values_outside_u16() {
        for bad in ["65536", "-1", "+1", " 1", "", "80a", "1.5"] {
            let err = decode_ports(&labels(&[(keys::MUX, bad)])).unwrap_err();
            match err {
                LabelError::Parse { key, value, .. } => {
                    assert_eq!(key, keys::MUX);
                    assert_eq!(value, bad);
                }
                other => panic!("expected parse failure for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_signed_range_bounds() {
        let err = decode_ports(&labels(&[(keys::EPR_MIN, "+1"), (keys::EPR_MAX, "2")]))
            .unwrap_err();
        assert!(matches!(err, LabelError::Parse { key, .. } if key == keys::EPR_MIN));

        let err = decode_ports(&labels(&[(keys::EPR_MIN, "1"), (keys::EPR_MAX, "+2")]))
            .unwrap_err();
        assert!(matches!(err, LabelError::Parse { key, .. } if key == keys::EPR_MAX));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = decode_ports(&labels(&[(keys::EPR_MIN, "52010"), (keys::EPR_MAX, "52000")]))
            .unwrap_err();
        assert_eq!(err, LabelError::InvalidRange { min: 52010, max: 52000 });
    }

    #[test]
    fn accepts_boundary_ports() {
        let ports =
            decode_ports(&labels(&[(keys::EPR_MIN, "0"), (keys::EPR_MAX, "65535")])).unwrap();
        assert_eq!(ports, PortConfig::Range { min: 0, max: 65535 });
    }

    #[test]
    fn encode_single_writes_mux_only() {
        let mut out = Labels::new();
        encode_ports(&PortConfig::Single(52100), &mut out);
        assert_eq!(out, labels(&[(keys::MUX, "52100")]));
    }
}
