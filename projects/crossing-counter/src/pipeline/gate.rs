use crate::pipeline::types::LightState;

/// Returns true iff counting is permitted under the given light state.
///
/// Fail-closed: only a positively classified green opens the gate. Red and
/// unknown/ambiguous reads both keep it shut.
pub fn permits_counting(light: LightState) -> bool {
    matches!(light, LightState::Green)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_green_permits() {
        assert!(permits_counting(LightState::Green));
        assert!(!permits_counting(LightState::Red));
        assert!(!permits_counting(LightState::Unknown));
    }
}
