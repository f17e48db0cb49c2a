use crate::error::{Result, SimError};
use crate::page_replacer::PolicyKind;
use crate::reference::{DEFAULT_LENGTH, DEFAULT_RANGE};

/// Parâmetros de uma rodada do simulador.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub frame_count: usize,
    /// Tamanho da reference string gerada.
    pub length: usize,
    /// Páginas sorteadas em `[0, range)`.
    pub range: usize,
    pub seed: Option<u64>,
    pub policies: Vec<PolicyKind>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            frame_count: 3,
            length: DEFAULT_LENGTH,
            range: DEFAULT_RANGE,
            seed: None,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(SimError::FrameCountInvalid(0));
        }
        if self.range == 0 {
            return Err(SimError::RangeInvalid);
        }

        Ok(())
    }
}

/// Interpreta o número de frames digitado pelo usuário.
pub fn parse_frame_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();

    let value: i64 = trimmed.parse().map_err(|source| SimError::InputFormat {
        input: trimmed.to_string(),
        source,
    })?;

    if value < 1 {
        return Err(SimError::FrameCountInvalid(value));
    }

    usize::try_from(value).map_err(|_| SimError::FrameCountInvalid(value))
}

/// `all` vira as três políticas; o resto é separado por vírgula.
pub fn parse_policies(text: &str) -> Result<Vec<PolicyKind>> {
    if text.trim().eq_ignore_ascii_case("all") {
        return Ok(PolicyKind::ALL.to_vec());
    }

    let mut policies: Vec<PolicyKind> = Vec::new();
    for name in text.split(',').filter(|name| !name.trim().is_empty()) {
        let kind: PolicyKind = name.parse()?;
        if !policies.contains(&kind) {
            policies.push(kind);
        }
    }

    if policies.is_empty() {
        return Err(SimError::UnknownPolicy(text.to_string()));
    }

    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_frame_count() {
        assert_eq!(parse_frame_count(" 4\n").unwrap(), 4);
    }

    #[test]
    fn non_integer_is_format_error() {
        assert!(matches!(
            parse_frame_count("três"),
            Err(SimError::InputFormat { input, .. }) if input == "três"
        ));
        assert!(matches!(parse_frame_count(""), Err(SimError::InputFormat { .. })));
        assert!(matches!(parse_frame_count("2.5"), Err(SimError::InputFormat { .. })));
    }

    #[test]
    fn zero_and_negative_are_configuration_errors() {
        assert!(matches!(parse_frame_count("0"), Err(SimError::FrameCountInvalid(0))));
        assert!(matches!(parse_frame_count("-3"), Err(SimError::FrameCountInvalid(-3))));
    }

    #[test]
    fn default_config_matches_generator_defaults() {
        let config = SimConfig::default();

        assert_eq!(config.length, 20);
        assert_eq!(config.range, 10);
        assert_eq!(config.policies, PolicyKind::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_catches_bad_values() {
        let zero_frames = SimConfig {
            frame_count: 0,
            ..SimConfig::default()
        };
        let zero_range = SimConfig {
            range: 0,
            ..SimConfig::default()
        };

        assert!(matches!(zero_frames.validate(), Err(SimError::FrameCountInvalid(0))));
        assert!(matches!(zero_range.validate(), Err(SimError::RangeInvalid)));
    }

    #[test]
    fn parses_policy_lists() {
        assert_eq!(parse_policies("all").unwrap(), PolicyKind::ALL.to_vec());
        assert_eq!(
            parse_policies("opt,fifo,opt").unwrap(),
            vec![PolicyKind::Optimal, PolicyKind::Fifo]
        );
        assert!(parse_policies("fifo,clock").is_err());
        assert!(parse_policies(" , ").is_err());
    }
}
